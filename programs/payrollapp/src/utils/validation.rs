use crate::constants::{
    COMMITMENT_LENGTH, MAX_COMPANY_NAME_LENGTH, MAX_ENCRYPTED_SALARY_SIZE,
    MAX_TX_REFERENCE_LENGTH, MAX_ZK_PROOF_SIZE,
};
use crate::errors::PayrollErrorCode;
use anchor_lang::prelude::*;

/// Converts an opaque commitment into its fixed 32-byte form.
///
/// The bytes are never inspected, only their width is checked.
pub fn to_commitment(bytes: &[u8]) -> Result<[u8; COMMITMENT_LENGTH]> {
    <[u8; COMMITMENT_LENGTH]>::try_from(bytes)
        .map_err(|_| error!(PayrollErrorCode::InvalidCommitment))
}

pub fn validate_company_name(name: &str) -> Result<()> {
    require!(
        !name.is_empty() && name.len() <= MAX_COMPANY_NAME_LENGTH,
        PayrollErrorCode::CompanyNameTooLong
    );
    Ok(())
}

pub fn validate_encrypted_salary(encrypted_salary: &[u8]) -> Result<()> {
    require!(
        !encrypted_salary.is_empty() && encrypted_salary.len() <= MAX_ENCRYPTED_SALARY_SIZE,
        PayrollErrorCode::InvalidEncryptedSalary
    );
    Ok(())
}

pub fn validate_zk_proof(zk_proof: &[u8]) -> Result<()> {
    require!(
        zk_proof.len() <= MAX_ZK_PROOF_SIZE,
        PayrollErrorCode::ProofTooLarge
    );
    Ok(())
}

pub fn validate_tx_reference(external_tx_reference: &str) -> Result<()> {
    require!(
        external_tx_reference.len() <= MAX_TX_REFERENCE_LENGTH,
        PayrollErrorCode::InvalidTxReference
    );
    Ok(())
}
