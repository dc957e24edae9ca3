use crate::constants::seeds;
use anchor_lang::prelude::*;

/// Derives the company address owned by `authority`.
pub fn find_company_address(authority: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[seeds::COMPANY, authority.as_ref()], &crate::ID)
}

/// Derives the treasury token account address of `company`.
pub fn find_treasury_address(company: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[seeds::TREASURY, company.as_ref()], &crate::ID)
}

/// Derives the employee address for the (`company`, `wallet`) pair.
pub fn find_employee_address(company: &Pubkey, wallet: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[seeds::EMPLOYEE, company.as_ref(), wallet.as_ref()],
        &crate::ID,
    )
}

/// Derives the payment proof address for (`company`, `wallet`, `payment_id`).
///
/// The payment id is encoded as 8 little-endian bytes.
pub fn find_payment_proof_address(
    company: &Pubkey,
    wallet: &Pubkey,
    payment_id: u64,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            seeds::PAYMENT_PROOF,
            company.as_ref(),
            wallet.as_ref(),
            &payment_id.to_le_bytes(),
        ],
        &crate::ID,
    )
}
