use crate::constants::seeds;
use crate::errors::PayrollErrorCode;
use crate::events::PaymentProofRecordedEvent;
use crate::state::{Company, Employee, PaymentProof, PaymentStatus};
use crate::utils::{authorize, to_commitment, validate_tx_reference, validate_zk_proof};
use anchor_lang::prelude::*;

/// Account structure for recording a payment proof.
#[derive(Accounts)]
#[instruction(payment_id: u64)]
pub struct RecordPaymentProof<'info> {
    #[account(
        seeds = [seeds::COMPANY, company.authority.as_ref()],
        bump = company.bump,
        constraint = authorize(&company, &authority.key()).is_ok() @ PayrollErrorCode::Unauthorized
    )]
    pub company: Box<Account<'info, Company>>,

    #[account(
        seeds = [seeds::EMPLOYEE, company.key().as_ref(), employee.wallet.as_ref()],
        bump = employee.bump,
        constraint = employee.company == company.key() @ PayrollErrorCode::EmployeeNotFound
    )]
    pub employee: Box<Account<'info, Employee>>,

    /// Proof record, unique per (company, employee wallet, payment id).
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + PaymentProof::INIT_SPACE,
        seeds = [
            seeds::PAYMENT_PROOF,
            company.key().as_ref(),
            employee.wallet.as_ref(),
            payment_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub payment_proof: Box<Account<'info, PaymentProof>>,

    /// Company authority, pays for the proof account.
    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Records the off-chain evidence of a private payment.
///
/// The record is written with status `Completed` and never modified
/// afterwards. No matching `process_payment` is required.
///
/// # Arguments
/// - `ctx`: Context containing the accounts for the proof.
/// - `payment_id`: Caller-chosen identifier, encoded little-endian in the address.
/// - `amount_commitment`: 32-byte commitment to the paid amount.
/// - `zk_proof`: Proof blob, at most 512 bytes.
/// - `external_tx_reference`: Signature of the private transfer, at most 88 bytes.
///
/// # Errors
/// - [`PayrollErrorCode::PaymentProofAlreadyExists`] if the payment id was already used.
/// - [`PayrollErrorCode::InvalidCommitment`] if the commitment is not 32 bytes.
/// - [`PayrollErrorCode::ProofTooLarge`] if the proof exceeds 512 bytes.
/// - [`PayrollErrorCode::InvalidTxReference`] if the reference exceeds 88 bytes.
pub fn record_payment_proof(
    ctx: Context<RecordPaymentProof>,
    payment_id: u64,
    amount_commitment: Vec<u8>,
    zk_proof: Vec<u8>,
    external_tx_reference: String,
) -> Result<()> {
    require!(
        !ctx.accounts.payment_proof.is_initialized(),
        PayrollErrorCode::PaymentProofAlreadyExists
    );
    let amount_commitment = to_commitment(&amount_commitment)?;
    validate_zk_proof(&zk_proof)?;
    validate_tx_reference(&external_tx_reference)?;

    let payment_proof = &mut ctx.accounts.payment_proof;
    payment_proof.payment_id = payment_id;
    payment_proof.employee = ctx.accounts.employee.wallet;
    payment_proof.company = ctx.accounts.company.key();
    payment_proof.amount_commitment = amount_commitment;
    payment_proof.zk_proof = zk_proof;
    payment_proof.external_tx_reference = external_tx_reference;
    payment_proof.status = PaymentStatus::Completed;
    payment_proof.payment_date = Clock::get()?.unix_timestamp;
    payment_proof.bump = ctx.bumps.payment_proof;

    msg!(
        "Payment proof {} recorded for employee {} (tx: {})",
        payment_proof.payment_id,
        payment_proof.employee,
        payment_proof.external_tx_reference
    );

    emit!(PaymentProofRecordedEvent {
        payment_proof: payment_proof.key(),
        company: payment_proof.company,
        wallet: payment_proof.employee,
        payment_id,
        amount_commitment,
        external_tx_reference: payment_proof.external_tx_reference.clone(),
    });

    Ok(())
}
