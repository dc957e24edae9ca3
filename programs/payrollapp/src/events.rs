use crate::state::PaymentFrequency;
use anchor_lang::prelude::*;

#[event]
pub struct CompanyInitializedEvent {
    pub company: Pubkey,
    pub authority: Pubkey,
    pub treasury: Pubkey,
    pub payment_token: Pubkey,
    pub payment_frequency: PaymentFrequency,
    pub next_payment_due: i64,
}

#[event]
pub struct GetCompanyEvent {
    pub company: Pubkey,
    pub employee_count: u64,
    pub total_payments_made: u64,
}

#[event]
pub struct TreasuryFundedEvent {
    pub company: Pubkey,
    pub amount: u64,
    pub treasury_balance: u64,
}

#[event]
pub struct EmployeeAddedEvent {
    pub company: Pubkey,
    pub employee: Pubkey,
    pub wallet: Pubkey,
    pub payout_account: Pubkey,
    pub payment_frequency: PaymentFrequency,
    pub employee_count: u64,
}

#[event]
pub struct EmployeeSalaryUpdatedEvent {
    pub company: Pubkey,
    pub wallet: Pubkey,
    pub salary_commitment: [u8; 32],
}

#[event]
pub struct EmployeeRemovedEvent {
    pub company: Pubkey,
    pub wallet: Pubkey,
    pub employee_count: u64,
}

/// Only payment counts and the amount commitment are published, never the paid amount
#[event]
pub struct PaymentProcessedEvent {
    pub company: Pubkey,
    pub wallet: Pubkey,
    pub amount_commitment: [u8; 32],
    pub employee_payments_received: u64,
    pub company_payments_made: u64,
    pub timestamp: i64,
}

#[event]
pub struct PaymentProofRecordedEvent {
    pub payment_proof: Pubkey,
    pub company: Pubkey,
    pub wallet: Pubkey,
    pub payment_id: u64,
    pub amount_commitment: [u8; 32],
    pub external_tx_reference: String,
}
