use crate::constants::{SECONDS_PER_BIWEEK, SECONDS_PER_MONTH, SECONDS_PER_WEEK};
use anchor_lang::prelude::*;

/// Company record owning a treasury and a set of employees
///
/// One company exists per authority: the account address is derived from the
/// authority key, so a second creation for the same authority is rejected.
/// The budget is only ever stored as a commitment produced off-chain.
#[account]
#[derive(InitSpace)]
pub struct Company {
    /// Identity allowed to mutate this company and its employees
    pub authority: Pubkey,
    /// Display name of the company
    #[max_len(50)]
    pub name: String,
    /// Mint of the token used for payouts
    pub payment_token: Pubkey,
    /// Default pay cadence of the company
    pub payment_frequency: PaymentFrequency,
    /// Commitment to the encrypted payroll budget
    pub budget_commitment: [u8; 32],
    /// Number of employees currently in the `Active` state
    pub employee_count: u64,
    /// Number of payments processed, never decremented
    pub total_payments_made: u64,
    /// Unix timestamp of the last processed payment (creation time until then)
    pub last_payment_timestamp: i64,
    /// Unix timestamp at which the next payment is expected
    pub next_payment_due: i64,
    /// Whether the company accepts new employees and payments
    pub is_active: bool,
    /// PDA bump seed of the treasury token account
    pub treasury_bump: u8,
    /// PDA bump seed for account derivation
    pub bump: u8,
    /// Reserved space for future extensions
    pub reserved: [u8; 64],
}

impl Company {
    /// A freshly allocated company account is all zeroes until initialized
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }
}

/// Employee record scoped to a company
///
/// Removal is a soft delete: the record keeps its salary data and payment
/// history, only its status flips to `Inactive`.
#[account]
#[derive(InitSpace)]
pub struct Employee {
    /// Wallet receiving the payouts
    pub wallet: Pubkey,
    /// Company this employee belongs to
    pub company: Pubkey,
    /// Salary ciphertext produced by the off-chain encryption service
    #[max_len(256)]
    pub encrypted_salary: Vec<u8>,
    /// Commitment to the plaintext salary
    pub salary_commitment: [u8; 32],
    /// Pay cadence of this employee, independent of the company default
    pub payment_frequency: PaymentFrequency,
    /// Soft-delete state
    pub status: EmployeeStatus,
    /// Number of payments received, never decremented
    pub total_payments_received: u64,
    /// Unix timestamp at which the employee was added
    pub join_date: i64,
    /// Unix timestamp of the last payment (join date until then)
    pub last_payment_date: i64,
    /// PDA bump seed for account derivation
    pub bump: u8,
}

impl Employee {
    pub fn is_initialized(&self) -> bool {
        self.company != Pubkey::default()
    }

    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}

/// Attestation of a payment settled off-chain
///
/// Stores the opaque artifacts produced by the private transfer relay. The
/// record is written once and never updated.
#[account]
#[derive(InitSpace)]
pub struct PaymentProof {
    /// Caller-supplied identifier, part of the account address
    pub payment_id: u64,
    /// Wallet of the paid employee
    pub employee: Pubkey,
    /// Company that made the payment
    pub company: Pubkey,
    /// Commitment to the paid amount
    pub amount_commitment: [u8; 32],
    /// Zero-knowledge proof blob
    #[max_len(512)]
    pub zk_proof: Vec<u8>,
    /// Reference of the off-chain private transfer transaction
    #[max_len(88)]
    pub external_tx_reference: String,
    /// Settlement status
    pub status: PaymentStatus,
    /// Unix timestamp at which the proof was recorded
    pub payment_date: i64,
    /// PDA bump seed for account derivation
    pub bump: u8,
}

impl PaymentProof {
    pub fn is_initialized(&self) -> bool {
        self.company != Pubkey::default()
    }
}

#[repr(u8)]
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PaymentFrequency {
    Weekly,
    Biweekly,
    Monthly,
}

impl PaymentFrequency {
    /// Length of one pay period in seconds
    pub fn period_seconds(&self) -> i64 {
        match self {
            PaymentFrequency::Weekly => SECONDS_PER_WEEK,
            PaymentFrequency::Biweekly => SECONDS_PER_BIWEEK,
            PaymentFrequency::Monthly => SECONDS_PER_MONTH,
        }
    }
}

#[repr(u8)]
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

#[repr(u8)]
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}
