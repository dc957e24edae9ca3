use anchor_lang::prelude::*;

/// Error codes shared by every payroll instruction
#[error_code]
pub enum PayrollErrorCode {
    /// Signer is not the authority recorded on the company
    #[msg("Only the company authority can perform this action")]
    Unauthorized,

    #[msg("Company does not exist")]
    CompanyNotFound,

    #[msg("Company already exists for this authority")]
    CompanyAlreadyExists,

    #[msg("Company name must be between 1 and 50 bytes")]
    CompanyNameTooLong,

    #[msg("Company is marked as inactive")]
    CompanyInactive,

    #[msg("Employee not found in this company")]
    EmployeeNotFound,

    #[msg("Employee already exists in this company")]
    EmployeeAlreadyExists,

    #[msg("Employee is marked as inactive")]
    EmployeeInactive,

    #[msg("Maximum employee limit reached")]
    MaxEmployeesReached,

    /// Commitment is not exactly 32 bytes
    #[msg("Commitment must be exactly 32 bytes")]
    InvalidCommitment,

    #[msg("Encrypted salary must be between 1 and 256 bytes")]
    InvalidEncryptedSalary,

    #[msg("ZK proof exceeds 512 bytes")]
    ProofTooLarge,

    #[msg("External transaction reference exceeds 88 bytes")]
    InvalidTxReference,

    #[msg("Payment proof already recorded for this payment id")]
    PaymentProofAlreadyExists,

    /// Amount is below `MIN_PAYMENT_AMOUNT`
    #[msg("Payment amount is below the minimum")]
    BelowMinimum,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Company treasury has insufficient balance")]
    InsufficientTreasuryBalance,

    /// Payout token account is not owned by the employee wallet or uses another mint
    #[msg("Invalid payout destination")]
    InvalidPayoutDestination,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Arithmetic underflow")]
    ArithmeticUnderflow,
}
