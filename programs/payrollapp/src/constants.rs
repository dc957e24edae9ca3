/// PDA seeds used throughout the program for account derivation
pub mod seeds {
    /// Seed for company accounts, combined with the authority key
    pub const COMPANY: &[u8] = b"company";

    /// Seed for company treasury token accounts, combined with the company key
    pub const TREASURY: &[u8] = b"treasury";

    /// Seed for employee accounts, combined with the company and wallet keys
    pub const EMPLOYEE: &[u8] = b"employee";

    /// Seed for payment proof accounts, combined with company, wallet and payment id
    pub const PAYMENT_PROOF: &[u8] = b"payment_proof";
}

/// Maximum length of a company name in bytes
pub const MAX_COMPANY_NAME_LENGTH: usize = 50;

/// Maximum number of active employees per company
pub const MAX_EMPLOYEES_PER_COMPANY: u64 = 1000;

/// Width of every commitment stored by the program
pub const COMMITMENT_LENGTH: usize = 32;

/// Space reserved for an encrypted salary blob
pub const MAX_ENCRYPTED_SALARY_SIZE: usize = 256;

/// Maximum size of a zero-knowledge payment proof
pub const MAX_ZK_PROOF_SIZE: usize = 512;

/// Maximum length of an external transaction reference (base58 signature)
pub const MAX_TX_REFERENCE_LENGTH: usize = 88;

/// Seconds in one weekly pay period
pub const SECONDS_PER_WEEK: i64 = 604_800;

/// Seconds in one biweekly pay period
pub const SECONDS_PER_BIWEEK: i64 = 1_209_600;

/// Seconds in one monthly pay period (30 days)
pub const SECONDS_PER_MONTH: i64 = 2_592_000;

cfg_if::cfg_if! {
    if #[cfg(feature = "devnet")] {
        /// Smallest payment accepted by `process_payment`, in base units
        pub const MIN_PAYMENT_AMOUNT: u64 = 1;
    } else {
        /// Smallest payment accepted by `process_payment`, in base units (1 token at 6 decimals)
        pub const MIN_PAYMENT_AMOUNT: u64 = 1_000_000;
    }
}
