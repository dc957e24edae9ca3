use anchor_lang::prelude::*;
use instructions::*;
use state::PaymentFrequency;

// Program ID declaration
declare_id!("EjtbAFGyCcfv7utKePvdiDuEk76PMCsHcFdH1dr8Pnzr");

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

/// The main program module for the payroll ledger.
///
/// A company authority registers a company, funds its treasury with the
/// company's payment token, and maintains a roster of employees whose
/// salaries are stored only as ciphertext plus a 32-byte commitment. Payments
/// move tokens from the treasury to the employee's payout account, and proofs
/// of privately executed payments can be recorded as immutable attestations.
///
/// Core functionalities include:
/// - Company registration and lookup (`initialize_company`, `get_company`).
/// - Treasury funding (`fund_treasury`).
/// - Employee roster management (`add_employee`, `update_employee_salary`, `remove_employee`).
/// - Payments and payment proofs (`process_payment`, `record_payment_proof`).
///
/// # Addressing
/// Every record lives at a PDA derived from its identifying fields:
/// - Company: `["company", authority]`
/// - Treasury: `["treasury", company]`
/// - Employee: `["employee", company, wallet]`
/// - Payment proof: `["payment_proof", company, wallet, payment_id (u64 LE)]`
///
/// # Security
/// - Every company-scoped mutation passes the same authorization gate on its
///   company account, which requires the signer to equal the company's
///   recorded authority before any other account is checked.
/// - The treasury token account is owned by the company PDA, so funds only
///   leave it through `process_payment`.
/// - Events are emitted for every state change for off-chain traceability.
#[program]
pub mod payrollapp {
    use super::*;

    /// Registers a company for the signing authority.
    ///
    /// Delegates to `initialize_company::initialize_company`.
    /// Creates the company record and its empty treasury token account. Each
    /// authority can own at most one company.
    ///
    /// # Arguments
    /// - `ctx`: Context for `InitializeCompany`.
    /// - `name`: Display name, at most 50 bytes.
    /// - `budget_commitment`: 32-byte commitment to the payroll budget.
    /// - `payment_frequency`: Company-wide pay cadence.
    pub fn initialize_company(
        ctx: Context<InitializeCompany>,
        name: String,
        budget_commitment: Vec<u8>,
        payment_frequency: PaymentFrequency,
    ) -> Result<()> {
        initialize_company::initialize_company(ctx, name, budget_commitment, payment_frequency)
    }

    /// Returns a summary of the company owned by `authority`.
    ///
    /// Delegates to `get_company::get_company`.
    /// Read-only. Fails with `CompanyNotFound` when no company is registered
    /// for the authority.
    ///
    /// # Arguments
    /// - `ctx`: Context for `GetCompany`.
    /// - `authority`: Authority whose company is looked up.
    pub fn get_company(ctx: Context<GetCompany>, authority: Pubkey) -> Result<CompanySummary> {
        get_company::get_company(ctx, authority)
    }

    /// Deposits payment tokens into the company treasury.
    ///
    /// Delegates to `fund_treasury::fund_treasury`.
    /// Only the company authority can call this instruction.
    ///
    /// # Arguments
    /// - `ctx`: Context for `FundTreasury`.
    /// - `amount`: Amount of tokens to deposit.
    pub fn fund_treasury(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
        fund_treasury::fund_treasury(ctx, amount)
    }

    /// Adds an employee to the company.
    ///
    /// Delegates to `add_employee::add_employee`.
    /// Creates the employee record and, when missing, the employee's payout
    /// token account. Only the company authority can call this instruction.
    ///
    /// # Arguments
    /// - `ctx`: Context for `AddEmployee`.
    /// - `encrypted_salary`: Salary ciphertext, 1 to 256 bytes.
    /// - `salary_commitment`: 32-byte commitment to the salary.
    /// - `payment_frequency`: Pay cadence of the employee.
    pub fn add_employee(
        ctx: Context<AddEmployee>,
        encrypted_salary: Vec<u8>,
        salary_commitment: Vec<u8>,
        payment_frequency: PaymentFrequency,
    ) -> Result<()> {
        add_employee::add_employee(ctx, encrypted_salary, salary_commitment, payment_frequency)
    }

    /// Replaces an employee's encrypted salary and commitment.
    ///
    /// Delegates to `update_employee_salary::update_employee_salary`.
    /// Only the company authority can call this instruction.
    ///
    /// # Arguments
    /// - `ctx`: Context for `UpdateEmployeeSalary`.
    /// - `new_encrypted_salary`: Replacement ciphertext.
    /// - `new_salary_commitment`: Replacement 32-byte commitment.
    pub fn update_employee_salary(
        ctx: Context<UpdateEmployeeSalary>,
        new_encrypted_salary: Vec<u8>,
        new_salary_commitment: Vec<u8>,
    ) -> Result<()> {
        update_employee_salary::update_employee_salary(
            ctx,
            new_encrypted_salary,
            new_salary_commitment,
        )
    }

    /// Marks an employee as inactive.
    ///
    /// Delegates to `remove_employee::remove_employee`.
    /// The record is kept for its history. Only the company authority can
    /// call this instruction.
    pub fn remove_employee(ctx: Context<RemoveEmployee>) -> Result<()> {
        remove_employee::remove_employee(ctx)
    }

    /// Pays an active employee out of the company treasury.
    ///
    /// Delegates to `process_payment::process_payment`.
    /// Only the company authority can call this instruction.
    ///
    /// # Arguments
    /// - `ctx`: Context for `ProcessPayment`.
    /// - `amount`: Amount of tokens to pay, at least `MIN_PAYMENT_AMOUNT`.
    /// - `amount_commitment`: 32-byte commitment pairing this payment with its private counterpart.
    pub fn process_payment(
        ctx: Context<ProcessPayment>,
        amount: u64,
        amount_commitment: Vec<u8>,
    ) -> Result<PaymentReceipt> {
        process_payment::process_payment(ctx, amount, amount_commitment)
    }

    /// Records an immutable proof of a private payment.
    ///
    /// Delegates to `record_payment_proof::record_payment_proof`.
    /// Only the company authority can call this instruction.
    ///
    /// # Arguments
    /// - `ctx`: Context for `RecordPaymentProof`.
    /// - `payment_id`: Identifier unique per employee.
    /// - `amount_commitment`: 32-byte commitment to the paid amount.
    /// - `zk_proof`: Proof blob, at most 512 bytes.
    /// - `external_tx_reference`: Signature of the private transfer.
    pub fn record_payment_proof(
        ctx: Context<RecordPaymentProof>,
        payment_id: u64,
        amount_commitment: Vec<u8>,
        zk_proof: Vec<u8>,
        external_tx_reference: String,
    ) -> Result<()> {
        record_payment_proof::record_payment_proof(
            ctx,
            payment_id,
            amount_commitment,
            zk_proof,
            external_tx_reference,
        )
    }
}
