use crate::constants::{seeds, MAX_EMPLOYEES_PER_COMPANY};
use crate::errors::PayrollErrorCode;
use crate::events::EmployeeAddedEvent;
use crate::state::{Company, Employee, EmployeeStatus, PaymentFrequency};
use crate::utils::{authorize, to_commitment, validate_encrypted_salary};
use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Account structure for adding an employee to a company.
///
/// The employee's payout token account is created when missing. Both
/// allocations happen in the same transaction, so an employee record never
/// persists without a usable payout destination.
#[derive(Accounts)]
pub struct AddEmployee<'info> {
    #[account(
        mut,
        seeds = [seeds::COMPANY, company.authority.as_ref()],
        bump = company.bump,
        constraint = authorize(&company, &authority.key()).is_ok() @ PayrollErrorCode::Unauthorized
    )]
    pub company: Box<Account<'info, Company>>,

    /// Employee record, unique per (company, wallet).
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + Employee::INIT_SPACE,
        seeds = [seeds::EMPLOYEE, company.key().as_ref(), employee_wallet.key().as_ref()],
        bump
    )]
    pub employee: Box<Account<'info, Employee>>,

    /// CHECK: identity of the paid party, only its key is recorded
    pub employee_wallet: UncheckedAccount<'info>,

    #[account(address = company.payment_token)]
    pub payment_token: Box<InterfaceAccount<'info, Mint>>,

    /// Payout destination of the employee.
    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = payment_token,
        associated_token::authority = employee_wallet,
        associated_token::token_program = token_program
    )]
    pub employee_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Company authority, pays for the new accounts.
    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,

    pub associated_token_program: Program<'info, AssociatedToken>,

    pub system_program: Program<'info, System>,
}

/// Adds an employee with an encrypted salary.
///
/// # Arguments
/// - `ctx`: Context containing the accounts for the new employee.
/// - `encrypted_salary`: Salary ciphertext, 1 to 256 bytes.
/// - `salary_commitment`: 32-byte commitment to the salary.
/// - `payment_frequency`: Pay cadence of this employee.
///
/// # Errors
/// - [`PayrollErrorCode::EmployeeAlreadyExists`] if the wallet was already added to this company.
/// - [`PayrollErrorCode::CompanyInactive`] if the company is inactive.
/// - [`PayrollErrorCode::MaxEmployeesReached`] if the company has 1000 active employees.
/// - [`PayrollErrorCode::InvalidCommitment`] if the commitment is not 32 bytes.
/// - [`PayrollErrorCode::InvalidEncryptedSalary`] if the ciphertext is empty or too large.
pub fn add_employee(
    ctx: Context<AddEmployee>,
    encrypted_salary: Vec<u8>,
    salary_commitment: Vec<u8>,
    payment_frequency: PaymentFrequency,
) -> Result<()> {
    require!(
        !ctx.accounts.employee.is_initialized(),
        PayrollErrorCode::EmployeeAlreadyExists
    );
    require!(
        ctx.accounts.company.is_active,
        PayrollErrorCode::CompanyInactive
    );
    require!(
        ctx.accounts.company.employee_count < MAX_EMPLOYEES_PER_COMPANY,
        PayrollErrorCode::MaxEmployeesReached
    );
    let salary_commitment = to_commitment(&salary_commitment)?;
    validate_encrypted_salary(&encrypted_salary)?;

    let now = Clock::get()?.unix_timestamp;
    let company_key = ctx.accounts.company.key();

    let employee = &mut ctx.accounts.employee;
    employee.wallet = ctx.accounts.employee_wallet.key();
    employee.company = company_key;
    employee.encrypted_salary = encrypted_salary;
    employee.salary_commitment = salary_commitment;
    employee.payment_frequency = payment_frequency;
    employee.status = EmployeeStatus::Active;
    employee.total_payments_received = 0;
    employee.join_date = now;
    employee.last_payment_date = now;
    employee.bump = ctx.bumps.employee;

    let company = &mut ctx.accounts.company;
    company.employee_count = company
        .employee_count
        .checked_add(1)
        .ok_or(PayrollErrorCode::ArithmeticOverflow)?;

    msg!(
        "Employee {} added to {} ({} active)",
        employee.wallet,
        company.name,
        company.employee_count
    );

    emit!(EmployeeAddedEvent {
        company: company_key,
        employee: employee.key(),
        wallet: employee.wallet,
        payout_account: ctx.accounts.employee_token_account.key(),
        payment_frequency,
        employee_count: company.employee_count,
    });

    Ok(())
}
