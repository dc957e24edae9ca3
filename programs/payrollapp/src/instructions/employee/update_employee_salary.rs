use crate::constants::seeds;
use crate::errors::PayrollErrorCode;
use crate::events::EmployeeSalaryUpdatedEvent;
use crate::state::{Company, Employee};
use crate::utils::{authorize, to_commitment, validate_encrypted_salary};
use anchor_lang::prelude::*;

/// Account structure for replacing an employee's salary data.
#[derive(Accounts)]
pub struct UpdateEmployeeSalary<'info> {
    #[account(
        seeds = [seeds::COMPANY, company.authority.as_ref()],
        bump = company.bump,
        constraint = authorize(&company, &authority.key()).is_ok() @ PayrollErrorCode::Unauthorized
    )]
    pub company: Box<Account<'info, Company>>,

    #[account(
        mut,
        seeds = [seeds::EMPLOYEE, company.key().as_ref(), employee.wallet.as_ref()],
        bump = employee.bump,
        constraint = employee.company == company.key() @ PayrollErrorCode::EmployeeNotFound,
        constraint = employee.is_active() @ PayrollErrorCode::EmployeeInactive
    )]
    pub employee: Box<Account<'info, Employee>>,

    pub authority: Signer<'info>,
}

/// Replaces the encrypted salary and its commitment.
///
/// Identity fields, status and counters are left untouched.
///
/// # Errors
/// - [`PayrollErrorCode::InvalidCommitment`] if the commitment is not 32 bytes.
/// - [`PayrollErrorCode::InvalidEncryptedSalary`] if the ciphertext is empty or too large.
pub fn update_employee_salary(
    ctx: Context<UpdateEmployeeSalary>,
    new_encrypted_salary: Vec<u8>,
    new_salary_commitment: Vec<u8>,
) -> Result<()> {
    let new_salary_commitment = to_commitment(&new_salary_commitment)?;
    validate_encrypted_salary(&new_encrypted_salary)?;

    let employee = &mut ctx.accounts.employee;
    employee.encrypted_salary = new_encrypted_salary;
    employee.salary_commitment = new_salary_commitment;

    msg!("Salary updated for employee {}", employee.wallet);

    emit!(EmployeeSalaryUpdatedEvent {
        company: employee.company,
        wallet: employee.wallet,
        salary_commitment: new_salary_commitment,
    });

    Ok(())
}
