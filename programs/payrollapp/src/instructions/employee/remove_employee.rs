use crate::constants::seeds;
use crate::errors::PayrollErrorCode;
use crate::events::EmployeeRemovedEvent;
use crate::state::{Company, Employee, EmployeeStatus};
use crate::utils::authorize;
use anchor_lang::prelude::*;

/// Account structure for removing an employee.
///
/// An employee that is already inactive is reported as not found.
#[derive(Accounts)]
pub struct RemoveEmployee<'info> {
    #[account(
        mut,
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
        constraint = employee.is_active() @ PayrollErrorCode::EmployeeNotFound
    )]
    pub employee: Box<Account<'info, Employee>>,

    pub authority: Signer<'info>,
}

/// Soft-deletes an employee.
///
/// Flips the status to `Inactive` and decrements the company's active
/// employee count. Salary data and the payment counter are retained.
pub fn remove_employee(ctx: Context<RemoveEmployee>) -> Result<()> {
    let employee = &mut ctx.accounts.employee;
    employee.status = EmployeeStatus::Inactive;

    let company = &mut ctx.accounts.company;
    company.employee_count = company
        .employee_count
        .checked_sub(1)
        .ok_or(PayrollErrorCode::ArithmeticUnderflow)?;

    msg!(
        "Employee {} removed from {} ({} active)",
        employee.wallet,
        company.name,
        company.employee_count
    );

    emit!(EmployeeRemovedEvent {
        company: company.key(),
        wallet: employee.wallet,
        employee_count: company.employee_count,
    });

    Ok(())
}
