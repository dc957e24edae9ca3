use crate::constants::seeds;
use crate::errors::PayrollErrorCode;
use crate::events::GetCompanyEvent;
use crate::state::{Company, PaymentFrequency};
use anchor_lang::prelude::*;

/// Public view of a company record returned by `get_company`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct CompanySummary {
    pub company: Pubkey,
    pub authority: Pubkey,
    pub name: String,
    pub payment_token: Pubkey,
    pub payment_frequency: PaymentFrequency,
    pub budget_commitment: [u8; 32],
    pub employee_count: u64,
    pub total_payments_made: u64,
    pub next_payment_due: i64,
    pub is_active: bool,
}

/// Account structure for reading a company.
#[derive(Accounts)]
#[instruction(authority: Pubkey)]
pub struct GetCompany<'info> {
    /// CHECK: may be unallocated, existence is checked in the handler
    #[account(seeds = [seeds::COMPANY, authority.as_ref()], bump)]
    pub company: UncheckedAccount<'info>,
}

/// Reads the company owned by `authority`.
///
/// This is a read-only instruction: the summary is returned through the
/// transaction return data and mirrored in a `GetCompanyEvent`.
///
/// # Errors
/// - [`PayrollErrorCode::CompanyNotFound`] if no company exists at the derived address.
pub fn get_company(ctx: Context<GetCompany>, authority: Pubkey) -> Result<CompanySummary> {
    let info = ctx.accounts.company.to_account_info();
    require!(
        *info.owner == crate::ID && !info.data_is_empty(),
        PayrollErrorCode::CompanyNotFound
    );

    let data = info.try_borrow_data()?;
    let company = Company::try_deserialize(&mut &data[..])?;
    require!(
        company.is_initialized() && company.authority == authority,
        PayrollErrorCode::CompanyNotFound
    );

    emit!(GetCompanyEvent {
        company: info.key(),
        employee_count: company.employee_count,
        total_payments_made: company.total_payments_made,
    });

    Ok(CompanySummary {
        company: info.key(),
        authority: company.authority,
        name: company.name,
        payment_token: company.payment_token,
        payment_frequency: company.payment_frequency,
        budget_commitment: company.budget_commitment,
        employee_count: company.employee_count,
        total_payments_made: company.total_payments_made,
        next_payment_due: company.next_payment_due,
        is_active: company.is_active,
    })
}
