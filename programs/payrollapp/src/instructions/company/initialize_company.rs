use crate::constants::seeds;
use crate::errors::PayrollErrorCode;
use crate::events::CompanyInitializedEvent;
use crate::state::{Company, PaymentFrequency};
use crate::utils::{to_commitment, validate_company_name};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Account structure for registering a company and its treasury.
///
/// # Preconditions
/// - No company may exist yet for `authority`. The account is opened with
///   `init_if_needed` so that an existing record is reported as
///   `CompanyAlreadyExists` instead of a system program failure. The check
///   sits on the company field so it fails before the treasury's mint is
///   compared against a possibly different `payment_token`.
#[derive(Accounts)]
pub struct InitializeCompany<'info> {
    /// Company record, one per authority.
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + Company::INIT_SPACE,
        seeds = [seeds::COMPANY, authority.key().as_ref()],
        bump,
        constraint = !company.is_initialized() @ PayrollErrorCode::CompanyAlreadyExists
    )]
    pub company: Box<Account<'info, Company>>,

    /// Treasury token account holding the payroll funds, controlled by the company PDA.
    #[account(
        init_if_needed,
        payer = authority,
        seeds = [seeds::TREASURY, company.key().as_ref()],
        bump,
        token::mint = payment_token,
        token::authority = company,
        token::token_program = token_program
    )]
    pub treasury: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Signer funding the accounts, becomes the company authority.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Mint of the token used for payouts.
    pub payment_token: Box<InterfaceAccount<'info, Mint>>,

    pub token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

/// Registers a new company with an empty treasury.
///
/// # Arguments
/// - `ctx`: Context containing the accounts to initialize.
/// - `name`: Company name, 1 to 50 bytes.
/// - `budget_commitment`: 32-byte commitment to the encrypted budget.
/// - `payment_frequency`: Default pay cadence.
///
/// # Errors
/// - [`PayrollErrorCode::CompanyAlreadyExists`] if the authority already owns a company.
/// - [`PayrollErrorCode::CompanyNameTooLong`] if the name is empty or longer than 50 bytes.
/// - [`PayrollErrorCode::InvalidCommitment`] if the commitment is not 32 bytes.
pub fn initialize_company(
    ctx: Context<InitializeCompany>,
    name: String,
    budget_commitment: Vec<u8>,
    payment_frequency: PaymentFrequency,
) -> Result<()> {
    validate_company_name(&name)?;
    let budget_commitment = to_commitment(&budget_commitment)?;

    let now = Clock::get()?.unix_timestamp;
    let company = &mut ctx.accounts.company;

    company.authority = ctx.accounts.authority.key();
    company.name = name;
    company.payment_token = ctx.accounts.payment_token.key();
    company.payment_frequency = payment_frequency;
    company.budget_commitment = budget_commitment;
    company.employee_count = 0;
    company.total_payments_made = 0;
    company.last_payment_timestamp = now;
    company.next_payment_due = now
        .checked_add(payment_frequency.period_seconds())
        .ok_or(PayrollErrorCode::ArithmeticOverflow)?;
    company.is_active = true;
    company.treasury_bump = ctx.bumps.treasury;
    company.bump = ctx.bumps.company;

    msg!(
        "Company initialized: {} (authority: {})",
        company.name,
        company.authority
    );

    emit!(CompanyInitializedEvent {
        company: company.key(),
        authority: company.authority,
        treasury: ctx.accounts.treasury.key(),
        payment_token: company.payment_token,
        payment_frequency,
        next_payment_due: company.next_payment_due,
    });

    Ok(())
}
