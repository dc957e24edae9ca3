use crate::constants::{seeds, MIN_PAYMENT_AMOUNT};
use crate::errors::PayrollErrorCode;
use crate::events::PaymentProcessedEvent;
use crate::state::{Company, Employee};
use crate::utils::{authorize, to_commitment, transfer_tokens};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Counters after a successful payment, returned by `process_payment`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub company: Pubkey,
    pub wallet: Pubkey,
    pub amount: u64,
    pub amount_commitment: [u8; 32],
    pub employee_payments_received: u64,
    pub company_payments_made: u64,
}

/// Account structure for paying an employee out of the company treasury.
#[derive(Accounts)]
pub struct ProcessPayment<'info> {
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
        constraint = employee.is_active() @ PayrollErrorCode::EmployeeInactive
    )]
    pub employee: Box<Account<'info, Employee>>,

    /// Treasury debited by the payment, signed for by the company PDA.
    #[account(
        mut,
        seeds = [seeds::TREASURY, company.key().as_ref()],
        bump = company.treasury_bump
    )]
    pub treasury: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(address = company.payment_token)]
    pub payment_token: Box<InterfaceAccount<'info, Mint>>,

    /// Payout destination credited by the payment.
    #[account(
        mut,
        constraint = employee_token_account.owner == employee.wallet
            @ PayrollErrorCode::InvalidPayoutDestination,
        constraint = employee_token_account.mint == company.payment_token
            @ PayrollErrorCode::InvalidPayoutDestination
    )]
    pub employee_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub authority: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Pays `amount` from the company treasury to the employee.
///
/// The debit and the credit are performed by a single token transfer signed
/// by the company PDA. Both payment counters move by exactly one regardless
/// of the amount.
///
/// # Arguments
/// - `ctx`: Context containing the accounts for the payment.
/// - `amount`: Amount in base units of the payment token.
/// - `amount_commitment`: 32-byte commitment to the paid amount, stored on
///   the receipt and the event but never opened.
///
/// # Returns
/// - `Ok(PaymentReceipt)`: The counters after the payment.
///
/// # Errors
/// - [`PayrollErrorCode::EmployeeInactive`] if the employee was removed.
/// - [`PayrollErrorCode::CompanyInactive`] if the company is inactive.
/// - [`PayrollErrorCode::BelowMinimum`] if `amount` is below `MIN_PAYMENT_AMOUNT`.
/// - [`PayrollErrorCode::InvalidCommitment`] if the commitment is not 32 bytes.
/// - [`PayrollErrorCode::InsufficientTreasuryBalance`] if the treasury cannot cover `amount`.
pub fn process_payment(
    ctx: Context<ProcessPayment>,
    amount: u64,
    amount_commitment: Vec<u8>,
) -> Result<PaymentReceipt> {
    require!(
        ctx.accounts.company.is_active,
        PayrollErrorCode::CompanyInactive
    );
    require!(amount >= MIN_PAYMENT_AMOUNT, PayrollErrorCode::BelowMinimum);
    let amount_commitment = to_commitment(&amount_commitment)?;
    require!(
        ctx.accounts.treasury.amount >= amount,
        PayrollErrorCode::InsufficientTreasuryBalance
    );

    let authority_key = ctx.accounts.company.authority;
    let bump = [ctx.accounts.company.bump];
    let company_seeds: &[&[u8]] = &[seeds::COMPANY, authority_key.as_ref(), &bump];
    let signer_seeds: &[&[&[u8]]] = &[company_seeds];

    transfer_tokens(
        &ctx.accounts.payment_token,
        &ctx.accounts.token_program,
        &ctx.accounts.treasury,
        &ctx.accounts.employee_token_account,
        &ctx.accounts.company.to_account_info(),
        Some(signer_seeds),
        amount,
    )?;

    let now = Clock::get()?.unix_timestamp;

    let employee = &mut ctx.accounts.employee;
    employee.total_payments_received = employee
        .total_payments_received
        .checked_add(1)
        .ok_or(PayrollErrorCode::ArithmeticOverflow)?;
    employee.last_payment_date = now;

    let company = &mut ctx.accounts.company;
    company.total_payments_made = company
        .total_payments_made
        .checked_add(1)
        .ok_or(PayrollErrorCode::ArithmeticOverflow)?;
    company.last_payment_timestamp = now;
    company.next_payment_due = now
        .checked_add(employee.payment_frequency.period_seconds())
        .ok_or(PayrollErrorCode::ArithmeticOverflow)?;

    msg!(
        "Payment #{} processed for employee {}",
        employee.total_payments_received,
        employee.wallet
    );

    emit!(PaymentProcessedEvent {
        company: company.key(),
        wallet: employee.wallet,
        amount_commitment,
        employee_payments_received: employee.total_payments_received,
        company_payments_made: company.total_payments_made,
        timestamp: now,
    });

    Ok(PaymentReceipt {
        company: company.key(),
        wallet: employee.wallet,
        amount,
        amount_commitment,
        employee_payments_received: employee.total_payments_received,
        company_payments_made: company.total_payments_made,
    })
}
