use crate::constants::seeds;
use crate::errors::PayrollErrorCode;
use crate::events::TreasuryFundedEvent;
use crate::state::Company;
use crate::utils::{authorize, transfer_tokens};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Account structure for depositing payout tokens into a company treasury.
#[derive(Accounts)]
pub struct FundTreasury<'info> {
    #[account(
        seeds = [seeds::COMPANY, company.authority.as_ref()],
        bump = company.bump,
        constraint = authorize(&company, &authority.key()).is_ok() @ PayrollErrorCode::Unauthorized
    )]
    pub company: Box<Account<'info, Company>>,

    /// Treasury receiving the deposit.
    #[account(
        mut,
        seeds = [seeds::TREASURY, company.key().as_ref()],
        bump = company.treasury_bump
    )]
    pub treasury: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(address = company.payment_token)]
    pub payment_token: Box<InterfaceAccount<'info, Mint>>,

    /// Authority's token account (source of tokens).
    #[account(
        mut,
        token::mint = payment_token,
        token::authority = authority,
        token::token_program = token_program
    )]
    pub authority_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub authority: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Deposits `amount` payout tokens from the authority into the treasury.
///
/// # Errors
/// - [`PayrollErrorCode::InvalidAmount`] if `amount` is zero.
pub fn fund_treasury(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
    require!(amount > 0, PayrollErrorCode::InvalidAmount);

    transfer_tokens(
        &ctx.accounts.payment_token,
        &ctx.accounts.token_program,
        &ctx.accounts.authority_token_account,
        &ctx.accounts.treasury,
        &ctx.accounts.authority.to_account_info(),
        None,
        amount,
    )?;

    ctx.accounts.treasury.reload()?;

    msg!("Treasury funded with {} tokens", amount);

    emit!(TreasuryFundedEvent {
        company: ctx.accounts.company.key(),
        amount,
        treasury_balance: ctx.accounts.treasury.amount,
    });

    Ok(())
}
