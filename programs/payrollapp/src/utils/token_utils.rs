use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};

/// Generic token transfer that handles both regular and PDA-signed transfers
///
/// Uses `transfer_checked` so the same path works for SPL Token and Token-2022
/// mints. The debit and the credit happen inside one CPI, either both apply or
/// the instruction fails.
///
/// # Arguments
/// * `mint` - Mint of the transferred token
/// * `token_program` - Token program owning the mint
/// * `from_account` - Source token account
/// * `to_account` - Destination token account
/// * `authority` - Authority allowed to move funds out of `from_account`
/// * `signer_seeds` - PDA seeds for program-signed transfers (None for user-signed)
/// * `amount` - Amount in base units
pub fn transfer_tokens<'info>(
    mint: &InterfaceAccount<'info, Mint>,
    token_program: &Interface<'info, TokenInterface>,
    from_account: &InterfaceAccount<'info, TokenAccount>,
    to_account: &InterfaceAccount<'info, TokenAccount>,
    authority: &AccountInfo<'info>,
    signer_seeds: Option<&[&[&[u8]]]>,
    amount: u64,
) -> Result<()> {
    let transfer_accounts = TransferChecked {
        from: from_account.to_account_info(),
        mint: mint.to_account_info(),
        to: to_account.to_account_info(),
        authority: authority.clone(),
    };

    let transfer_ctx = match signer_seeds {
        Some(seeds) => CpiContext::new_with_signer(
            token_program.key(),
            transfer_accounts,
            seeds,
        ),
        None => CpiContext::new(token_program.key(), transfer_accounts),
    };

    token_interface::transfer_checked(transfer_ctx, amount, mint.decimals)
}
