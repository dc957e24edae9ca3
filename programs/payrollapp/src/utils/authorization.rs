use crate::errors::PayrollErrorCode;
use crate::state::Company;
use anchor_lang::prelude::*;

/// Fails closed unless `caller` is the authority recorded on `company`.
///
/// Guarded accounts structs call this from the constraint of their `company`
/// field, the first non-init account they validate, so `Unauthorized` is
/// reported before any employee or payout account constraint.
///
/// Signature verification itself is performed by the runtime through the
/// `Signer` account type; this gate only compares identities.
pub fn authorize(company: &Company, caller: &Pubkey) -> Result<()> {
    require_keys_eq!(company.authority, *caller, PayrollErrorCode::Unauthorized);
    Ok(())
}
