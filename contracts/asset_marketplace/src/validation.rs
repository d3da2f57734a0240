use crate::storage;
use crate::types::{Listing, MarketError};
use soroban_sdk::{Address, Env};

/// Fee schedule denominator (100% in basis points)
pub const BPS_DENOMINATOR: u32 = 10_000;

// ============================================================================
// VALIDATIONS (CEI Pattern — all checks run before any state change)
// ============================================================================

/// Validates that the contract has been initialized
pub fn require_initialized(env: &Env) -> Result<(), MarketError> {
    if !storage::has_admin(env) {
        return Err(MarketError::NotInitialized);
    }
    Ok(())
}

/// Validates that the caller holds the given role bits
pub fn require_role(env: &Env, caller: &Address, role: u32) -> Result<(), MarketError> {
    if !brick_access::has_role(env, caller, role) {
        return Err(MarketError::Unauthorized);
    }
    Ok(())
}

/// Validates that the amount is positive
pub fn require_positive_amount(amount: i128) -> Result<(), MarketError> {
    if amount <= 0 {
        return Err(MarketError::InvalidAmount);
    }
    Ok(())
}

/// Validates a basis-point value (0 to 100%)
pub fn require_valid_bps(bps: u32) -> Result<(), MarketError> {
    if bps > BPS_DENOMINATOR {
        return Err(MarketError::InvalidFee);
    }
    Ok(())
}

/// Fetches a listing, failing when the id is unknown
pub fn require_listing(env: &Env, id: u64) -> Result<Listing, MarketError> {
    storage::get_listing(env, id).ok_or(MarketError::ListingNotFound)
}

/// Computes `(gross, fee)` for a fill of `amount` shares at the listing
/// price. The platform fee is `fee_bps` of the gross, reduced by the
/// BCT-settlement discount (all trades here settle in BCT).
pub fn settlement_amounts(
    env: &Env,
    price_per_share: i128,
    amount: i128,
) -> Result<(i128, i128), MarketError> {
    let gross = price_per_share
        .checked_mul(amount)
        .ok_or(MarketError::InvalidAmount)?;

    let fee_bps = storage::get_fee_bps(env);
    let discount_bps = storage::get_discount_bps(env);
    let effective_bps = fee_bps - (fee_bps * discount_bps) / BPS_DENOMINATOR;

    let fee = gross
        .checked_mul(effective_bps as i128)
        .ok_or(MarketError::InvalidAmount)?
        / BPS_DENOMINATOR as i128;

    Ok((gross, fee))
}
