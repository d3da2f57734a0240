use crate::storage;
use crate::types::TokenError;
use soroban_sdk::{Address, Env};

// ============================================================================
// VALIDATIONS (CEI Pattern — all checks run before any state change)
// ============================================================================

/// Validates that the contract has been initialized
pub fn require_initialized(env: &Env) -> Result<(), TokenError> {
    if !storage::has_admin(env) {
        return Err(TokenError::NotInitialized);
    }
    Ok(())
}

/// Validates that the caller holds the given role bits
pub fn require_role(env: &Env, caller: &Address, role: u32) -> Result<(), TokenError> {
    if !brick_access::has_role(env, caller, role) {
        return Err(TokenError::Unauthorized);
    }
    Ok(())
}

/// Validates that the amount is positive
pub fn require_positive_amount(amount: i128) -> Result<(), TokenError> {
    if amount <= 0 {
        return Err(TokenError::InvalidAmount);
    }
    Ok(())
}

/// Validates that the balance covers the required amount
pub fn require_sufficient_balance(
    env: &Env,
    addr: &Address,
    required: i128,
) -> Result<(), TokenError> {
    let balance = storage::get_balance(env, addr);
    if balance < required {
        return Err(TokenError::InsufficientBalance);
    }
    Ok(())
}

/// Validates that the allowance covers the required amount
pub fn require_sufficient_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    required: i128,
) -> Result<(), TokenError> {
    let allowance = storage::get_allowance(env, from, spender);
    if allowance < required {
        return Err(TokenError::InsufficientAllowance);
    }
    Ok(())
}

/// Validates that a mint keeps the total supply under the immutable cap
pub fn require_cap_not_exceeded(env: &Env, additional_amount: i128) -> Result<(), TokenError> {
    let current_supply = storage::get_total_supply(env);
    let new_supply = current_supply
        .checked_add(additional_amount)
        .ok_or(TokenError::CapExceeded)?;

    if new_supply > storage::get_cap(env) {
        return Err(TokenError::CapExceeded);
    }

    Ok(())
}

/// Validates the sender's outbound-transfer cooldown.
/// The clock is stamped on every successful outbound transfer; receipts
/// never touch it.
pub fn require_transfer_delay_elapsed(env: &Env, sender: &Address) -> Result<(), TokenError> {
    if let Some(last) = storage::get_last_transfer(env, sender) {
        let delay = storage::get_transfer_delay(env);
        let ready_at = last.saturating_add(delay);
        if env.ledger().timestamp() < ready_at {
            return Err(TokenError::TransferDelayNotMet);
        }
    }
    Ok(())
}
