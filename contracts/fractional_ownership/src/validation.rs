use crate::storage;
use crate::types::{OwnershipError, ShareLedger};
use soroban_sdk::{Address, Env};

// ============================================================================
// VALIDATIONS (CEI Pattern — all checks run before any state change)
// ============================================================================

/// Validates that the contract has been initialized
pub fn require_initialized(env: &Env) -> Result<(), OwnershipError> {
    if !storage::has_admin(env) {
        return Err(OwnershipError::NotInitialized);
    }
    Ok(())
}

/// Validates that the caller holds the given role bits
pub fn require_role(env: &Env, caller: &Address, role: u32) -> Result<(), OwnershipError> {
    if !brick_access::has_role(env, caller, role) {
        return Err(OwnershipError::Unauthorized);
    }
    Ok(())
}

/// Validates that the amount is positive
pub fn require_positive_amount(amount: i128) -> Result<(), OwnershipError> {
    if amount <= 0 {
        return Err(OwnershipError::InvalidAmount);
    }
    Ok(())
}

/// Fetches the share ledger of a property, failing when none was created
pub fn require_ledger(env: &Env, property_id: u64) -> Result<ShareLedger, OwnershipError> {
    storage::get_ledger(env, property_id).ok_or(OwnershipError::LedgerNotFound)
}

/// Validates that a holder owns at least `required` shares of a property
pub fn require_sufficient_shares(
    env: &Env,
    property_id: u64,
    holder: &Address,
    required: i128,
) -> Result<(), OwnershipError> {
    let balance = storage::get_share_balance(env, property_id, holder);
    if balance < required {
        return Err(OwnershipError::InsufficientShares);
    }
    Ok(())
}
