use crate::storage;
use crate::types::InvestError;
use soroban_sdk::{Address, Env};

// ============================================================================
// VALIDATIONS (CEI Pattern — all checks run before any state change)
// ============================================================================

/// Validates that the contract has been initialized
pub fn require_initialized(env: &Env) -> Result<(), InvestError> {
    if !storage::has_admin(env) {
        return Err(InvestError::NotInitialized);
    }
    Ok(())
}

/// Validates that the caller holds the given role bits
pub fn require_role(env: &Env, caller: &Address, role: u32) -> Result<(), InvestError> {
    if !brick_access::has_role(env, caller, role) {
        return Err(InvestError::Unauthorized);
    }
    Ok(())
}

/// Validates that the amount is positive
pub fn require_positive_amount(amount: i128) -> Result<(), InvestError> {
    if amount <= 0 {
        return Err(InvestError::InvalidAmount);
    }
    Ok(())
}
