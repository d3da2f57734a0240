use crate::storage;
use crate::types::RegistryError;
use soroban_sdk::{Address, Env, String};

// ============================================================================
// VALIDATIONS (CEI Pattern — all checks run before any state change)
// ============================================================================

/// Validates that the contract has been initialized
pub fn require_initialized(env: &Env) -> Result<(), RegistryError> {
    if !storage::has_admin(env) {
        return Err(RegistryError::NotInitialized);
    }
    Ok(())
}

/// Validates that the caller holds the given role bits
pub fn require_role(env: &Env, caller: &Address, role: u32) -> Result<(), RegistryError> {
    if !brick_access::has_role(env, caller, role) {
        return Err(RegistryError::Unauthorized);
    }
    Ok(())
}

/// Validates the descriptive fields of a registration
pub fn require_valid_record(
    location: &String,
    size: u64,
    year_built: u32,
) -> Result<(), RegistryError> {
    if location.len() == 0 {
        return Err(RegistryError::InvalidInput);
    }
    if size == 0 || year_built == 0 {
        return Err(RegistryError::InvalidInput);
    }
    Ok(())
}

/// Validates that no record already claims this location (exact match)
pub fn require_location_available(env: &Env, location: &String) -> Result<(), RegistryError> {
    if storage::get_location_id(env, location).is_some() {
        return Err(RegistryError::DuplicateLocation);
    }
    Ok(())
}
