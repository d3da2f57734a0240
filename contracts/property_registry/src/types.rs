use soroban_sdk::{contracterror, contracttype, Address, String};

// ============================================================================
// CONTRACT ERRORS
// ============================================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    PropertyNotFound = 4,
    DuplicateLocation = 5,
    NotVerified = 6,
    InvalidInput = 7,
}

// ============================================================================
// PROPERTY RECORD
// ============================================================================

/// One real-world property. `location` is globally unique (exact string
/// match); `token_uri` is an opaque pointer to off-chain metadata and is
/// never parsed on-chain. Records are never deleted and `is_verified` never
/// reverts to false.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Property {
    pub id: u64,
    pub owner: Address,
    pub location: String,
    pub size: u64,
    pub year_built: u32,
    pub token_uri: String,
    pub is_verified: bool,
    pub is_locked: bool,
}
