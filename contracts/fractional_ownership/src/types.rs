use soroban_sdk::{contracterror, contracttype};

// ============================================================================
// CONTRACT ERRORS
// ============================================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum OwnershipError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    PropertyNotFound = 5,
    PropertyNotVerified = 6,
    SharesAlreadyCreated = 7,
    LedgerNotFound = 8,
    SupplyExceeded = 9,
    InsufficientShares = 10,
}

// ============================================================================
// SHARE LEDGER
// ============================================================================

/// Share allocation for one tokenized property.
/// `shares_outstanding <= total_shares` at all times.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShareLedger {
    pub property_id: u64,
    pub total_shares: i128,
    pub shares_outstanding: i128,
}
