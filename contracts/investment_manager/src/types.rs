use soroban_sdk::contracterror;

// ============================================================================
// CONTRACT ERRORS
// ============================================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum InvestError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    PropertyNotFound = 5,
    PropertyNotVerified = 6,
    PropertyLocked = 7,
}
