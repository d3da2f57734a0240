use soroban_sdk::{contracterror, contracttype, Address};

// ============================================================================
// CONTRACT ERRORS
// ============================================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MarketError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    InvalidFee = 5,
    ListingNotFound = 6,
    ListingInactive = 7,
    InsufficientShares = 8,
    InsufficientFunds = 9,
}

// ============================================================================
// LISTING
// ============================================================================

/// A seller's open offer over fractional shares, priced in BCT smallest
/// units. `amount` is the unfilled remainder; a fully-filled or cancelled
/// listing is kept for history with `active = false`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Listing {
    pub id: u64,
    pub seller: Address,
    pub property_id: u64,
    pub amount: i128,
    pub price_per_share: i128,
    pub active: bool,
}
