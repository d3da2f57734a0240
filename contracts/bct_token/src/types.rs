use soroban_sdk::{contracterror, contracttype, String};

// ============================================================================
// CONTRACT ERRORS
// ============================================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InsufficientBalance = 4,
    InsufficientAllowance = 5,
    InvalidAmount = 6,
    CapExceeded = 7,
    TransferDelayNotMet = 8,
}

// ============================================================================
// TOKEN METADATA
// ============================================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_values() {
        assert_eq!(TokenError::AlreadyInitialized as u32, 1);
        assert_eq!(TokenError::CapExceeded as u32, 7);
        assert_eq!(TokenError::TransferDelayNotMet as u32, 8);
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(TokenError::CapExceeded, TokenError::CapExceeded);
        assert_ne!(TokenError::CapExceeded, TokenError::InsufficientBalance);
    }
}
