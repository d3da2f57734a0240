use crate::types::TokenMetadata;
use soroban_sdk::{symbol_short, Address, Env};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Fixed decimal places for the utility token
pub const DECIMALS: u32 = 7;

/// TTL for critical storage (1 year in ledgers ~= 6.3M ledgers)
const CRITICAL_STORAGE_TTL: u32 = 6_307_200;

/// TTL threshold for bump (30 days ~= 518K ledgers)
const CRITICAL_STORAGE_THRESHOLD: u32 = 518_400;

// ============================================================================
// TTL BUMPS
// ============================================================================

/// Bumps the TTL of critical instance storage (cap, supply, delay, metadata)
pub fn bump_critical_storage(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(CRITICAL_STORAGE_THRESHOLD, CRITICAL_STORAGE_TTL);
}

/// Bumps the TTL of an address balance entry
pub fn bump_balance(env: &Env, addr: &Address) {
    let key = (symbol_short!("balance"), addr.clone());
    if env.storage().persistent().has(&key) {
        env.storage()
            .persistent()
            .extend_ttl(&key, CRITICAL_STORAGE_THRESHOLD, CRITICAL_STORAGE_TTL);
    }
}

// ============================================================================
// REENTRANCY GUARD
// ============================================================================

pub fn is_reentrancy_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&symbol_short!("reentry"))
        .unwrap_or(false)
}

pub fn set_reentrancy_guard(env: &Env, locked: bool) {
    env.storage().instance().set(&symbol_short!("reentry"), &locked);
}

// ============================================================================
// ADMIN
// ============================================================================

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&symbol_short!("admin"))
}

pub fn get_admin(env: &Env) -> Address {
    env.storage().instance().get(&symbol_short!("admin")).unwrap()
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&symbol_short!("admin"), admin);
}

// ============================================================================
// CAP / TRANSFER DELAY
// ============================================================================

pub fn get_cap(env: &Env) -> i128 {
    env.storage().instance().get(&symbol_short!("cap")).unwrap_or(0)
}

pub fn set_cap(env: &Env, cap: i128) {
    env.storage().instance().set(&symbol_short!("cap"), &cap);
}

pub fn get_transfer_delay(env: &Env) -> u64 {
    env.storage().instance().get(&symbol_short!("delay")).unwrap_or(0)
}

pub fn set_transfer_delay(env: &Env, delay: u64) {
    env.storage().instance().set(&symbol_short!("delay"), &delay);
}

// ============================================================================
// TOTAL SUPPLY
// ============================================================================

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage().instance().get(&symbol_short!("supply")).unwrap_or(0)
}

pub fn set_total_supply(env: &Env, amount: i128) {
    env.storage().instance().set(&symbol_short!("supply"), &amount);
}

// ============================================================================
// BALANCE
// ============================================================================

pub fn get_balance(env: &Env, addr: &Address) -> i128 {
    let key = (symbol_short!("balance"), addr.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_balance(env: &Env, addr: &Address, amount: i128) {
    let key = (symbol_short!("balance"), addr.clone());
    env.storage().persistent().set(&key, &amount);
}

// ============================================================================
// TRANSFER COOLDOWN CLOCK
// ============================================================================

/// Ledger timestamp of the address's last outbound transfer, if any.
pub fn get_last_transfer(env: &Env, addr: &Address) -> Option<u64> {
    let key = (symbol_short!("last_tx"), addr.clone());
    env.storage().persistent().get(&key)
}

pub fn set_last_transfer(env: &Env, addr: &Address, timestamp: u64) {
    let key = (symbol_short!("last_tx"), addr.clone());
    env.storage().persistent().set(&key, &timestamp);
}

// ============================================================================
// ALLOWANCE
// ============================================================================

pub fn get_allowance(env: &Env, from: &Address, spender: &Address) -> i128 {
    let key = (symbol_short!("allow"), from.clone(), spender.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_allowance(env: &Env, from: &Address, spender: &Address, amount: i128) {
    let key = (symbol_short!("allow"), from.clone(), spender.clone());
    env.storage().persistent().set(&key, &amount);
}

// ============================================================================
// METADATA
// ============================================================================

pub fn get_metadata(env: &Env) -> TokenMetadata {
    env.storage().instance().get(&symbol_short!("metadata")).unwrap()
}

pub fn set_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&symbol_short!("metadata"), metadata);
}
