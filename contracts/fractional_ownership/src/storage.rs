use crate::types::ShareLedger;
use soroban_sdk::{symbol_short, Address, Env, String};

// ============================================================================
// CONSTANTS
// ============================================================================

/// TTL for critical storage (1 year in ledgers ~= 6.3M ledgers)
const CRITICAL_STORAGE_TTL: u32 = 6_307_200;

/// TTL threshold for bump (30 days ~= 518K ledgers)
const CRITICAL_STORAGE_THRESHOLD: u32 = 518_400;

// ============================================================================
// TTL BUMPS
// ============================================================================

/// Bumps the TTL of critical instance storage (admin, registry, metadata)
pub fn bump_critical_storage(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(CRITICAL_STORAGE_THRESHOLD, CRITICAL_STORAGE_TTL);
}

/// Bumps the TTL of a property's share ledger
pub fn bump_ledger(env: &Env, property_id: u64) {
    let key = (symbol_short!("ledger"), property_id);
    env.storage()
        .persistent()
        .extend_ttl(&key, CRITICAL_STORAGE_THRESHOLD, CRITICAL_STORAGE_TTL);
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
// REGISTRY BACK-REFERENCE (read-only)
// ============================================================================

pub fn get_registry(env: &Env) -> Address {
    env.storage().instance().get(&symbol_short!("registry")).unwrap()
}

pub fn set_registry(env: &Env, registry: &Address) {
    env.storage().instance().set(&symbol_short!("registry"), registry);
}

// ============================================================================
// SHARE TOKEN METADATA
// ============================================================================

pub fn get_name(env: &Env) -> String {
    env.storage().instance().get(&symbol_short!("name")).unwrap()
}

pub fn set_name(env: &Env, name: &String) {
    env.storage().instance().set(&symbol_short!("name"), name);
}

pub fn get_symbol(env: &Env) -> String {
    env.storage().instance().get(&symbol_short!("symbol")).unwrap()
}

pub fn set_symbol(env: &Env, symbol: &String) {
    env.storage().instance().set(&symbol_short!("symbol"), symbol);
}

// ============================================================================
// SHARE LEDGERS
// ============================================================================

pub fn get_ledger(env: &Env, property_id: u64) -> Option<ShareLedger> {
    let key = (symbol_short!("ledger"), property_id);
    env.storage().persistent().get(&key)
}

pub fn set_ledger(env: &Env, property_id: u64, ledger: &ShareLedger) {
    let key = (symbol_short!("ledger"), property_id);
    env.storage().persistent().set(&key, ledger);
}

// ============================================================================
// HOLDER BALANCES
// ============================================================================

pub fn get_share_balance(env: &Env, property_id: u64, holder: &Address) -> i128 {
    let key = (symbol_short!("shares"), property_id, holder.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_share_balance(env: &Env, property_id: u64, holder: &Address, amount: i128) {
    let key = (symbol_short!("shares"), property_id, holder.clone());
    env.storage().persistent().set(&key, &amount);
}
