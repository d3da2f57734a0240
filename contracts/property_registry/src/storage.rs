use crate::types::Property;
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

/// Bumps the TTL of critical instance storage (admin, record counter)
pub fn bump_critical_storage(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(CRITICAL_STORAGE_THRESHOLD, CRITICAL_STORAGE_TTL);
}

/// Bumps the TTL of a property record and its location index entry
pub fn bump_property(env: &Env, id: u64, location: &String) {
    let key = (symbol_short!("prop"), id);
    env.storage()
        .persistent()
        .extend_ttl(&key, CRITICAL_STORAGE_THRESHOLD, CRITICAL_STORAGE_TTL);

    let loc_key = (symbol_short!("loc"), location.clone());
    env.storage()
        .persistent()
        .extend_ttl(&loc_key, CRITICAL_STORAGE_THRESHOLD, CRITICAL_STORAGE_TTL);
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
// RECORD COUNTER
// ============================================================================

/// Number of registered properties; the next record takes this value as id.
pub fn get_property_count(env: &Env) -> u64 {
    env.storage().instance().get(&symbol_short!("prop_cnt")).unwrap_or(0)
}

pub fn set_property_count(env: &Env, count: u64) {
    env.storage().instance().set(&symbol_short!("prop_cnt"), &count);
}

// ============================================================================
// PROPERTY RECORDS
// ============================================================================

pub fn get_property(env: &Env, id: u64) -> Option<Property> {
    let key = (symbol_short!("prop"), id);
    env.storage().persistent().get(&key)
}

pub fn set_property(env: &Env, id: u64, property: &Property) {
    let key = (symbol_short!("prop"), id);
    env.storage().persistent().set(&key, property);
}

// ============================================================================
// LOCATION INDEX
// ============================================================================

/// Exact-match location index; maps a taken location to its record id.
pub fn get_location_id(env: &Env, location: &String) -> Option<u64> {
    let key = (symbol_short!("loc"), location.clone());
    env.storage().persistent().get(&key)
}

pub fn set_location_id(env: &Env, location: &String, id: u64) {
    let key = (symbol_short!("loc"), location.clone());
    env.storage().persistent().set(&key, &id);
}
