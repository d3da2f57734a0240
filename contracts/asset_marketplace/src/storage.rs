use crate::types::Listing;
use soroban_sdk::{symbol_short, Address, Env};

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

/// Bumps the TTL of critical instance storage (wiring, fee schedule, counter)
pub fn bump_critical_storage(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(CRITICAL_STORAGE_THRESHOLD, CRITICAL_STORAGE_TTL);
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
// ADMIN / WIRING
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

pub fn get_ownership(env: &Env) -> Address {
    env.storage().instance().get(&symbol_short!("ownership")).unwrap()
}

pub fn set_ownership(env: &Env, ownership: &Address) {
    env.storage().instance().set(&symbol_short!("ownership"), ownership);
}

pub fn get_token(env: &Env) -> Address {
    env.storage().instance().get(&symbol_short!("token")).unwrap()
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&symbol_short!("token"), token);
}

/// Fee receiver; set to the admin at initialization.
pub fn get_collector(env: &Env) -> Address {
    env.storage().instance().get(&symbol_short!("collector")).unwrap()
}

pub fn set_collector(env: &Env, collector: &Address) {
    env.storage().instance().set(&symbol_short!("collector"), collector);
}

// ============================================================================
// FEE SCHEDULE (basis points)
// ============================================================================

pub fn get_fee_bps(env: &Env) -> u32 {
    env.storage().instance().get(&symbol_short!("fee_bps")).unwrap_or(0)
}

pub fn set_fee_bps(env: &Env, bps: u32) {
    env.storage().instance().set(&symbol_short!("fee_bps"), &bps);
}

pub fn get_discount_bps(env: &Env) -> u32 {
    env.storage().instance().get(&symbol_short!("disc_bps")).unwrap_or(0)
}

pub fn set_discount_bps(env: &Env, bps: u32) {
    env.storage().instance().set(&symbol_short!("disc_bps"), &bps);
}

// ============================================================================
// LISTINGS
// ============================================================================

pub fn get_listing_count(env: &Env) -> u64 {
    env.storage().instance().get(&symbol_short!("list_cnt")).unwrap_or(0)
}

pub fn set_listing_count(env: &Env, count: u64) {
    env.storage().instance().set(&symbol_short!("list_cnt"), &count);
}

pub fn get_listing(env: &Env, id: u64) -> Option<Listing> {
    let key = (symbol_short!("listing"), id);
    env.storage().persistent().get(&key)
}

pub fn set_listing(env: &Env, id: u64, listing: &Listing) {
    let key = (symbol_short!("listing"), id);
    env.storage().persistent().set(&key, listing);
}
