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

/// Bumps the TTL of critical instance storage (wiring, issuance price)
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

pub fn get_registry(env: &Env) -> Address {
    env.storage().instance().get(&symbol_short!("registry")).unwrap()
}

pub fn set_registry(env: &Env, registry: &Address) {
    env.storage().instance().set(&symbol_short!("registry"), registry);
}

pub fn get_ownership(env: &Env) -> Address {
    env.storage().instance().get(&symbol_short!("ownership")).unwrap()
}

pub fn set_ownership(env: &Env, ownership: &Address) {
    env.storage().instance().set(&symbol_short!("ownership"), ownership);
}

// ============================================================================
// ISSUANCE PRICE
// ============================================================================

pub fn get_price_per_share(env: &Env) -> i128 {
    env.storage().instance().get(&symbol_short!("price")).unwrap_or(0)
}

pub fn set_price_per_share(env: &Env, price: i128) {
    env.storage().instance().set(&symbol_short!("price"), &price);
}

// ============================================================================
// INVESTMENT BOOKKEEPING
// ============================================================================

/// Cumulative shares issued to an investor for a property.
pub fn get_investment(env: &Env, investor: &Address, property_id: u64) -> i128 {
    let key = (symbol_short!("invest"), investor.clone(), property_id);
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_investment(env: &Env, investor: &Address, property_id: u64, amount: i128) {
    let key = (symbol_short!("invest"), investor.clone(), property_id);
    env.storage().persistent().set(&key, &amount);
}

/// Cumulative shares issued across all investors for a property.
pub fn get_total_invested(env: &Env, property_id: u64) -> i128 {
    let key = (symbol_short!("inv_tot"), property_id);
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_total_invested(env: &Env, property_id: u64, amount: i128) {
    let key = (symbol_short!("inv_tot"), property_id);
    env.storage().persistent().set(&key, &amount);
}
