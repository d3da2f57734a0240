use soroban_sdk::{symbol_short, Address, Env, String};

//
// REGISTRY EVENTS
//

// PropertyRegistered(id, owner, location)
pub fn emit_registered(env: &Env, id: u64, owner: &Address, location: &String) {
    env.events()
        .publish((symbol_short!("prop_reg"), id), (owner.clone(), location.clone()));
}

// PropertyVerified(id, verifier)
pub fn emit_verified(env: &Env, id: u64, verifier: &Address) {
    env.events()
        .publish((symbol_short!("prop_ver"), id), verifier.clone());
}

// PropertyLocked(id)
pub fn emit_locked(env: &Env, id: u64) {
    env.events().publish((symbol_short!("prop_lock"), id), ());
}

// PropertyUnlocked(id)
pub fn emit_unlocked(env: &Env, id: u64) {
    env.events().publish((symbol_short!("prop_unlk"), id), ());
}
