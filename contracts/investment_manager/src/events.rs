use soroban_sdk::{symbol_short, Address, Env};

//
// INVESTMENT EVENTS
//

// Shares issued to an investor; payload is (amount, cost in BCT units)
pub fn emit_invested(env: &Env, investor: &Address, property_id: u64, amount: i128, cost: i128) {
    env.events()
        .publish((symbol_short!("invested"), investor, property_id), (amount, cost));
}
