use soroban_sdk::{symbol_short, Address, Env};

//
// SHARE LEDGER EVENTS
//

// Ledger created for a property; payload is the total share allocation
pub fn emit_shares_created(env: &Env, property_id: u64, total_shares: i128) {
    env.events()
        .publish((symbol_short!("sh_create"), property_id), total_shares);
}

// Shares minted to a holder
pub fn emit_shares_minted(env: &Env, property_id: u64, to: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("sh_mint"), property_id, to), amount);
}

// Shares moved between holders
pub fn emit_shares_transferred(
    env: &Env,
    property_id: u64,
    from: &Address,
    to: &Address,
    amount: i128,
) {
    env.events()
        .publish((symbol_short!("sh_xfer"), property_id, from), (to.clone(), amount));
}
