use soroban_sdk::{symbol_short, Address, Env};

//
// TOKEN EVENTS
//

// SEP-0041 standard transfer
pub fn emit_transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("transfer"), from, to), amount);
}

// SEP-0041 standard mint
pub fn emit_mint(env: &Env, to: &Address, amount: i128) {
    env.events().publish((symbol_short!("mint"), to), amount);
}

// SEP-0041 standard burn
pub fn emit_burn(env: &Env, from: &Address, amount: i128) {
    env.events().publish((symbol_short!("burn"), from), amount);
}

// Approval (SEP-41 + ERC-20 compatible)
pub fn emit_approval(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("approve"), owner, spender), amount);
}
