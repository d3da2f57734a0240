use soroban_sdk::{symbol_short, Address, Env};

//
// MARKETPLACE EVENTS
//

// Listing opened; payload is (property_id, amount, price_per_share)
pub fn emit_listed(env: &Env, id: u64, seller: &Address, property_id: u64, amount: i128, price: i128) {
    env.events()
        .publish((symbol_short!("listed"), id, seller), (property_id, amount, price));
}

// Listing cancelled by its seller
pub fn emit_cancelled(env: &Env, id: u64, seller: &Address) {
    env.events().publish((symbol_short!("cancelled"), id), seller.clone());
}

// Fill executed; payload is (seller, amount, gross, fee)
pub fn emit_trade(
    env: &Env,
    id: u64,
    buyer: &Address,
    seller: &Address,
    amount: i128,
    gross: i128,
    fee: i128,
) {
    env.events()
        .publish((symbol_short!("trade"), id, buyer), (seller.clone(), amount, gross, fee));
}
