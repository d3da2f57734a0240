#![cfg(test)]
#![cfg(not(tarpaulin_include))]
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{Address, Env};

use bct_token::{BctToken, BctTokenClient};

pub const CAP: i128 = 10_000_000_0000000; // 10M BCN with 7 decimals
pub const TRANSFER_DELAY: u64 = 60;

pub struct TestEnv<'a> {
    pub env: Env,
    pub client: BctTokenClient<'a>,
    pub admin: Address,
}

impl<'a> TestEnv<'a> {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);

        let contract_id = env.register_contract(None, BctToken);
        let client = BctTokenClient::new(&env, &contract_id);

        client.initialize(&admin, &CAP, &TRANSFER_DELAY);

        Self { env, client, admin }
    }

    pub fn funded_user(&self, amount: i128) -> Address {
        let user = Address::generate(&self.env);
        self.client.mint(&self.admin, &user, &amount);
        user
    }

    /// Advances the ledger clock past the transfer cooldown.
    #[allow(dead_code)]
    pub fn jump_past_cooldown(&self) {
        self.env
            .ledger()
            .with_mut(|l| l.timestamp += TRANSFER_DELAY);
    }
}
