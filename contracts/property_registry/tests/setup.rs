#![cfg(test)]
#![cfg(not(tarpaulin_include))]
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String};

use brick_access::{ROLE_OPERATOR, ROLE_VERIFIER};
use property_registry::{PropertyRegistry, PropertyRegistryClient};

pub struct TestEnv<'a> {
    pub env: Env,
    pub client: PropertyRegistryClient<'a>,
    pub admin: Address,
    pub operator: Address,
    pub verifier: Address,
    pub user: Address,
}

impl<'a> TestEnv<'a> {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let operator = Address::generate(&env);
        let verifier = Address::generate(&env);
        let user = Address::generate(&env);

        let contract_id = env.register_contract(None, PropertyRegistry);
        let client = PropertyRegistryClient::new(&env, &contract_id);

        client.initialize(&admin);
        client.grant_role(&admin, &operator, &ROLE_OPERATOR);
        client.grant_role(&admin, &verifier, &ROLE_VERIFIER);

        Self {
            env,
            client,
            admin,
            operator,
            verifier,
            user,
        }
    }

    /// Registers a record owned by `self.user` and returns its id.
    pub fn register(&self, location: &str, token_uri: &str) -> u64 {
        self.client.register_property(
            &self.operator,
            &self.user,
            &String::from_str(&self.env, location),
            &1000,
            &2020,
            &String::from_str(&self.env, token_uri),
        )
    }
}
