#![cfg(test)]
#![cfg(not(tarpaulin_include))]
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String};

use brick_access::{ROLE_OPERATOR, ROLE_VERIFIER};
use fractional_ownership::{FractionalOwnership, FractionalOwnershipClient};
use investment_manager::{InvestmentManager, InvestmentManagerClient};
use property_registry::{PropertyRegistry, PropertyRegistryClient};

pub const PRICE_PER_SHARE: i128 = 25;

pub struct TestEnv<'a> {
    pub env: Env,
    pub registry: PropertyRegistryClient<'a>,
    pub ownership: FractionalOwnershipClient<'a>,
    pub manager: InvestmentManagerClient<'a>,
    pub admin: Address,
    pub operator: Address,
    pub verifier: Address,
}

impl<'a> TestEnv<'a> {
    /// Deploys registry + ownership + manager and grants the manager
    /// ROLE_OPERATOR on the ownership contract, as the deployment pipeline
    /// does.
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let operator = Address::generate(&env);
        let verifier = Address::generate(&env);

        let registry_id = env.register_contract(None, PropertyRegistry);
        let registry = PropertyRegistryClient::new(&env, &registry_id);
        registry.initialize(&admin);
        registry.grant_role(&admin, &operator, &ROLE_OPERATOR);
        registry.grant_role(&admin, &verifier, &ROLE_VERIFIER);

        let ownership_id = env.register_contract(None, FractionalOwnership);
        let ownership = FractionalOwnershipClient::new(&env, &ownership_id);
        ownership.initialize(
            &admin,
            &registry_id,
            &String::from_str(&env, "BrickEarn Property Share"),
            &String::from_str(&env, "BEPS"),
        );
        ownership.grant_role(&admin, &operator, &ROLE_OPERATOR);

        let manager_id = env.register_contract(None, InvestmentManager);
        let manager = InvestmentManagerClient::new(&env, &manager_id);
        manager.initialize(&admin, &registry_id, &ownership_id, &PRICE_PER_SHARE);
        ownership.grant_role(&admin, &manager_id, &ROLE_OPERATOR);

        Self {
            env,
            registry,
            ownership,
            manager,
            admin,
            operator,
            verifier,
        }
    }

    /// Registers a verified property with a share ledger of `total_shares`.
    pub fn investable_property(&self, location: &str, total_shares: i128) -> u64 {
        let owner = Address::generate(&self.env);
        let id = self.registry.register_property(
            &self.operator,
            &owner,
            &String::from_str(&self.env, location),
            &1000,
            &2020,
            &String::from_str(&self.env, "ipfs://title-deed"),
        );
        self.registry.verify_property(&self.verifier, &id);
        self.ownership.create_shares(&self.operator, &id, &total_shares);
        id
    }
}
