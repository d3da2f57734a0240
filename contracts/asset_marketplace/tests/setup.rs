#![cfg(test)]
#![cfg(not(tarpaulin_include))]
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String};

use asset_marketplace::{AssetMarketplace, AssetMarketplaceClient};
use bct_token::{BctToken, BctTokenClient};
use brick_access::{ROLE_OPERATOR, ROLE_VERIFIER};
use fractional_ownership::{FractionalOwnership, FractionalOwnershipClient};
use property_registry::{PropertyRegistry, PropertyRegistryClient};

pub const CAP: i128 = 1_000_000_000;
pub const TRANSFER_DELAY: u64 = 60;
pub const FEE_BPS: u32 = 250; // 2.5%
pub const BCT_DISCOUNT_BPS: u32 = 2_000; // 20% off for BCT settlement

pub struct TestEnv<'a> {
    pub env: Env,
    pub token: BctTokenClient<'a>,
    pub registry: PropertyRegistryClient<'a>,
    pub ownership: FractionalOwnershipClient<'a>,
    pub market: AssetMarketplaceClient<'a>,
    pub admin: Address,
    pub operator: Address,
    pub verifier: Address,
}

impl<'a> TestEnv<'a> {
    /// Deploys and wires the full stack the way the deployment pipeline
    /// does: token + registry first, then ownership over the registry, then
    /// the marketplace holding ROLE_OPERATOR on the ownership contract.
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let operator = Address::generate(&env);
        let verifier = Address::generate(&env);

        let token_id = env.register_contract(None, BctToken);
        let token = BctTokenClient::new(&env, &token_id);
        token.initialize(&admin, &CAP, &TRANSFER_DELAY);

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

        let market_id = env.register_contract(None, AssetMarketplace);
        let market = AssetMarketplaceClient::new(&env, &market_id);
        market.initialize(&admin, &ownership_id, &token_id, &FEE_BPS, &BCT_DISCOUNT_BPS);
        ownership.grant_role(&admin, &market_id, &ROLE_OPERATOR);

        Self {
            env,
            token,
            registry,
            ownership,
            market,
            admin,
            operator,
            verifier,
        }
    }

    /// Registers + verifies a property, creates its ledger and mints
    /// `shares` to a fresh seller. Returns `(property_id, seller)`.
    pub fn seller_with_shares(&self, location: &str, shares: i128) -> (u64, Address) {
        let seller = Address::generate(&self.env);
        let id = self.registry.register_property(
            &self.operator,
            &seller,
            &String::from_str(&self.env, location),
            &1000,
            &2020,
            &String::from_str(&self.env, "ipfs://title-deed"),
        );
        self.registry.verify_property(&self.verifier, &id);
        self.ownership.create_shares(&self.operator, &id, &(shares * 10));
        self.ownership.mint_shares(&self.operator, &id, &seller, &shares);
        (id, seller)
    }

    /// Funds a fresh buyer with BCT and approves the marketplace for it.
    /// Zero amounts skip the respective call.
    pub fn funded_buyer(&self, balance: i128, approved: i128) -> Address {
        let buyer = Address::generate(&self.env);
        if balance > 0 {
            self.token.mint(&self.admin, &buyer, &balance);
        }
        if approved > 0 {
            self.token.approve(&buyer, &self.market.address, &approved);
        }
        buyer
    }
}
