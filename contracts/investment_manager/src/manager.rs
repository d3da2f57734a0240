use crate::events;
use crate::storage;
use crate::types::InvestError;
use crate::validation;
use brick_access::ROLE_ADMIN;
use soroban_sdk::{contract, contractimpl, Address, Env};

/// Collaborator clients: WASM imports for wasm32, crate clients for host
/// builds.
#[cfg(target_arch = "wasm32")]
mod registry_contract {
    soroban_sdk::contractimport!(
        file = "../../target/wasm32-unknown-unknown/release/property_registry.wasm"
    );
    pub use Client as PropertyRegistryClient;
}

#[cfg(target_arch = "wasm32")]
mod ownership_contract {
    soroban_sdk::contractimport!(
        file = "../../target/wasm32-unknown-unknown/release/fractional_ownership.wasm"
    );
    pub use Client as FractionalOwnershipClient;
}

#[cfg(target_arch = "wasm32")]
use ownership_contract::FractionalOwnershipClient;
#[cfg(target_arch = "wasm32")]
use registry_contract::PropertyRegistryClient;

#[cfg(not(target_arch = "wasm32"))]
use fractional_ownership::FractionalOwnershipClient;
#[cfg(not(target_arch = "wasm32"))]
use property_registry::PropertyRegistryClient;

//
// MAIN CONTRACT - INVESTMENT MANAGER
//

#[contract]
pub struct InvestmentManager;

#[contractimpl]
impl InvestmentManager {
    //
    // INITIALIZATION
    //

    /// Initializes the investment orchestrator. Called once at deployment.
    ///
    /// Holds read-only references to the registry (lookups) and the
    /// ownership contract (issuance). This contract must be granted
    /// ROLE_OPERATOR on the ownership contract to issue shares.
    pub fn initialize(
        env: Env,
        admin: Address,
        registry: Address,
        ownership: Address,
        price_per_share: i128,
    ) -> Result<(), InvestError> {
        if storage::has_admin(&env) {
            return Err(InvestError::AlreadyInitialized);
        }
        admin.require_auth();
        validation::require_positive_amount(price_per_share)?;

        storage::set_admin(&env, &admin);
        storage::set_registry(&env, &registry);
        storage::set_ownership(&env, &ownership);
        storage::set_price_per_share(&env, price_per_share);
        brick_access::grant_role(&env, &admin, ROLE_ADMIN);

        Ok(())
    }

    //
    // INVESTMENT PATH - CEI PATTERN
    // Executes cross-contract issuance; runs under the reentrancy guard.
    //

    /// Issues `share_amount` shares of a property to the investor.
    ///
    /// The property must be registered, verified and unlocked — locking
    /// freezes new investment without touching already-issued shares. The
    /// ownership contract enforces the per-property allocation, so a mint
    /// past `total_shares` surfaces as its `SupplyExceeded`.
    ///
    /// # Errors
    /// - `PropertyNotFound`: no registry record under `property_id`
    /// - `PropertyNotVerified`: the record was never verified
    /// - `PropertyLocked`: the record is currently locked
    pub fn invest(
        env: Env,
        investor: Address,
        property_id: u64,
        share_amount: i128,
    ) -> Result<(), InvestError> {
        // === REENTRANCY GUARD ===
        if storage::is_reentrancy_locked(&env) {
            return Err(InvestError::Unauthorized);
        }
        storage::set_reentrancy_guard(&env, true);

        let result = (|| {
            // === CHECKS ===
            investor.require_auth();
            storage::bump_critical_storage(&env);

            validation::require_initialized(&env)?;
            validation::require_positive_amount(share_amount)?;

            let registry = PropertyRegistryClient::new(&env, &storage::get_registry(&env));
            let property = match registry.try_get_property(&property_id) {
                Ok(Ok(p)) => p,
                _ => return Err(InvestError::PropertyNotFound),
            };
            if !property.is_verified {
                return Err(InvestError::PropertyNotVerified);
            }
            if property.is_locked {
                return Err(InvestError::PropertyLocked);
            }

            let cost = storage::get_price_per_share(&env)
                .checked_mul(share_amount)
                .ok_or(InvestError::InvalidAmount)?;

            // === EFFECTS ===
            let invested = storage::get_investment(&env, &investor, property_id)
                .checked_add(share_amount)
                .ok_or(InvestError::InvalidAmount)?;
            let total = storage::get_total_invested(&env, property_id)
                .checked_add(share_amount)
                .ok_or(InvestError::InvalidAmount)?;

            storage::set_investment(&env, &investor, property_id, invested);
            storage::set_total_invested(&env, property_id, total);

            // === INTERACTIONS ===
            // Allocation and operator gating are the ownership contract's
            // call; its failure reverts this invocation as a whole.
            let ownership = FractionalOwnershipClient::new(&env, &storage::get_ownership(&env));
            ownership.mint_shares(
                &env.current_contract_address(),
                &property_id,
                &investor,
                &share_amount,
            );

            events::emit_invested(&env, &investor, property_id, share_amount, cost);

            Ok(())
        })();

        storage::set_reentrancy_guard(&env, false);
        result
    }

    //
    // READS
    //

    /// Returns the cumulative shares issued to an investor for a property.
    pub fn get_investment(env: Env, investor: Address, property_id: u64) -> i128 {
        storage::get_investment(&env, &investor, property_id)
    }

    /// Returns the cumulative shares issued for a property.
    pub fn total_invested(env: Env, property_id: u64) -> i128 {
        storage::get_total_invested(&env, property_id)
    }

    /// Returns the issuance price per share in BCT smallest units.
    pub fn price_per_share(env: Env) -> i128 {
        storage::bump_critical_storage(&env);
        storage::get_price_per_share(&env)
    }

    /// Returns the registry this manager validates against.
    pub fn registry(env: Env) -> Address {
        storage::bump_critical_storage(&env);
        storage::get_registry(&env)
    }

    /// Returns the ownership contract this manager issues through.
    pub fn ownership(env: Env) -> Address {
        storage::bump_critical_storage(&env);
        storage::get_ownership(&env)
    }

    //
    // ADMIN / ROLE MANAGEMENT
    //

    /// Retunes the issuance price (ROLE_ADMIN only).
    pub fn set_price_per_share(
        env: Env,
        caller: Address,
        price_per_share: i128,
    ) -> Result<(), InvestError> {
        caller.require_auth();
        storage::bump_critical_storage(&env);
        validation::require_initialized(&env)?;
        validation::require_role(&env, &caller, ROLE_ADMIN)?;
        validation::require_positive_amount(price_per_share)?;

        storage::set_price_per_share(&env, price_per_share);
        Ok(())
    }

    /// Grants role bits to an account (ROLE_ADMIN only). Idempotent.
    pub fn grant_role(
        env: Env,
        caller: Address,
        account: Address,
        role: u32,
    ) -> Result<(), InvestError> {
        caller.require_auth();
        storage::bump_critical_storage(&env);
        validation::require_initialized(&env)?;
        validation::require_role(&env, &caller, ROLE_ADMIN)?;

        brick_access::grant_role(&env, &account, role);
        Ok(())
    }

    /// Revokes role bits from an account (ROLE_ADMIN only). Idempotent.
    pub fn revoke_role(
        env: Env,
        caller: Address,
        account: Address,
        role: u32,
    ) -> Result<(), InvestError> {
        caller.require_auth();
        storage::bump_critical_storage(&env);
        validation::require_initialized(&env)?;
        validation::require_role(&env, &caller, ROLE_ADMIN)?;

        brick_access::revoke_role(&env, &account, role);
        Ok(())
    }

    /// Checks whether an account holds the given role bits.
    pub fn has_role(env: Env, account: Address, role: u32) -> bool {
        brick_access::has_role(&env, &account, role)
    }

    /// Returns the admin address set at initialization.
    pub fn get_admin(env: Env) -> Address {
        storage::bump_critical_storage(&env);
        storage::get_admin(&env)
    }
}
