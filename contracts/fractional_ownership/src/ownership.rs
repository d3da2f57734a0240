use crate::events;
use crate::storage;
use crate::types::{OwnershipError, ShareLedger};
use crate::validation;
use brick_access::{ROLE_ADMIN, ROLE_OPERATOR};
use soroban_sdk::{contract, contractimpl, Address, Env, String};

/// Registry client: WASM import for wasm32, crate client for host builds.
#[cfg(target_arch = "wasm32")]
mod registry_contract {
    soroban_sdk::contractimport!(
        file = "../../target/wasm32-unknown-unknown/release/property_registry.wasm"
    );
    pub use Client as PropertyRegistryClient;
}

#[cfg(target_arch = "wasm32")]
use registry_contract::PropertyRegistryClient;

#[cfg(not(target_arch = "wasm32"))]
use property_registry::PropertyRegistryClient;

//
// MAIN CONTRACT - FRACTIONAL OWNERSHIP
//

#[contract]
pub struct FractionalOwnership;

#[contractimpl]
impl FractionalOwnership {
    //
    // INITIALIZATION
    //

    /// Initializes the share ledger contract. Called once at deployment.
    ///
    /// `registry` is a read-only back-reference: this contract looks records
    /// up there and never mutates registry state. ROLE_OPERATOR is granted
    /// afterwards to the orchestrating contracts (marketplace, investment
    /// manager) — and only to them.
    pub fn initialize(
        env: Env,
        admin: Address,
        registry: Address,
        name: String,
        symbol: String,
    ) -> Result<(), OwnershipError> {
        if storage::has_admin(&env) {
            return Err(OwnershipError::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_admin(&env, &admin);
        storage::set_registry(&env, &registry);
        storage::set_name(&env, &name);
        storage::set_symbol(&env, &symbol);
        brick_access::grant_role(&env, &admin, ROLE_ADMIN);

        Ok(())
    }

    //
    // LEDGER LIFECYCLE - CEI PATTERN
    //

    /// Creates the share ledger for a property (ROLE_OPERATOR only).
    ///
    /// The property must exist in the registry and already be verified.
    ///
    /// # Errors
    /// - `PropertyNotFound`: the registry has no record under `property_id`
    /// - `PropertyNotVerified`: the record exists but was not verified
    /// - `SharesAlreadyCreated`: a ledger already exists for this property
    pub fn create_shares(
        env: Env,
        caller: Address,
        property_id: u64,
        total_shares: i128,
    ) -> Result<(), OwnershipError> {
        // === CHECKS ===
        caller.require_auth();
        storage::bump_critical_storage(&env);

        validation::require_initialized(&env)?;
        validation::require_role(&env, &caller, ROLE_OPERATOR)?;
        validation::require_positive_amount(total_shares)?;

        if storage::get_ledger(&env, property_id).is_some() {
            return Err(OwnershipError::SharesAlreadyCreated);
        }

        let registry = storage::get_registry(&env);
        let registry_client = PropertyRegistryClient::new(&env, &registry);
        let property = match registry_client.try_get_property(&property_id) {
            Ok(Ok(p)) => p,
            _ => return Err(OwnershipError::PropertyNotFound),
        };
        if !property.is_verified {
            return Err(OwnershipError::PropertyNotVerified);
        }

        // === EFFECTS ===
        let ledger = ShareLedger {
            property_id,
            total_shares,
            shares_outstanding: 0,
        };
        storage::set_ledger(&env, property_id, &ledger);
        storage::bump_ledger(&env, property_id);

        // === INTERACTIONS ===
        events::emit_shares_created(&env, property_id, total_shares);

        Ok(())
    }

    /// Mints shares of a property to a holder (ROLE_OPERATOR only).
    ///
    /// # Errors
    /// - `LedgerNotFound`: `create_shares` was never called for the property
    /// - `SupplyExceeded`: the mint would push outstanding shares past the
    ///   property's total allocation
    pub fn mint_shares(
        env: Env,
        caller: Address,
        property_id: u64,
        to: Address,
        amount: i128,
    ) -> Result<(), OwnershipError> {
        // === CHECKS ===
        caller.require_auth();
        storage::bump_critical_storage(&env);

        validation::require_initialized(&env)?;
        validation::require_role(&env, &caller, ROLE_OPERATOR)?;
        validation::require_positive_amount(amount)?;

        let mut ledger = validation::require_ledger(&env, property_id)?;

        let new_outstanding = ledger
            .shares_outstanding
            .checked_add(amount)
            .ok_or(OwnershipError::SupplyExceeded)?;
        if new_outstanding > ledger.total_shares {
            return Err(OwnershipError::SupplyExceeded);
        }

        // === EFFECTS ===
        let balance = storage::get_share_balance(&env, property_id, &to);
        let new_balance = balance
            .checked_add(amount)
            .ok_or(OwnershipError::InvalidAmount)?;

        ledger.shares_outstanding = new_outstanding;
        storage::set_ledger(&env, property_id, &ledger);
        storage::set_share_balance(&env, property_id, &to, new_balance);
        storage::bump_ledger(&env, property_id);

        // === INTERACTIONS ===
        events::emit_shares_minted(&env, property_id, &to, amount);

        Ok(())
    }

    /// Moves shares between holders on behalf of users (ROLE_OPERATOR only).
    ///
    /// # Errors
    /// - `InsufficientShares`: `from` holds fewer shares than `amount`
    pub fn transfer_shares(
        env: Env,
        caller: Address,
        property_id: u64,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), OwnershipError> {
        // === CHECKS ===
        caller.require_auth();
        storage::bump_critical_storage(&env);

        validation::require_initialized(&env)?;
        validation::require_role(&env, &caller, ROLE_OPERATOR)?;
        validation::require_positive_amount(amount)?;
        validation::require_ledger(&env, property_id)?;
        validation::require_sufficient_shares(&env, property_id, &from, amount)?;

        // === EFFECTS ===
        let from_balance = storage::get_share_balance(&env, property_id, &from);
        let to_balance = storage::get_share_balance(&env, property_id, &to);

        let new_from_balance = from_balance
            .checked_sub(amount)
            .ok_or(OwnershipError::InsufficientShares)?;
        let new_to_balance = to_balance
            .checked_add(amount)
            .ok_or(OwnershipError::InvalidAmount)?;

        storage::set_share_balance(&env, property_id, &from, new_from_balance);
        storage::set_share_balance(&env, property_id, &to, new_to_balance);

        // === INTERACTIONS ===
        events::emit_shares_transferred(&env, property_id, &from, &to, amount);

        Ok(())
    }

    //
    // READS
    //

    /// Returns the share ledger of a property.
    pub fn get_ledger(env: Env, property_id: u64) -> Result<ShareLedger, OwnershipError> {
        storage::get_ledger(&env, property_id).ok_or(OwnershipError::LedgerNotFound)
    }

    /// Returns a holder's share balance for a property.
    pub fn share_balance(env: Env, property_id: u64, holder: Address) -> i128 {
        storage::get_share_balance(&env, property_id, &holder)
    }

    /// Returns the registry this contract reads records from.
    pub fn registry(env: Env) -> Address {
        storage::bump_critical_storage(&env);
        storage::get_registry(&env)
    }

    /// Returns the share token name.
    pub fn name(env: Env) -> String {
        storage::bump_critical_storage(&env);
        storage::get_name(&env)
    }

    /// Returns the share token symbol.
    pub fn symbol(env: Env) -> String {
        storage::bump_critical_storage(&env);
        storage::get_symbol(&env)
    }

    //
    // ROLE MANAGEMENT
    //

    /// Grants role bits to an account (ROLE_ADMIN only). Idempotent.
    pub fn grant_role(
        env: Env,
        caller: Address,
        account: Address,
        role: u32,
    ) -> Result<(), OwnershipError> {
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
    ) -> Result<(), OwnershipError> {
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

    /// Returns the full role bitmap of an account.
    pub fn get_roles(env: Env, account: Address) -> u32 {
        brick_access::get_roles(&env, &account)
    }

    /// Returns the admin address set at initialization.
    pub fn get_admin(env: Env) -> Address {
        storage::bump_critical_storage(&env);
        storage::get_admin(&env)
    }
}
