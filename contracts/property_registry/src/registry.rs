use crate::events;
use crate::storage;
use crate::types::{Property, RegistryError};
use crate::validation;
use brick_access::{ROLE_ADMIN, ROLE_OPERATOR, ROLE_VERIFIER};
use soroban_sdk::{contract, contractimpl, Address, Env, String};

//
// MAIN CONTRACT - PROPERTY REGISTRY
//

#[contract]
pub struct PropertyRegistry;

#[contractimpl]
impl PropertyRegistry {
    //
    // INITIALIZATION
    //

    /// Initializes the registry. Called once at deployment.
    ///
    /// The admin receives ROLE_ADMIN only; operator and verifier roles are
    /// wired explicitly afterwards.
    pub fn initialize(env: Env, admin: Address) -> Result<(), RegistryError> {
        if storage::has_admin(&env) {
            return Err(RegistryError::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_admin(&env, &admin);
        storage::set_property_count(&env, 0);
        brick_access::grant_role(&env, &admin, ROLE_ADMIN);

        Ok(())
    }

    //
    // REGISTRATION - CEI PATTERN
    //

    /// Registers a new property record (ROLE_OPERATOR only).
    ///
    /// `owner` is the beneficial owner and may differ from the registering
    /// operator. Ids are sequential from 0. The new record starts
    /// unverified and unlocked.
    ///
    /// # Errors
    /// - `Unauthorized`: caller lacks ROLE_OPERATOR
    /// - `DuplicateLocation`: the location string is already registered
    /// - `InvalidInput`: empty location, zero size or zero year
    pub fn register_property(
        env: Env,
        caller: Address,
        owner: Address,
        location: String,
        size: u64,
        year_built: u32,
        token_uri: String,
    ) -> Result<u64, RegistryError> {
        // === CHECKS ===
        caller.require_auth();
        storage::bump_critical_storage(&env);

        validation::require_initialized(&env)?;
        validation::require_role(&env, &caller, ROLE_OPERATOR)?;
        validation::require_valid_record(&location, size, year_built)?;
        validation::require_location_available(&env, &location)?;

        // === EFFECTS ===
        let id = storage::get_property_count(&env);
        let property = Property {
            id,
            owner: owner.clone(),
            location: location.clone(),
            size,
            year_built,
            token_uri,
            is_verified: false,
            is_locked: false,
        };

        storage::set_property(&env, id, &property);
        storage::set_location_id(&env, &location, id);
        storage::set_property_count(&env, id + 1);
        storage::bump_property(&env, id, &location);

        // === INTERACTIONS ===
        events::emit_registered(&env, id, &owner, &location);

        Ok(id)
    }

    //
    // VERIFICATION AND LOCKING - CEI PATTERN
    //

    /// Marks a registered property as verified (ROLE_VERIFIER only).
    ///
    /// Verification is monotonic: nothing ever resets the flag. Calling this
    /// on an already-verified record is a no-op and emits no second event.
    pub fn verify_property(env: Env, caller: Address, id: u64) -> Result<(), RegistryError> {
        // === CHECKS ===
        caller.require_auth();
        storage::bump_critical_storage(&env);

        validation::require_initialized(&env)?;
        validation::require_role(&env, &caller, ROLE_VERIFIER)?;

        let mut property =
            storage::get_property(&env, id).ok_or(RegistryError::PropertyNotFound)?;

        if property.is_verified {
            return Ok(());
        }

        // === EFFECTS ===
        property.is_verified = true;
        storage::set_property(&env, id, &property);

        // === INTERACTIONS ===
        events::emit_verified(&env, id, &caller);

        Ok(())
    }

    /// Locks a verified property against registry-level mutation
    /// (ROLE_OPERATOR only). Locking does not touch already-issued shares.
    ///
    /// # Errors
    /// - `PropertyNotFound`: no record under `id`
    /// - `NotVerified`: the record has not been verified yet
    pub fn lock_property(env: Env, caller: Address, id: u64) -> Result<(), RegistryError> {
        // === CHECKS ===
        caller.require_auth();
        storage::bump_critical_storage(&env);

        validation::require_initialized(&env)?;
        validation::require_role(&env, &caller, ROLE_OPERATOR)?;

        let mut property =
            storage::get_property(&env, id).ok_or(RegistryError::PropertyNotFound)?;

        if !property.is_verified {
            return Err(RegistryError::NotVerified);
        }

        // === EFFECTS ===
        property.is_locked = true;
        storage::set_property(&env, id, &property);

        // === INTERACTIONS ===
        events::emit_locked(&env, id);

        Ok(())
    }

    /// Unlocks a property (ROLE_OPERATOR only).
    pub fn unlock_property(env: Env, caller: Address, id: u64) -> Result<(), RegistryError> {
        // === CHECKS ===
        caller.require_auth();
        storage::bump_critical_storage(&env);

        validation::require_initialized(&env)?;
        validation::require_role(&env, &caller, ROLE_OPERATOR)?;

        let mut property =
            storage::get_property(&env, id).ok_or(RegistryError::PropertyNotFound)?;

        // === EFFECTS ===
        property.is_locked = false;
        storage::set_property(&env, id, &property);

        // === INTERACTIONS ===
        events::emit_unlocked(&env, id);

        Ok(())
    }

    //
    // READS
    //

    /// Returns the record under `id`.
    pub fn get_property(env: Env, id: u64) -> Result<Property, RegistryError> {
        storage::get_property(&env, id).ok_or(RegistryError::PropertyNotFound)
    }

    /// Returns the number of registered properties.
    pub fn property_count(env: Env) -> u64 {
        storage::bump_critical_storage(&env);
        storage::get_property_count(&env)
    }

    /// Checks whether a location string is already registered.
    pub fn location_taken(env: Env, location: String) -> bool {
        storage::get_location_id(&env, &location).is_some()
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
    ) -> Result<(), RegistryError> {
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
    ) -> Result<(), RegistryError> {
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

//
// UNIT TESTS
//
