use crate::events;
use crate::storage;
use crate::types::{TokenError, TokenMetadata};
use crate::validation;
use brick_access::{ROLE_ADMIN, ROLE_MINTER};
use soroban_sdk::{contract, contractimpl, Address, Env, String};

//
// MAIN CONTRACT - BCT TOKEN
//

#[contract]
pub struct BctToken;

#[contractimpl]
impl BctToken {
    //
    // INITIALIZATION
    //

    /// Initializes the BCT token contract. Called once at deployment.
    ///
    /// The token identity is fixed: name "BrickToken", symbol "$BCN",
    /// 7 decimals. `cap` and `transfer_delay` (seconds between outbound
    /// transfers per account) are immutable after this call.
    ///
    /// # Errors
    /// - `AlreadyInitialized`: the contract was initialized before
    /// - `InvalidAmount`: non-positive cap
    pub fn initialize(
        env: Env,
        admin: Address,
        cap: i128,
        transfer_delay: u64,
    ) -> Result<(), TokenError> {
        // CHECKS
        if storage::has_admin(&env) {
            return Err(TokenError::AlreadyInitialized);
        }
        admin.require_auth();
        validation::require_positive_amount(cap)?;

        // EFFECTS
        storage::set_admin(&env, &admin);
        storage::set_cap(&env, cap);
        storage::set_transfer_delay(&env, transfer_delay);
        storage::set_total_supply(&env, 0);

        let metadata = TokenMetadata {
            name: String::from_str(&env, "BrickToken"),
            symbol: String::from_str(&env, "$BCN"),
            decimals: storage::DECIMALS,
        };
        storage::set_metadata(&env, &metadata);

        // The deploying admin is the de-facto minter until roles are rewired
        brick_access::grant_role(&env, &admin, ROLE_ADMIN | ROLE_MINTER);

        Ok(())
    }

    //
    // STANDARD READS
    // Read-only functions; no reentrancy protection needed.
    //

    /// Returns the token name.
    pub fn name(env: Env) -> String {
        storage::bump_critical_storage(&env);
        storage::get_metadata(&env).name
    }

    /// Returns the token symbol.
    pub fn symbol(env: Env) -> String {
        storage::bump_critical_storage(&env);
        storage::get_metadata(&env).symbol
    }

    /// Returns the number of decimals.
    pub fn decimals(env: Env) -> u32 {
        storage::bump_critical_storage(&env);
        storage::get_metadata(&env).decimals
    }

    /// Returns the immutable supply cap.
    pub fn cap(env: Env) -> i128 {
        storage::bump_critical_storage(&env);
        storage::get_cap(&env)
    }

    /// Returns the configured cooldown window in seconds.
    pub fn transfer_delay(env: Env) -> u64 {
        storage::bump_critical_storage(&env);
        storage::get_transfer_delay(&env)
    }

    /// Returns the balance of an address.
    pub fn balance(env: Env, id: Address) -> i128 {
        storage::get_balance(&env, &id)
    }

    /// Returns the total supply.
    pub fn total_supply(env: Env) -> i128 {
        storage::bump_critical_storage(&env);
        storage::get_total_supply(&env)
    }

    /// Returns the ledger timestamp of the last outbound transfer of `id`
    /// (0 when the account never transferred).
    pub fn last_transfer(env: Env, id: Address) -> u64 {
        storage::get_last_transfer(&env, &id).unwrap_or(0)
    }

    /// Returns the remaining allowance from `from` to `spender`.
    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        storage::get_allowance(&env, &from, &spender)
    }

    //
    // TRANSFERS - CEI PATTERN
    // State-changing entry points run under the reentrancy guard.
    //

    /// Transfers tokens from `from` to `to`.
    ///
    /// Enforces the per-sender cooldown: an account that transferred within
    /// the configured window is rejected with `TransferDelayNotMet`. A
    /// successful call stamps the sender's cooldown clock.
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        // === REENTRANCY GUARD ===
        if storage::is_reentrancy_locked(&env) {
            return Err(TokenError::Unauthorized);
        }
        storage::set_reentrancy_guard(&env, true);

        let result = (|| {
            // === CHECKS ===
            from.require_auth();
            storage::bump_critical_storage(&env);

            validation::require_initialized(&env)?;
            validation::require_positive_amount(amount)?;
            validation::require_transfer_delay_elapsed(&env, &from)?;
            validation::require_sufficient_balance(&env, &from, amount)?;

            // === EFFECTS ===
            let from_balance = storage::get_balance(&env, &from);
            let to_balance = storage::get_balance(&env, &to);

            let new_from_balance = from_balance
                .checked_sub(amount)
                .ok_or(TokenError::InsufficientBalance)?;
            let new_to_balance = to_balance
                .checked_add(amount)
                .ok_or(TokenError::InvalidAmount)?;

            storage::set_balance(&env, &from, new_from_balance);
            storage::set_balance(&env, &to, new_to_balance);
            storage::set_last_transfer(&env, &from, env.ledger().timestamp());
            storage::bump_balance(&env, &from);
            storage::bump_balance(&env, &to);

            // === INTERACTIONS ===
            events::emit_transfer(&env, &from, &to, amount);

            Ok(())
        })();

        storage::set_reentrancy_guard(&env, false);
        result
    }

    /// Transfers tokens on behalf of `from` using a previously granted
    /// allowance.
    ///
    /// The allowance itself is the throttle here, so the cooldown window is
    /// not re-checked; the holder's clock is still stamped on success.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        // === REENTRANCY GUARD ===
        if storage::is_reentrancy_locked(&env) {
            return Err(TokenError::Unauthorized);
        }
        storage::set_reentrancy_guard(&env, true);

        let result = (|| {
            // === CHECKS ===
            spender.require_auth();
            storage::bump_critical_storage(&env);

            validation::require_initialized(&env)?;
            validation::require_positive_amount(amount)?;
            validation::require_sufficient_allowance(&env, &from, &spender, amount)?;
            validation::require_sufficient_balance(&env, &from, amount)?;

            // === EFFECTS ===
            let allowance = storage::get_allowance(&env, &from, &spender);
            let new_allowance = allowance
                .checked_sub(amount)
                .ok_or(TokenError::InsufficientAllowance)?;

            let from_balance = storage::get_balance(&env, &from);
            let to_balance = storage::get_balance(&env, &to);

            let new_from_balance = from_balance
                .checked_sub(amount)
                .ok_or(TokenError::InsufficientBalance)?;
            let new_to_balance = to_balance
                .checked_add(amount)
                .ok_or(TokenError::InvalidAmount)?;

            storage::set_allowance(&env, &from, &spender, new_allowance);
            storage::set_balance(&env, &from, new_from_balance);
            storage::set_balance(&env, &to, new_to_balance);
            storage::set_last_transfer(&env, &from, env.ledger().timestamp());

            // === INTERACTIONS ===
            events::emit_transfer(&env, &from, &to, amount);

            Ok(())
        })();

        storage::set_reentrancy_guard(&env, false);
        result
    }

    /// Approves `spender` to move up to `amount` of `from`'s tokens.
    /// A zero amount clears the allowance.
    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        // CHECKS
        from.require_auth();
        storage::bump_critical_storage(&env);
        validation::require_initialized(&env)?;
        if amount < 0 {
            return Err(TokenError::InvalidAmount);
        }

        // EFFECTS
        storage::set_allowance(&env, &from, &spender, amount);

        // INTERACTIONS
        events::emit_approval(&env, &from, &spender, amount);

        Ok(())
    }

    //
    // MINT AND BURN - CEI PATTERN
    //

    /// Creates new tokens (ROLE_MINTER only).
    ///
    /// # Errors
    /// - `Unauthorized`: caller does not hold ROLE_MINTER
    /// - `CapExceeded`: `total_supply + amount` would exceed the cap
    pub fn mint(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        // === REENTRANCY GUARD ===
        if storage::is_reentrancy_locked(&env) {
            return Err(TokenError::Unauthorized);
        }
        storage::set_reentrancy_guard(&env, true);

        let result = (|| {
            // === CHECKS ===
            caller.require_auth();
            storage::bump_critical_storage(&env);

            validation::require_initialized(&env)?;
            validation::require_role(&env, &caller, ROLE_MINTER)?;
            validation::require_positive_amount(amount)?;
            validation::require_cap_not_exceeded(&env, amount)?;

            // === EFFECTS ===
            let current_balance = storage::get_balance(&env, &to);
            let new_balance = current_balance
                .checked_add(amount)
                .ok_or(TokenError::InvalidAmount)?;

            let current_supply = storage::get_total_supply(&env);
            let new_supply = current_supply
                .checked_add(amount)
                .ok_or(TokenError::CapExceeded)?;

            storage::set_balance(&env, &to, new_balance);
            storage::set_total_supply(&env, new_supply);

            // === INTERACTIONS ===
            events::emit_mint(&env, &to, amount);

            Ok(())
        })();

        storage::set_reentrancy_guard(&env, false);
        result
    }

    /// Destroys tokens held by `from`. Holder-authorized.
    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), TokenError> {
        // === REENTRANCY GUARD ===
        if storage::is_reentrancy_locked(&env) {
            return Err(TokenError::Unauthorized);
        }
        storage::set_reentrancy_guard(&env, true);

        let result = (|| {
            // === CHECKS ===
            from.require_auth();
            storage::bump_critical_storage(&env);

            validation::require_initialized(&env)?;
            validation::require_positive_amount(amount)?;
            validation::require_sufficient_balance(&env, &from, amount)?;

            // === EFFECTS ===
            let current_balance = storage::get_balance(&env, &from);
            let new_balance = current_balance
                .checked_sub(amount)
                .ok_or(TokenError::InsufficientBalance)?;

            let current_supply = storage::get_total_supply(&env);
            let new_supply = current_supply
                .checked_sub(amount)
                .ok_or(TokenError::InvalidAmount)?;

            storage::set_balance(&env, &from, new_balance);
            storage::set_total_supply(&env, new_supply);

            // === INTERACTIONS ===
            events::emit_burn(&env, &from, amount);

            Ok(())
        })();

        storage::set_reentrancy_guard(&env, false);
        result
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
    ) -> Result<(), TokenError> {
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
    ) -> Result<(), TokenError> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::{Address as _, Ledger};
    use soroban_sdk::Env;

    const CAP: i128 = 1_000_000_0000000; // 1M BCN with 7 decimals
    const DELAY: u64 = 60;

    fn create_client(env: &Env) -> (BctTokenClient, Address) {
        let contract_id = env.register_contract(None, BctToken);
        let client = BctTokenClient::new(env, &contract_id);
        let admin = Address::generate(env);

        client.initialize(&admin, &CAP, &DELAY);
        (client, admin)
    }

    #[test]
    fn test_initialize_identity() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, admin) = create_client(&env);

        assert_eq!(client.name(), String::from_str(&env, "BrickToken"));
        assert_eq!(client.symbol(), String::from_str(&env, "$BCN"));
        assert_eq!(client.decimals(), 7);
        assert_eq!(client.cap(), CAP);
        assert_eq!(client.transfer_delay(), DELAY);
        assert_eq!(client.total_supply(), 0);
        assert_eq!(client.get_admin(), admin);
        assert!(client.has_role(&admin, &ROLE_ADMIN));
        assert!(client.has_role(&admin, &ROLE_MINTER));
    }

    #[test]
    fn test_initialize_twice_fails() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, admin) = create_client(&env);

        let res = client.try_initialize(&admin, &CAP, &DELAY);
        assert_eq!(res.unwrap_err().unwrap(), TokenError::AlreadyInitialized);
    }

    #[test]
    fn test_mint_and_transfer() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, admin) = create_client(&env);
        let user = Address::generate(&env);

        client.mint(&admin, &admin, &1_000);
        assert_eq!(client.total_supply(), 1_000);

        client.transfer(&admin, &user, &400);
        assert_eq!(client.balance(&admin), 600);
        assert_eq!(client.balance(&user), 400);
    }

    #[test]
    fn test_transfer_cooldown_blocks_second_transfer() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, admin) = create_client(&env);
        let a = Address::generate(&env);
        let b = Address::generate(&env);

        client.mint(&admin, &a, &100);

        client.transfer(&a, &b, &10);
        assert_eq!(client.balance(&a), 90);

        // Same timestamp: cooldown has not elapsed
        let res = client.try_transfer(&a, &b, &10);
        assert_eq!(res.unwrap_err().unwrap(), TokenError::TransferDelayNotMet);
        assert_eq!(client.balance(&a), 90);
        assert_eq!(client.balance(&b), 10);

        // After the window the sender may move again
        env.ledger().with_mut(|l| l.timestamp += DELAY);
        client.transfer(&a, &b, &10);
        assert_eq!(client.balance(&a), 80);
    }

    #[test]
    fn test_cooldown_is_per_sender() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, admin) = create_client(&env);
        let a = Address::generate(&env);
        let b = Address::generate(&env);

        client.mint(&admin, &a, &100);
        client.mint(&admin, &b, &100);

        // Receiving does not stamp b's clock
        client.transfer(&a, &b, &10);
        client.transfer(&b, &a, &10);

        assert_eq!(client.balance(&a), 100);
        assert_eq!(client.balance(&b), 100);
    }

    #[test]
    fn test_cap_boundary() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, admin) = create_client(&env);

        // Exactly the cap succeeds
        client.mint(&admin, &admin, &CAP);
        assert_eq!(client.total_supply(), CAP);

        // Any further positive mint fails
        let res = client.try_mint(&admin, &admin, &1);
        assert_eq!(res.unwrap_err().unwrap(), TokenError::CapExceeded);
        assert_eq!(client.total_supply(), CAP);
    }

    #[test]
    fn test_mint_requires_minter_role() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, _admin) = create_client(&env);
        let outsider = Address::generate(&env);

        let res = client.try_mint(&outsider, &outsider, &100);
        assert_eq!(res.unwrap_err().unwrap(), TokenError::Unauthorized);
        assert_eq!(client.balance(&outsider), 0);
        assert_eq!(client.total_supply(), 0);
    }

    #[test]
    fn test_transfer_insufficient_balance() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, admin) = create_client(&env);
        let user = Address::generate(&env);

        client.mint(&admin, &user, &50);
        let res = client.try_transfer(&user, &admin, &51);
        assert_eq!(res.unwrap_err().unwrap(), TokenError::InsufficientBalance);
        assert_eq!(client.balance(&user), 50);
    }

    #[test]
    fn test_allowance_flow() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, admin) = create_client(&env);
        let spender = Address::generate(&env);
        let receiver = Address::generate(&env);

        client.mint(&admin, &admin, &1_000);
        client.approve(&admin, &spender, &300);
        assert_eq!(client.allowance(&admin, &spender), 300);

        client.transfer_from(&spender, &admin, &receiver, &200);
        assert_eq!(client.allowance(&admin, &spender), 100);
        assert_eq!(client.balance(&receiver), 200);

        let res = client.try_transfer_from(&spender, &admin, &receiver, &200);
        assert_eq!(res.unwrap_err().unwrap(), TokenError::InsufficientAllowance);
    }

    #[test]
    fn test_burn_reduces_supply() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, admin) = create_client(&env);
        let user = Address::generate(&env);

        client.mint(&admin, &user, &500);
        client.burn(&user, &200);

        assert_eq!(client.balance(&user), 300);
        assert_eq!(client.total_supply(), 300);
    }

    #[test]
    fn test_reentrancy_guard_resets_on_error() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, admin) = create_client(&env);
        let user = Address::generate(&env);

        let res = client.try_transfer(&admin, &user, &1);
        assert_eq!(res.unwrap_err().unwrap(), TokenError::InsufficientBalance);

        // Guard must be released after the failed call
        client.mint(&admin, &admin, &10);
        client.transfer(&admin, &user, &5);
        assert_eq!(client.balance(&user), 5);
    }

    #[test]
    fn test_grant_role_requires_admin() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, _admin) = create_client(&env);
        let outsider = Address::generate(&env);
        let target = Address::generate(&env);

        let res = client.try_grant_role(&outsider, &target, &ROLE_MINTER);
        assert_eq!(res.unwrap_err().unwrap(), TokenError::Unauthorized);
        assert!(!client.has_role(&target, &ROLE_MINTER));
    }
}
