#![no_std]
use soroban_sdk::{symbol_short, Address, Env};

// ============================================================================
// ROLE BITMASK
// ============================================================================

/// Full administrative control, including grant/revoke of every other role.
pub const ROLE_ADMIN: u32 = 1;

/// May mark registered properties as verified.
pub const ROLE_VERIFIER: u32 = 2;

/// May register/lock/unlock properties and mint/transfer fractional shares.
pub const ROLE_OPERATOR: u32 = 4;

/// May mint the capped utility token.
pub const ROLE_MINTER: u32 = 8;

/// TTL for role storage (1 year in ledgers ~= 6.3M ledgers)
const ROLE_STORAGE_TTL: u32 = 6_307_200;

/// TTL threshold for bump (30 days ~= 518K ledgers)
const ROLE_STORAGE_THRESHOLD: u32 = 518_400;

fn roles_key(account: &Address) -> (soroban_sdk::Symbol, Address) {
    (symbol_short!("roles"), account.clone())
}

// ============================================================================
// ROLE OPS
// ============================================================================

/// Returns the full role bitmap for an account (0 when nothing was granted).
pub fn get_roles(env: &Env, account: &Address) -> u32 {
    env.storage().persistent().get(&roles_key(account)).unwrap_or(0)
}

/// Checks whether the account holds every role bit in `role`.
pub fn has_role(env: &Env, account: &Address, role: u32) -> bool {
    get_roles(env, account) & role == role
}

/// Grants `role` to the account. Granting an already-held role is a no-op.
/// Role admin checks are the calling contract's responsibility.
pub fn grant_role(env: &Env, account: &Address, role: u32) {
    let key = roles_key(account);
    let roles = get_roles(env, account) | role;
    env.storage().persistent().set(&key, &roles);
    env.storage()
        .persistent()
        .extend_ttl(&key, ROLE_STORAGE_THRESHOLD, ROLE_STORAGE_TTL);
    emit_role_set(env, account, roles);
}

/// Revokes `role` from the account. Revoking a role the account does not
/// hold is a no-op.
pub fn revoke_role(env: &Env, account: &Address, role: u32) {
    let key = roles_key(account);
    let roles = get_roles(env, account) & !role;
    env.storage().persistent().set(&key, &roles);
    emit_role_set(env, account, roles);
}

// Role bitmap changed (grant or revoke); payload is the new bitmap.
fn emit_role_set(env: &Env, account: &Address, roles: u32) {
    env.events().publish((symbol_short!("role_set"), account), roles);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{contract, testutils::Address as _, Env};

    #[contract]
    struct Holder;

    fn with_storage<T>(f: impl FnOnce(&Env) -> T) -> T {
        let env = Env::default();
        let contract_id = env.register_contract(None, Holder);
        env.as_contract(&contract_id, || f(&env))
    }

    #[test]
    fn test_roles_default_empty() {
        with_storage(|env| {
            let account = Address::generate(env);
            assert_eq!(get_roles(env, &account), 0);
            assert!(!has_role(env, &account, ROLE_ADMIN));
        });
    }

    #[test]
    fn test_grant_is_additive_and_idempotent() {
        with_storage(|env| {
            let account = Address::generate(env);

            grant_role(env, &account, ROLE_OPERATOR);
            grant_role(env, &account, ROLE_VERIFIER);
            grant_role(env, &account, ROLE_OPERATOR);

            assert_eq!(get_roles(env, &account), ROLE_OPERATOR | ROLE_VERIFIER);
            assert!(has_role(env, &account, ROLE_OPERATOR));
            assert!(has_role(env, &account, ROLE_VERIFIER));
            assert!(!has_role(env, &account, ROLE_MINTER));
        });
    }

    #[test]
    fn test_revoke_clears_single_bit() {
        with_storage(|env| {
            let account = Address::generate(env);

            grant_role(env, &account, ROLE_ADMIN | ROLE_MINTER);
            revoke_role(env, &account, ROLE_MINTER);

            assert!(has_role(env, &account, ROLE_ADMIN));
            assert!(!has_role(env, &account, ROLE_MINTER));

            // Revoking an absent role stays a no-op
            revoke_role(env, &account, ROLE_MINTER);
            assert_eq!(get_roles(env, &account), ROLE_ADMIN);
        });
    }

    #[test]
    fn test_has_role_requires_all_bits() {
        with_storage(|env| {
            let account = Address::generate(env);

            grant_role(env, &account, ROLE_OPERATOR);
            assert!(!has_role(env, &account, ROLE_OPERATOR | ROLE_MINTER));

            grant_role(env, &account, ROLE_MINTER);
            assert!(has_role(env, &account, ROLE_OPERATOR | ROLE_MINTER));
        });
    }
}
