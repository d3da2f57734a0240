use crate::events;
use crate::storage;
use crate::types::{Listing, MarketError};
use crate::validation;
use brick_access::ROLE_ADMIN;
use soroban_sdk::{contract, contractimpl, Address, Env};

/// Collaborator clients: WASM imports for wasm32, crate clients for host
/// builds.
#[cfg(target_arch = "wasm32")]
mod ownership_contract {
    soroban_sdk::contractimport!(
        file = "../../target/wasm32-unknown-unknown/release/fractional_ownership.wasm"
    );
    pub use Client as FractionalOwnershipClient;
}

#[cfg(target_arch = "wasm32")]
mod token_contract {
    soroban_sdk::contractimport!(
        file = "../../target/wasm32-unknown-unknown/release/bct_token.wasm"
    );
    pub use Client as BctTokenClient;
}

#[cfg(target_arch = "wasm32")]
use ownership_contract::FractionalOwnershipClient;
#[cfg(target_arch = "wasm32")]
use token_contract::BctTokenClient;

#[cfg(not(target_arch = "wasm32"))]
use bct_token::BctTokenClient;
#[cfg(not(target_arch = "wasm32"))]
use fractional_ownership::FractionalOwnershipClient;

//
// MAIN CONTRACT - ASSET MARKETPLACE
//

#[contract]
pub struct AssetMarketplace;

#[contractimpl]
impl AssetMarketplace {
    //
    // INITIALIZATION
    //

    /// Initializes the marketplace. Called once at deployment.
    ///
    /// Trades settle in BCT pulled through allowances, so buyers approve
    /// this contract on the token before calling `buy_shares`. The fee
    /// schedule is in basis points; `bct_discount_bps` is the reduction
    /// applied to the platform fee for BCT settlement. Fees accrue to the
    /// admin.
    pub fn initialize(
        env: Env,
        admin: Address,
        ownership: Address,
        token: Address,
        fee_bps: u32,
        bct_discount_bps: u32,
    ) -> Result<(), MarketError> {
        if storage::has_admin(&env) {
            return Err(MarketError::AlreadyInitialized);
        }
        admin.require_auth();
        validation::require_valid_bps(fee_bps)?;
        validation::require_valid_bps(bct_discount_bps)?;

        storage::set_admin(&env, &admin);
        storage::set_collector(&env, &admin);
        storage::set_ownership(&env, &ownership);
        storage::set_token(&env, &token);
        storage::set_fee_bps(&env, fee_bps);
        storage::set_discount_bps(&env, bct_discount_bps);
        storage::set_listing_count(&env, 0);
        brick_access::grant_role(&env, &admin, ROLE_ADMIN);

        Ok(())
    }

    //
    // LISTINGS - CEI PATTERN
    //

    /// Opens a listing over `amount` shares of a property (seller-authorized).
    ///
    /// Shares are not escrowed; the seller's balance is re-checked at fill
    /// time.
    ///
    /// # Errors
    /// - `InsufficientShares`: the seller holds fewer shares than listed
    pub fn list_shares(
        env: Env,
        seller: Address,
        property_id: u64,
        amount: i128,
        price_per_share: i128,
    ) -> Result<u64, MarketError> {
        // === CHECKS ===
        seller.require_auth();
        storage::bump_critical_storage(&env);

        validation::require_initialized(&env)?;
        validation::require_positive_amount(amount)?;
        validation::require_positive_amount(price_per_share)?;

        let ownership = FractionalOwnershipClient::new(&env, &storage::get_ownership(&env));
        if ownership.share_balance(&property_id, &seller) < amount {
            return Err(MarketError::InsufficientShares);
        }

        // === EFFECTS ===
        let id = storage::get_listing_count(&env);
        let listing = Listing {
            id,
            seller: seller.clone(),
            property_id,
            amount,
            price_per_share,
            active: true,
        };
        storage::set_listing(&env, id, &listing);
        storage::set_listing_count(&env, id + 1);

        // === INTERACTIONS ===
        events::emit_listed(&env, id, &seller, property_id, amount, price_per_share);

        Ok(id)
    }

    /// Cancels an open listing (its seller only).
    pub fn cancel_listing(env: Env, seller: Address, listing_id: u64) -> Result<(), MarketError> {
        // === CHECKS ===
        seller.require_auth();
        storage::bump_critical_storage(&env);

        validation::require_initialized(&env)?;
        let mut listing = validation::require_listing(&env, listing_id)?;

        if listing.seller != seller {
            return Err(MarketError::Unauthorized);
        }
        if !listing.active {
            return Err(MarketError::ListingInactive);
        }

        // === EFFECTS ===
        listing.active = false;
        storage::set_listing(&env, listing_id, &listing);

        // === INTERACTIONS ===
        events::emit_cancelled(&env, listing_id, &seller);

        Ok(())
    }

    //
    // TRADES - CEI PATTERN
    // Executes cross-contract settlement; runs under the reentrancy guard.
    //

    /// Fills `amount` shares from a listing (buyer-authorized).
    ///
    /// Settlement order: the listing is debited first, then BCT moves
    /// buyer→seller (gross) and buyer→collector (fee) through allowance
    /// pulls, then shares move seller→buyer through the ownership
    /// contract's operator transfer. Partial fills leave the listing open.
    ///
    /// # Errors
    /// - `ListingNotFound` / `ListingInactive`
    /// - `InsufficientShares`: more than the unfilled remainder, or the
    ///   seller no longer holds the shares
    /// - `InsufficientFunds`: buyer balance or allowance below gross + fee
    pub fn buy_shares(
        env: Env,
        buyer: Address,
        listing_id: u64,
        amount: i128,
    ) -> Result<(), MarketError> {
        // === REENTRANCY GUARD ===
        if storage::is_reentrancy_locked(&env) {
            return Err(MarketError::Unauthorized);
        }
        storage::set_reentrancy_guard(&env, true);

        let result = (|| {
            // === CHECKS ===
            buyer.require_auth();
            storage::bump_critical_storage(&env);

            validation::require_initialized(&env)?;
            validation::require_positive_amount(amount)?;

            let mut listing = validation::require_listing(&env, listing_id)?;
            if !listing.active {
                return Err(MarketError::ListingInactive);
            }
            if amount > listing.amount {
                return Err(MarketError::InsufficientShares);
            }

            let ownership = FractionalOwnershipClient::new(&env, &storage::get_ownership(&env));
            if ownership.share_balance(&listing.property_id, &listing.seller) < amount {
                return Err(MarketError::InsufficientShares);
            }

            let (gross, fee) =
                validation::settlement_amounts(&env, listing.price_per_share, amount)?;
            let total = gross.checked_add(fee).ok_or(MarketError::InvalidAmount)?;

            let token = BctTokenClient::new(&env, &storage::get_token(&env));
            let this = env.current_contract_address();
            if token.balance(&buyer) < total {
                return Err(MarketError::InsufficientFunds);
            }
            if token.allowance(&buyer, &this) < total {
                return Err(MarketError::InsufficientFunds);
            }

            // === EFFECTS ===
            listing.amount -= amount;
            if listing.amount == 0 {
                listing.active = false;
            }
            storage::set_listing(&env, listing_id, &listing);

            // === INTERACTIONS ===
            token.transfer_from(&this, &buyer, &listing.seller, &gross);
            if fee > 0 {
                let collector = storage::get_collector(&env);
                token.transfer_from(&this, &buyer, &collector, &fee);
            }
            ownership.transfer_shares(&this, &listing.property_id, &listing.seller, &buyer, &amount);

            events::emit_trade(&env, listing_id, &buyer, &listing.seller, amount, gross, fee);

            Ok(())
        })();

        storage::set_reentrancy_guard(&env, false);
        result
    }

    //
    // READS
    //

    /// Returns a listing by id.
    pub fn get_listing(env: Env, id: u64) -> Result<Listing, MarketError> {
        storage::get_listing(&env, id).ok_or(MarketError::ListingNotFound)
    }

    /// Returns the number of listings ever opened.
    pub fn listing_count(env: Env) -> u64 {
        storage::bump_critical_storage(&env);
        storage::get_listing_count(&env)
    }

    /// Quotes `(gross, fee)` for filling `amount` shares of a listing.
    pub fn quote(env: Env, listing_id: u64, amount: i128) -> Result<(i128, i128), MarketError> {
        validation::require_positive_amount(amount)?;
        let listing = validation::require_listing(&env, listing_id)?;
        validation::settlement_amounts(&env, listing.price_per_share, amount)
    }

    /// Returns the fee schedule as `(fee_bps, bct_discount_bps)`.
    pub fn fee_schedule(env: Env) -> (u32, u32) {
        storage::bump_critical_storage(&env);
        (storage::get_fee_bps(&env), storage::get_discount_bps(&env))
    }

    /// Returns the ownership contract this marketplace trades over.
    pub fn ownership(env: Env) -> Address {
        storage::bump_critical_storage(&env);
        storage::get_ownership(&env)
    }

    /// Returns the settlement token contract.
    pub fn token(env: Env) -> Address {
        storage::bump_critical_storage(&env);
        storage::get_token(&env)
    }

    //
    // ADMIN / ROLE MANAGEMENT
    //

    /// Retunes the fee schedule (ROLE_ADMIN only).
    pub fn set_fee_schedule(
        env: Env,
        caller: Address,
        fee_bps: u32,
        bct_discount_bps: u32,
    ) -> Result<(), MarketError> {
        caller.require_auth();
        storage::bump_critical_storage(&env);
        validation::require_initialized(&env)?;
        validation::require_role(&env, &caller, ROLE_ADMIN)?;
        validation::require_valid_bps(fee_bps)?;
        validation::require_valid_bps(bct_discount_bps)?;

        storage::set_fee_bps(&env, fee_bps);
        storage::set_discount_bps(&env, bct_discount_bps);
        Ok(())
    }

    /// Grants role bits to an account (ROLE_ADMIN only). Idempotent.
    pub fn grant_role(
        env: Env,
        caller: Address,
        account: Address,
        role: u32,
    ) -> Result<(), MarketError> {
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
    ) -> Result<(), MarketError> {
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
