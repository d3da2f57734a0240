#![cfg(test)]
#![cfg(not(tarpaulin_include))]
use proptest::prelude::*;
use setup::TestEnv;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;

// Actions the fuzzer may pick
#[derive(Debug, Clone)]
enum Action {
    Mint { to_a: bool, amount: i128 },
    Transfer { a_to_b: bool, amount: i128 },
}

// Generates a sequence of 1 to 20 random actions
fn action_strategy() -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(
        prop_oneof![
            (any::<bool>(), 1..5_000i128).prop_map(|(to_a, a)| Action::Mint { to_a, amount: a }),
            (any::<bool>(), 1..5_000i128)
                .prop_map(|(a_to_b, a)| Action::Transfer { a_to_b, amount: a }),
        ],
        1..20,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    // Whatever the action sequence, outstanding shares must equal the sum
    // of holder balances and never pass the property's total allocation.
    #[test]
    fn fuzz_share_conservation(actions in action_strategy()) {
        let t = TestEnv::new();
        let property_id = t.register_verified("1 Fuzz Freeway");
        let holder_a = Address::generate(&t.env);
        let holder_b = Address::generate(&t.env);

        let total_shares = 10_000i128;
        t.ownership.create_shares(&t.operator, &property_id, &total_shares);

        for action in actions {
            match action {
                Action::Mint { to_a, amount } => {
                    let to = if to_a { &holder_a } else { &holder_b };
                    let _ = t.ownership.try_mint_shares(&t.operator, &property_id, to, &amount);
                }
                Action::Transfer { a_to_b, amount } => {
                    let (from, to) = if a_to_b {
                        (&holder_a, &holder_b)
                    } else {
                        (&holder_b, &holder_a)
                    };
                    let _ = t.ownership.try_transfer_shares(
                        &t.operator,
                        &property_id,
                        from,
                        to,
                        &amount,
                    );
                }
            }
        }

        let ledger = t.ownership.get_ledger(&property_id);
        let bal_a = t.ownership.share_balance(&property_id, &holder_a);
        let bal_b = t.ownership.share_balance(&property_id, &holder_b);

        prop_assert_eq!(ledger.shares_outstanding, bal_a + bal_b);
        prop_assert!(ledger.shares_outstanding <= ledger.total_shares);
    }
}
