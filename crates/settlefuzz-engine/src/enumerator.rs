//! Legal-move generator: which entry points can settle this batch.
//!
//! The decision is evaluated in a fixed precedence. Batches that satisfy
//! several conditions at once are decided by the first branch that applies:
//!
//! 1. Unavailable orders: only the `fulfillAvailable*` family can skip them.
//! 2. A single order with no match requirement: every entry point whose
//!    encoding fits the order's structure.
//! 3. Everything else: `fulfillAvailable*`, `match*`, or both, depending on
//!    whether the batch can be matched and whether it must be.
//!
//! Contradictory requirements are [`FuzzError::IncompatibleConstraints`].
//! They mean the generator produced a batch nothing can settle.

use settlefuzz_types::{
    ExecutionState, Expectations, Family, FuzzError, Result, SettlementAction, Structure,
};

use SettlementAction::{
    FulfillAdvancedOrder, FulfillAvailableAdvancedOrders, FulfillAvailableOrders,
    FulfillBasicOrder, FulfillBasicOrderEfficient, FulfillOrder, MatchAdvancedOrders, MatchOrders,
};

/// The facts the enumerator decides on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionInputs {
    pub family: Family,
    pub structure: Structure,
    /// Some orders are intentionally left out of this run.
    pub has_unavailable: bool,
    /// Matching would leave consideration nothing offers.
    pub has_remainders: bool,
    /// Native offers or an in-batch NFT hand-off require matching.
    pub must_use_match: bool,
}

/// Whether the run skips any order: fewer intended fulfillments than
/// orders, or an order the expectation layer predicts unavailable. Orders
/// with no prediction count as unavailable, as they do for payment.
#[must_use]
pub fn has_unavailable(state: &ExecutionState, expectations: &Expectations) -> bool {
    state.fulfills_fewer_than_all() || expectations.any_unavailable(state.orders.len())
}

/// Entry points legal for `inputs`, in a stable order.
///
/// # Errors
/// [`FuzzError::IncompatibleConstraints`] when the batch must be matched but
/// cannot be.
pub fn enumerate_actions(inputs: &ActionInputs) -> Result<Vec<SettlementAction>> {
    let advanced = inputs.structure == Structure::Advanced;

    if inputs.has_unavailable {
        if inputs.must_use_match {
            return Err(incompatible(
                inputs,
                "unavailable orders cannot be combined with a native offer or in-batch NFT transfer",
            ));
        }
        return Ok(fulfill_available(advanced));
    }

    if inputs.family == Family::Single && !inputs.must_use_match {
        return Ok(match inputs.structure {
            Structure::Basic => vec![
                FulfillOrder,
                FulfillAdvancedOrder,
                FulfillBasicOrder,
                FulfillBasicOrderEfficient,
                FulfillAvailableOrders,
                FulfillAvailableAdvancedOrders,
            ],
            Structure::Standard => vec![
                FulfillOrder,
                FulfillAdvancedOrder,
                FulfillAvailableOrders,
                FulfillAvailableAdvancedOrders,
            ],
            Structure::Advanced => vec![FulfillAdvancedOrder, FulfillAvailableAdvancedOrders],
        });
    }

    let cannot_match = inputs.has_remainders || inputs.has_unavailable;
    if cannot_match && inputs.must_use_match {
        return Err(incompatible(
            inputs,
            "batch must be matched but matching would leave unmet consideration",
        ));
    }

    Ok(if cannot_match {
        fulfill_available(advanced)
    } else if inputs.must_use_match {
        if advanced {
            vec![MatchAdvancedOrders]
        } else {
            vec![MatchOrders, MatchAdvancedOrders]
        }
    } else if advanced {
        vec![FulfillAvailableAdvancedOrders, MatchAdvancedOrders]
    } else {
        vec![
            FulfillAvailableOrders,
            FulfillAvailableAdvancedOrders,
            MatchOrders,
            MatchAdvancedOrders,
        ]
    })
}

fn fulfill_available(advanced: bool) -> Vec<SettlementAction> {
    if advanced {
        vec![FulfillAvailableAdvancedOrders]
    } else {
        vec![FulfillAvailableOrders, FulfillAvailableAdvancedOrders]
    }
}

fn incompatible(inputs: &ActionInputs, reason: &str) -> FuzzError {
    tracing::warn!(?inputs, reason, "Incompatible settlement constraints");
    FuzzError::IncompatibleConstraints {
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use settlefuzz_types::{Address, Order};

    use super::*;

    fn inputs(family: Family, structure: Structure) -> ActionInputs {
        ActionInputs {
            family,
            structure,
            has_unavailable: false,
            has_remainders: false,
            must_use_match: false,
        }
    }

    #[test]
    fn single_basic_offers_six() {
        let actions = enumerate_actions(&inputs(Family::Single, Structure::Basic)).unwrap();
        assert_eq!(actions.len(), 6);
        assert!(actions.contains(&FulfillBasicOrder));
        assert!(actions.contains(&FulfillBasicOrderEfficient));
        assert!(!actions.iter().any(|a| a.is_match()));
    }

    #[test]
    fn single_standard_drops_basic_routes() {
        let actions = enumerate_actions(&inputs(Family::Single, Structure::Standard)).unwrap();
        assert_eq!(
            actions,
            vec![
                FulfillOrder,
                FulfillAdvancedOrder,
                FulfillAvailableOrders,
                FulfillAvailableAdvancedOrders
            ]
        );
    }

    #[test]
    fn single_advanced_needs_advanced_encoding() {
        let actions = enumerate_actions(&inputs(Family::Single, Structure::Advanced)).unwrap();
        assert_eq!(actions, vec![FulfillAdvancedOrder, FulfillAvailableAdvancedOrders]);
    }

    #[test]
    fn unavailable_routes_to_fulfill_available() {
        let mut i = inputs(Family::Combined, Structure::Standard);
        i.has_unavailable = true;
        assert_eq!(
            enumerate_actions(&i).unwrap(),
            vec![FulfillAvailableOrders, FulfillAvailableAdvancedOrders]
        );
        i.structure = Structure::Advanced;
        assert_eq!(
            enumerate_actions(&i).unwrap(),
            vec![FulfillAvailableAdvancedOrders]
        );
    }

    #[test]
    fn unavailable_takes_precedence_over_single_family() {
        let mut i = inputs(Family::Single, Structure::Basic);
        i.has_unavailable = true;
        assert_eq!(
            enumerate_actions(&i).unwrap(),
            vec![FulfillAvailableOrders, FulfillAvailableAdvancedOrders]
        );
    }

    #[test]
    fn unavailable_with_match_requirement_is_incompatible() {
        let mut i = inputs(Family::Combined, Structure::Standard);
        i.has_unavailable = true;
        i.must_use_match = true;
        let err = enumerate_actions(&i).unwrap_err();
        assert!(matches!(err, FuzzError::IncompatibleConstraints { .. }));
    }

    #[test]
    fn remainders_with_match_requirement_is_incompatible() {
        let mut i = inputs(Family::Combined, Structure::Standard);
        i.has_remainders = true;
        i.must_use_match = true;
        assert!(matches!(
            enumerate_actions(&i).unwrap_err(),
            FuzzError::IncompatibleConstraints { .. }
        ));
    }

    #[test]
    fn single_order_that_must_match_falls_through_to_match() {
        let mut i = inputs(Family::Single, Structure::Standard);
        i.must_use_match = true;
        assert_eq!(enumerate_actions(&i).unwrap(), vec![MatchOrders, MatchAdvancedOrders]);
    }

    #[test]
    fn remainders_route_to_fulfill_available() {
        let mut i = inputs(Family::Combined, Structure::Basic);
        i.has_remainders = true;
        assert_eq!(
            enumerate_actions(&i).unwrap(),
            vec![FulfillAvailableOrders, FulfillAvailableAdvancedOrders]
        );
    }

    #[test]
    fn must_match_advanced_offers_only_advanced_match() {
        let mut i = inputs(Family::Combined, Structure::Advanced);
        i.must_use_match = true;
        assert_eq!(enumerate_actions(&i).unwrap(), vec![MatchAdvancedOrders]);
    }

    #[test]
    fn combined_unconstrained_offers_union() {
        let standard = enumerate_actions(&inputs(Family::Combined, Structure::Standard)).unwrap();
        assert_eq!(
            standard,
            vec![
                FulfillAvailableOrders,
                FulfillAvailableAdvancedOrders,
                MatchOrders,
                MatchAdvancedOrders
            ]
        );
        let advanced = enumerate_actions(&inputs(Family::Combined, Structure::Advanced)).unwrap();
        assert_eq!(advanced, vec![FulfillAvailableAdvancedOrders, MatchAdvancedOrders]);
    }

    #[test]
    fn every_consistent_combination_is_non_empty() {
        for family in [Family::Single, Family::Combined] {
            for structure in [Structure::Basic, Structure::Standard, Structure::Advanced] {
                for bits in 0u8..8 {
                    let i = ActionInputs {
                        family,
                        structure,
                        has_unavailable: bits & 1 != 0,
                        has_remainders: bits & 2 != 0,
                        must_use_match: bits & 4 != 0,
                    };
                    match enumerate_actions(&i) {
                        Ok(actions) => assert!(!actions.is_empty(), "{i:?}"),
                        Err(FuzzError::IncompatibleConstraints { .. }) => assert!(
                            i.must_use_match && (i.has_unavailable || i.has_remainders),
                            "{i:?}"
                        ),
                        Err(other) => panic!("unexpected error {other:?} for {i:?}"),
                    }
                }
            }
        }
    }

    #[test]
    fn short_prediction_list_marks_batch_unavailable() {
        let orders = vec![
            Order::dummy(Address::repeat(1), vec![], vec![]),
            Order::dummy(Address::repeat(2), vec![], vec![]),
        ];
        let state = ExecutionState::new(orders, Utc::now());
        assert!(!has_unavailable(&state, &Expectations::all_available(2)));
        assert!(has_unavailable(&state, &Expectations::all_available(1)));
        assert!(has_unavailable(&state, &Expectations::default()));
    }
}
