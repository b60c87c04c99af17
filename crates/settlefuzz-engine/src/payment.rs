//! Native value to attach to the settlement call.
//!
//! Accounting per order, over resolved [`OrderDetails`]:
//!
//! | entry point | native offer, signed order | native offer, contract order | native consideration |
//! |-------------|----------------------------|------------------------------|----------------------|
//! | `match*`    | owed                       | ignored (settled internally) | ignored              |
//! | otherwise   | owed                       | owed, then credited back     | owed                 |
//!
//! The total owed minus credit-back is clamped at zero. The full value is
//! never below the minimum computed over orders expected to be available.

use rust_decimal::Decimal;
use settlefuzz_types::{Expectations, OrderDetails, SettlementAction};

/// Native value owed for `orders` when settling through `action`.
fn native_value<'a>(
    orders: impl IntoIterator<Item = &'a OrderDetails>,
    action: SettlementAction,
) -> Decimal {
    let is_match = action.is_match();
    let mut value = Decimal::ZERO;
    let mut credit_back = Decimal::ZERO;

    for order in orders {
        let offered = order.native_offered();
        if is_match {
            if !order.is_contract() {
                value += offered;
            }
            continue;
        }
        if order.is_contract() {
            credit_back += offered;
        }
        value += offered + order.native_considered();
    }

    if credit_back >= value {
        Decimal::ZERO
    } else {
        value - credit_back
    }
}

/// Native value owed by the orders expected to be available. The caller
/// must supply at least this much whichever orders end up skipped.
#[must_use]
pub fn minimum_native_tokens_to_supply(
    details: &[OrderDetails],
    expectations: &Expectations,
    action: SettlementAction,
) -> Decimal {
    native_value(
        details
            .iter()
            .enumerate()
            .filter(|(index, _)| expectations.is_available(*index))
            .map(|(_, order)| order),
        action,
    )
}

/// Native value to attach to the call: the full-batch value, raised to the
/// availability-restricted minimum when that is larger.
#[must_use]
pub fn native_tokens_to_supply(
    details: &[OrderDetails],
    expectations: &Expectations,
    action: SettlementAction,
) -> Decimal {
    let value = native_value(details, action);
    let minimum = minimum_native_tokens_to_supply(details, expectations, action);
    tracing::debug!(
        action = action.name(),
        %value,
        %minimum,
        "Native value computed"
    );
    value.max(minimum)
}
