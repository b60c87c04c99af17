//! Derivation of [`OrderDetails`] from raw orders.
//!
//! For each item the current amount is the linear interpolation between its
//! start and end amount at the execution timestamp, after the fill fraction
//! has been applied to both endpoints:
//!
//! ```text
//! amount = (start * remaining + end * elapsed) / duration
//! ```
//!
//! Offer amounts round down and consideration amounts round up, so the
//! offerer never gives more or receives less than the ramp allows.

use rust_decimal::Decimal;
use settlefuzz_types::{
    CriteriaResolution, ExecutionState, FuzzError, Identifier, ItemType, Order, OrderDetails,
    ReceivedItem, Result, Side, SpentItem,
};

/// Derive the resolved view of every order in `state`.
///
/// Criteria items take their identifier from `state.criteria_resolutions`.
///
/// # Errors
/// [`FuzzError::InvalidOrder`] for a bad fraction, a partial fill on an
/// order type that only fills in full, an inexact partial fill or an empty
/// time window on a ramping item, and
/// [`FuzzError::ContextNotPrepared`] when a criteria item has no resolution.
pub fn derive_order_details(state: &ExecutionState) -> Result<Vec<OrderDetails>> {
    state
        .orders
        .iter()
        .enumerate()
        .map(|(order_index, order)| derive_one(state, order_index, order))
        .collect()
}

fn derive_one(state: &ExecutionState, order_index: usize, order: &Order) -> Result<OrderDetails> {
    if order.denominator == 0 || order.numerator == 0 || order.numerator > order.denominator {
        return Err(FuzzError::InvalidOrder {
            reason: format!(
                "order {order_index}: fill fraction {}/{} is not in (0, 1]",
                order.numerator, order.denominator
            ),
        });
    }
    if order.is_partial_fill() && !order.order_type.supports_partial_fills() {
        return Err(FuzzError::InvalidOrder {
            reason: format!(
                "order {order_index}: {} orders cannot be filled at {}/{}",
                order.order_type, order.numerator, order.denominator
            ),
        });
    }

    let mut offer = Vec::with_capacity(order.offer.len());
    for (item_index, item) in order.offer.iter().enumerate() {
        offer.push(SpentItem {
            item_type: item.item_type.resolved(),
            token: item.token,
            identifier: resolved_identifier(
                state,
                order_index,
                item_index,
                Side::Offer,
                item.item_type,
                item.identifier_or_criteria,
            )?,
            amount: current_amount(
                state,
                order,
                order_index,
                item.start_amount,
                item.end_amount,
                false,
            )?,
        });
    }

    let mut consideration = Vec::with_capacity(order.consideration.len());
    for (item_index, item) in order.consideration.iter().enumerate() {
        consideration.push(ReceivedItem {
            item_type: item.item_type.resolved(),
            token: item.token,
            identifier: resolved_identifier(
                state,
                order_index,
                item_index,
                Side::Consideration,
                item.item_type,
                item.identifier_or_criteria,
            )?,
            amount: current_amount(
                state,
                order,
                order_index,
                item.start_amount,
                item.end_amount,
                true,
            )?,
            recipient: item.recipient,
        });
    }

    Ok(OrderDetails {
        offerer: order.offerer,
        order_type: order.order_type,
        offer,
        consideration,
    })
}

fn resolved_identifier(
    state: &ExecutionState,
    order_index: usize,
    item_index: usize,
    side: Side,
    item_type: ItemType,
    identifier_or_criteria: Identifier,
) -> Result<Identifier> {
    if !item_type.is_criteria() {
        return Ok(identifier_or_criteria);
    }
    find_resolution(&state.criteria_resolutions, order_index, item_index, side)
        .map(|resolution| resolution.identifier)
        .ok_or(FuzzError::ContextNotPrepared {
            step: "criteria resolution",
        })
}

fn find_resolution(
    resolutions: &[CriteriaResolution],
    order_index: usize,
    item_index: usize,
    side: Side,
) -> Option<&CriteriaResolution> {
    resolutions.iter().find(|r| {
        r.order_index == order_index && r.item_index == item_index && r.side == side
    })
}

fn apply_fraction(order: &Order, order_index: usize, amount: Decimal) -> Result<Decimal> {
    if order.numerator == order.denominator {
        return Ok(amount);
    }
    let scaled = amount
        .checked_mul(Decimal::from(order.numerator))
        .and_then(|v| v.checked_div(Decimal::from(order.denominator)))
        .ok_or_else(|| FuzzError::InvalidOrder {
            reason: format!("order {order_index}: amount overflow applying fill fraction"),
        })?;
    if !scaled.fract().is_zero() {
        return Err(FuzzError::InvalidOrder {
            reason: format!(
                "order {order_index}: {}/{} of {amount} is not a whole amount",
                order.numerator, order.denominator
            ),
        });
    }
    Ok(scaled)
}

fn current_amount(
    state: &ExecutionState,
    order: &Order,
    order_index: usize,
    start_amount: Decimal,
    end_amount: Decimal,
    round_up: bool,
) -> Result<Decimal> {
    let start = apply_fraction(order, order_index, start_amount)?;
    let end = apply_fraction(order, order_index, end_amount)?;
    if start == end {
        return Ok(start);
    }

    let duration = order.duration().num_seconds();
    if duration <= 0 {
        return Err(FuzzError::InvalidOrder {
            reason: format!("order {order_index}: ramping amount over an empty time window"),
        });
    }
    let elapsed = (state.timestamp - order.start_time)
        .num_seconds()
        .clamp(0, duration);
    let remaining = duration - elapsed;

    let overflow = || FuzzError::InvalidOrder {
        reason: format!("order {order_index}: amount overflow interpolating ramp"),
    };
    let total = start
        .checked_mul(Decimal::from(remaining))
        .zip(end.checked_mul(Decimal::from(elapsed)))
        .and_then(|(a, b)| a.checked_add(b))
        .ok_or_else(overflow)?;
    let amount = total
        .checked_div(Decimal::from(duration))
        .ok_or_else(overflow)?;

    Ok(if round_up { amount.ceil() } else { amount.floor() })
}
