//! Seeded selection of exactly one entry point.
//!
//! Selection is pure in (candidate list, seed): index `seed mod len`.

use settlefuzz_types::{FuzzError, Result, SettlementAction};

use crate::context::FuzzContext;

/// Pick `candidates[seed % candidates.len()]`.
///
/// # Errors
/// [`FuzzError::NoValidActions`] for an empty candidate list.
pub fn pick(candidates: &[SettlementAction], seed: u64) -> Result<SettlementAction> {
    if candidates.is_empty() {
        return Err(FuzzError::NoValidActions);
    }
    // Reduce in u64 so large seeds index identically on every target.
    let index = usize::try_from(seed % candidates.len() as u64)
        .map_err(|_| FuzzError::NoValidActions)?;
    Ok(candidates[index])
}

/// The context's action, choosing and caching one on first use.
///
/// `enumerate` runs only when nothing is cached yet.
pub fn select_action(
    ctx: &FuzzContext,
    enumerate: impl FnOnce() -> Result<Vec<SettlementAction>>,
) -> Result<SettlementAction> {
    ctx.resolve_action_once(|| {
        let candidates = enumerate()?;
        let action = pick(&candidates, ctx.seed())?;
        tracing::info!(
            run = %ctx.run_id,
            seed = ctx.seed(),
            candidates = candidates.len(),
            action = action.name(),
            selector = hex::encode(action.selector()),
            "Settlement action selected"
        );
        Ok(action)
    })
}

/// Human-readable name for a raw 4-byte selector.
///
/// # Errors
/// [`FuzzError::UnknownIdentifier`] when the selector is not one of the
/// eight entry points.
pub fn action_name_for_selector(selector: [u8; 4]) -> Result<&'static str> {
    SettlementAction::from_selector(selector).map(SettlementAction::name)
}
