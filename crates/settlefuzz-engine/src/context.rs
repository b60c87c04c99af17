//! Per-run fuzz context.
//!
//! A [`FuzzContext`] is owned by exactly one fuzz run. The selected
//! settlement action is resolved once: the first query computes and caches
//! it, every later query returns the cached value even if the derived state
//! has been enriched in between.

use std::cell::OnceCell;

use settlefuzz_types::{
    ExecutionState, Expectations, FuzzParams, Result, RunId, SettlementAction,
};

/// Everything the decision core reads for one fuzz run.
#[derive(Debug, Clone)]
pub struct FuzzContext {
    pub run_id: RunId,
    pub params: FuzzParams,
    pub state: ExecutionState,
    pub expectations: Expectations,
    selected_action: OnceCell<SettlementAction>,
}

impl FuzzContext {
    #[must_use]
    pub fn new(params: FuzzParams, state: ExecutionState, expectations: Expectations) -> Self {
        Self {
            run_id: RunId::new(),
            params,
            state,
            expectations,
            selected_action: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.params.seed
    }

    /// The cached selection, if one has been made.
    #[must_use]
    pub fn selected_action(&self) -> Option<SettlementAction> {
        self.selected_action.get().copied()
    }

    /// Return the cached action, or compute it with `select` and cache it.
    /// A failed computation caches nothing.
    pub(crate) fn resolve_action_once(
        &self,
        select: impl FnOnce() -> Result<SettlementAction>,
    ) -> Result<SettlementAction> {
        if let Some(action) = self.selected_action.get() {
            return Ok(*action);
        }
        let action = select()?;
        Ok(*self.selected_action.get_or_init(|| action))
    }
}
