//! The decision core as one object.
//!
//! [`FuzzEngine`] owns the three collaborators the core queries (criteria
//! resolver, structure classifier, fulfillment matcher) and exposes every
//! operation the harness calls. It holds no per-run state: all of that lives
//! on the [`FuzzContext`] passed in.
//!
//! ```text
//! prepare(ctx)                    resolutions -> details -> remainders
//! actions(ctx)                    legal entry points
//! action(ctx) / action_name(ctx)  seeded, cached choice
//! native_tokens_to_supply(ctx)    value to attach
//! ```

use rust_decimal::Decimal;
use settlefuzz_types::constants::MAX_ORDERS_PER_RUN;
use settlefuzz_types::{FuzzError, OrderDetails, Result, SettlementAction};

use crate::{
    classifier::{OrderClassifier, StructureAnalyzer},
    conflict,
    context::FuzzContext,
    criteria::CriteriaResolver,
    details::derive_order_details,
    enumerator::{ActionInputs, enumerate_actions, has_unavailable},
    payment,
    remainders::{AggregatingMatcher, FulfillmentMatcher},
    selector,
};

/// Stateless decision core bound to its collaborators.
pub struct FuzzEngine {
    resolver: Box<dyn CriteriaResolver>,
    classifier: Box<dyn OrderClassifier>,
    matcher: Box<dyn FulfillmentMatcher>,
}

impl FuzzEngine {
    /// Engine with the default classifier and matcher.
    pub fn new(resolver: impl CriteriaResolver + 'static) -> Self {
        Self {
            resolver: Box::new(resolver),
            classifier: Box::new(StructureAnalyzer),
            matcher: Box::new(AggregatingMatcher),
        }
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: impl OrderClassifier + 'static) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    #[must_use]
    pub fn with_matcher(mut self, matcher: impl FulfillmentMatcher + 'static) -> Self {
        self.matcher = Box::new(matcher);
        self
    }

    /// Run every derivation step on a freshly built context: criteria
    /// resolutions, order details, then remainder detection.
    ///
    /// # Errors
    /// [`FuzzError::Configuration`] for a batch above
    /// [`MAX_ORDERS_PER_RUN`], otherwise the first failing step's error.
    pub fn prepare(&self, ctx: &mut FuzzContext) -> Result<()> {
        if ctx.state.orders.len() > MAX_ORDERS_PER_RUN {
            return Err(FuzzError::Configuration(format!(
                "batch of {} orders exceeds the limit of {MAX_ORDERS_PER_RUN}",
                ctx.state.orders.len()
            )));
        }
        ctx.state.criteria_resolutions = self.resolver.resolutions_for(&ctx.state.orders)?;
        ctx.state.order_details = derive_order_details(&ctx.state)?;
        self.with_detected_remainders(ctx)
    }

    /// Record whether matching the batch would leave unmet consideration.
    /// Must run before [`actions`](Self::actions).
    pub fn with_detected_remainders(&self, ctx: &mut FuzzContext) -> Result<()> {
        crate::remainders::with_detected_remainders(&mut ctx.state, self.matcher.as_ref())
    }

    /// Whether only the `match*` entry points can settle the batch.
    pub fn must_use_match(&self, ctx: &FuzzContext) -> Result<bool> {
        conflict::must_use_match(&ctx.state.orders, self.resolver.as_ref())
    }

    /// Every entry point legal for the context.
    ///
    /// # Errors
    /// [`FuzzError::ContextNotPrepared`] before remainder detection has run,
    /// [`FuzzError::IncompatibleConstraints`] for batches nothing can settle.
    pub fn actions(&self, ctx: &FuzzContext) -> Result<Vec<SettlementAction>> {
        let has_remainders = ctx
            .state
            .has_remainders
            .ok_or(FuzzError::ContextNotPrepared {
                step: "remainder detection",
            })?;
        let inputs = ActionInputs {
            family: self.classifier.family(&ctx.state.orders),
            structure: self.classifier.structure(&ctx.state.orders),
            has_unavailable: has_unavailable(&ctx.state, &ctx.expectations),
            has_remainders,
            must_use_match: self.must_use_match(ctx)?,
        };
        tracing::debug!(run = %ctx.run_id, ?inputs, "Enumerating settlement actions");
        enumerate_actions(&inputs)
    }

    /// The single entry point for this run. Chosen once per context.
    pub fn action(&self, ctx: &FuzzContext) -> Result<SettlementAction> {
        selector::select_action(ctx, || self.actions(ctx))
    }

    /// Canonical name of [`action`](Self::action).
    pub fn action_name(&self, ctx: &FuzzContext) -> Result<&'static str> {
        self.action(ctx).map(SettlementAction::name)
    }

    /// Native value to attach to the chosen call.
    pub fn native_tokens_to_supply(&self, ctx: &FuzzContext) -> Result<Decimal> {
        let action = self.action(ctx)?;
        Ok(payment::native_tokens_to_supply(
            self.order_details(ctx)?,
            &ctx.expectations,
            action,
        ))
    }

    /// Native value owed by the orders expected to be available.
    pub fn minimum_native_tokens_to_supply(&self, ctx: &FuzzContext) -> Result<Decimal> {
        let action = self.action(ctx)?;
        Ok(payment::minimum_native_tokens_to_supply(
            self.order_details(ctx)?,
            &ctx.expectations,
            action,
        ))
    }

    fn order_details<'a>(&self, ctx: &'a FuzzContext) -> Result<&'a [OrderDetails]> {
        if ctx.state.order_details.len() == ctx.state.orders.len() {
            Ok(&ctx.state.order_details)
        } else {
            Err(FuzzError::ContextNotPrepared {
                step: "order detail derivation",
            })
        }
    }
}

impl std::fmt::Debug for FuzzEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuzzEngine").finish_non_exhaustive()
    }
}
