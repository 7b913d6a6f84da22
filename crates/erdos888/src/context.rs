//! Limits for the cover search
//!
//! Exact covers of the bad-quadruple hypergraph blow up quickly past
//! `n = 150`, so every search runs against a node budget and can be stopped
//! from another thread through a shared flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Node budget used by surveys and the CLI unless overridden.
pub const DEFAULT_NODE_BUDGET: u64 = 100_000;

/// Node budget and stop flag for one or more searches.
///
/// Clones share the stop flag, so a handle kept by the caller can halt a
/// search running elsewhere.
#[derive(Debug, Clone, Default)]
pub struct SearchContext {
    /// Nodes a search may visit before giving up on optimality
    /// (`None` searches to completion)
    pub node_budget: Option<u64>,

    stop: Arc<AtomicBool>,
}

impl SearchContext {
    /// An unlimited context.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context that visits at most `budget` nodes per search.
    pub fn with_node_budget(budget: u64) -> Self {
        Self {
            node_budget: Some(budget),
            ..Self::default()
        }
    }

    /// A context limited to [`DEFAULT_NODE_BUDGET`].
    pub fn bounded() -> Self {
        Self::with_node_budget(DEFAULT_NODE_BUDGET)
    }

    /// Whether visiting node number `visited` would exceed the budget.
    pub fn budget_exhausted(&self, visited: u64) -> bool {
        matches!(self.node_budget, Some(budget) if visited > budget)
    }

    /// Whether a stop was requested.
    pub fn is_interrupted(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    /// Ask every search sharing this context to stop.
    pub fn interrupt(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Clear a previous stop request.
    pub fn reset_interrupt(&self) {
        self.stop.store(false, Ordering::Relaxed);
    }
}
