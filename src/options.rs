//! Bundles the knobs [`crate::solvers::find_maximum_clique`] accepts: a
//! cancellation token, an optional pre-seeded clique, and an ordering
//! policy override.

use crate::graph::Vertex;
use crate::search::skeleton::OrderKind;
use crate::search::CancelToken;

/// options accepted by [`crate::solvers::find_maximum_clique`].
pub struct Options {
    /// a caller-supplied cancellation/deadline signal, polled between
    /// recursion nodes. `None` means the search always runs to completion.
    pub cancel: Option<Box<dyn CancelToken>>,
    /// an initial clique to seed the incumbent with, instead of running
    /// [`crate::seed::greedy_seed_clique`]. Per the "seed safety" property,
    /// this can only change *which* maximum clique is returned, never its
    /// size.
    pub seed_clique: Option<Vec<Vertex>>,
    /// overrides the branching order used by the non-coloring-bounded,
    /// non-degeneracy variants (`BkBasic`, `Tomita`). Has no effect on
    /// `DegeneracyTomita`, whose outer loop is fixed to the degeneracy
    /// order, or on `Ostergard`/`Bbmc`, whose order is fixed by the
    /// coloring bound.
    pub order_override: Option<OrderKind>,
}

impl Default for Options {
    fn default() -> Self {
        Self { cancel: None, seed_clique: None, order_override: None }
    }
}

impl std::fmt::Debug for Options {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Options")
            .field("cancel", &self.cancel.is_some())
            .field("seed_clique", &self.seed_clique)
            .field("order_override", &self.order_override)
            .finish()
    }
}
