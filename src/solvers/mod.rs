//! The five exact solver variants, each a thin binding of
//! [`crate::search::skeleton::search`] to a choice of pivot/bound/ordering
//! policies plus an outer loop where the variant calls for one.

pub mod bbmc;
pub mod bk_basic;
pub mod degeneracy_tomita;
pub mod ostergard;
pub mod tomita;

use std::fmt;

use crate::error::Result;
use crate::graph::{Graph, Vertex};
use crate::options::Options;
use crate::search::skeleton::OrderKind;
use crate::search::{NeverCancel, SearchStats};

/// the exact branch-and-bound variant to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// unpivoted Bron–Kerbosch with a plain size bound.
    BkBasic,
    /// pivoted Bron–Kerbosch with a plain size bound.
    Tomita,
    /// degeneracy-ordered outer loop driving the pivoted skeleton.
    DegeneracyTomita,
    /// degree-ordered outer loop driving the coloring-bounded skeleton.
    Ostergard,
    /// single coloring-bounded call over a degree-relabeled graph.
    Bbmc,
}

impl Variant {
    /// every exact variant, in a fixed, stable order — used by the CLI
    /// driver's `--variant all` and by the cross-variant agreement tests.
    pub const ALL: [Variant; 5] =
        [Variant::BkBasic, Variant::Tomita, Variant::DegeneracyTomita, Variant::Ostergard, Variant::Bbmc];

    /// the name used in CLI flags and CSV rows.
    pub fn name(&self) -> &'static str {
        match self {
            Variant::BkBasic => "bk-basic",
            Variant::Tomita => "tomita",
            Variant::DegeneracyTomita => "degeneracy-tomita",
            Variant::Ostergard => "ostergard",
            Variant::Bbmc => "bbmc",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// finds a maximum clique of `g` using `variant`, per the options given.
/// Always returns a valid clique (see [`Graph::is_clique`]); `stats.proven`
/// is `false` iff `options.cancel` tripped before the search completed.
pub fn find_maximum_clique(
    g: &Graph,
    variant: Variant,
    options: &Options,
) -> Result<(Vec<Vertex>, SearchStats)> {
    let mut stats = SearchStats::default();
    let seed = options
        .seed_clique
        .clone()
        .unwrap_or_else(|| crate::seed::greedy_seed_clique(g));
    let cancel: &dyn crate::search::CancelToken =
        options.cancel.as_deref().unwrap_or(&NeverCancel);
    let order_override = options.order_override;

    let best = match variant {
        Variant::BkBasic => {
            bk_basic::solve(g, seed, order_override.unwrap_or(OrderKind::Natural), &mut stats, cancel)?
        }
        Variant::Tomita => {
            tomita::solve(g, seed, order_override.unwrap_or(OrderKind::DegreeDesc), &mut stats, cancel)?
        }
        Variant::DegeneracyTomita => degeneracy_tomita::solve(g, seed, &mut stats, cancel)?,
        Variant::Ostergard => ostergard::solve(g, seed, &mut stats, cancel)?,
        Variant::Bbmc => bbmc::solve(g, seed, &mut stats, cancel)?,
    };
    Ok((best, stats))
}

/// validates that `k` is a clique of `g`. Thin wrapper kept at this level
/// so callers (the CLI driver, tests) don't need to reach into `graph`.
pub fn validate_clique(g: &Graph, k: &[Vertex]) -> bool {
    g.is_clique(k)
}
