//! BK-basic: the unpivoted, unbounded-beyond-size Bron–Kerbosch backtracker.
//! The simplest point in the design space — every other variant adds a
//! pivot, a coloring bound, or an outer loop on top of this same skeleton
//! call.

use crate::bitset::Bitset;
use crate::error::{MaxCliqueError, Result};
use crate::graph::{Graph, Vertex};
use crate::search::skeleton::{search, OrderKind, Policies};
use crate::search::{CancelToken, SearchStats};

/// runs BK-basic from a single root call covering the whole vertex set.
pub fn solve(
    g: &Graph,
    seed: Vec<Vertex>,
    order: OrderKind,
    stats: &mut SearchStats,
    cancel: &dyn CancelToken,
) -> Result<Vec<Vertex>> {
    let n = g.vertex_count();
    let mut best = seed;
    let mut r = Vec::new();
    let mut p = Bitset::full(n);
    let mut x = Bitset::empty(n);
    let policies = Policies { pivot: false, coloring_bound: false, order };

    match search(g, &mut r, &mut p, &mut x, policies, &mut best, stats, cancel) {
        Ok(()) => stats.proven = true,
        Err(MaxCliqueError::Interrupted) => stats.proven = false,
        Err(e) => return Err(e),
    }
    Ok(best)
}
