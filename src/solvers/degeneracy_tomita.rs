//! Degeneracy-Tomita: an outer loop over the degeneracy ordering drives the
//! pivoted skeleton, one root vertex at a time. For vertex `v_i` at
//! position `i`, `P = N(v_i) ∩ {later vertices}` and
//! `X = N(v_i) ∩ {earlier vertices}` — since `P` is bounded by the
//! degeneracy `d`, recursion depth here is bounded by `d + 1` and no
//! coloring bound is needed (pivot + size bound suffice on a candidate set
//! that small).

use log::debug;

use crate::bitset::Bitset;
use crate::error::{MaxCliqueError, Result};
use crate::graph::{Graph, Vertex};
use crate::search::skeleton::{search, OrderKind, Policies};
use crate::search::{CancelToken, SearchStats};

/// runs the degeneracy-ordered outer loop, one root call per vertex.
pub fn solve(
    g: &Graph,
    seed: Vec<Vertex>,
    stats: &mut SearchStats,
    cancel: &dyn CancelToken,
) -> Result<Vec<Vertex>> {
    let n = g.vertex_count();
    let mut best = seed;
    if n == 0 {
        stats.proven = true;
        return Ok(best);
    }

    let order = g.degeneracy_order();
    let mut rank = vec![0usize; n];
    for (i, &v) in order.iter().enumerate() {
        rank[v] = i;
    }
    let policies = Policies { pivot: true, coloring_bound: false, order: OrderKind::Natural };

    for (i, &v_i) in order.iter().enumerate() {
        debug!("degeneracy-tomita: outer iteration {i}/{} at root {v_i}, best so far {}", order.len(), best.len());
        let mut p = Bitset::empty(n);
        let mut x = Bitset::empty(n);
        for u in g.neighbor_mask(v_i)?.iter() {
            if rank[u] > rank[v_i] {
                p.set(u);
            } else {
                x.set(u);
            }
        }
        let mut r = vec![v_i];
        match search(g, &mut r, &mut p, &mut x, policies, &mut best, stats, cancel) {
            Ok(()) => {}
            Err(MaxCliqueError::Interrupted) => {
                stats.proven = false;
                return Ok(best);
            }
            Err(e) => return Err(e),
        }
    }
    stats.proven = true;
    Ok(best)
}
