//! Ostergard/MaxCliqueDyn: an outer loop over the whole vertex set sorted
//! by descending degree drives the coloring-bounded skeleton. Unlike
//! Degeneracy-Tomita, `P` isn't bounded by a small degeneracy here, so the
//! chromatic bound (rather than a pivot) is what keeps branches small; this
//! crate leaves pivoting off for this variant — see DESIGN.md for the
//! tradeoff.

use log::debug;

use crate::bitset::Bitset;
use crate::error::{MaxCliqueError, Result};
use crate::graph::{Graph, Vertex};
use crate::search::skeleton::{search, OrderKind, Policies};
use crate::search::{order, CancelToken, SearchStats};

/// runs the degree-descending outer loop, one root call per vertex.
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

    let outer = order::degree_desc_order(g);
    let mut rank = vec![0usize; n];
    for (i, &v) in outer.iter().enumerate() {
        rank[v] = i;
    }
    let policies = Policies { pivot: false, coloring_bound: true, order: OrderKind::Natural };

    for (i, &v_i) in outer.iter().enumerate() {
        // incumbent can't improve past (vertices left to process): prune
        // the whole remaining outer loop once that's no longer possible.
        if best.len() >= n - rank[v_i] {
            break;
        }
        debug!("ostergard: outer iteration {i}/{} at root {v_i}, best so far {}", outer.len(), best.len());
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
