//! Ordering policy: the processing order the recursion skeleton iterates
//! `P \ N(u)` in, for variants that don't derive their order from a
//! coloring (see [`crate::search::bound::Coloring::branch_plan`] for the
//! color-class-reverse order used by the coloring-bounded variants).

use crate::bitset::Bitset;
use crate::graph::{Graph, Vertex};

/// insertion order into `P` (ascending vertex id, since `P` is a bitmap).
pub fn natural(p: &Bitset) -> Vec<Vertex> {
    p.to_vec()
}

/// vertices of `P` sorted by descending residual degree (neighbors also in
/// `P`), ties broken by ascending vertex id for determinism.
pub fn degree_desc_within(g: &Graph, p: &Bitset) -> Vec<Vertex> {
    let mut vs = p.to_vec();
    vs.sort_by(|&a, &b| {
        let da = g.neighbor_mask(a).expect("a in range").intersect(p).popcount();
        let db = g.neighbor_mask(b).expect("b in range").intersect(p).popcount();
        db.cmp(&da).then(a.cmp(&b))
    });
    vs
}

/// whole-graph vertices sorted by descending degree, ties broken by
/// ascending id. Drives the Ostergard/Dyn outer loop.
pub fn degree_desc_order(g: &Graph) -> Vec<Vertex> {
    let mut vs: Vec<Vertex> = (0..g.vertex_count()).collect();
    vs.sort_by(|&a, &b| {
        g.degree(b)
            .unwrap()
            .cmp(&g.degree(a).unwrap())
            .then(a.cmp(&b))
    });
    vs
}
