//! Bound policy: a greedy proper coloring of `G[P]` gives an upper bound
//! `χ(P) ≥ ω(G[P])` tighter than the trivial `|P|` bound, at the cost of
//! `O(|P| · n/word_bits)` extra work per node.

use crate::bitset::Bitset;
use crate::graph::{Graph, Vertex};

/// a greedy coloring of a candidate set `P`, in the shape the recursion
/// skeleton needs: vertices grouped by color class, colors assigned in
/// non-decreasing order as the classes are built.
#[derive(Debug, Clone)]
pub struct Coloring {
    /// number of color classes used; an upper bound on `ω(G[P])`.
    pub k: usize,
    /// vertices in increasing-color order.
    pub order: Vec<Vertex>,
    /// `color[i]` is the (1-based) color of `order[i]`.
    pub color: Vec<usize>,
}

impl Coloring {
    /// `(vertex, color)` pairs in branching order: highest color first, so
    /// that the skeleton's per-iteration prune `color + |R| <= best` can
    /// terminate every remaining branch at once the first time it fires
    /// (colors only decrease as this iterator advances).
    pub fn branch_plan(&self) -> impl Iterator<Item = (Vertex, usize)> + '_ {
        self.order.iter().copied().zip(self.color.iter().copied()).rev()
    }
}

/// greedily colors `G[P]`: repeatedly extracts a maximal independent subset
/// of the residual candidates via first-fit (pick the smallest remaining
/// vertex, then discard its neighbors from the current color class), and
/// advances the color counter once a class can't grow further.
pub fn greedy_color(g: &Graph, p: &Bitset) -> Coloring {
    let mut residual = p.clone();
    let mut order = Vec::with_capacity(p.popcount());
    let mut color = Vec::with_capacity(p.popcount());
    let mut c = 0usize;
    while !residual.is_empty() {
        c += 1;
        let mut class_candidates = residual.clone();
        while let Some(v) = class_candidates.first_set_bit() {
            order.push(v);
            color.push(c);
            residual.clear(v);
            class_candidates.clear(v);
            class_candidates.difference_with(g.neighbor_mask(v).expect("v in range"));
        }
    }
    Coloring { k: c, order, color }
}
