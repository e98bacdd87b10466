//! BBMC: the bitset-specialized, coloring-bounded realization of the
//! skeleton. Unlike Ostergard/Dyn, there is no outer per-vertex loop here —
//! vertices are relabeled once by descending degree (so the greedy
//! coloring's first-fit naturally processes high-degree vertices first)
//! and a single recursive call explores the whole graph. No pivot is used
//! inside: color order plus the per-color prune already subsumes it (see
//! `search::skeleton`).

use crate::bitset::Bitset;
use crate::error::{MaxCliqueError, Result};
use crate::graph::{Graph, Vertex};
use crate::search::skeleton::{search, OrderKind, Policies};
use crate::search::{order, CancelToken, SearchStats};

/// relabels `g` by descending degree, runs one coloring-bounded root call,
/// and maps the result back to `g`'s original vertex ids.
pub fn solve(
    g: &Graph,
    seed: Vec<Vertex>,
    stats: &mut SearchStats,
    cancel: &dyn CancelToken,
) -> Result<Vec<Vertex>> {
    let n = g.vertex_count();
    if n == 0 {
        stats.proven = true;
        return Ok(seed);
    }

    let new_to_old = order::degree_desc_order(g);
    let mut old_to_new = vec![0usize; n];
    for (new_v, &old_v) in new_to_old.iter().enumerate() {
        old_to_new[old_v] = new_v;
    }
    let relabeled = g.induced(&new_to_old);

    let mut best: Vec<Vertex> = seed.iter().map(|&v| old_to_new[v]).collect();
    let mut r = Vec::new();
    let mut p = Bitset::full(n);
    let mut x = Bitset::empty(n);
    let policies = Policies { pivot: false, coloring_bound: true, order: OrderKind::Natural };

    match search(&relabeled, &mut r, &mut p, &mut x, policies, &mut best, stats, cancel) {
        Ok(()) => stats.proven = true,
        Err(MaxCliqueError::Interrupted) => stats.proven = false,
        Err(e) => return Err(e),
    }
    Ok(best.into_iter().map(|v| new_to_old[v]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::NeverCancel;

    #[test]
    fn finds_maximum_clique_and_preserves_vertex_ids() {
        let g = Graph::build([
            (0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3),
            (4, 5), (4, 6), (5, 6),
        ])
        .unwrap();
        let mut stats = SearchStats::default();
        let k = solve(&g, Vec::new(), &mut stats, &NeverCancel).unwrap();
        assert_eq!(k.len(), 4);
        assert!(g.is_clique(&k));
        for &v in &k {
            assert!(v < g.vertex_count());
        }
    }

    #[test]
    fn planted_clique_is_found() {
        let mut edges = Vec::new();
        for i in 0..8i64 {
            for j in (i + 1)..8i64 {
                edges.push((i, j));
            }
        }
        edges.push((8, 0));
        let g = Graph::build(edges).unwrap();
        let mut stats = SearchStats::default();
        let k = solve(&g, Vec::new(), &mut stats, &NeverCancel).unwrap();
        assert_eq!(k.len(), 8);
    }
}
