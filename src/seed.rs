//! Greedy seed producer: a quick, always-valid clique used to prime the
//! incumbent lower bound before any exact search starts.
//!
//! Start from the maximum-degree vertex, then repeatedly extend with the
//! candidate maximizing its degree *within the shrinking candidate set*,
//! which is exactly `|C ∩ N(v)|`.

use crate::bitset::Bitset;
use crate::graph::{Graph, Vertex};

/// computes a maximal (not necessarily maximum) clique by greedy extension.
/// Returns an empty clique for `n == 0`; otherwise the result always has
/// size `>= 1`.
pub fn greedy_seed_clique(g: &Graph) -> Vec<Vertex> {
    let n = g.vertex_count();
    if n == 0 {
        return Vec::new();
    }
    let mut candidates = Bitset::full(n);
    let mut candidate_degree: Vec<i64> = (0..n)
        .map(|v| g.degree(v).expect("vertex in range") as i64)
        .collect();
    let mut clique = Vec::new();

    loop {
        let Some(current) = candidates
            .iter()
            .max_by_key(|&v| candidate_degree[v])
        else {
            break;
        };
        clique.push(current);
        candidates.clear(current);
        let remaining: Vec<Vertex> = candidates.iter().collect();
        for u in remaining {
            if g.has_edge(current, u) {
                candidate_degree[u] -= 1;
            } else {
                candidates.clear(u);
            }
        }
    }
    clique
}
