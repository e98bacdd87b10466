//! Pivot policy: choose `u ∈ P ∪ X` maximizing `|P ∩ N(u)|`, so that
//! branching can be restricted to `P \ N(u)` — every vertex of `P ∩ N(u)`
//! is covered by the branch on `u` itself (or was already covered, if
//! `u ∈ X`).

use crate::bitset::Bitset;
use crate::graph::{Graph, Vertex};

/// selects the pivot vertex. Ties are broken by smallest vertex id, so that
/// repeated runs on the same input are bit-identical (node counts included).
/// Returns `None` only when `P` and `X` are both empty.
pub fn select_pivot(g: &Graph, p: &Bitset, x: &Bitset) -> Option<Vertex> {
    let mut best: Option<(usize, Vertex)> = None;
    for u in p.iter().chain(x.iter()) {
        let score = p.intersect(g.neighbor_mask(u).expect("u in range")).popcount();
        best = match best {
            None => Some((score, u)),
            Some((best_score, best_u)) => {
                if score > best_score || (score == best_score && u < best_u) {
                    Some((score, u))
                } else {
                    Some((best_score, best_u))
                }
            }
        };
    }
    best.map(|(_, u)| u)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_vertex_covering_most_of_p() {
        // star graph: 0 is adjacent to 1,2,3; 1,2,3 mutually non-adjacent.
        let g = Graph::build([(0, 1), (0, 2), (0, 3)]).unwrap();
        let p = Bitset::from_iter(4, [1, 2, 3]);
        let x = Bitset::empty(4);
        // 0 covers all of P (score 3), 1/2/3 cover none (score 0).
        assert_eq!(select_pivot(&g, &p, &x), Some(0));
    }

    #[test]
    fn ties_broken_by_smallest_id() {
        let g = Graph::build([(0, 1), (2, 3)]).unwrap();
        let p = Bitset::from_iter(4, [1, 3]);
        let x = Bitset::from_iter(4, [0, 2]);
        // both 0 and 2 have score 1 within P; smallest id wins.
        assert_eq!(select_pivot(&g, &p, &x), Some(0));
    }

    #[test]
    fn empty_candidates_yields_none() {
        let g = Graph::build([(0, 1)]).unwrap();
        let empty = Bitset::empty(2);
        assert_eq!(select_pivot(&g, &empty, &empty), None);
    }
}
