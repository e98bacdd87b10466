//! The recursion skeleton shared by every exact solver variant: explore the
//! search space defined by `(R, P, X)`, applying the Bron–Kerbosch
//! invariants, and update the incumbent `best`.
//!
//! `search` is one polymorphic unit parameterized over the three
//! capabilities a variant binds: whether to pivot, whether to use the
//! coloring bound (vs. the plain size bound), and — when not coloring —
//! which order to walk `P \ N(u)` in. Variants in [`crate::solvers`] are
//! records binding these three, plus an outer loop where the variant calls
//! for one (see [`crate::solvers::degeneracy_tomita`],
//! [`crate::solvers::ostergard`]).

use log::trace;

use crate::bitset::Bitset;
use crate::error::{MaxCliqueError, Result};
use crate::graph::{Graph, Vertex};
use crate::search::{bound, order, pivot, CancelToken, SearchStats};

/// which order to walk `P \ N(u)` in, when the node isn't coloring-bounded.
/// Ignored when [`Policies::coloring_bound`] is set — the coloring's own
/// reverse-color order is used instead (see
/// [`crate::search::bound::Coloring::branch_plan`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKind {
    /// ascending vertex id.
    Natural,
    /// descending residual degree within `P`.
    DegreeDesc,
}

/// the three capabilities a solver variant binds the skeleton to.
#[derive(Debug, Clone, Copy)]
pub struct Policies {
    /// whether to restrict branching to `P \ N(u)` for a chosen pivot `u`.
    pub pivot: bool,
    /// whether to bound with greedy coloring in addition to plain size.
    pub coloring_bound: bool,
    /// iteration order when `coloring_bound` is `false`.
    pub order: OrderKind,
}

/// explores `(R, P, X)` in place, updating `best` whenever a larger clique
/// is found. `R`'s invariant (a clique), `P`'s invariant (every member
/// adjacent to every member of `R`) and `X`'s invariant (likewise, plus
/// "already fully explored") are maintained by construction: every call
/// site below only ever narrows `P`/`X` to `... ∩ N(v)`.
///
/// Returns `Err(Interrupted)` if `cancel` trips; `best` still holds the
/// best clique found so far in that case (see [`SearchStats::proven`],
/// which the caller should set to `false` when this happens).
pub fn search(
    g: &Graph,
    r: &mut Vec<Vertex>,
    p: &mut Bitset,
    x: &mut Bitset,
    policies: Policies,
    best: &mut Vec<Vertex>,
    stats: &mut SearchStats,
    cancel: &dyn CancelToken,
) -> Result<()> {
    if cancel.is_cancelled() {
        return Err(MaxCliqueError::Interrupted);
    }
    stats.nodes_explored += 1;

    // 1. incumbent pruning (size bound)
    if r.len() + p.popcount() <= best.len() {
        return Ok(());
    }

    // 2. optional coloring bound
    let coloring = policies.coloring_bound.then(|| bound::greedy_color(g, p));
    if let Some(c) = &coloring {
        if r.len() + c.k <= best.len() {
            return Ok(());
        }
    }

    // 3. terminal check: R is maximal
    if p.is_empty() && x.is_empty() {
        if r.len() > best.len() {
            *best = r.clone();
            trace!("new incumbent: size={} nodes={}", best.len(), stats.nodes_explored);
        }
        return Ok(());
    }

    // 4. pivot selection, restricting branching to P \ N(u)
    let branch_set = if policies.pivot {
        match pivot::select_pivot(g, p, x) {
            Some(u) => p.difference(g.neighbor_mask(u)?),
            None => p.clone(),
        }
    } else {
        p.clone()
    };

    // 5. iterate v in the branch set, in policy order; `color` is `Some`
    //    only for coloring-bounded nodes, where it drives the per-iteration
    //    prune instead of the live `|P|` recheck.
    let plan: Vec<(Vertex, Option<usize>)> = match &coloring {
        Some(c) => c.branch_plan().map(|(v, clr)| (v, Some(clr))).collect(),
        None => {
            let ordered = match policies.order {
                OrderKind::Natural => order::natural(&branch_set),
                OrderKind::DegreeDesc => order::degree_desc_within(g, &branch_set),
            };
            ordered.into_iter().map(|v| (v, None)).collect()
        }
    };

    for (v, color) in plan {
        let should_stop = match color {
            Some(c) => r.len() + c <= best.len(),
            None => r.len() + 1 + p.popcount() <= best.len(),
        };
        if should_stop {
            break;
        }

        let nmask = g.neighbor_mask(v)?;
        let mut child_p = p.intersect(nmask);
        let mut child_x = x.intersect(nmask);
        r.push(v);
        let outcome = search(g, r, &mut child_p, &mut child_x, policies, best, stats, cancel);
        r.pop();
        outcome?;

        p.clear(v);
        x.set(v);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::NeverCancel;

    fn run(g: &Graph, policies: Policies) -> Vec<Vertex> {
        let n = g.vertex_count();
        let mut r = Vec::new();
        let mut p = Bitset::full(n);
        let mut x = Bitset::empty(n);
        let mut best = Vec::new();
        let mut stats = SearchStats::default();
        search(g, &mut r, &mut p, &mut x, policies, &mut best, &mut stats, &NeverCancel).unwrap();
        best
    }

    #[test]
    fn bk_basic_policies_find_triangle() {
        let g = Graph::build([(0, 1), (0, 2), (1, 2)]).unwrap();
        let policies = Policies { pivot: false, coloring_bound: false, order: OrderKind::Natural };
        let k = run(&g, policies);
        assert_eq!(k.len(), 3);
        assert!(g.is_clique(&k));
    }

    #[test]
    fn pivoted_policies_agree_with_plain() {
        let g = Graph::build([
            (0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3), (4, 5),
        ])
        .unwrap();
        let plain = run(&g, Policies { pivot: false, coloring_bound: false, order: OrderKind::Natural });
        let pivoted = run(&g, Policies { pivot: true, coloring_bound: false, order: OrderKind::Natural });
        assert_eq!(plain.len(), pivoted.len());
        assert_eq!(plain.len(), 4);
    }

    #[test]
    fn coloring_bounded_policies_agree_with_plain() {
        let g = Graph::build([
            (0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3), (4, 5),
        ])
        .unwrap();
        let plain = run(&g, Policies { pivot: false, coloring_bound: false, order: OrderKind::Natural });
        let colored = run(&g, Policies { pivot: false, coloring_bound: true, order: OrderKind::Natural });
        assert_eq!(plain.len(), colored.len());
    }

    #[test]
    fn seeding_incumbent_never_changes_optimum_size() {
        let g = Graph::build([(0, 1), (0, 2), (1, 2), (3, 4)]).unwrap();
        let n = g.vertex_count();
        let policies = Policies { pivot: true, coloring_bound: true, order: OrderKind::Natural };

        let mut r = Vec::new();
        let mut p = Bitset::full(n);
        let mut x = Bitset::empty(n);
        let mut unseeded_best = Vec::new();
        let mut stats = SearchStats::default();
        search(&g, &mut r, &mut p, &mut x, policies, &mut unseeded_best, &mut stats, &NeverCancel).unwrap();

        let mut r2 = Vec::new();
        let mut p2 = Bitset::full(n);
        let mut x2 = Bitset::empty(n);
        let mut seeded_best = vec![3, 4]; // a valid, non-maximum clique seed
        let mut stats2 = SearchStats::default();
        search(&g, &mut r2, &mut p2, &mut x2, policies, &mut seeded_best, &mut stats2, &NeverCancel).unwrap();

        assert_eq!(unseeded_best.len(), seeded_best.len());
    }

    #[test]
    fn cancellation_is_sound() {
        struct AlwaysCancel;
        impl CancelToken for AlwaysCancel {
            fn is_cancelled(&self) -> bool {
                true
            }
        }
        let g = Graph::build([(0, 1), (0, 2), (1, 2)]).unwrap();
        let n = g.vertex_count();
        let mut r = Vec::new();
        let mut p = Bitset::full(n);
        let mut x = Bitset::empty(n);
        let mut best = vec![0, 1]; // pre-seeded valid clique
        let mut stats = SearchStats::default();
        let result = search(
            &g,
            &mut r,
            &mut p,
            &mut x,
            Policies { pivot: true, coloring_bound: true, order: OrderKind::Natural },
            &mut best,
            &mut stats,
            &AlwaysCancel,
        );
        assert!(matches!(result, Err(MaxCliqueError::Interrupted)));
        assert!(g.is_clique(&best)); // still valid even though not proven optimal
    }
}
