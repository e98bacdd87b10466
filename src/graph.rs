//! Canonical undirected simple graph: the substrate every solver variant
//! reads from. Construction normalizes raw (possibly sparse, possibly
//! repeated) edges into a dense `[0, n)` vertex space and materializes two
//! equivalent representations — sorted adjacency lists for iteration, and
//! per-vertex [`Bitset`] masks for O(1) edge queries and word-parallel set
//! operations during search.

use std::collections::{HashMap, VecDeque};

use log::debug;

use crate::bitset::Bitset;
use crate::error::{MaxCliqueError, Result};

/// dense vertex id in `[0, n)`.
pub type Vertex = usize;

/// remembers the external (possibly sparse, possibly non-contiguous) vertex
/// ids a [`Graph`] was built from, so results can be rendered back in the
/// caller's id space.
#[derive(Debug, Clone, Default)]
pub struct IdMap {
    to_dense: HashMap<i64, Vertex>,
    to_original: Vec<i64>,
}

impl IdMap {
    /// the original id a dense vertex was remapped from.
    pub fn original(&self, v: Vertex) -> i64 {
        self.to_original[v]
    }

    /// the dense vertex an original id was remapped to, if it appeared in
    /// the edge list at all.
    pub fn dense(&self, original: i64) -> Option<Vertex> {
        self.to_dense.get(&original).copied()
    }
}

/// a simple, undirected, self-loop-free graph over a dense vertex space.
#[derive(Debug, Clone)]
pub struct Graph {
    n: usize,
    m: usize,
    neighbors: Vec<Vec<Vertex>>,
    adjacency: Vec<Bitset>,
    id_map: IdMap,
}

impl Graph {
    /// builds a graph from an edge sequence over arbitrary (possibly
    /// negative, for error-detection purposes) integer ids. Self-loops are
    /// dropped, duplicate edges are idempotent, and both endpoints of every
    /// edge are remapped into a dense `[0, n)` space in first-seen order.
    pub fn build<I: IntoIterator<Item = (i64, i64)>>(edges: I) -> Result<Self> {
        let mut to_dense: HashMap<i64, Vertex> = HashMap::new();
        let mut to_original: Vec<i64> = Vec::new();
        let mut adjacency_sets: Vec<std::collections::BTreeSet<Vertex>> = Vec::new();

        let mut intern = |id: i64,
                           to_dense: &mut HashMap<i64, Vertex>,
                           to_original: &mut Vec<i64>,
                           adjacency_sets: &mut Vec<std::collections::BTreeSet<Vertex>>|
         -> Result<Vertex> {
            if id < 0 {
                return Err(MaxCliqueError::InvalidInput(format!(
                    "negative vertex id {id}"
                )));
            }
            if let Some(&v) = to_dense.get(&id) {
                return Ok(v);
            }
            let v = to_original.len();
            to_dense.insert(id, v);
            to_original.push(id);
            adjacency_sets.push(std::collections::BTreeSet::new());
            Ok(v)
        };

        for (a, b) in edges {
            let ua = intern(a, &mut to_dense, &mut to_original, &mut adjacency_sets)?;
            let ub = intern(b, &mut to_dense, &mut to_original, &mut adjacency_sets)?;
            if ua == ub {
                continue; // self-loop, dropped
            }
            adjacency_sets[ua].insert(ub);
            adjacency_sets[ub].insert(ua);
        }

        let n = to_original.len();
        let mut neighbors = Vec::with_capacity(n);
        let mut adjacency = Vec::with_capacity(n);
        let mut m: usize = 0;
        for set in adjacency_sets {
            m += set.len();
            adjacency.push(Bitset::from_iter(n, set.iter().copied()));
            neighbors.push(set.into_iter().collect());
        }
        m /= 2;

        let graph = Self {
            n,
            m,
            neighbors,
            adjacency,
            id_map: IdMap { to_dense, to_original },
        };
        debug!(
            "built graph: n={} m={} density={:.6}",
            graph.n,
            graph.m,
            graph.density()
        );
        Ok(graph)
    }

    /// builds a graph directly from a dense adjacency list (vertex ids
    /// already in `[0, adj.len())`); used by tests and by callers that
    /// already have a dense representation (e.g. the degeneracy-ordered
    /// outer loops, which relabel a [`Graph`] via [`Graph::induced`]).
    pub fn from_dense_adjacency(adj: Vec<Vec<Vertex>>) -> Self {
        let n = adj.len();
        let mut m = 0;
        let mut adjacency = Vec::with_capacity(n);
        let mut neighbors = Vec::with_capacity(n);
        for nbrs in &adj {
            m += nbrs.len();
            adjacency.push(Bitset::from_iter(n, nbrs.iter().copied()));
        }
        m /= 2;
        for nbrs in adj {
            let mut sorted = nbrs;
            sorted.sort_unstable();
            sorted.dedup();
            neighbors.push(sorted);
        }
        Self {
            n,
            m,
            neighbors,
            adjacency,
            id_map: IdMap::default(),
        }
    }

    /// number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    /// number of edges.
    pub fn edge_count(&self) -> usize {
        self.m
    }

    /// `true` iff `u` and `v` are adjacent. Out-of-range queries return
    /// `false` rather than failing, per the substrate's failure semantics.
    pub fn has_edge(&self, u: Vertex, v: Vertex) -> bool {
        if u >= self.n || v >= self.n {
            return false;
        }
        self.adjacency[u].test(v)
    }

    /// sorted neighbor list of `v`.
    pub fn neighbors(&self, v: Vertex) -> Result<&[Vertex]> {
        self.neighbors
            .get(v)
            .map(Vec::as_slice)
            .ok_or(MaxCliqueError::OutOfRange { vertex: v, order: self.n })
    }

    /// dense neighbor bitmap of `v`, width `n`.
    pub fn neighbor_mask(&self, v: Vertex) -> Result<&Bitset> {
        self.adjacency
            .get(v)
            .ok_or(MaxCliqueError::OutOfRange { vertex: v, order: self.n })
    }

    /// degree of `v`.
    pub fn degree(&self, v: Vertex) -> Result<usize> {
        self.neighbors(v).map(<[Vertex]>::len)
    }

    /// edge density `2m / (n(n-1))`, or `0.0` for `n < 2`.
    pub fn density(&self) -> f64 {
        if self.n < 2 {
            return 0.0;
        }
        (2 * self.m) as f64 / (self.n * (self.n - 1)) as f64
    }

    /// the id map recording the original ids vertices were remapped from.
    pub fn id_map(&self) -> &IdMap {
        &self.id_map
    }

    /// `true` iff every pair of distinct vertices in `k` is adjacent.
    /// `O(|k|^2)`.
    pub fn is_clique(&self, k: &[Vertex]) -> bool {
        for (i, &u) in k.iter().enumerate() {
            for &v in &k[i + 1..] {
                if !self.has_edge(u, v) {
                    return false;
                }
            }
        }
        true
    }

    /// degeneracy ordering: repeatedly remove a minimum-residual-degree
    /// vertex. Implemented with a bucket queue for `O(n+m)` expected time.
    /// Each vertex has at most [`Graph::degeneracy`] neighbors that appear
    /// later in the returned order.
    pub fn degeneracy_order(&self) -> Vec<Vertex> {
        if self.n == 0 {
            return Vec::new();
        }
        let mut degree: Vec<usize> = (0..self.n).map(|v| self.neighbors[v].len()).collect();
        let max_degree = degree.iter().copied().max().unwrap_or(0);
        let mut buckets: Vec<VecDeque<Vertex>> = vec![VecDeque::new(); max_degree + 1];
        for v in 0..self.n {
            buckets[degree[v]].push_back(v);
        }
        let mut removed = vec![false; self.n];
        let mut order = Vec::with_capacity(self.n);
        let mut current_min = 0usize;
        for _ in 0..self.n {
            while buckets[current_min].is_empty() {
                current_min += 1;
            }
            // smallest vertex id among ties, for determinism
            let pos = buckets[current_min]
                .iter()
                .enumerate()
                .min_by_key(|(_, &v)| v)
                .map(|(i, _)| i)
                .unwrap();
            let v = buckets[current_min].remove(pos).unwrap();
            if removed[v] {
                continue;
            }
            removed[v] = true;
            order.push(v);
            for &u in &self.neighbors[v] {
                if !removed[u] {
                    let d = degree[u];
                    // remove u from its current bucket, reinsert one lower
                    if let Some(i) = buckets[d].iter().position(|&x| x == u) {
                        buckets[d].remove(i);
                    }
                    degree[u] = d - 1;
                    buckets[d - 1].push_back(u);
                    if d - 1 < current_min {
                        current_min = d - 1;
                    }
                }
            }
        }
        order
    }

    /// degeneracy `d`: the maximum residual degree observed while computing
    /// [`Graph::degeneracy_order`].
    pub fn degeneracy(&self) -> usize {
        let order = self.degeneracy_order();
        let mut rank = vec![0usize; self.n];
        for (i, &v) in order.iter().enumerate() {
            rank[v] = i;
        }
        order
            .iter()
            .map(|&v| {
                self.neighbors[v]
                    .iter()
                    .filter(|&&u| rank[u] > rank[v])
                    .count()
            })
            .max()
            .unwrap_or(0)
    }

    /// builds a new graph with vertices relabeled according to `new_to_old`
    /// (`new_to_old[i]` is the old vertex id that becomes vertex `i`).
    /// `new_to_old` must be a permutation of `0..n`. Used by the
    /// degree-ordered outer loops (Ostergard/Dyn, BBMC) to make branching
    /// order a property of vertex id rather than an auxiliary array.
    pub fn induced(&self, new_to_old: &[Vertex]) -> Graph {
        debug_assert_eq!(new_to_old.len(), self.n);
        let mut old_to_new = vec![0usize; self.n];
        for (new, &old) in new_to_old.iter().enumerate() {
            old_to_new[old] = new;
        }
        let adj: Vec<Vec<Vertex>> = new_to_old
            .iter()
            .map(|&old| {
                self.neighbors[old]
                    .iter()
                    .map(|&u| old_to_new[u])
                    .collect()
            })
            .collect();
        Graph::from_dense_adjacency(adj)
    }
}
