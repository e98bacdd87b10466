//! Exact branch-and-bound maximum clique solvers over a shared graph
//! substrate: a benchmarking suite for comparing Bron–Kerbosch variants
//! across sparse social-network graphs and dense SAT-derived instances.

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

/// dense bitmap representation used throughout the search.
pub mod bitset;

/// shared `MaxCliqueError` type.
pub mod error;

/// the canonical undirected simple graph substrate.
pub mod graph;

/// text-format dataset loading (SNAP-like edge lists, DIMACS).
pub mod loader;

/// options accepted by [`solvers::find_maximum_clique`].
pub mod options;

/// greedy seed producer used to prime the incumbent.
pub mod seed;

/// the recursion skeleton and its pivot/bound/ordering capabilities.
pub mod search;

/// the five exact solver variants.
pub mod solvers;

pub use error::{MaxCliqueError, Result};
pub use graph::Graph;
pub use options::Options;
pub use solvers::{find_maximum_clique, validate_clique, Variant};
