//! Shared error type for the graph substrate, loader and solvers.

use thiserror::Error;

/// Failure modes surfaced by this crate.
///
/// Parsing/construction failures (`InvalidInput`) are reported immediately to
/// the caller. `ResourceExhausted` and `Interrupted` are the only kinds that
/// can occur *inside* a running search; both unwind cleanly and the caller
/// gets back whatever incumbent clique was found so far (see
/// [`crate::search::SearchStats::proven`]).
#[derive(Error, Debug)]
pub enum MaxCliqueError {
    /// malformed input: a negative id, an unparsable line, a non-simple edge
    /// the loader could not normalize.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// a query named a vertex outside `[0, n)`.
    #[error("vertex {vertex} out of range for graph of order {order}")]
    OutOfRange {
        /// the vertex that was queried
        vertex: usize,
        /// the graph's vertex count
        order: usize,
    },

    /// a bitmap of width n could not be allocated, or the recursion depth
    /// bound was exceeded.
    #[error("resource exhausted: {0}")]
    ResourceExhausted(String),

    /// the caller's cancellation token tripped between recursion nodes.
    #[error("search interrupted before completion")]
    Interrupted,

    /// I/O failure while reading a graph file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// failure writing the CSV report.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MaxCliqueError>;
