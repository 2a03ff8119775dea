//! An undirected graph keyed by node identity, with greedy coloring and
//! connected-component extraction.
//!
//! The graph is organized by concern:
//! - `undirected`: the data structure and its mutation/query API
//! - `coloring`: first-fit greedy coloring
//! - `components`: connected components
//! - `invariants`: structural checks

pub mod coloring;
pub mod components;
pub mod invariants;
pub mod undirected;

pub use coloring::Coloring;
pub use invariants::InvariantViolation;
pub use undirected::Graph;
