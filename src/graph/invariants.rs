//! Structural invariants of [`Graph`].
//!
//! Mutating operations check their local postconditions with [`graph_assert`],
//! which compiles to nothing in release builds. [`Graph::validate`] performs the
//! full check on demand and reports the first violation it finds.

use core::fmt;
use core::hash::Hash;
use std::collections::HashSet;

use super::Graph;

/// Debug-asserts a graph invariant with a message.
#[inline(always)]
pub(crate) fn graph_assert(condition: bool, message: &str) {
    debug_assert!(condition, "Graph invariant violated: {}", message);
}

/// A broken structural invariant, as reported by [`Graph::validate`].
///
/// Nodes are identified by their position in [`Graph::nodes`], so the error
/// does not require the node type to be `Debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The node lists itself as a neighbor.
    SelfLoop {
        /// Position of the node.
        node: usize,
    },
    /// A neighbor appears more than once in the node's adjacency list.
    DuplicateNeighbor {
        /// Position of the node whose list holds the duplicate.
        node: usize,
    },
    /// The node lists a neighbor that is not part of the graph.
    DanglingNeighbor {
        /// Position of the node whose list holds the dangling entry.
        node: usize,
    },
    /// `from` lists `to` as a neighbor but `to` does not list `from`.
    AsymmetricEdge {
        /// Position of the node holding the one-sided entry.
        from: usize,
        /// Position of the neighbor missing the reverse entry.
        to: usize,
    },
    /// The node order and the adjacency table disagree on the node set.
    NodeSetMismatch {
        /// Number of entries in the node order.
        ordered: usize,
        /// Number of entries in the adjacency table.
        indexed: usize,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::SelfLoop { node } => write!(f, "node #{node} is adjacent to itself"),
            Self::DuplicateNeighbor { node } => {
                write!(f, "adjacency list of node #{node} contains a duplicate entry")
            }
            Self::DanglingNeighbor { node } => {
                write!(f, "adjacency list of node #{node} references a node outside the graph")
            }
            Self::AsymmetricEdge { from, to } => {
                write!(f, "edge #{from} -> #{to} has no reverse entry")
            }
            Self::NodeSetMismatch { ordered, indexed } => write!(
                f,
                "node order holds {ordered} nodes but adjacency table holds {indexed}"
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}

impl<N: Eq + Hash + Clone> Graph<N> {
    /// Checks every structural invariant of the graph.
    ///
    /// The public API maintains these invariants on its own; this is meant for
    /// tests and for callers whose node type has a suspicious `Eq`/`Hash` pair,
    /// which is the one way to corrupt the structure.
    ///
    /// # Errors
    /// Returns the first [`InvariantViolation`] found.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let ordered: HashSet<&N> = self.order.iter().collect();
        if ordered.len() != self.order.len()
            || self.adjacency.len() != self.order.len()
            || !self.adjacency.keys().all(|node| ordered.contains(node))
        {
            return Err(InvariantViolation::NodeSetMismatch {
                ordered: self.order.len(),
                indexed: self.adjacency.len(),
            });
        }

        let position = |target: &N| self.order.iter().position(|n| n == target).unwrap_or(usize::MAX);

        for (from, node) in self.order.iter().enumerate() {
            let neighbors = self.adjacent(node).unwrap_or_default();
            let mut seen = HashSet::with_capacity(neighbors.len());
            for neighbor in neighbors {
                if neighbor == node {
                    return Err(InvariantViolation::SelfLoop { node: from });
                }
                if !seen.insert(neighbor) {
                    return Err(InvariantViolation::DuplicateNeighbor { node: from });
                }
                match self.adjacent(neighbor) {
                    None => return Err(InvariantViolation::DanglingNeighbor { node: from }),
                    Some(back) if !back.contains(node) => {
                        return Err(InvariantViolation::AsymmetricEdge {
                            from,
                            to: position(neighbor),
                        })
                    }
                    Some(_) => {}
                }
            }
        }

        Ok(())
    }
}
