//! A dynamic undirected simple graph keyed by node identity.
//!
//! This representation prioritizes **dynamic updates**: the owner adds and
//! removes nodes and edges whenever the underlying data changes, and the graph
//! keeps the following invariants on every call:
//! - adjacency is symmetric (`a` lists `b` iff `b` lists `a`)
//! - no node is adjacent to itself
//! - no adjacency list holds the same neighbor twice
//! - [`Graph::nodes`] lists every node exactly once, in insertion order
//!
//! Redundant calls (adding an existing edge, removing a missing node) are
//! no-ops rather than errors.

use core::fmt;
use core::hash::Hash;
use std::collections::{HashMap, HashSet};

use super::invariants::graph_assert;

/// An undirected graph over caller-supplied node identities.
///
/// Neighbors are referenced by identity, never by pointer, so the graph owns
/// plain copies of its nodes and can be cloned freely.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_node` | \(O(1)\) amortized | Hash insert plus append to the node order |
/// | `add_edge` | \(O(\text{degree})\) | Checks for existence first |
/// | `remove_edge` | \(O(\text{degree})\) | Linear scan of both adjacency lists |
/// | `remove_node` | \(O(n + \text{degree}^2)\) | Order-preserving removal from the node order |
/// | `has_edge` | \(O(\text{degree})\) | Linear scan of one adjacency list |
/// | `node_count` | \(O(1)\) | |
#[derive(Clone)]
pub struct Graph<N> {
    /// Nodes in insertion order of first appearance.
    pub(super) order: Vec<N>,
    pub(super) adjacency: HashMap<N, Vec<N>>,
}

impl<N> Graph<N> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns every node, in insertion order of first appearance.
    pub fn nodes(&self) -> &[N] {
        &self.order
    }

    /// Returns the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Removes every node and edge.
    pub fn clear(&mut self) {
        self.order.clear();
        self.adjacency.clear();
        #[cfg(feature = "tracing")]
        tracing::trace!("graph cleared");
    }
}

impl<N: Eq + Hash + Clone> Graph<N> {
    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: Vec::with_capacity(capacity),
            adjacency: HashMap::with_capacity(capacity),
        }
    }

    /// Builds a graph by adding each edge in turn.
    ///
    /// Self-edges and repeated edges are skipped, exactly as with
    /// [`Graph::add_edge`].
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }

    /// Returns the neighbors of `node`, or `None` if it is not in the graph.
    ///
    /// Neighbor order is unspecified.
    pub fn adjacent(&self, node: &N) -> Option<&[N]> {
        self.adjacency.get(node).map(Vec::as_slice)
    }

    /// Returns the number of neighbors of `node`, or `None` if it is absent.
    pub fn degree(&self, node: &N) -> Option<usize> {
        self.adjacency.get(node).map(Vec::len)
    }

    /// Checks whether `node` is in the graph.
    pub fn has_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Checks whether the edge `(a, b)` is in the graph.
    ///
    /// Symmetric: `has_edge(a, b) == has_edge(b, a)`. Returns `false` when
    /// either node is absent.
    pub fn has_edge(&self, a: &N, b: &N) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|neighbors| neighbors.contains(b))
    }

    /// Adds `node` with no neighbors.
    ///
    /// Returns `false` and leaves the graph untouched if the node is already
    /// present.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.order.push(node.clone());
        self.adjacency.insert(node, Vec::new());
        graph_assert(
            self.order.len() == self.adjacency.len(),
            "node order and adjacency table must hold the same nodes",
        );
        #[cfg(feature = "tracing")]
        tracing::trace!(node_count = self.order.len(), "node added");
        true
    }

    /// Adds the undirected edge `(a, b)`, inserting missing endpoints.
    ///
    /// A self-edge (`a == b`) or an edge that already exists is ignored.
    /// Returns `true` if a new edge was created.
    pub fn add_edge(&mut self, a: N, b: N) -> bool {
        if a == b || self.has_edge(&a, &b) {
            return false;
        }
        self.add_node(a.clone());
        self.add_node(b.clone());
        self.link(&a, b.clone());
        self.link(&b, a.clone());
        graph_assert(
            self.has_edge(&a, &b) && self.has_edge(&b, &a),
            "a new edge must be listed from both endpoints",
        );
        #[cfg(feature = "tracing")]
        tracing::trace!(node_count = self.order.len(), "edge added");
        true
    }

    /// Removes `node` together with every edge incident to it.
    ///
    /// Returns `false` and does nothing if the node is absent.
    pub fn remove_node(&mut self, node: &N) -> bool {
        let Some(neighbors) = self.adjacency.remove(node) else {
            return false;
        };
        for neighbor in &neighbors {
            if let Some(list) = self.adjacency.get_mut(neighbor) {
                remove_entry(list, node);
            }
        }
        self.order.retain(|n| n != node);
        graph_assert(
            self.order.len() == self.adjacency.len(),
            "node order and adjacency table must hold the same nodes",
        );
        #[cfg(feature = "tracing")]
        tracing::trace!(
            node_count = self.order.len(),
            dropped_edges = neighbors.len(),
            "node removed"
        );
        true
    }

    /// Removes the undirected edge `(a, b)`.
    ///
    /// Does nothing if the edge is absent, including when either endpoint is
    /// not in the graph. Returns `true` if an edge was removed.
    pub fn remove_edge(&mut self, a: &N, b: &N) -> bool {
        if !self.has_edge(a, b) {
            return false;
        }
        if let Some(list) = self.adjacency.get_mut(a) {
            remove_entry(list, b);
        }
        if let Some(list) = self.adjacency.get_mut(b) {
            remove_entry(list, a);
        }
        graph_assert(
            !self.has_edge(a, b) && !self.has_edge(b, a),
            "a removed edge must be gone from both endpoints",
        );
        true
    }

    /// Returns every undirected edge exactly once.
    ///
    /// Edges are grouped by the endpoint that comes first in [`Graph::nodes`].
    pub fn edges(&self) -> Vec<(&N, &N)> {
        let mut done: HashSet<&N> = HashSet::with_capacity(self.order.len());
        let mut edges = Vec::with_capacity(self.edge_count());
        for node in &self.order {
            for neighbor in self.adjacent(node).unwrap_or_default() {
                if !done.contains(neighbor) {
                    edges.push((node, neighbor));
                }
            }
            done.insert(node);
        }
        edges
    }

    fn link(&mut self, from: &N, to: N) {
        if let Some(list) = self.adjacency.get_mut(from) {
            list.push(to);
        }
    }
}

/// Removes the single occurrence of `target`, keeping the rest in order.
fn remove_entry<N: PartialEq>(list: &mut Vec<N>, target: &N) {
    if let Some(idx) = list.iter().position(|n| n == target) {
        list.remove(idx);
    }
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Eq + Hash + Clone> PartialEq for Graph<N> {
    /// Two graphs are equal when they hold the same nodes and the same edges,
    /// regardless of insertion or neighbor order.
    fn eq(&self, other: &Self) -> bool {
        if self.node_count() != other.node_count() {
            return false;
        }
        self.adjacency.iter().all(|(node, neighbors)| {
            other.adjacency.get(node).is_some_and(|theirs| {
                theirs.len() == neighbors.len() && neighbors.iter().all(|n| theirs.contains(n))
            })
        })
    }
}

impl<N: Eq + Hash + Clone> Eq for Graph<N> {}

impl<N: fmt::Debug + Eq + Hash> fmt::Debug for Graph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.order
                    .iter()
                    .filter_map(|node| self.adjacency.get(node).map(|adj| (node, adj))),
            )
            .finish()
    }
}

impl<N: Eq + Hash + Clone> Extend<(N, N)> for Graph<N> {
    fn extend<I: IntoIterator<Item = (N, N)>>(&mut self, edges: I) {
        for (a, b) in edges {
            self.add_edge(a, b);
        }
    }
}

impl<N: Eq + Hash + Clone> FromIterator<(N, N)> for Graph<N> {
    fn from_iter<I: IntoIterator<Item = (N, N)>>(edges: I) -> Self {
        Self::from_edges(edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> Graph<&'static str> {
        Graph::from_edges([("s1", "s2"), ("s2", "s3")])
    }

    #[test]
    fn graph_construction() {
        let graph = path();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.nodes(), &["s1", "s2", "s3"]);
        assert!(!graph.is_empty());
        assert_eq!(graph.validate(), Ok(()));
    }

    #[test]
    fn add_node_is_idempotent() {
        let mut graph = Graph::new();
        assert!(graph.add_node(1));
        assert!(!graph.add_node(1));
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.adjacent(&1), Some(&[][..]));
    }

    #[test]
    fn add_edge_inserts_endpoints_symmetrically() {
        let mut graph = Graph::new();
        assert!(graph.add_edge('a', 'b'));
        assert!(graph.has_node(&'a'));
        assert!(graph.has_node(&'b'));
        assert!(graph.has_edge(&'a', &'b'));
        assert!(graph.has_edge(&'b', &'a'));
    }

    #[test]
    fn self_edge_is_ignored() {
        let mut graph = Graph::new();
        assert!(!graph.add_edge(3, 3));
        assert_eq!(graph.node_count(), 0);
        assert!(!graph.has_edge(&3, &3));

        graph.add_node(3);
        assert!(!graph.add_edge(3, 3));
        assert_eq!(graph.degree(&3), Some(0));
    }

    #[test]
    fn repeated_edge_is_stored_once() {
        let mut graph = Graph::new();
        assert!(graph.add_edge(1, 2));
        assert!(!graph.add_edge(1, 2));
        assert!(!graph.add_edge(2, 1));
        assert_eq!(graph.adjacent(&1), Some(&[2][..]));
        assert_eq!(graph.adjacent(&2), Some(&[1][..]));
    }

    #[test]
    fn has_edge_with_absent_nodes() {
        let graph = path();
        assert!(!graph.has_edge(&"s1", &"missing"));
        assert!(!graph.has_edge(&"missing", &"s1"));
        assert!(!graph.has_edge(&"s1", &"s3"));
        assert_eq!(graph.adjacent(&"missing"), None);
        assert_eq!(graph.degree(&"missing"), None);
    }

    #[test]
    fn remove_node_detaches_neighbors() {
        let mut graph = Graph::from_edges([("a", "b"), ("a", "c"), ("b", "c")]);
        assert!(graph.remove_node(&"a"));
        assert!(!graph.has_node(&"a"));
        assert_eq!(graph.adjacent(&"b"), Some(&["c"][..]));
        assert_eq!(graph.adjacent(&"c"), Some(&["b"][..]));
        assert_eq!(graph.nodes(), &["b", "c"]);
        assert_eq!(graph.validate(), Ok(()));
    }

    #[test]
    fn remove_absent_node_is_noop() {
        let mut graph = path();
        let before = graph.clone();
        assert!(!graph.remove_node(&"nope"));
        assert_eq!(graph, before);
    }

    #[test]
    fn remove_edge_keeps_endpoints() {
        let mut graph = path();
        assert!(graph.remove_edge(&"s2", &"s1"));
        assert!(!graph.has_edge(&"s1", &"s2"));
        assert!(graph.has_node(&"s1"));
        assert_eq!(graph.edge_count(), 1);

        assert!(!graph.remove_edge(&"s2", &"s1"));
        assert!(!graph.remove_edge(&"s1", &"ghost"));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn clear_resets_everything() {
        let mut graph = path();
        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph, Graph::new());
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let forward = Graph::from_edges([(1, 2), (2, 3), (3, 4)]);
        let backward = Graph::from_edges([(4, 3), (3, 2), (2, 1)]);
        assert_eq!(forward, backward);

        let mut missing = backward.clone();
        missing.remove_edge(&2, &3);
        assert_ne!(forward, missing);

        let mut extra_node = forward.clone();
        extra_node.add_node(5);
        assert_ne!(forward, extra_node);
    }

    #[test]
    fn equality_compares_node_identities() {
        let mut left = Graph::new();
        left.add_node(1);
        let mut right = Graph::new();
        right.add_node(2);
        assert_ne!(left, right);
    }

    #[test]
    fn edges_are_listed_once() {
        let graph = Graph::from_edges([(1, 2), (2, 3), (3, 1)]);
        let edges = graph.edges();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges, vec![(&1, &2), (&1, &3), (&2, &3)]);
    }

    #[test]
    fn collects_from_iterator() {
        let graph: Graph<u8> = vec![(0, 1), (1, 1), (1, 0)].into_iter().collect();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn debug_lists_nodes_in_order() {
        let graph = Graph::from_edges([(2, 1)]);
        assert_eq!(format!("{graph:?}"), "{2: [1], 1: [2]}");
    }
}
