//! Connected-component extraction.
//!
//! Traversal is depth-first over an explicit work-list, so long chains cost
//! heap rather than call stack.

use core::hash::Hash;
use std::collections::{HashMap, HashSet};

use super::Graph;

impl<N: Eq + Hash + Clone> Graph<N> {
    /// Returns the connected component containing `seed` as a new graph.
    ///
    /// The result holds exactly the nodes reachable from `seed` and every edge
    /// between them. If `seed` is not in this graph, the result is a graph
    /// holding `seed` alone.
    pub fn connected_component(&self, seed: &N) -> Graph<N> {
        let mut visited = HashSet::new();
        self.collect_component(seed, &mut visited)
    }

    /// Partitions the graph into its connected components.
    ///
    /// Components are returned in order of their first node in
    /// [`Graph::nodes`]; every node belongs to exactly one of them.
    pub fn connected_components(&self) -> Vec<Graph<N>> {
        let mut visited: HashSet<&N> = HashSet::with_capacity(self.node_count());
        let mut components = Vec::new();
        for node in self.nodes() {
            if !visited.contains(node) {
                components.push(self.collect_component(node, &mut visited));
            }
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            nodes = self.node_count(),
            components = components.len(),
            "graph partitioned"
        );
        components
    }

    /// Returns the number of connected components.
    pub fn component_count(&self) -> usize {
        self.component_labels()
            .values()
            .map(|&label| label + 1)
            .max()
            .unwrap_or(0)
    }

    /// Labels every node with the index of its component, numbering
    /// components in order of their first node.
    pub(crate) fn component_labels(&self) -> HashMap<&N, usize> {
        let mut labels: HashMap<&N, usize> = HashMap::with_capacity(self.node_count());
        let mut stack = Vec::new();
        let mut next = 0;
        for root in self.nodes() {
            if labels.contains_key(root) {
                continue;
            }
            labels.insert(root, next);
            stack.push(root);
            while let Some(node) = stack.pop() {
                for neighbor in self.adjacent(node).unwrap_or_default() {
                    if !labels.contains_key(neighbor) {
                        labels.insert(neighbor, next);
                        stack.push(neighbor);
                    }
                }
            }
            next += 1;
        }
        labels
    }

    fn collect_component<'a>(&'a self, seed: &'a N, visited: &mut HashSet<&'a N>) -> Graph<N> {
        let mut component = Graph::new();
        let mut stack = vec![seed];
        visited.insert(seed);

        while let Some(node) = stack.pop() {
            component.add_node(node.clone());
            for neighbor in self.adjacent(node).unwrap_or_default() {
                component.add_edge(node.clone(), neighbor.clone());
                if visited.insert(neighbor) {
                    stack.push(neighbor);
                }
            }
        }

        component
    }
}
