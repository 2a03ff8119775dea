//! First-fit greedy coloring.
//!
//! Nodes are visited in [`Graph::nodes`] order and each one takes the smallest
//! color index not already held by one of its neighbors. The result is always a
//! proper coloring and is deterministic for a fixed node order, but it is not
//! guaranteed to use the minimum number of colors.

use core::hash::Hash;
use std::collections::HashMap;

use super::Graph;

/// A color index per node, as produced by [`Graph::greedy_coloring`].
///
/// Iteration follows the order in which colors were assigned.
#[derive(Debug, Clone)]
pub struct Coloring<N> {
    assigned: Vec<(N, usize)>,
    index: HashMap<N, usize>,
}

impl<N: Eq + Hash + Clone> Coloring<N> {
    fn from_assignments(assigned: Vec<(N, usize)>) -> Self {
        let index = assigned
            .iter()
            .enumerate()
            .map(|(slot, (node, _))| (node.clone(), slot))
            .collect();
        Self { assigned, index }
    }

    /// Returns the color of `node`, or `None` if it was not colored.
    pub fn get(&self, node: &N) -> Option<usize> {
        self.index.get(node).map(|&slot| self.assigned[slot].1)
    }

    /// Returns the number of colored nodes.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    /// Returns `true` if no node was colored.
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    /// Iterates over `(node, color)` pairs in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&N, usize)> + '_ {
        self.assigned.iter().map(|(node, color)| (node, *color))
    }

    /// Returns the number of colors used, i.e. the highest index plus one.
    pub fn color_count(&self) -> usize {
        self.assigned
            .iter()
            .map(|&(_, color)| color + 1)
            .max()
            .unwrap_or(0)
    }

    /// Groups nodes by color: entry `c` lists the nodes colored `c`.
    pub fn classes(&self) -> Vec<Vec<N>> {
        let mut classes = vec![Vec::new(); self.color_count()];
        for (node, color) in &self.assigned {
            classes[*color].push(node.clone());
        }
        classes
    }

    /// Checks that every node of `graph` is colored and no edge joins two
    /// nodes of the same color.
    pub fn is_proper_for(&self, graph: &Graph<N>) -> bool {
        graph.nodes().iter().all(|node| self.index.contains_key(node))
            && graph
                .edges()
                .into_iter()
                .all(|(a, b)| self.get(a) != self.get(b))
    }

    /// Consumes the coloring and returns the plain node-to-color map.
    pub fn into_map(self) -> HashMap<N, usize> {
        self.assigned.into_iter().collect()
    }
}

impl<N: Eq + Hash + Clone> PartialEq for Coloring<N> {
    /// Colorings are equal when they give every node the same color,
    /// whatever order the colors were assigned in.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(node, color)| other.get(node) == Some(color))
    }
}

impl<N: Eq + Hash + Clone> Eq for Coloring<N> {}

impl<N: Eq + Hash + Clone> Graph<N> {
    /// Colors the graph with first-fit greedy coloring in node order.
    ///
    /// Adjacent nodes always receive different colors; an isolated node always
    /// receives color 0. A complete graph on `n` nodes uses exactly the colors
    /// `0..n`.
    pub fn greedy_coloring(&self) -> Coloring<N> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("greedy_coloring", nodes = self.node_count()).entered();

        let coloring = Coloring::from_assignments(self.first_fit(self.nodes()));

        #[cfg(feature = "tracing")]
        tracing::debug!(colors = coloring.color_count(), "graph colored");
        coloring
    }

    /// Colors each connected component on its own and merges the results.
    ///
    /// First-fit only ever consults neighbors, which always share a component,
    /// so the merged coloring is identical to [`Graph::greedy_coloring`].
    #[cfg(not(feature = "parallel"))]
    pub fn greedy_coloring_by_component(&self) -> Coloring<N> {
        let partial = self
            .component_buckets()
            .iter()
            .map(|bucket| self.first_fit(bucket.iter().copied()))
            .collect();
        self.merge_in_node_order(partial)
    }

    /// Colors each connected component on the rayon pool and merges the
    /// results.
    ///
    /// First-fit only ever consults neighbors, which always share a component,
    /// so the merged coloring is identical to [`Graph::greedy_coloring`]. The
    /// `Send + Sync` bound exists only in this build, where components are
    /// colored on worker threads.
    #[cfg(feature = "parallel")]
    pub fn greedy_coloring_by_component(&self) -> Coloring<N>
    where
        N: Send + Sync,
    {
        use rayon::prelude::*;

        let partial = self
            .component_buckets()
            .par_iter()
            .map(|bucket| self.first_fit(bucket.iter().copied()))
            .collect();
        self.merge_in_node_order(partial)
    }

    /// Groups nodes by component, keeping node order inside each group.
    fn component_buckets(&self) -> Vec<Vec<&N>> {
        let labels = self.component_labels();
        let count = labels.values().map(|&label| label + 1).max().unwrap_or(0);
        let mut buckets: Vec<Vec<&N>> = vec![Vec::new(); count];
        for node in self.nodes() {
            if let Some(&label) = labels.get(node) {
                buckets[label].push(node);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(components = count, "coloring components independently");
        buckets
    }

    fn merge_in_node_order(&self, partial: Vec<Vec<(N, usize)>>) -> Coloring<N> {
        let mut merged: HashMap<N, usize> = partial.into_iter().flatten().collect();
        let assigned = self
            .nodes()
            .iter()
            .filter_map(|node| merged.remove(node).map(|color| (node.clone(), color)))
            .collect();
        Coloring::from_assignments(assigned)
    }

    /// Assigns first-fit colors to `order`, consulting only neighbors already
    /// colored during this pass.
    fn first_fit<'a, I>(&'a self, order: I) -> Vec<(N, usize)>
    where
        I: IntoIterator<Item = &'a N>,
    {
        let mut colors: HashMap<&N, usize> = HashMap::new();
        let mut assigned = Vec::new();
        let mut taken: Vec<bool> = Vec::new();

        for node in order {
            let neighbors = self.adjacent(node).unwrap_or_default();
            // The smallest free color is at most the degree.
            taken.clear();
            taken.resize(neighbors.len() + 1, false);
            for neighbor in neighbors {
                if let Some(&color) = colors.get(neighbor) {
                    if color < taken.len() {
                        taken[color] = true;
                    }
                }
            }
            let color = taken
                .iter()
                .position(|&used| !used)
                .unwrap_or(neighbors.len());
            colors.insert(node, color);
            assigned.push((node.clone(), color));
        }

        assigned
    }
}
