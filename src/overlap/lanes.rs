//! Overlap graphs and lane assignment for annotation timelines.

use serde::{Deserialize, Serialize};

use super::annotation::{validate_annotations, Annotation, AnnotationError, OverlapOptions};
use crate::graph::invariants::graph_assert;
use crate::graph::Graph;

/// The lane chosen for every annotation of a timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneLayout {
    /// `lanes[i]` is the lane of annotation `i`.
    pub lanes: Vec<usize>,
    /// Number of lanes needed to draw the whole timeline.
    pub lane_count: usize,
    clusters: Vec<Vec<usize>>,
}

impl LaneLayout {
    /// Returns the lane of annotation `index`.
    pub fn lane(&self, index: usize) -> Option<usize> {
        self.lanes.get(index).copied()
    }

    /// Annotation indices grouped into overlap clusters.
    ///
    /// Clusters are ordered by their earliest start; indices inside a cluster
    /// are ascending.
    pub fn clusters(&self) -> &[Vec<usize>] {
        &self.clusters
    }
}

/// Builds the overlap graph of `annotations`.
///
/// Node `i` stands for `annotations[i]`; every index is present, overlapping or
/// not. Nodes are inserted in order of start time, so coloring the graph in
/// node order visits segments left to right. Candidates are found with a
/// sweep over segments sorted by start, keeping only segments that are still
/// open.
pub fn overlap_graph(annotations: &[Annotation], options: &OverlapOptions) -> Graph<usize> {
    let mut by_start: Vec<usize> = (0..annotations.len()).collect();
    by_start.sort_by(|&a, &b| {
        annotations[a]
            .start
            .total_cmp(&annotations[b].start)
            .then_with(|| annotations[a].end.total_cmp(&annotations[b].end))
    });

    let mut graph = Graph::with_capacity(annotations.len());
    for &index in &by_start {
        graph.add_node(index);
    }

    let mut open: Vec<usize> = Vec::new();
    for &index in &by_start {
        let current = &annotations[index];
        open.retain(|&other| {
            let end = annotations[other].end;
            if options.touching_overlaps {
                end >= current.start
            } else {
                end > current.start
            }
        });
        for &other in &open {
            if annotations[other].overlaps(current, options) {
                graph.add_edge(other, index);
            }
        }
        open.push(index);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        annotations = annotations.len(),
        overlaps = graph.edge_count(),
        "overlap graph built"
    );
    graph
}

/// Chooses a lane for every annotation so that overlapping annotations never
/// share one.
///
/// Segments are colored greedily from left to right, which for interval
/// overlaps uses as few lanes as the busiest instant requires.
///
/// # Errors
/// Returns an [`AnnotationError`] if an annotation has non-finite or reversed
/// bounds.
pub fn assign_lanes(
    annotations: &[Annotation],
    options: &OverlapOptions,
) -> Result<LaneLayout, AnnotationError> {
    validate_annotations(annotations)?;

    let graph = overlap_graph(annotations, options);
    let coloring = graph.greedy_coloring();
    graph_assert(
        coloring.len() == annotations.len(),
        "every annotation index is a colored node of the overlap graph",
    );
    let lanes = (0..annotations.len())
        .map(|index| coloring.get(&index).unwrap_or(0))
        .collect();
    let clusters = graph
        .connected_components()
        .into_iter()
        .map(|component| {
            let mut members = component.nodes().to_vec();
            members.sort_unstable();
            members
        })
        .collect::<Vec<_>>();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        annotations = annotations.len(),
        lanes = coloring.color_count(),
        clusters = clusters.len(),
        "lanes assigned"
    );

    Ok(LaneLayout {
        lanes,
        lane_count: coloring.color_count(),
        clusters,
    })
}
