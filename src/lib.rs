//! # `lanegraph` - Overlap Graphs for Annotation Lanes
//!
//! A small toolkit for laying out overlapping timeline annotations (speaker
//! turns, labelled regions) so that no two overlapping segments are drawn in
//! the same lane.
//!
//! ## Structure
//!
//! 1. **Graph** (`Graph<N>`):
//!    - Undirected simple graph keyed by any `Eq + Hash + Clone` identity
//!    - Symmetric adjacency, no self-loops, no duplicate edges
//!    - Redundant mutations are no-ops, never errors
//!
//! 2. **Algorithms**:
//!    - First-fit greedy coloring (`Graph::greedy_coloring`)
//!    - Connected components, from a seed or as a full partition
//!    - On-demand invariant validation (`Graph::validate`)
//!
//! 3. **Overlap layout** (`overlap`):
//!    - `Annotation` segments as exchanged by annotation widgets (JSON via serde)
//!    - Overlap-graph construction by sort-and-sweep
//!    - Lane assignment and overlap clusters (`assign_lanes`)
//!
//! ## Invariants
//!
//! **Symmetry**: `has_edge(a, b) == has_edge(b, a)` for every pair of nodes.
//!
//! **Proper coloring**: adjacent nodes never receive the same color.
//!
//! **Partition**: `connected_components` returns every node exactly once.
//!
//! ## Cargo features
//!
//! - `tracing` (default): emit `tracing` events from mutations and algorithms
//! - `parallel`: color connected components on the rayon pool
//!
//! ## Example
//!
//! ```rust
//! use lanegraph::{assign_lanes, Annotation, Graph, OverlapOptions};
//!
//! let mut graph = Graph::new();
//! graph.add_edge("s1", "s2");
//! graph.add_edge("s2", "s3");
//!
//! let coloring = graph.greedy_coloring();
//! assert_eq!(coloring.get(&"s1"), Some(0));
//! assert_eq!(coloring.get(&"s2"), Some(1));
//! assert_eq!(coloring.get(&"s3"), Some(0));
//!
//! let turns = [
//!     Annotation::new(0.0, 2.0, "SPEAKER_00"),
//!     Annotation::new(1.0, 3.0, "SPEAKER_01"),
//!     Annotation::new(3.0, 4.0, "SPEAKER_00"),
//! ];
//! let layout = assign_lanes(&turns, &OverlapOptions::default()).unwrap();
//! assert_eq!(layout.lanes, vec![0, 1, 0]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod graph;
pub mod overlap;

pub use graph::{Coloring, Graph, InvariantViolation};
pub use overlap::{
    assign_lanes,
    overlap_graph,
    parse_annotations,
    to_rttm,
    validate_annotations,
    Annotation,
    AnnotationError,
    LaneLayout,
    OverlapOptions,
};

// Compile-time assertions: the value types stay shareable across threads.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Graph<usize>>();
    assert_send_sync::<Graph<String>>();
    assert_send_sync::<Coloring<usize>>();
    assert_send_sync::<LaneLayout>();
};
