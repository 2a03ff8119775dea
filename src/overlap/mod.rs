//! Annotation timelines laid out on lanes.
//!
//! Each annotation becomes a node of an overlap graph, with an edge between
//! every pair of segments that share time. Greedy coloring of that graph picks
//! the lane each segment is drawn on, and its connected components are the
//! clusters of mutually-overlapping segments.

pub mod annotation;
pub mod lanes;

pub use annotation::{
    parse_annotations,
    to_rttm,
    validate_annotations,
    Annotation,
    AnnotationError,
    OverlapOptions,
};
pub use lanes::{assign_lanes, overlap_graph, LaneLayout};
