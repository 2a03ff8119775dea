//! Time-stamped annotation segments and their validation.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Controls when two annotations count as overlapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlapOptions {
    /// Treat segments that only touch (`a.end == b.start`) as overlapping.
    ///
    /// Off by default, so back-to-back turns can share a lane.
    pub touching_overlaps: bool,
}

/// One labelled segment of an audio timeline, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Segment start.
    pub start: f64,
    /// Segment end, never before `start` in a valid annotation.
    pub end: f64,
    /// Speaker (or any other label) attached to the segment.
    pub speaker: String,
}

impl Annotation {
    /// Creates an annotation.
    pub fn new(start: f64, end: f64, speaker: impl Into<String>) -> Self {
        Self {
            start,
            end,
            speaker: speaker.into(),
        }
    }

    /// Returns the segment length in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Checks whether the two segments share some stretch of time.
    pub fn overlaps(&self, other: &Annotation, options: &OverlapOptions) -> bool {
        if options.touching_overlaps {
            self.start <= other.end && other.start <= self.end
        } else {
            self.start < other.end && other.start < self.end
        }
    }
}

/// Error returned when annotations cannot be laid out.
#[derive(Debug)]
pub enum AnnotationError {
    /// `start` or `end` is NaN or infinite.
    NonFinite {
        /// Position of the offending annotation.
        index: usize,
    },
    /// `end` comes before `start`.
    Reversed {
        /// Position of the offending annotation.
        index: usize,
        /// The annotation's start.
        start: f64,
        /// The annotation's end.
        end: f64,
    },
    /// The input is not a JSON array of annotations.
    Json(serde_json::Error),
}

impl fmt::Display for AnnotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { index } => {
                write!(f, "annotation #{index} has a non-finite bound")
            }
            Self::Reversed { index, start, end } => {
                write!(f, "annotation #{index} ends at {end} before it starts at {start}")
            }
            Self::Json(err) => write!(f, "malformed annotation list: {err}"),
        }
    }
}

impl std::error::Error for AnnotationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AnnotationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Checks that every annotation has finite bounds with `start <= end`.
///
/// # Errors
/// Returns the error for the first invalid annotation.
pub fn validate_annotations(annotations: &[Annotation]) -> Result<(), AnnotationError> {
    for (index, annotation) in annotations.iter().enumerate() {
        if !annotation.start.is_finite() || !annotation.end.is_finite() {
            return Err(AnnotationError::NonFinite { index });
        }
        if annotation.end < annotation.start {
            return Err(AnnotationError::Reversed {
                index,
                start: annotation.start,
                end: annotation.end,
            });
        }
    }
    Ok(())
}

/// Parses a JSON array of `{"start", "end", "speaker"}` objects and validates
/// the result.
///
/// # Errors
/// Returns [`AnnotationError::Json`] for malformed input, or the validation
/// error of the first invalid annotation.
pub fn parse_annotations(json: &str) -> Result<Vec<Annotation>, AnnotationError> {
    let annotations: Vec<Annotation> = serde_json::from_str(json)?;
    validate_annotations(&annotations)?;
    Ok(annotations)
}

/// Renders annotations as RTTM, one `SPEAKER` line per annotation in slice
/// order.
///
/// Start and duration are written in seconds with three decimals; the channel
/// is always `1` and unused fields are `<NA>`. An empty slice renders as an
/// empty string.
pub fn to_rttm(uri: &str, annotations: &[Annotation]) -> String {
    annotations
        .iter()
        .map(|annotation| {
            format!(
                "SPEAKER {uri} 1 {:.3} {:.3} <NA> <NA> {} <NA> <NA>\n",
                annotation.start,
                annotation.duration(),
                annotation.speaker
            )
        })
        .collect()
}
