//! Segment taxonomy
//!
//! A pattern decomposes into a finite ordered sequence of segments separated
//! by `/`. An empty component (leading or trailing slash) yields an empty
//! static segment that matches zero characters.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    /// Matched exactly (string equality) against one path component
    Static { literal: String },
    /// Matches one non-empty, non-`/` path component, captured under `name`
    Dynamic { name: String },
    /// Matches one or more remaining components greedily, captured under `name`
    Splat { name: String },
}

impl Segment {
    /// Classify one slash-delimited token of a pattern
    pub fn classify(token: &str) -> Segment {
        if let Some(name) = token.strip_prefix(':') {
            Segment::Dynamic {
                name: name.to_string(),
            }
        } else if let Some(name) = token.strip_prefix('*') {
            Segment::Splat {
                name: name.to_string(),
            }
        } else {
            Segment::Static {
                literal: token.to_string(),
            }
        }
    }

    /// Capture name, if this segment captures anything
    pub fn capture(&self) -> Option<&str> {
        match self {
            Segment::Static { .. } => None,
            Segment::Dynamic { name } | Segment::Splat { name } => Some(name),
        }
    }

    pub fn is_splat(&self) -> bool {
        matches!(self, Segment::Splat { .. })
    }
}

/// Per-kind segment counts, used purely for ranking competing matches,
/// never for matching itself.
///
/// Ordering is "more specific first": fewer splats, then fewer dynamics,
/// then more statics. `a < b` means `a` wins over `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Specificity {
    pub statics: usize,
    pub dynamics: usize,
    pub splats: usize,
}

impl Specificity {
    pub fn count(segments: &[Segment]) -> Self {
        let mut spec = Specificity::default();
        for segment in segments {
            match segment {
                Segment::Static { .. } => spec.statics += 1,
                Segment::Dynamic { .. } => spec.dynamics += 1,
                Segment::Splat { .. } => spec.splats += 1,
            }
        }
        spec
    }
}

impl Ord for Specificity {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.splats
            .cmp(&other.splats)
            .then(self.dynamics.cmp(&other.dynamics))
            .then(other.statics.cmp(&self.statics))
    }
}

impl PartialOrd for Specificity {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
