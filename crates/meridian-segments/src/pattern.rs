//! Compiled pattern specifications
//!
//! A `PatternSpec` is the result of parsing a pattern string: the ordered
//! segment list, the set of capture names (unique within one pattern), and
//! the specificity tuple used by the recognizer to rank competing matches.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::SegmentError;
use crate::segment::{Segment, Specificity};
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSpec {
    pattern: String,
    segments: Vec<Segment>,
    captures: Vec<String>,
    specificity: Specificity,
}

impl PatternSpec {
    /// Compile a pattern string.
    ///
    /// The leading `/` is optional; the empty pattern matches the root.
    /// Fails if a capture name repeats or two splats are adjacent with
    /// nothing between them to anchor the split.
    pub fn parse(pattern: &str) -> Result<Self> {
        let trimmed = pattern.strip_prefix('/').unwrap_or(pattern);

        let segments: Vec<Segment> = trimmed.split('/').map(Segment::classify).collect();

        let mut captures: Vec<String> = Vec::new();
        for segment in &segments {
            if let Some(name) = segment.capture() {
                if captures.iter().any(|c| c == name) {
                    return Err(SegmentError::DuplicateCapture {
                        pattern: pattern.to_string(),
                        name: name.to_string(),
                    });
                }
                captures.push(name.to_string());
            }
        }

        if segments.windows(2).any(|w| w[0].is_splat() && w[1].is_splat()) {
            return Err(SegmentError::AdjacentSplats {
                pattern: pattern.to_string(),
            });
        }

        let specificity = Specificity::count(&segments);

        Ok(Self {
            pattern: pattern.to_string(),
            segments,
            captures,
            specificity,
        })
    }

    /// Original pattern text
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Capture names in segment order
    pub fn captures(&self) -> &[String] {
        &self.captures
    }

    pub fn specificity(&self) -> Specificity {
        self.specificity
    }

    /// Match a path (no query string) against this pattern.
    ///
    /// On a match, every capture name of the pattern has a value in the
    /// returned map. Splats backtrack from the greediest span down until the
    /// remainder of the pattern fits.
    pub fn match_path(&self, path: &str) -> Option<HashMap<String, String>> {
        let trimmed = path.strip_prefix('/').unwrap_or(path);
        let components: Vec<&str> = trimmed.split('/').collect();

        let mut params = HashMap::new();
        if match_components(&self.segments, &components, &mut params) {
            Some(params)
        } else {
            None
        }
    }

    /// Inverse of `parse`: substitute a parameter bag back into the pattern,
    /// producing a literal path (no leading slash).
    pub fn generate(&self, params: &HashMap<String, String>) -> Result<String> {
        let mut parts = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment {
                Segment::Static { literal } => parts.push(literal.clone()),
                Segment::Dynamic { name } | Segment::Splat { name } => {
                    let value =
                        params
                            .get(name)
                            .ok_or_else(|| SegmentError::MissingParameter {
                                pattern: self.pattern.clone(),
                                name: name.clone(),
                            })?;
                    parts.push(value.clone());
                }
            }
        }
        Ok(parts.join("/"))
    }
}

fn match_components(
    segments: &[Segment],
    components: &[&str],
    params: &mut HashMap<String, String>,
) -> bool {
    let (segment, rest) = match segments.split_first() {
        Some(split) => split,
        None => return components.is_empty(),
    };

    match segment {
        Segment::Static { literal } => match components.split_first() {
            Some((component, remaining)) if component == literal => {
                match_components(rest, remaining, params)
            }
            _ => false,
        },
        Segment::Dynamic { name } => match components.split_first() {
            Some((component, remaining)) if !component.is_empty() => {
                params.insert(name.clone(), component.to_string());
                if match_components(rest, remaining, params) {
                    true
                } else {
                    params.remove(name);
                    false
                }
            }
            _ => false,
        },
        Segment::Splat { name } => {
            // Greedy: consume as many components as possible, then back off
            // until the remainder of the pattern fits. Must span at least one
            // non-empty component.
            for take in (1..=components.len()).rev() {
                let span = components[..take].join("/");
                if span.is_empty() {
                    continue;
                }
                params.insert(name.clone(), span);
                if match_components(rest, &components[take..], params) {
                    return true;
                }
            }
            params.remove(name);
            false
        }
    }
}
