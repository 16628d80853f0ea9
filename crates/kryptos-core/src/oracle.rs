//! Entity oracle seam
//!
//! The named-entity model is an external collaborator. The pipeline only
//! depends on this trait: text in, tagged spans out.

use serde::{Deserialize, Serialize};

/// Oracle label for person names.
pub const PERSON: &str = "PER";
/// Oracle label for organizations.
pub const ORGANIZATION: &str = "ORG";
/// Oracle label for locations.
pub const LOCATION: &str = "LOC";

/// A span tagged by the oracle. Offsets are byte offsets into the tagged text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedSpan {
    pub text: String,
    pub label: String,
    pub start: usize,
    pub end: usize,
}

impl TaggedSpan {
    pub fn new(text: impl Into<String>, label: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
            start,
            end,
        }
    }
}

/// Named-entity tagger.
///
/// Implementations are loaded once per process and shared read-only. Loading
/// is where failures belong; tagging itself is infallible.
pub trait EntityOracle: Send + Sync {
    /// Tag person, organization and location spans in `text`
    fn tag(&self, text: &str) -> Vec<TaggedSpan>;

    /// Identifier for logs (e.g. "heuristic")
    fn name(&self) -> &str;
}
