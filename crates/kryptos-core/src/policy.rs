use serde::{Deserialize, Serialize};
use std::fmt;

/// How the redactor handles findings whose spans overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Replace right to left in place, no overlap resolution. Overlapping
    /// findings corrupt each other's splice.
    Splice,
    /// Longer span wins, then earlier start, then detection order.
    #[default]
    Longest,
    /// Roles beat entities, entities beat structured fields, the coarse
    /// full-name pattern ranks last; ties fall back to `Longest`.
    Priority,
}

impl fmt::Display for OverlapPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OverlapPolicy::Splice => "splice",
            OverlapPolicy::Longest => "longest",
            OverlapPolicy::Priority => "priority",
        };
        f.write_str(name)
    }
}
