//! Detection and redaction primitives
//!
//! - `patterns`: regex detectors for structured fields
//! - `roles`: procedural role of a person name from nearby keywords
//! - `redactor`: overlap resolution and marker substitution

pub mod patterns;
pub mod redactor;
pub mod roles;

pub use patterns::{BUILTIN_PATTERNS, PatternLibrary, marker_spans};
pub use redactor::{Redaction, RedactionPlan, Redactor, splice};
pub use roles::{ROLE_KEYWORDS, RoleClassifier, is_role_keyword};
