//! Core domain models for kryptos
//!
//! This crate contains:
//! - Domain models (Finding, Label, Category, Role)
//! - The entity oracle seam (EntityOracle, TaggedSpan)
//! - A word tokenizer shared by the role classifier and the default model

pub mod error;
pub mod finding;
pub mod label;
pub mod oracle;
pub mod policy;
pub mod token;

pub use error::{Error, Result};
pub use finding::{Finding, marker};
pub use label::{Category, Label, Role};
pub use oracle::{EntityOracle, TaggedSpan};
pub use policy::OverlapPolicy;
pub use token::{Token, tokenize};
