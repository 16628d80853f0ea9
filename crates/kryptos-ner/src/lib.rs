//! Default entity model
//!
//! A lightweight stand-in for a pretrained Portuguese NER model: capitalized
//! word runs are chunked and labelled `PER`, `ORG` or `LOC` from gazetteers,
//! organization indicators and personal titles. It implements
//! `kryptos_core::EntityOracle`, so any other tagger can replace it.

pub mod gazetteer;
pub mod model;

pub use gazetteer::Gazetteer;
pub use model::HeuristicModel;
