//! Document loading: turns input files into plain text for the anonymizer.

pub mod handler;
pub mod pdf;
pub mod text;

pub use handler::{Document, DocumentFormat, SourceHandler, SourceHandlerRegistry};
pub use pdf::PdfHandler;
pub use text::TextHandler;
