//! Anonymization pipeline: text in, redacted text out.

pub mod extractor;

use std::sync::Arc;

use kryptos_config::Config;
use kryptos_core::{EntityOracle, Error, Finding, Result};
use kryptos_security::{PatternLibrary, Redactor, RoleClassifier};
use tracing::debug;

pub use extractor::EntityExtractor;

/// Result of one anonymization call
#[derive(Debug, Clone)]
pub struct Anonymized {
    pub text: String,
    /// Every candidate the extractor produced
    pub candidates: Vec<Finding>,
    /// Findings actually replaced, in application order. Overlapping
    /// candidates are merged into one finding over their combined range.
    pub applied: Vec<Finding>,
    /// Index into `candidates` of the finding that labelled each applied one
    pub sources: Vec<usize>,
}

pub struct Anonymizer {
    extractor: EntityExtractor,
    redactor: Redactor,
}

impl Anonymizer {
    /// Build the pipeline around an already loaded oracle
    pub fn new(oracle: Arc<dyn EntityOracle>, config: &Config) -> Self {
        let extractor = EntityExtractor::new(
            oracle,
            RoleClassifier::new(config.roles.window_radius),
            PatternLibrary::with_disabled(&config.patterns.disabled),
        );
        Self::from_parts(extractor, Redactor::new(config.redaction.overlap))
    }

    pub fn from_parts(extractor: EntityExtractor, redactor: Redactor) -> Self {
        Self { extractor, redactor }
    }

    /// Candidate findings only, nothing is replaced
    pub fn find(&self, text: &str) -> Result<Vec<Finding>> {
        ensure_text(text)?;
        Ok(self.extractor.extract(text))
    }

    pub fn anonymize(&self, text: &str) -> Result<Anonymized> {
        ensure_text(text)?;

        // 1. Extract
        let candidates = self.extractor.extract(text);

        // 2. Redact
        let redaction = self.redactor.redact(text, &candidates);

        debug!(
            candidates = candidates.len(),
            applied = redaction.applied.len(),
            policy = %self.redactor.policy(),
            "Anonymized text"
        );

        Ok(Anonymized {
            text: redaction.text,
            candidates,
            applied: redaction.applied,
            sources: redaction.sources,
        })
    }

    /// Redacted copy of `text`
    pub fn process(&self, text: &str) -> Result<String> {
        Ok(self.anonymize(text)?.text)
    }
}

fn ensure_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(())
}
