//! Candidate finding extraction
//!
//! Combines the entity oracle (person names classified by role, plus
//! organizations and locations) with the pattern library. The result is an
//! unordered, undeduplicated candidate set; overlaps are the redactor's
//! business.

use std::sync::Arc;

use kryptos_core::oracle::{LOCATION, ORGANIZATION, PERSON};
use kryptos_core::{Category, EntityOracle, Finding, Label, tokenize};
use kryptos_security::{PatternLibrary, RoleClassifier, is_role_keyword, marker_spans};
use tracing::{debug, warn};

pub struct EntityExtractor {
    oracle: Arc<dyn EntityOracle>,
    classifier: RoleClassifier,
    patterns: PatternLibrary,
}

impl EntityExtractor {
    pub fn new(oracle: Arc<dyn EntityOracle>, classifier: RoleClassifier, patterns: PatternLibrary) -> Self {
        Self {
            oracle,
            classifier,
            patterns,
        }
    }

    /// All candidate findings for `text`: oracle findings in oracle order,
    /// then pattern findings in pattern table order.
    ///
    /// Candidates overlapping a redaction marker already present in the text
    /// are dropped, so redacted output can be fed back in unchanged.
    pub fn extract(&self, text: &str) -> Vec<Finding> {
        let tokens = tokenize(text);
        let mut findings = Vec::new();

        for span in self.oracle.tag(text) {
            if span.start >= span.end || text.get(span.start..span.end).is_none() {
                warn!(
                    oracle = self.oracle.name(),
                    start = span.start,
                    end = span.end,
                    "Discarding entity span outside the text"
                );
                continue;
            }

            let label = match span.label.as_str() {
                PERSON => Label::Role(self.classifier.classify(&tokens, span.start, span.end)),
                ORGANIZATION | LOCATION => Label::Entity(span.label.clone()),
                _ => continue,
            };

            findings.extend(Finding::from_source(text, label, span.start, span.end));
        }
        let from_oracle = findings.len();

        findings.extend(
            self.patterns
                .scan(text)
                .into_iter()
                .filter_map(|f| trim_role_keywords(text, f)),
        );

        let markers = marker_spans(text);
        if !markers.is_empty() {
            findings.retain(|f| !markers.iter().any(|m| f.overlaps(m.start, m.end)));
        }

        debug!(
            oracle = from_oracle,
            total = findings.len(),
            markers = markers.len(),
            "Extracted candidate findings"
        );

        findings
    }
}

/// Strip leading role keywords from a full-name match ("Testemunha Ana
/// Lima" becomes "Ana Lima"). A match made only of keywords is dropped.
fn trim_role_keywords(text: &str, finding: Finding) -> Option<Finding> {
    if finding.label != Label::Pattern(Category::FullName) {
        return Some(finding);
    }

    let words = tokenize(&finding.text);
    let skip = words.iter().take_while(|w| is_role_keyword(w.text)).count();
    if skip == 0 {
        return Some(finding);
    }

    let first = words.get(skip)?;
    Finding::from_source(text, finding.label, finding.start + first.start, finding.end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kryptos_core::{Role, TaggedSpan};

    /// Oracle returning fixed spans, located by substring
    struct FixedOracle {
        spans: Vec<(String, String)>,
    }

    impl FixedOracle {
        fn new(spans: &[(&str, &str)]) -> Arc<dyn EntityOracle> {
            Arc::new(Self {
                spans: spans
                    .iter()
                    .map(|(t, l)| (t.to_string(), l.to_string()))
                    .collect(),
            })
        }
    }

    impl EntityOracle for FixedOracle {
        fn tag(&self, text: &str) -> Vec<TaggedSpan> {
            self.spans
                .iter()
                .filter_map(|(needle, label)| {
                    let start = text.find(needle.as_str())?;
                    Some(TaggedSpan::new(needle.as_str(), label.as_str(), start, start + needle.len()))
                })
                .collect()
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    /// Oracle returning whatever spans it was given, unchecked
    struct RawOracle(Vec<TaggedSpan>);

    impl EntityOracle for RawOracle {
        fn tag(&self, _text: &str) -> Vec<TaggedSpan> {
            self.0.clone()
        }

        fn name(&self) -> &str {
            "raw"
        }
    }

    fn extractor(oracle: Arc<dyn EntityOracle>) -> EntityExtractor {
        EntityExtractor::new(oracle, RoleClassifier::default(), PatternLibrary::new())
    }

    #[test]
    fn test_person_spans_get_roles() {
        let text = "A vítima Maria da Silva e o réu João Souza.";
        let oracle = FixedOracle::new(&[("Maria da Silva", "PER"), ("João Souza", "PER")]);

        let findings = extractor(oracle).extract(text);
        let roles: Vec<&Label> = findings.iter().take(2).map(|f| &f.label).collect();

        // both names share one window, so priority order decides
        assert_eq!(roles, vec![&Label::Role(Role::Victim), &Label::Role(Role::Victim)]);
    }

    #[test]
    fn test_org_and_loc_labels_kept_verbatim() {
        let text = "Tribunal de Justiça, em Belém";
        let oracle = FixedOracle::new(&[("Tribunal de Justiça", "ORG"), ("Belém", "LOC")]);

        let findings = extractor(oracle).extract(text);

        assert_eq!(findings[0].label, Label::Entity("ORG".to_string()));
        assert_eq!(findings[1].label, Label::Entity("LOC".to_string()));
    }

    #[test]
    fn test_other_oracle_labels_ignored() {
        let oracle = FixedOracle::new(&[("Copa", "MISC")]);
        assert!(extractor(oracle).extract("a Copa acabou").is_empty());
    }

    #[test]
    fn test_oracle_findings_precede_pattern_findings() {
        let text = "Testemunha Ana Lima, CPF 123.456.789-09";
        let oracle = FixedOracle::new(&[("Ana Lima", "PER")]);

        let findings = extractor(oracle).extract(text);
        let labels: Vec<String> = findings.iter().map(|f| f.label.to_string()).collect();

        assert_eq!(labels[0], "Testemunha");
        assert!(labels.contains(&"CPF".to_string()));
        // no dedup: the coarse name pattern also covers the name
        assert!(labels.contains(&"Nome Completo".to_string()));
    }

    #[test]
    fn test_invalid_oracle_spans_are_discarded() {
        let text = "ação de Ana";
        let oracle = Arc::new(RawOracle(vec![
            TaggedSpan::new("x", "PER", 1, 2),
            TaggedSpan::new("x", "PER", 5, 500),
            TaggedSpan::new("Ana", "PER", 10, 13),
        ]));

        let findings = extractor(oracle).extract(text);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].text, "Ana");
        assert_eq!(findings[0].label, Label::Role(Role::Name));
    }

    #[test]
    fn test_existing_markers_are_not_rematched() {
        let text = "[Nome Completo REMOVIDO] depôs; [CPF REMOVIDO]";
        let oracle = FixedOracle::new(&[("Nome Completo", "PER")]);

        assert!(extractor(oracle).extract(text).is_empty());
    }

    #[test]
    fn test_full_name_match_drops_leading_role_word() {
        let text = "Réu Pedro Lima; Vítima Testemunha";
        let findings = extractor(FixedOracle::new(&[])).extract(text);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].text, "Pedro Lima");
        assert_eq!(findings[0].start, text.find("Pedro").unwrap());
        assert_eq!(findings[0].label, Label::Pattern(Category::FullName));
    }

    #[test]
    fn test_disabled_pattern_not_extracted() {
        let text = "Ana Lima";
        let extractor = EntityExtractor::new(
            FixedOracle::new(&[]),
            RoleClassifier::default(),
            PatternLibrary::with_disabled(&[Category::FullName]),
        );

        assert!(extractor.extract(text).is_empty());
    }
}
