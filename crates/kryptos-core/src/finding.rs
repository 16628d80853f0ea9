use serde::Serialize;

use crate::label::Label;

/// A detected sensitive span.
///
/// `start` and `end` are half-open byte offsets into the exact string the
/// finding was computed from, always on `char` boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub text: String,
    pub label: Label,
    pub start: usize,
    pub end: usize,
}

impl Finding {
    pub fn new(text: impl Into<String>, label: impl Into<Label>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
            start,
            end,
        }
    }

    /// Build a finding for `source[start..end]`.
    ///
    /// Returns `None` when the range is empty, out of bounds, or splits a
    /// character.
    pub fn from_source(source: &str, label: impl Into<Label>, start: usize, end: usize) -> Option<Self> {
        if start >= end {
            return None;
        }
        let text = source.get(start..end)?;
        Some(Self::new(text, label, start, end))
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start < end && start < self.end
    }

    /// Marker text that replaces this finding.
    pub fn marker(&self) -> String {
        marker(&self.label)
    }
}

/// Literal redaction marker for a label: `[<LABEL> REMOVIDO]`.
pub fn marker(label: &Label) -> String {
    format!("[{} REMOVIDO]", label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::{Category, Role};

    #[test]
    fn test_marker_format() {
        assert_eq!(marker(&Label::Role(Role::Victim)), "[Vítima REMOVIDO]");
        assert_eq!(
            marker(&Label::Pattern(Category::BirthDate)),
            "[Data de Nascimento REMOVIDO]"
        );
    }

    #[test]
    fn test_from_source_rejects_bad_ranges() {
        let source = "Ré João";
        assert!(Finding::from_source(source, Role::Name, 0, 0).is_none());
        assert!(Finding::from_source(source, Role::Name, 0, 100).is_none());
        // 'é' is two bytes; offset 2 splits it
        assert!(Finding::from_source(source, Role::Name, 0, 2).is_none());

        let finding = Finding::from_source(source, Role::Name, 4, 9).unwrap();
        assert_eq!(finding.text, "João");
    }

    #[test]
    fn test_overlaps_is_half_open() {
        let finding = Finding::new("abc", Category::Cpf, 5, 8);
        assert!(finding.overlaps(7, 10));
        assert!(!finding.overlaps(8, 10));
        assert!(!finding.overlaps(0, 5));
    }

    #[test]
    fn test_serializes_label_as_string() {
        let finding = Finding::new("Maria", Role::Witness, 0, 5);
        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["label"], "Testemunha");
        assert_eq!(json["end"], 5);
    }
}
