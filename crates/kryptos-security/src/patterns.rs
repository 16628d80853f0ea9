//! Pattern library for structured sensitive fields

use kryptos_core::{Category, Finding};
use lazy_static::lazy_static;
use regex::Regex;
use std::ops::Range;

/// Built-in detectors, in scan order.
pub const BUILTIN_PATTERNS: [(Category, &str); 9] = [
    (Category::Cpf, r"\b\d{3}\.?\d{3}\.?\d{3}-?\d{2}\b"),
    (Category::Rg, r"\b\d{1,2}\.?\d{3}\.?\d{3}[-\s]?[0-9X]\b"),
    (Category::BirthDate, r"\b\d{2}/\d{2}/\d{4}\b"),
    (Category::Phone, r"\b(\(?\d{2}\)?\s?)?(\d{4,5}[-.\s]?\d{4})\b"),
    (
        Category::Email,
        r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b",
    ),
    (Category::PostalCode, r"\b\d{5}-?\d{3}\b"),
    (
        Category::Address,
        r"\b(Rua|Avenida|Alameda|Travessa|Praça|Estrada)\s+[A-Za-zÀ-ÿ\s]+,?\s+n?º?\s*\d+\b",
    ),
    (
        Category::CaseNumber,
        r"\b\d{7}-?\d{2}\.?\d{4}\.?\d\.?\d{2}\.?\d{4}\b",
    ),
    (
        Category::FullName,
        r"\b[A-ZÀ-Ÿ][a-zà-ÿ]+(\s+[A-ZÀ-Ÿ][a-zà-ÿ]+){1,}\b",
    ),
];

lazy_static! {
    static ref COMPILED: Vec<(Category, Regex)> = BUILTIN_PATTERNS
        .iter()
        .map(|(category, pattern)| (*category, Regex::new(pattern).unwrap()))
        .collect();
    static ref MARKER: Regex = Regex::new(r"\[[^\[\]\n]{1,64} REMOVIDO\]").unwrap();
}

/// Byte ranges of redaction markers (`[<LABEL> REMOVIDO]`) already in `text`
pub fn marker_spans(text: &str) -> Vec<Range<usize>> {
    MARKER.find_iter(text).map(|m| m.range()).collect()
}

/// Fixed table of regex detectors, optionally with some categories disabled.
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    enabled: Vec<Category>,
}

impl PatternLibrary {
    /// Library with every built-in category enabled
    pub fn new() -> Self {
        Self::with_disabled(&[])
    }

    /// Library without the given categories. Remaining categories keep their
    /// built-in order.
    pub fn with_disabled(disabled: &[Category]) -> Self {
        let enabled = COMPILED
            .iter()
            .map(|(category, _)| *category)
            .filter(|category| !disabled.contains(category))
            .collect();

        Self { enabled }
    }

    pub fn categories(&self) -> &[Category] {
        &self.enabled
    }

    /// Compiled regex for an enabled category
    pub fn regex(&self, category: Category) -> Option<&'static Regex> {
        if !self.enabled.contains(&category) {
            return None;
        }
        COMPILED
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, regex)| regex)
    }

    /// Every non-overlapping match of every enabled category, category by
    /// category in table order, each in left-to-right order.
    ///
    /// Matches of different categories may overlap each other.
    pub fn scan(&self, text: &str) -> Vec<Finding> {
        let mut findings = Vec::new();

        for (category, regex) in COMPILED.iter() {
            if !self.enabled.contains(category) {
                continue;
            }
            findings.extend(
                regex
                    .find_iter(text)
                    .map(|m| Finding::new(m.as_str(), *category, m.start(), m.end())),
            );
        }

        findings
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kryptos_core::Label;

    fn labels_of(findings: &[Finding]) -> Vec<String> {
        findings.iter().map(|f| f.label.to_string()).collect()
    }

    fn find(findings: &[Finding], category: Category) -> Vec<&Finding> {
        findings
            .iter()
            .filter(|f| f.label == Label::Pattern(category))
            .collect()
    }

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(COMPILED.len(), BUILTIN_PATTERNS.len());
        for category in BUILTIN_PATTERNS.iter().map(|(c, _)| *c) {
            assert!(PatternLibrary::new().regex(category).is_some());
        }
    }

    #[test]
    fn test_cpf_detection() {
        let findings = PatternLibrary::new().scan("123.456.789-09");
        let cpf = find(&findings, Category::Cpf);

        assert_eq!(cpf.len(), 1);
        assert_eq!(cpf[0].start, 0);
        assert_eq!(cpf[0].end, 14);
        assert_eq!(cpf[0].text, "123.456.789-09");
    }

    #[test]
    fn test_email_detection() {
        let findings = PatternLibrary::new().scan("Contato: joao@exemplo.com.br");
        let email = find(&findings, Category::Email);

        assert_eq!(email.len(), 1);
        assert_eq!(email[0].text, "joao@exemplo.com.br");
        assert_eq!(email[0].start, 9);
    }

    #[test]
    fn test_rg_with_check_letter() {
        let findings = PatternLibrary::new().scan("RG 12.345.678-X expedido");
        let rg = find(&findings, Category::Rg);

        assert_eq!(rg.len(), 1);
        assert_eq!(rg[0].text, "12.345.678-X");
    }

    #[test]
    fn test_birth_date() {
        let findings = PatternLibrary::new().scan("nascido em 01/02/1990, solteiro");
        let dates = find(&findings, Category::BirthDate);

        assert_eq!(dates.len(), 1);
        assert_eq!(dates[0].text, "01/02/1990");
    }

    #[test]
    fn test_phone_with_area_code() {
        let findings = PatternLibrary::new().scan("telefone (91) 98765-4321.");
        let phones = find(&findings, Category::Phone);

        assert_eq!(phones.len(), 1);
        assert_eq!(phones[0].text, "91) 98765-4321");
    }

    #[test]
    fn test_postal_code() {
        let findings = PatternLibrary::new().scan("CEP 66010-000");
        let cep = find(&findings, Category::PostalCode);

        assert_eq!(cep.len(), 1);
        assert_eq!(cep[0].text, "66010-000");
    }

    #[test]
    fn test_street_address() {
        let findings = PatternLibrary::new().scan("reside na Rua das Flores, nº 123, centro");
        let address = find(&findings, Category::Address);

        assert_eq!(address.len(), 1);
        assert_eq!(address[0].text, "Rua das Flores, nº 123");
    }

    #[test]
    fn test_case_number() {
        let findings = PatternLibrary::new().scan("Processo 0801234-56.2023.8.14.0301 em curso");
        let case = find(&findings, Category::CaseNumber);

        assert_eq!(case.len(), 1);
        assert_eq!(case[0].text, "0801234-56.2023.8.14.0301");
    }

    #[test]
    fn test_full_name_pattern_handles_accents() {
        let findings = PatternLibrary::new().scan("compareceu Érica Conceição hoje");
        let names = find(&findings, Category::FullName);

        assert_eq!(names.len(), 1);
        assert_eq!(names[0].text, "Érica Conceição");
    }

    #[test]
    fn test_full_name_pattern_needs_two_words() {
        let findings = PatternLibrary::new().scan("compareceu Maria da Silva");
        assert!(find(&findings, Category::FullName).is_empty());
    }

    #[test]
    fn test_scan_order_follows_table() {
        let text = "Email ana@tj.jus.br CPF 123.456.789-09";
        let labels = labels_of(&PatternLibrary::new().scan(text));

        let cpf = labels.iter().position(|l| l == "CPF").unwrap();
        let email = labels.iter().position(|l| l == "Email").unwrap();
        assert!(cpf < email);
    }

    #[test]
    fn test_disabled_categories_are_skipped() {
        let library = PatternLibrary::with_disabled(&[Category::FullName, Category::Rg]);

        assert!(!library.categories().contains(&Category::FullName));
        assert!(library.regex(Category::FullName).is_none());
        assert_eq!(library.categories()[0], Category::Cpf);

        let findings = library.scan("Ana Souza, RG 12.345.678-X");
        assert!(find(&findings, Category::FullName).is_empty());
        assert!(find(&findings, Category::Rg).is_empty());
    }

    #[test]
    fn test_no_matches() {
        assert!(PatternLibrary::new().scan("sem dados sensíveis aqui").is_empty());
        assert!(PatternLibrary::new().scan("").is_empty());
    }

    #[test]
    fn test_marker_spans() {
        let text = "A [Vítima REMOVIDO] e [Nome Completo REMOVIDO], [x] [ REMOVIDO]";
        let spans = marker_spans(text);

        assert_eq!(spans.len(), 2);
        assert_eq!(&text[spans[0].clone()], "[Vítima REMOVIDO]");
        assert_eq!(&text[spans[1].clone()], "[Nome Completo REMOVIDO]");
    }

    #[test]
    fn test_markers_are_not_matched() {
        let text = "[Vítima REMOVIDO] [Data de Nascimento REMOVIDO] [CPF REMOVIDO]";
        assert!(PatternLibrary::new().scan(text).is_empty());
    }
}
