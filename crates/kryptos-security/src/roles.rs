//! Role classification for person names
//!
//! A name's role is decided by the keywords found among the word tokens
//! around it. Groups are tested in a fixed priority order and the first
//! group with any keyword in the window wins: two roles in the same window
//! resolve by priority, not by proximity.

use kryptos_core::{Role, Token};

/// Role keyword groups, in priority order.
pub const ROLE_KEYWORDS: [(Role, &[&str]); 4] = [
    (
        Role::Victim,
        &["vítima", "ofendido", "ofendida", "querelante", "lesado", "lesada"],
    ),
    (Role::Witness, &["testemunha", "depoente", "declarante"]),
    (
        Role::Defendant,
        &["réu", "ré", "acusado", "acusada", "indiciado", "indiciada"],
    ),
    (
        Role::Investigated,
        &["denunciado", "denunciada", "investigado", "investigada"],
    ),
];

/// True when `word` (any case) is one of the role keywords
pub fn is_role_keyword(word: &str) -> bool {
    let lower = word.to_lowercase();
    ROLE_KEYWORDS
        .iter()
        .any(|(_, keywords)| keywords.contains(&lower.as_str()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleClassifier {
    radius: usize,
}

impl RoleClassifier {
    pub const DEFAULT_RADIUS: usize = 10;

    /// Classifier looking `radius` tokens before and after a name
    pub fn new(radius: usize) -> Self {
        Self { radius }
    }

    /// Role of the name spanning bytes `start..end`, given the tokens of the
    /// whole document (as produced by `kryptos_core::tokenize`).
    pub fn classify(&self, tokens: &[Token<'_>], start: usize, end: usize) -> Role {
        Self::classify_window(self.window(tokens, start, end).iter().map(|t| t.text))
    }

    /// Tokens of the context window around `start..end`: the name's own
    /// tokens plus `radius` on each side, clamped to the document.
    pub fn window<'t, 'a>(&self, tokens: &'t [Token<'a>], start: usize, end: usize) -> &'t [Token<'a>] {
        let first = tokens.partition_point(|t| t.end <= start);
        let last = tokens.partition_point(|t| t.start < end).max(first);

        let lo = first.saturating_sub(self.radius);
        let hi = last.saturating_add(self.radius).min(tokens.len());
        &tokens[lo..hi]
    }

    /// First-match role for a window of words; `Role::Name` when no keyword
    /// is present.
    pub fn classify_window<'w>(words: impl IntoIterator<Item = &'w str>) -> Role {
        let words: Vec<String> = words.into_iter().map(str::to_lowercase).collect();

        ROLE_KEYWORDS
            .iter()
            .find(|(_, keywords)| words.iter().any(|w| keywords.contains(&w.as_str())))
            .map(|(role, _)| *role)
            .unwrap_or(Role::Name)
    }
}

impl Default for RoleClassifier {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RADIUS)
    }
}
