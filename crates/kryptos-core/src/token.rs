//! Word tokenizer
//!
//! A token is a maximal run of alphanumeric characters. A single `-` or `'`
//! between two alphanumerics is kept inside the token ("Maria-José",
//! "d'Ávila"). Punctuation and whitespace are never tokens.

/// A word of the source text with its byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
    /// Position of the token in the sequence (0-based)
    pub index: usize,
}

impl Token<'_> {
    /// True when the first character is uppercase
    pub fn is_capitalized(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_uppercase)
    }
}

pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut current: Option<usize> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        if ch.is_alphanumeric() {
            if current.is_none() {
                current = Some(pos);
            }
            continue;
        }

        let joins = (ch == '-' || ch == '\'')
            && current.is_some()
            && chars.peek().is_some_and(|(_, next)| next.is_alphanumeric());
        if joins {
            continue;
        }

        if let Some(start) = current.take() {
            push(&mut tokens, text, start, pos);
        }
    }

    if let Some(start) = current {
        push(&mut tokens, text, start, text.len());
    }

    tokens
}

fn push<'a>(tokens: &mut Vec<Token<'a>>, text: &'a str, start: usize, end: usize) {
    let index = tokens.len();
    tokens.push(Token {
        text: &text[start..end],
        start,
        end,
        index,
    });
}
