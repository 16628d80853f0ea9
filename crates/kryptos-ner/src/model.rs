use std::ops::Range;
use std::path::Path;

use kryptos_core::oracle::{LOCATION, ORGANIZATION, PERSON};
use kryptos_core::{EntityOracle, Result, TaggedSpan, Token, tokenize};
use kryptos_security::is_role_keyword;
use tracing::info;

use crate::gazetteer::Gazetteer;

/// Lowercase words allowed between two capitalized words of one name.
const CONNECTORS: &[&str] = &["da", "de", "do", "das", "dos", "e"];

/// Capitalized at sentence start, never part of a name.
const LEADING_STOPWORDS: &[&str] = &[
    "a", "o", "as", "os", "um", "uma", "uns", "umas", "em", "no", "na", "nos", "nas", "ao", "à",
    "aos", "às", "para", "por", "pelo", "pela", "com", "sem", "sobre", "entre", "que", "se", "ele",
    "ela", "eles", "elas", "este", "esta", "esse", "essa", "isso", "isto", "aquele", "aquela",
    "seu", "sua", "quando", "como", "onde", "após", "antes", "depois", "ontem", "hoje",
    "segundo", "conforme", "consta", "trata", "cuida",
];

/// Titles that announce a person's name. Role keywords announce one too.
const TITLES: &[&str] = &[
    "sr", "sra", "srta", "dr", "dra", "senhor", "senhora", "doutor", "doutora", "juiz", "juíza",
    "promotor", "promotora", "advogado", "advogada", "defensor", "defensora", "delegado",
    "delegada",
];

/// A chunk containing any of these words is an organization.
const ORG_INDICATORS: &[&str] = &[
    "tribunal", "ministério", "delegacia", "secretaria", "prefeitura", "polícia", "defensoria",
    "promotoria", "procuradoria", "vara", "juízo", "cartório", "câmara", "assembleia", "conselho",
    "departamento", "superintendência", "banco", "companhia", "empresa", "associação",
    "instituto", "universidade", "hospital", "escola", "fundação", "cooperativa", "sindicato",
    "igreja", "ltda", "eireli",
];

/// A chunk headed by one of these words is a location.
const LOCATIVE_HEADS: &[&str] = &[
    "estado", "município", "cidade", "bairro", "distrito", "comarca", "vila", "povoado",
    "comunidade",
];

/// Capitalization and gazetteer based entity tagger.
#[derive(Debug, Clone)]
pub struct HeuristicModel {
    gazetteer: Gazetteer,
}

impl HeuristicModel {
    pub fn new(gazetteer: Gazetteer) -> Self {
        Self { gazetteer }
    }

    /// Build the model once at startup: built-in gazetteer plus the optional
    /// user gazetteer. A configured gazetteer that cannot be read or parsed
    /// leaves the model unavailable.
    pub fn load(gazetteer_path: Option<&Path>) -> Result<Self> {
        let mut gazetteer = Gazetteer::builtin();
        if let Some(path) = gazetteer_path {
            gazetteer.extend(Gazetteer::load(path)?);
        }

        info!(
            entries = gazetteer.len(),
            custom = gazetteer_path.is_some(),
            "Loaded entity model"
        );

        Ok(Self::new(gazetteer))
    }

    /// Runs of name-like tokens, as token index ranges
    fn chunks(text: &str, tokens: &[Token<'_>]) -> Vec<Range<usize>> {
        let mut chunks = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            if !is_name_word(&tokens[i]) {
                i += 1;
                continue;
            }

            let start = i;
            let mut end = i + 1;
            loop {
                if end < tokens.len()
                    && adjacent(text, &tokens[end - 1], &tokens[end])
                    && is_name_word(&tokens[end])
                {
                    end += 1;
                } else if end + 1 < tokens.len()
                    && is_connector(tokens[end].text)
                    && adjacent(text, &tokens[end - 1], &tokens[end])
                    && adjacent(text, &tokens[end], &tokens[end + 1])
                    && is_name_word(&tokens[end + 1])
                {
                    end += 2;
                } else {
                    break;
                }
            }

            chunks.push(start..end);
            i = end;
        }

        chunks
    }

    fn classify(&self, words: &[Token<'_>], cued: bool) -> Option<&'static str> {
        let lower: Vec<String> = words.iter().map(|w| w.text.to_lowercase()).collect();
        let phrase = lower.join(" ");

        if lower.iter().any(|w| ORG_INDICATORS.contains(&w.as_str()))
            || self.gazetteer.is_organization(&phrase)
        {
            return Some(ORGANIZATION);
        }

        let headed_by_place = lower.len() > 1 && LOCATIVE_HEADS.contains(&lower[0].as_str());
        if headed_by_place || self.gazetteer.is_location(&phrase) {
            return Some(LOCATION);
        }

        let capitalized = words.iter().filter(|w| w.is_capitalized()).count();
        if cued || capitalized >= 2 || self.gazetteer.is_person(&phrase) {
            return Some(PERSON);
        }

        None
    }
}

impl EntityOracle for HeuristicModel {
    fn tag(&self, text: &str) -> Vec<TaggedSpan> {
        let tokens = tokenize(text);
        let mut spans = Vec::new();

        for chunk in Self::chunks(text, &tokens) {
            let mut first = chunk.start;
            let mut cued = first > 0 && is_cue(tokens[first - 1].text);

            while first < chunk.end {
                let word = tokens[first].text.to_lowercase();
                if is_cue(&word) {
                    cued = true;
                } else if !LEADING_STOPWORDS.contains(&word.as_str()) && !is_connector(&word) {
                    break;
                }
                first += 1;
            }
            if first == chunk.end {
                continue;
            }

            let words = &tokens[first..chunk.end];
            if let Some(label) = self.classify(words, cued) {
                let start = words[0].start;
                let end = words[words.len() - 1].end;
                spans.push(TaggedSpan::new(&text[start..end], label, start, end));
            }
        }

        spans
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}

/// Capitalized word that is not an acronym or number
fn is_name_word(token: &Token<'_>) -> bool {
    let acronym = token.text.chars().count() > 1 && !token.text.chars().any(char::is_lowercase);
    token.is_capitalized() && !acronym
}

fn is_connector(word: &str) -> bool {
    CONNECTORS.contains(&word)
}

fn is_cue(word: &str) -> bool {
    TITLES.contains(&word.to_lowercase().as_str()) || is_role_keyword(word)
}

/// Only spaces or tabs between two tokens; line breaks end a chunk
fn adjacent(text: &str, left: &Token<'_>, right: &Token<'_>) -> bool {
    text[left.end..right.start]
        .chars()
        .all(|c| c.is_whitespace() && c != '\n' && c != '\r')
}
