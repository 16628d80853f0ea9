//! Known entity names
//!
//! Entries are matched as whole phrases, case-insensitively and with
//! whitespace collapsed.

use kryptos_core::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Brazilian states, state capitals and a few cities of Pará.
const BUILTIN_LOCATIONS: &[&str] = &[
    "brasil",
    // states
    "acre", "alagoas", "amapá", "amazonas", "bahia", "ceará", "distrito federal",
    "espírito santo", "goiás", "maranhão", "mato grosso", "mato grosso do sul",
    "minas gerais", "pará", "paraíba", "paraná", "pernambuco", "piauí",
    "rio de janeiro", "rio grande do norte", "rio grande do sul", "rondônia",
    "roraima", "santa catarina", "são paulo", "sergipe", "tocantins",
    // capitals
    "rio branco", "maceió", "macapá", "manaus", "salvador", "fortaleza", "brasília",
    "vitória", "goiânia", "são luís", "cuiabá", "campo grande", "belo horizonte",
    "belém", "joão pessoa", "curitiba", "recife", "teresina", "natal", "porto alegre",
    "porto velho", "boa vista", "florianópolis", "aracaju", "palmas",
    // pará
    "ananindeua", "santarém", "marabá", "castanhal", "parauapebas", "altamira",
];

/// On-disk gazetteer format
#[derive(Debug, Default, Deserialize)]
struct GazetteerFile {
    #[serde(default)]
    persons: Vec<String>,
    #[serde(default)]
    locations: Vec<String>,
    #[serde(default)]
    organizations: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    persons: HashSet<String>,
    locations: HashSet<String>,
    organizations: HashSet<String>,
}

impl Gazetteer {
    /// Built-in locations only
    pub fn builtin() -> Self {
        Self {
            locations: BUILTIN_LOCATIONS.iter().map(|l| normalize(l)).collect(),
            ..Self::default()
        }
    }

    /// Parse a TOML gazetteer:
    ///
    /// ```toml
    /// persons = ["Fulano de Tal"]
    /// locations = ["Mosqueiro"]
    /// organizations = ["Construtora Alfa"]
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: GazetteerFile = toml::from_str(content)
            .map_err(|e| Error::OracleUnavailable(format!("invalid gazetteer: {}", e)))?;

        Ok(Self {
            persons: file.persons.iter().map(|p| normalize(p)).collect(),
            locations: file.locations.iter().map(|l| normalize(l)).collect(),
            organizations: file.organizations.iter().map(|o| normalize(o)).collect(),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::OracleUnavailable(format!(
                "failed to read gazetteer {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn extend(&mut self, other: Gazetteer) {
        self.persons.extend(other.persons);
        self.locations.extend(other.locations);
        self.organizations.extend(other.organizations);
    }

    pub fn is_person(&self, phrase: &str) -> bool {
        self.persons.contains(&normalize(phrase))
    }

    pub fn is_location(&self, phrase: &str) -> bool {
        self.locations.contains(&normalize(phrase))
    }

    pub fn is_organization(&self, phrase: &str) -> bool {
        self.organizations.contains(&normalize(phrase))
    }

    /// Total number of entries
    pub fn len(&self) -> usize {
        self.persons.len() + self.locations.len() + self.organizations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn normalize(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
