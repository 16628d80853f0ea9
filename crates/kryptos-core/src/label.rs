//! Redaction labels
//!
//! The display string of a label is the text that ends up inside the
//! redaction marker, so these names are Portuguese and must stay stable.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Structured field detected by the pattern library.
///
/// Variant order is the scan order of the built-in pattern table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "CPF")]
    Cpf,
    #[serde(rename = "RG")]
    Rg,
    #[serde(rename = "Data de Nascimento")]
    BirthDate,
    #[serde(rename = "Telefone")]
    Phone,
    #[serde(rename = "Email")]
    Email,
    #[serde(rename = "CEP")]
    PostalCode,
    #[serde(rename = "Endereço")]
    Address,
    #[serde(rename = "Processo")]
    CaseNumber,
    #[serde(rename = "Nome Completo")]
    FullName,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Cpf => "CPF",
            Category::Rg => "RG",
            Category::BirthDate => "Data de Nascimento",
            Category::Phone => "Telefone",
            Category::Email => "Email",
            Category::PostalCode => "CEP",
            Category::Address => "Endereço",
            Category::CaseNumber => "Processo",
            Category::FullName => "Nome Completo",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Procedural role of a person named in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Nome")]
    Name,
    #[serde(rename = "Vítima")]
    Victim,
    #[serde(rename = "Testemunha")]
    Witness,
    #[serde(rename = "Réu")]
    Defendant,
    #[serde(rename = "Denunciado")]
    Investigated,
}

impl Role {
    pub fn name(&self) -> &'static str {
        match self {
            Role::Name => "Nome",
            Role::Victim => "Vítima",
            Role::Witness => "Testemunha",
            Role::Defendant => "Réu",
            Role::Investigated => "Denunciado",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Label attached to a finding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    /// Structured field from the pattern library
    Pattern(Category),
    /// Person name, with its procedural role
    Role(Role),
    /// Non-person entity, oracle label kept verbatim (e.g. `ORG`, `LOC`)
    Entity(String),
}

impl Label {
    pub fn as_str(&self) -> &str {
        match self {
            Label::Pattern(category) => category.name(),
            Label::Role(role) => role.name(),
            Label::Entity(label) => label,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Category> for Label {
    fn from(category: Category) -> Self {
        Label::Pattern(category)
    }
}

impl From<Role> for Label {
    fn from(role: Role) -> Self {
        Label::Role(role)
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
