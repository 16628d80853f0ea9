use kryptos_core::{Category, OverlapPolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for kryptos
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub roles: RolesConfig,

    #[serde(default)]
    pub redaction: RedactionConfig,

    #[serde(default)]
    pub patterns: PatternsConfig,

    #[serde(default)]
    pub model: ModelConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolesConfig {
    /// Word tokens examined on each side of a person name
    #[serde(default = "default_window_radius")]
    pub window_radius: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedactionConfig {
    #[serde(default)]
    pub overlap: OverlapPolicy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatternsConfig {
    /// Pattern categories to skip, by display name (e.g. "Nome Completo")
    #[serde(default)]
    pub disabled: Vec<Category>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Extra persons/locations/organizations for the entity model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gazetteer: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// File name used by `redact --save`
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for RolesConfig {
    fn default() -> Self {
        Self {
            window_radius: default_window_radius(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
        }
    }
}

fn default_window_radius() -> usize {
    10
}

fn default_file_name() -> String {
    "documento_anonimizado.txt".to_string()
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            let config = Config::default();
            config.save_to(&path)?;
            Ok(config)
        }
    }

    /// Load config from an explicit path; the file must exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Write config as TOML, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("br", "kryptos", "kryptos") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.kryptos/config.toml")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.roles.window_radius, 10);
        assert_eq!(config.redaction.overlap, OverlapPolicy::Longest);
        assert!(config.patterns.disabled.is_empty());
        assert!(config.model.gazetteer.is_none());
        assert_eq!(config.output.file_name, "documento_anonimizado.txt");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.roles.window_radius, config.roles.window_radius);
        assert_eq!(parsed.redaction.overlap, config.redaction.overlap);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[redaction]\noverlap = \"splice\"\n").unwrap();
        assert_eq!(config.redaction.overlap, OverlapPolicy::Splice);
        assert_eq!(config.roles.window_radius, 10);
        assert_eq!(config.output.file_name, "documento_anonimizado.txt");
    }

    #[test]
    fn test_config_parse() {
        let toml_str = r#"
[roles]
window_radius = 4

[redaction]
overlap = "priority"

[patterns]
disabled = ["Nome Completo", "RG"]

[model]
gazetteer = "/etc/kryptos/gazetteer.toml"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.roles.window_radius, 4);
        assert_eq!(config.redaction.overlap, OverlapPolicy::Priority);
        assert_eq!(
            config.patterns.disabled,
            vec![Category::FullName, Category::Rg]
        );
        assert_eq!(
            config.model.gazetteer,
            Some(PathBuf::from("/etc/kryptos/gazetteer.toml"))
        );
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let result: Result<Config, _> = toml::from_str("[patterns]\ndisabled = [\"Passaporte\"]\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_save_and_load_from() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.roles.window_radius = 7;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.roles.window_radius, 7);
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from(&dir.path().join("missing.toml")).is_err());
    }
}
