//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.jokedeck/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::jokes::{Category, DEFAULT_BASE_URL, Language};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct JokeDeckConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub deck: DeckConfig,
    #[serde(default)]
    pub swipe: SwipeConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub category: Option<Category>,
    pub language: Option<Language>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DeckConfig {
    pub max_entries: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SwipeConfig {
    pub units_per_column: Option<i32>,
    pub key_step: Option<i32>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_UNITS_PER_COLUMN: i32 = 10;
pub const DEFAULT_KEY_STEP: i32 = 25;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub category: Category,
    pub language: Language,
    pub base_url: String,
    pub max_entries: Option<usize>,
    pub units_per_column: i32,
    pub key_step: i32,
}

/// Values given on the command line. `None` = flag not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub category: Option<Category>,
    pub language: Option<Language>,
    pub base_url: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.jokedeck/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".jokedeck").join("config.toml"))
}

/// Load config from `~/.jokedeck/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `JokeDeckConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<JokeDeckConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(JokeDeckConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(JokeDeckConfig::default());
    }

    load_config_from(&path)
}

/// Reads and parses a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<JokeDeckConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: JokeDeckConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Joke Deck Configuration
# All settings are optional. Defaults fill in anything left out.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# category = "all"                   # all, programming, miscellaneous, dark, pun, spooky, christmas
# language = "en"                    # en, es, de, cs

# [api]
# base_url = "https://v2.jokeapi.dev" # Or set JOKEDECK_BASE_URL env var

# [deck]
# max_entries = 50                   # Omit to keep every card for the session

# [swipe]
# units_per_column = 10              # Drag units per terminal column (dismiss past 100)
# key_step = 25                      # Drag units per arrow key press
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &JokeDeckConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env(
    config: &JokeDeckConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Category: CLI → env → config → default
    let category = cli
        .category
        .or_else(|| env_parsed(&env, "JOKEDECK_CATEGORY", Category::parse))
        .or(config.general.category)
        .unwrap_or_default();

    // Language: CLI → env → config → default
    let language = cli
        .language
        .or_else(|| env_parsed(&env, "JOKEDECK_LANGUAGE", Language::parse))
        .or(config.general.language)
        .unwrap_or_default();

    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| env("JOKEDECK_BASE_URL"))
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    ResolvedConfig {
        category,
        language,
        base_url,
        max_entries: config.deck.max_entries,
        units_per_column: positive_or(config.swipe.units_per_column, DEFAULT_UNITS_PER_COLUMN),
        key_step: positive_or(config.swipe.key_step, DEFAULT_KEY_STEP),
    }
}

fn env_parsed<T>(
    env: &impl Fn(&str) -> Option<String>,
    key: &str,
    parse: fn(&str) -> Option<T>,
) -> Option<T> {
    let raw = env(key)?;
    let parsed = parse(&raw);
    if parsed.is_none() {
        warn!("Ignoring {}={:?}: not a recognized value", key, raw);
    }
    parsed
}

fn positive_or(value: Option<i32>, default: i32) -> i32 {
    match value {
        Some(v) if v > 0 => v,
        Some(v) => {
            warn!("Ignoring non-positive swipe setting {}, using {}", v, default);
            default
        }
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved =
            resolve_with_env(&JokeDeckConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.category, Category::All);
        assert_eq!(resolved.language, Language::En);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.max_entries, None);
        assert_eq!(resolved.units_per_column, DEFAULT_UNITS_PER_COLUMN);
        assert_eq!(resolved.key_step, DEFAULT_KEY_STEP);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = JokeDeckConfig {
            general: GeneralConfig {
                category: Some(Category::Pun),
                language: Some(Language::De),
            },
            api: ApiConfig {
                base_url: Some("http://localhost:9000".to_string()),
            },
            deck: DeckConfig {
                max_entries: Some(20),
            },
            swipe: SwipeConfig {
                units_per_column: Some(5),
                key_step: Some(50),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.category, Category::Pun);
        assert_eq!(resolved.language, Language::De);
        assert_eq!(resolved.base_url, "http://localhost:9000");
        assert_eq!(resolved.max_entries, Some(20));
        assert_eq!(resolved.units_per_column, 5);
        assert_eq!(resolved.key_step, 50);
    }

    #[test]
    fn test_env_beats_config_and_cli_beats_env() {
        let config = JokeDeckConfig {
            general: GeneralConfig {
                category: Some(Category::Pun),
                language: Some(Language::De),
            },
            ..Default::default()
        };
        let env: HashMap<&str, &str> = HashMap::from([
            ("JOKEDECK_CATEGORY", "spooky"),
            ("JOKEDECK_LANGUAGE", "cs"),
            ("JOKEDECK_BASE_URL", "http://env.example"),
        ]);
        let lookup = |key: &str| env.get(key).map(|v| v.to_string());

        let resolved = resolve_with_env(&config, &CliOverrides::default(), lookup);
        assert_eq!(resolved.category, Category::Spooky);
        assert_eq!(resolved.language, Language::Cs);
        assert_eq!(resolved.base_url, "http://env.example");

        let cli = CliOverrides {
            category: Some(Category::Programming),
            language: Some(Language::Es),
            base_url: Some("http://cli.example".to_string()),
        };
        let resolved = resolve_with_env(&config, &cli, lookup);
        assert_eq!(resolved.category, Category::Programming);
        assert_eq!(resolved.language, Language::Es);
        assert_eq!(resolved.base_url, "http://cli.example");
    }

    #[test]
    fn test_unrecognized_env_value_falls_through() {
        let config = JokeDeckConfig {
            general: GeneralConfig {
                language: Some(Language::De),
                ..Default::default()
            },
            ..Default::default()
        };
        let lookup = |key: &str| (key == "JOKEDECK_LANGUAGE").then(|| "fr".to_string());
        let resolved = resolve_with_env(&config, &CliOverrides::default(), lookup);
        assert_eq!(resolved.language, Language::De);
    }

    #[test]
    fn test_non_positive_swipe_settings_use_defaults() {
        let config = JokeDeckConfig {
            swipe: SwipeConfig {
                units_per_column: Some(0),
                key_step: Some(-3),
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.units_per_column, DEFAULT_UNITS_PER_COLUMN);
        assert_eq!(resolved.key_step, DEFAULT_KEY_STEP);
    }

    #[test]
    fn test_toml_parses_all_sections() {
        let toml_str = r#"
[general]
category = "christmas"
language = "es"

[api]
base_url = "http://127.0.0.1:8080"

[deck]
max_entries = 10

[swipe]
units_per_column = 8
key_step = 20
"#;
        let config: JokeDeckConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.category, Some(Category::Christmas));
        assert_eq!(config.general.language, Some(Language::Es));
        assert_eq!(config.api.base_url.as_deref(), Some("http://127.0.0.1:8080"));
        assert_eq!(config.deck.max_entries, Some(10));
        assert_eq!(config.swipe.units_per_column, Some(8));
        assert_eq!(config.swipe.key_step, Some(20));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only one field set, the rest stays default
        let config: JokeDeckConfig = toml::from_str("[general]\nlanguage = \"cs\"\n").unwrap();
        assert_eq!(config.general.language, Some(Language::Cs));
        assert!(config.general.category.is_none());
        assert!(config.api.base_url.is_none());
        assert!(config.deck.max_entries.is_none());
    }

    #[test]
    fn test_unknown_category_is_parse_error() {
        let result: Result<JokeDeckConfig, _> = toml::from_str("[general]\ncategory = \"any\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_from_reports_parse_errors() {
        let dir = std::env::temp_dir().join(format!("jokedeck-config-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[general\ncategory = ").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_generated_default_config_parses_to_defaults() {
        let dir = std::env::temp_dir().join(format!("jokedeck-config-{}", uuid::Uuid::new_v4()));
        let path = dir.join("config.toml");
        generate_default_config(&path);

        let config = load_config_from(&path).unwrap();
        assert!(config.general.category.is_none());
        assert!(config.swipe.key_step.is_none());

        fs::remove_dir_all(&dir).unwrap();
    }
}
