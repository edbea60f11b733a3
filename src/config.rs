//! Persisted user settings.
//!
//! Three small JSON documents live in one per-user directory. Reading is
//! infallible: a missing, unreadable or corrupt file yields the default.

use crate::reference::ai_provider;
use crate::ConfigError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const APP_DIR: &str = "toolchain-scout";
const FALLBACK_DIR: &str = ".toolchain-scout";

const LANGUAGE_FILE: &str = "language_config.json";
const THEME_FILE: &str = "theme_config.json";
const AI_FILE: &str = "ai_config.json";

/// Interface language.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum UiLanguage {
    #[default]
    Zh,
    En,
    Ru,
}

impl<'de> Deserialize<'de> for UiLanguage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageConfig {
    #[serde(default)]
    pub language: UiLanguage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_theme() -> String {
    "default".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

/// Which AI provider to use and how to reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiConfig {
    #[serde(default = "default_provider")]
    pub selected_provider_id: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub custom_endpoint: String,
}

fn default_provider() -> String {
    "openai".to_string()
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            selected_provider_id: default_provider(),
            api_key: String::new(),
            custom_endpoint: String::new(),
        }
    }
}

impl AiConfig {
    /// The API key with everything but its last four characters hidden.
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let visible: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{visible}", "*".repeat(chars.len() - 4))
    }

    /// A copy safe to print.
    pub fn redacted(&self) -> Self {
        Self {
            api_key: self.masked_api_key(),
            ..self.clone()
        }
    }

    /// Replace an unknown provider id with the default one.
    fn validated(mut self) -> Self {
        if ai_provider(&self.selected_provider_id).is_none() {
            tracing::debug!(provider = %self.selected_provider_id, "unknown AI provider, using default");
            self.selected_provider_id = default_provider();
        }
        self
    }
}

/// Reads and writes the settings files in one directory.
///
/// # Example
///
/// ```rust,no_run
/// use toolchain_scout::{ConfigStore, UiLanguage, LanguageConfig};
///
/// let store = ConfigStore::default_location().unwrap();
/// store.save_language(&LanguageConfig { language: UiLanguage::En }).unwrap();
/// assert_eq!(store.load_language().language, UiLanguage::En);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<config dir>/toolchain-scout`, or `~/.toolchain-scout` when the
    /// platform has no config directory.
    pub fn default_location() -> Result<Self, ConfigError> {
        if let Some(config_dir) = dirs::config_dir() {
            return Ok(Self::new(config_dir.join(APP_DIR)));
        }
        dirs::home_dir()
            .map(|home| Self::new(home.join(FALLBACK_DIR)))
            .ok_or(ConfigError::NoConfigDir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn load_language(&self) -> LanguageConfig {
        self.load(LANGUAGE_FILE)
    }

    pub fn save_language(&self, config: &LanguageConfig) -> Result<(), ConfigError> {
        self.save(LANGUAGE_FILE, config)
    }

    pub fn load_theme(&self) -> ThemeConfig {
        self.load(THEME_FILE)
    }

    pub fn save_theme(&self, config: &ThemeConfig) -> Result<(), ConfigError> {
        self.save(THEME_FILE, config)
    }

    pub fn load_ai(&self) -> AiConfig {
        self.load::<AiConfig>(AI_FILE).validated()
    }

    pub fn save_ai(&self, config: &AiConfig) -> Result<(), ConfigError> {
        self.save(AI_FILE, config)
    }

    fn load<T: DeserializeOwned + Default>(&self, file: &str) -> T {
        let path = self.dir.join(file);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "config not readable, using default");
                return T::default();
            }
        };
        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::debug!(path = %path.display(), error = %e, "config corrupt, using default");
            T::default()
        })
    }

    /// Write to a uniquely named sibling temp file, then rename it over the
    /// target. The temp file is removed if anything fails.
    fn save<T: Serialize>(&self, file: &str, value: &T) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(value)?;
        let target = self.dir.join(file);
        fs::create_dir_all(&self.dir).map_err(io_error(&self.dir))?;
        let mut temp = NamedTempFile::new_in(&self.dir).map_err(io_error(&self.dir))?;
        temp.write_all(json.as_bytes())
            .and_then(|()| temp.as_file().sync_all())
            .map_err(io_error(temp.path()))?;
        // On failure the returned temp file is dropped, which deletes it
        temp.persist(&target).map_err(|e| ConfigError::Io {
            path: target.clone(),
            source: e.error,
        })?;

        tracing::debug!(path = %target.display(), "config saved");
        Ok(())
    }
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> ConfigError {
    let path = path.to_path_buf();
    move |source| ConfigError::Io { path, source }
}
