use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::i18n::Language;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Top-level application configuration.
///
/// Only durable preferences live here; theme and contrast are session-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the speech-to-Braille backend.
    pub backend_url: String,
    /// UI language (en / hi / mr).
    #[serde(default)]
    pub language: Language,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.into(),
            language: Language::default(),
        }
    }
}

impl Config {
    /// Directory: ~/.config/sparsh-vaani/
    fn dir() -> PathBuf {
        let mut p = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        p.push("sparsh-vaani");
        p
    }

    fn path() -> PathBuf {
        Self::dir().join("config.json")
    }

    /// Load from disk, returning defaults if file doesn't exist or is invalid.
    pub fn load() -> Self {
        let path = Self::path();
        match fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let dir = Self::dir();
        fs::create_dir_all(&dir)?;
        let data = serde_json::to_string_pretty(self)?;
        fs::write(Self::path(), data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = Config::default();
        assert_eq!(config.backend_url, "http://localhost:8000");
        assert_eq!(config.language, Language::En);
    }

    #[test]
    fn round_trips_through_json() {
        let config = Config {
            backend_url: "https://braille.example.org".into(),
            language: Language::Mr,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.backend_url, config.backend_url);
        assert_eq!(back.language, Language::Mr);
    }

    #[test]
    fn missing_language_field_falls_back_to_english() {
        let back: Config =
            serde_json::from_str(r#"{"backend_url":"http://localhost:8000"}"#).unwrap();
        assert_eq!(back.language, Language::En);
    }
}
