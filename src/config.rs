//! Configuration management for cinescope
//!
//! Handles config file loading and API key resolution.
//! Config is stored at ~/.config/cinescope/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::tmdb::{DEFAULT_BASE_URL, DEFAULT_LANGUAGE};
use crate::api::TmdbClient;
use crate::error::ConfigError;
use crate::state::DEFAULT_HERO_INTERVAL;

/// Environment variable that overrides the configured API key
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// TMDB API key (v3 auth)
    pub tmdb_api_key: Option<String>,
    /// Response language, e.g. "en-US"
    pub language: Option<String>,
    /// API base URL override
    pub base_url: Option<String>,
    /// Seconds between hero banner advances
    pub hero_interval_secs: Option<u64>,
}

impl Config {
    /// Get config file path (~/.config/cinescope/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cinescope").join("config.toml"))
    }

    /// Load config from the default path, or return default if not found
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })
    }

    /// TMDB API key with fallback chain:
    /// 1. Environment variable TMDB_API_KEY
    /// 2. Key from config file
    pub fn tmdb_api_key(&self) -> Result<String, ConfigError> {
        resolve_api_key(std::env::var(API_KEY_ENV).ok(), self.tmdb_api_key.as_deref())
    }

    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Hero auto-advance interval (zero is treated as the default)
    pub fn hero_interval(&self) -> Duration {
        match self.hero_interval_secs {
            Some(secs) if secs > 0 => Duration::from_secs(secs),
            _ => DEFAULT_HERO_INTERVAL,
        }
    }

    /// Build a provider client from this config
    pub fn tmdb_client(&self) -> Result<TmdbClient, ConfigError> {
        let key = self.tmdb_api_key()?;
        Ok(TmdbClient::with_base_url(key, self.base_url()).with_language(self.language()))
    }
}

/// Pick the API key from the environment value, then the config value.
/// Blank values count as unset.
pub fn resolve_api_key(env: Option<String>, config: Option<&str>) -> Result<String, ConfigError> {
    env.filter(|k| !k.trim().is_empty())
        .or_else(|| {
            config
                .filter(|k| !k.trim().is_empty())
                .map(str::to_string)
        })
        .map(|k| k.trim().to_string())
        .ok_or_else(|| {
            let path = Config::path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "config.toml".to_string());
            ConfigError::MissingApiKey(path)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.tmdb_api_key.is_none());
        assert_eq!(config.language(), "en-US");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.hero_interval(), Duration::from_secs(5));
    }

    #[test]
    fn test_env_key_wins() {
        let key = resolve_api_key(Some("from-env".into()), Some("from-file")).unwrap();
        assert_eq!(key, "from-env");
    }

    #[test]
    fn test_blank_env_falls_back_to_config() {
        let key = resolve_api_key(Some("  ".into()), Some("from-file")).unwrap();
        assert_eq!(key, "from-file");
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let err = resolve_api_key(None, None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey(_)));
        assert!(err.to_string().contains("TMDB_API_KEY"));
    }

    #[test]
    fn test_zero_interval_uses_default() {
        let config = Config {
            hero_interval_secs: Some(0),
            ..Config::default()
        };
        assert_eq!(config.hero_interval(), DEFAULT_HERO_INTERVAL);
    }

    #[test]
    fn test_written_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config {
            tmdb_api_key: Some("abc".into()),
            language: Some("de-DE".into()),
            base_url: None,
            hero_interval_secs: Some(8),
        };

        std::fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.hero_interval(), Duration::from_secs(8));
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "hero_interval_secs = \"soon\"").unwrap();

        match Config::load_from(&path) {
            Err(ConfigError::Parse { path: p, .. }) => assert!(p.ends_with("config.toml")),
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
