use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::GinmakuError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Environment variable that overrides `catalog.api_token` when set.
pub const TOKEN_ENV_VAR: &str = "GINMAKU_TMDB_TOKEN";

/// Everything the application reads from its config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub trending: TrendingConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub api_token: String,
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingConfig {
    pub endpoint: String,
    pub project_id: String,
    pub api_key: String,
    pub database_id: String,
    pub collection_id: String,
    pub limit: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub theme: ThemeMode,
    pub debounce_ms: u64,
}

/// Requested appearance; `System` follows the OS setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
    System,
}

impl CatalogConfig {
    /// The bearer credential actually sent: environment first, file second.
    ///
    /// An empty result is not an error; requests go out unauthenticated
    /// and the service's rejection surfaces as an ordinary fetch failure.
    pub fn bearer_token(&self) -> String {
        resolve_token(&self.api_token, std::env::var(TOKEN_ENV_VAR).ok())
    }
}

/// Pick the credential: a non-blank environment value wins over the file.
pub fn resolve_token(file_value: &str, env_value: Option<String>) -> String {
    match env_value {
        Some(v) if !v.trim().is_empty() => v,
        _ => file_value.to_string(),
    }
}

impl TrendingConfig {
    /// Whether enough is configured to talk to the document store at all.
    pub fn is_configured(&self) -> bool {
        !self.endpoint.trim().is_empty()
            && !self.project_id.trim().is_empty()
            && !self.database_id.trim().is_empty()
            && !self.collection_id.trim().is_empty()
    }
}

impl AppConfig {
    /// Load config: user file if present, built-in defaults otherwise.
    pub fn load() -> Result<Self, GinmakuError> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, GinmakuError> {
        if path.exists() {
            let user_str = std::fs::read_to_string(path)
                .map_err(|e| GinmakuError::Config(e.to_string()))?;
            toml::from_str(&user_str).map_err(|e| GinmakuError::Config(e.to_string()))
        } else {
            toml::from_str(DEFAULT_CONFIG).map_err(|e| GinmakuError::Config(e.to_string()))
        }
    }

    /// Write the current values back to the user config file.
    pub fn save(&self) -> Result<(), GinmakuError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), GinmakuError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| GinmakuError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Path to the user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "ginmaku")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = AppConfig::default();
        assert_eq!(config.catalog.base_url, "https://api.themoviedb.org/3");
        assert!(config.catalog.api_token.is_empty());
        assert_eq!(config.trending.limit, 5);
        assert_eq!(config.ui.theme, ThemeMode::System);
        assert_eq!(config.ui.debounce_ms, 1000);
    }

    #[test]
    fn test_roundtrip() {
        let mut config = AppConfig::default();
        config.catalog.api_token = "abc123".into();
        config.ui.theme = ThemeMode::Dark;

        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.catalog.api_token, "abc123");
        assert_eq!(deserialized.ui.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.trending.endpoint = "https://cloud.example.com/v1".into();
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.trending.endpoint, "https://cloud.example.com/v1");
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded.ui.debounce_ms, 1000);
    }

    #[test]
    fn test_env_token_wins() {
        assert_eq!(resolve_token("from-file", Some("from-env".into())), "from-env");
    }

    #[test]
    fn test_blank_env_token_falls_back() {
        assert_eq!(resolve_token("from-file", Some("   ".into())), "from-file");
        assert_eq!(resolve_token("from-file", None), "from-file");
    }

    #[test]
    fn test_trending_configured() {
        let mut config = AppConfig::default();
        assert!(!config.trending.is_configured());

        config.trending.endpoint = "https://cloud.example.com/v1".into();
        config.trending.project_id = "p".into();
        config.trending.database_id = "d".into();
        config.trending.collection_id = "c".into();
        assert!(config.trending.is_configured());
    }
}
