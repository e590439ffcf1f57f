//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CONTENT_PATH` - JSON content snapshot to serve (default: none, empty store)
//! - `ASSET_BASE_URL` - Where the renderer library and themes are served
//!   (default: `/static/galleria`)
//! - `GALLERIA_THEME`, `GALLERIA_THUMB_SIZE`, `GALLERIA_LARGE_SIZE` - Initial
//!   values for the gallery settings
//!
//! ```bash
//! export CONTENT_PATH="./content.json"
//! export ASSET_BASE_URL="https://cdn.example.com/galleria"
//! export GALLERIA_THEME="classic"
//! ```

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::domain::entities::settings::{
    AVAILABLE_THEMES, LARGE_SIZE_OPTION, THEME_OPTION, THUMB_SIZE_OPTION,
};

pub const DEFAULT_LISTEN: &str = "0.0.0.0:3000";
pub const DEFAULT_ASSET_BASE_URL: &str = "/static/galleria";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub content_path: Option<PathBuf>,
    pub asset_base_url: String,
    pub theme: Option<String>,
    pub thumb_size: Option<String>,
    pub large_size: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN.to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            content_path: None,
            asset_base_url: DEFAULT_ASSET_BASE_URL.to_string(),
            theme: None,
            thumb_size: None,
            large_size: None,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset variables take their defaults; nothing is required.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN.to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let content_path = non_empty_var("CONTENT_PATH").map(PathBuf::from);

        let asset_base_url = non_empty_var("ASSET_BASE_URL")
            .unwrap_or_else(|| DEFAULT_ASSET_BASE_URL.to_string());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            content_path,
            asset_base_url,
            theme: non_empty_var("GALLERIA_THEME"),
            thumb_size: non_empty_var("GALLERIA_THUMB_SIZE"),
            large_size: non_empty_var("GALLERIA_LARGE_SIZE"),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `asset_base_url` is neither an absolute path nor an http(s) URL
    /// - `theme` names a theme the renderer does not ship
    /// - `content_path` points to a missing file
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.asset_base_url.starts_with('/') {
            let parsed = url::Url::parse(&self.asset_base_url)
                .with_context(|| format!("ASSET_BASE_URL is invalid: '{}'", self.asset_base_url))?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                anyhow::bail!(
                    "ASSET_BASE_URL must be a path or an http(s) URL, got '{}'",
                    self.asset_base_url
                );
            }
        }

        if let Some(ref theme) = self.theme
            && !AVAILABLE_THEMES.iter().any(|(key, _)| *key == theme.as_str())
        {
            let known: Vec<&str> = AVAILABLE_THEMES.iter().map(|(key, _)| *key).collect();
            anyhow::bail!(
                "GALLERIA_THEME must be one of {}, got '{}'",
                known.join(", "),
                theme
            );
        }

        if let Some(ref path) = self.content_path
            && !path.is_file()
        {
            anyhow::bail!("CONTENT_PATH does not exist: {}", path.display());
        }

        Ok(())
    }

    /// Option store entries for the settings given in the environment.
    pub fn option_seeds(&self) -> Vec<(&'static str, String)> {
        [
            (THEME_OPTION, &self.theme),
            (THUMB_SIZE_OPTION, &self.thumb_size),
            (LARGE_SIZE_OPTION, &self.large_size),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.clone().map(|v| (key, v)))
        .collect()
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        match self.content_path {
            Some(ref path) => tracing::info!("  Content: {}", path.display()),
            None => tracing::info!("  Content: none (empty store)"),
        }
        tracing::info!("  Asset base URL: {}", self.asset_base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "LISTEN",
        "LOG_FORMAT",
        "CONTENT_PATH",
        "ASSET_BASE_URL",
        "GALLERIA_THEME",
        "GALLERIA_THUMB_SIZE",
        "GALLERIA_LARGE_SIZE",
    ];

    fn clear_vars() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = DEFAULT_LISTEN.to_string();

        config.asset_base_url = "https://cdn.example.com/galleria".to_string();
        assert!(config.validate().is_ok());
        config.asset_base_url = "ftp://cdn.example.com/galleria".to_string();
        assert!(config.validate().is_err());
        config.asset_base_url = "galleria".to_string();
        assert!(config.validate().is_err());
        config.asset_base_url = DEFAULT_ASSET_BASE_URL.to_string();

        config.theme = Some("neon".to_string());
        assert!(config.validate().is_err());
        config.theme = Some("classic".to_string());
        assert!(config.validate().is_ok());

        config.content_path = Some(PathBuf::from("/definitely/not/here.json"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_content_path_must_exist() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = Config {
            content_path: Some(file.path().to_path_buf()),
            ..Config::default()
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_option_seeds() {
        let config = Config {
            theme: Some("classic".to_string()),
            large_size: Some("full".to_string()),
            ..Config::default()
        };

        assert_eq!(
            config.option_seeds(),
            vec![
                (THEME_OPTION, "classic".to_string()),
                (LARGE_SIZE_OPTION, "full".to_string()),
            ]
        );
        assert!(Config::default().option_seeds().is_empty());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_vars();

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, DEFAULT_LISTEN);
        assert_eq!(config.asset_base_url, DEFAULT_ASSET_BASE_URL);
        assert!(config.content_path.is_none());
        assert!(config.theme.is_none());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_settings() {
        clear_vars();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("ASSET_BASE_URL", "https://cdn.example.com/galleria");
            env::set_var("GALLERIA_THEME", "advanced-classic");
            env::set_var("GALLERIA_THUMB_SIZE", "  ");
            env::set_var("CONTENT_PATH", "content.json");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.asset_base_url, "https://cdn.example.com/galleria");
        assert_eq!(config.theme.as_deref(), Some("advanced-classic"));
        assert!(config.thumb_size.is_none());
        assert_eq!(config.content_path, Some(PathBuf::from("content.json")));

        clear_vars();
    }
}
