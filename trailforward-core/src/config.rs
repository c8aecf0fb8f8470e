//! Site configuration.
//!
//! Layered with the `config` crate: defaults, then
//! `~/.config/trailforward/config.toml`, then `TRAILFORWARD_*` environment
//! variables (`__` separates nested keys, e.g. `TRAILFORWARD_MAP_LINKS__IOS`).
//! A bare `PORT` variable overrides the port.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DATE_FORMAT, DEFAULT_GALLERY_WINDOW, DEFAULT_PORT};
use crate::error::{CoreError, CoreResult};
use crate::events::BoardContext;
use crate::maps::{MapLinkPolicy, Platform};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    /// Directory served for every path without a route.
    pub static_dir: PathBuf,
    pub gallery_dir: PathBuf,
    /// URL prefix under which `gallery_dir` is reachable.
    pub gallery_url_prefix: String,
    pub gallery_window: usize,
    /// Base URL the CLI talks to.
    pub server_url: String,
    pub request_timeout_secs: u64,
    pub date_format: String,
    pub map_links: MapLinkPolicy,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            database_path: PathBuf::from("~/.local/share/trailforward/events.db"),
            static_dir: PathBuf::from("public"),
            gallery_dir: PathBuf::from("public/images/gallery"),
            gallery_url_prefix: "/images/gallery".to_string(),
            gallery_window: DEFAULT_GALLERY_WINDOW,
            server_url: format!("http://127.0.0.1:{DEFAULT_PORT}"),
            request_timeout_secs: 10,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            map_links: MapLinkPolicy::default(),
        }
    }
}

impl SiteConfig {
    pub fn config_path() -> CoreResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CoreError::Config("Could not determine config directory".into()))?
            .join("trailforward");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented template first
    /// if no config file exists yet.
    pub fn load() -> CoreResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path` (optional) plus environment overrides.
    pub fn load_from(path: &Path) -> CoreResult<Self> {
        let config: SiteConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(
                Environment::with_prefix("TRAILFORWARD")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("port", std::env::var("PORT").ok())
            .map_err(|e| CoreError::Config(e.to_string()))?
            .build()
            .map_err(|e| CoreError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CoreError::Config(e.to_string()))?;

        Ok(config)
    }

    /// Write a config file with every option commented out.
    pub fn create_default_config(path: &Path) -> CoreResult<()> {
        let defaults = SiteConfig::default();
        let contents = format!(
            "\
# Trail Forward configuration

# Address the server binds to:
# host = \"{host}\"
# port = {port}

# SQLite database holding the events:
# database_path = \"{database}\"

# Static files and gallery images:
# static_dir = \"{static_dir}\"
# gallery_dir = \"{gallery_dir}\"
# gallery_url_prefix = \"{prefix}\"

# Number of gallery images visible at once:
# gallery_window = {window}

# Server the CLI talks to:
# server_url = \"{server_url}\"
# request_timeout_secs = {timeout}

# strftime format of event dates:
# date_format = \"{date_format}\"

# Map links, {{query}} is replaced with the event location:
# [map_links]
# desktop = \"{desktop}\"
",
            host = defaults.host,
            port = defaults.port,
            database = defaults.database_path.display(),
            static_dir = defaults.static_dir.display(),
            gallery_dir = defaults.gallery_dir.display(),
            prefix = defaults.gallery_url_prefix,
            window = defaults.gallery_window,
            server_url = defaults.server_url,
            timeout = defaults.request_timeout_secs,
            date_format = defaults.date_format,
            desktop = defaults.map_links.desktop,
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CoreError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CoreError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    pub fn database_path(&self) -> PathBuf {
        expand(&self.database_path)
    }

    pub fn static_dir(&self) -> PathBuf {
        expand(&self.static_dir)
    }

    pub fn gallery_dir(&self) -> PathBuf {
        expand(&self.gallery_dir)
    }

    pub fn board_context(&self, editable: bool, platform: Platform) -> BoardContext {
        BoardContext {
            editable,
            platform,
            map_links: self.map_links.clone(),
            date_format: self.date_format.clone(),
        }
    }
}

fn expand(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::load_from(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.gallery_window, DEFAULT_GALLERY_WINDOW);
        assert_eq!(config.map_links, MapLinkPolicy::default());
        assert_eq!(config.gallery_url_prefix, "/images/gallery");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
gallery_window = 5
date_format = "%Y-%m-%d"

[map_links]
desktop = "https://maps.example.org/?q={query}"
"#,
        )
        .unwrap();

        let config = SiteConfig::load_from(&path).unwrap();

        assert_eq!(config.gallery_window, 5);
        assert_eq!(config.map_links.desktop, "https://maps.example.org/?q={query}");
        assert_eq!(config.map_links.android, MapLinkPolicy::default().android);

        let context = config.board_context(true, Platform::Desktop);
        assert!(context.editable);
        assert_eq!(context.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_default_template_parses_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        SiteConfig::create_default_config(&path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("# gallery_window = 3"));

        let parsed: SiteConfig = toml::from_str(&contents).unwrap();
        assert_eq!(parsed, SiteConfig::default());
    }

    #[test]
    fn test_tilde_paths_are_expanded() {
        let config = SiteConfig::default();
        assert!(!config.database_path().to_string_lossy().starts_with('~'));
        assert_eq!(config.static_dir(), PathBuf::from("public"));
    }
}
