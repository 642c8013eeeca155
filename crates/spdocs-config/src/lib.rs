//! Configuration management for spdocs.
//!
//! Parses `spdocs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.title`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override markdown source directory.
    pub source_dir: Option<PathBuf>,
    /// Override output directory.
    pub output_dir: Option<PathBuf>,
    /// Override site title.
    pub title: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "spdocs.toml";

const DEFAULT_TITLE: &str = "Developer Guide";
const DEFAULT_SOURCE_DIR: &str = "docs";
const DEFAULT_OUTPUT_DIR: &str = "_site";
const DEFAULT_TAB_GROUP: &str = "default";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site section as written in TOML (paths are relative strings).
    site: SiteConfigRaw,
    /// Tab block configuration.
    pub tabs: TabsConfig,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw site configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    title: Option<String>,
    source_dir: Option<String>,
    output_dir: Option<String>,
    gfm: Option<bool>,
}

/// Resolved site configuration with absolute paths.
#[derive(Debug, Default)]
pub struct SiteConfig {
    /// Site title, used as the `<title>` suffix of every page.
    pub title: String,
    /// Directory scanned for markdown pages.
    pub source_dir: PathBuf,
    /// Directory the HTML pages are written to.
    pub output_dir: PathBuf,
    /// Enable tables, strikethrough, footnotes and task lists.
    pub gfm: bool,
}

/// Tab block configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    /// Group used by `tabs`/`tabbodies` blocks that name none.
    pub default_group: String,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            default_group: DEFAULT_TAB_GROUP.to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.title`").
        field: String,
        /// Error message (e.g., "${`SITE_TITLE`} not set").
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `spdocs.toml` in the current directory and
    /// its parents, falling back to defaults relative to the current directory.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.site_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.site_resolved.output_dir.clone_from(output_dir);
        }
        if let Some(title) = &settings.title {
            self.site_resolved.title.clone_from(title);
        }
    }

    /// Search for the config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Default config with paths relative to `base`.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfigRaw::default(),
            tabs: TabsConfig::default(),
            site_resolved: SiteConfig {
                title: DEFAULT_TITLE.to_owned(),
                source_dir: base.join(DEFAULT_SOURCE_DIR),
                output_dir: base.join(DEFAULT_OUTPUT_DIR),
                gfm: true,
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site_resolved.title, "site.title")?;

        let group = &self.tabs.default_group;
        require_non_empty(group, "tabs.default_group")?;
        if group.contains(char::is_whitespace) {
            return Err(ConfigError::Validation(format!(
                "tabs.default_group must be a single word, got {group:?}"
            )));
        }

        if self.site_resolved.source_dir == self.site_resolved.output_dir {
            return Err(ConfigError::Validation(
                "site.output_dir must differ from site.source_dir".to_owned(),
            ));
        }

        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref title) = self.site.title {
            self.site.title = Some(expand::expand_env(title, "site.title")?);
        }
        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.site_resolved = SiteConfig {
            title: self
                .site
                .title
                .clone()
                .unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
            source_dir: resolve(self.site.source_dir.as_deref(), DEFAULT_SOURCE_DIR),
            output_dir: resolve(self.site.output_dir.as_deref(), DEFAULT_OUTPUT_DIR),
            gfm: self.site.gfm.unwrap_or(true),
        };
    }
}
