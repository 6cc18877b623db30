//! Site configuration module.
//!
//! Handles loading and validating the optional `config.toml` at the source
//! root, plus base URL resolution across its three sources.
//!
//! ## Config File
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! # Absolute site base URL used in canonical and alternate links.
//! # Leave unset for root-relative URLs ("/en/about/").
//! # base_url = "https://example.com"
//!
//! # Language the root redirect page falls back to when the visitor's
//! # browser language is not among the site's languages.
//! default_language = "en"
//! ```
//!
//! Unknown keys are rejected to catch typos early.
//!
//! ## Base URL Precedence
//!
//! The base URL can come from three places; the most specific wins:
//!
//! 1. the `--base-url` CLI flag
//! 2. the `SITE_URL` environment variable
//! 3. `base_url` in `config.toml`
//!
//! Absent all three, URLs are root-relative. Trailing slashes are stripped
//! from whichever source supplied the value.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults; the file itself is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute site base URL. `None` means root-relative URLs.
    pub base_url: Option<String>,
    /// Redirect fallback language code.
    pub default_language: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            default_language: default_language(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_language.is_empty() {
            return Err(ConfigError::Validation(
                "default_language must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Load `config.toml` from the source root, falling back to defaults when
/// the file does not exist.
pub fn load_config(source_root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = source_root.join("config.toml");
    if !path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(&path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Resolve the effective base URL: flag over environment over config file,
/// empty (root-relative) when none is set. Trailing slashes are stripped.
pub fn resolve_base_url(
    flag: Option<&str>,
    env_site_url: Option<&str>,
    config: &SiteConfig,
) -> String {
    let raw = flag
        .or(env_site_url)
        .or(config.base_url.as_deref())
        .unwrap_or("");
    raw.trim_end_matches('/').to_string()
}

/// A stock `config.toml` with every option documented, for `gen-config`.
pub fn stock_config_toml() -> String {
    r#"# polysite configuration
# All options are optional - defaults shown below.

# Absolute site base URL used in canonical and alternate links.
# Leave unset (or set SITE_URL, or pass --base-url) for root-relative URLs.
# base_url = "https://example.com"

# Language the root redirect page falls back to when the visitor's browser
# language is not among the site's languages.
default_language = "en"
"#
    .to_string()
}
