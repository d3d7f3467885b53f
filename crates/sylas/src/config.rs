// File: src/config.rs
// Purpose: Project configuration parsing from sylas.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use sylas_route::{to_absolute_paths, RouteBuildOptions, DEFAULT_PAGE_ROOTS};

use crate::navigation::DEFAULT_TITLE;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "sylas.toml";

/// Project configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SylasConfig {
    /// Fallback document title
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default)]
    pub router: RouterConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Route table settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Directory prefixes stripped from page files (default: ["pages"])
    #[serde(default = "default_page_roots")]
    pub page_roots: Vec<String>,

    /// Globs the host bundler uses to collect page modules
    #[serde(default = "default_page_patterns")]
    pub page_patterns: Vec<String>,

    #[serde(default = "default_false")]
    pub kebab_keep_digits: bool,

    /// Drop a trailing `index` segment (default: true)
    #[serde(default = "default_true")]
    pub remove_index: bool,

    /// Keep static segment casing (default: false)
    #[serde(default = "default_false")]
    pub case_sensitive: bool,

    #[serde(default = "default_true")]
    pub enable_catch_all: bool,
}

/// Layout settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Globs the host bundler uses to collect layout modules
    #[serde(default = "default_layout_patterns")]
    pub patterns: Vec<String>,

    /// Element id the rendered tree mounts into
    #[serde(default = "default_root_id")]
    pub root_id: String,

    #[serde(default = "default_true")]
    pub strict_mode: bool,
}

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Default,
    Compact,
    Pretty,
    Json,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,

    /// `EnvFilter` directives; `RUST_LOG` takes precedence when set
    #[serde(default = "default_filter")]
    pub filter: String,
}

// Default values
fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_page_roots() -> Vec<String> {
    DEFAULT_PAGE_ROOTS.iter().map(|root| root.to_string()).collect()
}

fn default_page_patterns() -> Vec<String> {
    vec!["./pages/**/*.{tsx,jsx}".to_string()]
}

fn default_layout_patterns() -> Vec<String> {
    vec!["./layouts/**/*.{tsx,jsx}".to_string()]
}

fn default_root_id() -> String {
    "root".to_string()
}

fn default_filter() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

impl Default for SylasConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            router: RouterConfig::default(),
            layout: LayoutConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            page_roots: default_page_roots(),
            page_patterns: default_page_patterns(),
            kebab_keep_digits: false,
            remove_index: true,
            case_sensitive: false,
            enable_catch_all: true,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            patterns: default_layout_patterns(),
            root_id: default_root_id(),
            strict_mode: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            filter: default_filter(),
        }
    }
}

impl RouterConfig {
    /// Route build options carrying these settings
    ///
    /// Segment mappers cannot be expressed in TOML; add one with
    /// [`RouteBuildOptions::segment_mapper`] on the result.
    pub fn to_build_options(&self) -> RouteBuildOptions {
        RouteBuildOptions::new()
            .page_roots(self.page_roots.iter().cloned())
            .kebab_keep_digits(self.kebab_keep_digits)
            .remove_index(self.remove_index)
            .case_sensitive(self.case_sensitive)
            .enable_catch_all(self.enable_catch_all)
    }

    pub fn absolute_page_patterns(&self) -> Vec<String> {
        to_absolute_paths(&self.page_patterns)
    }
}

impl LayoutConfig {
    pub fn absolute_patterns(&self) -> Vec<String> {
        to_absolute_paths(&self.patterns)
    }
}

impl SylasConfig {
    /// Load configuration from a sylas.toml file
    ///
    /// A missing or blank file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Parse configuration from TOML text
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: SylasConfig = toml::from_str(content).context("Invalid sylas configuration")?;
        Ok(config)
    }

    /// Like [`SylasConfig::load`], but falls back to the defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("{:#}; using default configuration", err);
                Self::default()
            }
        }
    }

    /// Load configuration from the default path (./sylas.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(CONFIG_FILE)
    }
}
