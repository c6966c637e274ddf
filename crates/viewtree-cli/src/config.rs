// File: src/config.rs
// Purpose: Configuration parsing from viewtree.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use viewtree_router::{RouteOptions, DEFAULT_ENTRY_FILE, DEFAULT_ROOT};

/// Default config file name, looked up in the project directory
pub const CONFIG_FILE: &str = "viewtree.toml";

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub routes: RoutesConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Where views live and how they are recognised
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoutesConfig {
    /// View root relative to the project (default: "/src/views")
    #[serde(default = "default_root_path")]
    pub root_path: String,

    /// Entry component every view directory must contain (default: "index.vue")
    #[serde(default = "default_entry_file")]
    pub entry_file: String,

    /// Metadata file names tried in order inside each view directory
    #[serde(default = "default_meta_files")]
    pub meta_files: Vec<String>,
}

/// Generated output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// File to write; stdout when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_path: Option<String>,

    #[serde(default)]
    pub format: OutputFormat,

    /// Indentation width (2 or 4)
    #[serde(default = "default_space")]
    pub space: usize,
}

/// Serialization format of the route table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// ES module exporting `routes`, components loaded lazily (default)
    #[default]
    Js,
    /// Plain JSON, components as import specifiers
    Json,
}

// Default values
fn default_root_path() -> String {
    DEFAULT_ROOT.to_string()
}

fn default_entry_file() -> String {
    DEFAULT_ENTRY_FILE.to_string()
}

fn default_meta_files() -> Vec<String> {
    vec!["meta.toml".to_string(), "meta.json".to_string()]
}

fn default_space() -> usize {
    4
}

// Default implementations
impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            root_path: default_root_path(),
            entry_file: default_entry_file(),
            meta_files: default_meta_files(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            write_path: None,
            format: OutputFormat::default(),
            space: default_space(),
        }
    }
}

impl RoutesConfig {
    /// Options handed to the route builder
    pub fn route_options(&self) -> RouteOptions {
        RouteOptions::default()
            .with_root(self.root_path.clone())
            .with_entry_file(self.entry_file.clone())
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Values are not checked here; call [`Config::validate`] once command
    /// line overrides are applied.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load `viewtree.toml` from the given project directory
    pub fn load_from_project(project: &Path) -> Result<Self> {
        Self::load(project.join(CONFIG_FILE))
    }

    /// Rejects values the emitters cannot honour
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.output.space, 2 | 4) {
            anyhow::bail!("output.space must be 2 or 4, got {}", self.output.space);
        }
        if self.routes.entry_file.trim().is_empty() {
            anyhow::bail!("routes.entry_file must not be empty");
        }
        Ok(())
    }

    /// Renders the config as TOML, used by `viewtree init`
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
