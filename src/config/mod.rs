// modloader: CLI Mod Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for modloader.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. embedded application.yml
//! 2. application.yml next to the executable
//! 3. application.yml in the current directory
//! 4. --config FILE (repeatable)
//! 5. MODLOADER_* env vars
//! 6. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! MODLOADER_PLUGINSHOME=/opt/mods → pluginshome = "/opt/mods"
//! MODLOADER_SHELL_COLOR=false     → shell.color = false
//! ```

pub mod loader;


use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;

use loader::ConfigLoader;

/// Name of the configuration file looked up in the executable and current
/// directories.
pub const CONFIG_FILE_NAME: &str = "application.yml";

/// Configuration compiled into the binary; the lowest layer.
pub const DEFAULT_CONFIG: &str = include_str!("application.yml");

/// Directory used when no layer sets `pluginshome`.
pub const DEFAULT_PLUGINS_HOME: &str = "/tmp";

/// Complete application configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory searched for modules given without a path.
    #[serde(rename = "pluginshome")]
    pub plugins_home: PathBuf,
    /// Interactive shell options.
    pub shell: ShellConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            plugins_home: PathBuf::from(DEFAULT_PLUGINS_HOME),
            shell: ShellConfig::default(),
        }
    }
}

/// Interactive shell options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Text printed before every input line.
    pub prompt: String,
    /// Whether messages use ANSI colors.
    pub color: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "$ ".to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use modloader::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_yaml_str(modloader::config::DEFAULT_CONFIG)
    ///     .add_yaml_file_optional("application.yml")
    ///     .with_env_prefix("MODLOADER")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid YAML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_yaml_file(path).build()
    }

    /// Load configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid YAML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_yaml_str(content).build()
    }

    /// Format configuration options for display, one `key = value` per line
    /// with aligned `=`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert("pluginshome", self.plugins_home.display().to_string());
        options.insert("shell.prompt", format!("{:?}", self.shell.prompt));
        options.insert("shell.color", self.shell.color.to_string());

        let max_key_len = options.keys().map(|key| key.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
