// modloader: CLI Mod Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command-line options, parsed with clap derive.
//!
//! ```text
//! modloader [options] [MODULE...]
//!   -c, --config FILE        ← extra config file (repeatable)
//!   --no-default-configs     ← only use --config
//!   -p, --plugins-home DIR   ← pluginshome override
//!   --prompt TEXT            ← shell.prompt override
//!   --no-color               ← shell.color = false
//!   -l, --log-level N        ← stderr verbosity (0-5)
//!   --log-file FILE          ← also log to FILE
//!   --show-config            ← print options and config files, then exit
//!   MODULE...                ← loaded before the first prompt
//!
//! Precedence: CLI flags > MODLOADER_* > --config > application.yml > defaults
//! ```

#[cfg(test)]
mod tests;

use clap::Parser;
use std::path::PathBuf;

use crate::config::loader::ConfigLoader;
use crate::error::Result;
use crate::logging::{LogConfig, LogLevel};

/// Interactive command shell with runtime-loadable command mods.
#[derive(Debug, Parser)]
#[command(
    name = "modloader",
    author,
    version,
    about = "Interactive command shell with runtime-loadable command mods",
    after_help = "BUILTIN COMMANDS:\n\n  \
                  clear              clears the screen\n  \
                  exit               leaves the shell\n  \
                  help               lists every registered command\n  \
                  lsmod              lists loaded modules\n  \
                  modprobe MODULE    loads MODULE (a file in pluginshome, or a path)\n  \
                  rmmod MODULE       unloads MODULE\n\n\
                  CONFIG FILES:\n\n\
                  application.yml is read from the directory of the executable and\n\
                  then from the current directory. Files given with --config are\n\
                  loaded after those. Use --no-default-configs to only use --config."
)]
pub struct Cli {
    /// Additional YAML configuration file(s). Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Disables auto loading of application.yml, only uses --config.
    #[arg(long = "no-default-configs")]
    pub no_default_configs: bool,

    /// Directory searched for modules given without a path.
    #[arg(short = 'p', long = "plugins-home", value_name = "DIR")]
    pub plugins_home: Option<PathBuf>,

    /// Prompt printed before every input line.
    #[arg(long, value_name = "TEXT")]
    pub prompt: Option<String>,

    /// Disables colored output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Log level on stderr (0=off, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5))]
    pub log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Prints the effective options and the config files used, then exits.
    #[arg(long = "show-config")]
    pub show_config: bool,

    /// Modules to load before the first prompt.
    #[arg(value_name = "MODULE")]
    pub preload: Vec<String>,
}

impl Cli {
    /// Builds the layered configuration loader for these options.
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be converted to a config value.
    pub fn config_loader(&self) -> Result<ConfigLoader> {
        let mut loader = if self.no_default_configs {
            ConfigLoader::new().add_embedded_defaults()
        } else {
            ConfigLoader::with_default_sources()
        };

        for path in &self.configs {
            loader = loader.add_yaml_file(path);
        }
        loader = loader.with_env_prefix("MODLOADER");

        if let Some(ref dir) = self.plugins_home {
            loader = loader.set("pluginshome", dir.display().to_string())?;
        }
        if let Some(ref prompt) = self.prompt {
            loader = loader.set("shell.prompt", prompt.as_str())?;
        }
        if self.no_color {
            loader = loader.set("shell.color", false)?;
        }

        Ok(loader)
    }

    /// Logging configuration for these options.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        let console_level = self
            .log_level
            .and_then(LogLevel::from_u8)
            .unwrap_or_default();

        LogConfig::builder()
            .with_console_level(console_level)
            .with_file_level(console_level.max(LogLevel::DEBUG))
            .maybe_with_log_file(self.log_file.as_ref().map(|p| p.display().to_string()))
            .with_ansi(!self.no_color)
            .build()
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Tries to parse command-line arguments from an iterator.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(iter)
}
