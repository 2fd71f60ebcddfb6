// modloader: CLI Mod Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          ModloaderError (~24 bytes)
//!                  |
//!   +--------+-----+-----+--------+
//!   |        |           |        |
//!   v        v           v        v
//! Config   Loader     Dispatch    Io
//!  Box      Box         Box      Box
//!
//! Sub-errors:
//!   Config    ParseError, InvalidValue
//!   Loader    PluginsHomeMissing, AlreadyLoaded, LoadFailed(ModLoadError)
//!   Dispatch  DuplicateCommands, CommandNotFound
//! ```
//!
//! The `Display` text of loader and dispatch errors is what the shell shows
//! the user, so it is phrased as a sentence rather than `kind: detail`.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ModloaderError`].
pub type ModloaderResult<T> = std::result::Result<T, ModloaderError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum ModloaderError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(Box<ConfigError>),

    /// Loading or unloading a mod failed.
    #[error("{0}")]
    Loader(Box<LoaderError>),

    /// Command registration or lookup failed.
    #[error("{0}")]
    Dispatch(Box<DispatchError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ModloaderError {
                fn from(err: $error) -> Self {
                    ModloaderError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    LoaderError => Loader,
    DispatchError => Dispatch,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration sources.
    #[error("failed to parse config: {message}")]
    ParseError { message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

// --- Loader Errors ---

/// Errors from [`LoaderCore`](crate::loader::LoaderCore).
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The configured plugins home is not an existing directory.
    #[error("Plugins home directory does not exist: {}", path.display())]
    PluginsHomeMissing { path: PathBuf },

    /// A module with the same file name is already loaded.
    #[error("Module already loaded")]
    AlreadyLoaded { module: String },

    /// The module file exists but could not be turned into commands.
    #[error("Error loading module {module}\n{source}")]
    LoadFailed {
        module: String,
        #[source]
        source: Box<ModLoadError>,
    },
}

impl LoaderError {
    pub(crate) fn load_failed(module: impl Into<String>, source: ModLoadError) -> Self {
        Self::LoadFailed {
            module: module.into(),
            source: Box::new(source),
        }
    }
}

/// Why a particular module file was rejected.
#[derive(Debug, Error)]
pub enum ModLoadError {
    /// The dynamic library could not be opened.
    #[error("cannot open library: {0}")]
    Open(#[source] libloading::Error),

    /// The library does not export a mod declaration.
    #[error("not a mod (missing declaration symbol): {0}")]
    MissingDeclaration(#[source] libloading::Error),

    /// The mod was built with a different compiler.
    #[error("built with {found}, loader was built with {expected}")]
    IncompatibleCompiler { expected: String, found: String },

    /// The mod was built against a different `modlibrary`.
    #[error("built against modlibrary {found}, loader provides {expected}")]
    IncompatibleLibrary { expected: String, found: String },

    /// The registration function panicked.
    #[error("registration panicked")]
    RegistrationPanicked,

    /// The mod registered no command groups.
    #[error("no command groups registered")]
    NoCommandGroups,

    /// One of the mod's commands clashes with a registered command.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

// --- Dispatch Errors ---

/// Errors from the [`CommandCollection`](crate::command::CommandCollection).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// At least one name is already registered; nothing was added.
    #[error("Duplicate commands found: {}", names.join(", "))]
    DuplicateCommands { names: Vec<String> },

    /// No command with that name.
    #[error("Command not found")]
    CommandNotFound { name: String },
}
