// modloader: CLI Mod Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Loading and unloading of mods.
//!
//! ```text
//! load_module("greetings.so")        load_module("/opt/x/greetings.so")
//!   dir = plugins home                 dir = "/opt/x"  (split at last '/')
//!          \                          /
//!           name = "greetings.so"  (key in the loaded map)
//!                     |
//!   already loaded? --+--> AlreadyLoaded
//!   file missing?   --+--> Ok(false)
//!                     v
//!             ModOpener::open(path) --> OpenedMod { groups, library }
//!                     |
//!             CommandCollection::add_commands (per group)
//!                 any failure: roll back, LoadFailed
//!                     v
//!                  Ok(true)
//! ```
//!
//! Handlers point into the library's code, so a module's commands are always
//! removed from the collection before its library handle is dropped.

mod dylib;


pub use dylib::DylibOpener;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use libloading::Library;
use modlibrary::{CommandGroup, ModRegistrar};
use tracing::{debug, info};

use crate::command::CommandCollection;
use crate::error::{LoaderError, ModLoadError};

/// A module file turned into command groups.
#[derive(Default)]
pub struct OpenedMod {
    /// Groups registered by the module, in registration order.
    pub groups: Vec<CommandGroup>,
    /// Library the handlers live in. `None` for modules linked into the
    /// process.
    pub library: Option<Library>,
}

impl OpenedMod {
    /// Module whose code is already part of the process.
    #[must_use]
    pub const fn from_groups(groups: Vec<CommandGroup>) -> Self {
        Self {
            groups,
            library: None,
        }
    }
}

impl ModRegistrar for OpenedMod {
    fn register_group(&mut self, group: CommandGroup) {
        self.groups.push(group);
    }
}

/// Turns a module file into command groups.
pub trait ModOpener {
    /// Opens the module at `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`ModLoadError`] when the file is not a usable mod.
    fn open(&self, path: &Path) -> Result<OpenedMod, ModLoadError>;
}

struct LoadedModule {
    path: PathBuf,
    commands: Vec<String>,
    library: Option<Library>,
}

/// Owns the command collection and every loaded module.
pub struct LoaderCore {
    plugins_home: PathBuf,
    commands: CommandCollection,
    modules: BTreeMap<String, LoadedModule>,
    opener: Box<dyn ModOpener>,
}

impl LoaderCore {
    /// Creates a loader with the builtin commands registered.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError::PluginsHomeMissing`] if `plugins_home` is not a
    /// directory.
    pub fn new(
        plugins_home: impl Into<PathBuf>,
        opener: Box<dyn ModOpener>,
    ) -> Result<Self, LoaderError> {
        let plugins_home = plugins_home.into();
        if !plugins_home.is_dir() {
            return Err(LoaderError::PluginsHomeMissing { path: plugins_home });
        }
        debug!(plugins_home = %plugins_home.display(), "loader ready");

        Ok(Self {
            plugins_home,
            commands: CommandCollection::with_builtins(),
            modules: BTreeMap::new(),
            opener,
        })
    }

    #[must_use]
    pub fn plugins_home(&self) -> &Path {
        &self.plugins_home
    }

    #[must_use]
    pub const fn commands(&self) -> &CommandCollection {
        &self.commands
    }

    /// Names of the loaded modules, ascending.
    #[must_use]
    pub fn loaded_modules(&self) -> Vec<String> {
        self.modules.keys().cloned().collect()
    }

    #[must_use]
    pub fn is_loaded(&self, module: &str) -> bool {
        self.modules.contains_key(module)
    }

    /// Commands registered by `module`, ascending.
    #[must_use]
    pub fn module_commands(&self, module: &str) -> Option<&[String]> {
        self.modules.get(module).map(|m| m.commands.as_slice())
    }

    /// File the module was loaded from.
    #[must_use]
    pub fn module_path(&self, module: &str) -> Option<&Path> {
        self.modules.get(module).map(|m| m.path.as_path())
    }

    /// Loads a module given as a file name in the plugins home or as a path.
    ///
    /// Returns `Ok(false)` when the file does not exist.
    ///
    /// # Errors
    ///
    /// - [`LoaderError::AlreadyLoaded`] if a module with the same file name is
    ///   loaded.
    /// - [`LoaderError::LoadFailed`] if the file is not a usable mod or one of
    ///   its commands is already registered. Nothing stays registered.
    pub fn load_module(&mut self, spec: &str) -> Result<bool, LoaderError> {
        let (dir, name) = split_module_spec(spec, &self.plugins_home);

        if self.modules.contains_key(name) {
            return Err(LoaderError::AlreadyLoaded {
                module: name.to_string(),
            });
        }

        let path = dir.join(name);
        if name.is_empty() || !path.is_file() {
            debug!(path = %path.display(), "module file not found");
            return Ok(false);
        }

        let opened = self
            .opener
            .open(&path)
            .map_err(|e| LoaderError::load_failed(name, e))?;

        self.register(name, path, opened)
            .map_err(|e| LoaderError::load_failed(name, e))?;
        Ok(true)
    }

    fn register(
        &mut self,
        name: &str,
        path: PathBuf,
        opened: OpenedMod,
    ) -> Result<(), ModLoadError> {
        let OpenedMod { groups, library } = opened;

        if groups.is_empty() {
            return Err(ModLoadError::NoCommandGroups);
        }

        let mut added = Vec::new();
        let mut failure = None;
        let mut groups = groups.into_iter();

        for group in groups.by_ref() {
            let group_name = group.name().to_string();
            match self.commands.add_commands(name, group.into_commands()) {
                Ok(names) => {
                    debug!(module = name, group = %group_name, commands = ?names, "group registered");
                    added.extend(names);
                }
                Err(e) => {
                    failure = Some(e);
                    break;
                }
            }
        }
        drop(groups);

        if let Some(err) = failure {
            self.commands.remove_commands(&added);
            drop(library);
            debug!(module = name, error = %err, "module rejected");
            return Err(err.into());
        }

        added.sort_unstable();
        info!(module = name, path = %path.display(), commands = added.len(), "module loaded");
        self.modules.insert(
            name.to_string(),
            LoadedModule {
                path,
                commands: added,
                library,
            },
        );
        Ok(())
    }

    /// Unloads a module. Returns `false` if it was not loaded.
    pub fn unload_module(&mut self, module: &str) -> bool {
        let Some(loaded) = self.modules.remove(module) else {
            return false;
        };

        let LoadedModule {
            commands, library, ..
        } = loaded;
        self.commands.remove_commands(&commands);
        drop(library);

        info!(module, "module unloaded");
        true
    }

    /// Unloads every module.
    pub fn unload_all(&mut self) {
        for module in self.loaded_modules() {
            self.unload_module(&module);
        }
    }
}

impl Drop for LoaderCore {
    fn drop(&mut self) {
        self.unload_all();
    }
}

/// Splits `spec` at its last `/` into directory and file name. Without a
/// `/` the directory is `plugins_home`; a leading `/` alone means the root.
fn split_module_spec<'a>(spec: &'a str, plugins_home: &Path) -> (PathBuf, &'a str) {
    match spec.rsplit_once('/') {
        Some(("", name)) => (PathBuf::from("/"), name),
        Some((dir, name)) => (PathBuf::from(dir), name),
        None => (plugins_home.to_path_buf(), spec),
    }
}
