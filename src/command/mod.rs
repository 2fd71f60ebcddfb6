// modloader: CLI Mod Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Registry of every command the shell can run.
//!
//! ```text
//! "modprobe  greetings.so"
//!     tokenize --> Invocation ["modprobe", "greetings.so"]
//!     resolve("modprobe")
//!        Builtin(Modprobe)            handled by the shell
//!        Mod { owner, handler }       handler(inv, console)
//! ```
//!
//! Registration is all-or-nothing: a group whose names clash with anything
//! already registered (builtins included) adds nothing.

use std::collections::{BTreeMap, HashMap};

use modlibrary::{Handler, Invocation};

use crate::error::DispatchError;

/// Commands implemented by the shell itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Clear,
    Exit,
    Help,
    Lsmod,
    Modprobe,
    Rmmod,
}

impl Builtin {
    pub const ALL: [Self; 6] = [
        Self::Clear,
        Self::Exit,
        Self::Help,
        Self::Lsmod,
        Self::Modprobe,
        Self::Rmmod,
    ];

    /// The word that invokes this builtin.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Exit => "exit",
            Self::Help => "help",
            Self::Lsmod => "lsmod",
            Self::Modprobe => "modprobe",
            Self::Rmmod => "rmmod",
        }
    }
}

/// What a command name resolves to.
#[derive(Clone)]
pub enum CommandEntry {
    Builtin(Builtin),
    Mod { owner: String, handler: Handler },
}

impl CommandEntry {
    /// Module that registered this command, `None` for builtins.
    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        match self {
            Self::Builtin(_) => None,
            Self::Mod { owner, .. } => Some(owner),
        }
    }
}

impl std::fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Builtin(builtin) => f.debug_tuple("Builtin").field(builtin).finish(),
            Self::Mod { owner, .. } => f
                .debug_struct("Mod")
                .field("owner", owner)
                .finish_non_exhaustive(),
        }
    }
}

/// Name to command map.
#[derive(Debug, Default)]
pub struct CommandCollection {
    commands: HashMap<String, CommandEntry>,
}

impl CommandCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collection pre-populated with every [`Builtin`].
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut collection = Self::new();
        collection.add_builtins();
        collection
    }

    /// Registers every [`Builtin`]. Already registered builtins are left as is.
    pub fn add_builtins(&mut self) {
        for builtin in Builtin::ALL {
            self.commands
                .entry(builtin.name().to_string())
                .or_insert(CommandEntry::Builtin(builtin));
        }
    }

    /// Registers the commands of one module.
    ///
    /// Returns the names that were added. Nothing is added when any name is
    /// taken.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::DuplicateCommands`] listing every clashing name.
    pub fn add_commands(
        &mut self,
        owner: &str,
        commands: BTreeMap<String, Handler>,
    ) -> Result<Vec<String>, DispatchError> {
        let duplicates: Vec<String> = commands
            .keys()
            .filter(|name| self.commands.contains_key(name.as_str()))
            .cloned()
            .collect();

        if !duplicates.is_empty() {
            return Err(DispatchError::DuplicateCommands { names: duplicates });
        }

        let mut added = Vec::with_capacity(commands.len());
        for (name, handler) in commands {
            added.push(name.clone());
            self.commands.insert(
                name,
                CommandEntry::Mod {
                    owner: owner.to_string(),
                    handler,
                },
            );
        }
        Ok(added)
    }

    /// Removes mod commands by name. Unknown names and builtins are skipped.
    pub fn remove_commands<S: AsRef<str>>(&mut self, names: &[S]) {
        for name in names {
            if let Some(CommandEntry::Mod { .. }) = self.commands.get(name.as_ref()) {
                self.commands.remove(name.as_ref());
            }
        }
    }

    /// Looks up a command.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::CommandNotFound`] for unknown names.
    pub fn resolve(&self, name: &str) -> Result<&CommandEntry, DispatchError> {
        self.commands
            .get(name)
            .ok_or_else(|| DispatchError::CommandNotFound {
                name: name.to_string(),
            })
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Every registered name, ascending.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Splits an input line into words. Blank lines yield `None`.
#[must_use]
pub fn tokenize(line: &str) -> Option<Invocation> {
    Invocation::new(line.split_whitespace().map(str::to_string).collect())
}
