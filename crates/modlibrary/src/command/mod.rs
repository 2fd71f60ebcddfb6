// modloader: CLI Mod Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commands contributed by mods.
//!
//! ```text
//! "sum 1 2 3"  -->  Invocation { argv: ["sum", "1", "2", "3"] }
//!                        name() = "sum"     args() = ["1", "2", "3"]
//!
//! CommandGroup "math"
//!   "sum" --> Handler(&Invocation, &mut Console) -> CommandResult
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use thiserror::Error;

use crate::console::Console;

/// Errors a command handler can report back to the shell.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Wrong number or shape of arguments.
    #[error("invalid arguments")]
    InvalidArguments,

    /// The command ran but could not complete.
    #[error("{0}")]
    Failed(String),

    /// Writing to the console failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CommandError {
    /// Shorthand for [`CommandError::Failed`].
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

pub type CommandResult = Result<(), CommandError>;

/// A command implementation.
pub type Handler = Arc<dyn Fn(&Invocation, &mut Console<'_>) -> CommandResult + Send + Sync>;

/// The words of one input line. Never empty; `argv()[0]` is the command name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    argv: Vec<String>,
}

impl Invocation {
    /// Builds an invocation from argv-style words. Returns `None` for an
    /// empty list.
    #[must_use]
    pub fn new(argv: Vec<String>) -> Option<Self> {
        if argv.is_empty() {
            None
        } else {
            Some(Self { argv })
        }
    }

    /// Builds an invocation from a command name and its arguments.
    pub fn with_args<I, S>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut argv = vec![name.into()];
        argv.extend(args.into_iter().map(Into::into));
        Self { argv }
    }

    /// All words, including the command name.
    #[must_use]
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// The command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.argv[0]
    }

    /// Arguments after the command name.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }

    /// Number of words including the command name.
    #[must_use]
    pub fn len(&self) -> usize {
        self.argv.len()
    }

    /// Always false: an invocation holds at least the command name.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.argv.is_empty()
    }
}

/// A named set of commands registered together.
#[derive(Clone, Default)]
pub struct CommandGroup {
    name: String,
    commands: BTreeMap<String, Handler>,
}

impl CommandGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commands: BTreeMap::new(),
        }
    }

    /// Adds a command. A later command with the same name replaces the
    /// earlier one.
    #[must_use]
    pub fn command<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&Invocation, &mut Console<'_>) -> CommandResult + Send + Sync + 'static,
    {
        self.commands.insert(name.into(), Arc::new(handler));
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Command names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Handler> {
        self.commands.get(name)
    }

    #[must_use]
    pub fn into_commands(self) -> BTreeMap<String, Handler> {
        self.commands
    }
}

impl std::fmt::Debug for CommandGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandGroup")
            .field("name", &self.name)
            .field("commands", &self.commands.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests;
