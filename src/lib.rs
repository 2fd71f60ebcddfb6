// modloader: CLI Mod Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                     main.rs
//!                        |
//!              +---------+---------+
//!              v                   v
//!          cli (clap)          config (YAML, layered)
//!              |                   |
//!              +---------+---------+
//!                        v
//!                 shell (REPL loop)
//!                        |
//!              ,---------+---------,
//!              v                   v
//!           loader             command
//!     LoaderCore, dylib    CommandCollection,
//!        (libloading)         builtins
//!              |
//!              v
//!      modlibrary (mod API: CommandGroup, Console, declare_mod!)
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod shell;
