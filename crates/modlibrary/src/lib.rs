// modloader: CLI Mod Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! API for writing modloader mods.
//!
//! A mod is a `cdylib` that registers one or more [`CommandGroup`]s when the
//! loader opens it:
//!
//! ```text
//! modprobe greetings.so
//!     |
//!     v
//! dlopen --> MODLOADER_DECLARATION (ModDeclaration)
//!              rustc_version / library_version  (must match loader)
//!              register(&mut dyn ModRegistrar)
//!                  |
//!                  v
//!            CommandGroup { "hello" -> Handler, ... }
//! ```
//!
//! ```no_run
//! use modlibrary::{CommandGroup, ModRegistrar};
//!
//! fn register(registrar: &mut dyn ModRegistrar) {
//!     registrar.register_group(CommandGroup::new("greetings").command(
//!         "hello",
//!         |_inv, console| Ok(console.success("Hello!")?),
//!     ));
//! }
//!
//! modlibrary::declare_mod!(register);
//! ```

pub mod command;
pub mod console;
mod declaration;

pub use self::command::{CommandError, CommandGroup, CommandResult, Handler, Invocation};
pub use self::console::Console;
pub use self::declaration::{
    DECLARATION_SYMBOL, LIBRARY_VERSION, ModDeclaration, ModRegistrar, RUSTC_VERSION,
};
