// modloader: CLI Mod Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The symbol a mod exports and the registrar it talks to.

use crate::command::CommandGroup;

/// Version of the compiler that built this copy of `modlibrary`.
pub const RUSTC_VERSION: &str = env!("MODLIBRARY_RUSTC_VERSION");

/// Version of `modlibrary` itself.
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the static exported by [`declare_mod!`](crate::declare_mod),
/// nul-terminated for symbol lookup.
pub const DECLARATION_SYMBOL: &[u8] = b"MODLOADER_DECLARATION\0";

/// Receives the command groups of a mod while it is being loaded.
pub trait ModRegistrar {
    fn register_group(&mut self, group: CommandGroup);
}

/// Exported by every mod under [`DECLARATION_SYMBOL`].
///
/// Rust has no stable ABI, so the loader only calls `register` when both
/// version strings equal its own.
#[derive(Clone, Copy)]
pub struct ModDeclaration {
    pub rustc_version: &'static str,
    pub library_version: &'static str,
    pub register: fn(&mut dyn ModRegistrar),
}

impl ModDeclaration {
    /// Whether this declaration was built by the same toolchain and library
    /// version as the caller.
    #[must_use]
    pub fn is_compatible(&self) -> bool {
        self.rustc_version == RUSTC_VERSION && self.library_version == LIBRARY_VERSION
    }
}

impl std::fmt::Debug for ModDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModDeclaration")
            .field("rustc_version", &self.rustc_version)
            .field("library_version", &self.library_version)
            .finish_non_exhaustive()
    }
}

/// Exports the mod declaration for a registration function.
///
/// ```ignore
/// modlibrary::declare_mod!(register);
/// ```
#[macro_export]
macro_rules! declare_mod {
    ($register:path) => {
        #[doc(hidden)]
        #[unsafe(no_mangle)]
        pub static MODLOADER_DECLARATION: $crate::ModDeclaration = $crate::ModDeclaration {
            rustc_version: $crate::RUSTC_VERSION,
            library_version: $crate::LIBRARY_VERSION,
            register: $register,
        };
    };
}
