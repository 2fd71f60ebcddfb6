// modloader: CLI Mod Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Opens mods compiled as shared libraries.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use libloading::{Library, Symbol};
use modlibrary::{DECLARATION_SYMBOL, LIBRARY_VERSION, ModDeclaration, RUSTC_VERSION};
use tracing::debug;

use super::{ModOpener, OpenedMod};
use crate::error::ModLoadError;

/// [`ModOpener`] backed by `libloading`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DylibOpener;

impl ModOpener for DylibOpener {
    fn open(&self, path: &Path) -> Result<OpenedMod, ModLoadError> {
        // SAFETY: loading a library runs its initializers. Mods are trusted
        // code picked by the user.
        let library = unsafe { Library::new(path) }.map_err(ModLoadError::Open)?;

        // SAFETY: `declare_mod!` exports the symbol as a `ModDeclaration`
        // static, so the symbol address points to one. Only the two version
        // strings are read before compatibility is confirmed.
        let declaration: ModDeclaration = unsafe {
            let symbol: Symbol<'_, *const ModDeclaration> = library
                .get(DECLARATION_SYMBOL)
                .map_err(ModLoadError::MissingDeclaration)?;
            **symbol
        };

        check_compatible(&declaration)?;
        debug!(path = %path.display(), "mod declaration accepted");

        let mut opened = OpenedMod::default();
        let registered =
            panic::catch_unwind(AssertUnwindSafe(|| (declaration.register)(&mut opened)));
        if registered.is_err() {
            drop(opened);
            return Err(ModLoadError::RegistrationPanicked);
        }

        opened.library = Some(library);
        Ok(opened)
    }
}

fn check_compatible(declaration: &ModDeclaration) -> Result<(), ModLoadError> {
    if declaration.rustc_version != RUSTC_VERSION {
        return Err(ModLoadError::IncompatibleCompiler {
            expected: RUSTC_VERSION.to_string(),
            found: declaration.rustc_version.to_string(),
        });
    }
    if declaration.library_version != LIBRARY_VERSION {
        return Err(ModLoadError::IncompatibleLibrary {
            expected: LIBRARY_VERSION.to_string(),
            found: declaration.library_version.to_string(),
        });
    }
    Ok(())
}
