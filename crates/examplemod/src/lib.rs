// modloader: CLI Mod Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Example mod.
//!
//! Build with `cargo build -p examplemod` and load the resulting
//! `libexamplemod.so` from the shell:
//!
//! ```text
//! $ modprobe libexamplemod.so
//! Module libexamplemod.so loaded
//! $ hello modder
//! Hello, modder!
//! ```

use modlibrary::{CommandError, CommandGroup, CommandResult, Console, Invocation, ModRegistrar};

modlibrary::declare_mod!(register);

/// Registers every group this mod provides.
pub fn register(registrar: &mut dyn ModRegistrar) {
    registrar.register_group(greetings());
}

/// The `greetings` group: `hello`, `echo` and `sum`.
#[must_use]
pub fn greetings() -> CommandGroup {
    CommandGroup::new("greetings")
        .command("hello", hello)
        .command("echo", echo)
        .command("sum", sum)
}

fn hello(inv: &Invocation, console: &mut Console<'_>) -> CommandResult {
    let name = match inv.args() {
        [] => "world".to_string(),
        words => words.join(" "),
    };
    console.success(format!("Hello, {name}!"))?;
    Ok(())
}

fn echo(inv: &Invocation, console: &mut Console<'_>) -> CommandResult {
    console.println(inv.args().join(" "))?;
    Ok(())
}

fn sum(inv: &Invocation, console: &mut Console<'_>) -> CommandResult {
    if inv.args().is_empty() {
        return Err(CommandError::InvalidArguments);
    }

    let mut total: i64 = 0;
    for word in inv.args() {
        let value: i64 = word.parse().map_err(|_| CommandError::InvalidArguments)?;
        total = total
            .checked_add(value)
            .ok_or_else(|| CommandError::failed("sum overflows"))?;
    }

    console.println(total)?;
    Ok(())
}

#[cfg(test)]
mod tests;
