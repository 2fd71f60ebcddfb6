// modloader: CLI Mod Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The interactive read-dispatch loop.
//!
//! ```text
//! reader thread --(flume, one line at a time)--> Shell::run
//!
//! loop
//!   print prompt
//!   select! { next line | shutdown signal }
//!     EOF / signal  --> leave
//!     blank         --> skip
//!     line          --> execute
//!                          builtin  --> run_builtin (may request Exit)
//!                          mod      --> handler, errors/panics reported
//!                          unknown  --> "Command not found"
//! unload_all
//! ```


use std::future::Future;
use std::io::{self, BufRead, Write};
use std::panic::{self, AssertUnwindSafe};
use std::thread;

use flume::Receiver;
use modlibrary::{Console, Handler, Invocation};
use tracing::debug;

use crate::command::{Builtin, CommandEntry, tokenize};
use crate::config::ShellConfig;
use crate::error::ModloaderResult;
use crate::loader::LoaderCore;

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Lines read from the user, or the read error that ended input.
pub type InputLines = Receiver<io::Result<String>>;

/// Reads `reader` line by line on a dedicated thread.
///
/// A blocking read cannot be cancelled, so the thread is detached: when the
/// shell stops listening the thread exits at its next send, or with the
/// process. The channel disconnects at end of input.
///
/// # Errors
///
/// Returns an error if the thread cannot be spawned.
pub fn spawn_line_reader<R>(reader: R) -> io::Result<InputLines>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = flume::bounded(1);
    thread::Builder::new()
        .name("line-reader".to_string())
        .spawn(move || {
            for line in reader.lines() {
                let failed = line.is_err();
                if tx.send(line).is_err() || failed {
                    break;
                }
            }
        })?;
    Ok(rx)
}

/// Shell state: the loader plus where output goes.
pub struct Shell<W: Write> {
    loader: LoaderCore,
    out: W,
    prompt: String,
    styled: bool,
}

impl<W: Write> Shell<W> {
    pub fn new(loader: LoaderCore, out: W, settings: &ShellConfig) -> Self {
        Self {
            loader,
            out,
            prompt: settings.prompt.clone(),
            styled: settings.color,
        }
    }

    #[must_use]
    pub const fn loader(&self) -> &LoaderCore {
        &self.loader
    }

    /// The output writer.
    #[must_use]
    pub const fn writer(&self) -> &W {
        &self.out
    }

    /// Reads lines from `input` until EOF, `exit`, or `shutdown` resolves.
    /// Every module is unloaded before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub async fn run<S>(&mut self, input: InputLines, shutdown: S) -> ModloaderResult<()>
    where
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            write!(self.out, "{}", self.prompt)?;
            self.out.flush()?;

            let line = tokio::select! {
                line = input.recv_async() => line.ok().transpose()?,
                () = &mut shutdown => {
                    debug!("shutdown requested");
                    writeln!(self.out)?;
                    break;
                }
            };

            let Some(line) = line else {
                writeln!(self.out)?;
                break;
            };

            if self.execute(&line)? == Flow::Exit {
                break;
            }
        }

        self.loader.unload_all();
        self.out.flush()?;
        Ok(())
    }

    /// Runs one input line.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing output fails.
    pub fn execute(&mut self, line: &str) -> ModloaderResult<Flow> {
        match tokenize(line) {
            Some(invocation) => self.execute_invocation(&invocation),
            None => Ok(Flow::Continue),
        }
    }

    /// Runs an already tokenized command.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing output fails.
    pub fn execute_invocation(&mut self, invocation: &Invocation) -> ModloaderResult<Flow> {
        let entry = self.loader.commands().resolve(invocation.name()).cloned();
        let mut console = Console::new(&mut self.out, self.styled);

        let flow = match entry {
            Err(e) => {
                console.error(&e)?;
                Flow::Continue
            }
            Ok(CommandEntry::Builtin(builtin)) => {
                debug!(command = builtin.name(), "running builtin");
                run_builtin(builtin, invocation, &mut self.loader, &mut console)?
            }
            Ok(CommandEntry::Mod { owner, handler }) => {
                debug!(command = invocation.name(), module = %owner, "running mod command");
                run_handler(&handler, invocation, &mut console)?;
                Flow::Continue
            }
        };

        console.flush()?;
        Ok(flow)
    }
}

fn run_handler(
    handler: &Handler,
    invocation: &Invocation,
    console: &mut Console<'_>,
) -> std::io::Result<()> {
    let name = invocation.name();
    match panic::catch_unwind(AssertUnwindSafe(|| handler(invocation, console))) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => {
            debug!(command = name, error = %e, "command failed");
            console.error(format!("Error executing command {name}: {e}"))
        }
        Err(_) => {
            debug!(command = name, "command panicked");
            console.error(format!("Error executing command {name}"))
        }
    }
}

fn run_builtin(
    builtin: Builtin,
    invocation: &Invocation,
    loader: &mut LoaderCore,
    console: &mut Console<'_>,
) -> std::io::Result<Flow> {
    match builtin {
        Builtin::Clear => console.clear()?,
        Builtin::Exit => {
            console.success("Exiting...")?;
            return Ok(Flow::Exit);
        }
        Builtin::Help => {
            for name in loader.commands().names() {
                console.println(name)?;
            }
        }
        Builtin::Lsmod => lsmod(invocation, loader, console)?,
        Builtin::Modprobe => modprobe(invocation, loader, console)?,
        Builtin::Rmmod => rmmod(invocation, loader, console)?,
    }
    Ok(Flow::Continue)
}

fn lsmod(
    invocation: &Invocation,
    loader: &LoaderCore,
    console: &mut Console<'_>,
) -> std::io::Result<()> {
    if invocation.len() != 1 {
        return console.error("Invalid arguments");
    }

    let modules = loader.loaded_modules();
    if modules.is_empty() {
        return console.error("No modules loaded");
    }
    for module in modules {
        console.success(module)?;
    }
    Ok(())
}

fn modprobe(
    invocation: &Invocation,
    loader: &mut LoaderCore,
    console: &mut Console<'_>,
) -> std::io::Result<()> {
    let [module] = invocation.args() else {
        return console.error("Invalid arguments");
    };

    match loader.load_module(module) {
        Ok(true) => console.success(format!("Module {module} loaded")),
        Ok(false) => console.error("Module not found"),
        Err(e) => console.error(e),
    }
}

fn rmmod(
    invocation: &Invocation,
    loader: &mut LoaderCore,
    console: &mut Console<'_>,
) -> std::io::Result<()> {
    let [module] = invocation.args() else {
        return console.error("Invalid arguments");
    };

    if loader.unload_module(module) {
        console.warning(format!("Module {module} unloaded"))
    } else {
        console.error("Module not found")
    }
}
