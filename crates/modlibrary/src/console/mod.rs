// modloader: CLI Mod Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Output sink handed to every command.
//!
//! ```text
//! success  green + bold
//! error    red + bold
//! warning  yellow + bold
//! println  plain
//! clear    ESC[H ESC[2J
//! ```

use std::fmt::Display;
use std::io::{self, Write};

use ::console::Style;

/// ANSI sequence that moves the cursor home and clears the screen.
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// Line-oriented writer with optional ANSI styling.
pub struct Console<'a> {
    out: &'a mut dyn Write,
    styled: bool,
}

impl<'a> Console<'a> {
    /// Wraps `out`. When `styled` is false every message is written verbatim.
    pub fn new(out: &'a mut dyn Write, styled: bool) -> Self {
        Self { out, styled }
    }

    /// Whether ANSI styling is enabled.
    #[must_use]
    pub const fn is_styled(&self) -> bool {
        self.styled
    }

    /// Writes a plain line.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn println(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.out, "{message}")
    }

    /// Writes a line in green and bold.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn success(&mut self, message: impl Display) -> io::Result<()> {
        self.styled_line(Style::new().green().bold(), message)
    }

    /// Writes a line in red and bold.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn error(&mut self, message: impl Display) -> io::Result<()> {
        self.styled_line(Style::new().red().bold(), message)
    }

    /// Writes a line in yellow and bold.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn warning(&mut self, message: impl Display) -> io::Result<()> {
        self.styled_line(Style::new().yellow().bold(), message)
    }

    /// Clears the terminal.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn clear(&mut self) -> io::Result<()> {
        write!(self.out, "{CLEAR_SCREEN}")?;
        self.out.flush()
    }

    /// Flushes the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn styled_line(&mut self, palette: Style, message: impl Display) -> io::Result<()> {
        let palette = palette.force_styling(self.styled);
        writeln!(self.out, "{}", palette.apply_to(message))
    }
}

#[cfg(test)]
mod tests;
