//! Styled terminal output.

use std::io::{self, Write};

use console::{style, StyledObject};
use folio_theme::{EffectiveTheme, ThemeMode};

/// Writes command output with consistent styling.
pub struct Printer<'a> {
    out: &'a mut dyn Write,
}

impl<'a> Printer<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self { out }
    }

    pub fn line(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Prints `label: value` with a dimmed label.
    pub fn field(&mut self, label: &str, value: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.out, "{} {}", style(format!("{}:", label)).dim(), value)
    }

    pub fn success(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.out, "{} {}", style("✓").green().bold(), text)
    }

    pub fn warning(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.out, "{} {}", style("!").yellow().bold(), text)
    }

    pub fn failure(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.out, "{} {}", style("✗").red().bold(), text)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Styles a mode name by the theme it stands for.
pub fn styled_mode(mode: ThemeMode) -> StyledObject<&'static str> {
    let styled = style(mode.as_str()).bold();
    match mode {
        ThemeMode::System => styled.cyan(),
        ThemeMode::Light => styled.yellow(),
        ThemeMode::Dark => styled.magenta(),
    }
}

pub fn styled_effective(theme: EffectiveTheme) -> StyledObject<&'static str> {
    match theme {
        EffectiveTheme::Light => style(theme.as_str()).yellow(),
        EffectiveTheme::Dark => style(theme.as_str()).magenta(),
    }
}
