//! # folio
//!
//! Command-line host for the folio portfolio site behaviors.
//!
//! The binary wires [`folio_theme`] and [`folio_ui`] to the terminal: a YAML
//! [`config`] file chooses where the theme preference lives, and the [`cli`]
//! module drives a [`ThemeController`](folio_theme::ThemeController) from
//! subcommands the way a page drives it from clicks and OS events.

pub mod cli;
pub mod config;
