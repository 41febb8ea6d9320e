//! Command-line interface.
//!
//! The CLI hosts a [`ThemeController`](folio_theme::ThemeController) the
//! way a page would: it builds one controller per run, initializes it from
//! the preference file, and drives it from subcommands.
//!
//! ```text
//! folio theme get            Show the current preference
//! folio theme set dark       Persist and apply a preference
//! folio theme cycle          Advance system -> light -> dark
//! folio theme watch          Follow OS appearance changes
//! folio page                 Render the themed page shell
//! folio nav toggle link      Replay navigation menu actions
//! folio contact ...          Validate and "send" a contact message
//! ```

mod output;
mod site;
mod theme;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::config::FolioConfig;

pub use output::Printer;

/// Top-level arguments.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Portfolio theme switcher and page behaviors")]
pub struct Cli {
    /// Configuration file (defaults to <config_dir>/folio/config.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Preference file, overriding config and FOLIO_STORE
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Inspect or change the theme preference
    #[command(subcommand)]
    Theme(ThemeCommand),
    /// Render the page shell for the current theme
    Page {
        /// Page title
        #[arg(long, default_value = "Portfolio")]
        title: String,
        /// Document language
        #[arg(long, default_value = "en")]
        lang: String,
    },
    /// Replay navigation menu actions and show the resulting state
    Nav {
        /// Actions: toggle, link, escape, resize:<width>
        #[arg(value_name = "ACTION", required = true, value_parser = site::parse_nav_action)]
        actions: Vec<folio_ui::NavAction>,
        /// Width at which the menu collapses into the desktop bar
        #[arg(long, default_value_t = folio_ui::DEFAULT_BREAKPOINT)]
        breakpoint: u32,
    },
    /// Validate a contact message and simulate sending it
    Contact(ContactArgs),
}

#[derive(Debug, Subcommand)]
pub enum ThemeCommand {
    /// Print the current preference and effective theme
    Get {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Persist and apply a preference (system, light or dark)
    Set {
        /// Mode name; unknown names are ignored
        mode: String,
    },
    /// Advance to the next preference
    Cycle,
    /// Print a line each time the applied theme changes
    Watch {
        /// Stop after this many polls
        #[arg(long, value_name = "N")]
        polls: Option<u64>,
    },
}

#[derive(Debug, Args)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub subject: Option<String>,
    #[arg(long)]
    pub message: String,
    /// Skip the simulated network delay
    #[arg(long)]
    pub no_wait: bool,
}

/// Runs the parsed command, writing results to `out`.
pub fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let config = FolioConfig::load(cli.config.as_deref()).context("loading configuration")?;
    let mut printer = Printer::new(out);

    match cli.command {
        Command::Theme(cmd) => theme::run(cmd, &config, cli.store.as_deref(), &mut printer),
        Command::Page { title, lang } => {
            site::page(&config, cli.store.as_deref(), &title, &lang, &mut printer)
        }
        Command::Nav {
            actions,
            breakpoint,
        } => site::nav(&actions, breakpoint, &mut printer),
        Command::Contact(args) => site::contact(args, &config, &mut printer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_theme_set() {
        let cli = Cli::try_parse_from(["folio", "theme", "set", "dark"]).unwrap();
        match cli.command {
            Command::Theme(ThemeCommand::Set { mode }) => assert_eq!(mode, "dark"),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_store_after_subcommand() {
        let cli =
            Cli::try_parse_from(["folio", "theme", "get", "--store", "/tmp/p.json"]).unwrap();
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/p.json")));
    }

    #[test]
    fn test_parse_nav_actions() {
        let cli = Cli::try_parse_from(["folio", "nav", "toggle", "resize:1024"]).unwrap();
        match cli.command {
            Command::Nav { actions, .. } => assert_eq!(
                actions,
                vec![
                    folio_ui::NavAction::Toggle,
                    folio_ui::NavAction::Resize(1024)
                ]
            ),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_nav_rejects_unknown_action() {
        assert!(Cli::try_parse_from(["folio", "nav", "jump"]).is_err());
    }
}
