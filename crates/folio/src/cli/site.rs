//! Page-level subcommands: `page`, `nav` and `contact`.

use std::path::Path;

use anyhow::{bail, Context, Result};
use folio_theme::{DocumentRoot, OsAppearance, PageRenderer, ThemeController};
use folio_ui::{ContactForm, MobileNav, NavAction, SubmitError};

use super::output::Printer;
use super::ContactArgs;
use crate::config::FolioConfig;

/// Parses a navigation action argument.
///
/// Accepted forms: `toggle`, `link`, `escape` and `resize:<width>`.
pub(crate) fn parse_nav_action(arg: &str) -> Result<NavAction, String> {
    match arg {
        "toggle" => Ok(NavAction::Toggle),
        "link" => Ok(NavAction::LinkActivated),
        "escape" | "esc" => Ok(NavAction::Escape),
        other => match other.strip_prefix("resize:") {
            Some(width) => width
                .parse()
                .map(NavAction::Resize)
                .map_err(|_| format!("invalid width '{}'", width)),
            None => Err(format!(
                "unknown action '{}' (expected toggle, link, escape or resize:<width>)",
                other
            )),
        },
    }
}

pub(super) fn page(
    config: &FolioConfig,
    store_override: Option<&Path>,
    title: &str,
    lang: &str,
    printer: &mut Printer,
) -> Result<()> {
    let controller = ThemeController::builder(config.open_store(store_override), OsAppearance::new())
        .key(config.store.key.clone())
        .document(DocumentRoot::new().with_attribute("lang", lang))
        .build();
    controller.initialize();
    render_page(&controller, title, printer)
}

pub(crate) fn render_page(
    controller: &ThemeController,
    title: &str,
    printer: &mut Printer,
) -> Result<()> {
    let renderer = PageRenderer::new().context("compiling page templates")?;
    let html = renderer
        .render_page(title, controller)
        .context("rendering page")?;
    printer.line(html.trim_end())?;
    Ok(())
}

pub(super) fn nav(actions: &[NavAction], breakpoint: u32, printer: &mut Printer) -> Result<()> {
    let mut menu = MobileNav::with_breakpoint(breakpoint);
    for action in actions {
        let changed = menu.handle(*action);
        printer.line(format!(
            "{:<14} open={:<5} aria-expanded={} menu=\"{}\"{}",
            describe(*action),
            menu.is_open(),
            menu.aria_expanded(),
            menu.menu_classes().join(" "),
            if changed { "" } else { " (unchanged)" }
        ))?;
    }
    Ok(())
}

fn describe(action: NavAction) -> String {
    match action {
        NavAction::Toggle => "toggle".to_string(),
        NavAction::LinkActivated => "link".to_string(),
        NavAction::Escape => "escape".to_string(),
        NavAction::Resize(width) => format!("resize:{}", width),
    }
}

pub(super) fn contact(args: ContactArgs, config: &FolioConfig, printer: &mut Printer) -> Result<()> {
    let form = ContactForm {
        name: args.name,
        email: args.email,
        subject: args.subject,
        message: args.message,
    };
    let validator = config.contact_validator();

    match validator.submit(&form) {
        Ok(receipt) => {
            if !args.no_wait && !receipt.latency.is_zero() {
                printer.line("Sending...")?;
                printer.flush()?;
                std::thread::sleep(receipt.latency);
            }
            printer.success(&receipt.message)?;
            printer.field("reference", &receipt.reference)?;
            Ok(())
        }
        Err(SubmitError::Invalid(errors)) => {
            for error in &errors {
                printer.failure(format!("{}: {}", error.field(), error))?;
            }
            bail!("contact form has {} invalid field(s)", errors.len())
        }
    }
}
