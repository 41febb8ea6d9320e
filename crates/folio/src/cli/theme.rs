//! `folio theme` subcommands.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use folio_theme::{AppearanceSignal, OsAppearance, ThemeChange, ThemeController, THEME_ATTRIBUTE};

use super::output::{styled_effective, styled_mode, Printer};
use super::ThemeCommand;
use crate::config::FolioConfig;

pub(super) fn run(
    cmd: ThemeCommand,
    config: &FolioConfig,
    store_override: Option<&Path>,
    printer: &mut Printer,
) -> Result<()> {
    let signal = OsAppearance::new();
    let controller = build_controller(config, store_override, signal.clone());

    match cmd {
        ThemeCommand::Get { json } => print_state(&controller, json, printer),
        ThemeCommand::Set { mode } => {
            if !controller.set_theme_name(&mode) {
                printer.warning(format!(
                    "ignored unknown theme '{}' (expected system, light or dark)",
                    mode
                ))?;
            }
            print_state(&controller, false, printer)
        }
        ThemeCommand::Cycle => {
            controller.cycle_theme();
            print_state(&controller, false, printer)
        }
        ThemeCommand::Watch { polls } => {
            watch(&controller, &signal, config.poll_interval(), polls, printer)
        }
    }
}

/// Builds and initializes the controller for this run.
pub(crate) fn build_controller(
    config: &FolioConfig,
    store_override: Option<&Path>,
    signal: impl AppearanceSignal + 'static,
) -> ThemeController {
    let controller = ThemeController::builder(config.open_store(store_override), signal)
        .key(config.store.key.clone())
        .build();
    controller.initialize();
    controller
}

fn print_state(controller: &ThemeController, json: bool, printer: &mut Printer) -> Result<()> {
    let document = controller.document();

    if json {
        let value = serde_json::json!({
            "theme": controller.theme(),
            "effective": controller.effective_theme(),
            "marker": document.theme_marker(),
        });
        printer.line(serde_json::to_string_pretty(&value)?)?;
        return Ok(());
    }

    let icon = controller.toggle_icon();
    printer.field("theme", styled_mode(controller.theme()))?;
    printer.field("effective", styled_effective(controller.effective_theme()))?;
    printer.field("icon", format!("{} {}", icon.glyph, icon.label))?;
    match document.theme_marker() {
        Some(value) => printer.field("marker", format!("{}=\"{}\"", THEME_ATTRIBUTE, value))?,
        None => printer.field("marker", "(none)")?,
    }
    Ok(())
}

fn print_change(change: &ThemeChange, printer: &mut Printer) -> Result<()> {
    printer.line(format!(
        "themeChange theme={} effective={}",
        styled_mode(change.theme),
        styled_effective(change.effective)
    ))?;
    Ok(())
}

/// Polls the OS signal and prints every theme change the controller emits.
pub(crate) fn watch(
    controller: &ThemeController,
    poller: &OsAppearance,
    interval: Duration,
    polls: Option<u64>,
    printer: &mut Printer,
) -> Result<()> {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = changes.clone();
    let id = controller.subscribe(move |change| sink.borrow_mut().push(*change));

    printer.line(format!(
        "watching OS appearance every {}ms (theme {}, showing {})",
        interval.as_millis(),
        styled_mode(controller.theme()),
        styled_effective(controller.effective_theme())
    ))?;
    printer.flush()?;

    let mut count = 0u64;
    while polls.map_or(true, |limit| count < limit) {
        std::thread::sleep(interval);
        poller.poll();
        count += 1;

        let pending: Vec<ThemeChange> = changes.borrow_mut().drain(..).collect();
        for change in &pending {
            print_change(change, printer)?;
        }
        printer.flush()?;
    }

    controller.unsubscribe(id);
    Ok(())
}
