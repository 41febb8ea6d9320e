use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use folio::cli::{self, Cli};

/// Environment variable holding the log filter, e.g. `FOLIO_LOG=debug`.
const LOG_ENV: &str = "FOLIO_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    cli::run(cli, &mut std::io::stdout().lock())
}
