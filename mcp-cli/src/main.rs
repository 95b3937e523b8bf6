//! `webmcp` binary

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use webmcp_cli::{Cli, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config().context("Failed to load configuration")?;
    config
        .logging
        .initialize()
        .context("Failed to initialize logging")?;

    debug!("Using configuration: {:?}", config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(&cli.command, &config, stdin.lock(), stdout.lock())?;
    Ok(())
}
