//! Bookshelf - a small book inventory tracker
//!
//! Loads the catalog, runs the text menu on stdin/stdout, saves on exit.

use anyhow::{Context, Result};
use bookshelf::{
    cli::{Cli, LogLevel, Session},
    io::resolve_data_file,
    store::open_store,
};
use clap::Parser;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize tracing from --log-level
fn initialize_tracing(log_level: &LogLevel) {
    let filter = EnvFilter::new(log_level.to_filter_directive());

    // stdout belongs to the menu
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level);

    let data_file = resolve_data_file(cli.data_file.as_deref(), cli.global, cli.format)
        .context("Failed to determine data file location")?;
    info!(path = %data_file.display(), format = ?cli.format, "using data file");

    let store = open_store(cli.format, data_file);
    let stdin = io::stdin();
    let stdout = io::stdout();

    let catalog = Session::new(store, stdin.lock(), stdout.lock())
        .seed_demo(!cli.no_demo)
        .run()
        .context("Session failed")?;

    info!(records = catalog.len(), "session finished");
    Ok(())
}
