//! Binary crate for the `metar` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration and METAR entry
//! - Writing results to the terminal

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};

mod cli;
mod terminal;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cmd = cli::Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cmd.log_level));
    fmt().with_env_filter(filter).with_target(false).with_writer(std::io::stderr).init();

    cmd.run().await
}
