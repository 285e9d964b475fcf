use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Select, Text};
use metar_core::{Config, HttpDecodeService, InputController, OutputFormat, Submission};
use std::process::ExitCode;
use tracing::debug;

use crate::terminal::TerminalSurface;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "metar", version, about = "Decode METAR reports into readable text")]
pub struct Cli {
    /// Log filter used when RUST_LOG is not set, e.g. "debug" or "metar_core=debug".
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decode a METAR. Without RAW, prompts for reports until cancelled.
    Decode {
        /// Raw METAR string, e.g. "KJFK 101251Z 18010KT 10SM FEW250 22/18 A3000".
        raw: Option<String>,

        /// Print the result as an HTML fragment instead of plain text.
        #[arg(long)]
        html: bool,

        /// Base URL of the decode service; overrides the configured one.
        /// Requests go to `/api/metar` on that host; any path on the URL is ignored.
        #[arg(long)]
        url: Option<String>,

        /// Request timeout in seconds; overrides the configured one.
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Interactively set the service URL, timeout and output format.
    Configure,

    /// Print the location of the config file.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Decode { raw, html, url, timeout } => {
                let mut config = Config::load()?;
                if let Some(url) = url {
                    config.set_service_url(&url)?;
                }
                if timeout.is_some() {
                    config.timeout_secs = timeout;
                }
                if html {
                    config.format = OutputFormat::Html;
                }

                decode(&config, raw).await
            }
            Command::Configure => configure().map(|()| ExitCode::SUCCESS),
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

async fn decode(config: &Config, raw: Option<String>) -> anyhow::Result<ExitCode> {
    let service = HttpDecodeService::with_timeout(config.service_url(), config.timeout())
        .context("Failed to set up the decode service client")?;
    debug!(endpoint = %service.endpoint(), "using decode service");

    let controller = InputController::new(service);
    let mut surface = TerminalSurface::stdout(config.format);

    if let Some(raw) = raw {
        let outcome = controller.submit(&raw, &mut surface).await;
        return Ok(exit_code(outcome));
    }

    // One submission at a time: the next prompt only appears once the
    // previous result has been written.
    loop {
        let prompt = tokio::task::spawn_blocking(|| Text::new("METAR:").prompt())
            .await
            .context("METAR prompt task failed")?;
        let input = match prompt {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read METAR input"),
        };

        controller.submit(&input, &mut surface).await;
    }

    Ok(ExitCode::SUCCESS)
}

/// A one-shot decode succeeds only when a document was rendered.
fn exit_code(outcome: Submission) -> ExitCode {
    if outcome == Submission::Rendered { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    loop {
        let url = Text::new("Decode service URL:")
            .with_default(config.service_url())
            .prompt()
            .context("Failed to read service URL")?;

        match config.set_service_url(&url) {
            Ok(()) => break,
            Err(err) => eprintln!("{err}"),
        }
    }

    let current_timeout = config.timeout_secs.map(|s| s.to_string()).unwrap_or_default();
    let timeout = Text::new("Request timeout in seconds (empty for none):")
        .with_initial_value(&current_timeout)
        .with_validator(|value: &str| {
            let value = value.trim();
            if value.is_empty() || value.parse::<u64>().is_ok() {
                Ok(inquire::validator::Validation::Valid)
            } else {
                Ok(inquire::validator::Validation::Invalid("Enter a whole number of seconds".into()))
            }
        })
        .prompt()
        .context("Failed to read timeout")?;
    config.timeout_secs = parse_timeout(&timeout);

    let formats = OutputFormat::all().to_vec();
    let cursor = formats.iter().position(|f| *f == config.format).unwrap_or_default();
    config.format = Select::new("Output format:", formats)
        .with_starting_cursor(cursor)
        .prompt()
        .context("Failed to read output format")?;

    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    if let Some(timeout) = config.timeout() {
        println!("Requests time out after {}s", timeout.as_secs());
    }

    Ok(())
}

fn parse_timeout(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decode_with_overrides() {
        let cli = Cli::parse_from([
            "metar",
            "decode",
            "KJFK 101251Z",
            "--html",
            "--url",
            "http://127.0.0.1:9000",
            "--timeout",
            "5",
        ]);

        match cli.command {
            Command::Decode { raw, html, url, timeout } => {
                assert_eq!(raw.as_deref(), Some("KJFK 101251Z"));
                assert!(html);
                assert_eq!(url.as_deref(), Some("http://127.0.0.1:9000"));
                assert_eq!(timeout, Some(5));
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn decode_without_raw_is_interactive() {
        let cli = Cli::parse_from(["metar", "--log-level", "debug", "decode"]);

        assert_eq!(cli.log_level, "debug");
        assert!(matches!(cli.command, Command::Decode { raw: None, html: false, .. }));
    }

    #[test]
    fn only_rendered_outcome_exits_successfully() {
        let code = |outcome| format!("{:?}", exit_code(outcome));

        assert_eq!(code(Submission::Rendered), format!("{:?}", ExitCode::SUCCESS));
        for outcome in
            [Submission::EmptyInput, Submission::Rejected, Submission::TransportFailed]
        {
            assert_eq!(code(outcome), format!("{:?}", ExitCode::FAILURE));
        }
    }

    #[test]
    fn blank_timeout_clears_it() {
        assert_eq!(parse_timeout(""), None);
        assert_eq!(parse_timeout(" 12 "), Some(12));
    }
}
