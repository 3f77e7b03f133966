//! CLI for rwget, a wget-style downloader.

mod commands;

use anyhow::{anyhow, Result};
use clap::Parser;
use rwget_core::config::{self, RwgetConfig};
use rwget_core::report::ReportWriter;
use rwget_core::WgetError;
use std::path::{Path, PathBuf};

use commands::{run_batch, run_single};

/// Top-level CLI for rwget.
#[derive(Debug, Parser)]
#[command(name = "rwget", version)]
#[command(about = "rwget: fetch files over HTTP, wget style", long_about = None)]
pub struct Cli {
    /// URL to download (not needed with --input).
    pub url: Option<String>,

    /// Save the downloaded file under a different name.
    #[arg(short = 'O', long = "output", value_name = "NAME")]
    pub output: Option<String>,

    /// Directory to save downloaded files into (created if missing).
    #[arg(short = 'P', long = "path", value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Abort once more than this many bytes were received (e.g. 400k or 2M).
    #[arg(short = 'r', long = "rate-limit", value_name = "LIMIT")]
    pub rate_limit: Option<String>,

    /// Write the report to wget-log instead of the terminal.
    #[arg(short = 'B', long)]
    pub background: bool,

    /// Download every URL listed (one per line) in FILE concurrently.
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Mirror a website (not supported; accepted for compatibility).
    #[arg(short = 'm', long)]
    pub mirror: bool,
}

/// What a parsed command line asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum CliCommand<'a> {
    /// Download a single URL with progress output.
    Single { url: &'a str },
    /// Download every URL of a list file concurrently.
    Batch { input: &'a Path },
}

impl Cli {
    /// `--input` wins over a positional URL; one of them is required.
    pub fn command(&self) -> Result<CliCommand<'_>, WgetError> {
        if let Some(input) = &self.input {
            return Ok(CliCommand::Batch { input });
        }
        match self.url.as_deref() {
            Some(url) => Ok(CliCommand::Single { url }),
            None => Err(WgetError::MissingUrl),
        }
    }

    /// Background mode captures the whole report for `wget-log`; the console
    /// only ever sees the notice.
    pub fn report_writer(&self) -> ReportWriter {
        if self.background {
            ReportWriter::buffered()
        } else {
            ReportWriter::console()
        }
    }

    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init().unwrap_or_else(|e| {
            tracing::warn!("using default config: {:#}", e);
            RwgetConfig::default()
        });
        tracing::debug!("loaded config: {:?}", cfg);
        cli.run(&cfg).await
    }

    pub async fn run(&self, cfg: &RwgetConfig) -> Result<()> {
        if self.mirror {
            tracing::warn!("--mirror is not supported; downloading normally");
        }
        let command = match self.command() {
            Ok(command) => command,
            Err(err) => {
                println!("{}", err);
                return Err(err.into());
            }
        };

        if self.background {
            println!("{}", background_notice(cfg));
        }
        let report = self.report_writer();

        let result = match command {
            CliCommand::Single { url } => run_single(self, url, cfg, &report).await,
            CliCommand::Batch { input } => run_batch(self, input, cfg, &report).await,
        };

        if let Err(err) = &result {
            if let Some(e) = err.downcast_ref::<WgetError>() {
                report.entry(&e.report_line());
            }
        }
        if report.is_buffered() {
            // Not a download error: make sure main prints it.
            report
                .finish(Path::new(&cfg.log_file_name))
                .map_err(|e| anyhow!("flushing background log: {}", e))?;
        }
        result
    }
}

/// Printed once before a background run.
pub fn background_notice(cfg: &RwgetConfig) -> String {
    format!("Output will be written to {}", cfg.log_file_name)
}

#[cfg(test)]
mod tests;
