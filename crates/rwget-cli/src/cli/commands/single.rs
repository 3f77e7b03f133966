//! `rwget URL` – download one file with progress output.

use anyhow::{Context, Result};
use rwget_core::config::RwgetConfig;
use rwget_core::rate_limit::parse_rate_limit;
use rwget_core::report::ReportWriter;
use rwget_core::sequential::{self, DownloadOptions};

use crate::cli::Cli;

pub async fn run_single(cli: &Cli, url: &str, cfg: &RwgetConfig, report: &ReportWriter) -> Result<()> {
    let rate_limit = cli.rate_limit.as_deref().map(parse_rate_limit).transpose()?;
    if let Some(limit) = rate_limit {
        tracing::info!(limit, "byte ceiling set");
    }
    let opts = DownloadOptions {
        output_name: cli.output.clone(),
        directory: cli.path.clone(),
        rate_limit,
    };

    let url = url.to_string();
    let cfg = cfg.clone();
    let task_report = report.clone();
    let done = tokio::task::spawn_blocking(move || {
        sequential::download(&url, &opts, &cfg, &task_report)
    })
    .await
    .context("download task")??;

    tracing::info!(path = %done.path.display(), bytes = done.total_bytes, "saved");
    Ok(())
}
