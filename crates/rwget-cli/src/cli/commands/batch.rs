//! `rwget -i FILE` – download every listed URL concurrently.

use anyhow::Result;
use rwget_core::batch;
use rwget_core::config::RwgetConfig;
use rwget_core::http::HttpOptions;
use rwget_core::report::ReportWriter;
use rwget_core::storage;
use std::path::Path;

use crate::cli::Cli;

pub async fn run_batch(cli: &Cli, input: &Path, cfg: &RwgetConfig, report: &ReportWriter) -> Result<()> {
    if cli.output.is_some() {
        tracing::warn!("-O is ignored with --input; each file keeps its URL name");
    }
    if cli.rate_limit.is_some() {
        tracing::warn!("--rate-limit only applies to single downloads");
    }

    let urls = batch::read_url_set(input, &cfg.fallback_filename)?;
    if let Some(dir) = &cli.path {
        storage::ensure_dir(dir)?;
    }

    let summary = batch::run_batch(urls, cli.path.clone(), HttpOptions::from(cfg), report).await;
    if summary.failed > 0 {
        tracing::warn!(
            failed = summary.failed,
            total = summary.total(),
            "some downloads failed"
        );
    }
    Ok(())
}
