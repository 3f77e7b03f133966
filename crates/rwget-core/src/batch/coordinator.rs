//! Fan out one download per URL and fan the outcomes back in.
//!
//! Every request is started immediately on tokio's blocking pool and tracked
//! in a `JoinSet`. Tasks post their outcome on a single channel; a coordinator
//! task waits for the set to drain and then drops the last sender, which ends
//! the consumer loop. Outcomes are reported in the order tasks finish.

use std::path::PathBuf;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::http::HttpOptions;
use crate::report::ReportWriter;

use super::reader::UrlSet;
use super::task::{download_task, Outcome};

/// Counts for a finished batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// Downloads every entry of `urls` concurrently into `dir` and writes each
/// outcome line to `report` as it arrives.
///
/// Individual failures are reported, never propagated. A task that panics is
/// logged and counted as failed.
pub async fn run_batch(
    urls: UrlSet,
    dir: Option<PathBuf>,
    http: HttpOptions,
    report: &ReportWriter,
) -> BatchSummary {
    // Capacity 1: producers hand over one outcome at a time, like an unbuffered channel.
    let (tx, mut rx) = mpsc::channel::<Outcome>(1);
    let mut join_set = JoinSet::new();
    let mut launched = 0usize;

    for request in urls.into_requests() {
        let tx = tx.clone();
        let dir = dir.clone();
        let http = http.clone();
        tracing::debug!(url = %request.url, file = %request.filename, "launching download task");
        join_set.spawn_blocking(move || {
            let outcome = download_task(&request, dir.as_deref(), &http);
            // Receiver only goes away if the consumer was dropped.
            let _ = tx.blocking_send(outcome);
        });
        launched += 1;
    }
    tracing::info!(tasks = launched, "batch started");

    let coordinator = tokio::spawn(async move {
        let mut lost = 0usize;
        while let Some(res) = join_set.join_next().await {
            if let Err(e) = res {
                tracing::error!("download task did not complete: {}", e);
                lost += 1;
            }
        }
        drop(tx);
        lost
    });

    let mut summary = BatchSummary::default();
    while let Some(outcome) = rx.recv().await {
        if outcome.is_success() {
            summary.succeeded += 1;
        } else {
            tracing::warn!("{}", outcome);
            summary.failed += 1;
        }
        report.entry(&format!("{}\n", outcome));
    }

    match coordinator.await {
        Ok(lost) => summary.failed += lost,
        Err(e) => tracing::error!("batch coordinator failed: {}", e),
    }
    tracing::info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "batch finished"
    );
    summary
}
