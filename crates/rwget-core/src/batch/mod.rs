//! Batch mode (`-i FILE`): read a URL list and download every entry concurrently.
//!
//! One blocking task per URL, no cap on in-flight transfers. Each task posts a
//! single [`Outcome`]; outcomes are reported in completion order.

mod coordinator;
mod reader;
mod task;

pub use coordinator::{run_batch, BatchSummary};
pub use reader::{read_url_set, DownloadRequest, UrlSet};
pub use task::{download_task, Outcome};
