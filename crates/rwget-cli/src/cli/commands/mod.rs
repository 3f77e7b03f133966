//! CLI command handlers, one per download mode.

mod batch;
mod single;

pub use batch::run_batch;
pub use single::run_single;
