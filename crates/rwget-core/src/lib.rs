pub mod config;
pub mod logging;

pub mod batch;
pub mod error;
pub mod http;
pub mod rate_limit;
pub mod report;
pub mod sequential;
pub mod storage;
pub mod url_model;

pub use error::WgetError;
