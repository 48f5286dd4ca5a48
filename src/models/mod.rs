//! Data models for configuration and scan results

pub mod config;
pub mod record;

pub use config::Config;
pub use record::{LatencyRecord, ScanSummary};
