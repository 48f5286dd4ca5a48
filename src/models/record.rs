//! Latency record and scan summary models
//!
//! A `LatencyRecord` is produced for every matching log line and carries the
//! raw microsecond value together with its source line number. Records are
//! transient: they are formatted and printed as the scan progresses.

use crate::defaults::MICROS_PER_MILLI;
use serde::{Deserialize, Serialize};

/// One extracted latency sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyRecord {
    /// 1-based line number in the source file
    pub line_number: usize,

    /// Raw latency value in microseconds
    pub microseconds: i64,
}

impl LatencyRecord {
    /// Create a new record
    pub fn new(line_number: usize, microseconds: i64) -> Self {
        Self { line_number, microseconds }
    }

    /// Latency in milliseconds
    pub fn millis(&self) -> f64 {
        self.microseconds as f64 / MICROS_PER_MILLI
    }

    /// Render the millisecond value with exactly two fractional digits
    pub fn format_millis(&self) -> String {
        format!("{:.2}", self.millis())
    }
}

/// Counters accumulated over one scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Total lines read from the file
    pub lines_scanned: usize,

    /// Lines containing the marker substring
    pub lines_matched: usize,
}

impl ScanSummary {
    /// Create an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a scanned line
    pub fn record_line(&mut self) {
        self.lines_scanned += 1;
    }

    /// Count a matching line
    pub fn record_match(&mut self) {
        self.lines_matched += 1;
    }

    /// Fraction of scanned lines that matched, as a percentage
    pub fn match_rate(&self) -> f64 {
        if self.lines_scanned == 0 {
            0.0
        } else {
            (self.lines_matched as f64 / self.lines_scanned as f64) * 100.0
        }
    }
}
