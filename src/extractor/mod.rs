//! Performance-log scanning and latency extraction
//!
//! This module implements the core scan: open a log file, walk its lines in
//! order, select the ones carrying the average-latency marker, and pull the
//! integer microsecond value out of each line's trailing field. Records are
//! streamed to the caller through a sink so that output already emitted
//! survives a mid-scan failure.


use crate::{
    defaults,
    error::{AppError, Result},
    models::{LatencyRecord, ScanSummary},
};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Extracts latency samples from performance-log lines
///
/// A line of interest contains the marker substring and ends in a
/// colon-delimited field of the shape `<integer><unit-suffix>`. The token is
/// taken as everything after the last colon and before the first occurrence
/// of the unit suffix, so multi-colon labels and trailing text after the
/// unit are tolerated.
#[derive(Debug, Clone)]
pub struct LatencyExtractor {
    marker: String,
    unit_suffix: String,
}

impl Default for LatencyExtractor {
    fn default() -> Self {
        Self {
            marker: defaults::DEFAULT_MARKER.to_string(),
            unit_suffix: defaults::DEFAULT_UNIT_SUFFIX.to_string(),
        }
    }
}

impl LatencyExtractor {
    /// Create an extractor with the default marker and unit suffix
    pub fn new() -> Self {
        Self::default()
    }

    /// The marker substring that selects lines of interest
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Check whether a line contains the marker substring
    pub fn is_match(&self, line: &str) -> bool {
        line.contains(&self.marker)
    }

    /// Extract the microsecond value from a matching line
    ///
    /// Tolerates whitespace around the token and an optional leading sign.
    /// The unit suffix is optional when the entire tail is numeric.
    pub fn extract_micros(&self, line: &str) -> Result<i64> {
        let trimmed = line.trim_end();

        // Everything after the last colon; the whole line when none exists
        let tail = trimmed.rsplit(':').next().unwrap_or(trimmed);

        // Everything before the first unit suffix; the whole tail otherwise
        let token = tail.split(self.unit_suffix.as_str()).next().unwrap_or(tail).trim();

        if token.is_empty() {
            return Err(AppError::parse(format!(
                "empty latency token in line '{}'",
                trimmed
            )));
        }

        token.parse::<i64>().map_err(|e| {
            AppError::parse(format!("invalid latency token '{}': {}", token, e))
        })
    }

    /// Scan buffered input, streaming one record per matching line
    ///
    /// Records are delivered in input order. The first malformed matching
    /// line aborts the scan; records already delivered are not withdrawn.
    pub fn scan<R, F>(&self, reader: R, mut on_record: F) -> Result<ScanSummary>
    where
        R: BufRead,
        F: FnMut(&LatencyRecord) -> Result<()>,
    {
        let mut summary = ScanSummary::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            summary.record_line();

            if !self.is_match(&line) {
                continue;
            }
            summary.record_match();

            let line_number = index + 1;
            let microseconds = self.extract_micros(&line).map_err(|e| match e {
                AppError::Parse(msg) => AppError::parse(format!("line {}: {}", line_number, msg)),
                other => other,
            })?;

            let record = LatencyRecord::new(line_number, microseconds);
            on_record(&record)?;
        }

        Ok(summary)
    }

    /// Open a log file and scan it
    ///
    /// The file handle is scoped to this call and released on every exit
    /// path. Open failures surface as file access errors before any record
    /// is delivered.
    pub fn scan_file<P, F>(&self, path: P, on_record: F) -> Result<ScanSummary>
    where
        P: AsRef<Path>,
        F: FnMut(&LatencyRecord) -> Result<()>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            AppError::file_access(format!("cannot open '{}': {}", path.display(), e))
        })?;

        self.scan(BufReader::new(file), on_record)
    }
}
