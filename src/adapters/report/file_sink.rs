//! File Sink Adapter - append-only report log on the local filesystem.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::ports::{ReportSink, SinkError};

/// Append-only report sink backed by a single text file.
///
/// The file is opened in create+append mode for each call and the handle
/// is released when the call returns, regardless of the write outcome.
/// Successive sessions accumulate blocks rather than overwriting.
#[derive(Debug, Clone)]
pub struct FileReportSink {
    /// Location of the report log.
    path: PathBuf,
}

impl FileReportSink {
    /// Creates a sink writing to the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the sink path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for FileReportSink {
    fn append(&mut self, block: &str) -> Result<(), SinkError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| SinkError::unavailable(self.path.display().to_string(), e.to_string()))?;

        file.write_all(block.as_bytes())?;

        tracing::info!(path = %self.path.display(), "report block appended");
        Ok(())
    }
}
