//! In-memory report sink for testing.
//!
//! Captures appended blocks so tests can assert on persisted output
//! without touching the filesystem.

use crate::ports::{ReportSink, SinkError};

/// In-memory report sink for tests.
#[derive(Debug, Default)]
pub struct InMemoryReportSink {
    blocks: Vec<String>,
}

impl InMemoryReportSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all captured blocks (for test assertions).
    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    /// Returns the number of captured blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}

impl ReportSink for InMemoryReportSink {
    fn append(&mut self, block: &str) -> Result<(), SinkError> {
        self.blocks.push(block.to_string());
        Ok(())
    }
}

/// Sink whose appends always fail, for error-path tests.
#[derive(Debug, Default)]
pub struct FailingReportSink;

impl ReportSink for FailingReportSink {
    fn append(&mut self, _block: &str) -> Result<(), SinkError> {
        Err(SinkError::io("simulated append failure"))
    }
}
