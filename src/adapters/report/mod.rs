//! Report persistence adapters.

mod file_sink;
mod in_memory;

pub use file_sink::FileReportSink;
pub use in_memory::{FailingReportSink, InMemoryReportSink};
