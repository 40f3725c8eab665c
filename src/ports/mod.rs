//! Ports: contracts the application depends on, implemented by adapters.

mod report_sink;

pub use report_sink::{ReportSink, SinkError};
