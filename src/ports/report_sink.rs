//! Report Sink Port - append-only persistence for rendered reports.

use thiserror::Error;

/// Port for appending rendered report blocks to a durable sink.
///
/// # Contract
///
/// Implementations must:
/// - Append; never truncate or overwrite earlier blocks
/// - Release any underlying resource before returning, whether the write
///   succeeded or failed
///
/// The wizard appends exactly one block per completed session.
pub trait ReportSink {
    /// Appends one rendered report block.
    fn append(&mut self, block: &str) -> Result<(), SinkError>;
}

/// Errors that can occur while appending to a report sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The sink location could not be opened.
    #[error("Report sink unavailable: {path}: {message}")]
    Unavailable { path: String, message: String },

    /// IO error during the append.
    #[error("IO error: {message}")]
    Io { message: String },
}

impl SinkError {
    /// Creates an unavailable-sink error.
    pub fn unavailable(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unavailable {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for SinkError {
    fn from(err: std::io::Error) -> Self {
        SinkError::io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_displays_path_and_message() {
        let err = SinkError::unavailable("/tmp/report.txt", "permission denied");
        assert_eq!(
            err.to_string(),
            "Report sink unavailable: /tmp/report.txt: permission denied"
        );
    }

    #[test]
    fn io_errors_convert_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err: SinkError = io_err.into();
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn report_sink_is_object_safe() {
        fn check<T: ReportSink + ?Sized>() {}
        check::<dyn ReportSink>();
    }
}
