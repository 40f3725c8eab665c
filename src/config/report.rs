//! Report sink configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Report sink configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Location of the append-only report log
    #[serde(default = "default_report_path")]
    pub path: PathBuf,
}

impl ReportConfig {
    /// Validate report configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyReportPath);
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: default_report_path(),
        }
    }
}

fn default_report_path() -> PathBuf {
    PathBuf::from("rehab_report.txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_rehab_report() {
        let config = ReportConfig::default();
        assert_eq!(config.path, PathBuf::from("rehab_report.txt"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_path_fails_validation() {
        let config = ReportConfig {
            path: PathBuf::new(),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::EmptyReportPath)
        ));
    }
}
