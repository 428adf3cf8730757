use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::errors::RecorderError;
use crate::ports::HEALTH_INFO_PRIVILEGE;

const DEFAULT_OUTPUT_PATH: &str = "sensor_readings.csv";
const DEFAULT_INTERVAL_MS: u64 = 100;

/// Recording parameters. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RecorderConfig {
    pub output_path: PathBuf,
    pub interval_ms: u64,
    pub privilege: String,
    /// Stop automatically after this many milliseconds. Runs until Ctrl+C when absent.
    pub run_for_millis: Option<u64>,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            interval_ms: DEFAULT_INTERVAL_MS,
            privilege: HEALTH_INFO_PRIVILEGE.to_string(),
            run_for_millis: None,
        }
    }
}

impl RecorderConfig {
    /// Returns Config error if `json` is not a valid configuration
    pub fn from_json_str(json: &str) -> Result<Self, RecorderError> {
        let config: RecorderConfig =
            serde_json::from_str(json).map_err(|e| RecorderError::Config(e.to_string()))?;
        if config.interval_ms == 0 {
            return Err(RecorderError::InvalidInterval(config.interval_ms));
        }
        Ok(config)
    }

    /// Returns Config error if the file can't be read or parsed
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, RecorderError> {
        let json = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            RecorderError::Config(format!("{}: {}", path.as_ref().display(), e))
        })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RecorderConfig::from_json_str("{}").unwrap();
        assert_eq!(config, RecorderConfig::default());
        assert_eq!(config.interval_ms, 100);
        assert_eq!(config.privilege, HEALTH_INFO_PRIVILEGE);
    }

    #[test]
    fn test_partial_config() {
        let config =
            RecorderConfig::from_json_str(r#"{"output_path": "/tmp/run.csv", "interval_ms": 20}"#)
                .unwrap();
        assert_eq!(config.output_path, PathBuf::from("/tmp/run.csv"));
        assert_eq!(config.interval_ms, 20);
        assert_eq!(config.run_for_millis, None);
    }

    #[test]
    fn test_malformed_config() {
        let result = RecorderConfig::from_json_str(r#"{"interval_ms": "fast"}"#);
        assert!(matches!(result, Err(RecorderError::Config(_))));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let result = RecorderConfig::from_json_str(r#"{"interval_ms": 0}"#);
        assert_eq!(result, Err(RecorderError::InvalidInterval(0)));
    }

    #[test]
    fn test_missing_file() {
        let result = RecorderConfig::from_json_file("/nonexistent/recorder.json");
        assert!(matches!(result, Err(RecorderError::Config(_))));
    }
}
