//! Module errors

use std::fmt;

use publisher::PublisherError;

/// Represents the different types of errors that can occur while recording.
#[derive(Debug, Clone, PartialEq)]
pub enum RecorderError {
    /// Error indicating that the output file could not be opened for writing.
    OutputFile(String),

    /// Error indicating that a reading could not be appended to the output file.
    WriteRecord(String),

    /// Error indicating that the requested sampling interval is not usable.
    InvalidInterval(u64),

    /// Error indicating that the listener was not found.
    ListenerNotFound(String),

    /// Error indicating that the sampling thread could not be spawned.
    Spawn(String),

    /// Error indicating that the configuration could not be read or parsed.
    Config(String),
}

impl fmt::Display for RecorderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecorderError::OutputFile(e) => write!(f, "cannot open output file: {}", e),
            RecorderError::WriteRecord(e) => write!(f, "cannot write reading: {}", e),
            RecorderError::InvalidInterval(ms) => {
                write!(f, "invalid sampling interval: {} ms", ms)
            }
            RecorderError::ListenerNotFound(e) => write!(f, "{}", e),
            RecorderError::Spawn(e) => write!(f, "cannot spawn sampling thread: {}", e),
            RecorderError::Config(e) => write!(f, "invalid configuration: {}", e),
        }
    }
}

impl std::error::Error for RecorderError {}

impl From<PublisherError> for RecorderError {
    fn from(value: PublisherError) -> Self {
        match value {
            PublisherError::ListenerNotFound(e) => RecorderError::ListenerNotFound(e),
        }
    }
}
