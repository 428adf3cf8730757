use csv::{Writer, WriterBuilder};
use std::fs::File;
use std::path::Path;

use crate::errors::RecorderError;
use crate::models::reading::{Reading, ReadingRecord};

const CSV_HEADER: [&str; 8] = [
    "Seconds",
    "HeartRate",
    "AccelerationX",
    "AccelerationY",
    "AccelerationZ",
    "AngularVelocityX",
    "AngularVelocityY",
    "AngularVelocityZ",
];

/// Append-only CSV file holding one row per reading.
pub(crate) struct ReadingWriter {
    writer: Writer<File>,
}

impl ReadingWriter {
    /// Creates (or truncates) `path` and writes the header row.
    /// Returns OutputFile error if the file can't be opened for writing.
    pub(crate) fn create(path: &Path) -> Result<Self, RecorderError> {
        let file = File::create(path)
            .map_err(|e| RecorderError::OutputFile(format!("{}: {}", path.display(), e)))?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer
            .write_record(CSV_HEADER)
            .map_err(|e| RecorderError::OutputFile(format!("{}: {}", path.display(), e)))?;
        writer
            .flush()
            .map_err(|e| RecorderError::OutputFile(format!("{}: {}", path.display(), e)))?;
        Ok(Self { writer })
    }

    /// Appends one row and flushes it to the file.
    pub(crate) fn append(&mut self, reading: &Reading) -> Result<(), RecorderError> {
        self.writer
            .serialize(ReadingRecord::from(reading))
            .map_err(|e| RecorderError::WriteRecord(e.to_string()))?;
        self.writer
            .flush()
            .map_err(|e| RecorderError::WriteRecord(e.to_string()))
    }

    pub(crate) fn close(mut self) -> Result<(), RecorderError> {
        self.writer
            .flush()
            .map_err(|e| RecorderError::WriteRecord(e.to_string()))
    }
}
