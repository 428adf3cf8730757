use std::error::Error;
use std::path::Path;

use csv::Reader;
use num_enum::TryFromPrimitive;

/// Columns of a recording, in file order.
#[repr(usize)]
#[derive(Debug, Clone, Copy, PartialEq, TryFromPrimitive)]
pub enum RecordingColumn {
    Seconds,
    HeartRate,
    AccelerationX,
    AccelerationY,
    AccelerationZ,
    AngularVelocityX,
    AngularVelocityY,
    AngularVelocityZ,
}

pub const N_RECORDING_COLUMNS: usize = 8;

impl RecordingColumn {
    pub fn name(&self) -> &'static str {
        match self {
            RecordingColumn::Seconds => "Seconds",
            RecordingColumn::HeartRate => "HeartRate",
            RecordingColumn::AccelerationX => "AccelerationX",
            RecordingColumn::AccelerationY => "AccelerationY",
            RecordingColumn::AccelerationZ => "AccelerationZ",
            RecordingColumn::AngularVelocityX => "AngularVelocityX",
            RecordingColumn::AngularVelocityY => "AngularVelocityY",
            RecordingColumn::AngularVelocityZ => "AngularVelocityZ",
        }
    }
}

impl From<RecordingColumn> for usize {
    fn from(value: RecordingColumn) -> Self {
        value as usize
    }
}

/// One parsed data row of a recording.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRow {
    pub seconds: f64,
    pub heart_rate: i64,
    pub acceleration: [f64; 3],
    pub angular_velocity: [f64; 3],
}

/// Returns the header row of the recording at `file_path`.
pub fn load_header<P: AsRef<Path>>(file_path: P) -> Result<Vec<String>, Box<dyn Error>> {
    let mut rdr = Reader::from_path(file_path)?;
    Ok(rdr.headers()?.iter().map(str::to_string).collect())
}

/// Loads every data row as raw `f64` values.
pub fn load_csv<P: AsRef<Path>>(file_path: P) -> Result<Vec<Vec<f64>>, Box<dyn Error>> {
    let mut rdr = Reader::from_path(file_path)?;
    let mut data = Vec::new();

    for result in rdr.records() {
        let record = result?;
        let row = record
            .iter()
            .map(|s| s.parse::<f64>())
            .collect::<Result<Vec<f64>, _>>()?;
        data.push(row);
    }

    Ok(data)
}

/// Loads a recording, checking the header names and parsing `HeartRate` as an integer.
pub fn load_recording<P: AsRef<Path>>(file_path: P) -> Result<Vec<RecordedRow>, Box<dyn Error>> {
    let mut rdr = Reader::from_path(file_path)?;

    let headers = rdr.headers()?.clone();
    if headers.len() != N_RECORDING_COLUMNS {
        return Err(format!("Expected {} columns, found {}", N_RECORDING_COLUMNS, headers.len()).into());
    }
    for (idx, header) in headers.iter().enumerate() {
        let column = RecordingColumn::try_from(idx)?;
        if column.name() != header {
            return Err(format!("Column {} is {}, expected {}", idx, header, column.name()).into());
        }
    }

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let field = |column: RecordingColumn| -> Result<&str, Box<dyn Error>> {
            record
                .get(usize::from(column))
                .ok_or_else(|| format!("Missing column {}", column.name()).into())
        };
        let float = |column: RecordingColumn| -> Result<f64, Box<dyn Error>> {
            Ok(field(column)?.parse::<f64>()?)
        };
        rows.push(RecordedRow {
            seconds: float(RecordingColumn::Seconds)?,
            heart_rate: field(RecordingColumn::HeartRate)?.parse::<i64>()?,
            acceleration: [
                float(RecordingColumn::AccelerationX)?,
                float(RecordingColumn::AccelerationY)?,
                float(RecordingColumn::AccelerationZ)?,
            ],
            angular_velocity: [
                float(RecordingColumn::AngularVelocityX)?,
                float(RecordingColumn::AngularVelocityY)?,
                float(RecordingColumn::AngularVelocityZ)?,
            ],
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const HEADER: &str = "Seconds,HeartRate,AccelerationX,AccelerationY,AccelerationZ,AngularVelocityX,AngularVelocityY,AngularVelocityZ\n";

    fn write_temp(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("loader-{}.csv", uuid::Uuid::new_v4()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_recording() {
        let path = write_temp(&format!("{HEADER}0.0,72,0.0,0.0,9.8,0.0,0.0,0.0\n1.0,73,0.1,0.2,9.7,1e-3,-2.5,0.0\n"));
        let rows = load_recording(&path).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].heart_rate, 72);
        assert_eq!(rows[0].acceleration, [0.0, 0.0, 9.8]);
        assert_eq!(rows[1].seconds, 1.0);
        assert_eq!(rows[1].angular_velocity, [0.001, -2.5, 0.0]);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_load_header() {
        let path = write_temp(HEADER);
        let header = load_header(&path).unwrap();
        assert_eq!(header[0], RecordingColumn::Seconds.name());
        assert_eq!(header[7], RecordingColumn::AngularVelocityZ.name());
        assert!(load_recording(&path).unwrap().is_empty());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_load_recording_wrong_header() {
        let path = write_temp("Seconds,HeartRate,AccX,AccY,AccZ,GyroX,GyroY,GyroZ\n");
        assert!(load_recording(&path).is_err());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_load_recording_fractional_heart_rate() {
        let path = write_temp(&format!("{HEADER}0.0,72.5,0.0,0.0,9.8,0.0,0.0,0.0\n"));
        assert!(load_recording(&path).is_err());
        assert_eq!(load_csv(&path).unwrap()[0][1], 72.5);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_read_inexistent_csv() {
        assert!(load_csv("./test_data/sensor_readingss.csv").is_err());
    }
}
