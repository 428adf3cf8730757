use std::fmt;

/// Represents the sensors sampled by the recorder.
///
/// # Examples
///
/// ```
/// use sensor_common::SensorType;
///
/// let sensor = SensorType::try_from("gyroscope").unwrap();
/// assert_eq!(sensor, SensorType::Gyroscope);
/// assert_eq!(sensor.to_string(), "gyroscope");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SensorType {
    HeartRate,
    Accelerometer,
    Gyroscope,
}

const HEART_RATE: &str = "heart_rate";
const ACCELEROMETER: &str = "accelerometer";
const GYROSCOPE: &str = "gyroscope";

impl SensorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorType::HeartRate => HEART_RATE,
            SensorType::Accelerometer => ACCELEROMETER,
            SensorType::Gyroscope => GYROSCOPE,
        }
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for SensorType {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            HEART_RATE => Ok(SensorType::HeartRate),
            ACCELEROMETER => Ok(SensorType::Accelerometer),
            GYROSCOPE => Ok(SensorType::Gyroscope),
            other => Err(format!("Unknown sensor type {}", other)),
        }
    }
}

/// Whether the platform may suspend a sensor, e.g. while the display is off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PausePolicy {
    #[default]
    Auto,
    Never,
}
