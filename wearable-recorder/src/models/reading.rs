use serde::{Deserialize, Serialize};

use sensor_common::{HeartRate, XYZ};

const MILLIS_PER_SEC: f64 = 1000.0;

/// One sampled instant: heart rate, acceleration and angular velocity stamped with the
/// session-relative offset of the tick that produced it.
///
/// # Examples
///
/// ```
/// use sensor_common::{HeartRate, XYZ};
/// use wearable_recorder::Reading;
///
/// let reading = Reading::new(
///     1500,
///     HeartRate::new(72),
///     XYZ::new([0.0, 0.0, 9.8]),
///     XYZ::new([0.0, 0.0, 0.0]),
/// );
///
/// assert_eq!(reading.elapsed_seconds(), 1.5);
/// assert_eq!(reading.heart_rate().inner(), 72);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    elapsed_millis: u64,
    heart_rate: HeartRate,
    acceleration: XYZ,
    angular_velocity: XYZ,
}

impl Reading {
    pub fn new(
        elapsed_millis: u64,
        heart_rate: HeartRate,
        acceleration: XYZ,
        angular_velocity: XYZ,
    ) -> Self {
        Self {
            elapsed_millis,
            heart_rate,
            acceleration,
            angular_velocity,
        }
    }

    pub fn elapsed_millis(&self) -> u64 {
        self.elapsed_millis
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_millis as f64 / MILLIS_PER_SEC
    }

    pub fn heart_rate(&self) -> HeartRate {
        self.heart_rate
    }

    pub fn acceleration(&self) -> &XYZ {
        &self.acceleration
    }

    pub fn angular_velocity(&self) -> &XYZ {
        &self.angular_velocity
    }
}

/// Flat CSV row for a [`Reading`]. Field names match the recording header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingRecord {
    #[serde(rename = "Seconds")]
    pub seconds: f64,
    #[serde(rename = "HeartRate")]
    pub heart_rate: i32,
    #[serde(rename = "AccelerationX")]
    pub acceleration_x: f64,
    #[serde(rename = "AccelerationY")]
    pub acceleration_y: f64,
    #[serde(rename = "AccelerationZ")]
    pub acceleration_z: f64,
    #[serde(rename = "AngularVelocityX")]
    pub angular_velocity_x: f64,
    #[serde(rename = "AngularVelocityY")]
    pub angular_velocity_y: f64,
    #[serde(rename = "AngularVelocityZ")]
    pub angular_velocity_z: f64,
}

impl From<&Reading> for ReadingRecord {
    fn from(reading: &Reading) -> Self {
        let [acceleration_x, acceleration_y, acceleration_z] = reading.acceleration.inner();
        let [angular_velocity_x, angular_velocity_y, angular_velocity_z] =
            reading.angular_velocity.inner();
        Self {
            seconds: reading.elapsed_seconds(),
            heart_rate: reading.heart_rate.inner(),
            acceleration_x,
            acceleration_y,
            acceleration_z,
            angular_velocity_x,
            angular_velocity_y,
            angular_velocity_z,
        }
    }
}
