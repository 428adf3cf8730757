use std::sync::Arc;
use std::time::Duration;

use sensor_common::{HeartRate, PausePolicy, SensorCapability, XYZ};

use crate::models::reading::Reading;

/// The three sensor capabilities sampled on every tick.
#[derive(Clone)]
pub struct SensorSuite {
    heart_rate: Arc<dyn SensorCapability<HeartRate>>,
    acceleration: Arc<dyn SensorCapability<XYZ>>,
    angular_velocity: Arc<dyn SensorCapability<XYZ>>,
}

impl SensorSuite {
    pub fn new(
        heart_rate: Arc<dyn SensorCapability<HeartRate>>,
        acceleration: Arc<dyn SensorCapability<XYZ>>,
        angular_velocity: Arc<dyn SensorCapability<XYZ>>,
    ) -> Self {
        Self {
            heart_rate,
            acceleration,
            angular_velocity,
        }
    }

    /// Disables platform pausing and requests `interval` on every sensor.
    pub(crate) fn configure(&self, interval: Duration) {
        self.heart_rate.set_pause_policy(PausePolicy::Never);
        self.heart_rate.set_interval(interval);
        self.acceleration.set_pause_policy(PausePolicy::Never);
        self.acceleration.set_interval(interval);
        self.angular_velocity.set_pause_policy(PausePolicy::Never);
        self.angular_velocity.set_interval(interval);
    }

    pub(crate) fn start_all(&self) {
        self.heart_rate.start();
        self.acceleration.start();
        self.angular_velocity.start();
        log::info!(
            "Started sensors: {}, {}, {}",
            self.heart_rate.sensor_type(),
            self.acceleration.sensor_type(),
            self.angular_velocity.sensor_type()
        );
    }

    pub(crate) fn stop_all(&self) {
        self.heart_rate.stop();
        self.acceleration.stop();
        self.angular_velocity.stop();
        log::info!("Stopped sensors");
    }

    /// Reads the three sensors one after another and stamps the result with `elapsed_millis`.
    pub(crate) fn sample(&self, elapsed_millis: u64) -> Reading {
        let heart_rate = self.heart_rate.current_value();
        let acceleration = self.acceleration.current_value();
        let angular_velocity = self.angular_velocity.current_value();
        Reading::new(elapsed_millis, heart_rate, acceleration, angular_velocity)
    }
}
