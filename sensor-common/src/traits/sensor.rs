use std::time::Duration;

use crate::types::{PausePolicy, SensorType};

/// A single sensor exposed by the device sensor framework.
///
/// Values are read synchronously and may be polled at any time after `start()`.
pub trait SensorCapability<T>: Send + Sync {
    /// Returns the kind of sensor behind this capability.
    fn sensor_type(&self) -> SensorType;
    /// Configures whether the sensor may be paused by the platform.
    fn set_pause_policy(&self, policy: PausePolicy);
    /// Sets the requested sampling interval.
    fn set_interval(&self, interval: Duration);
    fn start(&self);
    fn stop(&self);
    fn is_started(&self) -> bool;
    /// Returns the most recent value produced by the sensor.
    fn current_value(&self) -> T;
}
