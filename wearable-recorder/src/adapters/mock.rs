//! Module Mock
//!
//! In-memory sensor capabilities and permission gate, used by the demo and the tests.

mod gaussian;

use async_trait::async_trait;
use rand::{rngs::StdRng, SeedableRng};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use sensor_common::{HeartRate, PausePolicy, SensorCapability, SensorType, XYZ};

use crate::models::sensor_suite::SensorSuite;
use crate::ports::PermissionGate;
use gaussian::GaussianNoise;

const GAUSSIAN_SENSOR_MEAN: f64 = 0f64;

/// Values a [`MockSensor`] can perturb with Gaussian noise.
pub trait Noisy: Clone + Send + Sync + 'static {
    fn with_noise(&self, noise: &GaussianNoise, rng: &mut StdRng) -> Self;
}

impl Noisy for XYZ {
    fn with_noise(&self, noise: &GaussianNoise, rng: &mut StdRng) -> Self {
        let noisy = noise.add_noise_vec(rng, self.clone().into());
        XYZ::try_from(noisy).unwrap_or_else(|_| self.clone())
    }
}

impl Noisy for HeartRate {
    fn with_noise(&self, noise: &GaussianNoise, rng: &mut StdRng) -> Self {
        HeartRate::new((self.inner() as f64 + noise.draw_sample(rng)).round() as i32)
    }
}

/// Sensor capability that reports a fixed value, optionally perturbed by Gaussian noise.
pub struct MockSensor<T> {
    sensor_type: SensorType,
    value: Mutex<T>,
    noise: Option<(GaussianNoise, Mutex<StdRng>)>,
    started: AtomicBool,
    start_calls: AtomicUsize,
    stop_calls: AtomicUsize,
    reads: AtomicUsize,
    interval: Mutex<Option<Duration>>,
    pause_policy: Mutex<PausePolicy>,
}

impl<T: Noisy> MockSensor<T> {
    pub fn new(sensor_type: SensorType, value: T) -> Self {
        Self {
            sensor_type,
            value: Mutex::new(value),
            noise: None,
            started: AtomicBool::new(false),
            start_calls: AtomicUsize::new(0),
            stop_calls: AtomicUsize::new(0),
            reads: AtomicUsize::new(0),
            interval: Mutex::new(None),
            pause_policy: Mutex::new(PausePolicy::default()),
        }
    }

    /// Adds zero-mean Gaussian noise with standard deviation `stdev` to every read.
    pub fn with_noise(mut self, stdev: f64) -> Self {
        self.noise = GaussianNoise::new(GAUSSIAN_SENSOR_MEAN, stdev)
            .map(|noise| (noise, Mutex::new(StdRng::from_entropy())));
        self
    }

    pub fn set_value(&self, value: T) {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = value;
    }

    pub fn start_calls(&self) -> usize {
        self.start_calls.load(Ordering::SeqCst)
    }

    pub fn stop_calls(&self) -> usize {
        self.stop_calls.load(Ordering::SeqCst)
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn interval(&self) -> Option<Duration> {
        *self.interval.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn pause_policy(&self) -> PausePolicy {
        *self.pause_policy.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Noisy> SensorCapability<T> for MockSensor<T> {
    fn sensor_type(&self) -> SensorType {
        self.sensor_type
    }

    fn set_pause_policy(&self, policy: PausePolicy) {
        *self.pause_policy.lock().unwrap_or_else(PoisonError::into_inner) = policy;
    }

    fn set_interval(&self, interval: Duration) {
        *self.interval.lock().unwrap_or_else(PoisonError::into_inner) = Some(interval);
    }

    fn start(&self) {
        self.start_calls.fetch_add(1, Ordering::SeqCst);
        self.started.store(true, Ordering::SeqCst);
    }

    fn stop(&self) {
        self.stop_calls.fetch_add(1, Ordering::SeqCst);
        self.started.store(false, Ordering::SeqCst);
    }

    fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    fn current_value(&self) -> T {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let value = self
            .value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        match &self.noise {
            Some((noise, rng)) => {
                let mut rng = rng.lock().unwrap_or_else(PoisonError::into_inner);
                value.with_noise(noise, &mut rng)
            }
            None => value,
        }
    }
}

/// Handles to the three mock sensors behind a [`SensorSuite`].
#[derive(Clone)]
pub struct MockSensors {
    pub heart_rate: Arc<MockSensor<HeartRate>>,
    pub acceleration: Arc<MockSensor<XYZ>>,
    pub angular_velocity: Arc<MockSensor<XYZ>>,
}

impl MockSensors {
    pub fn new(heart_rate: HeartRate, acceleration: XYZ, angular_velocity: XYZ) -> Self {
        Self::from_sensors(
            MockSensor::new(SensorType::HeartRate, heart_rate),
            MockSensor::new(SensorType::Accelerometer, acceleration),
            MockSensor::new(SensorType::Gyroscope, angular_velocity),
        )
    }

    pub fn from_sensors(
        heart_rate: MockSensor<HeartRate>,
        acceleration: MockSensor<XYZ>,
        angular_velocity: MockSensor<XYZ>,
    ) -> Self {
        Self {
            heart_rate: Arc::new(heart_rate),
            acceleration: Arc::new(acceleration),
            angular_velocity: Arc::new(angular_velocity),
        }
    }

    pub fn suite(&self) -> SensorSuite {
        SensorSuite::new(
            self.heart_rate.clone(),
            self.acceleration.clone(),
            self.angular_velocity.clone(),
        )
    }

    /// Total number of `start()` calls across the three sensors
    pub fn start_calls(&self) -> usize {
        self.heart_rate.start_calls()
            + self.acceleration.start_calls()
            + self.angular_velocity.start_calls()
    }

    /// Total number of `stop()` calls across the three sensors
    pub fn stop_calls(&self) -> usize {
        self.heart_rate.stop_calls()
            + self.acceleration.stop_calls()
            + self.angular_velocity.stop_calls()
    }

    pub fn all_started(&self) -> bool {
        self.heart_rate.is_started()
            && self.acceleration.is_started()
            && self.angular_velocity.is_started()
    }

    pub fn any_started(&self) -> bool {
        self.heart_rate.is_started()
            || self.acceleration.is_started()
            || self.angular_velocity.is_started()
    }
}

/// Permission gate with a fixed answer. Records every privilege requested.
pub struct MockPermissionGate {
    granted: bool,
    requests: Mutex<Vec<String>>,
}

impl MockPermissionGate {
    pub fn new(granted: bool) -> Self {
        Self {
            granted,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl PermissionGate for MockPermissionGate {
    async fn request(&self, privilege: &str) -> bool {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(privilege.to_string());
        self.granted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_sensor_lifecycle() {
        let sensor = MockSensor::new(SensorType::HeartRate, HeartRate::new(72));
        assert!(!sensor.is_started());
        sensor.start();
        assert!(sensor.is_started());
        sensor.stop();
        assert!(!sensor.is_started());
        assert_eq!((sensor.start_calls(), sensor.stop_calls()), (1, 1));
    }

    #[test]
    fn test_mock_sensor_constant_value() {
        let sensor = MockSensor::new(SensorType::Accelerometer, XYZ::new([0.0, 0.0, 9.8]));
        assert_eq!(sensor.current_value(), XYZ::new([0.0, 0.0, 9.8]));
        sensor.set_value(XYZ::new([1.0, 1.0, 1.0]));
        assert_eq!(sensor.current_value(), XYZ::new([1.0, 1.0, 1.0]));
        assert_eq!(sensor.reads(), 2);
    }

    #[test]
    fn test_mock_sensor_noise() {
        let stdev = 0.5;
        let sensor =
            MockSensor::new(SensorType::Gyroscope, XYZ::new([1.0, 2.0, 3.0])).with_noise(stdev);
        let value = sensor.current_value();
        for (noisy, clean) in value.inner().iter().zip([1.0, 2.0, 3.0]) {
            assert!((noisy - clean).abs() <= 6.0 * stdev);
        }
    }

    #[test]
    fn test_mock_sensors_suite_reads_every_sensor() {
        let mocks = MockSensors::new(HeartRate::new(90), XYZ::default(), XYZ::default());
        let reading = mocks.suite().sample(0);
        assert_eq!(reading.heart_rate(), HeartRate::new(90));
        assert_eq!(mocks.heart_rate.reads(), 1);
        assert_eq!(mocks.acceleration.reads(), 1);
        assert_eq!(mocks.angular_velocity.reads(), 1);
    }

    #[tokio::test]
    async fn test_mock_permission_gate() {
        let gate = MockPermissionGate::new(false);
        assert!(!gate.request("privilege").await);
        assert_eq!(gate.requests(), vec!["privilege".to_string()]);
    }
}
