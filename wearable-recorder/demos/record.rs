use std::sync::Arc;
use uuid::Uuid;

use publisher::Listener;
use sensor_common::{HeartRate, SensorType, SystemClock, XYZ};
use wearable_recorder::adapters::mock::{MockPermissionGate, MockSensor, MockSensors};
use wearable_recorder::{stop_on_signal, Reading, Recorder, RecorderConfig};

// Records simulated sensors to CSV. Optional argument: path to a JSON RecorderConfig.
#[tokio::main]
async fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match RecorderConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                return;
            }
        },
        None => RecorderConfig {
            run_for_millis: Some(5000),
            ..RecorderConfig::default()
        },
    };

    let sensors = MockSensors::from_sensors(
        MockSensor::new(SensorType::HeartRate, HeartRate::new(72)).with_noise(2.0),
        MockSensor::new(SensorType::Accelerometer, XYZ::new([0.0, 0.0, 9.81])).with_noise(0.2),
        MockSensor::new(SensorType::Gyroscope, XYZ::new([0.0, 0.0, 0.0])).with_noise(0.05),
    );

    let Some(recorder) = Recorder::create(
        &MockPermissionGate::new(true),
        &config.privilege,
        sensors.suite(),
        Arc::new(SystemClock::new()),
    )
    .await
    else {
        log::error!("Permission {} denied", config.privilege);
        return;
    };
    let recorder = Arc::new(recorder);

    let mut listener = Listener::new(|_id: Uuid, reading: Arc<Reading>| {
        log::info!(
            "{:.1}s  {}  acc {}  gyro {}",
            reading.elapsed_seconds(),
            reading.heart_rate(),
            reading.acceleration(),
            reading.angular_velocity()
        );
    });
    recorder.register_listener(&mut listener);

    if let Err(e) = recorder.start(&config.output_path, config.interval_ms) {
        log::error!("{}", e);
        return;
    }

    let handle = stop_on_signal(recorder.clone(), config.run_for_millis);
    if let Err(e) = handle.await {
        log::error!("Shutdown task failed: {}", e);
    }
    log::info!("Readings written to {}", config.output_path.display());
}
