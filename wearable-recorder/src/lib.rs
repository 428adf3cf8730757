//! # Crate wearable-recorder
//!
//! ## wearable-recorder
//!
//! The `wearable-recorder` crate samples the heart rate sensor, accelerometer and gyroscope of a
//! wearable device on a fixed interval, streams every reading to a CSV file and forwards it to
//! registered listeners.
//!
//! Features include:
//! - Permission gated construction: a [`Recorder`] only exists once the health privilege is granted.
//! - Grid-anchored sampling: the n-th reading is stamped `n * interval`, immediately starting at zero,
//!   regardless of scheduling jitter.
//! - CSV output with a fixed header
//!   (`Seconds,HeartRate,AccelerationX,AccelerationY,AccelerationZ,AngularVelocityX,AngularVelocityY,AngularVelocityZ`).
//! - Registration of listeners to receive each reading right after it is written.
//!
//! Sensor access itself is provided by the platform through [`sensor_common::SensorCapability`].

pub mod adapters;
mod csv_sink;
pub mod errors;
pub mod models;
pub mod ports;
mod sampling;
pub mod services;

pub use errors::RecorderError;
pub use models::config::RecorderConfig;
pub use models::reading::{Reading, ReadingRecord};
pub use models::sensor_suite::SensorSuite;
pub use models::shutdown::stop_on_signal;
pub use ports::{PermissionGate, HEALTH_INFO_PRIVILEGE};
pub use services::Recorder;
