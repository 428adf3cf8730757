//! # Crate sensor_common
//!
//! Shared vocabulary for the wearable recorder workspace: sensor value types and the
//! interfaces that sensor capabilities and clocks must implement.

#[doc(hidden)]
pub mod traits;
#[doc(hidden)]
pub mod types;

// Re-export traits
#[doc(inline)]
pub use traits::{Clock, SensorCapability};

// Re-export types
#[doc(inline)]
pub use types::{HeartRate, PausePolicy, SensorType, SystemClock, XYZ};
