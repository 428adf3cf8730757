pub mod clock;
pub mod sensor;

pub use crate::traits::clock::Clock;
pub use crate::traits::sensor::SensorCapability;
