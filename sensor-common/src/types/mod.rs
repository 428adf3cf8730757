pub mod clock;
pub mod heart_rate;
pub mod sensor_type;
pub mod xyz;

pub use clock::SystemClock;
pub use heart_rate::HeartRate;
pub use sensor_type::{PausePolicy, SensorType};
pub use xyz::{N_XYZ_COORDINATES, XYZ};
