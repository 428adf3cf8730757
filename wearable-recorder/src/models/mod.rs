pub mod config;
pub mod reading;
pub mod sensor_suite;
pub(crate) mod shutdown;
pub(crate) mod tick_grid;
