//! Helpers shared by the workspace tests: a simulated clock, a loader for recorded CSV files
//! and a listener sink that collects published values.

pub mod recording_loader;
pub mod simulated_clock;
pub mod sinks;

pub use simulated_clock::SimulatedClock;
pub use sinks::SinkMock;
