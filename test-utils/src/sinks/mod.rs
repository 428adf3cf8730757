pub mod sink_mock;

pub use sink_mock::SinkMock;
