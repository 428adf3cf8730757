use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use publisher::{Publishable, Publisher};
use sensor_common::Clock;

use crate::csv_sink::ReadingWriter;
use crate::models::reading::Reading;
use crate::models::sensor_suite::SensorSuite;
use crate::models::tick_grid::TickGrid;

/// Sink shared between the caller thread, which opens and closes it, and the sampling thread,
/// which only appends to it.
pub(crate) type SharedSink = Arc<Mutex<Option<ReadingWriter>>>;

/// Body of the background sampling thread for one recording session.
pub(crate) struct SamplingLoop {
    grid: TickGrid,
    clock: Arc<dyn Clock>,
    start_reference: u64,
    sensors: SensorSuite,
    sink: SharedSink,
    running: Arc<AtomicBool>,
    publisher: Publisher<Reading>,
}

impl SamplingLoop {
    pub(crate) fn new(
        interval_ms: u64,
        clock: Arc<dyn Clock>,
        start_reference: u64,
        sensors: SensorSuite,
        sink: SharedSink,
        running: Arc<AtomicBool>,
        publisher: Publisher<Reading>,
    ) -> Self {
        Self {
            grid: TickGrid::new(interval_ms),
            clock,
            start_reference,
            sensors,
            sink,
            running,
            publisher,
        }
    }

    /// Emits readings on the tick grid until the session flag is cleared.
    pub(crate) fn run(mut self) {
        log::debug!("Sampling loop started");
        while self.running.load(Ordering::SeqCst) {
            let elapsed = self
                .clock
                .now_millis()
                .saturating_sub(self.start_reference);
            match self.grid.poll(elapsed) {
                Some(offset) => self.emit(offset),
                None => self.clock.sleep_millis(self.grid.millis_until_due(elapsed)),
            }
        }
        log::debug!("Sampling loop finished");
    }

    fn emit(&self, offset_ms: u64) {
        let reading = self.sensors.sample(offset_ms);
        {
            let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
            // stop() may have closed the sink while the sensors were read
            if !self.running.load(Ordering::SeqCst) {
                log::warn!("Recording stopped, dropping reading at {} ms", offset_ms);
                return;
            }
            let Some(writer) = sink.as_mut() else {
                return;
            };
            if let Err(e) = writer.append(&reading) {
                log::error!("Error writing reading at {} ms: {}", offset_ms, e);
            }
        }
        log::debug!("Reading at {} ms", offset_ms);
        self.publisher.notify_listeners(Arc::new(reading));
    }
}
