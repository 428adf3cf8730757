use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::JoinHandle;
use std::time::Duration;

use uuid::Uuid;

use publisher::{Listener, Publishable, Publisher};
use sensor_common::Clock;

use crate::csv_sink::ReadingWriter;
use crate::errors::RecorderError;
use crate::models::reading::Reading;
use crate::models::sensor_suite::SensorSuite;
use crate::ports::PermissionGate;
use crate::sampling::{SamplingLoop, SharedSink};

const SAMPLER_THREAD_NAME: &str = "sampler";

/// State of one recording run, from `start` to `stop`.
struct RecordingSession {
    running: Arc<AtomicBool>,
    sink: SharedSink,
    interval_ms: u64,
    start_reference: u64,
    // dropping the handle detaches the thread; it exits on its own once `running` is cleared
    _worker: JoinHandle<()>,
}

/// Samples heart rate, acceleration and angular velocity on a fixed grid, appends each reading
/// to a CSV file and notifies registered listeners.
///
/// A `Recorder` can only be obtained through [`Recorder::create`], which checks the sensor
/// privilege first.
pub struct Recorder {
    sensors: SensorSuite,
    clock: Arc<dyn Clock>,
    publisher: Publisher<Reading>,
    session: Mutex<Option<RecordingSession>>,
}

impl Recorder {
    /// Requests `privilege` from `gate` and builds a recorder if it is granted.
    ///
    /// Returns `None` when permission is denied. No sensor is touched in that case.
    pub async fn create<G>(
        gate: &G,
        privilege: &str,
        sensors: SensorSuite,
        clock: Arc<dyn Clock>,
    ) -> Option<Self>
    where
        G: PermissionGate + ?Sized,
    {
        if !gate.request(privilege).await {
            log::warn!("Permission {} denied", privilege);
            return None;
        }
        log::info!("Permission {} granted", privilege);
        Some(Self {
            sensors,
            clock,
            publisher: Publisher::new(),
            session: Mutex::new(None),
        })
    }

    /// Callback flavour of [`Recorder::create`]. `on_updated` is registered before
    /// `on_created` fires, and `on_created` fires exactly once.
    pub async fn create_with<G, F>(
        gate: &G,
        privilege: &str,
        sensors: SensorSuite,
        clock: Arc<dyn Clock>,
        mut on_updated: Listener<Reading>,
        on_created: F,
    ) where
        G: PermissionGate + ?Sized,
        F: FnOnce(Option<Arc<Recorder>>),
    {
        let recorder = Self::create(gate, privilege, sensors, clock)
            .await
            .map(|recorder| {
                recorder.register_listener(&mut on_updated);
                Arc::new(recorder)
            });
        on_created(recorder);
    }

    /// Opens `output_path`, starts the sensors and launches the sampling thread.
    ///
    /// Does nothing if a recording is already running.
    /// # Errors
    /// - InvalidInterval if `interval_ms` is zero
    /// - OutputFile if `output_path` can't be opened for writing. No sensor is started.
    /// - Spawn if the sampling thread can't be created. Sensors are stopped again.
    pub fn start<P: AsRef<Path>>(&self, output_path: P, interval_ms: u64) -> Result<(), RecorderError> {
        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        if session.is_some() {
            log::debug!("Recording already running");
            return Ok(());
        }
        if interval_ms == 0 {
            return Err(RecorderError::InvalidInterval(interval_ms));
        }

        let output_path = output_path.as_ref();
        let writer = ReadingWriter::create(output_path)?;

        let running = Arc::new(AtomicBool::new(true));
        let sink: SharedSink = Arc::new(Mutex::new(Some(writer)));
        let start_reference = self.clock.now_millis();
        let sampling = SamplingLoop::new(
            interval_ms,
            self.clock.clone(),
            start_reference,
            self.sensors.clone(),
            sink.clone(),
            running.clone(),
            self.publisher.clone(),
        );

        self.sensors.configure(Duration::from_millis(interval_ms));
        self.sensors.start_all();

        let worker = match std::thread::Builder::new()
            .name(SAMPLER_THREAD_NAME.to_string())
            .spawn(move || sampling.run())
        {
            Ok(worker) => worker,
            Err(e) => {
                running.store(false, Ordering::SeqCst);
                Self::close_sink(&sink);
                self.sensors.stop_all();
                return Err(RecorderError::Spawn(e.to_string()));
            }
        };

        log::info!(
            "Recording to {} every {} ms",
            output_path.display(),
            interval_ms
        );
        *session = Some(RecordingSession {
            running,
            sink,
            interval_ms,
            start_reference,
            _worker: worker,
        });
        Ok(())
    }

    /// Stops the current recording. Does nothing if not running.
    ///
    /// Does not wait for the sampling thread: it observes the cleared flag within one interval.
    pub fn stop(&self) {
        let Some(session) = self
            .session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        else {
            return;
        };

        session.running.store(false, Ordering::SeqCst);
        Self::close_sink(&session.sink);
        self.sensors.stop_all();
        log::info!(
            "Recording stopped after {} ms ({} ms interval)",
            self.clock
                .now_millis()
                .saturating_sub(session.start_reference),
            session.interval_ms
        );
    }

    pub fn is_running(&self) -> bool {
        self.session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Registers a listener that receives every emitted reading, after it was written.
    pub fn register_listener(&self, listener: &mut Listener<Reading>) -> Uuid {
        self.publisher.register_listener(listener)
    }

    /// Returns ListenerNotFound if `id` isn't registered
    pub fn unregister_listener(&self, id: Uuid) -> Result<(), RecorderError> {
        Ok(self.publisher.unregister_listener(id)?)
    }

    fn close_sink(sink: &SharedSink) {
        let writer = sink.lock().unwrap_or_else(PoisonError::into_inner).take();
        if let Some(writer) = writer {
            if let Err(e) = writer.close() {
                log::error!("Error closing recording: {}", e);
            }
        }
    }
}

impl Drop for Recorder {
    fn drop(&mut self) {
        self.stop();
    }
}
