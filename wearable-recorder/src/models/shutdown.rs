use log::{error, info};
use std::sync::Arc;
use tokio::signal;

use crate::services::Recorder;

pub(crate) struct ShutdownSignal {
    recorder: Arc<Recorder>,
}

impl ShutdownSignal {
    fn new(recorder: Arc<Recorder>) -> Self {
        Self { recorder }
    }

    async fn listen_for_shutdown(&self, run_for_millis: Option<u64>) {
        if let Some(time_to_live_millis) = run_for_millis {
            tokio::time::sleep(std::time::Duration::from_millis(time_to_live_millis)).await;
            info!("Recording time elapsed. Stopping...");
        } else {
            loop {
                match signal::ctrl_c().await {
                    Ok(()) => break,
                    Err(e) => error!("Error while waiting for Ctrl+C: {}", e),
                }
            }
            info!("Ctrl+C received. Stopping...");
        }
        self.recorder.stop();
    }
}

/// Stops `recorder` once `run_for_millis` elapses, or on Ctrl+C when no duration is given.
pub fn stop_on_signal(
    recorder: Arc<Recorder>,
    run_for_millis: Option<u64>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let shutdown_signal = ShutdownSignal::new(recorder);
        shutdown_signal.listen_for_shutdown(run_for_millis).await;
    })
}
