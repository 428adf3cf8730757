use std::sync::{Arc, Mutex, PoisonError};
use uuid::Uuid;

use publisher::Listener;

type MockCallback<T> = Arc<Option<Arc<dyn Fn(&T) + Send + Sync>>>;

/// Collects every value delivered to its listener, in delivery order.
#[derive(Clone)]
pub struct SinkMock<T> {
    received: Arc<Mutex<Vec<T>>>,
    callback: MockCallback<T>,
}

impl<T> Default for SinkMock<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SinkMock<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            received: Arc::new(Mutex::new(Vec::new())),
            callback: Arc::new(None),
        }
    }

    /// Extra check run on every received value, e.g. assertions.
    pub fn register_callback<F>(&mut self, callback: F)
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.callback = Arc::new(Some(Arc::new(callback)));
    }

    /// Builds a listener that feeds this sink.
    pub fn listener(&self) -> Listener<T> {
        let sink = self.clone();
        Listener::new(move |_id: Uuid, value: Arc<T>| {
            sink.process(&value);
        })
    }

    fn process(&self, value: &T) {
        if let Some(callback) = self.callback.as_ref() {
            callback(value);
        }
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(value.clone());
    }

    pub fn received(&self) -> Vec<T> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
