use dashmap::DashMap;
use rayon::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::listener::{Callback, Listener};
use crate::PublisherError;

pub trait Publishable<T> {
    fn register_listener(&self, listener: &mut Listener<T>) -> Uuid;
    fn unregister_listener(&self, listener_id: Uuid) -> Result<(), PublisherError>;
    fn unregister_all(&self);
    fn notify_listeners(&self, data: Arc<T>);
}

/// Record of registered listeners that will be notified of updates
#[derive(Clone, Default)]
pub struct Publisher<T> {
    listeners: Arc<DashMap<Uuid, Callback<T>>>,
}

impl<T> Publisher<T> {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(DashMap::new()),
        }
    }

    // Returns true if no listeners registered
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    // Returns number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }
}

impl<T> Publishable<T> for Publisher<T>
where
    T: Send + Sync + 'static,
{
    fn register_listener(&self, listener: &mut Listener<T>) -> Uuid {
        let callback = listener.get_callback();
        let listener_id = Uuid::new_v4();
        listener.set_id(listener_id);
        self.listeners.insert(listener_id, callback);
        log::debug!("Registered listener {}", listener_id);
        listener_id
    }

    fn unregister_all(&self) {
        self.listeners.clear();
    }

    /// Returns ListenerNotFound if no id matches with any of the registered listeners
    fn unregister_listener(&self, listener_id: Uuid) -> Result<(), PublisherError> {
        self.listeners
            .remove(&listener_id)
            .map(|_| ())
            .ok_or_else(|| {
                PublisherError::ListenerNotFound(format!(
                    "Listener with id {} not found",
                    listener_id
                ))
            })
    }

    /// Calls each registered listener with the provided data. Returns after every listener ran.
    fn notify_listeners(&self, data: Arc<T>) {
        // snapshot first so callbacks never run while a map shard is locked
        let listeners: Vec<(Uuid, Callback<T>)> = self
            .listeners
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();

        listeners.into_par_iter().for_each(|(id, callback)| {
            let data = data.clone();
            callback(id, data);
        });
    }
}
