//! # Crate publisher
//!
//! ## publisher
//!
//! The `publisher` crate provides a mechanism for registering and notifying listeners
//! of new events of type `T`.
//!
//! Listeners wrap a callback `Fn(Uuid, Arc<T>)`. Every registered listener receives each
//! published event, and `notify_listeners` only returns once all of them ran.
//!
//! ### Example
//!
//! ```
//! use publisher::{Listener, Publishable, Publisher};
//! use std::sync::Arc;
//! use uuid::Uuid;
//!
//! let publisher = Publisher::<String>::new();
//!
//! // Register a listener
//! let mut listener = Listener::new(|_id: Uuid, data: Arc<String>| {
//!     println!("Listener received: {}", data);
//! });
//! let listener_id = publisher.register_listener(&mut listener);
//!
//! // Notify all listeners
//! publisher.notify_listeners(Arc::new("Hello, World!".to_string()));
//!
//! // Unregister the listener
//! publisher.unregister_listener(listener_id).expect("Failed to unregister listener");
//!
//! // Verify that no listeners are left
//! assert!(publisher.is_empty());
//! ```

pub mod listener;
pub mod macros;
pub mod publisher;

pub use listener::{Callback, Listener};
pub use publisher::{Publishable, Publisher};

#[derive(PartialEq, Clone, Debug)]
pub enum PublisherError {
    ListenerNotFound(String),
}
