//! Testing utilities for Knyta.
//!
//! This module provides utilities to make testing bindings and receivers
//! easier.
//!
//! # Features
//!
//! - [`RecordingReceiver`]: a receiver that records every notification it is
//!   handed and then runs the wrapped callback
//! - [`RecordingReceiver::silent`]: a variant that records but never runs the
//!   callback, for verifying that the receiver owns the run/skip decision
//! - [`ValueCell`]: a shared slot for capturing setter writes

use crate::{BoxError, EventCallback, HandleEvent, UiEvent};
use std::sync::{Arc, Mutex};

/// A notification recorded by a [`RecordingReceiver`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    /// Whether the wrapped callback held a delegate.
    pub has_callback: bool,
    /// The payload the notification was dispatched with.
    pub event: UiEvent,
}

/// A receiver that records every notification it is handed.
///
/// # Example
///
/// ```rust,ignore
/// let receiver = Arc::new(RecordingReceiver::new());
/// let bound = BoundCallback::bind(&Anchor::notifiable(&receiver), callback)?;
///
/// bound.invoke(UiEvent::empty()).await?;
///
/// assert_eq!(receiver.count(), 1);
/// ```
pub struct RecordingReceiver {
    calls: Mutex<Vec<RecordedCall>>,
    run_callback: bool,
}

impl RecordingReceiver {
    /// Create a receiver that records notifications and runs the callback.
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            run_callback: true,
        }
    }

    /// Create a receiver that records notifications but never runs the
    /// wrapped callback.
    pub fn silent() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            run_callback: false,
        }
    }

    /// Get a clone of the recorded notifications.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the number of recorded notifications.
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Clear all recorded notifications.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl Default for RecordingReceiver {
    fn default() -> Self {
        Self::new()
    }
}

impl HandleEvent for RecordingReceiver {
    async fn handle_event(&self, callback: EventCallback, event: UiEvent) -> Result<(), BoxError> {
        self.calls.lock().unwrap().push(RecordedCall {
            has_callback: callback.has_callback(),
            event: event.clone(),
        });
        if self.run_callback {
            callback.invoke(event).await
        } else {
            Ok(())
        }
    }
}

/// A shared slot for capturing the value a binding setter was called with.
///
/// # Example
///
/// ```rust,ignore
/// let cell = ValueCell::new();
/// let bound = bind_value::<i32, _>(&owner, cell.setter());
///
/// bound.invoke(ChangeEvent::text("42")).await?;
///
/// assert_eq!(cell.get(), Some(42));
/// ```
pub struct ValueCell<T>(Arc<Mutex<Option<T>>>);

impl<T> ValueCell<T> {
    /// Create an empty cell.
    pub fn new() -> Self {
        Self(Arc::new(Mutex::new(None)))
    }

    /// Store a value, replacing any previous one.
    pub fn set(&self, value: T) {
        *self.0.lock().unwrap() = Some(value);
    }

    /// Take the stored value out of the cell.
    pub fn take(&self) -> Option<T> {
        self.0.lock().unwrap().take()
    }
}

impl<T: Send + 'static> ValueCell<T> {
    /// A setter closure that writes into this cell.
    pub fn setter(&self) -> impl Fn(T) + Send + Sync + 'static {
        let slot = Arc::clone(&self.0);
        move |value| *slot.lock().unwrap() = Some(value)
    }
}

impl<T: Clone> ValueCell<T> {
    /// Get a clone of the stored value.
    pub fn get(&self) -> Option<T> {
        self.0.lock().unwrap().clone()
    }
}

impl<T> Default for ValueCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ValueCell<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}
