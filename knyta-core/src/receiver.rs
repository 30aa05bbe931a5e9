//! # Receiver Capability (HandleEvent)
//!
//! The single outbound contract of the binding layer: an object that wants to
//! observe its descendants' bound callbacks implements [`HandleEvent`]. When a
//! binding resolves to such a receiver, invocation is routed through the
//! receiver's `handle_event` instead of calling the callback directly, and the
//! receiver decides when (and whether) to run the wrapped callback. Typical
//! receivers run it and then mark themselves dirty for re-render.
//!
//! # Static vs Dynamic Dispatch
//!
//! [`HandleEvent`] uses native `async fn` for static dispatch. Bindings store
//! receivers type-erased, so [`DynHandleEvent`] provides the object-safe
//! counterpart; a blanket impl converts automatically.
//!
//! # Context handles
//!
//! [`Anchor`] is the explicit execution-context handle threaded through
//! binding construction. It pairs a stable object identity with an optional
//! notification handle. Identity is never inferred from closures; the caller
//! names the owning object explicitly when it builds a callback or binding.

use crate::{
    callback::{Completion, EventCallback},
    error::BoxError,
    event::UiEvent,
};
use futures::future::{self, BoxFuture};
use std::{any::Any, fmt, future::Future, sync::Arc};

/// Capability implemented by objects that receive post-event notification.
///
/// `callback` is the invocable wrapper around the originally bound callback;
/// the receiver chooses when to run it. `event` is the payload the binding was
/// invoked with.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot receive post-event notification",
    label = "missing `HandleEvent` implementation",
    note = "receivers must implement `handle_event` to opt into notification"
)]
pub trait HandleEvent: Send + Sync + 'static {
    /// Notifies the receiver that a bound callback is being dispatched.
    fn handle_event(
        &self,
        callback: EventCallback,
        event: UiEvent,
    ) -> impl Future<Output = Result<(), BoxError>> + Send;
}

/// Dynamic object-safe version of [`HandleEvent`].
pub trait DynHandleEvent: Send + Sync + 'static {
    /// Notifies the receiver (dynamic dispatch version).
    fn handle_event_dyn<'a>(
        &'a self,
        callback: EventCallback,
        event: UiEvent,
    ) -> BoxFuture<'a, Result<(), BoxError>>;
}

// Blanket implementation: any HandleEvent implements DynHandleEvent.
impl<T: HandleEvent> DynHandleEvent for T {
    fn handle_event_dyn<'a>(
        &'a self,
        callback: EventCallback,
        event: UiEvent,
    ) -> BoxFuture<'a, Result<(), BoxError>> {
        Box::pin(self.handle_event(callback, event))
    }
}

/// An explicit handle to a callback's or receiver's owning object.
///
/// An anchor carries two things: a stable identity used to decide whether two
/// handles name the same object, and an optional notification handle if the
/// object implements [`HandleEvent`]. Both come from the `Arc` the owning
/// object lives behind.
///
/// Anchors are cheap to clone and hold the object alive for as long as any
/// binding built from them exists.
#[derive(Clone)]
pub struct Anchor {
    id: usize,
    // Keeps the identity address valid: the allocator cannot hand `id` out
    // to a different object while any clone of this anchor exists.
    _owner: Arc<dyn Any + Send + Sync>,
    notify: Option<Arc<dyn DynHandleEvent>>,
}

impl Anchor {
    /// An anchor for an object that implements the notification capability.
    pub fn notifiable<T: HandleEvent>(owner: &Arc<T>) -> Self {
        Self {
            id: Arc::as_ptr(owner) as usize,
            _owner: Arc::clone(owner) as Arc<dyn Any + Send + Sync>,
            notify: Some(Arc::clone(owner) as Arc<dyn DynHandleEvent>),
        }
    }

    /// An anchor for an object without the notification capability.
    ///
    /// Bindings anchored to an inert object invoke their callback directly.
    pub fn inert<T: Send + Sync + 'static>(owner: &Arc<T>) -> Self {
        Self {
            id: Arc::as_ptr(owner) as usize,
            _owner: Arc::clone(owner) as Arc<dyn Any + Send + Sync>,
            notify: None,
        }
    }

    /// Whether this anchor and `other` name the same underlying object.
    pub fn same_object(&self, other: &Self) -> bool {
        self.id == other.id
    }

    /// Whether the anchored object can receive post-event notification.
    pub fn is_notifiable(&self) -> bool {
        self.notify.is_some()
    }

    /// The anchored object's notification handle, if it has the capability.
    pub fn handle(&self) -> Option<Arc<dyn DynHandleEvent>> {
        self.notify.clone()
    }

    /// Routes `callback` and `event` through the anchored object's
    /// notification hook, or completes immediately if the object is inert.
    pub fn notify(&self, callback: EventCallback, event: UiEvent) -> Completion {
        match &self.notify {
            Some(target) => {
                let target = Arc::clone(target);
                Box::pin(async move { target.handle_event_dyn(callback, event).await })
            }
            None => Box::pin(future::ready(Ok(()))),
        }
    }
}

impl fmt::Debug for Anchor {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Anchor")
            .field("id", &self.id)
            .field("notifiable", &self.is_notifiable())
            .finish()
    }
}
