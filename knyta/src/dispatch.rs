//! # Receiver-Aware Dispatch (BoundCallback)
//!
//! [`BoundCallback`] is the invocable unit produced by binding construction.
//! At construction it resolves, once, where invocation should be routed:
//!
//! 1. If the supplied receiver is a *distinct* object from the callback's
//!    bound execution context and the receiver can be notified, the receiver
//!    becomes the notification target.
//! 2. Otherwise, the callback's own context becomes the target if it can be
//!    notified.
//! 3. Otherwise no target is recorded and invocation calls the callback
//!    directly.
//!
//! When a target is recorded, invoking the binding hands the target an
//! invocable wrapper around the original callback together with the payload;
//! the target decides when and whether to actually run it. This lets an
//! enclosing component observe and sequence after a descendant's bound action
//! fires without the action's author knowing anything about the enclosure.

use crate::{Anchor, BindError, Completion, DynHandleEvent, EventArg, EventCallback, UiEvent};
use std::{fmt, marker::PhantomData, sync::Arc};

/// A bound event handler, typed by the payload it accepts.
///
/// The default payload type is the whole [`UiEvent`] union; concrete payload
/// types (for example [`ChangeEvent`](crate::ChangeEvent)) produce bindings
/// that only accept that shape.
///
/// A binding with no delegate is only obtainable through
/// [`EMPTY`](Self::EMPTY); invoking it completes immediately and never fails
/// merely because the binding was empty.
pub struct BoundCallback<T: EventArg = UiEvent> {
    callback: EventCallback,
    target: Option<Arc<dyn DynHandleEvent>>,
    _arg: PhantomData<fn(T)>,
}

impl<T: EventArg> BoundCallback<T> {
    /// An empty binding: no delegate, no notification target, invocation is
    /// an immediate no-op completion.
    pub const EMPTY: Self = Self {
        callback: EventCallback::EMPTY,
        target: None,
        _arg: PhantomData,
    };

    /// Binds `callback` for dispatch on behalf of `receiver`.
    ///
    /// The receiver is required even when it is the same object as the
    /// callback's own context; pass the owning component's anchor. An empty
    /// callback is rejected here, at construction time.
    pub fn bind(receiver: &Anchor, callback: EventCallback) -> Result<Self, BindError> {
        if !callback.has_callback() {
            return Err(BindError::EmptyCallback);
        }

        // A receiver distinct from the callback's own context takes priority,
        // so an enclosing component is notified even when the callback was
        // authored by (and anchored to) a descendant.
        let distinct = callback
            .anchor()
            .is_none_or(|anchor| !anchor.same_object(receiver));

        let target = if distinct && receiver.is_notifiable() {
            receiver.handle()
        } else {
            callback.anchor().and_then(Anchor::handle)
        };

        Ok(Self {
            callback,
            target,
            _arg: PhantomData,
        })
    }

    /// Builds a binding that always invokes `callback` directly, bypassing
    /// receiver resolution. Used by binding assembly, which performs its own
    /// post-set notification.
    pub(crate) fn direct(callback: EventCallback) -> Self {
        Self {
            callback,
            target: None,
            _arg: PhantomData,
        }
    }

    /// Whether the delegate associated with this binding is present.
    pub fn has_callback(&self) -> bool {
        self.callback.has_callback()
    }

    /// Whether invocation is routed through a notification target.
    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }

    /// Invokes the delegate associated with this binding.
    ///
    /// With no notification target the callback runs directly and its
    /// completion is returned. With a target, the target's `handle_event`
    /// receives a wrapper around the original callback plus the payload, and
    /// that call's completion is returned.
    pub fn invoke(&self, arg: T) -> Completion {
        let event = arg.into_event();
        match &self.target {
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(event = event.kind(), "invoking bound callback directly");
                self.callback.invoke(event)
            }
            Some(target) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(event = event.kind(), "routing bound callback through receiver");
                let target = Arc::clone(target);
                let callback = self.callback.clone();
                Box::pin(async move { target.handle_event_dyn(callback, event).await })
            }
        }
    }
}

impl<T: EventArg> Clone for BoundCallback<T> {
    fn clone(&self) -> Self {
        Self {
            callback: self.callback.clone(),
            target: self.target.clone(),
            _arg: PhantomData,
        }
    }
}

impl<T: EventArg> Default for BoundCallback<T> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<T: EventArg> fmt::Debug for BoundCallback<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("BoundCallback")
            .field("callback", &self.callback)
            .field("has_target", &self.has_target())
            .finish()
    }
}
