//! # Callback Normalization (EventCallback)
//!
//! [`EventCallback`] wraps any of the accepted callback shapes into one
//! uniform invocable unit that always produces an asynchronous completion.
//!
//! # Accepted shapes
//!
//! Exactly five, selected at construction time by picking the matching
//! constructor (a single type dispatch, never repeated per invocation):
//!
//! - zero-arg synchronous ([`EventCallback::from_sync`])
//! - typed-arg synchronous ([`EventCallback::from_sync_arg`])
//! - zero-arg asynchronous ([`EventCallback::from_async`])
//! - typed-arg asynchronous ([`EventCallback::from_async_arg`])
//! - no delegate at all ([`EventCallback::EMPTY`]), which completes
//!   immediately without invoking anything
//!
//! Callback outputs pass through [`IntoCompletion`], so plain `()` returns and
//! fallible `Result` returns are both accepted. Faults raised inside the
//! callback are never caught or wrapped here; they travel unchanged through
//! the returned completion.

use crate::{
    error::BoxError,
    event::{EventArg, UiEvent},
    receiver::Anchor,
};
use futures::future::{self, BoxFuture};
use std::{fmt, future::Future, sync::Arc};

/// The asynchronous completion signal produced by every invocation.
pub type Completion = BoxFuture<'static, Result<(), BoxError>>;

/// Trait for converting a callback's output into a completion result.
///
/// # Default Implementations
///
/// - `()` → completes with `Ok(())`
/// - `Result<(), E>` → `Ok` completes, `Err` surfaces on the failure channel
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid callback output",
    label = "missing `IntoCompletion` implementation",
    note = "callbacks must return `()` or `Result<(), E>` where `E` is a sendable error"
)]
pub trait IntoCompletion {
    /// Convert the output into a completion result.
    fn into_completion(self) -> Result<(), BoxError>;
}

impl IntoCompletion for () {
    fn into_completion(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<E: Into<BoxError>> IntoCompletion for Result<(), E> {
    fn into_completion(self) -> Result<(), BoxError> {
        self.map_err(Into::into)
    }
}

/// The normalized delegate, chosen once at construction.
enum CallbackKind {
    Sync(Box<dyn Fn() -> Result<(), BoxError> + Send + Sync>),
    SyncArg(Box<dyn Fn(UiEvent) -> Result<(), BoxError> + Send + Sync>),
    Async(Box<dyn Fn() -> Completion + Send + Sync>),
    AsyncArg(Box<dyn Fn(UiEvent) -> Completion + Send + Sync>),
}

impl CallbackKind {
    fn name(&self) -> &'static str {
        match self {
            Self::Sync(_) => "sync",
            Self::SyncArg(_) => "sync-arg",
            Self::Async(_) => "async",
            Self::AsyncArg(_) => "async-arg",
        }
    }
}

/// Wraps a callback delegate associated with an event.
///
/// An `EventCallback` is the uniform invocable unit: whatever shape the
/// underlying callback has, [`invoke`](Self::invoke) always yields an async
/// completion. Cloning is cheap (one `Arc` bump) and clones share the same
/// underlying delegate.
///
/// A callback may carry an explicit [`Anchor`] naming its bound execution
/// context (the object the callback logically belongs to). The anchor is
/// supplied through [`attached_to`](Self::attached_to) at construction; it is
/// never inferred from the closure itself.
#[derive(Clone)]
pub struct EventCallback {
    kind: Option<Arc<CallbackKind>>,
    anchor: Option<Anchor>,
}

impl EventCallback {
    /// An empty `EventCallback`. Invoking it completes immediately with
    /// `Ok(())` and has no side effect.
    pub const EMPTY: Self = Self {
        kind: None,
        anchor: None,
    };

    fn from_kind(kind: CallbackKind) -> Self {
        Self {
            kind: Some(Arc::new(kind)),
            anchor: None,
        }
    }

    /// Wraps a zero-argument synchronous callback.
    ///
    /// The completion is ready as soon as the call returns.
    pub fn from_sync<F, R>(callback: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: IntoCompletion,
    {
        Self::from_kind(CallbackKind::Sync(Box::new(move || {
            callback().into_completion()
        })))
    }

    /// Wraps a typed-argument synchronous callback.
    ///
    /// The payload adaption from [`UiEvent`] to `T` happens here, once; a
    /// shape mismatch at invocation time fails the completion with
    /// [`ArgMismatch`](crate::ArgMismatch).
    pub fn from_sync_arg<T, F, R>(callback: F) -> Self
    where
        T: EventArg,
        F: Fn(T) -> R + Send + Sync + 'static,
        R: IntoCompletion,
    {
        Self::from_kind(CallbackKind::SyncArg(Box::new(move |event| {
            let arg = T::from_event(event)?;
            callback(arg).into_completion()
        })))
    }

    /// Wraps a zero-argument asynchronous callback.
    ///
    /// The completion is the callback's own future; this layer adds no
    /// sequencing of its own around it.
    pub fn from_async<F, Fut>(callback: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future + Send + 'static,
        Fut::Output: IntoCompletion,
    {
        Self::from_kind(CallbackKind::Async(Box::new(move || {
            let fut = callback();
            Box::pin(async move { fut.await.into_completion() })
        })))
    }

    /// Wraps a typed-argument asynchronous callback.
    pub fn from_async_arg<T, F, Fut>(callback: F) -> Self
    where
        T: EventArg,
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future + Send + 'static,
        Fut::Output: IntoCompletion,
    {
        Self::from_kind(CallbackKind::AsyncArg(Box::new(move |event| {
            match T::from_event(event) {
                Ok(arg) => {
                    let fut = callback(arg);
                    Box::pin(async move { fut.await.into_completion() })
                }
                Err(err) => Box::pin(future::ready(Err(err.into()))),
            }
        })))
    }

    /// Records the callback's bound execution context.
    ///
    /// Receiver-aware binding compares this anchor against the supplied
    /// receiver to decide where post-event notification goes.
    #[must_use]
    pub fn attached_to(mut self, anchor: Anchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// The callback's bound execution context, if one was recorded.
    pub fn anchor(&self) -> Option<&Anchor> {
        self.anchor.as_ref()
    }

    /// Whether this callback holds a delegate.
    pub fn has_callback(&self) -> bool {
        self.kind.is_some()
    }

    /// Asynchronously invokes the delegate associated with this callback.
    ///
    /// Zero-arg shapes ignore `arg`. An empty callback completes immediately
    /// with `Ok(())`. Synchronous delegates run to completion before this
    /// call returns; their panics propagate to the caller unsuppressed.
    pub fn invoke(&self, arg: UiEvent) -> Completion {
        match self.kind.as_deref() {
            None => Box::pin(future::ready(Ok(()))),
            Some(CallbackKind::Sync(callback)) => {
                let result = callback();
                Box::pin(future::ready(result))
            }
            Some(CallbackKind::SyncArg(callback)) => {
                let result = callback(arg);
                Box::pin(future::ready(result))
            }
            Some(CallbackKind::Async(callback)) => callback(),
            Some(CallbackKind::AsyncArg(callback)) => callback(arg),
        }
    }
}

impl Default for EventCallback {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Debug for EventCallback {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("EventCallback")
            .field(
                "shape",
                &self.kind.as_deref().map_or("empty", CallbackKind::name),
            )
            .field("anchor", &self.anchor)
            .finish()
    }
}
