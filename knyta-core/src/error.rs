//! Error types for Knyta.
//!
//! The error surface is deliberately small and structured with `thiserror`:
//!
//! - [`BindError`] - caller-configuration errors raised when a binding is built
//! - [`ArgMismatch`] - a typed callback received the wrong event variant
//!
//! Faults raised inside user callbacks are never wrapped by this layer; they
//! travel unchanged through the completion's failure channel as [`BoxError`].

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while constructing a binding.
///
/// These are caller-configuration errors: they are raised immediately at
/// construction time and never deferred to invocation time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// The callback handed to `bind` holds no delegate.
    ///
    /// An empty binding is only reachable through `BoundCallback::EMPTY`,
    /// never through explicit binding construction.
    #[error("cannot bind an empty callback; use `BoundCallback::EMPTY` for a no-op binding")]
    EmptyCallback,
}

/// A typed callback was invoked with an event of the wrong shape.
///
/// Surfaced on the completion's failure channel, since the payload is only
/// known at invocation time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("callback expects a `{expected}` event, got `{actual}`")]
pub struct ArgMismatch {
    /// The event kind the callback was constructed for.
    pub expected: &'static str,
    /// The event kind that was actually delivered.
    pub actual: &'static str,
}
