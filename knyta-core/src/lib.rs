//! # knyta-core
//!
//! Core types for the Knyta event binding layer.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! component libraries and renderers that don't need the full `knyta`
//! implementation crate.
//!
//! # Three-Layer Architecture
//!
//! Knyta turns raw UI events into typed setter calls and user callback
//! invocations, in three layers:
//!
//! ## Layer 1: Payload Model ([`UiEvent`])
//!
//! A tagged union over the event shapes an external event source delivers.
//! The [`EventArg`] trait bridges typed payload structs and the union at
//! callback-construction time, so no runtime downcasting ever happens.
//!
//! ## Layer 2: Callback Normalization ([`EventCallback`])
//!
//! Wraps any of the five accepted callback shapes (zero-arg/typed-arg ×
//! sync/async, plus empty) into one uniform invocable unit that always
//! produces an asynchronous [`Completion`]. Shape selection happens once, at
//! construction.
//!
//! ## Layer 3: Receiver Capability ([`HandleEvent`])
//!
//! The single outbound contract: an enclosing object implementing
//! `HandleEvent` is notified when a descendant's bound callback fires, and
//! decides when to actually run it. [`Anchor`] is the explicit context handle
//! that names an owning object for identity comparison and notification.
//!
//! # Error Types
//!
//! - [`BindError`] - caller-configuration errors at binding construction
//! - [`ArgMismatch`] - a typed callback received the wrong event variant
//! - [`BoxError`] - the pass-through channel for downstream faults

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod callback;
mod error;
mod event;
mod receiver;

pub use callback::{Completion, EventCallback, IntoCompletion};
pub use error::{ArgMismatch, BindError, BoxError};
pub use event::{
    ChangeEvent, ChangeValue, ClipboardEvent, DragEvent, ErrorEvent, EventArg, FocusEvent,
    GenericEvent, KeyboardEvent, MouseEvent, PointerEvent, ProgressEvent, TouchEvent, TouchPoint,
    UiEvent, WheelEvent,
};
pub use receiver::{Anchor, DynHandleEvent, HandleEvent};
