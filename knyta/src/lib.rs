//! # knyta - Typed Event Binding and Uniform Callback Dispatch
//!
//! `knyta` is the event-binding glue of a component UI: it coerces raw UI
//! event values into typed setter calls, normalizes every accepted callback
//! shape into one async-invocable unit, and routes invocation through an
//! optional receiver so an enclosing component can observe after a
//! descendant's bound action fires.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use knyta::{Anchor, ChangeEvent, bind_value};
//!
//! // `component` is an Arc'd object implementing HandleEvent.
//! let owner = Anchor::notifiable(&component);
//!
//! // Two-way bind an i32 field; "42" arriving on a change event becomes 42,
//! // and the component is notified once after the write.
//! let bound = bind_value::<i32, _>(&owner, move |n| state.set_count(n));
//! bound.invoke(ChangeEvent::text("42")).await?;
//! ```
//!
//! Plain event handling goes through [`BoundCallback::bind`] with an
//! [`EventCallback`] of any of the five accepted shapes. See `knyta-core` for
//! the payload model and the [`HandleEvent`] receiver contract.
//!
//! This layer owns no rendering, diffing, lifecycle or routing; those are
//! collaborators reached only through [`HandleEvent`].

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub mod bind;
pub mod coerce;
pub mod dispatch;
pub mod testing;

pub use knyta_core::{
    // Context / Receiver
    Anchor,
    // Error types
    ArgMismatch,
    BindError,
    BoxError,
    // Payload model
    ChangeEvent,
    ChangeValue,
    ClipboardEvent,
    // Callback
    Completion,
    DragEvent,
    DynHandleEvent,
    ErrorEvent,
    EventArg,
    EventCallback,
    FocusEvent,
    GenericEvent,
    HandleEvent,
    IntoCompletion,
    KeyboardEvent,
    MouseEvent,
    PointerEvent,
    ProgressEvent,
    TouchEvent,
    TouchPoint,
    UiEvent,
    WheelEvent,
};

pub use bind::{bind_enum, bind_value, bind_value_with_format};
pub use coerce::{BindEnum, BindValue, CoerceError, coerce, coerce_enum, try_coerce};
pub use dispatch::BoundCallback;
