//! # Binding Assembly
//!
//! Composes value coercion, callback normalization and receiver-aware
//! dispatch into ready-to-use two-way binding handlers.
//!
//! A value binding built by [`bind_value`] does three things per invocation:
//! extract the raw value from the incoming change event, coerce it, and call
//! the setter. It then signals an empty marker action through the owner's
//! notification hook, so the owning component refreshes after the write even
//! though the caller supplied no explicit receiver. One invocation produces
//! exactly one such notification.
//!
//! Strictness is encoded in the setter's value type: a setter taking
//! `Option<i32>` receives `None` for malformed input, while a setter taking
//! `i32` makes the whole invocation fail with a [`CoerceError`] before the
//! setter or the notification run.
//!
//! Every primitive specialization is a monomorphized instance of the same
//! generic assembly; there is one code path, not one per type.

use crate::{
    Anchor, BoxError, ChangeEvent, ChangeValue, EventCallback, UiEvent,
    coerce::{BindEnum, BindValue, CoerceError, coerce, coerce_enum},
    dispatch::BoundCallback,
};

/// Builds a two-way binding for a setter over any bindable value type.
pub fn bind_value<T, F>(owner: &Anchor, setter: F) -> BoundCallback<ChangeEvent>
where
    T: BindValue,
    F: Fn(T) + Send + Sync + 'static,
{
    bind_value_with_format(owner, setter, None)
}

/// Builds a two-way binding with an explicit date/time format pattern.
///
/// The format participates in coercion for date/time value types and is
/// ignored by every other type.
pub fn bind_value_with_format<T, F>(
    owner: &Anchor,
    setter: F,
    format: Option<&str>,
) -> BoundCallback<ChangeEvent>
where
    T: BindValue,
    F: Fn(T) + Send + Sync + 'static,
{
    let format = format.map(str::to_owned);
    assemble(owner, setter, move |raw| coerce::<T>(raw, format.as_deref()))
}

/// Builds a two-way binding for a setter over a member-named value type.
///
/// This is the generic fallback path; value types that are neither bindable
/// primitives nor [`BindEnum`] implementors are rejected at compile time.
pub fn bind_enum<T, F>(owner: &Anchor, setter: F) -> BoundCallback<ChangeEvent>
where
    T: BindEnum,
    F: Fn(T) + Send + Sync + 'static,
{
    assemble(owner, setter, coerce_enum::<T>)
}

fn assemble<T, F, P>(owner: &Anchor, setter: F, parse: P) -> BoundCallback<ChangeEvent>
where
    T: Send + 'static,
    F: Fn(T) + Send + Sync + 'static,
    P: Fn(&ChangeValue) -> Result<T, CoerceError> + Send + Sync + 'static,
{
    let notify = owner.clone();
    let callback = EventCallback::from_async_arg(move |event: ChangeEvent| {
        // Coerce and write synchronously, then notify. A strict-coercion
        // failure fails the completion before either of those happens.
        let applied = match parse(&event.value) {
            Ok(value) => {
                setter(value);
                Ok(())
            }
            Err(err) => Err(err),
        };
        let notify = notify.clone();
        async move {
            applied.map_err(BoxError::from)?;
            notify.notify(EventCallback::EMPTY, UiEvent::empty()).await
        }
    })
    .attached_to(owner.clone());

    BoundCallback::direct(callback)
}
