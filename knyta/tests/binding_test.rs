//! Two-way binding assembly: coercion into setters plus the post-set
//! notification of the owning component.

use chrono::{NaiveDate, NaiveDateTime};
use knyta::{
    Anchor, ChangeEvent, UiEvent, bind_enum, bind_value, bind_value_with_format,
    testing::{RecordingReceiver, ValueCell},
};
use std::sync::Arc;

mod common;
use common::Theme;

#[tokio::test]
async fn change_text_sets_integer_and_notifies_once() {
    let owner = Arc::new(RecordingReceiver::new());
    let cell = ValueCell::new();

    let bound = bind_value::<i32, _>(&Anchor::notifiable(&owner), cell.setter());
    bound.invoke(ChangeEvent::text("42")).await.unwrap();

    assert_eq!(cell.get(), Some(42));
    assert_eq!(owner.count(), 1);

    // The notification carries the empty marker action, not the change event.
    let call = &owner.calls()[0];
    assert!(!call.has_callback);
    assert_eq!(call.event, UiEvent::empty());
}

#[tokio::test]
async fn optional_setter_absorbs_malformed_input_as_none() {
    let owner = Arc::new(RecordingReceiver::new());
    let cell = ValueCell::new();

    let bound = bind_value::<Option<i32>, _>(&Anchor::notifiable(&owner), cell.setter());
    bound.invoke(ChangeEvent::text("abc")).await.unwrap();

    assert_eq!(cell.get(), Some(None));
    assert_eq!(owner.count(), 1, "the lenient path still writes and notifies");
}

#[tokio::test]
async fn strict_setter_fails_before_the_write_and_the_notification() {
    let owner = Arc::new(RecordingReceiver::new());
    let cell = ValueCell::<i32>::new();

    let bound = bind_value::<i32, _>(&Anchor::notifiable(&owner), cell.setter());
    let err = bound.invoke(ChangeEvent::text("abc")).await.unwrap_err();

    assert!(err.to_string().contains("abc"), "unexpected error: {err}");
    assert_eq!(cell.get(), None);
    assert_eq!(owner.count(), 0);
}

#[tokio::test]
async fn toggle_sets_bool_without_parsing() {
    let owner = Arc::new(RecordingReceiver::new());
    let cell = ValueCell::new();

    let bound = bind_value::<bool, _>(&Anchor::notifiable(&owner), cell.setter());
    bound.invoke(ChangeEvent::toggle(true)).await.unwrap();

    assert_eq!(cell.get(), Some(true));
    assert_eq!(owner.count(), 1);
}

#[tokio::test]
async fn datetime_binding_honors_an_exact_format() {
    let owner = Arc::new(RecordingReceiver::new());
    let cell = ValueCell::new();

    let bound = bind_value_with_format::<NaiveDateTime, _>(
        &Anchor::notifiable(&owner),
        cell.setter(),
        Some("%d/%m/%Y %H:%M"),
    );
    bound.invoke(ChangeEvent::text("26/02/2024 14:30")).await.unwrap();

    let expected = NaiveDate::from_ymd_opt(2024, 2, 26)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap();
    assert_eq!(cell.get(), Some(expected));
}

#[tokio::test]
async fn datetime_binding_falls_back_to_general_parsing() {
    let owner = Arc::new(RecordingReceiver::new());
    let cell = ValueCell::new();

    let bound = bind_value_with_format::<NaiveDateTime, _>(
        &Anchor::notifiable(&owner),
        cell.setter(),
        Some("%d/%m/%Y %H:%M"),
    );
    bound
        .invoke(ChangeEvent::text("2024-02-26T14:30:00"))
        .await
        .unwrap();

    let expected = NaiveDate::from_ymd_opt(2024, 2, 26)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap();
    assert_eq!(cell.get(), Some(expected));
}

#[tokio::test]
async fn empty_datetime_string_yields_the_default_value() {
    let owner = Arc::new(RecordingReceiver::new());
    let cell = ValueCell::new();

    let bound = bind_value::<NaiveDateTime, _>(&Anchor::notifiable(&owner), cell.setter());
    bound.invoke(ChangeEvent::text("")).await.unwrap();

    assert_eq!(cell.get(), Some(NaiveDateTime::default()));
    assert_eq!(owner.count(), 1);
}

#[tokio::test]
async fn enum_binding_resolves_member_names() {
    let owner = Arc::new(RecordingReceiver::new());
    let cell = ValueCell::new();

    let bound = bind_enum::<Theme, _>(&Anchor::notifiable(&owner), cell.setter());
    bound.invoke(ChangeEvent::text("Dark")).await.unwrap();

    assert_eq!(cell.get(), Some(Theme::Dark));
    assert_eq!(owner.count(), 1);
}

#[tokio::test]
async fn enum_binding_rejects_unknown_member_names() {
    let owner = Arc::new(RecordingReceiver::new());
    let cell = ValueCell::<Theme>::new();

    let bound = bind_enum::<Theme, _>(&Anchor::notifiable(&owner), cell.setter());
    let err = bound.invoke(ChangeEvent::text("Blue")).await.unwrap_err();

    assert!(err.to_string().contains("not a member"), "unexpected error: {err}");
    assert_eq!(cell.get(), None);
    assert_eq!(owner.count(), 0);
}

#[tokio::test]
async fn inert_owner_skips_the_notification() {
    let owner = Arc::new(());
    let cell = ValueCell::new();

    let bound = bind_value::<i32, _>(&Anchor::inert(&owner), cell.setter());
    bound.invoke(ChangeEvent::text("7")).await.unwrap();

    assert_eq!(cell.get(), Some(7));
}

#[tokio::test]
async fn repeated_invocations_notify_once_each() {
    let owner = Arc::new(RecordingReceiver::new());
    let cell = ValueCell::new();

    let bound = bind_value::<i32, _>(&Anchor::notifiable(&owner), cell.setter());
    bound.invoke(ChangeEvent::text("1")).await.unwrap();
    bound.invoke(ChangeEvent::text("2")).await.unwrap();

    assert_eq!(cell.get(), Some(2));
    assert_eq!(owner.count(), 2);
}
