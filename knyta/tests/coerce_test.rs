//! Value coercion: strict and lenient parsing over the closed set of
//! bindable value types.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use knyta::{
    ChangeValue, CoerceError, coerce, coerce_enum, try_coerce,
    coerce::format_datetime,
};
use rust_decimal::Decimal;

mod common;
use common::Theme;

fn text(value: impl Into<String>) -> ChangeValue {
    ChangeValue::Text(value.into())
}

#[test]
fn numbers_round_trip_through_their_string_form() {
    assert_eq!(try_coerce::<i32>(&text((-12345).to_string()), None), Some(-12345));
    assert_eq!(
        try_coerce::<i64>(&text(i64::MAX.to_string()), None),
        Some(i64::MAX)
    );
    assert_eq!(try_coerce::<u32>(&text(7_u32.to_string()), None), Some(7));
    assert_eq!(
        try_coerce::<u64>(&text(u64::MAX.to_string()), None),
        Some(u64::MAX)
    );
    assert_eq!(try_coerce::<f32>(&text(1.5_f32.to_string()), None), Some(1.5));
    assert_eq!(
        try_coerce::<f64>(&text((-0.25_f64).to_string()), None),
        Some(-0.25)
    );

    let price: Decimal = "19.99".parse().unwrap();
    assert_eq!(try_coerce::<Decimal>(&text(price.to_string()), None), Some(price));
}

#[test]
fn numeric_input_tolerates_surrounding_whitespace() {
    assert_eq!(try_coerce::<i32>(&text(" 42 "), None), Some(42));
}

#[test]
fn lenient_parsing_never_errors() {
    assert_eq!(try_coerce::<i32>(&text("abc"), None), None);
    assert_eq!(try_coerce::<f64>(&text("1.2.3"), None), None);
    assert_eq!(try_coerce::<Decimal>(&text("money"), None), None);
    assert_eq!(try_coerce::<NaiveDateTime>(&text("someday"), None), None);
    assert_eq!(try_coerce::<i64>(&ChangeValue::Toggle(true), None), None);
}

#[test]
fn strict_parsing_reports_malformed_input() {
    let err = coerce::<i32>(&text("abc"), None).unwrap_err();
    assert_eq!(
        err,
        CoerceError::Malformed {
            value: "abc".to_owned(),
            target: "i32",
        }
    );

    assert!(coerce::<f64>(&text("1.2.3"), None).is_err());
    assert!(coerce::<NaiveDateTime>(&text("someday"), None).is_err());
}

#[test]
fn bool_is_a_direct_cast_of_the_toggle() {
    assert_eq!(coerce::<bool>(&ChangeValue::Toggle(true), None), Ok(true));
    assert_eq!(coerce::<bool>(&ChangeValue::Toggle(false), None), Ok(false));
    assert_eq!(coerce::<bool>(&text("true"), None), Err(CoerceError::NotToggle));
}

#[test]
fn text_types_reject_toggle_payloads() {
    assert_eq!(
        coerce::<String>(&ChangeValue::Toggle(true), None),
        Err(CoerceError::NotText)
    );
    assert_eq!(
        coerce::<i32>(&ChangeValue::Toggle(false), None),
        Err(CoerceError::NotText)
    );
}

#[test]
fn strings_pass_through_unchanged() {
    assert_eq!(
        coerce::<String>(&text("hello"), None),
        Ok("hello".to_owned())
    );
}

#[test]
fn optional_types_absorb_failure_instead_of_erroring() {
    assert_eq!(coerce::<Option<i32>>(&text("abc"), None), Ok(None));
    assert_eq!(coerce::<Option<i32>>(&text("42"), None), Ok(Some(42)));
    assert_eq!(coerce::<Option<bool>>(&text("true"), None), Ok(None));
}

#[test]
fn empty_datetime_text_yields_the_default_never_an_error() {
    assert_eq!(
        coerce::<NaiveDateTime>(&text(""), None),
        Ok(NaiveDateTime::default())
    );
    assert_eq!(coerce::<NaiveDate>(&text(""), None), Ok(NaiveDate::default()));
    assert_eq!(
        coerce::<DateTime<Utc>>(&text(""), None),
        Ok(DateTime::<Utc>::default())
    );
}

#[test]
fn datetime_exact_format_wins_and_general_parsing_is_the_fallback() {
    let expected = NaiveDate::from_ymd_opt(2024, 2, 26)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap();

    let fmt = Some("%d/%m/%Y %H:%M");
    assert_eq!(
        coerce::<NaiveDateTime>(&text("26/02/2024 14:30"), fmt),
        Ok(expected)
    );
    assert_eq!(
        coerce::<NaiveDateTime>(&text("2024-02-26T14:30:00"), fmt),
        Ok(expected)
    );
    assert_eq!(
        coerce::<NaiveDateTime>(&text("2024-02-26T14:30:00"), None),
        Ok(expected)
    );
}

#[test]
fn dates_parse_with_and_without_a_format() {
    let expected = NaiveDate::from_ymd_opt(2024, 2, 26).unwrap();
    assert_eq!(
        coerce::<NaiveDate>(&text("26/02/2024"), Some("%d/%m/%Y")),
        Ok(expected)
    );
    assert_eq!(coerce::<NaiveDate>(&text("2024-02-26"), None), Ok(expected));
}

#[test]
fn enum_members_resolve_by_name() {
    assert_eq!(coerce_enum::<Theme>(&text("Light")), Ok(Theme::Light));
    assert_eq!(coerce_enum::<Theme>(&text("System")), Ok(Theme::System));
}

#[test]
fn unknown_enum_member_is_an_invalid_argument() {
    let err = coerce_enum::<Theme>(&text("Blue")).unwrap_err();
    assert_eq!(
        err,
        CoerceError::UnknownMember {
            value: "Blue".to_owned(),
            target: "Theme",
        }
    );
}

#[test]
fn default_datetime_renders_as_the_empty_string() {
    assert_eq!(format_datetime(NaiveDateTime::default(), None), "");
    assert_eq!(format_datetime(NaiveDateTime::default(), Some("%d/%m/%Y")), "");
}

#[test]
fn datetime_rendering_matches_its_own_coercion() {
    let value = NaiveDate::from_ymd_opt(2024, 2, 26)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap();

    let fmt = "%d/%m/%Y %H:%M";
    let rendered = format_datetime(value, Some(fmt));
    assert_eq!(rendered, "26/02/2024 14:30");
    assert_eq!(coerce::<NaiveDateTime>(&text(rendered), Some(fmt)), Ok(value));

    assert_eq!(format_datetime(value, None), "2024-02-26 14:30:00");
}
