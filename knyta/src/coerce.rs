//! # Value Coercion
//!
//! Pure conversions from a change event's raw value into strongly typed
//! values. One generic entry point per strictness level covers the whole
//! closed set of supported types:
//!
//! - [`coerce`] is the strict path: malformed input is a [`CoerceError`].
//! - [`try_coerce`] is the lenient path: malformed input is `None`, never an
//!   error. Binding an `Option<T>` setter uses this path implicitly, since
//!   `Option<T>` absorbs failure as `None` in its own [`BindValue`] impl.
//!
//! All parsing is locale-invariant. Date/time types additionally accept an
//! exact format pattern (chrono `strftime` syntax) with fallback to general
//! ISO-8601 parsing; an empty raw string yields the type's default value.
//!
//! Enum values take a separate path, [`coerce_enum`], which resolves a raw
//! string against the member names a type declares through [`BindEnum`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use knyta_core::ChangeValue;
use thiserror::Error;

/// Errors produced by the strict coercion path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoerceError {
    /// The target type needs a text value but the event carried a toggle.
    #[error("expected a text value, got a toggle")]
    NotText,

    /// The target type needs a toggle value but the event carried text.
    #[error("expected a toggle value, got text")]
    NotToggle,

    /// The raw text does not parse as the target type.
    #[error("cannot parse {value:?} as {target}")]
    Malformed {
        /// The offending raw text.
        value: String,
        /// Name of the target type.
        target: &'static str,
    },

    /// The raw text is not a recognized member name of the target enum.
    #[error("{value:?} is not a member of {target}")]
    UnknownMember {
        /// The offending raw text.
        value: String,
        /// Name of the target enum type.
        target: &'static str,
    },
}

/// A value type a change event can be coerced into.
///
/// The set of implementations is closed over the primitive binding types:
/// `String`, `bool`, the integer and floating point types, `Decimal`, the
/// chrono date/time types, and `Option<T>` of any of these. Other value
/// types are not bindable.
#[diagnostic::on_unimplemented(
    message = "two-way binding does not accept values of type `{Self}`",
    label = "`{Self}` is not a bindable value type",
    note = "to read and write this value type, wrap it in a property of type string with suitable getters and setters"
)]
pub trait BindValue: Sized + Send + 'static {
    /// Strict parse. `format` applies to date/time types only and is ignored
    /// by the others.
    fn parse(raw: &ChangeValue, format: Option<&str>) -> Result<Self, CoerceError>;

    /// Lenient parse: yields `None` on failure, never an error.
    fn try_parse(raw: &ChangeValue, format: Option<&str>) -> Option<Self> {
        Self::parse(raw, format).ok()
    }
}

/// Strictly coerces a raw change value into `T`.
pub fn coerce<T: BindValue>(raw: &ChangeValue, format: Option<&str>) -> Result<T, CoerceError> {
    T::parse(raw, format)
}

/// Leniently coerces a raw change value into `T`, yielding `None` on failure.
pub fn try_coerce<T: BindValue>(raw: &ChangeValue, format: Option<&str>) -> Option<T> {
    T::try_parse(raw, format)
}

fn text(raw: &ChangeValue) -> Result<&str, CoerceError> {
    match raw {
        ChangeValue::Text(value) => Ok(value),
        ChangeValue::Toggle(_) => Err(CoerceError::NotText),
    }
}

impl BindValue for String {
    fn parse(raw: &ChangeValue, _format: Option<&str>) -> Result<Self, CoerceError> {
        Ok(text(raw)?.to_owned())
    }
}

impl BindValue for bool {
    // Direct cast from the toggle payload; booleans are never parsed from text.
    fn parse(raw: &ChangeValue, _format: Option<&str>) -> Result<Self, CoerceError> {
        match raw {
            ChangeValue::Toggle(value) => Ok(*value),
            ChangeValue::Text(_) => Err(CoerceError::NotToggle),
        }
    }
}

macro_rules! impl_bind_number {
    ($($ty:ty => $name:literal),* $(,)?) => {$(
        impl BindValue for $ty {
            fn parse(raw: &ChangeValue, _format: Option<&str>) -> Result<Self, CoerceError> {
                let text = text(raw)?.trim();
                text.parse().map_err(|_| CoerceError::Malformed {
                    value: text.to_owned(),
                    target: $name,
                })
            }
        }
    )*};
}

impl_bind_number! {
    i32 => "i32",
    i64 => "i64",
    u32 => "u32",
    u64 => "u64",
    f32 => "f32",
    f64 => "f64",
    rust_decimal::Decimal => "decimal",
}

macro_rules! impl_bind_temporal {
    ($($ty:ty => $name:literal, |$text:ident, $fmt:ident| $exact:expr;)*) => {$(
        impl BindValue for $ty {
            fn parse(raw: &ChangeValue, format: Option<&str>) -> Result<Self, CoerceError> {
                let $text = text(raw)?;
                if $text.is_empty() {
                    return Ok(Self::default());
                }
                if let Some($fmt) = format {
                    if let Ok(parsed) = $exact {
                        return Ok(parsed);
                    }
                }
                $text.parse().map_err(|_| CoerceError::Malformed {
                    value: $text.to_owned(),
                    target: $name,
                })
            }
        }
    )*};
}

impl_bind_temporal! {
    NaiveDateTime => "datetime", |value, fmt| NaiveDateTime::parse_from_str(value, fmt);
    NaiveDate => "date", |value, fmt| NaiveDate::parse_from_str(value, fmt);
    DateTime<Utc> => "utc datetime",
        |value, fmt| NaiveDateTime::parse_from_str(value, fmt).map(|naive| naive.and_utc());
}

// The lenient counterpart of every type: failure becomes `None`.
impl<T: BindValue> BindValue for Option<T> {
    fn parse(raw: &ChangeValue, format: Option<&str>) -> Result<Self, CoerceError> {
        Ok(T::try_parse(raw, format))
    }
}

/// A value type bindable through its member names.
///
/// This is the deliberate restriction of the generic binding fallback: only
/// types that explicitly declare their named members may be bound this way.
/// Anything else is rejected at compile time with the note below instead of
/// silently doing the wrong thing at runtime.
#[diagnostic::on_unimplemented(
    message = "member-name binding does not accept values of type `{Self}`",
    label = "`{Self}` does not declare bindable member names",
    note = "to read and write this value type, wrap it in a property of type string with suitable getters and setters, or implement `BindEnum` for it"
)]
pub trait BindEnum: Sized + Send + 'static {
    /// Resolves a member by its name, `None` if the name is not recognized.
    fn from_name(name: &str) -> Option<Self>;

    /// The type name used in diagnostics.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Coerces a raw change value into an enum member by name.
pub fn coerce_enum<T: BindEnum>(raw: &ChangeValue) -> Result<T, CoerceError> {
    let name = text(raw)?;
    T::from_name(name).ok_or_else(|| CoerceError::UnknownMember {
        value: name.to_owned(),
        target: T::type_name(),
    })
}

/// Renders a date/time back into the string form two-way binding reads from.
///
/// The default value renders as the empty string, mirroring how coercion
/// treats an empty raw string.
pub fn format_datetime(value: NaiveDateTime, format: Option<&str>) -> String {
    if value == NaiveDateTime::default() {
        String::new()
    } else {
        match format {
            Some(pattern) => value.format(pattern).to_string(),
            None => value.to_string(),
        }
    }
}
