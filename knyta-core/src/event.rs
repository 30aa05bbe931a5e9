//! UI event payload model.
//!
//! [`UiEvent`] is a tagged union over the event shapes an external event
//! source can deliver. Payloads are immutable; this layer never constructs
//! them, it only routes them into callbacks and coerces their values.
//!
//! The [`EventArg`] trait is the construction-time bridge between a typed
//! payload struct and the union: a callback taking a concrete payload type is
//! adapted to the union exactly once, when the callback is built. A shape
//! mismatch at invocation time surfaces as [`ArgMismatch`] on the completion's
//! failure channel rather than as a panic.

use crate::error::ArgMismatch;

/// The raw value carried by a change event: text for inputs and selects,
/// a toggle for checkboxes.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeValue {
    /// A string-valued control.
    Text(String),
    /// A boolean-valued control.
    Toggle(bool),
}

impl Default for ChangeValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for ChangeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ChangeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for ChangeValue {
    fn from(value: bool) -> Self {
        Self::Toggle(value)
    }
}

/// An event with no dedicated payload beyond its type name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenericEvent {
    /// The event type name as reported by the source, e.g. `"click"`.
    pub name: String,
}

/// A value change on a form control.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChangeEvent {
    /// The control's new raw value.
    pub value: ChangeValue,
}

impl ChangeEvent {
    /// A change event carrying a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: ChangeValue::Text(value.into()),
        }
    }

    /// A change event carrying a toggle value.
    pub fn toggle(value: bool) -> Self {
        Self {
            value: ChangeValue::Toggle(value),
        }
    }
}

/// A cut, copy or paste event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClipboardEvent {
    /// The event type name (`"cut"`, `"copy"` or `"paste"`).
    pub name: String,
}

/// A drag-and-drop event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DragEvent {
    /// Pointer position in screen coordinates.
    pub screen_x: f64,
    /// Pointer position in screen coordinates.
    pub screen_y: f64,
    /// Pointer position in client coordinates.
    pub client_x: f64,
    /// Pointer position in client coordinates.
    pub client_y: f64,
}

/// A resource or script error reported by the event source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorEvent {
    /// Human-readable error description.
    pub message: String,
    /// Name of the file the error originated in.
    pub filename: String,
    /// Line number the error originated on.
    pub lineno: i64,
    /// Column number the error originated on.
    pub colno: i64,
}

/// A focus gained/lost event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FocusEvent {
    /// The event type name (`"focus"`, `"blur"`, `"focusin"` or `"focusout"`).
    pub name: String,
}

/// A keyboard event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyboardEvent {
    /// The key value, e.g. `"Enter"`.
    pub key: String,
    /// The physical key code, e.g. `"KeyA"`.
    pub code: String,
    /// Key location (standard, left, right, numpad).
    pub location: i64,
    /// Whether the key is being held down.
    pub repeat: bool,
    /// Modifier state.
    pub ctrl_key: bool,
    /// Modifier state.
    pub shift_key: bool,
    /// Modifier state.
    pub alt_key: bool,
    /// Modifier state.
    pub meta_key: bool,
}

/// A mouse event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MouseEvent {
    /// Click count for this button.
    pub detail: i64,
    /// Pointer position in screen coordinates.
    pub screen_x: f64,
    /// Pointer position in screen coordinates.
    pub screen_y: f64,
    /// Pointer position in client coordinates.
    pub client_x: f64,
    /// Pointer position in client coordinates.
    pub client_y: f64,
    /// The button that triggered the event.
    pub button: i64,
    /// Bitmask of buttons currently pressed.
    pub buttons: i64,
    /// Modifier state.
    pub ctrl_key: bool,
    /// Modifier state.
    pub shift_key: bool,
    /// Modifier state.
    pub alt_key: bool,
    /// Modifier state.
    pub meta_key: bool,
}

/// A pointer event (mouse, pen or touch contact).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointerEvent {
    /// Unique identifier of the pointer causing the event.
    pub pointer_id: i64,
    /// Contact geometry width.
    pub width: f64,
    /// Contact geometry height.
    pub height: f64,
    /// Normalized pressure, 0.0 to 1.0.
    pub pressure: f64,
    /// Pen tilt along the X axis, in degrees.
    pub tilt_x: f64,
    /// Pen tilt along the Y axis, in degrees.
    pub tilt_y: f64,
    /// Device type: `"mouse"`, `"pen"` or `"touch"`.
    pub pointer_type: String,
    /// Whether this is the primary pointer of its type.
    pub is_primary: bool,
    /// Pointer position in client coordinates.
    pub client_x: f64,
    /// Pointer position in client coordinates.
    pub client_y: f64,
}

/// An upload/download progress event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgressEvent {
    /// Whether the total amount of work is known.
    pub length_computable: bool,
    /// Units of work already performed.
    pub loaded: i64,
    /// Total units of work, if computable.
    pub total: i64,
}

/// A single contact point of a touch event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TouchPoint {
    /// Identifier of this contact, stable across its lifetime.
    pub identifier: i64,
    /// Contact position in client coordinates.
    pub client_x: f64,
    /// Contact position in client coordinates.
    pub client_y: f64,
}

/// A touch event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TouchEvent {
    /// Contact points currently on the surface.
    pub touches: Vec<TouchPoint>,
    /// Contact points whose state changed in this event.
    pub changed_touches: Vec<TouchPoint>,
}

/// A wheel/scroll event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WheelEvent {
    /// Scroll amount along the X axis.
    pub delta_x: f64,
    /// Scroll amount along the Y axis.
    pub delta_y: f64,
    /// Scroll amount along the Z axis.
    pub delta_z: f64,
    /// Unit of the delta values (pixel, line or page).
    pub delta_mode: i64,
}

/// A UI event delivered by the external event source.
///
/// The variant dictates which extra fields the payload carries; for example
/// the [`Change`](UiEvent::Change) variant carries the raw value that value
/// coercion consumes. Payloads are immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// An event with no dedicated payload.
    Generic(GenericEvent),
    /// A form control value change.
    Change(ChangeEvent),
    /// A clipboard operation.
    Clipboard(ClipboardEvent),
    /// A drag-and-drop operation.
    Drag(DragEvent),
    /// An error report.
    Error(ErrorEvent),
    /// A focus change.
    Focus(FocusEvent),
    /// A keyboard action.
    Keyboard(KeyboardEvent),
    /// A mouse action.
    Mouse(MouseEvent),
    /// A pointer action.
    Pointer(PointerEvent),
    /// A progress report.
    Progress(ProgressEvent),
    /// A touch action.
    Touch(TouchEvent),
    /// A wheel/scroll action.
    Wheel(WheelEvent),
}

impl UiEvent {
    /// The empty marker payload, used when a notification carries no event of
    /// its own (for example the post-set notification of a two-way binding).
    pub fn empty() -> Self {
        Self::Generic(GenericEvent::default())
    }

    /// A short static name for the event's shape.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Generic(_) => "generic",
            Self::Change(_) => "change",
            Self::Clipboard(_) => "clipboard",
            Self::Drag(_) => "drag",
            Self::Error(_) => "error",
            Self::Focus(_) => "focus",
            Self::Keyboard(_) => "keyboard",
            Self::Mouse(_) => "mouse",
            Self::Pointer(_) => "pointer",
            Self::Progress(_) => "progress",
            Self::Touch(_) => "touch",
            Self::Wheel(_) => "wheel",
        }
    }
}

impl Default for UiEvent {
    fn default() -> Self {
        Self::empty()
    }
}

/// Conversion between a typed event payload and the [`UiEvent`] union.
///
/// Implemented by every payload struct and by [`UiEvent`] itself (identity).
/// Callbacks taking a typed payload are adapted through this trait once, at
/// construction time; no runtime downcasting is involved.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a UI event payload",
    label = "missing `EventArg` implementation",
    note = "event arguments must be one of the payload structs or `UiEvent` itself"
)]
pub trait EventArg: Send + Sync + Sized + 'static {
    /// A short static name for this payload's shape.
    fn kind() -> &'static str;

    /// Wraps the payload into the event union.
    fn into_event(self) -> UiEvent;

    /// Recovers the payload from the event union, failing if the event holds
    /// a different shape.
    fn from_event(event: UiEvent) -> Result<Self, ArgMismatch>;
}

impl EventArg for UiEvent {
    fn kind() -> &'static str {
        "any"
    }

    fn into_event(self) -> UiEvent {
        self
    }

    fn from_event(event: UiEvent) -> Result<Self, ArgMismatch> {
        Ok(event)
    }
}

macro_rules! impl_event_arg {
    ($($payload:ty => $variant:ident, $kind:literal;)*) => {$(
        impl EventArg for $payload {
            fn kind() -> &'static str {
                $kind
            }

            fn into_event(self) -> UiEvent {
                UiEvent::$variant(self)
            }

            fn from_event(event: UiEvent) -> Result<Self, ArgMismatch> {
                match event {
                    UiEvent::$variant(payload) => Ok(payload),
                    other => Err(ArgMismatch {
                        expected: $kind,
                        actual: other.kind(),
                    }),
                }
            }
        }
    )*};
}

impl_event_arg! {
    GenericEvent => Generic, "generic";
    ChangeEvent => Change, "change";
    ClipboardEvent => Clipboard, "clipboard";
    DragEvent => Drag, "drag";
    ErrorEvent => Error, "error";
    FocusEvent => Focus, "focus";
    KeyboardEvent => Keyboard, "keyboard";
    MouseEvent => Mouse, "mouse";
    PointerEvent => Pointer, "pointer";
    ProgressEvent => Progress, "progress";
    TouchEvent => Touch, "touch";
    WheelEvent => Wheel, "wheel";
}
