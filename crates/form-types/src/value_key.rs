use serde::{Deserialize, Serialize};

use crate::{extract_value, OptionValue, Options, Platform};

/// Which value binding a select renders with.
///
/// Resolved once per render and only turned into a concrete prop key at the
/// render boundary, so a prop set can never carry two value keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    /// Shown but not editable.
    ReadOnlyValue,
    /// Web control whose value is owned by the caller.
    ControlledWebValue,
    /// Native picker whose value is owned by the caller.
    ControlledNativeValue,
}

impl ValueKind {
    /// Prop key this binding is rendered under.
    pub fn key(&self) -> &'static str {
        match self {
            ValueKind::ReadOnlyValue => "defaultValue",
            ValueKind::ControlledWebValue => "value",
            ValueKind::ControlledNativeValue => "selectedValue",
        }
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self, ValueKind::ReadOnlyValue)
    }
}

/// Decide which value binding applies.
///
/// Read-only always wins over controlled mode. Web honors whichever handler
/// was supplied (or none); native always uses the picker's selected value.
/// The handler flags never change the key, only which handler ends up bound.
pub fn resolve_value_kind(
    platform: Platform,
    _on_change_provided: bool,
    _on_value_change_provided: bool,
    read_only: bool,
) -> ValueKind {
    match (read_only, platform) {
        (true, _) => ValueKind::ReadOnlyValue,
        // Uncontrolled web selects (no handler) still render through `value`
        (false, Platform::Web) => ValueKind::ControlledWebValue,
        (false, Platform::Native) => ValueKind::ControlledNativeValue,
    }
}

/// The single value entry of a resolved prop set.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueBinding {
    pub kind: ValueKind,
    /// `None` renders as "no selection".
    pub value: Option<OptionValue>,
}

impl ValueBinding {
    pub fn key(&self) -> &'static str {
        self.kind.key()
    }

    /// The bound value as rendered in markup, empty when nothing is selected.
    pub fn display(&self) -> String {
        self.value.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    /// Whether `option_value` is the one currently bound.
    ///
    /// Compares rendered forms, so `2` matches an option whose value is `"2"`
    /// the same way the element's `value` attribute would.
    pub fn is_current(&self, option_value: &OptionValue) -> bool {
        self.value
            .as_ref()
            .is_some_and(|bound| bound.to_string() == option_value.to_string())
    }
}

/// Combine key resolution and value extraction into the value binding.
pub fn resolve_value_binding(
    platform: Platform,
    on_change_provided: bool,
    on_value_change_provided: bool,
    read_only: bool,
    value: Option<&OptionValue>,
    options: &Options,
) -> ValueBinding {
    ValueBinding {
        kind: resolve_value_kind(
            platform,
            on_change_provided,
            on_value_change_provided,
            read_only,
        ),
        value: extract_value(value, options),
    }
}
