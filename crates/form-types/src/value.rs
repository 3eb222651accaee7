use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar value carried by a select option or an explicit `value` prop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Text(text) => f.write_str(text),
            OptionValue::Number(n) => f.write_str(&format_number(*n)),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Number(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Number(f64::from(value))
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Number(value as f64)
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        OptionValue::Number(f64::from(value))
    }
}

/// Format a number the way it reads in markup: `5`, not `5.0`.
pub(crate) fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// One entry of a select's option list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: OptionValue,
    #[serde(default)]
    pub label: String,
    /// Marks the option as the current one when no explicit value is given.
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<OptionValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected: false,
            disabled: false,
        }
    }

    /// Create an option whose label is its value.
    pub fn simple(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::new(text.clone(), text)
    }

    #[must_use]
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Label shown to the user, falling back to the value.
    pub fn display_label(&self) -> String {
        if self.label.is_empty() {
            self.value.to_string()
        } else {
            self.label.clone()
        }
    }
}

/// The ordered option list of a select.
///
/// A single option, a bare string, any sequence of options, or nothing at all
/// all normalize into this one type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(Vec<SelectOption>);

pub(crate) static EMPTY_OPTIONS: Options = Options(Vec::new());

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SelectOption> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[SelectOption] {
        &self.0
    }

    /// First option carrying the selected marker.
    pub fn first_selected(&self) -> Option<&SelectOption> {
        self.0.iter().find(|option| option.selected)
    }

    /// Map a raw value string coming back from a rendered control to the
    /// option value it was rendered from, keeping numbers numeric.
    pub fn value_for(&self, raw: &str) -> OptionValue {
        self.0
            .iter()
            .find(|option| option.value.to_string() == raw)
            .map(|option| option.value.clone())
            .unwrap_or_else(|| OptionValue::Text(raw.to_string()))
    }
}

impl<'a> IntoIterator for &'a Options {
    type Item = &'a SelectOption;
    type IntoIter = std::slice::Iter<'a, SelectOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<SelectOption> for Options {
    fn from_iter<I: IntoIterator<Item = SelectOption>>(iter: I) -> Self {
        Options(iter.into_iter().collect())
    }
}

impl From<SelectOption> for Options {
    fn from(option: SelectOption) -> Self {
        Options(vec![option])
    }
}

impl From<Vec<SelectOption>> for Options {
    fn from(options: Vec<SelectOption>) -> Self {
        Options(options)
    }
}

impl<const N: usize> From<[SelectOption; N]> for Options {
    fn from(options: [SelectOption; N]) -> Self {
        Options(options.into())
    }
}

impl From<&str> for Options {
    fn from(text: &str) -> Self {
        Options(vec![SelectOption::simple(text)])
    }
}

impl From<String> for Options {
    fn from(text: String) -> Self {
        Options(vec![SelectOption::simple(text)])
    }
}

impl<T: Into<Options>> From<Option<T>> for Options {
    fn from(children: Option<T>) -> Self {
        children.map(Into::into).unwrap_or_default()
    }
}

/// Resolve the effective value of a select.
///
/// An explicit value wins unchanged. Otherwise the first option marked
/// selected supplies it. `None` means no selection.
pub fn extract_value(value: Option<&OptionValue>, options: &Options) -> Option<OptionValue> {
    match value {
        Some(value) => Some(value.clone()),
        None => options.first_selected().map(|option| option.value.clone()),
    }
}

/// Accept a loosely-typed value from configuration data.
///
/// Strings and numbers pass; `null` means absent. Anything else is a caller
/// type error: it is reported as a warning and treated as absent so
/// rendering can continue.
pub fn validate_value(raw: &serde_json::Value) -> Option<OptionValue> {
    match raw {
        serde_json::Value::Null => None,
        serde_json::Value::String(text) => Some(OptionValue::Text(text.clone())),
        serde_json::Value::Number(n) => n.as_f64().map(OptionValue::Number),
        other => {
            tracing::warn!(
                value = %other,
                "select value must be a string or number; rendering without a value"
            );
            None
        }
    }
}
