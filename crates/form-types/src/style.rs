use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::value::format_number;

/// A single style property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

/// Properties whose numeric values carry no unit.
const UNITLESS: &[&str] = &[
    "opacity",
    "zIndex",
    "flex",
    "flexGrow",
    "flexShrink",
    "fontWeight",
    "lineHeight",
    "order",
];

/// A flat style object keyed by camelCase property name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style(BTreeMap<String, StyleValue>);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &StyleValue)> {
        self.0.iter()
    }

    /// Overlay `other` onto this style; `other` wins on conflicting keys.
    pub fn merge_from(&mut self, other: &Style) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Render as an inline CSS declaration list.
    ///
    /// Keys become kebab-case; numbers get `px` unless the property is
    /// unitless.
    pub fn to_css(&self) -> String {
        self.0
            .iter()
            .map(|(key, value)| {
                let rendered = match value {
                    StyleValue::Text(text) => text.clone(),
                    StyleValue::Number(n) if UNITLESS.contains(&key.as_str()) => format_number(*n),
                    StyleValue::Number(n) => format!("{}px", format_number(*n)),
                };
                format!("{}: {};", kebab_case(key), rendered)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Style(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Convert a camelCase property name to its CSS form (`borderRadius` → `border-radius`).
fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// An explicit style override passed by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleProp {
    Inline(Style),
    /// Theme path resolved through the active theme.
    Path(String),
}

impl From<Style> for StyleProp {
    fn from(style: Style) -> Self {
        StyleProp::Inline(style)
    }
}

impl From<&str> for StyleProp {
    fn from(path: &str) -> Self {
        StyleProp::Path(path.to_string())
    }
}

impl From<String> for StyleProp {
    fn from(path: String) -> Self {
        StyleProp::Path(path)
    }
}
