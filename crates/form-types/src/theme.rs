use serde_json::{Map, Value};
use std::path::Path;

use crate::{Style, StyleProp, StyleValue, ThemeError};

const BUILTIN_THEME: &str = include_str!("default_theme.toml");

/// A read-only tree of styles addressed by dot-separated theme paths.
///
/// A node's scalar entries are its style; nested tables are child paths.
/// With `[form.select.default]` and `[form.select.outline]` tables,
/// `form.select.default` resolves to the first table's scalars.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    root: Map<String, Value>,
}

impl Theme {
    /// An empty theme; every lookup resolves to an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// The theme shipped with the crate.
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN_THEME).unwrap_or_else(|e| {
            tracing::error!(error = %e, "built-in theme failed to parse; using an empty theme");
            Theme::new()
        })
    }

    pub fn from_json_value(value: Value) -> Result<Self, ThemeError> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(ThemeError::shape(format!(
                "theme root must be a table, found {}",
                json_type_name(&other)
            ))),
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, ThemeError> {
        Self::from_json_value(serde_json::from_str(s)?)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ThemeError> {
        Self::from_json_value(toml::from_str::<Value>(s)?)
    }

    /// Load a theme file; `.json` files are read as JSON, anything else as TOML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&contents),
            _ => Self::from_toml_str(&contents),
        }
    }

    fn node(&self, path: &str) -> Option<&Map<String, Value>> {
        let mut segments = path.split('.').filter(|segment| !segment.is_empty());
        let mut current = self.root.get(segments.next()?)?.as_object()?;
        for segment in segments {
            current = current.get(segment)?.as_object()?;
        }
        Some(current)
    }

    /// The style stored at a single theme path.
    pub fn style(&self, path: &str) -> Style {
        match self.node(path) {
            Some(node) => node
                .iter()
                .filter_map(|(key, value)| style_value(value).map(|v| (key.clone(), v)))
                .collect(),
            None => {
                tracing::debug!(path, "theme path not found; resolving to an empty style");
                Style::new()
            }
        }
    }

    /// Resolve `path`, then apply the style at `override_path` on top of it.
    ///
    /// An absent or empty override path resolves to the plain lookup.
    pub fn get(&self, path: &str, override_path: Option<&str>) -> Style {
        let base = self.style(path);
        match override_path.filter(|p| !p.is_empty()) {
            Some(override_path) => self.join([&base, &self.style(override_path)]),
            None => base,
        }
    }

    /// Merge styles left to right; later styles win on conflicting keys.
    pub fn join<'a>(&self, styles: impl IntoIterator<Item = &'a Style>) -> Style {
        styles.into_iter().fold(Style::new(), |mut acc, style| {
            acc.merge_from(style);
            acc
        })
    }

    /// Turn an explicit style prop into a concrete style.
    pub fn resolve(&self, prop: &StyleProp) -> Style {
        match prop {
            StyleProp::Inline(style) => style.clone(),
            StyleProp::Path(path) => self.style(path),
        }
    }
}

fn style_value(value: &Value) -> Option<StyleValue> {
    match value {
        Value::Number(n) => n.as_f64().map(StyleValue::Number),
        Value::String(s) => Some(StyleValue::Text(s.clone())),
        Value::Bool(b) => Some(StyleValue::Text(b.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a table",
    }
}
