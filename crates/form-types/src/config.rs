use serde::{Deserialize, Serialize};

use crate::{validate_value, OptionValue, Options, Platform, Style, ThemeError};

/// A select described in configuration data rather than code.
///
/// `value` is kept loosely typed so a wrong type in the data surfaces as a
/// warning from [`validate_value`] instead of a load failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectConfig {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub platform: Option<Platform>,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
    #[serde(default)]
    pub options: Options,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub editable: Option<bool>,
    /// Theme variant name, the `type` of the select.
    #[serde(default, rename = "type")]
    pub variant: Option<String>,
    #[serde(default)]
    pub style: Option<Style>,
}

impl SelectConfig {
    /// The validated explicit value, if any.
    pub fn value(&self) -> Option<OptionValue> {
        self.value.as_ref().and_then(validate_value)
    }
}

/// A list of configured selects, as stored in a TOML file under `[[select]]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectGallery {
    #[serde(default, rename = "select")]
    pub selects: Vec<SelectConfig>,
}

impl SelectGallery {
    pub fn from_toml_str(s: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(s)?)
    }
}
