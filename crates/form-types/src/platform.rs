use serde::{Deserialize, Serialize};

/// Rendering target a form control adapts to.
///
/// Web targets receive DOM-style change events; native targets receive the
/// selected value directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Web,
    Native,
}

impl Platform {
    /// Internal key used in configuration files and data attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Web => "web",
            Platform::Native => "native",
        }
    }

    /// Parse a platform key, falling back to Web.
    pub fn from_key(s: &str) -> Self {
        match s {
            "native" | "ios" | "android" | "mobile" => Platform::Native,
            _ => Platform::Web,
        }
    }

    pub fn is_web(&self) -> bool {
        matches!(self, Platform::Web)
    }

    /// Build from the boolean discriminator used by component props.
    pub fn from_is_web(is_web: bool) -> Self {
        if is_web {
            Platform::Web
        } else {
            Platform::Native
        }
    }
}
