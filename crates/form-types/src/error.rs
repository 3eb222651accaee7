use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of theme loading errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ThemeErrorKind {
    /// The source text was not valid TOML or JSON.
    Parse,
    /// The document parsed but its root is not a table of theme paths.
    Shape,
    /// The theme file could not be read.
    Io,
}

impl fmt::Display for ThemeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeErrorKind::Parse => write!(f, "Parse"),
            ThemeErrorKind::Shape => write!(f, "Shape"),
            ThemeErrorKind::Io => write!(f, "Io"),
        }
    }
}

/// Error raised while building a [`Theme`](crate::Theme) from configuration.
///
/// Rendering never produces this error; only theme loading does.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeError {
    pub kind: ThemeErrorKind,
    pub message: String,
}

impl ThemeError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self {
            kind: ThemeErrorKind::Parse,
            message: message.into(),
        }
    }

    pub fn shape(message: impl Into<String>) -> Self {
        Self {
            kind: ThemeErrorKind::Shape,
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ThemeErrorKind::Io,
            message: message.into(),
        }
    }
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ThemeError {}

impl From<toml::de::Error> for ThemeError {
    fn from(err: toml::de::Error) -> Self {
        ThemeError::parse(err.to_string())
    }
}

impl From<serde_json::Error> for ThemeError {
    fn from(err: serde_json::Error) -> Self {
        ThemeError::parse(err.to_string())
    }
}

impl From<std::io::Error> for ThemeError {
    fn from(err: std::io::Error) -> Self {
        ThemeError::io(err.to_string())
    }
}
