pub mod components;
pub mod config;
pub mod platform;
pub mod theme;

pub use components::*;
pub use platform::detect_platform;
pub use theme::{current_theme, install_theme, use_theme, ThemeProvider, ThemeState};
