use form_types::Theme;

use crate::theme::install_theme;

/// Path to the theme file, relative to the working directory.
const THEME_PATH: &str = "theme.toml";

/// Read `theme.toml` and install it as the process-wide theme.
///
/// Safe to call multiple times; only the first successful install has
/// effect. A missing or unparseable file leaves the built-in theme active.
pub fn load_theme() {
    load_theme_from(THEME_PATH);
}

/// Same as [`load_theme`] for an explicit path.
pub fn load_theme_from(path: &str) {
    match Theme::from_path(path) {
        Ok(theme) => {
            if install_theme(theme) {
                tracing::info!(path, "installed theme");
            } else {
                tracing::debug!(path, "theme already installed; ignoring");
            }
        }
        Err(e) => {
            tracing::warn!(path, error = %e, "theme not loaded; using the built-in theme");
        }
    }
}
