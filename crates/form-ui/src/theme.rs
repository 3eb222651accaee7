use dioxus::prelude::*;
use form_types::Theme;
use std::sync::{Arc, OnceLock};

static INSTALLED: OnceLock<Arc<Theme>> = OnceLock::new();
static BUILTIN: OnceLock<Arc<Theme>> = OnceLock::new();

/// Install the process-wide theme.
///
/// Only the first call has effect; returns `false` when a theme was already
/// installed.
pub fn install_theme(theme: Theme) -> bool {
    INSTALLED.set(Arc::new(theme)).is_ok()
}

/// The process-wide theme, falling back to the built-in theme when none was
/// installed.
pub fn current_theme() -> Arc<Theme> {
    match INSTALLED.get() {
        Some(theme) => Arc::clone(theme),
        None => Arc::clone(BUILTIN.get_or_init(|| Arc::new(Theme::builtin()))),
    }
}

/// Shared theme state provided as context.
///
/// Components under a [`ThemeProvider`] read this instead of the
/// process-wide theme. Changes go through [`ThemeState::apply`].
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub theme: Signal<Arc<Theme>>,
}

impl ThemeState {
    /// Swap the theme for every component under the provider.
    pub fn apply(&mut self, theme: Theme) {
        self.theme.set(Arc::new(theme));
    }

    /// Adopt `theme` if it differs from the current one; returns whether
    /// anything changed.
    pub fn sync(&mut self, theme: &Arc<Theme>) -> bool {
        if *self.theme.peek() == *theme {
            return false;
        }
        self.theme.set(Arc::clone(theme));
        true
    }
}

/// Scope a theme to a subtree.
///
/// Without a `theme` prop the provider starts from the process-wide theme.
/// A changed `theme` prop replaces whatever the subtree currently shows,
/// including a theme set through [`ThemeState::apply`].
#[component]
pub fn ThemeProvider(
    #[props(default)] theme: Option<Arc<Theme>>,
    children: Element,
) -> Element {
    let mut state = use_context_provider(|| ThemeState {
        theme: Signal::new(theme.clone().unwrap_or_else(current_theme)),
    });
    let mut last_prop = use_hook(|| CopyValue::new(theme.clone()));
    if *last_prop.peek() != theme {
        last_prop.set(theme.clone());
        if let Some(theme) = &theme {
            if state.sync(theme) {
                tracing::debug!("theme provider switched theme");
            }
        }
    }

    rsx! {
        {children}
    }
}

/// Read the active theme: the nearest provider's, else the process-wide one.
pub fn use_theme() -> Arc<Theme> {
    match try_use_context::<ThemeState>() {
        Some(state) => state.theme.read().clone(),
        None => current_theme(),
    }
}
