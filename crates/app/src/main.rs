use dioxus::prelude::*;
use form_types::{OptionValue, SelectConfig, SelectGallery, StyleProp};
use form_ui::{detect_platform, SelectField, ThemeProvider};

/// Selects shown by the gallery.
const GALLERY: &str = include_str!("../gallery.toml");

fn main() {
    form_ui::config::load_theme();
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

/// Parse the embedded gallery; a broken gallery renders empty.
fn load_gallery() -> SelectGallery {
    SelectGallery::from_toml_str(GALLERY).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "gallery.toml failed to parse");
        SelectGallery::default()
    })
}

#[component]
fn App() -> Element {
    let gallery = use_hook(load_gallery);
    let platform = client_platform();

    rsx! {
        ThemeProvider {
            main { class: "gallery",
                h1 { "Select fields ({platform})" }
                for (index, config) in gallery.selects.into_iter().enumerate() {
                    GalleryEntry { key: "{index}", config: config }
                }
            }
        }
    }
}

/// One configured select plus a readout of its last change.
#[component]
fn GalleryEntry(config: SelectConfig) -> Element {
    let mut current = use_signal(|| config.value());
    let mut last_change = use_signal(|| None::<String>);

    let SelectConfig {
        label: title,
        platform,
        options,
        read_only,
        disabled,
        editable,
        variant,
        style,
        ..
    } = config;
    let platform = platform.unwrap_or_else(detect_platform);
    let style = style.map(StyleProp::from);

    rsx! {
        div { class: "gallery-entry",
            label { "{title}" }
            SelectField {
                platform: platform,
                options: options,
                value: current(),
                variant: variant,
                style: style,
                read_only: read_only,
                disabled: disabled,
                editable: editable,
                on_value_change: move |value: OptionValue| {
                    tracing::debug!(%value, "gallery select changed");
                    last_change.set(Some(value.to_string()));
                    current.set(Some(value));
                },
            }
            {last_change().map(|change| rsx! {
                p { class: "gallery-change", "changed to {change}" }
            })}
        }
    }
}
