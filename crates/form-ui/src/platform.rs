use form_types::Platform;

/// Detect the rendering platform from compile-time feature flags.
///
/// Builds with neither `web` nor `native` enabled are treated as web.
pub fn detect_platform() -> Platform {
    if cfg!(feature = "native") && !cfg!(feature = "web") {
        Platform::Native
    } else {
        Platform::Web
    }
}
