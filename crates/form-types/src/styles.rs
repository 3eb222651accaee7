use crate::{Style, StyleProp, Theme};

/// Theme path of the base select style.
pub const SELECT_DEFAULT_PATH: &str = "form.select.default";

/// Theme path prefix of the select variants (`form.select.<variant>`).
pub const SELECT_PATH_PREFIX: &str = "form.select";

/// Styles built for a select before the caller's override is applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectStyles {
    pub select: Style,
}

/// Resolve the themed select style, layering a variant when one is named.
pub fn build_styles(theme: &Theme, variant: Option<&str>) -> SelectStyles {
    let override_path = variant
        .filter(|variant| !variant.is_empty())
        .map(|variant| format!("{SELECT_PATH_PREFIX}.{variant}"));

    SelectStyles {
        select: theme.get(SELECT_DEFAULT_PATH, override_path.as_deref()),
    }
}

/// The final render style: themed style with the caller's style on top.
pub fn render_style(theme: &Theme, styles: &SelectStyles, explicit: Option<&StyleProp>) -> Style {
    match explicit {
        Some(prop) => theme.join([&styles.select, &theme.resolve(prop)]),
        None => styles.select.clone(),
    }
}
