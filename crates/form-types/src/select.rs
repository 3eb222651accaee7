use crate::value::EMPTY_OPTIONS;
use crate::{
    build_styles, render_style, resolve_change_handler, resolve_interactivity,
    resolve_value_binding, ChangeEvent, ChangeHandler, Handler, Interactivity, OptionValue,
    Options, Platform, Style, StyleProp, Theme, ValueBinding,
};

/// Everything a select consumes, borrowed from its props.
///
/// Fields not listed here are pass-through attributes and never reach the
/// resolver.
#[derive(Debug, Clone)]
pub struct SelectInput<'a> {
    pub platform: Platform,
    pub value: Option<&'a OptionValue>,
    pub options: &'a Options,
    pub on_change: Option<&'a Handler<ChangeEvent>>,
    pub on_value_change: Option<&'a Handler<OptionValue>>,
    pub read_only: bool,
    pub disabled: bool,
    pub editable: Option<bool>,
    /// Theme variant name (`form.select.<variant>`).
    pub variant: Option<&'a str>,
    pub style: Option<&'a StyleProp>,
}

impl Default for SelectInput<'_> {
    fn default() -> Self {
        Self {
            platform: Platform::default(),
            value: None,
            options: &EMPTY_OPTIONS,
            on_change: None,
            on_value_change: None,
            read_only: false,
            disabled: false,
            editable: None,
            variant: None,
            style: None,
        }
    }
}

/// The resolved prop set handed to a rendering element.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSelect {
    pub style: Style,
    pub interactivity: Interactivity,
    pub value: ValueBinding,
    pub handler: Option<ChangeHandler>,
}

impl ResolvedSelect {
    /// Keys of the flat prop bag this resolution renders as.
    pub fn prop_keys(&self) -> Vec<&'static str> {
        let mut keys = vec!["style", self.interactivity.key(), self.value.key()];
        if let Some(handler) = &self.handler {
            keys.push(handler.key());
        }
        keys
    }
}

/// Resolve style, interactive state, value binding and change handler.
///
/// Pure in its inputs: identical input and theme give an identical result.
/// A read-only select never binds a change handler.
pub fn resolve_select(theme: &Theme, input: &SelectInput<'_>) -> ResolvedSelect {
    let styles = build_styles(theme, input.variant);
    let style = render_style(theme, &styles, input.style);

    let interactivity =
        resolve_interactivity(input.platform, input.read_only, input.disabled, input.editable);

    let value = resolve_value_binding(
        input.platform,
        input.on_change.is_some(),
        input.on_value_change.is_some(),
        input.read_only,
        input.value,
        input.options,
    );

    let handler = if value.kind.is_read_only() {
        None
    } else {
        resolve_change_handler(input.platform, input.on_change, input.on_value_change)
    };

    ResolvedSelect {
        style,
        interactivity,
        value,
        handler,
    }
}
