use dioxus::prelude::*;
use form_types::{
    resolve_select, ChangeEvent, ChangeHandler, ChangeHandlerSlots, Handler, Interactivity,
    OptionValue, Options, Platform, SelectInput, StyleProp, ValueBinding,
};

use crate::components::{NativePicker, WebSelect};
use crate::platform::detect_platform;
use crate::theme::use_theme;

/// The resolved prop set a rendering element receives from [`SelectField`].
///
/// Carries exactly one value binding and at most one change handler.
#[derive(Props, Clone, PartialEq)]
pub struct SelectElementProps {
    /// Inline CSS built from the theme and the caller's style.
    pub style: String,
    pub interactivity: Interactivity,
    pub value: ValueBinding,
    /// `None` when read-only or when no handler was supplied.
    #[props(!optional)]
    pub handler: Option<ChangeHandler>,
    #[props(default)]
    pub options: Options,
    /// Pass-through attributes, forwarded verbatim.
    #[props(default)]
    pub attributes: Vec<Attribute>,
}

#[derive(Props, Clone, PartialEq)]
pub struct SelectFieldProps {
    /// Option list; scanned for a selected option when `value` is absent.
    #[props(into, default)]
    pub options: Options,
    /// Web-style change handler, receives the change event.
    #[props(default)]
    pub on_change: Option<EventHandler<ChangeEvent>>,
    /// Native-style change handler, receives the new value.
    #[props(default)]
    pub on_value_change: Option<EventHandler<OptionValue>>,
    #[props(default)]
    pub read_only: bool,
    #[props(default)]
    pub disabled: bool,
    /// Absent means editable.
    #[props(default)]
    pub editable: Option<bool>,
    /// Rendering element; defaults to the platform's built-in element.
    #[props(default)]
    pub element: Option<Component<SelectElementProps>>,
    /// Target platform; defaults to the compile-time platform.
    #[props(default)]
    pub platform: Option<Platform>,
    /// Highest-precedence style override: inline, or a theme path.
    #[props(default)]
    pub style: Option<StyleProp>,
    /// Theme variant, resolved under `form.select.<variant>`.
    #[props(default)]
    pub variant: Option<String>,
    /// Explicit value; wins over any selected option.
    #[props(default)]
    pub value: Option<OptionValue>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
}

/// A themed select that adapts to web or native rendering.
///
/// Resolves the theme style, interactive state, value binding and change
/// handler, then hands the result to `element` along with the options.
///
/// ```rust,ignore
/// let mut fruit = use_signal(|| OptionValue::from("a"));
/// rsx! {
///     SelectField {
///         variant: "outline",
///         options: vec![SelectOption::new("a", "Apple"), SelectOption::new("b", "Banana")],
///         value: fruit(),
///         on_value_change: move |v: OptionValue| fruit.set(v),
///     }
/// }
/// ```
#[component]
pub fn SelectField(props: SelectFieldProps) -> Element {
    let theme = use_theme();
    let slots = use_hook(ChangeHandlerSlots::default);
    let platform = props.platform.unwrap_or_else(detect_platform);

    let on_change = props
        .on_change
        .map(|handler| Handler::new(move |event: ChangeEvent| handler.call(event)));
    let on_value_change = props
        .on_value_change
        .map(|handler| Handler::new(move |value: OptionValue| handler.call(value)));

    let input = SelectInput {
        platform,
        value: props.value.as_ref(),
        options: &props.options,
        on_change: on_change.as_ref(),
        on_value_change: on_value_change.as_ref(),
        read_only: props.read_only,
        disabled: props.disabled,
        editable: props.editable,
        variant: props.variant.as_deref(),
        style: props.style.as_ref(),
    };
    let resolved = resolve_select(&theme, &input);
    // Same props on every render unless the binding itself changes.
    let handler = slots.stabilize(resolved.handler.clone());

    tracing::trace!(
        platform = platform.as_str(),
        keys = ?resolved.prop_keys(),
        "resolved select props"
    );

    let mut base = vec![Attribute::new("class", "select-field", None, false)];
    if let Some(variant) = props.variant.as_deref().filter(|v| !v.is_empty()) {
        base.push(Attribute::new("data-variant", variant.to_string(), None, false));
    }
    let attributes = dioxus_primitives::merge_attributes(vec![base, props.attributes.clone()]);

    let element: Component<SelectElementProps> = match props.element {
        Some(element) => element,
        None => match platform {
            Platform::Web => WebSelect,
            Platform::Native => NativePicker,
        },
    };
    #[allow(non_snake_case)]
    let Renderer = element;

    rsx! {
        Renderer {
            style: resolved.style.to_css(),
            interactivity: resolved.interactivity,
            value: resolved.value,
            handler: handler,
            options: props.options.clone(),
            attributes: attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeProvider;
    use form_types::{SelectOption, Style, Theme};
    use std::cell::Cell;
    use std::sync::Arc;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// Render, then re-render the root once and return the updated markup.
    fn render_twice(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate_to_vec();
        dioxus_ssr::render(&dom)
    }

    fn fruit() -> Vec<SelectOption> {
        vec![
            SelectOption::new("a", "Apple"),
            SelectOption::new("b", "Banana").selected(true),
            SelectOption::new("c", "Cherry"),
        ]
    }

    /// Prints the prop keys it receives so tests can inspect the prop bag.
    #[component]
    fn KeyReadout(props: SelectElementProps) -> Element {
        let handler_key = props.handler.as_ref().map(|h| h.key()).unwrap_or("none");
        let value_key = props.value.key();
        let state_key = props.interactivity.key();
        let shown = props.value.display();
        rsx! {
            div {
                "value-key={value_key} handler-key={handler_key} state-key={state_key} value={shown}"
            }
        }
    }

    #[test]
    fn read_only_with_on_change_emits_read_only_key_only() {
        fn app() -> Element {
            let readout: Component<SelectElementProps> = KeyReadout;
            rsx! {
                SelectField {
                    platform: Platform::Web,
                    element: readout,
                    read_only: true,
                    on_change: move |_: ChangeEvent| {},
                    options: fruit(),
                }
            }
        }

        let html = render(app);
        assert!(html.contains("value-key=defaultValue"), "{html}");
        assert!(html.contains("handler-key=none"), "{html}");
        assert!(!html.contains("value-key=value "), "{html}");
    }

    #[test]
    fn native_platform_binds_native_keys() {
        fn app() -> Element {
            let readout: Component<SelectElementProps> = KeyReadout;
            rsx! {
                SelectField {
                    platform: Platform::Native,
                    element: readout,
                    on_change: move |_: ChangeEvent| {},
                    options: fruit(),
                }
            }
        }

        let html = render(app);
        assert!(html.contains("value-key=selectedValue"), "{html}");
        assert!(html.contains("handler-key=onValueChange"), "{html}");
        assert!(html.contains("state-key=editable"), "{html}");
        assert!(html.contains("value=b"), "{html}");
    }

    #[test]
    fn explicit_value_overrides_selected_option() {
        fn app() -> Element {
            let readout: Component<SelectElementProps> = KeyReadout;
            rsx! {
                SelectField {
                    platform: Platform::Web,
                    element: readout,
                    value: OptionValue::from("c"),
                    options: fruit(),
                }
            }
        }

        let html = render(app);
        assert!(html.contains("value-key=value "), "{html}");
        assert!(html.contains("value=c"), "{html}");
    }

    #[test]
    fn web_select_renders_themed_style_and_options() {
        fn app() -> Element {
            rsx! {
                SelectField {
                    platform: Platform::Web,
                    variant: "outline",
                    id: "fruit",
                    options: fruit(),
                }
            }
        }

        let html = render(app);
        assert!(html.contains("<select"), "{html}");
        assert!(html.contains("select-field"), "{html}");
        assert!(html.contains("id=\"fruit\""), "{html}");
        assert!(html.contains("data-variant=\"outline\""), "{html}");
        assert!(html.contains("border-color: #4a6cf7;"), "{html}");
        assert!(html.contains("Apple"), "{html}");
        assert!(html.contains("Banana"), "{html}");
    }

    #[test]
    fn explicit_style_wins_over_provider_theme() {
        fn app() -> Element {
            let theme = Arc::new(
                Theme::from_toml_str("[form.select.default]\ncolor = \"navy\"\nheight = 30").unwrap(),
            );
            rsx! {
                ThemeProvider { theme: theme,
                    SelectField {
                        platform: Platform::Web,
                        style: StyleProp::from(Style::new().with("color", "tomato")),
                        options: fruit(),
                    }
                }
            }
        }

        let html = render(app);
        assert!(html.contains("color: tomato;"), "{html}");
        assert!(html.contains("height: 30px;"), "{html}");
        assert!(!html.contains("navy"), "{html}");
    }

    #[test]
    fn read_only_web_select_is_disabled() {
        fn app() -> Element {
            rsx! {
                SelectField {
                    platform: Platform::Web,
                    read_only: true,
                    options: fruit(),
                }
            }
        }

        let html = render(app);
        assert!(html.contains("disabled"), "{html}");
    }

    #[test]
    fn native_picker_is_marked() {
        fn app() -> Element {
            rsx! {
                SelectField {
                    platform: Platform::Native,
                    on_value_change: move |_: OptionValue| {},
                    options: fruit(),
                }
            }
        }

        let html = render(app);
        assert!(html.contains("data-picker=\"native\""), "{html}");
    }

    #[test]
    fn read_only_numeric_value_selects_matching_text_option() {
        fn app() -> Element {
            rsx! {
                SelectField {
                    platform: Platform::Web,
                    read_only: true,
                    value: OptionValue::from(2),
                    options: vec![SelectOption::new("1", "One"), SelectOption::new("2", "Two")],
                }
            }
        }

        let html = render(app);
        let two = html.find("Two").unwrap();
        let selected = html.find("selected").unwrap();
        assert!(selected < two, "{html}");
        assert!(html[..html.find("One").unwrap()].find("selected").is_none(), "{html}");
    }

    #[test]
    fn duplicate_option_values_survive_a_rerender() {
        thread_local! {
            static RENDERS: Cell<usize> = const { Cell::new(0) };
        }

        fn app() -> Element {
            let pass = RENDERS.with(|count| {
                count.set(count.get() + 1);
                count.get()
            });
            let value = (pass > 1).then(|| OptionValue::from("5"));
            rsx! {
                SelectField {
                    platform: Platform::Web,
                    value: value,
                    options: vec![
                        SelectOption::new("x", "First x"),
                        SelectOption::new("x", "Second x"),
                        SelectOption::new("5", "Text five"),
                        SelectOption::new(5, "Number five"),
                    ],
                }
            }
        }

        let html = render_twice(app);
        assert_eq!(RENDERS.with(Cell::get), 2);
        for label in ["First x", "Second x", "Text five", "Number five"] {
            assert!(html.contains(label), "{label} missing: {html}");
        }
    }

    #[test]
    fn element_is_not_rerendered_for_unchanged_props() {
        thread_local! {
            static ELEMENT_RENDERS: Cell<usize> = const { Cell::new(0) };
        }

        #[component]
        fn CountingElement(props: SelectElementProps) -> Element {
            ELEMENT_RENDERS.with(|count| count.set(count.get() + 1));
            let handler_key = props.handler.as_ref().map(|h| h.key()).unwrap_or("none");
            rsx! { div { "handler-key={handler_key}" } }
        }

        fn app() -> Element {
            let counting: Component<SelectElementProps> = CountingElement;
            rsx! {
                SelectField {
                    platform: Platform::Web,
                    element: counting,
                    on_value_change: move |_: OptionValue| {},
                    options: fruit(),
                }
            }
        }

        let html = render_twice(app);
        assert!(html.contains("handler-key=onChange"), "{html}");
        assert_eq!(ELEMENT_RENDERS.with(Cell::get), 1);
    }
}
