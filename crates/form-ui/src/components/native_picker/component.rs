use dioxus::prelude::*;
use form_types::{ChangeEvent, Platform};

use crate::components::SelectElementProps;

/// Picker rendering element for native targets.
///
/// Always binds the selected value and reports changes as the new value
/// itself; numeric option values come back as numbers.
#[component]
pub fn NativePicker(props: SelectElementProps) -> Element {
    let SelectElementProps {
        style,
        interactivity,
        value,
        handler,
        options,
        attributes,
    } = props;

    let lookup = options.clone();
    let editable = !interactivity.is_locked();

    rsx! {
        select {
            "data-picker": "native",
            style: style,
            disabled: !editable,
            "aria-readonly": (!editable).then_some("true"),
            value: value.display(),
            onchange: move |evt: FormEvent| {
                if let Some(handler) = &handler {
                    let picked = lookup.value_for(&evt.value());
                    handler.dispatch(ChangeEvent::new(picked, Platform::Native));
                }
            },
            ..attributes,
            {options.iter().enumerate().map(|(index, item)| {
                let raw = item.value.to_string();
                rsx! {
                    option {
                        // Option values may repeat; position is unique.
                        key: "{index}",
                        value: raw.clone(),
                        selected: value.is_current(&item.value),
                        disabled: item.disabled,
                        {item.display_label()}
                    }
                }
            })}
        }
    }
}
