use dioxus::prelude::*;
use form_types::{ChangeEvent, Platform};

use crate::components::SelectElementProps;

/// A native HTML `<select>` rendering element.
///
/// Controlled selects bind `value`; read-only selects only mark the current
/// option as selected. Changes are delivered as a [`ChangeEvent`].
#[component]
pub fn WebSelect(props: SelectElementProps) -> Element {
    let SelectElementProps {
        style,
        interactivity,
        value,
        handler,
        options,
        attributes,
    } = props;

    let lookup = options.clone();
    let bound = (!value.kind.is_read_only()).then(|| value.display());

    rsx! {
        select {
            style: style,
            disabled: interactivity.is_locked(),
            value: bound,
            onchange: move |evt: FormEvent| {
                if let Some(handler) = &handler {
                    let value = lookup.value_for(&evt.value());
                    handler.dispatch(ChangeEvent::new(value, Platform::Web));
                }
            },
            ..attributes,
            {options.iter().enumerate().map(|(index, opt)| {
                let raw = opt.value.to_string();
                rsx! {
                    option {
                        // Option values may repeat; position is unique.
                        key: "{index}",
                        value: raw.clone(),
                        selected: value.is_current(&opt.value),
                        disabled: opt.disabled,
                        {opt.display_label()}
                    }
                }
            })}
        }
    }
}
