//! Disabled-aware button primitive

use dioxus::prelude::*;

/// Pass `event` to `handler` unless the button is disabled.
/// Returns whether the handler ran.
fn forward_click<E>(disabled: bool, event: E, handler: impl FnOnce(E)) -> bool {
    if disabled {
        return false;
    }
    handler(event);
    true
}

/// Chromeless button component - provides accessibility and base functionality
/// without visual styling.
///
/// A disabled button carries the native `disabled` attribute, so the browser
/// never dispatches its click; the handler is also skipped while disabled.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] test_id: Option<&'static str>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            id: id.as_deref(),
            r#type: r#type.unwrap_or("button"),
            disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_disabled: if disabled { Some("true") } else { None },
            "data-testid": test_id,
            onclick: move |e| {
                forward_click(disabled, e, |e| onclick.call(e));
            },
            {children}
        }
    }
}
