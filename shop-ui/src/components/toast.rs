//! Toast notifications
//!
//! `ToastStack` renders the queue from [`Toasts`]; each entry dismisses
//! itself after [`TOAST_DISMISS_MS`] unless the user closes it first.

use crate::components::icons::{AlertTriangleIcon, CheckIcon, XIcon};
use crate::components::ChromelessButton;
use crate::stores::toasts::{sleep_ms, Toast, Toasts, TOAST_DISMISS_MS};
use dioxus::prelude::*;
use shop_common::{Notification, NotificationKind};

/// Fixed stack of active toasts, bottom-right
#[component]
pub fn ToastStack(toasts: Toasts) -> Element {
    let current = toasts.current();

    rsx! {
        div {
            class: "fixed bottom-4 right-4 z-50 flex flex-col gap-2 max-w-md",
            role: "status",
            aria_live: "polite",
            for toast in current {
                AutoDismissToast { key: "{toast.id}", toast, toasts }
            }
        }
    }
}

#[component]
fn AutoDismissToast(toast: Toast, toasts: Toasts) -> Element {
    let id = toast.id;

    // Owned by this entry, so a manual dismiss cancels the timer with it
    use_hook(move || {
        spawn(async move {
            sleep_ms(TOAST_DISMISS_MS).await;
            toasts.dismiss(id);
        })
    });

    rsx! {
        ToastView {
            notification: toast.notification,
            on_dismiss: move |_| toasts.dismiss(id),
        }
    }
}

/// A single dismissible toast
#[component]
pub fn ToastView(
    /// The message to display
    notification: Notification,
    /// Called when the user dismisses the toast
    on_dismiss: EventHandler<()>,
) -> Element {
    let (tone, test_id) = match notification.kind {
        NotificationKind::Success => ("bg-green-600", "toast-success"),
        NotificationKind::Error => ("bg-red-600", "toast-error"),
    };

    rsx! {
        div {
            class: "{tone} text-white px-6 py-4 rounded-lg shadow-lg",
            "data-testid": test_id,
            div { class: "flex items-center justify-between gap-4",
                div { class: "flex items-center gap-2 flex-1",
                    if notification.kind == NotificationKind::Success {
                        CheckIcon { class: "w-4 h-4" }
                    } else {
                        AlertTriangleIcon { class: "w-4 h-4" }
                    }
                    span { "{notification.message}" }
                }
                ChromelessButton {
                    class: Some("text-white hover:text-gray-200".to_string()),
                    aria_label: Some("Dismiss".to_string()),
                    onclick: move |_| on_dismiss.call(()),
                    XIcon { class: "w-4 h-4" }
                }
            }
        }
    }
}
