//! Storefront demo layout with header and toast stack

use crate::Route;
use dioxus::prelude::*;
use shop_ui::stores::use_toasts_provider;
use shop_ui::ToastStack;

/// Items added to the cart this session, shown in the header
#[derive(Clone, Copy, PartialEq)]
pub struct CartTally(pub Signal<usize>);

#[component]
pub fn DemoLayout() -> Element {
    let toasts = use_toasts_provider();
    let tally = use_signal(|| 0usize);
    use_context_provider(|| CartTally(tally));

    rsx! {
        div { class: "min-h-screen bg-gray-100 text-gray-900",
            header { class: "bg-white shadow-sm",
                div { class: "max-w-6xl mx-auto flex items-center justify-between px-4 py-3",
                    Link {
                        to: Route::Catalog {},
                        class: "text-lg font-bold",
                        "Storefront"
                    }
                    div { class: "flex items-center gap-4 text-sm",
                        Link {
                            to: Route::MockIndex {},
                            class: "text-gray-500 hover:text-gray-900",
                            "Mocks"
                        }
                        span { "data-testid": "cart-tally", "Cart ({tally})" }
                    }
                }
            }
            main { class: "max-w-6xl mx-auto p-4", Outlet::<Route> {} }
            ToastStack { toasts }
        }
    }
}
