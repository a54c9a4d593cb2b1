//! Mock pages with URL state persistence

use crate::demo_data::{self, MockProductOptions};
use crate::mocks::ProductCardMock;
use crate::ui::LinkCard;
use crate::Route;
use dioxus::prelude::*;
use shop_ui::{CartRequest, Notification, ProductCard};

#[component]
pub fn MockIndex() -> Element {
    let specimen = MockProductOptions {
        rating: true,
        image: true,
        ..Default::default()
    };
    let in_stock = demo_data::mock_product(&specimen);
    let sold_out = demo_data::mock_product(&MockProductOptions {
        stock: "zero",
        ..specimen.clone()
    });

    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white p-8",
            h1 { class: "text-2xl font-bold mb-6", "shop mocks" }

            h2 { class: "text-lg font-semibold text-gray-400 mb-3", "Demo App" }
            div { class: "space-y-2 mb-8",
                LinkCard {
                    to: Route::Catalog {},
                    title: "Catalog",
                    description: "Fixture catalog with cart tally, toasts and detail pages",
                }
            }

            h2 { class: "text-lg font-semibold text-gray-400 mb-3", "Components" }
            div { class: "grid grid-cols-2 gap-4 mb-8",
                SpecimenCard {
                    title: "ProductCard",
                    to: Route::MockProductCard {
                        state: None,
                    },
                    div { class: "flex bg-gray-100 rounded p-2",
                        ProductCard {
                            product: in_stock,
                            class: Some("w-1/2 px-1".to_string()),
                            on_add_to_cart: |_: CartRequest| {},
                            on_notify: |_: Notification| {},
                        }
                        ProductCard {
                            product: sold_out,
                            class: Some("w-1/2 px-1".to_string()),
                            on_add_to_cart: |_: CartRequest| {},
                            on_notify: |_: Notification| {},
                        }
                    }
                }
            }
        }
    }
}

/// A card showing specimen samples with a link to the full page
#[component]
fn SpecimenCard(title: &'static str, to: Route, children: Element) -> Element {
    rsx! {
        Link {
            to,
            class: "block bg-gray-950 rounded-lg p-4 hover:bg-gray-900 transition-colors border border-gray-800",
            h3 { class: "text-sm font-medium text-gray-300 mb-3", "{title}" }
            div { class: "pointer-events-none", {children} }
        }
    }
}

#[component]
pub fn MockProductCard(state: Option<String>) -> Element {
    rsx! {
        ProductCardMock { initial_state: state }
    }
}
