//! ProductCard mock component

use super::framework::{ControlRegistryBuilder, MockPanel, Preset};
use crate::demo_data::{mock_product, MockProductOptions};
use crate::Route;
use dioxus::prelude::*;
use shop_ui::stores::use_toasts_provider;
use shop_ui::{format_usd, CartRequest, Notification, ProductCard, ProductId, ToastStack};

#[component]
pub fn ProductCardMock(initial_state: Option<String>) -> Element {
    let registry = ControlRegistryBuilder::new()
        .enum_control(
            "stock",
            "Stock",
            "in",
            vec![
                ("in", "In stock"),
                ("zero", "Stock 0"),
                ("unavailable", "Unavailable"),
            ],
        )
        .bool_control("on_sale", "On sale", false)
        .doc("Sets an original price above the current price")
        .bool_control("variants", "Variants", false)
        .bool_control("rating", "Rating", true)
        .bool_control("image", "Image", true)
        .doc("Off shows the placeholder image")
        .bool_control("long_text", "Long text", false)
        .doc("Title and description past their truncation limits")
        .bool_control("sparse", "Sparse record", false)
        .doc("Only an id: no title, description, price or category")
        .with_presets(vec![
            Preset::new("Default"),
            Preset::new("Out of Stock").set_string("stock", "zero"),
            Preset::new("Unavailable")
                .set_string("stock", "unavailable")
                .set_bool("variants", true),
            Preset::new("On Sale").set_bool("on_sale", true),
            Preset::new("With Variants").set_bool("variants", true),
            Preset::new("Long Text").set_bool("long_text", true),
            Preset::new("Sparse").set_bool("sparse", true),
        ])
        .build(initial_state);

    registry.use_url_sync(|state| Route::MockProductCard { state });

    let options = MockProductOptions {
        stock: match registry.get_string("stock").as_str() {
            "zero" => "zero",
            "unavailable" => "unavailable",
            _ => "in",
        },
        on_sale: registry.get_bool("on_sale"),
        variants: registry.get_bool("variants"),
        rating: registry.get_bool("rating"),
        image: registry.get_bool("image"),
        long_text: registry.get_bool("long_text"),
        sparse: registry.get_bool("sparse"),
    };
    let product = mock_product(&options);

    let toasts = use_toasts_provider();
    let mut last_request = use_signal(|| Option::<CartRequest>::None);
    let mut add_count = use_signal(|| 0usize);

    let last_summary = last_request.read().as_ref().map(|request| {
        let variant = request
            .variant
            .as_ref()
            .map(|v| format!(", variant {}", v.name))
            .unwrap_or_default();
        format!(
            "Last request: product {}{}, unit price {}",
            request.product.id,
            variant,
            format_usd(request.unit_price())
        )
    });

    rsx! {
        MockPanel { title: "Product Card", registry,
            div { class: "flex flex-wrap",
                ProductCard {
                    product,
                    class: Some("w-full max-w-xs px-2 mb-4".to_string()),
                    on_add_to_cart: move |request: CartRequest| {
                        *add_count.write() += 1;
                        last_request.set(Some(request));
                    },
                    on_notify: move |notification: Notification| {
                        toasts.show(notification);
                    },
                    on_view_details: move |id: ProductId| {
                        tracing::info!(%id, "View details clicked");
                    },
                }
            }

            div { class: "mt-4 text-sm text-gray-700 space-y-1",
                p { "Add to cart calls: {add_count}" }
                if let Some(summary) = last_summary {
                    p { "{summary}" }
                }
            }

            ToastStack { toasts }
        }
    }
}
