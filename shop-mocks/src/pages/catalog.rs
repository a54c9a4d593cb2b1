//! Catalog page: a grid of product cards from the fixture data

use super::layout::CartTally;
use crate::demo_data;
use crate::Route;
use dioxus::prelude::*;
use shop_ui::stores::use_toasts;
use shop_ui::{CartRequest, Notification, ProductCard, ProductId};
use tracing::info;

#[component]
pub fn Catalog() -> Element {
    let toasts = use_toasts();
    let CartTally(mut tally) = use_context::<CartTally>();
    let products = demo_data::products();

    rsx! {
        h1 { class: "text-2xl font-bold mb-4", "Catalog" }
        div { class: "flex flex-wrap -mx-2",
            for product in products {
                ProductCard {
                    key: "{product.id}",
                    product: product.clone(),
                    on_add_to_cart: move |request: CartRequest| {
                        *tally.write() += 1;
                        info!(product_id = %request.product.id, "Added to demo cart");
                    },
                    on_notify: move |notification: Notification| {
                        toasts.show(notification);
                    },
                    on_view_details: move |id: ProductId| {
                        navigator()
                            .push(Route::ProductDetail {
                                product_id: id.to_string(),
                            });
                    },
                }
            }
        }
    }
}
