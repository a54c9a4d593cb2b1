//! Product detail page, the target of a card's "View Details" link

use crate::demo_data;
use crate::Route;
use dioxus::prelude::*;
use shop_ui::{format_usd, StarIcon};

#[component]
pub fn ProductDetail(product_id: String) -> Element {
    let Some(product) = demo_data::find_product(&product_id) else {
        return rsx! {
            div { class: "text-center py-16",
                p { class: "text-gray-500 mb-4", "No product with id {product_id}" }
                Link { to: Route::Catalog {}, class: "text-indigo-600", "Back to catalog" }
            }
        };
    };

    let title = product.title.as_deref().unwrap_or("Untitled product");
    let description = product.description.as_deref().unwrap_or_default();
    let price = format_usd(product.price);
    let availability = if product.is_out_of_stock() {
        "Out of stock"
    } else {
        "In stock"
    };
    let rating = product.rating.as_ref().map(|r| r.rate);
    let review_count = product.rating.as_ref().and_then(|r| r.count);
    let variant_labels: Vec<String> = product.variants.iter().map(|v| v.label()).collect();

    rsx! {
        Link {
            to: Route::Catalog {},
            class: "text-sm text-gray-500 hover:text-gray-900",
            "← Back to catalog"
        }
        div { class: "mt-4 grid gap-8 md:grid-cols-2 bg-white rounded-lg shadow p-6",
            if let Some(image) = product.image_url() {
                img {
                    class: "w-full object-contain",
                    style: "max-height: 420px",
                    src: "{image}",
                    alt: "{title}",
                }
            }
            div {
                h1 { class: "text-2xl font-bold mb-2", "{title}" }
                if let Some(rate) = rating {
                    div { class: "flex items-center gap-1 text-sm text-amber-500 mb-2",
                        StarIcon { class: "w-4 h-4" }
                        "{rate}"
                        if let Some(count) = review_count {
                            span { class: "text-gray-500", " ({count} reviews)" }
                        }
                    }
                }
                p { class: "text-gray-600 mb-4", "{description}" }
                p { class: "text-xl font-bold text-indigo-600", "{price}" }
                p { class: "text-sm text-gray-500 mb-4", "{availability}" }
                if !variant_labels.is_empty() {
                    ul { class: "list-disc pl-5 text-sm",
                        for label in variant_labels {
                            li { "{label}" }
                        }
                    }
                }
            }
        }
    }
}
