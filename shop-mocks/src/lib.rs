//! shop mocks - Storefront component gallery
//!
//! A web app that renders the card views with fixture data: a catalog grid
//! wired to toasts and a cart tally, plus a single-card mock with controls
//! and URL-persisted state.

pub mod demo_data;
pub mod mocks;
pub mod pages;
pub mod ui;

use dioxus::prelude::*;
use pages::{Catalog, DemoLayout, MockIndex, MockProductCard, ProductDetail};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const PLACEHOLDER_SVG: Asset = asset!("/assets/placeholder.svg");

/// Emitted by `dx` from `tailwind.css` at the crate root
const TAILWIND_CSS: &str = "/assets/tailwind.css";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    // Mock index at root
    #[route("/")]
    MockIndex {},
    // Storefront demo with full layout
    #[layout(DemoLayout)]
    #[route("/catalog")]
    Catalog {},
    #[route("/product/:product_id")]
    ProductDetail { product_id: String },
    #[end_layout]
    // Mock pages with controls
    #[route("/product-card?:state")]
    MockProductCard { state: Option<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| shop_ui::CardConfig {
        placeholder_image: PLACEHOLDER_SVG.to_string(),
        ..Default::default()
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
