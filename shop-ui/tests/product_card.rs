//! Rendering tests for ProductCard, via server-side rendering to HTML

use dioxus::prelude::*;
use serde_json::{json, Value};
use shop_ui::{
    CardConfig, CartRequest, Notification, Product, ProductCard, DEFAULT_CARD_CLASS,
    PLACEHOLDER_IMAGE,
};

#[component]
fn Harness(product: Product, class: Option<String>) -> Element {
    rsx! {
        ProductCard {
            product,
            class,
            on_add_to_cart: |_: CartRequest| {},
            on_notify: |_: Notification| {},
        }
    }
}

#[component]
fn ConfiguredHarness(product: Product, config: CardConfig) -> Element {
    use_context_provider(|| config.clone());

    rsx! {
        ProductCard {
            product,
            on_add_to_cart: |_: CartRequest| {},
            on_notify: |_: Notification| {},
        }
    }
}

fn product(value: Value) -> Product {
    serde_json::from_value(value).unwrap()
}

fn render(product: Product) -> String {
    render_with_class(product, None)
}

fn render_with_class(product: Product, class: Option<String>) -> String {
    let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { product, class });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn render_with_config(product: Product, config: CardConfig) -> String {
    let mut dom = VirtualDom::new_with_props(
        ConfiguredHarness,
        ConfiguredHarnessProps { product, config },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn has_test_id(html: &str, test_id: &str) -> bool {
    html.contains(&format!("data-testid=\"{test_id}\""))
}

/// Text directly inside the element tagged with `test_id`
fn text_of(html: &str, test_id: &str) -> Option<String> {
    let marker = format!("data-testid=\"{test_id}\"");
    let rest = &html[html.find(&marker)?..];
    let rest = &rest[rest.find('>')? + 1..];
    Some(rest[..rest.find('<')?].to_string())
}

/// Opening tag of the element tagged with `test_id`
fn tag_of(html: &str, test_id: &str) -> Option<String> {
    let marker = format!("data-testid=\"{test_id}\"");
    let at = html.find(&marker)?;
    let start = html[..at].rfind('<')?;
    let end = at + html[at..].find('>')?;
    Some(html[start..=end].to_string())
}

fn in_stock() -> Value {
    json!({
        "id": 3,
        "title": "Mens Cotton Jacket",
        "description": "Great outerwear for spring and autumn.",
        "image": "https://cdn.example.com/jacket.png",
        "price": 55.99,
        "category": "outerwear",
        "stock": 12
    })
}

#[test]
fn out_of_stock_scenario() {
    let html = render(product(json!({
        "id": 7,
        "title": "A".repeat(60),
        "description": "B".repeat(100),
        "price": 10,
        "stock": 0
    })));

    assert_eq!(
        text_of(&html, "product-title"),
        Some(format!("{}...", "A".repeat(50)))
    );
    assert_eq!(
        text_of(&html, "product-description"),
        Some(format!("{}...", "B".repeat(90)))
    );
    assert_eq!(text_of(&html, "add-to-cart").as_deref(), Some("Out of Stock"));
    assert!(tag_of(&html, "add-to-cart").unwrap().contains("disabled=true"));
    assert!(has_test_id(&html, "out-of-stock-overlay"));
    assert_eq!(text_of(&html, "price").as_deref(), Some("$10.00"));
}

#[test]
fn full_title_kept_in_title_attribute() {
    let long = "A".repeat(60);
    let html = render(product(json!({ "id": 7, "title": long })));

    let tag = tag_of(&html, "product-title").unwrap();
    assert!(tag.contains(&format!("title=\"{long}\"")));
}

#[test]
fn in_stock_button_enabled() {
    let html = render(product(in_stock()));

    assert_eq!(text_of(&html, "add-to-cart").as_deref(), Some("Add to Cart"));
    let tag = tag_of(&html, "add-to-cart").unwrap();
    assert!(!tag.contains("disabled=true"));
    assert!(!tag.contains("aria-disabled"));
    assert!(!has_test_id(&html, "out-of-stock-overlay"));
}

#[test]
fn unavailable_flag_disables_purchase() {
    let mut value = in_stock();
    value["available"] = json!(false);
    let html = render(product(value));

    assert_eq!(text_of(&html, "add-to-cart").as_deref(), Some("Out of Stock"));
    assert!(has_test_id(&html, "out-of-stock-overlay"));
}

#[test]
fn short_text_not_truncated() {
    let html = render(product(in_stock()));

    assert_eq!(
        text_of(&html, "product-title").as_deref(),
        Some("Mens Cotton Jacket")
    );
    assert!(!html.contains("..."));
}

#[test]
fn missing_text_and_price_still_render() {
    let html = render(product(json!({ "id": "bare" })));

    assert!(has_test_id(&html, "product-card"));
    assert_eq!(text_of(&html, "product-title").as_deref(), Some(""));
    assert_eq!(text_of(&html, "product-description").as_deref(), Some(""));
    assert_eq!(
        text_of(&html, "price").as_deref(),
        Some(shop_ui::PRICE_UNAVAILABLE)
    );
    assert!(!has_test_id(&html, "category-badge"));
}

#[test]
fn original_price_struck_only_when_higher() {
    let mut value = in_stock();
    value["price"] = json!(20);

    value["originalPrice"] = json!(25);
    let html = render(product(value.clone()));
    assert_eq!(text_of(&html, "original-price").as_deref(), Some("$25.00"));
    assert!(tag_of(&html, "original-price")
        .unwrap()
        .contains("line-through"));

    value["originalPrice"] = json!(20);
    assert!(!has_test_id(&render(product(value.clone())), "original-price"));

    value.as_object_mut().unwrap().remove("originalPrice");
    assert!(!has_test_id(&render(product(value)), "original-price"));
}

#[test]
fn rating_badge_only_with_rating() {
    let mut value = in_stock();
    assert!(!has_test_id(&render(product(value.clone())), "rating-badge"));

    value["rating"] = json!({ "rate": 4.5, "count": 120 });
    let html = render(product(value));
    assert!(has_test_id(&html, "rating-badge"));
    assert!(html.contains("4.5"));
    assert!(html.contains("aria-hidden=\"true\""));
}

#[test]
fn rating_and_overlay_coexist() {
    let mut value = in_stock();
    value["stock"] = json!(0);
    value["rating"] = json!({ "rate": 3.9 });
    let html = render(product(value));

    assert!(has_test_id(&html, "rating-badge"));
    assert!(has_test_id(&html, "out-of-stock-overlay"));
}

#[test]
fn variant_selector_only_with_variants() {
    let mut value = in_stock();
    assert!(!has_test_id(&render(product(value.clone())), "variant-select"));

    value["variants"] = json!([]);
    assert!(!has_test_id(&render(product(value.clone())), "variant-select"));

    value["variants"] = json!([
        { "id": "s", "name": "Small" },
        { "name": "Large", "price": 5 }
    ]);
    let html = render(product(value));
    assert!(has_test_id(&html, "variant-select"));
    assert!(html.contains("Select variant"));
    assert!(html.contains("value=\"s\""));
    assert!(html.contains("value=\"1\""));
    assert!(html.contains("Large (+$5)"));
    assert!(html.contains("aria-label=\"Product variants\""));
}

#[test]
fn colliding_variant_ids_render_distinct_options() {
    let mut value = in_stock();
    value["variants"] = json!([
        { "id": "1", "name": "Red" },
        { "name": "Blue" }
    ]);
    let html = render(product(value));

    assert!(html.contains("<option value=\"0\">Red</option>"));
    assert!(html.contains("<option value=\"1\">Blue</option>"));
}

#[test]
fn variant_selector_disabled_when_out_of_stock() {
    let mut value = in_stock();
    value["variants"] = json!([{ "id": "s", "name": "Small" }]);

    let enabled = render(product(value.clone()));
    assert!(!tag_of(&enabled, "variant-select")
        .unwrap()
        .contains("disabled=true"));

    value["stock"] = json!(0);
    let disabled = render(product(value));
    assert!(tag_of(&disabled, "variant-select")
        .unwrap()
        .contains("disabled=true"));
}

#[test]
fn image_falls_back_to_placeholder() {
    let html = render(product(in_stock()));
    assert!(html.contains("src=\"https://cdn.example.com/jacket.png\""));
    assert!(html.contains("loading=\"lazy\""));

    let html = render(product(json!({ "id": 1, "title": "No picture" })));
    assert!(html.contains(&format!("src=\"{PLACEHOLDER_IMAGE}\"")));
}

#[test]
fn details_link_targets_product_route() {
    let html = render(product(in_stock()));

    let tag = tag_of(&html, "view-details").unwrap();
    assert!(tag.contains("href=\"/product/3\""));
    assert_eq!(text_of(&html, "view-details").as_deref(), Some("View Details"));
}

#[test]
fn category_badge_capitalized_by_style() {
    let mut value = in_stock();
    value["category"] = json!("electronics");
    let html = render(product(value));

    assert!(tag_of(&html, "category-badge").unwrap().contains("capitalize"));
    assert_eq!(
        text_of(&html, "category-badge").as_deref(),
        Some("electronics")
    );
}

#[test]
fn wrapper_class_defaults_and_passes_through() {
    let html = render(product(in_stock()));
    assert!(tag_of(&html, "product-card")
        .unwrap()
        .contains(DEFAULT_CARD_CLASS));

    let html = render_with_class(product(in_stock()), Some("col-span-2".to_string()));
    let tag = tag_of(&html, "product-card").unwrap();
    assert!(tag.contains("class=\"col-span-2\""));
}

#[test]
fn hover_and_breakpoint_styles_present() {
    let html = render(product(in_stock()));

    assert!(html.contains("hover:-translate-y-0.5"));
    assert!(html.contains("group-hover:scale-[1.03]"));
    assert!(html.contains("flex-col gap-1 min-[576px]:flex-row"));
}

#[test]
fn config_from_context_overrides_limits() {
    let config = CardConfig {
        title_max_chars: 4,
        placeholder_image: "/img/none.png".to_string(),
        ..CardConfig::default()
    };
    let html = render_with_config(product(json!({ "id": 1, "title": "Backpack" })), config);

    assert_eq!(text_of(&html, "product-title").as_deref(), Some("Back..."));
    assert!(html.contains("src=\"/img/none.png\""));
}
