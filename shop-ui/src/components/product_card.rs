//! Product card component - pure view with callbacks

use crate::components::icons::StarIcon;
use crate::components::ChromelessButton;
use crate::config::use_card_config;
use dioxus::prelude::*;
use shop_common::{
    format_usd, truncate, CartRequest, Notification, Product, ProductId, StockStatus, Variant,
};
use tracing::{debug, info};

/// Message shown after a successful add-to-cart
pub const ADDED_TO_CART: &str = "Added to cart";

/// Hand `product` to the cart and ask for a success toast.
///
/// Out-of-stock products are refused without touching either callback.
/// Returns whether the product was added.
pub fn request_add_to_cart(
    product: &Product,
    variant: Option<Variant>,
    notify: impl FnOnce(Notification),
    add_to_cart: impl FnOnce(CartRequest),
) -> bool {
    if product.is_out_of_stock() {
        debug!(product_id = %product.id, "Refusing add to cart, out of stock");
        return false;
    }

    info!(
        product_id = %product.id,
        variant = variant.as_ref().map(|v| v.name.as_str()),
        "Adding product to cart"
    );
    notify(Notification::success(ADDED_TO_CART));
    add_to_cart(CartRequest::new(product.clone(), variant));
    true
}

/// A chosen variant, remembered with the product it was chosen on
#[derive(Clone, Debug, PartialEq)]
pub struct VariantSelection {
    product: ProductId,
    variants: Vec<Variant>,
    index: usize,
}

impl VariantSelection {
    pub fn new(product: &Product, index: usize) -> Self {
        Self {
            product: product.id.clone(),
            variants: product.variants.clone(),
            index,
        }
    }

    /// The selected position, if it still refers to `product`'s variants
    pub fn index_for(&self, product: &Product) -> Option<usize> {
        (self.product == product.id
            && self.variants == product.variants
            && self.index < product.variants.len())
        .then_some(self.index)
    }

    /// The selected variant, if the selection still applies to `product`
    pub fn variant_for(&self, product: &Product) -> Option<Variant> {
        self.index_for(product)
            .and_then(|index| product.variants.get(index).cloned())
    }
}

/// One entry of the variant selector
#[derive(Clone, Debug, PartialEq)]
pub struct VariantOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Price and selector state of a card for a given selection
#[derive(Clone, Debug, PartialEq)]
pub struct CardPricing {
    pub variant: Option<Variant>,
    pub price: String,
    pub original_price: Option<String>,
    pub options: Vec<VariantOption>,
}

/// Derive the price block and selector options for `product` with the
/// variant at `selected` (if any) chosen.
pub fn card_pricing(product: &Product, selected: Option<usize>) -> CardPricing {
    let variant = selected.and_then(|index| product.variants.get(index)).cloned();
    let options = product
        .variant_option_values()
        .into_iter()
        .zip(&product.variants)
        .enumerate()
        .map(|(index, (value, v))| VariantOption {
            value,
            label: v.label(),
            selected: selected == Some(index),
        })
        .collect();

    CardPricing {
        price: format_usd(product.effective_price(variant.as_ref())),
        original_price: product
            .shows_original_price_for(variant.as_ref())
            .then(|| format_usd(product.original_price)),
        options,
        variant,
    }
}

/// Storefront product card
///
/// Pure view component - shows image, text, price and purchase controls.
/// Cart, notification and navigation are all delegated through callbacks.
#[component]
pub fn ProductCard(
    product: Product,
    /// Called with the product (and chosen variant) when the shopper adds it
    on_add_to_cart: EventHandler<CartRequest>,
    /// Called with the success toast that accompanies an add
    on_notify: EventHandler<Notification>,
    /// Intercepts the details link; without it the link navigates by href
    #[props(default)]
    on_view_details: Option<EventHandler<ProductId>>,
    /// Layout class for the outer wrapper
    #[props(default)]
    class: Option<String>,
) -> Element {
    let config = use_card_config();
    let mut selection = use_signal(|| Option::<VariantSelection>::None);

    debug!(product_id = %product.id, "Rendering product card");

    let out_of_stock = product.stock_status() == StockStatus::OutOfStock;
    let selected_index = selection
        .read()
        .as_ref()
        .and_then(|s| s.index_for(&product));
    let CardPricing {
        variant: selected_variant,
        price,
        original_price,
        options: variant_options,
    } = card_pricing(&product, selected_index);

    let wrapper_class = class.unwrap_or_else(|| config.default_class.clone());
    let image_src = product
        .image_url()
        .map(str::to_string)
        .unwrap_or_else(|| config.placeholder_image.clone());
    let full_title = product.title.clone().unwrap_or_default();
    let title = truncate(product.title.as_deref(), config.title_max_chars);
    let description = truncate(product.description.as_deref(), config.description_max_chars);
    let category = product.category.clone().filter(|c| !c.is_empty());
    let rating = product.rating.as_ref().map(|r| r.rate);
    let detail_path = product.detail_path();
    let has_variants = !variant_options.is_empty();

    let (button_label, button_tone) = if out_of_stock {
        ("Out of Stock", "bg-gray-500 text-white cursor-not-allowed")
    } else {
        ("Add to Cart", "bg-gray-900 text-white hover:bg-gray-700")
    };
    let button_class = format!(
        "flex-1 px-3 py-1.5 text-sm border border-gray-900 rounded-md min-[576px]:rounded-l-none transition-colors {button_tone}"
    );

    let card_class = "group relative flex h-full flex-col overflow-hidden rounded-lg bg-white text-center shadow-md transition duration-200 ease-in-out hover:-translate-y-0.5 hover:shadow-xl";

    rsx! {
        div { class: "{wrapper_class}", "data-testid": "product-card",
            div { class: "{card_class}",
                // Image, with overlays
                div { class: "relative overflow-hidden",
                    img {
                        class: "w-full p-3 object-contain transition-transform duration-300 ease-in-out group-hover:scale-[1.03]",
                        src: "{image_src}",
                        alt: "{full_title}",
                        height: "220",
                        style: "height: 220px",
                        loading: "lazy",
                    }
                    if out_of_stock {
                        div {
                            class: "absolute inset-0 flex items-center justify-center bg-gray-100/75",
                            "data-testid": "out-of-stock-overlay",
                            span { class: "rounded bg-red-600 px-2 py-1 text-base font-semibold text-white",
                                "Out of Stock"
                            }
                        }
                    }
                    if let Some(rate) = rating {
                        div { class: "absolute top-0 right-0 m-2", "data-testid": "rating-badge",
                            span { class: "inline-flex items-center gap-1 rounded bg-amber-400 px-2 py-0.5 text-xs font-semibold text-gray-900",
                                StarIcon { class: "w-3 h-3" }
                                "{rate}"
                            }
                        }
                    }
                }

                // Info
                div { class: "flex flex-1 flex-col p-4",
                    h5 {
                        class: "mb-2 font-semibold text-gray-900",
                        "data-testid": "product-title",
                        title: "{full_title}",
                        "{title}"
                    }
                    p {
                        class: "flex-grow text-sm text-gray-500",
                        "data-testid": "product-description",
                        "{description}"
                    }
                    if let Some(category) = category {
                        div { class: "mb-2",
                            span {
                                class: "rounded bg-gray-500 px-2 py-0.5 text-xs text-white capitalize",
                                "data-testid": "category-badge",
                                "{category}"
                            }
                        }
                    }
                    if has_variants {
                        div { class: "mt-2 mb-3",
                            select {
                                class: "w-full rounded border border-gray-300 px-2 py-1 text-sm disabled:opacity-50",
                                "data-testid": "variant-select",
                                aria_label: "Product variants",
                                disabled: out_of_stock,
                                onchange: {
                                    let product = product.clone();
                                    move |evt: Event<FormData>| {
                                        let chosen = product
                                            .variant_index(&evt.value())
                                            .map(|index| VariantSelection::new(&product, index));
                                        selection.set(chosen);
                                    }
                                },
                                option { value: "", selected: selected_variant.is_none(), "Select variant" }
                                for (index , VariantOption { value , label , selected }) in variant_options
                                    .into_iter()
                                    .enumerate()
                                {
                                    option { key: "{index}", value: "{value}", selected, "{label}" }
                                }
                            }
                        }
                    }
                }

                // Price and actions
                div { class: "px-4 pb-4",
                    div { class: "mb-3",
                        h4 {
                            class: "mb-0 text-xl font-bold text-indigo-600",
                            "data-testid": "price",
                            "{price}"
                        }
                        if let Some(original_price) = original_price {
                            small {
                                class: "text-gray-500 line-through",
                                "data-testid": "original-price",
                                "{original_price}"
                            }
                        }
                    }
                    div {
                        class: "flex flex-col gap-1 min-[576px]:flex-row min-[576px]:gap-0",
                        role: "group",
                        a {
                            class: "flex-1 px-3 py-1.5 text-sm border border-gray-900 rounded-md min-[576px]:rounded-r-none text-gray-900 hover:bg-gray-900 hover:text-white transition-colors",
                            "data-testid": "view-details",
                            href: "{detail_path}",
                            onclick: {
                                let product_id = product.id.clone();
                                move |evt: MouseEvent| {
                                    if let Some(handler) = on_view_details {
                                        evt.prevent_default();
                                        handler.call(product_id.clone());
                                    }
                                }
                            },
                            "View Details"
                        }
                        ChromelessButton {
                            class: Some(button_class),
                            disabled: out_of_stock,
                            test_id: Some("add-to-cart"),
                            onclick: {
                                let product = product.clone();
                                move |_| {
                                    let variant = selection
                                        .peek()
                                        .as_ref()
                                        .and_then(|s| s.variant_for(&product));
                                    request_add_to_cart(
                                        &product,
                                        variant,
                                        |notification| on_notify.call(notification),
                                        |request| on_add_to_cart.call(request),
                                    );
                                }
                            },
                            "{button_label}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_common::VariantId;
    use std::cell::{Cell, RefCell};

    fn in_stock() -> Product {
        let mut product = Product::new("7");
        product.title = Some("Backpack".to_string());
        product.price = Some(10.0);
        product.stock = Some(4);
        product
    }

    #[test]
    fn test_in_stock_notifies_and_adds_once() {
        let product = in_stock();
        let notifications = RefCell::new(Vec::new());
        let requests = RefCell::new(Vec::new());

        let added = request_add_to_cart(
            &product,
            None,
            |n| notifications.borrow_mut().push(n),
            |r| requests.borrow_mut().push(r),
        );

        assert!(added);
        assert_eq!(
            notifications.into_inner(),
            vec![Notification::success(ADDED_TO_CART)]
        );
        let requests = requests.into_inner();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].product, product);
        assert_eq!(requests[0].variant, None);
    }

    #[test]
    fn test_zero_stock_touches_nothing() {
        let mut product = in_stock();
        product.stock = Some(0);
        let calls = Cell::new(0);

        let added = request_add_to_cart(
            &product,
            None,
            |_| calls.set(calls.get() + 1),
            |_| calls.set(calls.get() + 1),
        );

        assert!(!added);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_unavailable_touches_nothing() {
        let mut product = in_stock();
        product.available = Some(false);
        let calls = Cell::new(0);

        let added = request_add_to_cart(
            &product,
            None,
            |_| calls.set(calls.get() + 1),
            |_| calls.set(calls.get() + 1),
        );

        assert!(!added);
        assert_eq!(calls.get(), 0);
    }

    fn variant(id: Option<&str>, name: &str, price: Option<f64>) -> Variant {
        Variant {
            id: id.map(VariantId::new),
            name: name.to_string(),
            price,
        }
    }

    #[test]
    fn test_selected_variant_travels_with_request() {
        let mut product = in_stock();
        let large = variant(Some("l"), "Large", Some(2.5));
        product.variants = vec![large.clone()];
        let selection = product
            .variant_index("l")
            .map(|index| VariantSelection::new(&product, index));
        let mut request = None;

        request_add_to_cart(
            &product,
            selection.and_then(|s| s.variant_for(&product)),
            |_| {},
            |r| request = Some(r),
        );

        let request = request.unwrap();
        assert_eq!(request.product, product);
        assert_eq!(request.variant, Some(large));
        assert_eq!(request.unit_price(), Some(12.5));
    }

    #[test]
    fn test_pricing_follows_selection() {
        let mut product = in_stock();
        product.variants = vec![
            variant(Some("s"), "Small", None),
            variant(Some("l"), "Large", Some(5.0)),
        ];

        let none = card_pricing(&product, None);
        assert_eq!(none.price, "$10.00");
        assert_eq!(none.variant, None);
        assert!(none.options.iter().all(|o| !o.selected));

        let large = card_pricing(&product, Some(1));
        assert_eq!(large.price, "$15.00");
        assert_eq!(large.variant.map(|v| v.name), Some("Large".to_string()));
        assert_eq!(
            large.options,
            vec![
                VariantOption {
                    value: "s".to_string(),
                    label: "Small".to_string(),
                    selected: false,
                },
                VariantOption {
                    value: "l".to_string(),
                    label: "Large (+$5)".to_string(),
                    selected: true,
                },
            ]
        );
    }

    #[test]
    fn test_out_of_range_selection_ignored() {
        let mut product = in_stock();
        product.variants = vec![variant(None, "Red", Some(1.0))];

        let pricing = card_pricing(&product, Some(4));
        assert_eq!(pricing.variant, None);
        assert_eq!(pricing.price, "$10.00");
    }

    #[test]
    fn test_colliding_ids_pick_the_chosen_variant() {
        let mut product = in_stock();
        product.variants = vec![variant(Some("1"), "Red", None), variant(None, "Blue", None)];

        let pricing = card_pricing(&product, None);
        let values: Vec<_> = pricing.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["0", "1"]);

        let blue = product
            .variant_index("1")
            .map(|index| VariantSelection::new(&product, index))
            .and_then(|s| s.variant_for(&product));
        assert_eq!(blue.map(|v| v.name), Some("Blue".to_string()));
    }

    #[test]
    fn test_strikethrough_hidden_when_variant_price_passes_original() {
        let mut product = in_stock();
        product.price = Some(20.0);
        product.original_price = Some(25.0);
        product.variants = vec![
            variant(Some("s"), "Small", Some(2.0)),
            variant(Some("xl"), "XL", Some(10.0)),
        ];

        assert_eq!(
            card_pricing(&product, None).original_price,
            Some("$25.00".to_string())
        );
        assert_eq!(
            card_pricing(&product, Some(0)).original_price,
            Some("$25.00".to_string())
        );

        let xl = card_pricing(&product, Some(1));
        assert_eq!(xl.price, "$30.00");
        assert_eq!(xl.original_price, None);
    }

    #[test]
    fn test_selection_dropped_when_product_changes() {
        let mut product = in_stock();
        product.variants = vec![variant(None, "Red", None), variant(None, "Blue", None)];
        let selection = VariantSelection::new(&product, 1);
        assert_eq!(selection.index_for(&product), Some(1));

        let mut other = product.clone();
        other.id = ProductId::new("8");
        assert_eq!(selection.index_for(&other), None);

        let mut rebuilt = product.clone();
        rebuilt.variants.truncate(1);
        assert_eq!(selection.index_for(&rebuilt), None);
        assert_eq!(selection.variant_for(&rebuilt), None);
    }
}
