//! Demo data for the storefront mocks
//!
//! Provides static fixture products for rendering the cards without a backend.

use shop_ui::{parse_catalog, Product, Rating, Variant, VariantId};
use std::sync::OnceLock;

/// Embedded fixture data (compiled into the binary)
const FIXTURE_JSON: &str = include_str!("../fixtures/products.json");

static PRODUCTS: OnceLock<Vec<Product>> = OnceLock::new();

/// All fixture products, parsed once
pub fn products() -> &'static [Product] {
    PRODUCTS.get_or_init(|| parse_catalog(FIXTURE_JSON).expect("Failed to parse fixture JSON"))
}

/// Look up a fixture product by id
pub fn find_product(id: &str) -> Option<&'static Product> {
    products().iter().find(|p| p.id.as_str() == id)
}

/// Settings for the single-card mock
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MockProductOptions {
    /// `"zero"` or `"unavailable"`; anything else is in stock
    pub stock: &'static str,
    pub on_sale: bool,
    pub variants: bool,
    pub rating: bool,
    pub image: bool,
    pub long_text: bool,
    pub sparse: bool,
}

/// Build the product shown by the single-card mock
pub fn mock_product(options: &MockProductOptions) -> Product {
    let mut product = Product::new("42");

    if options.sparse {
        return product;
    }

    product.title = Some(if options.long_text {
        "Ultralight Waterproof Hiking Backpack with Hydration Sleeve and Rain Cover".to_string()
    } else {
        "Trail Backpack".to_string()
    });
    product.description = Some(if options.long_text {
        "A 28 litre daypack with a ventilated back panel, hip-belt pockets, a hydration sleeve, \
         reflective trim and a packable rain cover for unexpected weather."
            .to_string()
    } else {
        "A 28 litre daypack for everyday trails.".to_string()
    });
    product.category = Some("outdoor gear".to_string());
    product.price = Some(89.0);

    if options.on_sale {
        product.original_price = Some(119.0);
    }
    if options.image {
        product.image = Some("https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg".to_string());
    }
    if options.rating {
        product.rating = Some(Rating {
            rate: 4.6,
            count: Some(318),
        });
    }
    if options.variants {
        product.variants = vec![
            Variant {
                id: Some(VariantId::new("olive")),
                name: "Olive".to_string(),
                price: None,
            },
            Variant {
                id: Some(VariantId::new("black")),
                name: "Black".to_string(),
                price: Some(5.0),
            },
            Variant {
                id: None,
                name: "Limited Orange".to_string(),
                price: Some(12.5),
            },
        ];
    }

    match options.stock {
        "zero" => product.stock = Some(0),
        "unavailable" => {
            product.stock = Some(8);
            product.available = Some(false);
        }
        _ => product.stock = Some(8),
    }

    product
}
