//! Shared UI components

pub mod button;
pub mod icons;
pub mod product_card;
pub mod toast;

pub use button::ChromelessButton;
pub use icons::{AlertTriangleIcon, CheckIcon, StarIcon, XIcon};
pub use product_card::{
    card_pricing, request_add_to_cart, CardPricing, ProductCard, VariantOption, VariantSelection,
    ADDED_TO_CART,
};
pub use toast::{ToastStack, ToastView};
