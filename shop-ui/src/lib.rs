//! shop-ui - Storefront view components
//!
//! Pure view components driven by props and callbacks, plus the small
//! stores (card config, toast queue) they share with embedding apps.

pub mod components;
pub mod config;
pub mod stores;

pub use components::*;
pub use config::{use_card_config, CardConfig, DEFAULT_CARD_CLASS, PLACEHOLDER_IMAGE};
pub use shop_common::*;
