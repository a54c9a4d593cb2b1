//! Card display settings, provided through context

use dioxus::prelude::*;
use shop_common::{DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS};

/// Layout class applied to a card's outer wrapper when the caller gives none
pub const DEFAULT_CARD_CLASS: &str = "w-full sm:w-1/2 md:w-1/3 px-2 mb-4";

/// Image shown for products without one
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Display settings shared by every card under a provider.
///
/// Apps override it with `use_context_provider(|| CardConfig { .. })`; cards
/// rendered without a provider use [`CardConfig::default`].
#[derive(Clone, Debug, PartialEq)]
pub struct CardConfig {
    pub title_max_chars: usize,
    pub description_max_chars: usize,
    pub placeholder_image: String,
    pub default_class: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            title_max_chars: TITLE_MAX_CHARS,
            description_max_chars: DESCRIPTION_MAX_CHARS,
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            default_class: DEFAULT_CARD_CLASS.to_string(),
        }
    }
}

/// Read the nearest [`CardConfig`], falling back to the defaults
pub fn use_card_config() -> CardConfig {
    try_use_context::<CardConfig>().unwrap_or_default()
}
