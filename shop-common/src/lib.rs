//! Pure storefront data model and display derivations.
//!
//! Nothing in here touches a UI framework, so the same rules back the card
//! view, the mocks app and the unit tests.

mod cart;
mod catalog;
mod notification;
mod price;
mod product;
mod text;

pub use cart::CartRequest;
pub use catalog::{parse_catalog, ProductError};
pub use notification::{Notification, NotificationKind};
pub use price::{format_usd, PRICE_UNAVAILABLE};
pub use product::{Product, ProductId, Rating, StockStatus, Variant, VariantId};
pub use text::{truncate, DESCRIPTION_MAX_CHARS, ELLIPSIS, TITLE_MAX_CHARS};
