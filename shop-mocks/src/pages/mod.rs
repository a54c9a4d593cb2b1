//! Demo app pages

mod catalog;
mod layout;
mod mock_index;
mod product_detail;

pub use catalog::Catalog;
pub use layout::{CartTally, DemoLayout};
pub use mock_index::{MockIndex, MockProductCard};
pub use product_detail::ProductDetail;
