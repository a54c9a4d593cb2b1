//! Component mocks with interactive controls

pub mod framework;
mod product_card;
pub mod url_state;

pub use product_card::ProductCardMock;
