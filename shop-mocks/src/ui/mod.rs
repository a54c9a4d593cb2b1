//! Mock-only UI pieces

mod link_card;

pub use link_card::LinkCard;
