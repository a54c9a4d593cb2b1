//! Store types for UI state management
//!
//! State shared between the card views and the apps that embed them.

pub mod toasts;

pub use toasts::*;
