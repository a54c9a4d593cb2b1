//! Mock framework for Storybook-like component development
//!
//! Provides:
//! - ControlRegistry: Typed control bag with automatic URL sync
//! - Presets: Named state configurations for quick switching
//! - MockPanel: Control panel UI with built-in viewport switching

mod panel;
mod preset;
mod registry;
mod viewport;

pub use panel::MockPanel;
pub use preset::Preset;
pub use registry::{ControlRegistry, ControlRegistryBuilder, ControlValue};
pub use viewport::{Breakpoint, MockViewport, DEFAULT_BREAKPOINTS};
