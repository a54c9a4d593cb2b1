//! State presets for quick configuration switching

use super::registry::{ControlRegistry, ControlValue};
use dioxus::prelude::ReadableExt;
use std::collections::HashMap;

/// A named preset with predefined control values
#[derive(Clone, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub values: HashMap<String, ControlValue>,
}

impl Preset {
    /// Create a new preset with the given name
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            values: HashMap::new(),
        }
    }

    /// Set a boolean value in this preset
    pub fn set_bool(mut self, key: &'static str, value: bool) -> Self {
        self.values
            .insert(key.to_string(), ControlValue::Bool(value));
        self
    }

    /// Set a string/enum value in this preset
    pub fn set_string(mut self, key: &'static str, value: &'static str) -> Self {
        self.values
            .insert(key.to_string(), ControlValue::String(value.to_string()));
        self
    }

    /// Check if this preset matches the current registry state.
    /// Controls the preset names must hold its value; all others must be at default.
    pub fn matches(&self, registry: &ControlRegistry) -> bool {
        registry.controls.iter().all(|control| {
            let current = registry.values.get(control.key).map(|s| s.read().clone());
            let expected = self.values.get(control.key).unwrap_or(&control.default);
            current.as_ref() == Some(expected)
        })
    }
}
