//! URL state persistence for mock pages
//!
//! Control state travels in the `state` query parameter as base64 (URL-safe,
//! unpadded) JSON, so a mock configuration can be bookmarked or shared.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use std::collections::BTreeMap;

/// Decode a `state` parameter into key-value pairs.
///
/// Anything undecodable yields no pairs, leaving every control at its default.
pub fn parse_state(encoded: &str) -> Vec<(String, String)> {
    if encoded.is_empty() {
        return Vec::new();
    }

    let Ok(json_bytes) = URL_SAFE_NO_PAD.decode(encoded) else {
        tracing::warn!(encoded, "Ignoring undecodable mock state");
        return Vec::new();
    };

    serde_json::from_slice::<BTreeMap<String, String>>(&json_bytes)
        .map(|map| map.into_iter().collect())
        .unwrap_or_default()
}

/// Encode key-value pairs into a `state` parameter
pub fn build_state(pairs: &[(String, String)]) -> String {
    let map: BTreeMap<&str, &str> = pairs
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    // A map of strings always serializes
    let json = serde_json::to_string(&map).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json.as_bytes())
}

/// Collects non-default control values into a `state` parameter
#[derive(Default)]
pub struct StateBuilder {
    pairs: Vec<(String, String)>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bool(&mut self, key: &str, value: bool, default: bool) {
        if value != default {
            self.pairs
                .push((key.to_string(), if value { "1" } else { "0" }.to_string()));
        }
    }

    pub fn set_string(&mut self, key: &str, value: &str) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    /// `None` when every control is at its default, keeping the URL clean
    pub fn build_option(self) -> Option<String> {
        if self.pairs.is_empty() {
            None
        } else {
            Some(build_state(&self.pairs))
        }
    }
}
