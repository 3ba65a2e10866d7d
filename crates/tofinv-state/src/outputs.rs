//! Parsed `tofu output -json` data

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// One declared output as printed by `tofu output -json`
///
/// Tofu prints `{"sensitive": ..., "type": ..., "value": ...}` per output;
/// only `value` matters here and extra fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputValue {
    /// Marked sensitive in the tofu configuration
    #[serde(default)]
    pub sensitive: bool,
    /// The output's value, `Null` when the field is absent
    #[serde(default)]
    pub value: Value,
}

/// The full output map of the current state
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct StateOutputs(HashMap<String, OutputValue>);

impl StateOutputs {
    /// Look up a raw output by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OutputValue> {
        self.0.get(name)
    }

    /// String value of an output
    ///
    /// `None` when the output is missing or its value is not a JSON string.
    /// An empty string is still `Some` - callers decide whether that counts.
    #[must_use]
    pub fn string_value(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|output| output.value.as_str())
    }

    /// Number of declared outputs
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the state declares no outputs
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
