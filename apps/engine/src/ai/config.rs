//! AI configuration handling.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Standard configuration for AI players.
///
/// ```json
/// {"seed": 12345}
/// ```
///
/// Unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AiConfig {
    /// Optional RNG seed for reproducible decisions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl AiConfig {
    /// Parse an optional JSON config. Malformed input yields an empty config.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        config
            .and_then(|json| serde_json::from_value(json.clone()).ok())
            .unwrap_or_default()
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
