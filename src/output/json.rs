//! JSON output formatting

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    pub data: T,
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// When the output was produced
    pub timestamp: String,

    /// CLI version
    pub version: String,

    /// Inventory document the data was read from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Describe calls issued to produce the data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_calls: Option<usize>,
}

impl Metadata {
    pub fn new() -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            source: None,
            remote_calls: None,
        }
    }

    /// Record which inventory document was read and how many calls it took
    pub fn with_inventory(mut self, source: impl Into<String>, remote_calls: usize) -> Self {
        self.source = Some(source.into());
        self.remote_calls = Some(remote_calls);
        self
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::new()
    }
}

/// Format data as pretty-printed JSON under `meta`
pub fn format_json<T: Serialize + ?Sized>(
    data: &T,
    meta: Metadata,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput { data, meta })
}
