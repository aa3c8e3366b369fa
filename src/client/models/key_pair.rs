//! SSH key pair models

use serde::{Deserialize, Serialize};

/// Registered SSH key pair
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeyPairInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_pair_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_fingerprint: Option<String>,
}
