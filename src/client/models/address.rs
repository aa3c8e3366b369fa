//! Elastic IP address models

use serde::{Deserialize, Serialize};

/// Elastic IP address and its current association, if any
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_id: Option<String>,

    /// Present only while the address is associated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_ip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,

    /// vpc or standard
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}
