//! Security group models

use serde::{Deserialize, Serialize};

/// Name the remote API gives every VPC's built-in group
pub const DEFAULT_SECURITY_GROUP_NAME: &str = "default";

/// Security group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SecurityGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SecurityGroup {
    /// Whether this is a VPC's built-in default group
    pub fn is_default(&self) -> bool {
        self.group_name.as_deref() == Some(DEFAULT_SECURITY_GROUP_NAME)
    }
}
