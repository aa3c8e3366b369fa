//! Compute instance models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Group of instances launched by a single request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Reservation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,

    #[serde(default)]
    pub instances: Vec<Instance>,
}

/// Compute instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Instance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,

    /// pending, running, stopped, terminated, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_time: Option<DateTime<Utc>>,
}

impl Instance {
    /// Instance with only the ID set
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            instance_id: Some(id.into()),
            ..Self::default()
        }
    }
}
