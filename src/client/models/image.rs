//! Machine image models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Machine image (AMI) owned by the scanned account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Image {
    /// Image ID (ami-...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Owning account ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,

    /// available, pending, failed, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
}

impl Image {
    /// Image with only the ID set
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            image_id: Some(id.into()),
            ..Self::default()
        }
    }
}
