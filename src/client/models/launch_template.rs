//! Launch template models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored instance launch parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LaunchTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_template_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_template_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_version_number: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_version_number: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
}
