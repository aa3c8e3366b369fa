//! Block storage models (volumes and snapshots)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point-in-time copy of a volume
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Snapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,

    /// Source volume
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Size of the source volume in GiB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_size: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
}

/// Block storage volume
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Volume {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,

    /// Size in GiB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,

    /// gp2, gp3, io1, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
}
