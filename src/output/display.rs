//! Display models for table and JSON output

use serde::Serialize;
use tabled::Tabled;

use crate::resource::ResourceType;

/// One line of the inventory summary
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct SummaryDisplay {
    #[tabled(rename = "RESOURCE TYPE")]
    pub resource_type: String,

    #[tabled(rename = "COUNT")]
    pub count: usize,
}

impl SummaryDisplay {
    pub fn new(ty: ResourceType, count: usize) -> Self {
        Self {
            resource_type: ty.to_string(),
            count,
        }
    }
}

/// A single resource identifier
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ResourceDisplay {
    #[tabled(rename = "ID")]
    pub id: String,
}

impl From<String> for ResourceDisplay {
    fn from(id: String) -> Self {
        Self { id }
    }
}
