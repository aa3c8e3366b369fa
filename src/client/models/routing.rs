//! Route table and network ACL models

use serde::{Deserialize, Serialize};

/// Route table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RouteTable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_table_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub associations: Vec<RouteTableAssociation>,
}

impl RouteTable {
    /// Whether this is the main route table of its VPC
    pub fn is_main(&self) -> bool {
        self.associations
            .iter()
            .any(|assoc| assoc.main.unwrap_or(false))
    }
}

/// Association between a route table and a subnet (or the VPC, when main)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RouteTableAssociation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_table_association_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub main: Option<bool>,
}

/// Network ACL
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkAcl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_acl_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}
