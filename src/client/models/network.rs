//! VPC, subnet and gateway models

use serde::{Deserialize, Serialize};

/// Virtual private cloud
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Vpc {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr_block: Option<String>,

    /// Whether this is the region's default VPC
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Subnet within a VPC
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Subnet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr_block: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,

    /// Whether this is the default subnet for its availability zone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_for_az: Option<bool>,
}

impl Subnet {
    pub fn new(id: impl Into<String>, default_for_az: bool) -> Self {
        Self {
            subnet_id: Some(id.into()),
            default_for_az: Some(default_for_az),
            ..Self::default()
        }
    }
}

/// Internet gateway
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InternetGateway {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internet_gateway_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<InternetGatewayAttachment>,
}

/// VPC attachment of an internet gateway
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InternetGatewayAttachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// NAT gateway
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NatGateway {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nat_gateway_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}
