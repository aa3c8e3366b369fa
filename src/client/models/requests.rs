//! Request and response envelopes for the remote describe operations
//!
//! Inputs carry only the filters this crate sends. Outputs carry one page of
//! results (or the whole result, for operations that don't paginate).

use serde::{Deserialize, Serialize};

use super::{
    Address, Image, InternetGateway, KeyPairInfo, LaunchTemplate, NatGateway, NetworkAcl,
    Reservation, RouteTable, SecurityGroup, Snapshot, Subnet, Volume, Vpc,
};

/// Owner filter value selecting the caller's own account
pub const OWNER_SELF: &str = "self";

// ============================================================================
// Inputs
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeImagesInput {
    /// Restrict to images owned by these accounts
    pub owners: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeSnapshotsInput {
    /// Restrict to snapshots owned by these accounts
    pub owner_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeVolumesInput {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeAddressesInput {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeInstancesInput {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeKeyPairsInput {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeInternetGatewaysInput {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeNatGatewaysInput {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeSubnetsInput {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeVpcsInput {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeRouteTablesInput {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeNetworkAclsInput {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeSecurityGroupsInput {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeLaunchTemplatesInput {}

// ============================================================================
// Outputs
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeImagesOutput {
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeSnapshotsOutput {
    #[serde(default)]
    pub snapshots: Vec<Snapshot>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeVolumesOutput {
    #[serde(default)]
    pub volumes: Vec<Volume>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeAddressesOutput {
    #[serde(default)]
    pub addresses: Vec<Address>,
}

/// One page of reservations, each holding its own instances
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstancesOutput {
    #[serde(default)]
    pub reservations: Vec<Reservation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeKeyPairsOutput {
    #[serde(default)]
    pub key_pairs: Vec<KeyPairInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInternetGatewaysOutput {
    #[serde(default)]
    pub internet_gateways: Vec<InternetGateway>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeNatGatewaysOutput {
    #[serde(default)]
    pub nat_gateways: Vec<NatGateway>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeSubnetsOutput {
    #[serde(default)]
    pub subnets: Vec<Subnet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeVpcsOutput {
    #[serde(default)]
    pub vpcs: Vec<Vpc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeRouteTablesOutput {
    #[serde(default)]
    pub route_tables: Vec<RouteTable>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeNetworkAclsOutput {
    #[serde(default)]
    pub network_acls: Vec<NetworkAcl>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeSecurityGroupsOutput {
    #[serde(default)]
    pub security_groups: Vec<SecurityGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeLaunchTemplatesOutput {
    #[serde(default)]
    pub launch_templates: Vec<LaunchTemplate>,
}
