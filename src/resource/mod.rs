//! Resource types produced by the inventory
//!
//! Each [`ResourceType`] is registered once with a [`SchemaRegistry`] supplied
//! by the consumer; see [`init_resources_metadata`].

mod metadata;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use metadata::init_resources_metadata;

/// Resource type names fed by the EC2 inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    AwsAmi,
    AwsEbsSnapshot,
    AwsEbsVolume,
    AwsEip,
    AwsEipAssociation,
    AwsInstance,
    AwsKeyPair,
    AwsInternetGateway,
    AwsNatGateway,
    AwsSubnet,
    AwsDefaultSubnet,
    AwsVpc,
    AwsDefaultVpc,
    AwsRouteTable,
    AwsDefaultRouteTable,
    AwsNetworkAcl,
    AwsDefaultNetworkAcl,
    AwsSecurityGroup,
    AwsDefaultSecurityGroup,
    AwsLaunchTemplate,
}

impl ResourceType {
    pub const ALL: [ResourceType; 20] = [
        ResourceType::AwsAmi,
        ResourceType::AwsEbsSnapshot,
        ResourceType::AwsEbsVolume,
        ResourceType::AwsEip,
        ResourceType::AwsEipAssociation,
        ResourceType::AwsInstance,
        ResourceType::AwsKeyPair,
        ResourceType::AwsInternetGateway,
        ResourceType::AwsNatGateway,
        ResourceType::AwsSubnet,
        ResourceType::AwsDefaultSubnet,
        ResourceType::AwsVpc,
        ResourceType::AwsDefaultVpc,
        ResourceType::AwsRouteTable,
        ResourceType::AwsDefaultRouteTable,
        ResourceType::AwsNetworkAcl,
        ResourceType::AwsDefaultNetworkAcl,
        ResourceType::AwsSecurityGroup,
        ResourceType::AwsDefaultSecurityGroup,
        ResourceType::AwsLaunchTemplate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::AwsAmi => "aws_ami",
            ResourceType::AwsEbsSnapshot => "aws_ebs_snapshot",
            ResourceType::AwsEbsVolume => "aws_ebs_volume",
            ResourceType::AwsEip => "aws_eip",
            ResourceType::AwsEipAssociation => "aws_eip_association",
            ResourceType::AwsInstance => "aws_instance",
            ResourceType::AwsKeyPair => "aws_key_pair",
            ResourceType::AwsInternetGateway => "aws_internet_gateway",
            ResourceType::AwsNatGateway => "aws_nat_gateway",
            ResourceType::AwsSubnet => "aws_subnet",
            ResourceType::AwsDefaultSubnet => "aws_default_subnet",
            ResourceType::AwsVpc => "aws_vpc",
            ResourceType::AwsDefaultVpc => "aws_default_vpc",
            ResourceType::AwsRouteTable => "aws_route_table",
            ResourceType::AwsDefaultRouteTable => "aws_default_route_table",
            ResourceType::AwsNetworkAcl => "aws_network_acl",
            ResourceType::AwsDefaultNetworkAcl => "aws_default_network_acl",
            ResourceType::AwsSecurityGroup => "aws_security_group",
            ResourceType::AwsDefaultSecurityGroup => "aws_default_security_group",
            ResourceType::AwsLaunchTemplate => "aws_launch_template",
        }
    }
}

impl FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| format!("unknown resource type: {}", s))
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags::bitflags! {
    /// Per-type behaviour switches understood by the registry
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ResourceFlags: u8 {
        /// Type is only reported when the consumer enumerates in deep mode
        const DEEP_MODE = 1;
    }
}

/// Rewrites a resource's attribute map in place before comparison
pub type Normalizer = fn(&mut Map<String, Value>);

/// Consumer-side registry of resource schemas
pub trait SchemaRegistry {
    fn set_flags(&mut self, ty: ResourceType, flags: ResourceFlags);

    fn set_normalizer(&mut self, ty: ResourceType, normalizer: Normalizer);
}
