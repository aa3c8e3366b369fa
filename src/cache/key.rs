//! Cache keys for memoized inventory queries

use std::fmt;

/// One memoized result slot per "list all" query.
///
/// Keys are a closed set so two entry points can never collide on a typo.
/// The string form is stable for the lifetime of the process and is what
/// shows up in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Images,
    Snapshots,
    Volumes,
    Addresses,
    AddressesAssociation,
    Instances,
    KeyPairs,
    InternetGateways,
    NatGateways,
    RouteTables,
    NetworkAcls,
    LaunchTemplates,
}

impl CacheKey {
    /// Every key, in declaration order.
    pub const ALL: [CacheKey; 12] = [
        CacheKey::Images,
        CacheKey::Snapshots,
        CacheKey::Volumes,
        CacheKey::Addresses,
        CacheKey::AddressesAssociation,
        CacheKey::Instances,
        CacheKey::KeyPairs,
        CacheKey::InternetGateways,
        CacheKey::NatGateways,
        CacheKey::RouteTables,
        CacheKey::NetworkAcls,
        CacheKey::LaunchTemplates,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CacheKey::Images => "ec2ListAllImages",
            CacheKey::Snapshots => "ec2ListAllSnapshots",
            CacheKey::Volumes => "ec2ListAllVolumes",
            CacheKey::Addresses => "ec2ListAllAddresses",
            CacheKey::AddressesAssociation => "ec2ListAllAddressesAssociation",
            CacheKey::Instances => "ec2ListAllInstances",
            CacheKey::KeyPairs => "ec2ListAllKeyPairs",
            CacheKey::InternetGateways => "ec2ListAllInternetGateways",
            CacheKey::NatGateways => "ec2ListAllNatGateways",
            CacheKey::RouteTables => "ec2ListAllRouteTables",
            CacheKey::NetworkAcls => "ec2ListAllNetworkACLs",
            CacheKey::LaunchTemplates => "ec2ListAllLaunchTemplates",
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
