//! File-backed EC2 client
//!
//! Serves a recorded inventory document through the same calling conventions
//! as the remote API, splitting paged operations into `page_size` chunks.
//! Used by the binary and for offline runs against captured inventories.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

use super::models::{
    Address, DescribeAddressesInput, DescribeAddressesOutput, DescribeImagesInput,
    DescribeImagesOutput, DescribeInstancesInput, DescribeInstancesOutput,
    DescribeInternetGatewaysInput, DescribeInternetGatewaysOutput, DescribeKeyPairsInput,
    DescribeKeyPairsOutput, DescribeLaunchTemplatesInput, DescribeLaunchTemplatesOutput,
    DescribeNatGatewaysInput, DescribeNatGatewaysOutput, DescribeNetworkAclsInput,
    DescribeNetworkAclsOutput, DescribeRouteTablesInput, DescribeRouteTablesOutput,
    DescribeSecurityGroupsInput, DescribeSecurityGroupsOutput, DescribeSnapshotsInput,
    DescribeSnapshotsOutput, DescribeSubnetsInput, DescribeSubnetsOutput, DescribeVolumesInput,
    DescribeVolumesOutput, DescribeVpcsInput, DescribeVpcsOutput, Image, InternetGateway,
    KeyPairInfo, LaunchTemplate, NatGateway, NetworkAcl, OWNER_SELF, Reservation, RouteTable,
    SecurityGroup, Snapshot, Subnet, Volume, Vpc,
};
use super::{Ec2Api, PageHandler};
use crate::error::{ConfigError, Result};

/// Recorded inventory of one account and region
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Inventory {
    /// Account the inventory belongs to; resolves the `self` owner filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    pub images: Vec<Image>,
    pub snapshots: Vec<Snapshot>,
    pub volumes: Vec<Volume>,
    pub addresses: Vec<Address>,
    pub reservations: Vec<Reservation>,
    pub key_pairs: Vec<KeyPairInfo>,
    pub internet_gateways: Vec<InternetGateway>,
    pub nat_gateways: Vec<NatGateway>,
    pub subnets: Vec<Subnet>,
    pub vpcs: Vec<Vpc>,
    pub route_tables: Vec<RouteTable>,
    pub network_acls: Vec<NetworkAcl>,
    pub security_groups: Vec<SecurityGroup>,
    pub launch_templates: Vec<LaunchTemplate>,
}

impl Inventory {
    /// Load an inventory from a `.yaml`/`.yml` or JSON file
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        let inventory: Inventory = if is_yaml {
            serde_yaml::from_str(&contents).map_err(ConfigError::from)?
        } else {
            serde_json::from_str(&contents)?
        };
        Ok(inventory)
    }

    /// Whether `owner` passes an owner filter
    fn owned(&self, owners: &[String], owner: Option<&String>) -> bool {
        if owners.is_empty() {
            return true;
        }
        owners.iter().any(|filter| {
            let filter = if filter == OWNER_SELF {
                match &self.account_id {
                    Some(account) => account,
                    // Unknown account: everything recorded is ours
                    None => return true,
                }
            } else {
                filter
            };
            owner == Some(filter)
        })
    }
}

/// [`Ec2Api`] implementation over an [`Inventory`]
pub struct FixtureEc2Client {
    inventory: Inventory,
    page_size: usize,
    calls: AtomicUsize,
}

impl FixtureEc2Client {
    /// Serve `inventory`, delivering at most `page_size` items per page.
    pub fn new(inventory: Inventory, page_size: usize) -> Self {
        Self {
            inventory,
            page_size: page_size.max(1),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of describe calls served so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self, method: &str) {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Fixture call #{}: {}", n, method);
    }

    /// Deliver `items` in `page_size` chunks. An empty list is one empty page.
    fn paginate<T, P>(&self, items: &[T], wrap: impl Fn(Vec<T>) -> P, on_page: PageHandler<'_, P>)
    where
        T: Clone,
    {
        if items.is_empty() {
            on_page(wrap(Vec::new()), true);
            return;
        }

        let total = items.len().div_ceil(self.page_size);
        for (index, chunk) in items.chunks(self.page_size).enumerate() {
            if !on_page(wrap(chunk.to_vec()), index + 1 == total) {
                debug!("Page handler stopped paging at page {}", index + 1);
                break;
            }
        }
    }
}

#[async_trait]
impl Ec2Api for FixtureEc2Client {
    async fn describe_images(&self, input: &DescribeImagesInput) -> Result<DescribeImagesOutput> {
        self.record("DescribeImages");
        let images = self
            .inventory
            .images
            .iter()
            .filter(|image| self.inventory.owned(&input.owners, image.owner_id.as_ref()))
            .cloned()
            .collect();
        Ok(DescribeImagesOutput { images })
    }

    async fn describe_snapshots_pages(
        &self,
        input: &DescribeSnapshotsInput,
        on_page: PageHandler<'_, DescribeSnapshotsOutput>,
    ) -> Result<()> {
        self.record("DescribeSnapshots");
        let owned: Vec<Snapshot> = self
            .inventory
            .snapshots
            .iter()
            .filter(|snapshot| {
                self.inventory
                    .owned(&input.owner_ids, snapshot.owner_id.as_ref())
            })
            .cloned()
            .collect();
        self.paginate(&owned, |snapshots| DescribeSnapshotsOutput { snapshots }, on_page);
        Ok(())
    }

    async fn describe_volumes_pages(
        &self,
        _input: &DescribeVolumesInput,
        on_page: PageHandler<'_, DescribeVolumesOutput>,
    ) -> Result<()> {
        self.record("DescribeVolumes");
        self.paginate(
            &self.inventory.volumes,
            |volumes| DescribeVolumesOutput { volumes },
            on_page,
        );
        Ok(())
    }

    async fn describe_instances_pages(
        &self,
        _input: &DescribeInstancesInput,
        on_page: PageHandler<'_, DescribeInstancesOutput>,
    ) -> Result<()> {
        self.record("DescribeInstances");
        self.paginate(
            &self.inventory.reservations,
            |reservations| DescribeInstancesOutput { reservations },
            on_page,
        );
        Ok(())
    }

    async fn describe_key_pairs(
        &self,
        _input: &DescribeKeyPairsInput,
    ) -> Result<DescribeKeyPairsOutput> {
        self.record("DescribeKeyPairs");
        Ok(DescribeKeyPairsOutput {
            key_pairs: self.inventory.key_pairs.clone(),
        })
    }

    async fn describe_launch_templates_pages(
        &self,
        _input: &DescribeLaunchTemplatesInput,
        on_page: PageHandler<'_, DescribeLaunchTemplatesOutput>,
    ) -> Result<()> {
        self.record("DescribeLaunchTemplates");
        self.paginate(
            &self.inventory.launch_templates,
            |launch_templates| DescribeLaunchTemplatesOutput { launch_templates },
            on_page,
        );
        Ok(())
    }

    async fn describe_addresses(
        &self,
        _input: &DescribeAddressesInput,
    ) -> Result<DescribeAddressesOutput> {
        self.record("DescribeAddresses");
        Ok(DescribeAddressesOutput {
            addresses: self.inventory.addresses.clone(),
        })
    }

    async fn describe_internet_gateways_pages(
        &self,
        _input: &DescribeInternetGatewaysInput,
        on_page: PageHandler<'_, DescribeInternetGatewaysOutput>,
    ) -> Result<()> {
        self.record("DescribeInternetGateways");
        self.paginate(
            &self.inventory.internet_gateways,
            |internet_gateways| DescribeInternetGatewaysOutput { internet_gateways },
            on_page,
        );
        Ok(())
    }

    async fn describe_nat_gateways_pages(
        &self,
        _input: &DescribeNatGatewaysInput,
        on_page: PageHandler<'_, DescribeNatGatewaysOutput>,
    ) -> Result<()> {
        self.record("DescribeNatGateways");
        self.paginate(
            &self.inventory.nat_gateways,
            |nat_gateways| DescribeNatGatewaysOutput { nat_gateways },
            on_page,
        );
        Ok(())
    }

    async fn describe_subnets_pages(
        &self,
        _input: &DescribeSubnetsInput,
        on_page: PageHandler<'_, DescribeSubnetsOutput>,
    ) -> Result<()> {
        self.record("DescribeSubnets");
        self.paginate(
            &self.inventory.subnets,
            |subnets| DescribeSubnetsOutput { subnets },
            on_page,
        );
        Ok(())
    }

    async fn describe_vpcs_pages(
        &self,
        _input: &DescribeVpcsInput,
        on_page: PageHandler<'_, DescribeVpcsOutput>,
    ) -> Result<()> {
        self.record("DescribeVpcs");
        self.paginate(&self.inventory.vpcs, |vpcs| DescribeVpcsOutput { vpcs }, on_page);
        Ok(())
    }

    async fn describe_route_tables_pages(
        &self,
        _input: &DescribeRouteTablesInput,
        on_page: PageHandler<'_, DescribeRouteTablesOutput>,
    ) -> Result<()> {
        self.record("DescribeRouteTables");
        self.paginate(
            &self.inventory.route_tables,
            |route_tables| DescribeRouteTablesOutput { route_tables },
            on_page,
        );
        Ok(())
    }

    async fn describe_network_acls_pages(
        &self,
        _input: &DescribeNetworkAclsInput,
        on_page: PageHandler<'_, DescribeNetworkAclsOutput>,
    ) -> Result<()> {
        self.record("DescribeNetworkAcls");
        self.paginate(
            &self.inventory.network_acls,
            |network_acls| DescribeNetworkAclsOutput { network_acls },
            on_page,
        );
        Ok(())
    }

    async fn describe_security_groups_pages(
        &self,
        _input: &DescribeSecurityGroupsInput,
        on_page: PageHandler<'_, DescribeSecurityGroupsOutput>,
    ) -> Result<()> {
        self.record("DescribeSecurityGroups");
        self.paginate(
            &self.inventory.security_groups,
            |security_groups| DescribeSecurityGroupsOutput { security_groups },
            on_page,
        );
        Ok(())
    }
}
