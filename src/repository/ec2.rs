//! EC2 enumeration repository

use std::future::Future;
use std::sync::Arc;

use log::{debug, info};

use crate::cache::{CacheKey, Cacheable, InventoryStore};
use crate::client::models::{
    Address, DescribeAddressesInput, DescribeImagesInput, DescribeInstancesInput,
    DescribeInstancesOutput, DescribeInternetGatewaysInput, DescribeInternetGatewaysOutput,
    DescribeKeyPairsInput, DescribeLaunchTemplatesInput, DescribeLaunchTemplatesOutput,
    DescribeNatGatewaysInput, DescribeNatGatewaysOutput, DescribeNetworkAclsInput,
    DescribeNetworkAclsOutput, DescribeRouteTablesInput, DescribeRouteTablesOutput,
    DescribeSecurityGroupsInput, DescribeSecurityGroupsOutput, DescribeSnapshotsInput,
    DescribeSnapshotsOutput, DescribeSubnetsInput, DescribeSubnetsOutput, DescribeVolumesInput,
    DescribeVolumesOutput, DescribeVpcsInput, DescribeVpcsOutput, Image, Instance,
    InternetGateway, KeyPairInfo, LaunchTemplate, NatGateway, NetworkAcl, OWNER_SELF,
    RouteTable, SecurityGroup, Snapshot, Subnet, Volume, Vpc,
};
use crate::client::{Ec2Api, PageCollector};
use crate::error::{Error, Result};

/// "List all" entry points for EC2 resources.
///
/// Cached entry points run their remote aggregation at most once per store:
/// the first successful call commits the aggregate and every later call (from
/// any caller sharing the store) gets the same `Arc` back without touching the
/// client. Failures are returned as-is and leave the store untouched.
///
/// The partitioning entry points (`list_all_subnets`, `list_all_vpcs`,
/// `list_all_security_groups`) are not cached.
pub struct Ec2Repository<C: Ec2Api> {
    client: Arc<C>,
    cache: Arc<InventoryStore>,
}

impl<C: Ec2Api> Ec2Repository<C> {
    /// Create a repository over `client`, memoizing into `cache`.
    pub fn new(client: C, cache: Arc<InventoryStore>) -> Self {
        Self::with_shared_client(Arc::new(client), cache)
    }

    /// Create a repository over a client that is also used elsewhere.
    pub fn with_shared_client(client: Arc<C>, cache: Arc<InventoryStore>) -> Self {
        Self { client, cache }
    }

    /// The underlying client
    pub fn client(&self) -> &C {
        &self.client
    }

    /// The store results are memoized into
    pub fn cache(&self) -> &InventoryStore {
        &self.cache
    }

    /// The committed aggregate under `key`. An entry of another type is an
    /// error; it is never replaced.
    fn lookup<T: Cacheable>(&self, key: CacheKey) -> Result<Option<Arc<Vec<T>>>> {
        if !self.cache.exists(&key) {
            return Ok(None);
        }
        match self.cache.get(&key) {
            Some(value) => T::from_cached(&value).map(Some).ok_or_else(|| {
                Error::Other(format!("{} holds an entry of another type", key))
            }),
            None => Ok(None),
        }
    }

    /// Serve `key` from the store, or run `fetch` and commit its result.
    async fn cached<T, F, Fut>(&self, key: CacheKey, fetch: F) -> Result<Arc<Vec<T>>>
    where
        T: Cacheable,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>>>,
    {
        if let Some(hit) = self.lookup(key)? {
            debug!("Cache hit: {}", key);
            return Ok(hit);
        }

        let flight = self.cache.flight_lock(&key);
        let _guard = flight.lock().await;

        // Another caller may have committed while we waited.
        if let Some(hit) = self.lookup(key)? {
            debug!("Cache hit after wait: {}", key);
            return Ok(hit);
        }

        debug!("Cache miss: {}", key);
        let items = Arc::new(fetch().await?);
        self.cache.put(key, T::into_cached(Arc::clone(&items)));
        info!("Cached {} items under {}", items.len(), key);
        Ok(items)
    }

    // ========================================================================
    // Images & block storage
    // ========================================================================

    /// Machine images owned by this account
    pub async fn list_all_images(&self) -> Result<Arc<Vec<Image>>> {
        self.cached(CacheKey::Images, || async {
            let input = DescribeImagesInput {
                owners: vec![OWNER_SELF.to_string()],
            };
            let output = self.client.describe_images(&input).await?;
            Ok(output.images)
        })
        .await
    }

    /// Snapshots owned by this account, across all pages
    pub async fn list_all_snapshots(&self) -> Result<Arc<Vec<Snapshot>>> {
        self.cached(CacheKey::Snapshots, || async {
            let input = DescribeSnapshotsInput {
                owner_ids: vec![OWNER_SELF.to_string()],
            };
            let mut collector = PageCollector::new("DescribeSnapshots");
            self.client
                .describe_snapshots_pages(&input, &mut |page: DescribeSnapshotsOutput, last| {
                    collector.push_page(page.snapshots, last)
                })
                .await?;
            Ok(collector.finish()?)
        })
        .await
    }

    pub async fn list_all_volumes(&self) -> Result<Arc<Vec<Volume>>> {
        self.cached(CacheKey::Volumes, || async {
            let mut collector = PageCollector::new("DescribeVolumes");
            self.client
                .describe_volumes_pages(
                    &DescribeVolumesInput::default(),
                    &mut |page: DescribeVolumesOutput, last| collector.push_page(page.volumes, last),
                )
                .await?;
            Ok(collector.finish()?)
        })
        .await
    }

    // ========================================================================
    // Compute
    // ========================================================================

    /// Every instance of every reservation, in reservation order
    pub async fn list_all_instances(&self) -> Result<Arc<Vec<Instance>>> {
        self.cached(CacheKey::Instances, || async {
            let mut collector = PageCollector::new("DescribeInstances");
            self.client
                .describe_instances_pages(
                    &DescribeInstancesInput::default(),
                    &mut |page: DescribeInstancesOutput, last| {
                        let instances = page
                            .reservations
                            .into_iter()
                            .flat_map(|reservation| reservation.instances);
                        collector.push_page(instances, last)
                    },
                )
                .await?;
            Ok(collector.finish()?)
        })
        .await
    }

    pub async fn list_all_key_pairs(&self) -> Result<Arc<Vec<KeyPairInfo>>> {
        self.cached(CacheKey::KeyPairs, || async {
            let output = self
                .client
                .describe_key_pairs(&DescribeKeyPairsInput::default())
                .await?;
            Ok(output.key_pairs)
        })
        .await
    }

    pub async fn list_all_launch_templates(&self) -> Result<Arc<Vec<LaunchTemplate>>> {
        self.cached(CacheKey::LaunchTemplates, || async {
            let mut collector = PageCollector::new("DescribeLaunchTemplates");
            self.client
                .describe_launch_templates_pages(
                    &DescribeLaunchTemplatesInput::default(),
                    &mut |page: DescribeLaunchTemplatesOutput, last| {
                        collector.push_page(page.launch_templates, last)
                    },
                )
                .await?;
            Ok(collector.finish()?)
        })
        .await
    }

    // ========================================================================
    // Elastic IPs
    // ========================================================================

    pub async fn list_all_addresses(&self) -> Result<Arc<Vec<Address>>> {
        self.cached(CacheKey::Addresses, || async {
            let output = self
                .client
                .describe_addresses(&DescribeAddressesInput::default())
                .await?;
            Ok(output.addresses)
        })
        .await
    }

    /// Association IDs of every associated address.
    ///
    /// Cached under its own key; it neither reads nor populates the
    /// `list_all_addresses` entry.
    pub async fn list_all_addresses_association(&self) -> Result<Arc<Vec<String>>> {
        self.cached(CacheKey::AddressesAssociation, || async {
            let output = self
                .client
                .describe_addresses(&DescribeAddressesInput::default())
                .await?;
            Ok(output
                .addresses
                .into_iter()
                .filter_map(|address| address.association_id)
                .collect())
        })
        .await
    }

    // ========================================================================
    // Networking
    // ========================================================================

    pub async fn list_all_internet_gateways(&self) -> Result<Arc<Vec<InternetGateway>>> {
        self.cached(CacheKey::InternetGateways, || async {
            let mut collector = PageCollector::new("DescribeInternetGateways");
            self.client
                .describe_internet_gateways_pages(
                    &DescribeInternetGatewaysInput::default(),
                    &mut |page: DescribeInternetGatewaysOutput, last| {
                        collector.push_page(page.internet_gateways, last)
                    },
                )
                .await?;
            Ok(collector.finish()?)
        })
        .await
    }

    pub async fn list_all_nat_gateways(&self) -> Result<Arc<Vec<NatGateway>>> {
        self.cached(CacheKey::NatGateways, || async {
            let mut collector = PageCollector::new("DescribeNatGateways");
            self.client
                .describe_nat_gateways_pages(
                    &DescribeNatGatewaysInput::default(),
                    &mut |page: DescribeNatGatewaysOutput, last| {
                        collector.push_page(page.nat_gateways, last)
                    },
                )
                .await?;
            Ok(collector.finish()?)
        })
        .await
    }

    pub async fn list_all_route_tables(&self) -> Result<Arc<Vec<RouteTable>>> {
        self.cached(CacheKey::RouteTables, || async {
            let mut collector = PageCollector::new("DescribeRouteTables");
            self.client
                .describe_route_tables_pages(
                    &DescribeRouteTablesInput::default(),
                    &mut |page: DescribeRouteTablesOutput, last| {
                        collector.push_page(page.route_tables, last)
                    },
                )
                .await?;
            Ok(collector.finish()?)
        })
        .await
    }

    pub async fn list_all_network_acls(&self) -> Result<Arc<Vec<NetworkAcl>>> {
        self.cached(CacheKey::NetworkAcls, || async {
            let mut collector = PageCollector::new("DescribeNetworkAcls");
            self.client
                .describe_network_acls_pages(
                    &DescribeNetworkAclsInput::default(),
                    &mut |page: DescribeNetworkAclsOutput, last| {
                        collector.push_page(page.network_acls, last)
                    },
                )
                .await?;
            Ok(collector.finish()?)
        })
        .await
    }

    /// Subnets split into `(subnets, default_subnets)` on `default_for_az`.
    ///
    /// One remote aggregation feeds both lists; each keeps arrival order.
    pub async fn list_all_subnets(&self) -> Result<(Vec<Subnet>, Vec<Subnet>)> {
        let mut collector = PageCollector::new("DescribeSubnets");
        self.client
            .describe_subnets_pages(
                &DescribeSubnetsInput::default(),
                &mut |page: DescribeSubnetsOutput, last| collector.push_page(page.subnets, last),
            )
            .await?;

        let (default_subnets, subnets): (Vec<_>, Vec<_>) = collector
            .finish()?
            .into_iter()
            .partition(|subnet| subnet.default_for_az.unwrap_or(false));
        Ok((subnets, default_subnets))
    }

    /// VPCs split into `(vpcs, default_vpcs)` on `is_default`
    pub async fn list_all_vpcs(&self) -> Result<(Vec<Vpc>, Vec<Vpc>)> {
        let mut collector = PageCollector::new("DescribeVpcs");
        self.client
            .describe_vpcs_pages(
                &DescribeVpcsInput::default(),
                &mut |page: DescribeVpcsOutput, last| collector.push_page(page.vpcs, last),
            )
            .await?;

        let (default_vpcs, vpcs): (Vec<_>, Vec<_>) = collector
            .finish()?
            .into_iter()
            .partition(|vpc| vpc.is_default.unwrap_or(false));
        Ok((vpcs, default_vpcs))
    }

    /// Security groups split into `(groups, default_groups)`
    pub async fn list_all_security_groups(
        &self,
    ) -> Result<(Vec<SecurityGroup>, Vec<SecurityGroup>)> {
        let mut collector = PageCollector::new("DescribeSecurityGroups");
        self.client
            .describe_security_groups_pages(
                &DescribeSecurityGroupsInput::default(),
                &mut |page: DescribeSecurityGroupsOutput, last| {
                    collector.push_page(page.security_groups, last)
                },
            )
            .await?;

        let (default_groups, groups): (Vec<_>, Vec<_>) = collector
            .finish()?
            .into_iter()
            .partition(SecurityGroup::is_default);
        Ok((groups, default_groups))
    }
}
