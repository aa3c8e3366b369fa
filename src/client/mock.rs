//! Mock EC2 client for testing
//!
//! Provides a scripted implementation of [`Ec2Api`] for unit testing without
//! a remote endpoint. Paged operations replay the configured pages in order.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

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
    KeyPairInfo, LaunchTemplate, NatGateway, NetworkAcl, Reservation, RouteTable, SecurityGroup,
    Snapshot, Subnet, Volume, Vpc,
};
use super::{Ec2Api, PageHandler};
use crate::error::{RemoteQueryError, Result};

/// Scripted responses, one entry per describe operation
#[derive(Default)]
struct Responses {
    images: Vec<Image>,
    addresses: Vec<Address>,
    key_pairs: Vec<KeyPairInfo>,
    snapshot_pages: Vec<DescribeSnapshotsOutput>,
    volume_pages: Vec<DescribeVolumesOutput>,
    instance_pages: Vec<DescribeInstancesOutput>,
    internet_gateway_pages: Vec<DescribeInternetGatewaysOutput>,
    nat_gateway_pages: Vec<DescribeNatGatewaysOutput>,
    subnet_pages: Vec<DescribeSubnetsOutput>,
    vpc_pages: Vec<DescribeVpcsOutput>,
    route_table_pages: Vec<DescribeRouteTablesOutput>,
    network_acl_pages: Vec<DescribeNetworkAclsOutput>,
    security_group_pages: Vec<DescribeSecurityGroupsOutput>,
    launch_template_pages: Vec<DescribeLaunchTemplatesOutput>,
}

/// Mock EC2 client for testing.
///
/// Configure responses via the async builder methods, then hand it to a
/// repository.
///
/// # Example
/// ```ignore
/// let mock = MockEc2Client::new()
///     .with_snapshot_pages(vec![vec![snap1, snap2], vec![snap3]])
///     .await;
///
/// let repo = Ec2Repository::new(mock, Arc::new(InventoryStore::new(1)));
/// assert_eq!(repo.list_all_snapshots().await?.len(), 3);
/// ```
pub struct MockEc2Client {
    responses: Arc<Mutex<Responses>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<RemoteQueryError>>>,
    /// Error returned after a paged call has delivered all its pages
    page_error: Arc<Mutex<Option<RemoteQueryError>>>,
    /// Fail every call once this many calls have succeeded
    fail_after: Arc<Mutex<Option<usize>>>,
    /// Flag every page as the last one (breaks the pagination contract)
    every_page_last: Arc<Mutex<bool>>,
    /// Delay applied to every call
    latency: Arc<Mutex<Option<Duration>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl Default for MockEc2Client {
    fn default() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Responses::default())),
            error: Arc::new(Mutex::new(None)),
            page_error: Arc::new(Mutex::new(None)),
            fail_after: Arc::new(Mutex::new(None)),
            every_page_last: Arc::new(Mutex::new(false)),
            latency: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
            captured_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Tracks remote call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub describe_images: usize,
    pub describe_snapshots: usize,
    pub describe_volumes: usize,
    pub describe_addresses: usize,
    pub describe_instances: usize,
    pub describe_key_pairs: usize,
    pub describe_internet_gateways: usize,
    pub describe_nat_gateways: usize,
    pub describe_subnets: usize,
    pub describe_vpcs: usize,
    pub describe_route_tables: usize,
    pub describe_network_acls: usize,
    pub describe_security_groups: usize,
    pub describe_launch_templates: usize,
}

impl CallCounts {
    /// Get total number of remote calls made.
    pub fn total(&self) -> usize {
        self.describe_images
            + self.describe_snapshots
            + self.describe_volumes
            + self.describe_addresses
            + self.describe_instances
            + self.describe_key_pairs
            + self.describe_internet_gateways
            + self.describe_nat_gateways
            + self.describe_subnets
            + self.describe_vpcs
            + self.describe_route_tables
            + self.describe_network_acls
            + self.describe_security_groups
            + self.describe_launch_templates
    }
}

/// A captured remote request for test assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// The client method called (e.g., "describe_images")
    pub method: &'static str,
    /// Owner filter sent with the request, if the operation takes one
    pub owners: Vec<String>,
}

/// Replay `pages` into `on_page` the way the remote API delivers them.
///
/// An operation with nothing configured still delivers one empty last page.
fn deliver<P: Default>(pages: Vec<P>, every_page_last: bool, on_page: PageHandler<'_, P>) {
    if pages.is_empty() {
        on_page(P::default(), true);
        return;
    }

    let count = pages.len();
    for (index, page) in pages.into_iter().enumerate() {
        let last = every_page_last || index + 1 == count;
        if !on_page(page, last) {
            break;
        }
    }
}

impl MockEc2Client {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure images to return from describe_images.
    pub async fn with_images(self, images: Vec<Image>) -> Self {
        self.responses.lock().await.images = images;
        self
    }

    /// Configure addresses to return from describe_addresses.
    pub async fn with_addresses(self, addresses: Vec<Address>) -> Self {
        self.responses.lock().await.addresses = addresses;
        self
    }

    pub async fn with_key_pairs(self, key_pairs: Vec<KeyPairInfo>) -> Self {
        self.responses.lock().await.key_pairs = key_pairs;
        self
    }

    /// Configure snapshot pages. Page 0 is delivered first.
    pub async fn with_snapshot_pages(self, pages: Vec<Vec<Snapshot>>) -> Self {
        self.responses.lock().await.snapshot_pages = pages
            .into_iter()
            .map(|snapshots| DescribeSnapshotsOutput { snapshots })
            .collect();
        self
    }

    pub async fn with_volume_pages(self, pages: Vec<Vec<Volume>>) -> Self {
        self.responses.lock().await.volume_pages = pages
            .into_iter()
            .map(|volumes| DescribeVolumesOutput { volumes })
            .collect();
        self
    }

    /// Configure instance pages, each a list of reservations.
    pub async fn with_instance_pages(self, pages: Vec<Vec<Reservation>>) -> Self {
        self.responses.lock().await.instance_pages = pages
            .into_iter()
            .map(|reservations| DescribeInstancesOutput { reservations })
            .collect();
        self
    }

    pub async fn with_internet_gateway_pages(self, pages: Vec<Vec<InternetGateway>>) -> Self {
        self.responses.lock().await.internet_gateway_pages = pages
            .into_iter()
            .map(|internet_gateways| DescribeInternetGatewaysOutput { internet_gateways })
            .collect();
        self
    }

    pub async fn with_nat_gateway_pages(self, pages: Vec<Vec<NatGateway>>) -> Self {
        self.responses.lock().await.nat_gateway_pages = pages
            .into_iter()
            .map(|nat_gateways| DescribeNatGatewaysOutput { nat_gateways })
            .collect();
        self
    }

    pub async fn with_subnet_pages(self, pages: Vec<Vec<Subnet>>) -> Self {
        self.responses.lock().await.subnet_pages = pages
            .into_iter()
            .map(|subnets| DescribeSubnetsOutput { subnets })
            .collect();
        self
    }

    pub async fn with_vpc_pages(self, pages: Vec<Vec<Vpc>>) -> Self {
        self.responses.lock().await.vpc_pages = pages
            .into_iter()
            .map(|vpcs| DescribeVpcsOutput { vpcs })
            .collect();
        self
    }

    pub async fn with_route_table_pages(self, pages: Vec<Vec<RouteTable>>) -> Self {
        self.responses.lock().await.route_table_pages = pages
            .into_iter()
            .map(|route_tables| DescribeRouteTablesOutput { route_tables })
            .collect();
        self
    }

    pub async fn with_network_acl_pages(self, pages: Vec<Vec<NetworkAcl>>) -> Self {
        self.responses.lock().await.network_acl_pages = pages
            .into_iter()
            .map(|network_acls| DescribeNetworkAclsOutput { network_acls })
            .collect();
        self
    }

    pub async fn with_security_group_pages(self, pages: Vec<Vec<SecurityGroup>>) -> Self {
        self.responses.lock().await.security_group_pages = pages
            .into_iter()
            .map(|security_groups| DescribeSecurityGroupsOutput { security_groups })
            .collect();
        self
    }

    pub async fn with_launch_template_pages(self, pages: Vec<Vec<LaunchTemplate>>) -> Self {
        self.responses.lock().await.launch_template_pages = pages
            .into_iter()
            .map(|launch_templates| DescribeLaunchTemplatesOutput { launch_templates })
            .collect();
        self
    }

    /// Configure an error to return on the next remote call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: RemoteQueryError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Configure an error returned by the next paged call after it has
    /// delivered its pages. Consumed after one use.
    pub async fn with_error_after_pages(self, error: RemoteQueryError) -> Self {
        *self.page_error.lock().await = Some(error);
        self
    }

    /// Fail every call with `Throttled` once `calls` calls have succeeded.
    pub async fn fail_after(self, calls: usize) -> Self {
        *self.fail_after.lock().await = Some(calls);
        self
    }

    /// Flag every delivered page as the last page.
    pub async fn flag_every_page_last(self) -> Self {
        *self.every_page_last.lock().await = true;
        self
    }

    /// Delay every call by `latency`.
    pub async fn with_latency(self, latency: Duration) -> Self {
        *self.latency.lock().await = Some(latency);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Record the request, apply latency, and return any injected error.
    async fn begin(&self, method: &'static str, owners: &[String]) -> Result<()> {
        self.captured_requests.lock().await.push(CapturedRequest {
            method,
            owners: owners.to_vec(),
        });

        let latency = *self.latency.lock().await;
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }

        // Check one-shot error first
        {
            let mut error = self.error.lock().await;
            if let Some(e) = error.take() {
                return Err(e.into());
            }
        }

        // Check failure threshold
        {
            let fail_after = self.fail_after.lock().await;
            if let Some(threshold) = *fail_after {
                let counts = self.call_count.lock().await;
                if counts.total() >= threshold {
                    return Err(RemoteQueryError::Throttled(Duration::from_secs(1)).into());
                }
            }
        }

        Ok(())
    }

    /// Finish a paged call, returning the post-delivery error if configured.
    async fn end_pages(&self) -> Result<()> {
        match self.page_error.lock().await.take() {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    async fn every_page_last(&self) -> bool {
        *self.every_page_last.lock().await
    }
}

#[async_trait]
impl Ec2Api for MockEc2Client {
    async fn describe_images(&self, input: &DescribeImagesInput) -> Result<DescribeImagesOutput> {
        self.begin("describe_images", &input.owners).await?;
        self.call_count.lock().await.describe_images += 1;

        let images = self.responses.lock().await.images.clone();
        Ok(DescribeImagesOutput { images })
    }

    async fn describe_snapshots_pages(
        &self,
        input: &DescribeSnapshotsInput,
        on_page: PageHandler<'_, DescribeSnapshotsOutput>,
    ) -> Result<()> {
        self.begin("describe_snapshots_pages", &input.owner_ids)
            .await?;
        self.call_count.lock().await.describe_snapshots += 1;

        let pages = self.responses.lock().await.snapshot_pages.clone();
        deliver(pages, self.every_page_last().await, on_page);
        self.end_pages().await
    }

    async fn describe_volumes_pages(
        &self,
        _input: &DescribeVolumesInput,
        on_page: PageHandler<'_, DescribeVolumesOutput>,
    ) -> Result<()> {
        self.begin("describe_volumes_pages", &[]).await?;
        self.call_count.lock().await.describe_volumes += 1;

        let pages = self.responses.lock().await.volume_pages.clone();
        deliver(pages, self.every_page_last().await, on_page);
        self.end_pages().await
    }

    async fn describe_instances_pages(
        &self,
        _input: &DescribeInstancesInput,
        on_page: PageHandler<'_, DescribeInstancesOutput>,
    ) -> Result<()> {
        self.begin("describe_instances_pages", &[]).await?;
        self.call_count.lock().await.describe_instances += 1;

        let pages = self.responses.lock().await.instance_pages.clone();
        deliver(pages, self.every_page_last().await, on_page);
        self.end_pages().await
    }

    async fn describe_key_pairs(
        &self,
        _input: &DescribeKeyPairsInput,
    ) -> Result<DescribeKeyPairsOutput> {
        self.begin("describe_key_pairs", &[]).await?;
        self.call_count.lock().await.describe_key_pairs += 1;

        let key_pairs = self.responses.lock().await.key_pairs.clone();
        Ok(DescribeKeyPairsOutput { key_pairs })
    }

    async fn describe_launch_templates_pages(
        &self,
        _input: &DescribeLaunchTemplatesInput,
        on_page: PageHandler<'_, DescribeLaunchTemplatesOutput>,
    ) -> Result<()> {
        self.begin("describe_launch_templates_pages", &[]).await?;
        self.call_count.lock().await.describe_launch_templates += 1;

        let pages = self.responses.lock().await.launch_template_pages.clone();
        deliver(pages, self.every_page_last().await, on_page);
        self.end_pages().await
    }

    async fn describe_addresses(
        &self,
        _input: &DescribeAddressesInput,
    ) -> Result<DescribeAddressesOutput> {
        self.begin("describe_addresses", &[]).await?;
        self.call_count.lock().await.describe_addresses += 1;

        let addresses = self.responses.lock().await.addresses.clone();
        Ok(DescribeAddressesOutput { addresses })
    }

    async fn describe_internet_gateways_pages(
        &self,
        _input: &DescribeInternetGatewaysInput,
        on_page: PageHandler<'_, DescribeInternetGatewaysOutput>,
    ) -> Result<()> {
        self.begin("describe_internet_gateways_pages", &[]).await?;
        self.call_count.lock().await.describe_internet_gateways += 1;

        let pages = self.responses.lock().await.internet_gateway_pages.clone();
        deliver(pages, self.every_page_last().await, on_page);
        self.end_pages().await
    }

    async fn describe_nat_gateways_pages(
        &self,
        _input: &DescribeNatGatewaysInput,
        on_page: PageHandler<'_, DescribeNatGatewaysOutput>,
    ) -> Result<()> {
        self.begin("describe_nat_gateways_pages", &[]).await?;
        self.call_count.lock().await.describe_nat_gateways += 1;

        let pages = self.responses.lock().await.nat_gateway_pages.clone();
        deliver(pages, self.every_page_last().await, on_page);
        self.end_pages().await
    }

    async fn describe_subnets_pages(
        &self,
        _input: &DescribeSubnetsInput,
        on_page: PageHandler<'_, DescribeSubnetsOutput>,
    ) -> Result<()> {
        self.begin("describe_subnets_pages", &[]).await?;
        self.call_count.lock().await.describe_subnets += 1;

        let pages = self.responses.lock().await.subnet_pages.clone();
        deliver(pages, self.every_page_last().await, on_page);
        self.end_pages().await
    }

    async fn describe_vpcs_pages(
        &self,
        _input: &DescribeVpcsInput,
        on_page: PageHandler<'_, DescribeVpcsOutput>,
    ) -> Result<()> {
        self.begin("describe_vpcs_pages", &[]).await?;
        self.call_count.lock().await.describe_vpcs += 1;

        let pages = self.responses.lock().await.vpc_pages.clone();
        deliver(pages, self.every_page_last().await, on_page);
        self.end_pages().await
    }

    async fn describe_route_tables_pages(
        &self,
        _input: &DescribeRouteTablesInput,
        on_page: PageHandler<'_, DescribeRouteTablesOutput>,
    ) -> Result<()> {
        self.begin("describe_route_tables_pages", &[]).await?;
        self.call_count.lock().await.describe_route_tables += 1;

        let pages = self.responses.lock().await.route_table_pages.clone();
        deliver(pages, self.every_page_last().await, on_page);
        self.end_pages().await
    }

    async fn describe_network_acls_pages(
        &self,
        _input: &DescribeNetworkAclsInput,
        on_page: PageHandler<'_, DescribeNetworkAclsOutput>,
    ) -> Result<()> {
        self.begin("describe_network_acls_pages", &[]).await?;
        self.call_count.lock().await.describe_network_acls += 1;

        let pages = self.responses.lock().await.network_acl_pages.clone();
        deliver(pages, self.every_page_last().await, on_page);
        self.end_pages().await
    }

    async fn describe_security_groups_pages(
        &self,
        _input: &DescribeSecurityGroupsInput,
        on_page: PageHandler<'_, DescribeSecurityGroupsOutput>,
    ) -> Result<()> {
        self.begin("describe_security_groups_pages", &[]).await?;
        self.call_count.lock().await.describe_security_groups += 1;

        let pages = self.responses.lock().await.security_group_pages.clone();
        deliver(pages, self.every_page_last().await, on_page);
        self.end_pages().await
    }
}
