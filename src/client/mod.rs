//! Remote EC2 inventory API capability

use async_trait::async_trait;

use crate::error::Result;

pub mod fixture;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;

pub use fixture::{FixtureEc2Client, Inventory};
#[cfg(test)]
pub use mock::MockEc2Client;
pub use pagination::{PageCollector, PageHandler};

use models::{
    DescribeAddressesInput, DescribeAddressesOutput, DescribeImagesInput, DescribeImagesOutput,
    DescribeInstancesInput, DescribeInstancesOutput, DescribeInternetGatewaysInput,
    DescribeInternetGatewaysOutput, DescribeKeyPairsInput, DescribeKeyPairsOutput,
    DescribeLaunchTemplatesInput, DescribeLaunchTemplatesOutput, DescribeNatGatewaysInput,
    DescribeNatGatewaysOutput, DescribeNetworkAclsInput, DescribeNetworkAclsOutput,
    DescribeRouteTablesInput, DescribeRouteTablesOutput, DescribeSecurityGroupsInput,
    DescribeSecurityGroupsOutput, DescribeSnapshotsInput, DescribeSnapshotsOutput,
    DescribeSubnetsInput, DescribeSubnetsOutput, DescribeVolumesInput, DescribeVolumesOutput,
    DescribeVpcsInput, DescribeVpcsOutput,
};

/// EC2 describe operations, one method per remote query.
///
/// Operations that return everything in one response take only an input.
/// Paginated operations (`*_pages`) also take a page handler: the client calls
/// it once per page, in order, on the calling task, passing the page and
/// whether it is the last one. The handler returns `false` to stop paging.
/// The method returns once paging is finished or failed.
///
/// Implementations must be safe to call concurrently.
#[async_trait]
pub trait Ec2Api: Send + Sync {
    // ========================================================================
    // Images & block storage
    // ========================================================================

    async fn describe_images(&self, input: &DescribeImagesInput) -> Result<DescribeImagesOutput>;

    async fn describe_snapshots_pages(
        &self,
        input: &DescribeSnapshotsInput,
        on_page: PageHandler<'_, DescribeSnapshotsOutput>,
    ) -> Result<()>;

    async fn describe_volumes_pages(
        &self,
        input: &DescribeVolumesInput,
        on_page: PageHandler<'_, DescribeVolumesOutput>,
    ) -> Result<()>;

    // ========================================================================
    // Compute
    // ========================================================================

    /// Pages carry reservations, each with its own instances
    async fn describe_instances_pages(
        &self,
        input: &DescribeInstancesInput,
        on_page: PageHandler<'_, DescribeInstancesOutput>,
    ) -> Result<()>;

    async fn describe_key_pairs(
        &self,
        input: &DescribeKeyPairsInput,
    ) -> Result<DescribeKeyPairsOutput>;

    async fn describe_launch_templates_pages(
        &self,
        input: &DescribeLaunchTemplatesInput,
        on_page: PageHandler<'_, DescribeLaunchTemplatesOutput>,
    ) -> Result<()>;

    // ========================================================================
    // Networking
    // ========================================================================

    async fn describe_addresses(
        &self,
        input: &DescribeAddressesInput,
    ) -> Result<DescribeAddressesOutput>;

    async fn describe_internet_gateways_pages(
        &self,
        input: &DescribeInternetGatewaysInput,
        on_page: PageHandler<'_, DescribeInternetGatewaysOutput>,
    ) -> Result<()>;

    async fn describe_nat_gateways_pages(
        &self,
        input: &DescribeNatGatewaysInput,
        on_page: PageHandler<'_, DescribeNatGatewaysOutput>,
    ) -> Result<()>;

    async fn describe_subnets_pages(
        &self,
        input: &DescribeSubnetsInput,
        on_page: PageHandler<'_, DescribeSubnetsOutput>,
    ) -> Result<()>;

    async fn describe_vpcs_pages(
        &self,
        input: &DescribeVpcsInput,
        on_page: PageHandler<'_, DescribeVpcsOutput>,
    ) -> Result<()>;

    async fn describe_route_tables_pages(
        &self,
        input: &DescribeRouteTablesInput,
        on_page: PageHandler<'_, DescribeRouteTablesOutput>,
    ) -> Result<()>;

    async fn describe_network_acls_pages(
        &self,
        input: &DescribeNetworkAclsInput,
        on_page: PageHandler<'_, DescribeNetworkAclsOutput>,
    ) -> Result<()>;

    async fn describe_security_groups_pages(
        &self,
        input: &DescribeSecurityGroupsInput,
        on_page: PageHandler<'_, DescribeSecurityGroupsOutput>,
    ) -> Result<()>;
}
