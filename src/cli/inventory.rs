//! Inventory summary and listing commands

use futures::future::try_join_all;
use log::debug;

use crate::cli::CommandContext;
use crate::client::Ec2Api;
use crate::error::Result;
use crate::output::{self, display::ResourceDisplay, display::SummaryDisplay};
use crate::repository::Ec2Repository;
use crate::resource::ResourceType;

fn ids<'a, T: 'a>(
    items: impl IntoIterator<Item = &'a T>,
    id: impl Fn(&T) -> Option<&String>,
) -> Vec<String> {
    items.into_iter().filter_map(|item| id(item).cloned()).collect()
}

/// Identifiers of every resource of type `ty`, in inventory order
pub async fn identifiers<C: Ec2Api>(
    repo: &Ec2Repository<C>,
    ty: ResourceType,
) -> Result<Vec<String>> {
    let found = match ty {
        ResourceType::AwsAmi => ids(repo.list_all_images().await?.iter(), |i| {
            i.image_id.as_ref()
        }),
        ResourceType::AwsEbsSnapshot => ids(repo.list_all_snapshots().await?.iter(), |s| {
            s.snapshot_id.as_ref()
        }),
        ResourceType::AwsEbsVolume => ids(repo.list_all_volumes().await?.iter(), |v| {
            v.volume_id.as_ref()
        }),
        ResourceType::AwsEip => ids(repo.list_all_addresses().await?.iter(), |a| {
            a.allocation_id.as_ref().or(a.public_ip.as_ref())
        }),
        ResourceType::AwsEipAssociation => repo.list_all_addresses_association().await?.to_vec(),
        ResourceType::AwsInstance => ids(repo.list_all_instances().await?.iter(), |i| {
            i.instance_id.as_ref()
        }),
        ResourceType::AwsKeyPair => ids(repo.list_all_key_pairs().await?.iter(), |k| {
            k.key_name.as_ref()
        }),
        ResourceType::AwsInternetGateway => {
            ids(repo.list_all_internet_gateways().await?.iter(), |g| {
                g.internet_gateway_id.as_ref()
            })
        }
        ResourceType::AwsNatGateway => ids(repo.list_all_nat_gateways().await?.iter(), |g| {
            g.nat_gateway_id.as_ref()
        }),
        ResourceType::AwsSubnet => ids(&repo.list_all_subnets().await?.0, |s| {
            s.subnet_id.as_ref()
        }),
        ResourceType::AwsDefaultSubnet => ids(&repo.list_all_subnets().await?.1, |s| {
            s.subnet_id.as_ref()
        }),
        ResourceType::AwsVpc => ids(&repo.list_all_vpcs().await?.0, |v| v.vpc_id.as_ref()),
        ResourceType::AwsDefaultVpc => ids(&repo.list_all_vpcs().await?.1, |v| v.vpc_id.as_ref()),
        ResourceType::AwsRouteTable => ids(
            repo.list_all_route_tables()
                .await?
                .iter()
                .filter(|t| !t.is_main()),
            |t| t.route_table_id.as_ref(),
        ),
        ResourceType::AwsDefaultRouteTable => ids(
            repo.list_all_route_tables()
                .await?
                .iter()
                .filter(|t| t.is_main()),
            |t| t.route_table_id.as_ref(),
        ),
        ResourceType::AwsNetworkAcl => ids(
            repo.list_all_network_acls()
                .await?
                .iter()
                .filter(|acl| !acl.is_default.unwrap_or(false)),
            |acl| acl.network_acl_id.as_ref(),
        ),
        ResourceType::AwsDefaultNetworkAcl => ids(
            repo.list_all_network_acls()
                .await?
                .iter()
                .filter(|acl| acl.is_default.unwrap_or(false)),
            |acl| acl.network_acl_id.as_ref(),
        ),
        ResourceType::AwsSecurityGroup => ids(&repo.list_all_security_groups().await?.0, |g| {
            g.group_id.as_ref()
        }),
        ResourceType::AwsDefaultSecurityGroup => {
            ids(&repo.list_all_security_groups().await?.1, |g| {
                g.group_id.as_ref()
            })
        }
        ResourceType::AwsLaunchTemplate => {
            ids(repo.list_all_launch_templates().await?.iter(), |t| {
                t.launch_template_id.as_ref()
            })
        }
    };
    debug!("{}: {} resources", ty, found.len());
    Ok(found)
}

/// Count every resource type concurrently
pub async fn summarize<C: Ec2Api>(repo: &Ec2Repository<C>) -> Result<Vec<SummaryDisplay>> {
    let counts = try_join_all(ResourceType::ALL.into_iter().map(|ty| async move {
        let ids = identifiers(repo, ty).await?;
        Ok::<_, crate::error::Error>(SummaryDisplay::new(ty, ids.len()))
    }))
    .await?;
    Ok(counts)
}

/// Run the summary command
pub async fn summary(ctx: &CommandContext) -> Result<()> {
    let rows = summarize(&ctx.repository).await?;
    debug!(
        "Summary issued {} remote calls",
        ctx.repository.client().call_count()
    );
    output::print(&rows, ctx.format, ctx.metadata())
}

/// Run the list command
pub async fn list(ctx: &CommandContext, kind: ResourceType) -> Result<()> {
    let rows: Vec<ResourceDisplay> = identifiers(&ctx.repository, kind)
        .await?
        .into_iter()
        .map(ResourceDisplay::from)
        .collect();
    output::print(&rows, ctx.format, ctx.metadata())
}
