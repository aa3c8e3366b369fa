//! Process-lifetime memoization of aggregated inventory results
//!
//! [`ResultStore`] is a generic sharded key/value table; [`CacheKey`] names the
//! slots and [`CachedValue`] is the tagged union of everything stored in them.

pub mod key;
pub mod store;

use std::sync::Arc;

use crate::client::models::{
    Address, Image, Instance, InternetGateway, KeyPairInfo, LaunchTemplate, NatGateway,
    NetworkAcl, RouteTable, Snapshot, Volume,
};

pub use key::CacheKey;
pub use store::ResultStore;

/// Store specialised for inventory results
pub type InventoryStore = ResultStore<CacheKey, CachedValue>;

/// One aggregated query result.
///
/// Every arm is `Arc`-backed, so cloning out of the store hands back the same
/// allocation the aggregation produced.
#[derive(Debug, Clone)]
pub enum CachedValue {
    Images(Arc<Vec<Image>>),
    Snapshots(Arc<Vec<Snapshot>>),
    Volumes(Arc<Vec<Volume>>),
    Addresses(Arc<Vec<Address>>),
    /// Association IDs projected out of the address list
    Identifiers(Arc<Vec<String>>),
    Instances(Arc<Vec<Instance>>),
    KeyPairs(Arc<Vec<KeyPairInfo>>),
    InternetGateways(Arc<Vec<InternetGateway>>),
    NatGateways(Arc<Vec<NatGateway>>),
    RouteTables(Arc<Vec<RouteTable>>),
    NetworkAcls(Arc<Vec<NetworkAcl>>),
    LaunchTemplates(Arc<Vec<LaunchTemplate>>),
}

impl CachedValue {
    /// Number of items in the aggregate
    pub fn len(&self) -> usize {
        match self {
            CachedValue::Images(v) => v.len(),
            CachedValue::Snapshots(v) => v.len(),
            CachedValue::Volumes(v) => v.len(),
            CachedValue::Addresses(v) => v.len(),
            CachedValue::Identifiers(v) => v.len(),
            CachedValue::Instances(v) => v.len(),
            CachedValue::KeyPairs(v) => v.len(),
            CachedValue::InternetGateways(v) => v.len(),
            CachedValue::NatGateways(v) => v.len(),
            CachedValue::RouteTables(v) => v.len(),
            CachedValue::NetworkAcls(v) => v.len(),
            CachedValue::LaunchTemplates(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Item types whose aggregates can live in the store.
pub trait Cacheable: Sized + Send + Sync + 'static {
    /// Wrap an aggregate for storage.
    fn into_cached(items: Arc<Vec<Self>>) -> CachedValue;

    /// Borrow the aggregate back out, if `value` holds this type.
    fn from_cached(value: &CachedValue) -> Option<Arc<Vec<Self>>>;
}

macro_rules! impl_cacheable {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl Cacheable for $ty {
                fn into_cached(items: Arc<Vec<Self>>) -> CachedValue {
                    CachedValue::$variant(items)
                }

                fn from_cached(value: &CachedValue) -> Option<Arc<Vec<Self>>> {
                    match value {
                        CachedValue::$variant(items) => Some(Arc::clone(items)),
                        _ => None,
                    }
                }
            }
        )+
    };
}

impl_cacheable! {
    Image => Images,
    Snapshot => Snapshots,
    Volume => Volumes,
    Address => Addresses,
    String => Identifiers,
    Instance => Instances,
    KeyPairInfo => KeyPairs,
    InternetGateway => InternetGateways,
    NatGateway => NatGateways,
    RouteTable => RouteTables,
    NetworkAcl => NetworkAcls,
    LaunchTemplate => LaunchTemplates,
}
