//! Memoized "list all" enumeration over the remote inventory API
//!
//! Each repository entry point checks the shared [`InventoryStore`], and on a
//! miss drives the client through the query's pagination protocol, aggregates
//! the pages in order and commits the result once.
//!
//! [`InventoryStore`]: crate::cache::InventoryStore

pub mod ec2;

pub use ec2::Ec2Repository;
