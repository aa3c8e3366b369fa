//! EC2 inventory enumeration with process-lifetime memoization
//!
//! [`repository::Ec2Repository`] exposes one "list all" entry point per EC2
//! resource kind, aggregating paginated remote queries through an
//! [`client::Ec2Api`] and committing results to a shared
//! [`cache::InventoryStore`].

pub mod cache;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod repository;
pub mod resource;

pub use error::{Error, Result};
