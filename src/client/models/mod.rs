//! EC2 inventory data models
//!
//! Domain records returned by the remote API, organized by resource family,
//! plus the request/response envelopes of each describe operation.

mod address;
mod ebs;
mod image;
mod instance;
mod key_pair;
mod launch_template;
mod network;
mod requests;
mod routing;
mod security_group;

pub use address::Address;
pub use ebs::{Snapshot, Volume};
pub use image::Image;
pub use instance::{Instance, Reservation};
pub use key_pair::KeyPairInfo;
pub use launch_template::LaunchTemplate;
pub use network::{InternetGateway, InternetGatewayAttachment, NatGateway, Subnet, Vpc};
pub use requests::*;
pub use routing::{NetworkAcl, RouteTable, RouteTableAssociation};
pub use security_group::{DEFAULT_SECURITY_GROUP_NAME, SecurityGroup};
