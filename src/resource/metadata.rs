use log::debug;
use serde_json::{Map, Value};

use super::{ResourceFlags, ResourceType, SchemaRegistry};

/// Register flags and normalizers for every inventory resource type.
pub fn init_resources_metadata(registry: &mut dyn SchemaRegistry) {
    for ty in ResourceType::ALL {
        registry.set_flags(ty, flags_for(ty));
        registry.set_normalizer(ty, normalizer_for(ty));
    }
    debug!("Registered metadata for {} resource types", ResourceType::ALL.len());
}

fn flags_for(ty: ResourceType) -> ResourceFlags {
    match ty {
        // Associations only exist as edges between other resources
        ResourceType::AwsEipAssociation => ResourceFlags::empty(),
        _ => ResourceFlags::DEEP_MODE,
    }
}

fn normalizer_for(ty: ResourceType) -> super::Normalizer {
    match ty {
        ResourceType::AwsEbsVolume => normalize_ebs_volume,
        ResourceType::AwsInstance => normalize_instance,
        ResourceType::AwsRouteTable | ResourceType::AwsDefaultRouteTable => {
            normalize_route_table
        }
        ResourceType::AwsSecurityGroup | ResourceType::AwsDefaultSecurityGroup => {
            normalize_security_group
        }
        _ => normalize_common,
    }
}

fn remove_all(attrs: &mut Map<String, Value>, keys: &[&str]) {
    for key in keys {
        attrs.remove(*key);
    }
}

/// Drops provider bookkeeping present on every type
fn normalize_common(attrs: &mut Map<String, Value>) {
    remove_all(attrs, &["timeouts"]);
}

fn normalize_ebs_volume(attrs: &mut Map<String, Value>) {
    normalize_common(attrs);
    remove_all(attrs, &["arn", "outpost_arn", "snapshot_id"]);
}

fn normalize_instance(attrs: &mut Map<String, Value>) {
    normalize_common(attrs);
    remove_all(
        attrs,
        &["volume_tags", "user_data", "user_data_base64", "get_password_data"],
    );
}

fn normalize_route_table(attrs: &mut Map<String, Value>) {
    normalize_common(attrs);
    remove_all(attrs, &["propagating_vgws"]);
}

fn normalize_security_group(attrs: &mut Map<String, Value>) {
    normalize_common(attrs);
    remove_all(attrs, &["revoke_rules_on_delete", "ingress", "egress"]);
}
