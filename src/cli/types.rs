//! Resource type listing

use std::collections::BTreeMap;

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output;
use crate::resource::{
    Normalizer, ResourceFlags, ResourceType, SchemaRegistry, init_resources_metadata,
};

/// Registry that records what metadata registration hands it
#[derive(Default)]
struct TypeCatalog {
    entries: BTreeMap<ResourceType, CatalogEntry>,
}

#[derive(Default)]
struct CatalogEntry {
    flags: ResourceFlags,
    normalized: bool,
}

impl SchemaRegistry for TypeCatalog {
    fn set_flags(&mut self, ty: ResourceType, flags: ResourceFlags) {
        self.entries.entry(ty).or_default().flags = flags;
    }

    fn set_normalizer(&mut self, ty: ResourceType, _normalizer: Normalizer) {
        self.entries.entry(ty).or_default().normalized = true;
    }
}

#[derive(Debug, Tabled, Serialize)]
struct TypeDisplay {
    #[tabled(rename = "RESOURCE TYPE")]
    resource_type: String,
    #[tabled(rename = "DEEP MODE")]
    deep_mode: bool,
    #[tabled(rename = "NORMALIZED")]
    normalized: bool,
}

fn catalog_rows() -> Vec<TypeDisplay> {
    let mut catalog = TypeCatalog::default();
    init_resources_metadata(&mut catalog);

    catalog
        .entries
        .into_iter()
        .map(|(ty, entry)| TypeDisplay {
            resource_type: ty.to_string(),
            deep_mode: entry.flags.contains(ResourceFlags::DEEP_MODE),
            normalized: entry.normalized,
        })
        .collect()
}

/// Run the types command
pub fn run(format: OutputFormat) -> Result<()> {
    output::print(&catalog_rows(), format, output::Metadata::new())
}
