//! Command execution context
//!
//! Resolves configuration, loads the inventory document and wires the
//! repository every inventory command runs against.

use std::path::PathBuf;
use std::sync::Arc;

use log::debug;

use crate::cache::InventoryStore;
use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::{FixtureEc2Client, Inventory};
use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::output::Metadata;
use crate::repository::Ec2Repository;

/// Context for command execution
pub struct CommandContext {
    /// Loaded and validated configuration
    pub config: Config,
    /// Repository over the configured inventory
    pub repository: Ec2Repository<FixtureEc2Client>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a command context from the global options.
    ///
    /// # Errors
    /// Returns an error if the config cannot be loaded, no inventory is
    /// configured, or the inventory document cannot be read.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let mut config = match opts.config_ref() {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(path) = opts.inventory_ref() {
            config.inventory = Some(path.to_path_buf());
        }
        let path = Self::inventory_path(&config)?;

        let inventory = Inventory::load_from(&path)?;
        debug!("Loaded inventory from {}", path.display());

        let client = FixtureEc2Client::new(inventory, config.page_size);
        let cache = Arc::new(InventoryStore::new(config.cache_shards));

        Ok(Self {
            repository: Ec2Repository::new(client, cache),
            config,
            format: opts.format,
        })
    }

    /// Output metadata for the work done so far
    pub fn metadata(&self) -> Metadata {
        let source = self
            .config
            .inventory
            .as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_default();
        Metadata::new().with_inventory(source, self.repository.client().call_count())
    }

    fn inventory_path(config: &Config) -> Result<PathBuf> {
        config.inventory.clone().ok_or_else(|| {
            ConfigError::Invalid(
                "no inventory configured; pass --inventory or set `inventory` in the config file"
                    .to_string(),
            )
            .into()
        })
    }
}
