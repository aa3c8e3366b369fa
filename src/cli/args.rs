//! Shared CLI argument types

use std::path::{Path, PathBuf};

use crate::cli::Cli;

/// Output format options
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format - one row per entry
    #[default]
    Table,
    /// JSON format - structured for scripts
    Json,
}

/// Global CLI options passed to all command handlers.
///
/// Precedence is CLI flag > environment variable > config file > default.
/// This struct captures the CLI/env layer; config file values are merged in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format (table, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.ec2-inventory/config.yaml)
    pub config: Option<PathBuf>,

    /// Inventory document override
    pub inventory: Option<PathBuf>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            inventory: cli.inventory.clone(),
        }
    }

    pub fn config_ref(&self) -> Option<&Path> {
        self.config.as_deref()
    }

    pub fn inventory_ref(&self) -> Option<&Path> {
        self.inventory.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_cli_copies_globals() {
        let cli = Cli::try_parse_from([
            "ec2-inventory",
            "--config",
            "/custom/config.yaml",
            "--inventory",
            "/data/inv.yaml",
            "types",
        ])
        .unwrap();

        let opts = GlobalOptions::from_cli(&cli);
        assert_eq!(opts.config_ref(), Some(Path::new("/custom/config.yaml")));
        assert_eq!(opts.inventory_ref(), Some(Path::new("/data/inv.yaml")));
        assert!(matches!(opts.format, OutputFormat::Table));
    }

    #[test]
    fn test_default_options_are_empty() {
        let opts = GlobalOptions::default();
        assert_eq!(opts.config_ref(), None);
        assert_eq!(opts.inventory_ref(), None);
    }
}
