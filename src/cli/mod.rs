//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::resource::ResourceType;

pub mod args;
pub mod context;
pub mod inventory;
pub mod types;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// ec2-inventory - enumerate and summarize an EC2 account inventory
#[derive(Parser, Debug)]
#[command(name = "ec2-inventory")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "EC2_INVENTORY_FORMAT",
        default_value = "table",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "EC2_INVENTORY_CONFIG", hide_env = true)]
    pub config: Option<PathBuf>,

    /// Inventory document to read (overrides the config file)
    #[arg(long, global = true, env = "EC2_INVENTORY_FILE", hide_env = true)]
    pub inventory: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true, env = "EC2_INVENTORY_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count every resource type in the inventory
    Summary,

    /// List the identifiers of one resource type
    List {
        /// Resource type name, e.g. aws_instance
        kind: ResourceType,
    },

    /// Show the resource types and their registered flags
    Types,
}
