//! ec2-inventory CLI

use clap::Parser;
use log::LevelFilter;

use ec2_inventory::cli::{self, Cli, CommandContext, Commands, GlobalOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    let opts = GlobalOptions::from_cli(&cli);
    match cli.command {
        Commands::Types => cli::types::run(opts.format)?,
        Commands::Summary => {
            let ctx = CommandContext::new(&opts)?;
            cli::inventory::summary(&ctx).await?;
        }
        Commands::List { kind } => {
            let ctx = CommandContext::new(&opts)?;
            cli::inventory::list(&ctx, kind).await?;
        }
    }

    Ok(())
}
