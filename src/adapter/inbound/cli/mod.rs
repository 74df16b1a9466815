//! CLI module graph and command dispatch.

pub mod cart;
pub mod command;
pub mod compare;
pub mod listing;
pub mod output;
pub mod paths;
pub mod render;

use command::{Cli, Commands};

use crate::error::Result;
use crate::infrastructure::config::Config;

/// Run a parsed command against a loaded configuration.
pub async fn run(cli: Cli, config: &Config) -> Result<()> {
    match cli.command {
        Commands::Cart(command) => cart::execute(command, config).await,
        Commands::Compare => compare::execute(config).await,
        Commands::Search(args) => listing::search(config, args).await,
        Commands::Sale(args) => listing::sale(config, args).await,
        Commands::Category(args) => listing::category(config, args).await,
        Commands::Show(args) => listing::show(config, args).await,
        Commands::Featured => listing::featured(config).await,
    }
}
