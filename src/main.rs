use clap::Parser;
use tracing::{error, info};

use cartcompare::adapter::inbound::cli::command::Cli;
use cartcompare::adapter::inbound::cli::output::{self, OutputConfig};
use cartcompare::adapter::inbound::cli::run;
use cartcompare::infrastructure::config::Config;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    let config = match Config::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            output::error(&format!("Failed to load config: {e}"));
            std::process::exit(1);
        }
    };

    config.logging.clone().with_verbosity(output::verbosity()).init();
    info!(config = %cli.config.display(), "cartcompare starting");

    if let Err(e) = run(cli, &config).await {
        error!(error = %e, "Command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
