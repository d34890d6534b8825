use std::process;

use clap::Parser;
use tracing::{error, info};

use crate::{dns::ProviderError, runner::Runner, settings::Cli};

mod dns;
mod runner;
mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = tracing_subscriber::FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    if cli.create.is_empty() && cli.delete.is_empty() {
        eprintln!("at least one --create or --delete address must be given");
        process::exit(1);
    }
    let Some(domain) = cli.domain else {
        eprintln!("please define a domain name with --domain");
        process::exit(1);
    };

    info!("using {} as DNS provider", cli.provider);

    let provider = match dns::new_provider(cli.provider) {
        Ok(provider) => provider,
        Err(e @ ProviderError::Unsupported(_)) => {
            error!("failed to initialize DNS provider: {}", e);
            return Ok(());
        }
        Err(e) => {
            eprintln!("failed to initialize DNS provider: {}", e);
            process::exit(1);
        }
    };

    Runner::new(provider, domain).run(&cli.create, &cli.delete).await;

    Ok(())
}
