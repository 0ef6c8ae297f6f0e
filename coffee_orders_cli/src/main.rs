mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use coffee_orders_lib::Config;

#[derive(Parser)]
#[command(name = "coffee-orders")]
#[command(about = "Turn product links posted in a Slack thread into a CSV order sheet")]
struct Cli {
    /// Only keep links containing this domain (overrides COFFEE_ORDERS_DOMAIN)
    #[arg(long, global = true)]
    domain: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect links, scrape product details and write the order CSV
    Export(commands::export::ExportArgs),
    /// Print the links found in a thread without visiting the catalog
    Links(commands::links::LinksArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("coffee_orders_lib=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e.into());
        }
    }

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(domain) = cli.domain {
        config.link_domain = domain;
    }

    match &cli.command {
        Commands::Export(args) => commands::export::run(args, &config).await?,
        Commands::Links(args) => commands::links::run(args, &config).await?,
    }

    Ok(())
}
