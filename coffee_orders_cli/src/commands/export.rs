//! The `export` subcommand: the full thread-to-CSV run.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use coffee_orders_lib::{parse_thread_url, pipeline, Config};

use crate::output::print_summary;

#[derive(Args)]
pub struct ExportArgs {
    /// Slack thread link, e.g. https://acme.slack.com/archives/C012AB3CD/p1700000000123456
    #[arg(long)]
    pub thread_url: String,

    /// Where to write the CSV report (overwritten if it exists)
    #[arg(long, default_value = "orders.csv")]
    pub output: PathBuf,
}

pub async fn run(args: &ExportArgs, config: &Config) -> Result<()> {
    let thread = parse_thread_url(&args.thread_url)?;
    let summary = pipeline::run(config, &thread, &args.output).await?;
    print_summary(&summary, &args.output);
    Ok(())
}
