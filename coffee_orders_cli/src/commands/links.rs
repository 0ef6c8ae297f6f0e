//! The `links` subcommand: list collected links without logging in to the catalog.

use anyhow::Result;
use clap::Args;
use coffee_orders_lib::{parse_thread_url, slack_api, Config, ThreadLinkCollector};

use crate::output::print_links_csv;

#[derive(Args)]
pub struct LinksArgs {
    /// Slack thread link, e.g. https://acme.slack.com/archives/C012AB3CD/p1700000000123456
    #[arg(long)]
    pub thread_url: String,
}

pub async fn run(args: &LinksArgs, config: &Config) -> Result<()> {
    let thread = parse_thread_url(&args.thread_url)?;
    let slack = slack_api::Client::with_base_url(
        &config.slack_api_base_url,
        &config.slack_token,
        &config.slack_cookie_value,
    );
    let links = ThreadLinkCollector::new(slack, &config.link_domain)
        .collect(&thread.channel_id, &thread.ts)
        .await?;

    if links.is_empty() {
        eprintln!("No {} links found in thread", config.link_domain);
        return Ok(());
    }
    print_links_csv(&links)
}
