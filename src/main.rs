#![warn(clippy::pedantic)]

use anyhow::Result;
use clap::Parser;

mod cli;
mod constants;
mod dashboard;
mod flow;
mod github;

#[tokio::main]
async fn main() -> Result<()> {
    cli::init_tracing();

    let cli = cli::Cli::parse();

    let github_api = github::client(&cli.api_url, &cli.github_comments_token)?;
    let repo = github::Repository::new(&github_api, &cli.owner, &cli.repo);
    let dashboard = dashboard::Dashboard::new(cli.dashboard_url);
    flow::run(repo, &dashboard, &cli.circle_branch, cli.dry_run).await?;
    Ok(())
}
