//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use espn_golf::{
    cli::{Commands, GolfCli},
    commands::{
        common::CommandContext,
        resolve_output_dir, resolve_season,
        results::handle_results,
        run_all::handle_all,
        schedule::handle_schedule,
        standings::handle_fedex,
    },
    core::logging::init_logging,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = GolfCli::parse();

    if let Err(e) = init_logging(app.debug) {
        eprintln!("Logging setup failed: {e}");
    }

    let season = resolve_season(app.season).context("invalid season")?;
    let output_dir = resolve_output_dir(app.output_dir);
    let ctx = CommandContext::new(season, output_dir).context("failed to build ESPN client")?;

    match app.command {
        Commands::Schedule => handle_schedule(&ctx)
            .await
            .context("schedule scrape failed")?,
        Commands::Fedex => handle_fedex(&ctx)
            .await
            .context("FedEx standings scrape failed")?,
        Commands::Results { args } => handle_results(&ctx, args.max_players)
            .await
            .context("tournament results scrape failed")?,
        Commands::All { args } => handle_all(&ctx, args.max_players)
            .await
            .context("scrape run failed")?,
    }

    Ok(())
}
