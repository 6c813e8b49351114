//! Run every scraper in sequence with one shared client

use crate::Result;

use super::{
    common::CommandContext,
    results::{print_summary, scrape_tournament_results},
    schedule::scrape_schedule,
    standings::scrape_fedex_standings,
};

/// Handle the all command: schedule, then standings, then results.
///
/// Standings are always refreshed before the results pass so the roster is
/// current. The shared client keeps pacing across all three stages.
pub async fn handle_all(ctx: &CommandContext, max_players: usize) -> Result<()> {
    println!("=== Scraping Schedule ===");
    let schedule = scrape_schedule(ctx).await?;
    println!("✓ Scraped {} events\n", schedule.events.len());

    println!("=== Scraping FedEx Standings ===");
    let standings = scrape_fedex_standings(ctx).await?;
    println!("✓ Scraped {} players\n", standings.standings.len());

    println!("=== Scraping Tournament Results ===");
    let (_, summary) = scrape_tournament_results(ctx, max_players).await?;
    print_summary(&summary);

    println!("\n=== Done ===");
    Ok(())
}
