//! Tournament results command implementation

use tracing::info;

use crate::{
    core::{settings::TOURNAMENT_RESULTS_SUBDIR, tournament_filename},
    espn::aggregate::{aggregate_tournament_results, AggregationReport},
    Result,
};

use super::{common::CommandContext, standings::load_player_roster};

/// What one results run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsSummary {
    pub files_written: usize,
    pub players_fetched: usize,
    pub players_failed: usize,
}

/// Aggregate per-tournament results for the top `max_players` of the roster
/// and write one file per tournament under `tournament_results/`.
///
/// Player fetch failures are absorbed by the aggregation pass; roster and
/// file-write failures are returned.
pub async fn scrape_tournament_results(
    ctx: &CommandContext,
    max_players: usize,
) -> Result<(AggregationReport, ResultsSummary)> {
    info!("Scraping tournament results for up to {} players...", max_players);

    let roster = load_player_roster(ctx).await?;
    let report = aggregate_tournament_results(&ctx.client, &roster, max_players, ctx.season).await;

    for set in report.tournaments.values() {
        let filename = tournament_filename(set.event_id.as_str(), &set.event_name);
        ctx.writer.write_json(&filename, set, Some(TOURNAMENT_RESULTS_SUBDIR))?;
    }

    let summary = ResultsSummary {
        files_written: report.tournaments.len(),
        players_fetched: report.players_fetched,
        players_failed: report.players_failed.len(),
    };
    info!("Created {} tournament result files", summary.files_written);
    Ok((report, summary))
}

/// Handle the results command
pub async fn handle_results(ctx: &CommandContext, max_players: usize) -> Result<()> {
    let (_, summary) = scrape_tournament_results(ctx, max_players).await?;
    print_summary(&summary);
    Ok(())
}

pub(crate) fn print_summary(summary: &ResultsSummary) {
    println!("✓ Created {} tournament result files", summary.files_written);
    if summary.players_failed > 0 {
        println!(
            "⚠ Fetched stats for {} players, {} failed",
            summary.players_fetched, summary.players_failed
        );
    } else {
        println!("Fetched stats for {} players", summary.players_fetched);
    }
}
