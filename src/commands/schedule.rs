//! Tournament schedule command implementation

use tracing::info;

use crate::{
    core::settings::SCHEDULE_FILE,
    espn::{extract::extract_schedule, types::Schedule},
    Result,
};

use super::common::CommandContext;

/// Fetch the season calendar and write `tournament_schedule.json`.
pub async fn scrape_schedule(ctx: &CommandContext) -> Result<Schedule> {
    info!("Scraping tournament schedule...");
    let payload = ctx.client.scoreboard().await?;

    let schedule = Schedule {
        season: ctx.season,
        events: extract_schedule(&payload),
    };

    ctx.writer.write_json(SCHEDULE_FILE, &schedule, None)?;
    info!("Scraped {} tournament events", schedule.events.len());
    Ok(schedule)
}

/// Handle the schedule command
pub async fn handle_schedule(ctx: &CommandContext) -> Result<()> {
    let schedule = scrape_schedule(ctx).await?;
    println!("✓ Scraped {} events", schedule.events.len());
    Ok(())
}
