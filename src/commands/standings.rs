//! FedEx Cup standings command and the roster source built on it.

use tracing::{info, warn};

use crate::{
    core::settings::STANDINGS_FILE,
    espn::{
        extract::extract_standings,
        types::{PlayerRef, Standings},
    },
    EspnError, Result,
};

use super::common::CommandContext;

/// Fetch FedEx Cup standings and write `fedex_standings.json`.
///
/// # Errors
///
/// Propagates [`EspnError::CategoryNotFound`] when the statistics payload
/// has no `cupPoints` category; the existing standings file is left alone.
pub async fn scrape_fedex_standings(ctx: &CommandContext) -> Result<Standings> {
    info!("Scraping FedEx Cup standings...");
    let payload = ctx.client.statistics().await?;

    let standings = match extract_standings(&payload) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Standings layout changed upstream: {}", e);
            return Err(e);
        }
    };

    let result = Standings {
        season: ctx.season,
        standings,
    };

    ctx.writer.write_json(STANDINGS_FILE, &result, None)?;
    info!("Scraped {} players in FedEx standings", result.standings.len());
    Ok(result)
}

/// Roster for the results pass, ordered by standings rank.
///
/// Reads `fedex_standings.json` from the output directory, scraping the
/// standings first when the file does not exist yet. Entries without an
/// athlete id are dropped.
pub async fn load_player_roster(ctx: &CommandContext) -> Result<Vec<PlayerRef>> {
    let standings = match ctx.writer.read_json::<Standings>(STANDINGS_FILE)? {
        Some(standings) => standings,
        None => {
            warn!("{} not found, scraping first...", STANDINGS_FILE);
            scrape_fedex_standings(ctx).await?
        }
    };

    if standings.season != ctx.season {
        warn!(
            "Roster is from season {} but results are requested for {}",
            standings.season, ctx.season
        );
    }

    let mut entries = standings.standings;
    // Unranked (0) entries go last; the sort is stable.
    entries.sort_by_key(|entry| match entry.rank {
        0 => u32::MAX,
        rank => rank,
    });

    let roster: Vec<PlayerRef> = entries
        .iter()
        .filter(|entry| !entry.athlete_id.as_str().is_empty())
        .map(PlayerRef::from)
        .collect();

    if roster.is_empty() {
        return Err(EspnError::MissingRoster {
            message: format!("{} lists no players", STANDINGS_FILE),
        });
    }

    info!("Loaded {} players from roster", roster.len());
    Ok(roster)
}

/// Handle the fedex command
pub async fn handle_fedex(ctx: &CommandContext) -> Result<()> {
    let standings = scrape_fedex_standings(ctx).await?;
    println!("✓ Scraped {} players", standings.standings.len());
    Ok(())
}
