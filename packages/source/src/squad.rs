//! Per-club driver.
//!
//! Tries each of a club's candidate URLs in order until one yields a roster
//! of at least [`ScrapeSettings::min_players`] players. Smaller rosters are
//! kept as a fallback while the remaining URLs are tried; the largest one
//! is used if no URL reaches the threshold. Nothing here fails the run: a
//! club whose every URL fails contributes no rows.

use squad_roster_models::PlayerRecord;
use squad_roster_scraper::{ExtractError, extract_roster};

use crate::fetch::DocumentSource;
use crate::progress::ProgressCallback;
use crate::registry::ClubConfig;
use crate::settings::ScrapeSettings;

/// Fetches the squad of one club.
pub fn fetch_club_squad<S: DocumentSource + ?Sized>(
    source: &S,
    club: &ClubConfig,
    settings: &ScrapeSettings,
) -> Vec<PlayerRecord> {
    let team = club.team.as_str();
    let mut partial: Vec<PlayerRecord> = Vec::new();

    for url in &club.urls {
        log::info!("[{team}] Fetching {url}");

        let document = match source.fetch(url) {
            Ok(document) => document,
            Err(e) => {
                log::warn!("[{team}] Failed to fetch {url}: {e}");
                continue;
            }
        };

        let roster = match extract_roster(&document, &settings.heading_phrases, team, &club.league)
        {
            Ok(roster) => roster,
            Err(ExtractError::NoTable) => {
                log::warn!("[{team}] No squad table found on this page");
                continue;
            }
            Err(e @ ExtractError::EmptyTable { .. }) => {
                log::warn!("[{team}] {e}, trying next URL");
                continue;
            }
        };

        let count = roster.records.len();
        log::info!("[{team}] Found {count} players ({})", roster.tier);

        if count >= settings.min_players {
            return roster.records;
        }

        log::warn!("[{team}] Roster looks incomplete, trying fallback URL");
        if count > partial.len() {
            partial = roster.records;
        }
    }

    if partial.is_empty() {
        log::error!("[{team}] Failed to get squad");
    } else {
        log::warn!(
            "[{team}] Using partial roster ({} players). Consider updating the source URL.",
            partial.len()
        );
    }

    partial
}

/// Fetches every club in order and concatenates their rosters.
pub fn scrape_clubs<S: DocumentSource + ?Sized>(
    source: &S,
    clubs: &[ClubConfig],
    settings: &ScrapeSettings,
    progress: &dyn ProgressCallback,
) -> Vec<PlayerRecord> {
    progress.set_total(clubs.len() as u64);

    let mut records = Vec::new();
    for club in clubs {
        progress.set_message(club.team.clone());
        records.extend(fetch_club_squad(source, club, settings));
        progress.inc(1);
    }

    progress.finish(format!("{} players from {} clubs", records.len(), clubs.len()));
    records
}
