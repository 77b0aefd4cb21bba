#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Squad table extraction for wiki-style club season pages.
//!
//! Given a parsed page, [`extract_roster`] finds the table that lists the
//! current first-team squad ([`select`]), works out which column holds
//! which field ([`columns`]), and normalizes each row into a
//! [`PlayerRecord`] ([`normalize`]).
//!
//! The crate does no I/O. Fetching pages and writing output is left to the
//! caller; [`validate`] and [`infobox`] are exposed for the caller's
//! post-processing.

pub mod classify;
pub mod columns;
pub mod country;
pub mod heading;
pub mod infobox;
pub mod normalize;
pub mod select;
pub mod table;
pub mod text;
pub mod validate;

use scraper::Html;
use squad_roster_models::{ColumnMap, PlayerRecord, SelectionTier};

use crate::columns::infer_columns;
use crate::normalize::normalize_row;
use crate::select::select_table;
use crate::table::CandidateTable;

/// Errors that can occur while extracting a squad from a page.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The page has no roster-styled table at all.
    #[error("No squad table found on page")]
    NoTable,

    /// A table was selected but none of its rows produced a player.
    #[error("Squad table ({tier}) produced no players")]
    EmptyTable {
        /// The tier that selected the table.
        tier: SelectionTier,
    },
}

/// The players read from one page.
#[derive(Debug, Clone)]
pub struct Roster {
    /// One record per qualifying row, in table order.
    pub records: Vec<PlayerRecord>,
    /// How the table was chosen.
    pub tier: SelectionTier,
    /// The inferred column layout.
    pub columns: ColumnMap,
}

/// Parses every data row of `table` into player records.
///
/// Returns the records together with the column layout used.
#[must_use]
pub fn parse_table(
    table: &CandidateTable<'_>,
    team: &str,
    league: &str,
) -> (Vec<PlayerRecord>, ColumnMap) {
    let columns = infer_columns(table);
    if columns.is_empty() {
        log::debug!("[{team}] No column roles recognized in the header row");
    } else {
        log::debug!("[{team}] Column layout: {columns:?}");
    }

    let records = table
        .data_rows()
        .iter()
        .filter_map(|cells| normalize_row(cells, &columns))
        .map(|fields| fields.into_record(team, league))
        .collect();

    (records, columns)
}

/// Extracts the squad of `team` from `document`.
///
/// # Errors
///
/// * [`ExtractError::NoTable`] if the page has no roster-styled table.
/// * [`ExtractError::EmptyTable`] if the chosen table yields no players.
pub fn extract_roster<S: AsRef<str>>(
    document: &Html,
    heading_phrases: &[S],
    team: &str,
    league: &str,
) -> Result<Roster, ExtractError> {
    let selection = select_table(document, heading_phrases).ok_or(ExtractError::NoTable)?;

    if selection.tier.is_low_confidence() {
        log::warn!(
            "[{team}] Using fallback: first roster table on page (check this club manually)"
        );
    }

    let (records, columns) = parse_table(&selection.table, team, league);
    if records.is_empty() {
        return Err(ExtractError::EmptyTable {
            tier: selection.tier,
        });
    }

    Ok(Roster {
        records,
        tier: selection.tier,
        columns,
    })
}
