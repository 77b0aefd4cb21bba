//! Row normalizer.
//!
//! Turns the raw cells of one table row into clean field values using a
//! [`ColumnMap`].

use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;
use squad_roster_models::{ColumnMap, ColumnRole, PlayerRecord};

use crate::country::country_code;
use crate::text::{LINK, element_text, flag_country, inside_flag_marker};

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new("[0-9]+").expect("valid regex"));

/// Field values read from one row, before team and league are attached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFields {
    pub name: String,
    pub position: String,
    pub country: String,
    pub shirt_number: String,
}

impl RowFields {
    /// Attaches the club's team and league.
    #[must_use]
    pub fn into_record(self, team: &str, league: &str) -> PlayerRecord {
        PlayerRecord {
            name: self.name,
            team: team.to_owned(),
            country: self.country,
            position: self.position,
            league: league.to_owned(),
            shirt_number: self.shirt_number,
        }
    }
}

/// Cleans shirt number text.
///
/// Text that is all digits once `-` and `/` are removed is kept as is, so
/// ranges like `"9/10"` survive. Otherwise the first run of digits is taken,
/// and text with no digits becomes empty.
#[must_use]
pub fn clean_shirt_number(raw: &str) -> String {
    let raw = raw.trim();
    let stripped: String = raw.chars().filter(|c| !matches!(c, '-' | '/')).collect();
    if !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit()) {
        return raw.to_owned();
    }
    DIGITS
        .find(raw)
        .map(|m| m.as_str().to_owned())
        .unwrap_or_default()
}

/// Reads the player name from a name cell.
///
/// The first link outside a flag marker wins over the cell's own text,
/// which often carries footnote markers and captaincy notes.
#[must_use]
pub fn player_name(cell: ElementRef<'_>) -> String {
    cell.select(&LINK)
        .filter(|a| !inside_flag_marker(*a))
        .map(|a| element_text(a, " "))
        .find(|t| !t.is_empty())
        .unwrap_or_else(|| element_text(cell, " "))
}

/// Reads raw nationality text from a nationality cell: the last link, then
/// a flag marker, then the cell text.
#[must_use]
pub fn nationality_text(cell: ElementRef<'_>) -> String {
    if let Some(text) = cell
        .select(&LINK)
        .map(|a| element_text(a, " "))
        .filter(|t| !t.is_empty())
        .last()
    {
        return text;
    }

    let flag = flag_country(cell);
    if flag.is_empty() {
        element_text(cell, " ")
    } else {
        flag
    }
}

/// Normalizes one row of cells.
///
/// Returns `None` for rows with fewer than two cells or without a name.
#[must_use]
pub fn normalize_row(cells: &[ElementRef<'_>], columns: &ColumnMap) -> Option<RowFields> {
    if cells.len() < 2 {
        return None;
    }

    let cell = |role: ColumnRole| columns.get(role).and_then(|i| cells.get(i)).copied();

    let name_cell = cell(ColumnRole::Name);
    let name = name_cell.map(player_name).unwrap_or_default();
    if name.is_empty() {
        return None;
    }

    let position = cell(ColumnRole::Position)
        .map(|c| element_text(c, " "))
        .unwrap_or_default();

    let raw_country = match cell(ColumnRole::Nationality) {
        Some(c) => nationality_text(c),
        None => name_cell.map(flag_country).unwrap_or_default(),
    };

    let shirt_number = cell(ColumnRole::ShirtNumber)
        .map(|c| clean_shirt_number(&element_text(c, " ")))
        .unwrap_or_default();

    Some(RowFields {
        name,
        position,
        country: country_code(&raw_country),
        shirt_number,
    })
}
