#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shared types for squad roster extraction.
//!
//! The extraction engine produces [`PlayerRecord`]s from squad tables. Which
//! column of a table feeds which record field is described by a
//! [`ColumnMap`] keyed by [`ColumnRole`], and how confidently a table was
//! picked from a page is described by a [`SelectionTier`].

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Output column order of the squad CSV.
pub const CSV_FIELDS: &[&str] = &[
    "Name",
    "Team",
    "Country",
    "Position",
    "League",
    "Shirt Number",
];

/// The semantic meaning of a squad table column.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ColumnRole {
    /// Player name, usually linked to the player's article.
    Name,
    /// Playing position (GK, DF, MF, FW).
    Position,
    /// Nationality, usually rendered as a flag plus a country link.
    Nationality,
    /// Squad (shirt) number.
    ShirtNumber,
}

/// Column index assigned to each [`ColumnRole`] for one table.
///
/// An unassigned role yields an empty field for every row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMap {
    /// Column holding the player name.
    pub name: Option<usize>,
    /// Column holding the position.
    pub position: Option<usize>,
    /// Column holding the nationality.
    pub nationality: Option<usize>,
    /// Column holding the shirt number.
    pub shirt_number: Option<usize>,
}

impl ColumnMap {
    /// Returns the column index assigned to `role`, if any.
    #[must_use]
    pub const fn get(&self, role: ColumnRole) -> Option<usize> {
        match role {
            ColumnRole::Name => self.name,
            ColumnRole::Position => self.position,
            ColumnRole::Nationality => self.nationality,
            ColumnRole::ShirtNumber => self.shirt_number,
        }
    }

    /// Assigns `index` to `role` unless the role already has a column.
    ///
    /// Returns `true` if the assignment was made.
    pub const fn claim(&mut self, role: ColumnRole, index: usize) -> bool {
        let slot = match role {
            ColumnRole::Name => &mut self.name,
            ColumnRole::Position => &mut self.position,
            ColumnRole::Nationality => &mut self.nationality,
            ColumnRole::ShirtNumber => &mut self.shirt_number,
        };
        if slot.is_some() {
            return false;
        }
        *slot = Some(index);
        true
    }

    /// Returns `true` if no role has a column.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.position.is_none()
            && self.nationality.is_none()
            && self.shirt_number.is_none()
    }
}

/// Which fallback tier produced the table chosen for a page.
///
/// Tiers are listed in preference order; earlier tiers win.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SelectionTier {
    /// Table after a matching heading with an explicit nationality header.
    HeadingStrict,
    /// Table after a matching heading that only passes loose classification.
    HeadingLoose,
    /// First roster-styled table on the page with a nationality header.
    PageStrict,
    /// First roster-styled table on the page passing loose classification.
    PageLoose,
    /// First roster-styled table on the page, unclassified.
    FirstRosterTable,
}

impl SelectionTier {
    /// Returns `true` for the unconditional last-resort tier, whose output
    /// should be checked by hand.
    #[must_use]
    pub const fn is_low_confidence(self) -> bool {
        matches!(self, Self::FirstRosterTable)
    }
}

/// One player of one club, as written to the output CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Player name. Never empty.
    #[serde(rename = "Name")]
    pub name: String,
    /// Club name from the club configuration.
    #[serde(rename = "Team")]
    pub team: String,
    /// Country code (e.g. `"ESP"`) or free-text nationality.
    #[serde(rename = "Country")]
    pub country: String,
    /// Position text as printed in the table.
    #[serde(rename = "Position")]
    pub position: String,
    /// League name from the club configuration.
    #[serde(rename = "League")]
    pub league: String,
    /// Digits (or a digit range such as `"9/10"`), or empty.
    #[serde(rename = "Shirt Number")]
    pub shirt_number: String,
}
