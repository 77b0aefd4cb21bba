//! Row validator.
//!
//! Squad tables often carry stray rows: repeated header fragments, country
//! names from split cells, and the coaching staff listed under the players.

use squad_roster_models::PlayerRecord;

/// Lowercased names that are never players.
const NAME_DENYLIST: &[&str] = &["apps", "goals", "2", "spain", "france", "netherlands"];

/// Lowercased positions held by staff rather than players.
const STAFF_POSITIONS: &[&str] = &[
    "manager",
    "coach",
    "assistant coaches",
    "goalkeeping coach",
    "\u{2014}",
];

/// Returns `true` if `record` looks like a real player.
#[must_use]
pub fn is_valid(record: &PlayerRecord) -> bool {
    let name = record.name.trim().to_lowercase();
    let position = record.position.trim().to_lowercase();

    name.chars().count() >= 2
        && !NAME_DENYLIST.contains(&name.as_str())
        && !STAFF_POSITIONS.contains(&position.as_str())
}
