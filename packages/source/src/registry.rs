//! Club registry: loads club definitions from embedded TOML configs.
//!
//! Each `.toml` file in `packages/source/clubs/` is baked into the binary at
//! compile time via [`include_str!`]. Adding a club means adding a TOML file
//! and listing it below. A registry file on disk (a list of `[[club]]`
//! tables) can replace the embedded set at runtime via [`load_clubs`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::SourceError;

/// One club and the pages its squad may be read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubConfig {
    /// Short identifier used for filtering (e.g., `"arsenal"`).
    pub id: String,
    /// Club name written to the `Team` column.
    pub team: String,
    /// League name written to the `League` column.
    pub league: String,
    /// Candidate pages, tried in order.
    pub urls: Vec<String>,
}

/// TOML configs embedded at compile time.
const CLUB_TOMLS: &[(&str, &str)] = &[
    // ── LaLiga ───────────────────────────────────────────────────────
    ("barcelona", include_str!("../clubs/barcelona.toml")),
    ("real_madrid", include_str!("../clubs/real_madrid.toml")),
    (
        "atletico_madrid",
        include_str!("../clubs/atletico_madrid.toml"),
    ),
    // ── Premier League ───────────────────────────────────────────────
    (
        "manchester_city",
        include_str!("../clubs/manchester_city.toml"),
    ),
    (
        "manchester_united",
        include_str!("../clubs/manchester_united.toml"),
    ),
    ("chelsea", include_str!("../clubs/chelsea.toml")),
    ("liverpool", include_str!("../clubs/liverpool.toml")),
    ("arsenal", include_str!("../clubs/arsenal.toml")),
    ("tottenham", include_str!("../clubs/tottenham.toml")),
    // ── Bundesliga ───────────────────────────────────────────────────
    ("bayern_munich", include_str!("../clubs/bayern_munich.toml")),
];

/// Total number of configured clubs (used in tests).
#[cfg(test)]
const EXPECTED_CLUB_COUNT: usize = 10;

#[derive(Debug, Deserialize)]
struct ClubFile {
    club: Vec<ClubConfig>,
}

/// Parses a single [`ClubConfig`] from a TOML string.
///
/// # Errors
///
/// Returns [`SourceError::Toml`] if the TOML is malformed or missing
/// required fields.
pub fn parse_club_toml(toml_str: &str) -> Result<ClubConfig, SourceError> {
    Ok(toml::from_str(toml_str)?)
}

/// Returns all embedded club definitions.
///
/// # Panics
///
/// Panics if any embedded TOML config is malformed.
#[must_use]
pub fn all_clubs() -> Vec<ClubConfig> {
    CLUB_TOMLS
        .iter()
        .map(|(name, toml)| {
            parse_club_toml(toml).unwrap_or_else(|e| panic!("Failed to parse {name}.toml: {e}"))
        })
        .collect()
}

/// Loads club definitions from a registry file of `[[club]]` tables.
///
/// # Errors
///
/// Returns [`SourceError`] if the file cannot be read or parsed, or if it
/// defines no clubs.
pub fn load_clubs(path: &Path) -> Result<Vec<ClubConfig>, SourceError> {
    let contents = std::fs::read_to_string(path)?;
    let file: ClubFile = toml::from_str(&contents)?;

    if file.club.is_empty() {
        return Err(SourceError::Config {
            message: format!("{} defines no clubs", path.display()),
        });
    }

    log::info!("Loaded {} clubs from {}", file.club.len(), path.display());
    Ok(file.club)
}

/// Keeps only the clubs whose id is in `ids`, in registry order. An empty
/// `ids` keeps every club.
///
/// # Errors
///
/// Returns [`SourceError::Config`] if an id matches no club.
pub fn filter_clubs(
    clubs: Vec<ClubConfig>,
    ids: &[String],
) -> Result<Vec<ClubConfig>, SourceError> {
    if ids.is_empty() {
        return Ok(clubs);
    }

    if let Some(unknown) = ids.iter().find(|id| !clubs.iter().any(|c| &c.id == *id)) {
        return Err(SourceError::Config {
            message: format!("Unknown club id: {unknown}"),
        });
    }

    Ok(clubs.into_iter().filter(|c| ids.contains(&c.id)).collect())
}
