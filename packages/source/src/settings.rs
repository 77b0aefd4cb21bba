//! Scrape settings shared by the fetcher, the per-club driver, and the
//! enrichment pass.

use std::time::Duration;

use crate::SourceError;

/// Desktop browser identification sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/129.0.0.0 Safari/537.36";

/// `Accept-Language` header sent with every request.
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Per-attempt request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Transient-failure retries per URL.
pub const DEFAULT_RETRIES: u32 = 2;

/// A roster with fewer players than this is treated as incomplete.
pub const DEFAULT_MIN_PLAYERS: usize = 10;

/// Heading texts that introduce the current squad table.
pub const DEFAULT_HEADING_PHRASES: &[&str] =
    &["first-team squad", "first team squad", "current squad"];

/// Article base URL for player-page lookups.
pub const DEFAULT_LOOKUP_BASE_URL: &str = "https://en.wikipedia.org/wiki/";

/// Tunables for one scrape run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeSettings {
    /// Per-attempt request timeout.
    pub timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
    /// `Accept-Language` header value.
    pub accept_language: String,
    /// How many times a transient failure is retried per URL.
    pub retries: u32,
    /// Minimum roster size accepted without trying further URLs.
    pub min_players: usize,
    /// Phrases matched against section headings.
    pub heading_phrases: Vec<String>,
    /// Whether unknown players with no country get their article fetched.
    pub player_lookup: bool,
    /// Base URL player names are appended to.
    pub lookup_base_url: String,
}

impl Default for ScrapeSettings {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_owned(),
            retries: DEFAULT_RETRIES,
            min_players: DEFAULT_MIN_PLAYERS,
            heading_phrases: DEFAULT_HEADING_PHRASES
                .iter()
                .map(|p| (*p).to_owned())
                .collect(),
            player_lookup: true,
            lookup_base_url: DEFAULT_LOOKUP_BASE_URL.to_owned(),
        }
    }
}

impl ScrapeSettings {
    /// Article URL for `player`, with spaces turned into underscores.
    ///
    /// The name is appended as a single percent-encoded path segment, so
    /// `?`, `#`, `%` and `/` stay part of the title.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Config`] if `lookup_base_url` is not a valid
    /// base URL.
    pub fn player_url(&self, player: &str) -> Result<String, SourceError> {
        let invalid_base = || SourceError::Config {
            message: format!("Invalid lookup base URL: {}", self.lookup_base_url),
        };

        let mut url = reqwest::Url::parse(&self.lookup_base_url).map_err(|_| invalid_base())?;
        url.path_segments_mut()
            .map_err(|()| invalid_base())?
            .pop_if_empty()
            .push(&player.trim().replace(' ', "_"));

        Ok(url.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = ScrapeSettings::default();
        assert_eq!(settings.timeout, Duration::from_secs(15));
        assert_eq!(settings.min_players, 10);
        assert_eq!(settings.heading_phrases.len(), 3);
        assert!(settings.player_lookup);
    }

    #[test]
    fn player_url_uses_underscores() {
        let settings = ScrapeSettings::default();
        assert_eq!(
            settings.player_url(" Rodri ").unwrap(),
            "https://en.wikipedia.org/wiki/Rodri"
        );
        assert_eq!(
            settings.player_url("Marc-André ter Stegen").unwrap(),
            "https://en.wikipedia.org/wiki/Marc-Andr%C3%A9_ter_Stegen"
        );
    }

    #[test]
    fn player_url_encodes_reserved_characters() {
        let settings = ScrapeSettings::default();
        assert_eq!(
            settings.player_url("Who? #1 100%").unwrap(),
            "https://en.wikipedia.org/wiki/Who%3F_%231_100%25"
        );
        assert_eq!(
            settings.player_url("AC/DC").unwrap(),
            "https://en.wikipedia.org/wiki/AC%2FDC"
        );
    }

    #[test]
    fn invalid_lookup_base_is_a_config_error() {
        let settings = ScrapeSettings {
            lookup_base_url: "not a url".to_owned(),
            ..ScrapeSettings::default()
        };
        assert!(matches!(
            settings.player_url("Rodri"),
            Err(SourceError::Config { .. })
        ));
    }
}
