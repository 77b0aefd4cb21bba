#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Collaborators around the squad extraction engine.
//!
//! * [`registry`] lists the clubs to scrape, embedded from TOML.
//! * [`fetch`] defines the [`fetch::DocumentSource`] seam and its HTTP
//!   implementation, which retries transient failures ([`retry`]).
//! * [`squad`] walks each club's candidate URLs until one yields a full
//!   roster.
//! * [`enrich`] filters non-player rows and fills missing fields.
//! * [`output`] writes the final CSV.

pub mod enrich;
pub mod fetch;
pub mod output;
pub mod progress;
pub mod registry;
pub mod retry;
pub mod settings;
pub mod squad;

/// Errors that can occur while fetching pages, loading configuration, or
/// writing output.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP {status} for {url}")]
    Status {
        /// The requested URL.
        url: String,
        /// The response status code.
        status: u16,
    },

    /// I/O error (file read/write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A club configuration file could not be parsed.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration is invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong.
        message: String,
    },
}
