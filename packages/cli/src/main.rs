#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the squad roster scraper.
//!
//! Fetches each configured club's season page, extracts the first-team
//! squad, fills in missing nationalities and shirt numbers, and writes one
//! CSV for every club.
//!
//! Uses `indicatif-log-bridge` (via [`squad_roster_cli_utils::init_logger`])
//! so that log lines and the progress bar never fight for the terminal.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use squad_roster_cli_utils::IndicatifProgress;
use squad_roster_source::enrich::finalize;
use squad_roster_source::fetch::HttpSource;
use squad_roster_source::output::write_csv_file;
use squad_roster_source::registry::{ClubConfig, all_clubs, filter_clubs, load_clubs};
use squad_roster_source::settings::{
    DEFAULT_MIN_PLAYERS, DEFAULT_RETRIES, DEFAULT_TIMEOUT, ScrapeSettings,
};
use squad_roster_source::squad::scrape_clubs;

#[derive(Parser)]
#[command(
    name = "squad_roster",
    about = "Scrape first-team football squads into a CSV file"
)]
struct Cli {
    /// Output CSV path
    #[arg(long, default_value = "data/squads_2025_26.csv")]
    output: PathBuf,
    /// Club registry file of `[[club]]` tables (defaults to the built-in clubs)
    #[arg(long = "clubs")]
    registry: Option<PathBuf>,
    /// Only scrape this club id (repeatable)
    #[arg(long)]
    club: Vec<String>,
    /// Rosters smaller than this are treated as incomplete
    #[arg(long, default_value_t = DEFAULT_MIN_PLAYERS)]
    min_players: usize,
    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout_secs: u64,
    /// Retries per URL for transient HTTP failures
    #[arg(long, default_value_t = DEFAULT_RETRIES)]
    retries: u32,
    /// Do not fetch player articles to fill missing nationalities
    #[arg(long)]
    no_player_lookup: bool,
    /// Print the selected clubs and exit
    #[arg(long)]
    list: bool,
}

impl Cli {
    fn settings(&self) -> ScrapeSettings {
        ScrapeSettings {
            timeout: Duration::from_secs(self.timeout_secs),
            retries: self.retries,
            min_players: self.min_players,
            player_lookup: !self.no_player_lookup,
            ..ScrapeSettings::default()
        }
    }
}

fn print_clubs(clubs: &[ClubConfig]) {
    println!("{:<20} {:<20} LEAGUE", "ID", "TEAM");
    println!("{}", "-".repeat(60));
    for club in clubs {
        println!("{:<20} {:<20} {}", club.id, club.team, club.league);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = squad_roster_cli_utils::init_logger();
    let cli = Cli::parse();

    let clubs = match &cli.registry {
        Some(path) => load_clubs(path)?,
        None => all_clubs(),
    };
    let clubs = filter_clubs(clubs, &cli.club)?;

    if cli.list {
        print_clubs(&clubs);
        return Ok(());
    }

    let settings = cli.settings();
    let source = HttpSource::new(&settings)?;

    let progress = IndicatifProgress::clubs_bar(&multi);
    let records = scrape_clubs(&source, &clubs, &settings, progress.as_ref());
    let (records, _stats) = finalize(&source, &settings, records);

    write_csv_file(&cli.output, &records)?;

    Ok(())
}
