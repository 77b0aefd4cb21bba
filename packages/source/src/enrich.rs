//! Post-processing of the scraped rows.
//!
//! [`finalize`] drops rows that are not players and fills fields the table
//! left empty, first from a table of well-known players and then, for
//! players not in it, from the player's own article.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use squad_roster_models::PlayerRecord;
use squad_roster_scraper::infobox::infobox_country;
use squad_roster_scraper::validate::is_valid;

use crate::fetch::DocumentSource;
use crate::settings::ScrapeSettings;

/// Facts known about a player ahead of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerFacts {
    /// Country code, or empty if unknown.
    pub country: &'static str,
    /// Shirt number, or empty if unknown.
    pub shirt_number: &'static str,
}

/// (name, country code, shirt number)
const KNOWN_PLAYER_ROWS: &[(&str, &str, &str)] = &[
    // Tottenham Hotspur
    ("Pedro Porro", "ESP", "23"),
    ("Xavi Simons", "NED", "10"),
    ("Guglielmo Vicario", "ITA", "13"),
    ("Cristian Romero", "ARG", "17"),
    ("Destiny Udogie", "ITA", "38"),
    ("Yves Bissouma", "MLI", "8"),
    ("James Maddison", "ENG", "10"),
    ("Dejan Kulusevski", "SWE", "21"),
    ("Richarlison", "BRA", "9"),
    ("Dominic Solanke", "ENG", "9"),
    ("Mohammed Kudus", "GHA", "11"),
    ("Brennan Johnson", "WAL", "22"),
    ("Micky van de Ven", "NED", "37"),
    ("João Palhinha", "POR", "6"),
    ("Radu Drăgușin", "ROU", "6"),
    ("Kevin Danso", "AUT", "15"),
    ("Ben Davies", "WAL", "33"),
    ("Archie Gray", "ENG", "44"),
    ("Lucas Bergvall", "SWE", "41"),
    ("Pape Matar Sarr", "SEN", "29"),
    ("Rodrigo Bentancur", "URU", "30"),
    ("Mathys Tel", "FRA", "18"),
    ("Randal Kolo Muani", "FRA", "9"),
    ("Wilson Odobert", "FRA", "23"),
    // FC Barcelona
    ("Marc-André ter Stegen", "GER", "1"),
    ("Joan García", "ESP", "13"),
    ("Alejandro Balde", "ESP", "3"),
    ("Ronald Araújo", "URU", "4"),
    ("Pau Cubarsí", "ESP", "5"),
    ("Andreas Christensen", "DEN", "15"),
    ("Jules Koundé", "FRA", "23"),
    ("Gavi", "ESP", "6"),
    ("Pedri", "ESP", "8"),
    ("Frenkie de Jong", "NED", "21"),
    ("Ferran Torres", "ESP", "7"),
    ("Robert Lewandowski", "POL", "9"),
    ("Lamine Yamal", "ESP", "10"),
    ("Raphinha", "BRA", "11"),
    ("Marcus Rashford", "ENG", "14"),
    ("Roony Bardghji", "SWE", "28"),
    // Real Madrid
    ("Thibaut Courtois", "BEL", "1"),
    ("Dani Carvajal", "ESP", "2"),
    ("Éder Militão", "BRA", "3"),
    ("David Alaba", "AUT", "4"),
    ("Jude Bellingham", "ENG", "5"),
    ("Vinícius Júnior", "BRA", "7"),
    ("Federico Valverde", "URU", "15"),
    ("Endrick", "BRA", "9"),
    ("Kylian Mbappé", "FRA", "10"),
    ("Rodrygo", "BRA", "11"),
    ("Trent Alexander-Arnold", "ENG", "12"),
    ("Andriy Lunin", "UKR", "13"),
    // Manchester City
    ("James Trafford", "ENG", "1"),
    ("Stefan Ortega", "GER", "18"),
    ("Gianluigi Donnarumma", "ITA", "25"),
    ("Rúben Dias", "POR", "3"),
    ("John Stones", "ENG", "5"),
    ("Nathan Aké", "NED", "6"),
    ("Joško Gvardiol", "CRO", "24"),
    ("Rodri", "ESP", "16"),
    ("Bernardo Silva", "POR", "20"),
    ("Phil Foden", "ENG", "47"),
    ("Erling Haaland", "NOR", "9"),
    // Liverpool
    ("Alisson Becker", "BRA", "1"),
    ("Virgil van Dijk", "NED", "4"),
    ("Ibrahima Konaté", "FRA", "5"),
    ("Wataru Endo", "JPN", "3"),
    ("Alexis Mac Allister", "ARG", "10"),
    ("Mohamed Salah", "EGY", "11"),
    ("Florian Wirtz", "GER", "7"),
    ("Dominik Szoboszlai", "HUN", "8"),
    ("Alexander Isak", "SWE", "14"),
    ("Federico Chiesa", "ITA", "7"),
    ("Cody Gakpo", "NED", "18"),
    ("Andy Robertson", "SCO", "26"),
    ("Conor Bradley", "NIR", "12"),
    // Chelsea
    ("Robert Sánchez", "ESP", "1"),
    ("Marc Cucurella", "ESP", "3"),
    ("Reece James", "ENG", "24"),
    ("Enzo Fernández", "ARG", "8"),
    ("Cole Palmer", "ENG", "20"),
    ("Moisés Caicedo", "ECU", "25"),
    ("Mykhailo Mudryk", "UKR", "10"),
    // Bayern Munich
    ("Manuel Neuer", "GER", "1"),
    ("Dayot Upamecano", "FRA", "2"),
    ("Kim Min-jae", "KOR", "3"),
    ("Jonathan Tah", "GER", "4"),
    ("Joshua Kimmich", "GER", "6"),
    ("Serge Gnabry", "GER", "7"),
    ("Leon Goretzka", "GER", "8"),
    ("Harry Kane", "ENG", "9"),
    ("Jamal Musiala", "GER", "10"),
    ("Nicolas Jackson", "SEN", "11"),
    ("Luis Díaz", "COL", "14"),
    ("Michael Olise", "FRA", "17"),
    ("Alphonso Davies", "CAN", "19"),
    // Other clubs
    ("Marcus Bettinelli", "ENG", "13"),
    ("Rayan Aït-Nouri", "ALG", "21"),
    ("Abdukodir Khusanov", "UZB", "45"),
    ("Rico Lewis", "ENG", "82"),
    ("Tijjani Reijnders", "NED", "4"),
    ("Mateo Kovačić", "CRO", "8"),
    ("Rayan Cherki", "FRA", "10"),
    ("Jérémy Doku", "BEL", "11"),
    ("Nico González", "ESP", "14"),
    ("Savinho", "BRA", "26"),
    ("Matheus Nunes", "POR", "27"),
    ("Kalvin Phillips", "ENG", "44"),
    ("Oscar Bobb", "NOR", "52"),
    ("Omar Marmoush", "EGY", "7"),
    ("Filip Jörgensen", "DEN", "12"),
    ("Gabriel Slonina", "USA", "44"),
    ("Tosin Adarabioyo", "ENG", "4"),
    ("Benoît Badiashile", "FRA", "5"),
    ("Levi Colwill", "ENG", "6"),
    ("Jorrel Hato", "NED", "21"),
    ("Trevoh Chalobah", "ENG", "23"),
    ("Malo Gusto", "FRA", "27"),
    ("Wesley Fofana", "FRA", "29"),
    ("Josh Acheampong", "ENG", "34"),
    ("Dário Essugo", "POR", "14"),
    ("Andrey Santos", "BRA", "17"),
    ("Facundo Buonanotte", "ARG", "40"),
    ("Roméo Lavia", "BEL", "45"),
    ("Reggie Walsh", "ENG", "46"),
    ("Pedro Neto", "POR", "7"),
    ("Liam Delap", "ENG", "9"),
    ("Jamie Gittens", "ENG", "11"),
    ("João Pedro", "BRA", "20"),
    ("Tyrique George", "ENG", "32"),
    ("Marc Guiu", "ESP", "38"),
    ("Estêvão", "BRA", "41"),
    ("Alejandro Garnacho", "ARG", "49"),
    ("Shim Mheuka", "FRA", "62"),
    ("Joe Gomez", "ENG", "2"),
    ("Milos Kerkez", "HUN", "6"),
    ("Hugo Ekitike", "FRA", "22"),
    ("Giorgi Mamardashvili", "GEO", "25"),
    ("Freddie Woodman", "ENG", "28"),
    ("Jeremie Frimpong", "NED", "30"),
    ("Ryan Gravenberch", "NED", "38"),
    ("Curtis Jones", "ENG", "17"),
    ("Giovanni Leoni", "ITA", "15"),
    ("Calvin Ramsay", "SCO", "47"),
    ("Kaide Gordon", "ENG", "49"),
    ("Trent Koné-Doherty", "IRL", "51"),
    ("Amara Nallo", "ENG", "65"),
    ("Kieran Morrison", "NIR", "68"),
    ("Rio Ngumoha", "ENG", "73"),
    ("Jayden Danns", "ENG", "76"),
    ("Wellity Lucky", "ENG", "92"),
    ("Harvey Elliott", "ENG", "19"),
    ("Antonín Kinský", "CZE", "31"),
    ("Brandon Austin", "ENG", "40"),
    ("Djed Spence", "ENG", "24"),
    ("Kōta Takai", "JPN", "25"),
    ("Dane Scarlett", "ENG", "44"),
    ("Luka Vušković", "CRO", "16"),
    ("Yang Min-hyeok", "KOR", "18"),
    ("Manor Solomon", "ISR", "27"),
    ("Ashley Phillips", "ENG", "35"),
    ("Alejo Véliz", "ARG", "36"),
    ("Alfie Devine", "ENG", "45"),
    ("Juan Musso", "ARG", "1"),
    ("José María Giménez", "URU", "2"),
    ("Matteo Ruggeri", "ITA", "3"),
    ("Conor Gallagher", "ENG", "4"),
    ("Johnny Cardoso", "USA", "5"),
    ("Koke", "ESP", "6"),
    ("Antoine Griezmann", "FRA", "7"),
    ("Pablo Barrios", "ESP", "8"),
    ("Alexander Sørloth", "NOR", "9"),
    ("Álex Baena", "ESP", "10"),
    ("Thiago Almada", "ARG", "11"),
    ("Carlos Martín", "ESP", "12"),
    ("Eduardo Camavinga", "FRA", "12"),
    // Late additions
    ("Nico O'Reilly", "ENG", ""),
    ("Wojciech Szczęsny", "POL", "31"),
    ("Eric García", "ESP", "24"),
    ("Fermín López", "ESP", "16"),
    ("Marc Casadó", "ESP", "32"),
    ("Dani Olmo", "ESP", "19"),
    ("Marc Bernal", "ESP", "22"),
    ("Gerard Martín", "ESP", "18"),
];

static KNOWN_PLAYERS: LazyLock<BTreeMap<&'static str, PlayerFacts>> = LazyLock::new(|| {
    KNOWN_PLAYER_ROWS
        .iter()
        .map(|&(name, country, shirt_number)| {
            (
                name,
                PlayerFacts {
                    country,
                    shirt_number,
                },
            )
        })
        .collect()
});

/// Looks up `name` in the known-player table.
#[must_use]
pub fn known_player(name: &str) -> Option<PlayerFacts> {
    KNOWN_PLAYERS.get(name.trim()).copied()
}

/// Reads a player's nationality from their own article.
///
/// Failures are logged and yield `None`.
pub fn lookup_player_country<S: DocumentSource + ?Sized>(
    source: &S,
    settings: &ScrapeSettings,
    name: &str,
) -> Option<String> {
    match settings
        .player_url(name)
        .and_then(|url| source.fetch(&url))
    {
        Ok(document) => infobox_country(&document),
        Err(e) => {
            log::debug!("[{name}] Player lookup failed: {e}");
            None
        }
    }
}

/// Counts reported by [`finalize`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FinalizeStats {
    /// Empty fields that were filled in.
    pub filled: usize,
    /// Rows dropped as non-players.
    pub filtered: usize,
}

fn fill(field: &mut String, value: &str) -> bool {
    if field.trim().is_empty() && !value.is_empty() {
        value.clone_into(field);
        true
    } else {
        false
    }
}

/// Fills empty fields of `record`, returning how many were filled.
///
/// Known players are filled from the table. Anyone else still missing a
/// country gets a player-page lookup when enabled.
pub fn enrich_record<S: DocumentSource + ?Sized>(
    source: &S,
    settings: &ScrapeSettings,
    record: &mut PlayerRecord,
) -> usize {
    let country_missing = record.country.trim().is_empty();
    let number_missing = record.shirt_number.trim().is_empty();
    if !country_missing && !number_missing {
        return 0;
    }

    if let Some(facts) = known_player(&record.name) {
        return usize::from(fill(&mut record.country, facts.country))
            + usize::from(fill(&mut record.shirt_number, facts.shirt_number));
    }

    if settings.player_lookup
        && country_missing
        && let Some(country) = lookup_player_country(source, settings, &record.name)
    {
        return usize::from(fill(&mut record.country, &country));
    }

    0
}

/// Drops non-player rows, then fills missing fields of the rest.
pub fn finalize<S: DocumentSource + ?Sized>(
    source: &S,
    settings: &ScrapeSettings,
    records: Vec<PlayerRecord>,
) -> (Vec<PlayerRecord>, FinalizeStats) {
    let total = records.len();
    let mut kept: Vec<PlayerRecord> = records.into_iter().filter(is_valid).collect();

    let stats = FinalizeStats {
        filtered: total - kept.len(),
        filled: kept
            .iter_mut()
            .map(|record| enrich_record(source, settings, record))
            .sum(),
    };

    log::info!("Filled {} missing fields", stats.filled);
    log::info!("Filtered out {} invalid rows", stats.filtered);

    (kept, stats)
}
