//! Table classifier.
//!
//! Decides from header keywords alone whether a table looks like a squad
//! listing. A flag marker somewhere in the table stands in for a missing
//! nationality header when the looser check is requested.

use crate::table::CandidateTable;

/// Header fragments that indicate a nationality column.
const COUNTRY_TERMS: &[&str] = &["nation", "nat", "nat.", "country", "nationality"];

fn any_header<S: AsRef<str>>(headers: &[S], pred: impl Fn(&str) -> bool) -> bool {
    headers.iter().any(|h| pred(h.as_ref()))
}

/// Keyword signals read from a table's header cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct TableSignals {
    /// A header contains "player" or is exactly "name".
    pub has_player: bool,
    /// A header contains "pos" (or "position").
    pub has_position: bool,
    /// A header contains a nationality term.
    pub has_country: bool,
    /// A header starts with "no", is exactly "n", or contains "squad number".
    pub has_number: bool,
    /// The table contains a flag marker.
    pub has_flagicon: bool,
}

impl TableSignals {
    /// Computes the signals for lowercased, trimmed `headers`.
    ///
    /// A table without header cells gets no signals at all, so it can never
    /// classify as a squad table.
    #[must_use]
    pub fn from_headers<S: AsRef<str>>(headers: &[S], has_flagicon: bool) -> Self {
        if headers.is_empty() {
            return Self::default();
        }

        Self {
            has_player: any_header(headers, |h| h.contains("player") || h == "name"),
            has_position: any_header(headers, |h| h.contains("pos") || h.contains("position")),
            has_country: any_header(headers, |h| {
                COUNTRY_TERMS.iter().any(|term| h.contains(term))
            }),
            has_number: any_header(headers, |h| {
                h.starts_with("no") || h == "n" || h.contains("squad number")
            }),
            has_flagicon,
        }
    }

    /// Computes the signals for `table`.
    #[must_use]
    pub fn of(table: &CandidateTable<'_>) -> Self {
        Self::from_headers(table.headers(), table.has_flag_marker())
    }

    /// Strict: player, position, and an explicit nationality header.
    /// Loose: player, position, and either a nationality header or a flag
    /// marker together with a number column.
    #[must_use]
    pub const fn is_player_table(&self, require_country: bool) -> bool {
        if !(self.has_player && self.has_position) {
            return false;
        }
        if require_country {
            return self.has_country;
        }
        self.has_country || (self.has_flagicon && self.has_number)
    }
}

/// Returns `true` if `table` looks like a squad listing.
#[must_use]
pub fn is_player_table(table: &CandidateTable<'_>, require_country: bool) -> bool {
    TableSignals::of(table).is_player_table(require_country)
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;
    use crate::table::roster_tables;

    fn signals(headers: &[&str], flag: bool) -> TableSignals {
        TableSignals::from_headers(headers, flag)
    }

    #[test]
    fn strict_requires_nationality_header() {
        let s = signals(&["no.", "pos.", "nation", "player"], false);
        assert!(s.is_player_table(true));

        let s = signals(&["no.", "pos.", "player"], true);
        assert!(!s.is_player_table(true));
    }

    #[test]
    fn loose_accepts_flag_and_number_proxy() {
        let s = signals(&["no.", "pos.", "player"], true);
        assert!(s.is_player_table(false));

        // Flag marker without a number column is not enough.
        let s = signals(&["pos.", "player"], true);
        assert!(!s.is_player_table(false));

        // Number column without a flag marker is not enough either.
        let s = signals(&["no.", "pos.", "player"], false);
        assert!(!s.is_player_table(false));
    }

    #[test]
    fn name_must_match_exactly() {
        assert!(signals(&["name", "position", "nationality"], false).is_player_table(true));
        assert!(!signals(&["full name", "position", "nationality"], false).is_player_table(true));
    }

    #[test]
    fn single_letter_n_and_squad_number_count_as_number() {
        assert!(signals(&["n"], false).has_number);
        assert!(signals(&["squad number"], false).has_number);
        assert!(!signals(&["apps"], false).has_number);
    }

    #[test]
    fn no_headers_never_match() {
        let s = signals(&[], true);
        assert_eq!(s, TableSignals::default());
        assert!(!s.is_player_table(false));
        assert!(!s.is_player_table(true));
    }

    #[test]
    fn strict_implies_loose() {
        let header_sets: &[&[&str]] = &[
            &["no.", "pos.", "nation", "player"],
            &["player", "pos", "country"],
            &["no.", "player", "pos."],
            &["name", "position"],
            &["player", "apps", "goals"],
            &["nat.", "player", "pos", "squad number"],
            &[],
        ];
        for headers in header_sets {
            for flag in [false, true] {
                let s = signals(headers, flag);
                if s.is_player_table(true) {
                    assert!(s.is_player_table(false), "{headers:?} flag={flag}");
                }
            }
        }
    }

    #[test]
    fn classifies_parsed_tables() {
        let doc = Html::parse_document(
            r#"<table class="wikitable">
                 <tr><th>No.</th><th>Pos.</th><th>Player</th></tr>
                 <tr><td>1</td><td>GK</td><td><span class="flagicon"></span><a>A</a></td></tr>
               </table>"#,
        );
        let tables = roster_tables(&doc);
        assert!(is_player_table(&tables[0], false));
        assert!(!is_player_table(&tables[0], true));
    }
}
