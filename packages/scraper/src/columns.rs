//! Column inference.
//!
//! Maps the header row of a squad table onto [`ColumnRole`]s. Each header is
//! tested against the roles in a fixed order and the first header to match a
//! role claims it.
//!
//! Some clubs leave the shirt number column unlabelled. When no header names
//! a number column, the first column of the leading data rows is sampled and,
//! if it only holds digits or blanks, it becomes the number column and every
//! other assigned index moves right by one.

use squad_roster_models::{ColumnMap, ColumnRole};

use crate::table::CandidateTable;
use crate::text::element_text;

/// How many leading data rows are sampled for the unlabelled number column.
pub const SHIFT_SAMPLE_ROWS: usize = 5;

fn has_token(header: &str, token: &str) -> bool {
    header
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| word == token)
}

/// The role a lowercased header names, if any.
///
/// The number check runs last so headers like "nation" never read as "no".
#[must_use]
pub fn header_role(header: &str) -> Option<ColumnRole> {
    let h = header.trim();
    if h.contains("player") || h == "name" {
        Some(ColumnRole::Name)
    } else if h.contains("pos") {
        Some(ColumnRole::Position)
    } else if h.contains("nation") || h.contains("nat") || h.contains("country") {
        Some(ColumnRole::Nationality)
    } else if h == "n" || h.contains("number") || has_token(h, "no") {
        Some(ColumnRole::ShirtNumber)
    } else {
        None
    }
}

fn looks_like_number_column<S: AsRef<str>>(samples: &[S]) -> bool {
    !samples.is_empty()
        && samples.iter().all(|s| {
            let s = s.as_ref().trim();
            s.chars().all(|c| c.is_ascii_digit())
        })
}

/// Infers the column map from lowercased `header_row` texts and the trimmed
/// text of the first cell of the leading data rows.
#[must_use]
pub fn infer_from<S: AsRef<str>, T: AsRef<str>>(
    header_row: &[S],
    first_column: &[T],
) -> ColumnMap {
    let mut map = ColumnMap::default();

    for (index, header) in header_row.iter().enumerate() {
        if let Some(role) = header_role(header.as_ref()) {
            map.claim(role, index);
        }
    }

    if map.shirt_number.is_none()
        && !header_row.is_empty()
        && looks_like_number_column(first_column)
    {
        log::debug!("Treating unlabelled first column as shirt numbers");
        let shift = |index: Option<usize>| index.map(|i| i + 1);
        map = ColumnMap {
            name: shift(map.name),
            position: shift(map.position),
            nationality: shift(map.nationality),
            shirt_number: Some(0),
        };
    }

    map
}

/// Infers the column map of `table`.
#[must_use]
pub fn infer_columns(table: &CandidateTable<'_>) -> ColumnMap {
    let first_column: Vec<String> = table
        .data_rows()
        .iter()
        .filter_map(|cells| cells.first())
        .take(SHIFT_SAMPLE_ROWS)
        .map(|cell| element_text(*cell, ""))
        .collect();

    infer_from(table.header_row(), &first_column)
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;
    use crate::table::roster_tables;

    const NO_SAMPLES: &[&str] = &[];

    #[test]
    fn assigns_roles_in_header_order() {
        let map = infer_from(&["no.", "pos.", "nation", "player"], NO_SAMPLES);
        assert_eq!(
            map,
            ColumnMap {
                name: Some(3),
                position: Some(1),
                nationality: Some(2),
                shirt_number: Some(0),
            }
        );
    }

    #[test]
    fn first_matching_header_wins() {
        let map = infer_from(&["player", "pos.", "player (loan)"], NO_SAMPLES);
        assert_eq!(map.name, Some(0));
    }

    #[test]
    fn nation_header_is_not_a_number_header() {
        assert_eq!(header_role("nation"), Some(ColumnRole::Nationality));
        assert_eq!(header_role("no."), Some(ColumnRole::ShirtNumber));
        assert_eq!(header_role("squad number"), Some(ColumnRole::ShirtNumber));
        assert_eq!(header_role("n"), Some(ColumnRole::ShirtNumber));
        assert_eq!(header_role("notes"), None);
        assert_eq!(header_role("apps"), None);
    }

    #[test]
    fn unlabelled_numeric_first_column_shifts_indices() {
        let map = infer_from(
            &["", "player", "pos.", "nation"],
            &["7", "10", "", "4", "23"],
        );
        assert_eq!(map.shirt_number, Some(0));
        assert_eq!(map.name, Some(2));
        assert_eq!(map.position, Some(3));
        assert_eq!(map.nationality, Some(4));
    }

    #[test]
    fn non_numeric_first_column_is_left_alone() {
        let map = infer_from(&["player", "pos.", "nation"], &["J. Doe", "A. Smith"]);
        assert_eq!(map.shirt_number, None);
        assert_eq!(map.name, Some(0));
    }

    #[test]
    fn no_headers_means_no_shift() {
        let map = infer_from(NO_SAMPLES, &["1", "2"]);
        assert!(map.is_empty());
    }

    #[test]
    fn infers_from_parsed_table_and_samples_only_leading_rows() {
        let doc = Html::parse_document(
            r#"<table class="wikitable">
                 <tr><th></th><th>Player</th><th>Pos.</th></tr>
                 <tr><td>1</td><td>A</td><td>GK</td></tr>
                 <tr><td>2</td><td>B</td><td>DF</td></tr>
                 <tr><td>3</td><td>C</td><td>DF</td></tr>
                 <tr><td>4</td><td>D</td><td>MF</td></tr>
                 <tr><td>5</td><td>E</td><td>MF</td></tr>
                 <tr><td>Youth</td><td>F</td><td>FW</td></tr>
               </table>"#,
        );
        let tables = roster_tables(&doc);
        let map = infer_columns(&tables[0]);
        assert_eq!(map.shirt_number, Some(0));
        assert_eq!(map.name, Some(2));
        assert_eq!(map.position, Some(3));
    }
}
