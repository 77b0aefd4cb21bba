//! Candidate tables.
//!
//! A [`CandidateTable`] wraps one roster-styled `<table>` element together
//! with its lowercased header texts, computed once so the classifier and
//! column inference do not re-walk the tree.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::text::{FLAG_MARKER, element_text, has_class};

/// Class that marks the site's structured-data tables.
pub const ROSTER_TABLE_CLASS: &str = "wikitable";

/// Selector for roster-styled tables.
pub static ROSTER_TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table.wikitable").expect("valid selector"));

static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect("valid selector"));

static HEADER_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("th").expect("valid selector"));

static CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td, th").expect("valid selector"));

/// Returns `true` if `element` is a roster-styled `<table>`.
#[must_use]
pub fn is_roster_styled(element: ElementRef<'_>) -> bool {
    element.value().name() == "table" && has_class(element, ROSTER_TABLE_CLASS)
}

/// A table considered as a possible squad listing.
#[derive(Debug, Clone)]
pub struct CandidateTable<'a> {
    element: ElementRef<'a>,
    /// Every `<th>` in the table, lowercased and trimmed.
    headers: Vec<String>,
    /// The `<th>` cells of the first row only.
    header_row: Vec<String>,
    has_flag_marker: bool,
}

impl<'a> CandidateTable<'a> {
    /// Reads the header texts and flag markers of `element`.
    #[must_use]
    pub fn new(element: ElementRef<'a>) -> Self {
        let headers = element
            .select(&HEADER_CELL)
            .map(|th| element_text(th, " ").to_lowercase())
            .collect();

        let header_row = element
            .select(&ROW)
            .next()
            .map(|tr| {
                tr.select(&HEADER_CELL)
                    .map(|th| element_text(th, " ").to_lowercase())
                    .collect()
            })
            .unwrap_or_default();

        let has_flag_marker = element.select(&FLAG_MARKER).next().is_some();

        Self {
            element,
            headers,
            header_row,
            has_flag_marker,
        }
    }

    /// The underlying `<table>` element.
    #[must_use]
    pub const fn element(&self) -> ElementRef<'a> {
        self.element
    }

    /// Every header cell text in the table.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Header cell texts of the first row, in column order.
    #[must_use]
    pub fn header_row(&self) -> &[String] {
        &self.header_row
    }

    /// Whether any flag marker appears anywhere in the table.
    #[must_use]
    pub const fn has_flag_marker(&self) -> bool {
        self.has_flag_marker
    }

    /// Every row after the first, each as its `<td>`/`<th>` cells.
    #[must_use]
    pub fn data_rows(&self) -> Vec<Vec<ElementRef<'a>>> {
        self.element
            .select(&ROW)
            .skip(1)
            .map(|tr| tr.select(&CELL).collect())
            .collect()
    }
}

/// Every roster-styled table in `document`, in document order.
#[must_use]
pub fn roster_tables(document: &Html) -> Vec<CandidateTable<'_>> {
    document
        .select(&ROSTER_TABLE)
        .map(CandidateTable::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <table class="infobox"><tr><th>Ground</th></tr></table>
        <table class="wikitable sortable">
          <tr><th>No.</th><th>Pos.</th><th>Nation</th><th>Player</th></tr>
          <tr><td>1</td><td>GK</td><td><span class="flagicon"></span></td><td><a>A</a></td></tr>
          <tr><th>2</th><td>DF</td><td></td><td>B</td></tr>
        </table>
        <table class="wikitable"><tr><td>x</td></tr></table>
    "#;

    #[test]
    fn finds_only_roster_styled_tables() {
        let doc = Html::parse_document(PAGE);
        let tables = roster_tables(&doc);
        assert_eq!(tables.len(), 2);
        assert!(tables.iter().all(|t| is_roster_styled(t.element())));
    }

    #[test]
    fn reads_lowercased_headers() {
        let doc = Html::parse_document(PAGE);
        let tables = roster_tables(&doc);
        assert_eq!(tables[0].header_row(), ["no.", "pos.", "nation", "player"]);
        // A `<th>` in a data row counts as a header cell but not as part of
        // the header row.
        assert_eq!(tables[0].headers().len(), 5);
        assert!(tables[0].has_flag_marker());
    }

    #[test]
    fn data_rows_skip_the_header_row() {
        let doc = Html::parse_document(PAGE);
        let tables = roster_tables(&doc);
        let rows = tables[0].data_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].len(), 4);
        assert_eq!(element_text(rows[1][0], ""), "2");
    }

    #[test]
    fn table_without_header_cells_has_empty_headers() {
        let doc = Html::parse_document(PAGE);
        let tables = roster_tables(&doc);
        assert!(tables[1].headers().is_empty());
        assert!(tables[1].header_row().is_empty());
        assert!(!tables[1].has_flag_marker());
    }
}
