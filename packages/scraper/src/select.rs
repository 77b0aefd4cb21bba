//! Table selector.
//!
//! Picks the single squad table of a page by evaluating a fixed priority
//! list of (tier, candidates, predicate) entries. The first candidate that
//! satisfies its tier's predicate wins:
//!
//! | Tier | Candidates | Predicate |
//! |---|---|---|
//! | [`SelectionTier::HeadingStrict`] | tables after matching headings | strict |
//! | [`SelectionTier::HeadingLoose`] | tables after matching headings | loose |
//! | [`SelectionTier::PageStrict`] | every roster-styled table | strict |
//! | [`SelectionTier::PageLoose`] | every roster-styled table | loose |
//! | [`SelectionTier::FirstRosterTable`] | every roster-styled table | none |
//!
//! A loose match near a heading therefore beats a strict match that only a
//! page-wide scan would find.

use scraper::Html;
use squad_roster_models::SelectionTier;

use crate::classify::is_player_table;
use crate::heading::heading_tables;
use crate::table::{CandidateTable, roster_tables};

/// The table chosen for a page and the tier that chose it.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    /// The chosen table.
    pub table: CandidateTable<'a>,
    /// Which fallback tier produced it.
    pub tier: SelectionTier,
}

type Predicate = fn(&CandidateTable<'_>) -> bool;

fn strict(table: &CandidateTable<'_>) -> bool {
    is_player_table(table, true)
}

fn loose(table: &CandidateTable<'_>) -> bool {
    is_player_table(table, false)
}

const fn unconditional(_table: &CandidateTable<'_>) -> bool {
    true
}

/// Selects the squad table of `document`.
///
/// Returns `None` only when the page has no roster-styled table at all.
#[must_use]
pub fn select_table<'a, S: AsRef<str>>(
    document: &'a Html,
    heading_phrases: &[S],
) -> Option<Selection<'a>> {
    let near_heading: Vec<CandidateTable<'a>> = heading_tables(document, heading_phrases)
        .into_iter()
        .map(CandidateTable::new)
        .collect();
    let on_page = roster_tables(document);

    let tiers: [(SelectionTier, &[CandidateTable<'a>], Predicate); 5] = [
        (SelectionTier::HeadingStrict, near_heading.as_slice(), strict),
        (SelectionTier::HeadingLoose, near_heading.as_slice(), loose),
        (SelectionTier::PageStrict, on_page.as_slice(), strict),
        (SelectionTier::PageLoose, on_page.as_slice(), loose),
        (SelectionTier::FirstRosterTable, on_page.as_slice(), unconditional),
    ];

    for (tier, candidates, accepts) in tiers {
        if let Some(table) = candidates.iter().find(|t| accepts(t)) {
            log::debug!("Selected squad table via {tier}");
            return Some(Selection {
                table: table.clone(),
                tier,
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASES: &[&str] = &["first-team squad", "first team squad"];

    const STRICT: &str = r#"<tr><th>No.</th><th>Pos.</th><th>Nation</th><th>Player</th></tr>
        <tr><td>1</td><td>GK</td><td><a>Spain</a></td><td><a>A</a></td></tr>"#;

    const LOOSE: &str = r#"<tr><th>No.</th><th>Pos.</th><th>Player</th></tr>
        <tr><td>1</td><td>GK</td><td><span class="flagicon"></span><a>A</a></td></tr>"#;

    const OTHER: &str = "<tr><th>Date</th><th>Opponent</th></tr><tr><td>1 Aug</td><td>X</td></tr>";

    fn select_id(html: &str) -> Option<(String, SelectionTier)> {
        let doc = Html::parse_document(html);
        select_table(&doc, PHRASES).map(|s| {
            (
                s.table.element().value().attr("id").unwrap_or_default().to_owned(),
                s.tier,
            )
        })
    }

    #[test]
    fn strict_heading_match_wins() {
        let html = format!(
            r#"<table class="wikitable" id="early">{STRICT}</table>
               <h2>First-team squad</h2>
               <table class="wikitable" id="squad">{STRICT}</table>"#
        );
        assert_eq!(
            select_id(&html),
            Some(("squad".to_owned(), SelectionTier::HeadingStrict))
        );
    }

    #[test]
    fn strict_match_at_later_heading_beats_earlier_loose_match() {
        let html = format!(
            r#"<h2>First-team squad</h2>
               <table class="wikitable" id="loose">{LOOSE}</table>
               <h3>First team squad (continued)</h3>
               <table class="wikitable" id="strict">{STRICT}</table>"#
        );
        assert_eq!(
            select_id(&html),
            Some(("strict".to_owned(), SelectionTier::HeadingStrict))
        );
    }

    #[test]
    fn heading_loose_match_outranks_page_strict_match() {
        let html = format!(
            r#"<h2>First-team squad</h2>
               <table class="wikitable" id="loose">{LOOSE}</table>
               <h2>Out on loan</h2>
               <table class="wikitable" id="strict">{STRICT}</table>"#
        );
        assert_eq!(
            select_id(&html),
            Some(("loose".to_owned(), SelectionTier::HeadingLoose))
        );
    }

    #[test]
    fn page_scan_prefers_strict_over_loose() {
        let html = format!(
            r#"<table class="wikitable" id="loose">{LOOSE}</table>
               <table class="wikitable" id="strict">{STRICT}</table>"#
        );
        assert_eq!(
            select_id(&html),
            Some(("strict".to_owned(), SelectionTier::PageStrict))
        );
    }

    #[test]
    fn page_scan_falls_back_to_loose() {
        let html = format!(
            r#"<table class="wikitable" id="other">{OTHER}</table>
               <table class="wikitable" id="loose">{LOOSE}</table>"#
        );
        assert_eq!(
            select_id(&html),
            Some(("loose".to_owned(), SelectionTier::PageLoose))
        );
    }

    #[test]
    fn last_resort_is_first_roster_table_and_low_confidence() {
        let html = format!(
            r#"<table class="infobox" id="info">{STRICT}</table>
               <table class="wikitable" id="first">{OTHER}</table>
               <table class="wikitable" id="second">{OTHER}</table>"#
        );
        let (id, tier) = select_id(&html).unwrap();
        assert_eq!(id, "first");
        assert!(tier.is_low_confidence());
    }

    #[test]
    fn no_roster_table_selects_nothing() {
        let html = format!(r#"<table class="infobox">{STRICT}</table>"#);
        assert_eq!(select_id(&html), None);
    }
}
