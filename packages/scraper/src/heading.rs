//! Heading locator.
//!
//! Finds section headings whose text mentions one of the target phrases and
//! returns the first roster-styled table that follows each of them.
//!
//! Two heading layouts are handled:
//!
//! ```html
//! <!-- legacy -->
//! <h2><span class="mw-headline">First-team squad</span></h2>
//! <table class="wikitable">...</table>
//!
//! <!-- current -->
//! <div class="mw-heading mw-heading2"><h2>First-team squad</h2></div>
//! <div><table class="wikitable">...</table></div>
//! ```

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::table::{ROSTER_TABLE, is_roster_styled};
use crate::text::{element_text, has_class, normalize_ws_lower};

/// Class of the wrapper `<div>` newer page markup puts around headings.
const HEADING_WRAPPER_CLASS: &str = "mw-heading";

static HEADING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1, h2, h3, h4, h5, h6").expect("valid selector"));

/// Returns `true` if `text` contains any of `phrases`, ignoring case and
/// whitespace differences.
#[must_use]
pub fn matches_phrase<S: AsRef<str>>(text: &str, phrases: &[S]) -> bool {
    let text = normalize_ws_lower(text);
    phrases.iter().any(|phrase| {
        let phrase = normalize_ws_lower(phrase.as_ref());
        !phrase.is_empty() && text.contains(&phrase)
    })
}

/// Headings in `document` whose visible text matches one of `phrases`, in
/// document order.
#[must_use]
pub fn matching_headings<'a, S: AsRef<str>>(
    document: &'a Html,
    phrases: &[S],
) -> Vec<ElementRef<'a>> {
    document
        .select(&HEADING)
        .filter(|h| matches_phrase(&element_text(*h, " "), phrases))
        .collect()
}

/// The element whose following siblings make up the heading's section.
fn section_anchor(heading: ElementRef<'_>) -> ElementRef<'_> {
    heading
        .parent()
        .and_then(ElementRef::wrap)
        .filter(|parent| {
            parent.value().name() == "div" && has_class(*parent, HEADING_WRAPPER_CLASS)
        })
        .unwrap_or(heading)
}

/// Walks forward from `heading` and returns the first roster-styled table,
/// either a sibling itself or nested inside a sibling wrapper.
#[must_use]
pub fn table_after_heading(heading: ElementRef<'_>) -> Option<ElementRef<'_>> {
    section_anchor(heading)
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find_map(|sibling| {
            if is_roster_styled(sibling) {
                Some(sibling)
            } else {
                sibling.select(&ROSTER_TABLE).next()
            }
        })
}

/// The table following each heading that matches `phrases`, in heading
/// order. Headings with no table after them contribute nothing.
#[must_use]
pub fn heading_tables<'a, S: AsRef<str>>(document: &'a Html, phrases: &[S]) -> Vec<ElementRef<'a>> {
    let tables: Vec<ElementRef<'a>> = matching_headings(document, phrases)
        .into_iter()
        .filter_map(table_after_heading)
        .collect();

    log::debug!("Found {} heading-adjacent candidate tables", tables.len());

    tables
}
