//! Player article infobox parser.
//!
//! Used to fill a missing nationality from the player's own article.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::country::country_code;
use crate::text::{LINK, element_text};

static INFOBOX: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table.infobox").expect("valid selector"));

static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect("valid selector"));

static HEADER: LazyLock<Selector> = LazyLock::new(|| Selector::parse("th").expect("valid selector"));

static DATA: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").expect("valid selector"));

/// Reads the country code from the first infobox row whose header mentions
/// nationality or country and whose value cell holds a link.
///
/// Returns `None` if the page has no infobox or no such row.
#[must_use]
pub fn infobox_country(document: &Html) -> Option<String> {
    let infobox = document.select(&INFOBOX).next()?;

    let country = infobox
        .select(&ROW)
        .filter(|tr| {
            tr.select(&HEADER).next().is_some_and(|th| {
                let header = element_text(th, " ").to_lowercase();
                header.contains("nationality") || header.contains("country")
            })
        })
        .find_map(|tr| {
            let link = tr.select(&DATA).next()?.select(&LINK).next()?;
            Some(element_text(link, " "))
        })?;

    let code = country_code(&country);
    (!code.is_empty()).then_some(code)
}
