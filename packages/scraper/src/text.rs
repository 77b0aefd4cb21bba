//! Text helpers shared by the table heuristics.
//!
//! Wiki markup splits visible text across many nodes (links, footnote
//! markers, sort keys), so every text read goes through [`element_text`],
//! which trims each node and joins the non-empty ones.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

/// Class carried by the inline element that renders a country flag.
pub const FLAG_MARKER_CLASS: &str = "flagicon";

/// Selector for flag markers anywhere below an element.
pub static FLAG_MARKER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.flagicon").expect("valid selector"));

/// Selector for hyperlinks anywhere below an element.
pub static LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("valid selector"));

/// Selector for images anywhere below an element.
pub static IMAGE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img").expect("valid selector"));

/// Returns the text below `element`, each text node trimmed, empty nodes
/// dropped, and the rest joined with `separator`.
#[must_use]
pub fn element_text(element: ElementRef<'_>, separator: &str) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Lowercases `text` and collapses every whitespace run to one space.
#[must_use]
pub fn normalize_ws_lower(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Returns `true` if `element` carries `class`.
#[must_use]
pub fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}

/// Returns `true` if `element` is a flag marker.
#[must_use]
pub fn is_flag_marker(element: ElementRef<'_>) -> bool {
    has_class(element, FLAG_MARKER_CLASS)
}

/// Returns `true` if `element` sits inside a flag marker.
#[must_use]
pub fn inside_flag_marker(element: ElementRef<'_>) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(is_flag_marker)
}

/// Reads the country named by the first flag marker below `element`.
///
/// Prefers the flag image's `alt` text, then the text of a link inside the
/// marker. Returns an empty string when there is no usable marker.
#[must_use]
pub fn flag_country(element: ElementRef<'_>) -> String {
    let Some(flag) = element.select(&FLAG_MARKER).next() else {
        return String::new();
    };

    if let Some(alt) = flag
        .select(&IMAGE)
        .filter_map(|img| img.value().attr("alt"))
        .map(str::trim)
        .find(|alt| !alt.is_empty())
    {
        return alt.to_owned();
    }

    flag.select(&LINK)
        .map(|a| element_text(a, " "))
        .find(|t| !t.is_empty())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;

    fn row(cells: &str) -> Html {
        Html::parse_fragment(&format!("<table><tr>{cells}</tr></table>"))
    }

    fn first<'a>(doc: &'a Html, css: &str) -> ElementRef<'a> {
        let sel = Selector::parse(css).unwrap();
        doc.select(&sel).next().unwrap()
    }

    #[test]
    fn element_text_trims_and_joins_nodes() {
        let doc = row("<td> Squad<br/>  no. <sup></sup></td>");
        assert_eq!(element_text(first(&doc, "td"), " "), "Squad no.");
    }

    #[test]
    fn normalizes_whitespace_and_case() {
        assert_eq!(
            normalize_ws_lower("  First-team\u{a0}\n Squad "),
            "first-team squad"
        );
    }

    #[test]
    fn flag_country_prefers_image_alt() {
        let doc = row(
            r#"<td><span class="flagicon"><img alt="Brazil"/><a href="/wiki/France">France</a></span></td>"#,
        );
        assert_eq!(flag_country(first(&doc, "td")), "Brazil");
    }

    #[test]
    fn flag_country_falls_back_to_link_text() {
        let doc = row(
            r#"<td><span class="flagicon"><a href="/wiki/Spain">Spain</a></span></td>"#,
        );
        assert_eq!(flag_country(first(&doc, "td")), "Spain");
    }

    #[test]
    fn flag_country_is_empty_without_marker() {
        let doc = row("<td><a>J. Doe</a></td>");
        assert_eq!(flag_country(first(&doc, "td")), "");
    }

    #[test]
    fn detects_links_inside_flag_markers() {
        let doc = row(
            r#"<td><span class="flagicon"><a id="flag">x</a></span><a id="name">J. Doe</a></td>"#,
        );
        assert!(inside_flag_marker(first(&doc, "#flag")));
        assert!(!inside_flag_marker(first(&doc, "#name")));
    }
}
