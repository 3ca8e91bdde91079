//! Extractors for the endpoints that answer with HTML fragments.
//!
//! All querying goes through the injected [`DocumentQuery`] capability so
//! these stay testable with synthetic markup.

use regex::Regex;

use crate::config::GiftListConfig;
use crate::document::{DocumentQuery, DomNode};
use crate::model::{ListStats, ListSummary, SearchHit};
use crate::urls;

/// Desired quantity embedded in a `WishedAmount` fragment: the `value`
/// attribute of the quantity input, after stripping line breaks.
pub fn wished_quantity(fragment: &str, documents: &dyn DocumentQuery) -> u32 {
    let cleaned: String = fragment.replace(['\r', '\n'], "");
    documents
        .select(&cleaned, ".giftlistsku-input-wishedamt")
        .first()
        .and_then(|input| input.attr("value"))
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0)
}

/// The user's lists out of the get-lists fragment: one anchor per list under
/// `.glis-ul`, id in `rel`, display name as text.
pub fn user_lists(
    html: &str,
    documents: &dyn DocumentQuery,
    config: &GiftListConfig,
) -> Vec<ListSummary> {
    documents
        .select(html, ".glis-ul a")
        .into_iter()
        .map(|anchor| {
            let id = anchor.attr("rel").unwrap_or_default().to_string();
            let url = urls::list_url(config, &id);
            ListSummary {
                id,
                name: anchor.text.trim().to_string(),
                url,
            }
        })
        .collect()
}

/// Item totals out of the statistics fragment.
pub fn list_stats(html: &str, documents: &dyn DocumentQuery) -> ListStats {
    let cell_text = |selector: &str| {
        documents
            .select(html, selector)
            .first()
            .map(|cell| cell.text.trim().to_string())
            .unwrap_or_default()
    };
    ListStats {
        total: cell_text("td.glstat-table-itens"),
        purchased: cell_text("td.glstat-table-purchased"),
    }
}

fn cell_html(documents: &dyn DocumentQuery, row_html: &str, selector: &str) -> String {
    // Bare <td> elements are dropped by HTML5 fragment parsing, so the row's
    // cells are re-wrapped in a table before querying.
    let wrapped = format!("<table><tr>{row_html}</tr></table>");
    documents
        .select(&wrapped, selector)
        .first()
        .map(|cell| cell.inner_html.trim().to_string())
        .unwrap_or_default()
}

/// Navigation target hidden in the row's inline `onclick` handler, shaped
/// `document.location="…"`.
fn onclick_url(row: &DomNode) -> String {
    row.attr("onclick")
        .unwrap_or_default()
        .replace("document.location=\"", "")
        .replace('"', "")
}

/// Image id out of an image cell: the sixth path segment of the `src`
/// attribute, up to the first underscore.
fn image_id(image_html: &str) -> String {
    let src_attr = match Regex::new(r#"(?i)(src)="([^"]*)""#)
        .ok()
        .and_then(|re| re.captures(image_html).map(|c| c[2].to_string()))
    {
        Some(src) => src,
        None => return String::new(),
    };
    src_attr
        .split('/')
        .nth(5)
        .and_then(|segment| segment.split('_').next())
        .unwrap_or_default()
        .to_string()
}

/// Search rows, in document order. Rows without an image yield empty-string
/// image fields, never an error.
pub fn search_hits(html: &str, documents: &dyn DocumentQuery) -> Vec<SearchHit> {
    documents
        .select(html, ".giftlist-body tr")
        .into_iter()
        .map(|row| {
            let image = cell_html(documents, &row.inner_html, ".giftlist-body-image");
            let (image_id, full_image) = if image.is_empty() {
                (String::new(), String::new())
            } else {
                let id = image_id(&image);
                let full = if id.is_empty() {
                    String::new()
                } else {
                    format!("/arquivos/ids/{id}/")
                };
                (id, full)
            };

            SearchHit {
                id: cell_html(documents, &row.inner_html, ".giftlist-body-codigo"),
                name: cell_html(documents, &row.inner_html, ".giftlist-body-name"),
                image_id,
                image,
                full_image,
                location: cell_html(documents, &row.inner_html, ".giftlist-body-eventlocation"),
                city: cell_html(documents, &row.inner_html, ".giftlist-body-eventcity"),
                date: cell_html(documents, &row.inner_html, ".giftlist-body-eventdate"),
                member: cell_html(documents, &row.inner_html, ".giftlist-body-member"),
                url: onclick_url(&row),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ScraperQuery;

    #[test]
    fn wished_quantity_survives_line_breaks() {
        let fragment = "<input\r\n class=\"giftlistsku-input-wishedamt\" value=\"12\">\n";
        assert_eq!(wished_quantity(fragment, &ScraperQuery), 12);
        assert_eq!(wished_quantity("<p>no input here</p>", &ScraperQuery), 0);
    }

    #[test]
    fn user_lists_reads_anchor_rel_and_text() {
        let html = r#"
            <div class="glis-ul">
                <a rel="1085">Lista Fin de Semana</a>
                <a rel="1086">Cumple</a>
            </div>"#;
        let lists = user_lists(html, &ScraperQuery, &GiftListConfig::default());
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].id, "1085");
        assert_eq!(lists[0].name, "Lista Fin de Semana");
        assert_eq!(lists[0].url, "/giftlist/product?id=1085");
    }

    #[test]
    fn list_stats_reads_both_cells() {
        let html = r#"
            <table><tr>
                <td class="glstat-table-itens">24</td>
                <td class="glstat-table-purchased">7</td>
            </tr></table>"#;
        let stats = list_stats(html, &ScraperQuery);
        assert_eq!(stats.total, "24");
        assert_eq!(stats.purchased, "7");
    }

    fn search_row(image_cell: &str) -> String {
        format!(
            r#"
            <table class="giftlist-body">
              <tr onclick="document.location=&quot;/giftlist/product?id=900&quot;">
                <td class="giftlist-body-codigo">900</td>
                <td class="giftlist-body-name">Boda A&amp;B</td>
                <td class="giftlist-body-image">{image_cell}</td>
                <td class="giftlist-body-eventlocation">Salon Real</td>
                <td class="giftlist-body-eventcity">Rosario</td>
                <td class="giftlist-body-eventdate">12/10/2025</td>
                <td class="giftlist-body-member">Ana</td>
              </tr>
            </table>"#
        )
    }

    #[test]
    fn search_rows_extract_cells_and_navigation_url() {
        let html = search_row(
            r#"<img src="http://store.example.com.br/arquivos/ids/155123_55/thumb.jpg">"#,
        );
        let hits = search_hits(&html, &ScraperQuery);
        assert_eq!(hits.len(), 1);
        let hit = &hits[0];
        assert_eq!(hit.id, "900");
        assert_eq!(hit.url, "/giftlist/product?id=900");
        assert_eq!(hit.image_id, "155123");
        assert_eq!(hit.full_image, "/arquivos/ids/155123/");
        assert_eq!(hit.city, "Rosario");
        assert_eq!(hit.member, "Ana");
    }

    #[test]
    fn empty_image_cell_yields_empty_strings() {
        let hits = search_hits(&search_row(""), &ScraperQuery);
        assert_eq!(hits[0].image, "");
        assert_eq!(hits[0].image_id, "");
        assert_eq!(hits[0].full_image, "");
    }
}
