//! Injected document-query capability.
//!
//! Several backend endpoints answer with HTML fragments instead of JSON.
//! The extractors only ever see this trait, so they can be exercised with
//! synthetic markup; [`ScraperQuery`] is the production implementation.

use std::collections::HashMap;

use scraper::{Html, Selector};

/// A matched element, materialized: text content, inner markup and the
/// attribute map. Child traversal is done by re-querying `inner_html`.
#[derive(Debug, Clone, Default)]
pub struct DomNode {
    pub text: String,
    pub inner_html: String,
    pub attrs: HashMap<String, String>,
}

impl DomNode {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

pub trait DocumentQuery: Send + Sync {
    /// All elements of `html` matching the CSS-style `selector`, in document
    /// order. An unparseable selector yields no matches.
    fn select(&self, html: &str, selector: &str) -> Vec<DomNode>;
}

/// `scraper`-backed implementation.
#[derive(Debug, Clone, Default)]
pub struct ScraperQuery;

impl DocumentQuery for ScraperQuery {
    fn select(&self, html: &str, selector: &str) -> Vec<DomNode> {
        let Ok(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        let fragment = Html::parse_fragment(html);
        fragment
            .select(&selector)
            .map(|el| DomNode {
                text: el.text().collect::<Vec<_>>().join(""),
                inner_html: el.inner_html(),
                attrs: el
                    .value()
                    .attrs()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            })
            .collect()
    }
}
