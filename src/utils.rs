//! Caller-facing utilities around list names, e-mail checks and the share
//! payload encoding.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;

use crate::model::{ItemsSummary, ListItem};

/// Fast list-creation requires at least one alphanumeric character in the
/// name, because the backend derives the list URL from it. Complex creation
/// has no such rule. This check is exposed for callers; the fast-create path
/// deliberately does not enforce it.
pub fn valid_name(name: &str) -> bool {
    name.chars().any(|c| c.is_ascii_alphanumeric())
}

/// Collapses a name to the URL form the backend derives: alphanumerics only,
/// lowercased.
pub fn url_string(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Loose e-mail shape check used to skip invalid share recipients.
pub fn is_email(value: &str) -> bool {
    // Same tolerance as the storefront helper: something@something.tld
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}

/// Aggregate over a list's items: total desired value of available items
/// plus availability counters.
pub fn items_summary(items: &[ListItem]) -> ItemsSummary {
    let mut summary = ItemsSummary::default();
    for item in items {
        summary.quantity += 1;
        if item.available {
            summary.total += item.value * f64::from(item.wished_quantity);
            summary.available += 1;
        } else {
            summary.unavailable += 1;
        }
    }
    summary
}

/// Characters percent-encoded by the share-mail payload: everything except
/// the unreserved and reserved sets the backend expects untouched.
const ENCODE_URI: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b';')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b',')
    .remove(b'#');

/// URI-encodes the share payload the way the backend's mail template
/// expects (slashes and separators left intact).
pub fn encode_uri(value: &str) -> String {
    utf8_percent_encode(value, ENCODE_URI).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_name_needs_an_alphanumeric() {
        assert!(valid_name("Lista 2025"));
        assert!(valid_name("x"));
        assert!(!valid_name(""));
        assert!(!valid_name("¡¡¡---!!!"));
    }

    #[test]
    fn url_string_keeps_alphanumerics_lowercased() {
        assert_eq!(url_string("Lista Fin de Semana!"), "listafindesemana");
    }

    #[test]
    fn email_shape_check() {
        assert!(is_email("tom.dom@fizzmod.com"));
        assert!(!is_email("not-an-email"));
        assert!(!is_email("a@b"));
        assert!(!is_email("a b@c.com"));
    }

    #[test]
    fn summary_counts_available_and_unavailable() {
        let mut cheap = ListItem {
            sku: "1".into(),
            name: String::new(),
            url: String::new(),
            available: true,
            value: 10.0,
            formatted_value: "$10".into(),
            wished_quantity: 2,
            purchased_quantity: 0,
            image: Default::default(),
        };
        let mut gone = cheap.clone();
        gone.available = false;
        gone.value = 0.0;
        cheap.sku = "1".into();

        let summary = items_summary(&[cheap, gone]);
        assert_eq!(summary.quantity, 2);
        assert_eq!(summary.available, 1);
        assert_eq!(summary.unavailable, 1);
        assert_eq!(summary.total, 20.0);
    }

    #[test]
    fn encode_uri_keeps_slashes_and_markup_separators() {
        assert_eq!(encode_uri("<a>/b c</a>"), "%3Ca%3E/b%20c%3C/a%3E");
    }
}
