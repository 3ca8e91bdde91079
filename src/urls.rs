//! Endpoint URL building.

use crate::config::GiftListConfig;

/// Replaces every `{{name}}` occurrence in `template` with the paired value.
///
/// Keys absent from `params` are left verbatim; callers are responsible for
/// supplying all placeholders an endpoint requires. The template itself is
/// never mutated.
pub fn resolve(template: &str, params: &[(&str, String)]) -> String {
    let mut url = template.to_string();
    for (key, value) in params {
        url = url.replace(&format!("{{{{{key}}}}}"), value);
    }
    url
}

/// Sharable URL of a list, for HTML links.
pub fn list_url(config: &GiftListConfig, id: &str) -> String {
    format!("{}?id={}", config.list_path, id)
}
