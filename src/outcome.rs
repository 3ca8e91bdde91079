//! Response normalization.
//!
//! The backend signals failure three different ways: a JSON object with a
//! falsy `Success` flag, a bare HTML login prompt, and localized confirmation
//! phrases inside HTML bodies. Everything is funneled into one uniform
//! [`Outcome`] so callers never see the divergence.

use serde_json::Value;

use crate::document::DocumentQuery;

/// Coarse failure classification. Backend-internal detail stays out of the
/// kind; the raw body rides on [`Outcome::Failure`] for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotLoggedIn,
    ListUnknown,
    Unknown,
    /// No response at all (normalized transport failure).
    Transport,
}

/// The uniform result of one logical operation: exactly one of these per
/// operation, produced exactly once.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    Failure {
        kind: FailureKind,
        raw: Option<String>,
    },
}

impl<T> Outcome<T> {
    pub fn failure(kind: FailureKind, raw: impl Into<Option<String>>) -> Self {
        Outcome::Failure {
            kind,
            raw: raw.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(v) => Some(v),
            Outcome::Failure { .. } => None,
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure { kind, .. } => Some(*kind),
        }
    }
}

/// The login prompt some endpoints return as a plain string.
const NOT_LOGGED_PROMPT: &str = "Para ver tus listas, tenes que loguearte. Hace click aquí.";

/// Known benign backend error bodies. These are transient backend failures,
/// never a login problem, and must classify as [`FailureKind::Unknown`] so a
/// higher layer can decide whether to retry. This layer does not retry.
pub const COMMON_ERRORS: &[&str] = &[
    // Observed flaky checkout handshake during item fetches.
    "{\"Success\":false,\"Error\":\"Tentei 2 vezes receber os dados do checkout mas n\u{e3}o obtive sucesso.\"}",
];

/// Whether a response body is the backend's "please log in" answer, either
/// the exact prompt string or markup carrying a `.must-login` node.
pub fn is_not_logged(body: &str, documents: &dyn DocumentQuery) -> bool {
    body == NOT_LOGGED_PROMPT || !documents.select(body, ".must-login").is_empty()
}

/// Classifies a plain-text body ahead of payload parsing.
///
/// Returns `None` when the body is not a recognized failure and the caller
/// should go on to interpret the payload.
pub fn classify_text(body: &str, documents: &dyn DocumentQuery) -> Option<FailureKind> {
    if COMMON_ERRORS.iter().any(|e| body.contains(e)) {
        return Some(FailureKind::Unknown);
    }
    if is_not_logged(body, documents) {
        return Some(FailureKind::NotLoggedIn);
    }
    None
}

/// Classifies a structured JSON response.
///
/// A truthy `Success` flag means success, payload left to the caller to
/// project. A falsy flag is classified by its `Error` message: empty means
/// the list does not exist, the login prompt (plain or as markup) means not
/// logged in, anything else is unknown.
pub fn classify(response: &Value, documents: &dyn DocumentQuery) -> Option<FailureKind> {
    if response
        .get("Success")
        .and_then(Value::as_bool)
        .unwrap_or(false)
    {
        return None;
    }
    let message = response
        .get("Error")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if is_not_logged(message, documents) {
        Some(FailureKind::NotLoggedIn)
    } else if message.is_empty() {
        Some(FailureKind::ListUnknown)
    } else {
        Some(FailureKind::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ScraperQuery;
    use serde_json::json;

    #[test]
    fn success_flag_classifies_as_success() {
        let resp = json!({"Success": true, "GiftListId": 42});
        assert_eq!(classify(&resp, &ScraperQuery), None);
    }

    #[test]
    fn empty_error_means_list_unknown() {
        let resp = json!({"Success": false, "Error": ""});
        assert_eq!(
            classify(&resp, &ScraperQuery),
            Some(FailureKind::ListUnknown)
        );
    }

    #[test]
    fn login_prompt_means_not_logged_in() {
        let resp = json!({
            "Success": false,
            "Error": "Para ver tus listas, tenes que loguearte. Hace click aquí."
        });
        assert_eq!(
            classify(&resp, &ScraperQuery),
            Some(FailureKind::NotLoggedIn)
        );
    }

    #[test]
    fn must_login_markup_means_not_logged_in() {
        let resp = json!({
            "Success": false,
            "Error": "<div class=\"must-login\">Entre na sua conta</div>"
        });
        assert_eq!(
            classify(&resp, &ScraperQuery),
            Some(FailureKind::NotLoggedIn)
        );
    }

    #[test]
    fn other_messages_are_unknown() {
        let resp = json!({"Success": false, "Error": "a url da lista é um campo obrigatório"});
        assert_eq!(classify(&resp, &ScraperQuery), Some(FailureKind::Unknown));
    }

    #[test]
    fn benign_bodies_never_classify_as_login() {
        let body = COMMON_ERRORS[0];
        assert_eq!(
            classify_text(body, &ScraperQuery),
            Some(FailureKind::Unknown)
        );
    }

    #[test]
    fn bare_login_html_is_detected() {
        let body = "<div><p class=\"must-login\">login</p></div>";
        assert_eq!(
            classify_text(body, &ScraperQuery),
            Some(FailureKind::NotLoggedIn)
        );
        assert_eq!(classify_text("<table></table>", &ScraperQuery), None);
    }
}
