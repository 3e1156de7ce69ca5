use thiserror::Error;

/// Unified error type for the entire progress-profile-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Authentication ──────────────────────────────────────────────
    #[error("Login credentials invalid, please try again")]
    AuthFailed,

    #[error("Not authenticated — no session token present")]
    NotAuthenticated,

    // ── API / Network ───────────────────────────────────────────────
    /// Non-success HTTP status. Carries the raw response body so callers
    /// can inspect what the server actually said.
    #[error("API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    /// The GraphQL engine answered 200 but put failures in the `errors` array.
    #[error("GraphQL query failed: {0}")]
    Query(String),

    #[error("Network error: {0}")]
    Network(String),

    // ── Data ────────────────────────────────────────────────────────
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    // ── Input validation ────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    Validation(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Strip query parameters from URLs embedded in reqwest messages so
        // bearer tokens never leak into logs.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::MalformedResponse(e.to_string())
    }
}
