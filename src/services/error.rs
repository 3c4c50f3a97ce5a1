use thiserror::Error;

/// Fixed message shown to the user whenever a session check fails.
pub const NOT_AUTHENTICATED_MESSAGE: &str = "Not authenticated or token invalid";

/// Failure of a session probe.
///
/// The variants only matter for logs. Every one of them means
/// "not authenticated" to the rest of the app.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("network error: {0}")]
    Network(String),

    #[error("no response within {0} ms")]
    Timeout(u32),

    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },

    #[error("unexpected session payload: {0}")]
    Decode(String),
}

impl ProbeError {
    pub fn user_message(&self) -> &'static str {
        NOT_AUTHENTICATED_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_failure_reads_as_not_authenticated() {
        let errors = [
            ProbeError::Network("connection refused".to_string()),
            ProbeError::Timeout(10_000),
            ProbeError::Rejected { status: 401, detail: Some("Token expired".to_string()) },
            ProbeError::Decode("expected a map".to_string()),
        ];
        for error in errors {
            assert_eq!(error.user_message(), NOT_AUTHENTICATED_MESSAGE);
        }
    }

    #[test]
    fn rejected_error_mentions_backend_detail() {
        let error = ProbeError::Rejected { status: 401, detail: Some("Invalid token".to_string()) };
        assert_eq!(error.to_string(), "HTTP 401: Invalid token");

        let bare = ProbeError::Rejected { status: 502, detail: None };
        assert_eq!(bare.to_string(), "HTTP 502: no detail");
    }
}
