use std::fmt;

/// HTTP status the backend uses for a missing, invalid or expired session.
pub const UNAUTHORIZED: u16 = 401;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
    Storage(String),
}

impl AppError {
    /// True when the server rejected the session and the forced-logout path applies.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http { status, .. } if *status == UNAUTHORIZED)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
            AppError::Storage(message) => write!(formatter, "Session storage error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Reduces an HTTP error body to a user-facing message.
///
/// JSON bodies with a `message` or `detail` field use that field; anything else
/// is trimmed and truncated.
#[must_use]
pub fn error_message_from_body(body: &str) -> String {
    if let Ok(serde_json::Value::Object(fields)) = serde_json::from_str(body) {
        let detail = ["message", "detail"]
            .iter()
            .filter_map(|key| fields.get(*key).and_then(serde_json::Value::as_str))
            .map(str::trim)
            .find(|value| !value.is_empty());
        if let Some(detail) = detail {
            return truncate(detail);
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        truncate(trimmed)
    }
}

fn truncate(value: &str) -> String {
    value.chars().take(MAX_ERROR_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_http_401_is_unauthorized() {
        let unauthorized = AppError::Http {
            status: 401,
            message: "Invalid token".to_string(),
        };
        assert!(unauthorized.is_unauthorized());

        let forbidden = AppError::Http {
            status: 403,
            message: "401".to_string(),
        };
        assert!(!forbidden.is_unauthorized());
        assert!(!AppError::Network("401 Unauthorized".to_string()).is_unauthorized());
    }

    #[test]
    fn display_includes_status() {
        let err = AppError::Http {
            status: 409,
            message: "username taken".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (409): username taken");
    }

    #[test]
    fn error_message_prefers_json_message_then_detail() {
        assert_eq!(
            error_message_from_body(r#"{"message":"Username already exists","detail":"x"}"#),
            "Username already exists"
        );
        assert_eq!(
            error_message_from_body(r#"{"message":"  ","detail":"Bad credentials"}"#),
            "Bad credentials"
        );
    }

    #[test]
    fn error_message_falls_back_to_trimmed_body() {
        assert_eq!(error_message_from_body("  boom \n"), "boom");
        assert_eq!(error_message_from_body(""), "Request failed.");
        assert_eq!(error_message_from_body(r#"{"status":500}"#), r#"{"status":500}"#);

        let long = "x".repeat(500);
        assert_eq!(error_message_from_body(&long).chars().count(), 200);
    }
}
