//! Shared helpers for CLI commands.

pub mod create;
pub mod delete;
pub mod link;
pub mod list;
pub mod publish;
pub mod read;
pub mod rename;
pub mod search;
pub mod share;
pub mod users;

use anyhow::Result;
use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder, header};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Errors surfaced to the user.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The server returned a structured error.
    #[error("{code}: {message}")]
    Api { code: String, message: String },

    /// The server returned something unparseable.
    #[error("unexpected response from server (status {status}): {body}")]
    UnexpectedResponse { status: u16, body: String },
}

/// Structured error body the server produces.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
}

/// Build an HTTP client, attaching the bearer token when one is configured.
pub fn build_client(token: Option<&str>) -> Result<Client> {
    let mut headers = header::HeaderMap::new();

    if let Some(token) = token {
        let value = header::HeaderValue::from_str(&format!("Bearer {}", token))?;
        headers.insert(header::AUTHORIZATION, value);
    }

    Ok(Client::builder().default_headers(headers).build()?)
}

/// Send a request and decode the response, converting server error bodies
/// into `CliError`.
pub async fn make_request<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        return Ok(serde_json::from_str(&body).map_err(|_| {
            CliError::UnexpectedResponse {
                status: status.as_u16(),
                body: truncate(&body, 200).to_string(),
            }
        })?);
    }

    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(&body) {
        return Err(CliError::Api {
            code: envelope.error.code,
            message: envelope.error.message,
        }
        .into());
    }

    Err(CliError::UnexpectedResponse {
        status: status.as_u16(),
        body: truncate(&body, 200).to_string(),
    }
    .into())
}

/// Types that can render themselves for humans instead of emitting JSON.
pub trait HumanReadable {
    fn print_human(&self);
}

/// Print a response: JSON by default, formatted text with `--human`.
pub fn output<T: serde::Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Format a timestamp for human display.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Truncate a string for display, appending an ellipsis when cut.
pub fn truncate(s: &str, max: usize) -> std::borrow::Cow<'_, str> {
    if s.chars().count() <= max {
        std::borrow::Cow::Borrowed(s)
    } else {
        let cut: String = s.chars().take(max).collect();
        std::borrow::Cow::Owned(format!("{}...", cut))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate("hello world", 5), "hello...");
    }

    #[test]
    fn test_error_envelope_parses() {
        let body = r#"{"error": {"code": "NOT_FOUND", "message": "document is not available"}}"#;
        let envelope: ErrorEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.error.code, "NOT_FOUND");
    }

    #[test]
    fn test_format_timestamp() {
        let ts: DateTime<Utc> = "2026-01-15T10:30:00Z".parse().unwrap();
        assert_eq!(format_timestamp(&ts), "2026-01-15 10:30:00 UTC");
    }
}
