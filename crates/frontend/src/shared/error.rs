//! Typed errors returned by the REST layer and the store mutations.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS)
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("failed to encode request: {0}")]
    Encode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    /// Builds a `Status` error, preferring the backend's `{"error": "..."}` message.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    trimmed.to_string()
                }
            });
        ApiError::Status { status, message }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_is_preferred() {
        let err = ApiError::from_response_body(409, r#"{"error":"Developer has projects"}"#);
        assert_eq!(
            err,
            ApiError::Status {
                status: 409,
                message: "Developer has projects".into()
            }
        );
    }

    #[test]
    fn test_plain_and_empty_bodies() {
        assert_eq!(
            ApiError::from_response_body(500, "boom\n"),
            ApiError::Status {
                status: 500,
                message: "boom".into()
            }
        );
        assert_eq!(
            ApiError::from_response_body(502, ""),
            ApiError::Status {
                status: 502,
                message: "HTTP 502".into()
            }
        );
    }
}
