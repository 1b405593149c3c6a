//! Error types for the API client.

use std::fmt;

use serde::Deserialize;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The client configuration was rejected at construction time.
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
    /// The base URL and request path did not form a valid URL.
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The request could not be sent or its response could not be read
    /// (network failure, timeout, or cancellation).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API returned a non-success status.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// A success response body did not match the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
    /// The request body could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Marshal(#[source] serde_json::Error),
}

impl Error {
    /// Returns the API error carried by this error, if any.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the semantic category of this error. Only API errors with one
    /// of the classified status codes have a category.
    pub fn category(&self) -> Option<ErrorCategory> {
        self.api_error().and_then(ApiError::category)
    }

    /// Returns true if this is an API error in the given category.
    pub fn is(&self, category: ErrorCategory) -> bool {
        self.category() == Some(category)
    }

    /// Returns true if the request timed out before a response arrived.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}

/// A non-success response from the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Machine-readable error code from the response body, when present.
    pub code: Option<String>,
    /// Error message from the response body, or the status reason phrase.
    pub message: String,
    /// Raw response body, kept verbatim for diagnostics.
    pub body: String,
}

impl ApiError {
    /// Builds an error from a failed response. The body is parsed as an
    /// `{"error": {"code", "message"}}` envelope; if that fails or the message
    /// is empty, the message falls back to the canonical reason phrase.
    pub fn from_response(status: u16, body: String) -> Self {
        match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) if !envelope.error.message.is_empty() => Self {
                status,
                code: envelope.error.code.and_then(code_to_string),
                message: envelope.error.message,
                body,
            },
            _ => Self {
                status,
                code: None,
                message: reason_phrase(status).to_string(),
                body,
            },
        }
    }

    pub fn category(&self) -> Option<ErrorCategory> {
        ErrorCategory::from_status(self.status)
    }

    pub fn is(&self, category: ErrorCategory) -> bool {
        self.status == category.status()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(
                f,
                "API error (status {}, code {}): {}",
                self.status, code, self.message
            ),
            None => write!(f, "API error (status {}): {}", self.status, self.message),
        }
    }
}

impl std::error::Error for ApiError {}

/// Semantic classes of API failures, keyed by HTTP status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// 400
    BadRequest,
    /// 401
    Unauthorized,
    /// 403
    Forbidden,
    /// 404
    NotFound,
    /// 429
    RateLimited,
}

impl ErrorCategory {
    pub const ALL: [ErrorCategory; 5] = [
        Self::BadRequest,
        Self::Unauthorized,
        Self::Forbidden,
        Self::NotFound,
        Self::RateLimited,
    ];

    /// The HTTP status code this category matches.
    pub fn status(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::RateLimited => 429,
        }
    }

    pub fn from_status(status: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.status() == status)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BadRequest => "bad request",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "resource not found",
            Self::RateLimited => "rate limited",
        };
        f.write_str(name)
    }
}

/// Reports whether `err`, or any error in its `source()` chain, is an API
/// error in `category`.
///
/// Works through any wrapper that exposes the original error as its source,
/// including `anyhow::Context` and `#[source]` fields in thiserror enums.
pub fn is_category(err: &(dyn std::error::Error + 'static), category: ErrorCategory) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(api) = e.downcast_ref::<ApiError>() {
            return api.is(category);
        }
        if let Some(Error::Api(api)) = e.downcast_ref::<Error>() {
            return api.is(category);
        }
        current = e.source();
    }
    false
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorPayload,
}

#[derive(Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    code: Option<serde_json::Value>,
    #[serde(default)]
    message: String,
}

// BookStack sends numeric codes; other deployments send short strings.
fn code_to_string(code: serde_json::Value) -> Option<String> {
    match code {
        serde_json::Value::String(s) if !s.is_empty() => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn reason_phrase(status: u16) -> &'static str {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("")
}
