//! HTTP client and request dispatcher for the BookStack REST API.

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::{
    resources::{Attachments, Books, Chapters, Comments, Pages, Search, Shelves},
    ApiError, Error,
};

/// Timeout applied to every request when the configuration does not set one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Placeholder body argument for requests that send no payload.
pub(crate) const NO_BODY: Option<&()> = None;

/// Settings for building a [`Client`].
#[derive(Clone, Default)]
pub struct Config {
    /// Base URL of the BookStack instance, e.g. `https://docs.example.com`.
    pub base_url: String,
    /// API token id.
    pub token_id: String,
    /// API token secret.
    pub token_secret: String,
    /// Per-request timeout for the built-in HTTP client. Ignored when
    /// `http_client` is set. Defaults to [`DEFAULT_TIMEOUT`].
    pub timeout: Option<Duration>,
    /// Pre-configured HTTP client to send requests with.
    pub http_client: Option<reqwest::Client>,
}

impl Config {
    pub fn new(base_url: &str, token_id: &str, token_secret: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            token_id: token_id.to_string(),
            token_secret: token_secret.to_string(),
            ..Default::default()
        }
    }

    /// Reads `BOOKSTACK_URL`, `BOOKSTACK_TOKEN_ID`, `BOOKSTACK_TOKEN_SECRET`
    /// and the optional `BOOKSTACK_TIMEOUT_SECS` from the environment.
    ///
    /// Missing credentials are left empty so that [`Client::new`] can report
    /// every missing field at once.
    pub fn from_env() -> Result<Self, Error> {
        let timeout = match std::env::var("BOOKSTACK_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|_| {
                    Error::InvalidConfig(format!(
                        "BOOKSTACK_TIMEOUT_SECS must be a whole number of seconds, got {:?}",
                        raw
                    ))
                })?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };
        Ok(Self {
            base_url: std::env::var("BOOKSTACK_URL").unwrap_or_default(),
            token_id: std::env::var("BOOKSTACK_TOKEN_ID").unwrap_or_default(),
            token_secret: std::env::var("BOOKSTACK_TOKEN_SECRET").unwrap_or_default(),
            timeout,
            http_client: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("token_id", &self.token_id)
            .field("token_secret", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("http_client", &self.http_client.is_some())
            .finish()
    }
}

/// HTTP methods the API accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

/// Authenticated client for the BookStack REST API.
///
/// Every request carries `Authorization: Token <id>:<secret>` and
/// `Accept: application/json`. Base URL and credentials are fixed at
/// construction. The client is cheap to share by reference across tasks.
#[derive(Clone)]
pub struct Client {
    base_url: String,
    auth: HeaderValue,
    http: reqwest::Client,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Validates the configuration and builds a client.
    ///
    /// Fails with [`Error::InvalidConfig`] listing every empty required field.
    pub fn new(config: Config) -> Result<Self, Error> {
        let mut missing = Vec::new();
        if config.base_url.is_empty() {
            missing.push("base URL is required");
        }
        if config.token_id.is_empty() {
            missing.push("token id is required");
        }
        if config.token_secret.is_empty() {
            missing.push("token secret is required");
        }
        if !missing.is_empty() {
            return Err(Error::InvalidConfig(missing.join("; ")));
        }

        let mut auth = HeaderValue::from_str(&format!(
            "Token {}:{}",
            config.token_id, config.token_secret
        ))
        .map_err(|_| {
            Error::InvalidConfig("token contains characters not allowed in a header".to_string())
        })?;
        auth.set_sensitive(true);

        let http = match config.http_client {
            Some(http) => http,
            None => reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(config.timeout.unwrap_or(DEFAULT_TIMEOUT))
                .build()
                .map_err(|e| {
                    tracing::error!("Failed to build HTTP client: {}", e);
                    Error::Transport(e)
                })?,
        };

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth,
            http,
        })
    }

    /// Base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn books(&self) -> Books<'_> {
        Books::new(self, "/api/books")
    }

    pub fn chapters(&self) -> Chapters<'_> {
        Chapters::new(self, "/api/chapters")
    }

    pub fn pages(&self) -> Pages<'_> {
        Pages::new(self, "/api/pages")
    }

    pub fn shelves(&self) -> Shelves<'_> {
        Shelves::new(self, "/api/shelves")
    }

    pub fn attachments(&self) -> Attachments<'_> {
        Attachments::new(self, "/api/attachments")
    }

    pub fn comments(&self) -> Comments<'_> {
        Comments::new(self, "/api/comments")
    }

    pub fn search(&self) -> Search<'_> {
        Search::new(self)
    }

    /// Sends one request and decodes a JSON response into `T`.
    ///
    /// `path` is appended verbatim to the base URL and may carry a query
    /// string. Returns `Ok(None)` when the server answers with an empty body,
    /// as DELETE endpoints do.
    pub async fn execute<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<T>, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let bytes = self.send(method, path, body).await?;
        if bytes.is_empty() {
            return Ok(None);
        }
        let parsed = serde_json::from_slice::<T>(&bytes).map_err(|e| {
            let snippet = truncate_body(&String::from_utf8_lossy(&bytes));
            tracing::error!("Failed to parse response: {} | body: {}", e, snippet);
            Error::Decode(e)
        })?;
        Ok(Some(parsed))
    }

    /// Sends one request and discards the response body.
    pub async fn execute_discard<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), Error>
    where
        B: Serialize + ?Sized,
    {
        self.send(method, path, body).await.map(|_| ())
    }

    /// Sends one request and returns the raw response body without JSON
    /// decoding. Non-success statuses are still classified as API errors.
    pub async fn execute_raw<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Vec<u8>, Error>
    where
        B: Serialize + ?Sized,
    {
        self.send(method, path, body).await
    }

    /// Like [`execute`](Self::execute), but an empty body yields `T::default()`.
    pub(crate) async fn fetch<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        Ok(self.execute(method, path, body).await?.unwrap_or_default())
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.base_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e)
        })
    }

    async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Vec<u8>, Error>
    where
        B: Serialize + ?Sized,
    {
        let payload = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(Error::Marshal)?;
        let url = self.get_url(path)?;

        tracing::debug!(%method, path, "Sending request");
        let mut req = self
            .http
            .request(method.into(), url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, self.auth.clone());
        if let Some(payload) = payload {
            req = req.header(CONTENT_TYPE, "application/json").body(payload);
        }

        let resp = req.send().await.map_err(|e| {
            tracing::error!("Failed to send {} {}: {}", method, path, e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body).into_owned();
            tracing::warn!(
                "{} {} failed with status {}: {}",
                method,
                path,
                status,
                truncate_body(&text)
            );
            return Err(ApiError::from_response(status.as_u16(), text).into());
        }

        Ok(body.to_vec())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_strips_trailing_slash() {
        let client = Client::new(Config::new("https://docs.example.com/", "abc", "xyz")).unwrap();
        assert_eq!(client.base_url(), "https://docs.example.com");
    }

    #[test]
    fn new_keeps_clean_base_url() {
        let client = Client::new(Config::new("https://docs.example.com", "abc", "xyz")).unwrap();
        assert_eq!(client.base_url(), "https://docs.example.com");
    }

    #[test]
    fn new_reports_every_missing_field() {
        let err = Client::new(Config::default()).unwrap_err();
        match err {
            Error::InvalidConfig(msg) => {
                assert!(msg.contains("base URL is required"));
                assert!(msg.contains("token id is required"));
                assert!(msg.contains("token secret is required"));
            }
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn new_rejects_single_missing_field() {
        for config in [
            Config::new("", "abc", "xyz"),
            Config::new("https://x.com", "", "xyz"),
            Config::new("https://x.com", "abc", ""),
        ] {
            assert!(matches!(Client::new(config), Err(Error::InvalidConfig(_))));
        }
    }

    #[test]
    fn new_rejects_token_with_newline() {
        let err = Client::new(Config::new("https://x.com", "abc\n", "xyz")).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn debug_redacts_secret() {
        let config = Config::new("https://x.com", "abc", "super-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn method_conversions() {
        assert_eq!(reqwest::Method::from(Method::Put), reqwest::Method::PUT);
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }
}
