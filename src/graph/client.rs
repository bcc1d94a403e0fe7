//! Graph API client
//!
//! Minimal HTTP client for the graph API and the CDN hosts serving thumbnails.

use crate::error::RequestFailure;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use url::Url;

const LOG_TARGET: &str = "     graph";

/// Base URL of the versioned graph API.
pub const DEFAULT_BASE_URL: &str = "https://graph.facebook.com/v20.0";

const REDACTED: &str = "REDACTED";

#[derive(Debug, Clone)]
#[expect(clippy::struct_field_names, reason = "client field stores the underlying HTTP client")]
pub struct GraphClient {
    client: reqwest::Client,
    base_url: String,
}

impl GraphClient {
    /// Create a client rooted at `base_url` (e.g. `https://graph.facebook.com/v20.0`)
    pub fn new(base_url: impl Into<String>) -> Result<Self, RequestFailure> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("reel-insights/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build `{base}/{path}?{query}`
    pub fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, RequestFailure> {
        Ok(Url::parse_with_params(&format!("{}/{path}", self.base_url), query)?)
    }

    /// GET `url` and deserialize the JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, RequestFailure> {
        let body = self.get_bytes(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// GET `url` and return the raw body of a successful response
    pub async fn get_bytes(&self, url: &str) -> Result<Bytes, RequestFailure> {
        log::debug!(target: LOG_TARGET, "GET {}", redact(url));

        // reqwest errors embed the request URL, which carries the access token
        let resp = self.client.get(url).send().await.map_err(|e| RequestFailure::Transport(e.without_url()))?;

        let status = resp.status();
        if !status.is_success() {
            log::debug!(target: LOG_TARGET, "GET {} returned {status}", redact(url));
            return Err(RequestFailure::Status(status));
        }

        resp.bytes().await.map_err(|e| RequestFailure::Transport(e.without_url()))
    }
}

/// Replace the value of any `access_token` query parameter so the URL is safe to print.
#[must_use]
pub fn redact(url: &str) -> String {
    let Ok(mut parsed) = Url::parse(url) else {
        return "<invalid URL>".to_string();
    };

    if !parsed.query_pairs().any(|(key, _)| key == "access_token") {
        return parsed.into();
    }

    let pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == "access_token" { REDACTED.to_string() } else { value.into_owned() };
            (key.into_owned(), value)
        })
        .collect();

    let _ = parsed.query_pairs_mut().clear().extend_pairs(pairs);
    parsed.into()
}
