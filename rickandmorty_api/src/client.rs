//! HTTP client for the Rick and Morty REST API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{CharacterQuery, Query},
    types::{ApiResponse, Character, CharacterID, Info, OneOrMany},
    Error,
};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Per-request timeout used unless overridden with [`Client::with_timeout`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Rick and Morty REST API.
///
/// Holds no connection state: each request builds a fresh `reqwest::Client`
/// with the configured timeout. Every method returns the raw `Result`;
/// choosing a fallback on failure is left to the caller.
#[derive(Clone, Debug)]
pub struct Client {
    /// Base URL for the API. Defaults to [`DEFAULT_BASE_URL`].
    base_api_url: String,
    timeout: Duration,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Replaces the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let raw = format!("{}{}", &self.base_api_url, path);
        let url = Url::parse(raw.as_str()).map_err(|e| {
            tracing::warn!("Invalid URL constructed: {}", e);
            Error::InvalidUrl {
                url: raw.clone(),
                reason: e.to_string(),
            }
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        let url_text = url.to_string();
        let client = reqwest::Client::builder()
            .user_agent(concat!("rickandmorty_api/", env!("CARGO_PKG_VERSION")))
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                tracing::warn!("Failed to build HTTP client: {}", e);
                Error::RequestFailed {
                    url: url_text.clone(),
                    reason: e.to_string(),
                }
            })?;
        tracing::debug!("GET {}", url_text);
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Failed to get resource: {}", e);
                Error::RequestFailed {
                    url: url_text.clone(),
                    reason: e.to_string(),
                }
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::warn!("Failed to read response body: {}", e);
            Error::RequestFailed {
                url: url_text.clone(),
                reason: e.to_string(),
            }
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::warn!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                url: url_text,
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::warn!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::Malformed {
                url: url_text.clone(),
                reason: e.to_string(),
            }
        })?;

        Ok(parsed)
    }

    /// Fetches one page of characters matching the given query.
    ///
    /// Unfiltered requests go to `/character`; filtered ones to `/character/`.
    pub async fn get_characters(
        &self,
        query: &CharacterQuery,
    ) -> Result<ApiResponse<Character>, Error> {
        let path = if query.has_filters() {
            "/character/"
        } else {
            "/character"
        };
        self.get::<ApiResponse<Character>, CharacterQuery>(path, Some(query))
            .await
    }

    /// Fetches a single character by its numeric ID.
    pub async fn get_character(&self, id: CharacterID) -> Result<Character, Error> {
        self.get::<Character, CharacterQuery>(format!("/character/{}", id).as_str(), None)
            .await
    }

    /// Fetches several characters in one request. Returns an empty list
    /// without touching the network when `ids` is empty.
    pub async fn get_multiple_characters(
        &self,
        ids: &[CharacterID],
    ) -> Result<Vec<Character>, Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let joined = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let body = self
            .get::<OneOrMany<Character>, CharacterQuery>(
                format!("/character/{}", joined).as_str(),
                None,
            )
            .await?;
        Ok(body.into())
    }

    /// Fetches the pagination block of the unfiltered character listing.
    pub async fn get_info(&self) -> Result<Info, Error> {
        let resp = self
            .get::<ApiResponse<Character>, CharacterQuery>("/character", None)
            .await?;
        Ok(resp.info)
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
