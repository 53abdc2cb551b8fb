//! Fail-soft data access over the API client.
//!
//! Every public operation returns a displayable value. Failures are logged
//! through [`recover`] and replaced by the fallback chosen at the call site:
//! an empty list for list operations, `None` for single lookups.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use rickandmorty_api::types::{Character, CharacterID, Info};
use rickandmorty_api::{CharacterQuery, Client, Error, Query};
use serde::Serialize;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::config::ServiceConfig;
use crate::controller::CharacterSource;
use crate::error::RickAndMortyError;

/// Maximum number of page requests in flight during [`DataService::get_every_character`].
const PAGE_CONCURRENCY: usize = 4;

/// Diagnostic record written for every failed operation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FailureRecord {
    pub operation: String,
    pub error: String,
    /// RFC 3339 UTC timestamp of the failure.
    pub timestamp: String,
    /// Request URL, or `"unknown"` when the error does not carry one.
    pub url: String,
}

impl FailureRecord {
    pub fn new(operation: &str, err: &Error) -> Self {
        Self {
            operation: operation.to_string(),
            error: err.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            url: err.url().unwrap_or("unknown").to_string(),
        }
    }
}

/// Unwraps `result`, or logs the failure under `operation` and returns `fallback`.
///
/// A 404 is how the API answers a search or lookup with no match, so it is
/// logged at `warn`; every other failure is logged at `error`.
pub fn recover<T>(operation: &str, result: Result<T, Error>, fallback: T) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            let record = FailureRecord::new(operation, &err);
            if err.is_not_found() {
                tracing::warn!(
                    operation = %record.operation,
                    error = %record.error,
                    timestamp = %record.timestamp,
                    url = %record.url,
                    "{} found nothing",
                    record.operation
                );
            } else {
                tracing::error!(
                    operation = %record.operation,
                    error = %record.error,
                    timestamp = %record.timestamp,
                    url = %record.url,
                    "{} failed",
                    record.operation
                );
            }
            fallback
        }
    }
}

/// Character data access that never fails the caller.
#[derive(Clone, Debug, Default)]
pub struct DataService {
    inner: Client,
}

impl DataService {
    /// Creates a service against the production API.
    pub fn new() -> Self {
        Self {
            inner: Client::new(),
        }
    }

    /// Creates a service with a custom base URL. Used for testing.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            inner: Client::with_base_url(base_url),
        }
    }

    pub fn with_config(config: &ServiceConfig) -> Self {
        Self {
            inner: Client::with_base_url(&config.base_url).with_timeout(config.timeout),
        }
    }

    /// Characters from the first page of the listing.
    pub async fn get_all_characters(&self) -> Vec<Character> {
        let result = self
            .inner
            .get_characters(&CharacterQuery::default())
            .await
            .map(|resp| resp.results);
        recover("getAllCharacters", result, Vec::new())
    }

    /// Characters on the given 1-indexed page.
    pub async fn get_characters_by_page(&self, page: i64) -> Vec<Character> {
        let query = CharacterQuery::default().with_page(page);
        let result = self
            .inner
            .get_characters(&query)
            .await
            .map(|resp| resp.results);
        recover("getCharactersByPage", result, Vec::new())
    }

    /// Server-side name search. A blank name lists the first page instead.
    pub async fn search_characters_by_name(&self, name: &str) -> Vec<Character> {
        if name.trim().is_empty() {
            return self.get_all_characters().await;
        }
        let query = CharacterQuery::default().with_name(name);
        let result = self
            .inner
            .get_characters(&query)
            .await
            .map(|resp| resp.results);
        recover("searchCharactersByName", result, Vec::new())
    }

    pub async fn get_character_by_id(&self, id: CharacterID) -> Option<Character> {
        let result = self.inner.get_character(id).await.map(Some);
        recover("getCharacterById", result, None)
    }

    pub async fn get_multiple_characters(&self, ids: &[CharacterID]) -> Vec<Character> {
        let result = self.inner.get_multiple_characters(ids).await;
        recover("getMultipleCharacters", result, Vec::new())
    }

    /// Pagination block of the unfiltered listing.
    pub async fn get_api_info(&self) -> Option<Info> {
        let result = self.inner.get_info().await.map(Some);
        recover("getApiInfo", result, None)
    }

    /// Every character across every page, in page order.
    ///
    /// Pages are fetched concurrently. A page that fails contributes nothing;
    /// if the page count itself cannot be read the result is empty.
    pub async fn get_every_character(&self) -> Vec<Character> {
        let Some(info) = self.get_api_info().await else {
            return Vec::new();
        };
        let total_pages = info.pages.max(0);

        let semaphore = Arc::new(Semaphore::new(PAGE_CONCURRENCY));
        let mut join_set = JoinSet::new();
        for page in 1..=total_pages {
            let sem = Arc::clone(&semaphore);
            let service = self.clone();
            join_set.spawn(async move {
                let Ok(_permit) = sem.acquire().await else {
                    return (page, Vec::new());
                };
                (page, service.get_characters_by_page(page).await)
            });
        }

        let mut pages: Vec<(i64, Vec<Character>)> = Vec::new();
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok(page) => pages.push(page),
                Err(e) => tracing::error!("Page fetch task failed: {}", e),
            }
        }
        pages.sort_by_key(|(page, _)| *page);

        let characters: Vec<Character> = pages
            .into_iter()
            .flat_map(|(_, characters)| characters)
            .collect();
        tracing::info!(
            "Fetched {} characters across {} pages",
            characters.len(),
            total_pages
        );
        characters
    }
}

impl CharacterSource for DataService {
    async fn load_characters(&self) -> Result<Vec<Character>, RickAndMortyError> {
        Ok(self.get_all_characters().await)
    }
}
