use crate::constants::MAX_PAGES;
use crate::iconify::{Error, SearchResult};
use crate::interactive::domain::models::SearchResponse;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// A request that has been sent and not yet answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InFlight {
    pub id: u64,
    pub page: usize,
}

/// Everything known about one query string.
#[derive(Debug, Default)]
pub struct QueryEntry {
    pub pages: Vec<Arc<SearchResult>>,
    pub error: Option<Error>,
    pub in_flight: Option<InFlight>,
    pub updated_at: Option<Instant>,
}

impl QueryEntry {
    pub fn latest(&self) -> Option<&Arc<SearchResult>> {
        self.pages.last()
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_fetching_next_page(&self) -> bool {
        matches!(self.in_flight, Some(InFlight { page, .. }) if page > 0)
    }

    /// Only a full first page may be followed up, and only once.
    pub fn has_next_page(&self) -> bool {
        self.pages.len() < MAX_PAGES
            && self.pages.last().is_some_and(|page| page.is_full_page())
    }
}

/// Search results keyed by the exact query string that produced them.
pub struct CacheService {
    entries: HashMap<String, QueryEntry>,
    stale_time: Duration,
}

impl CacheService {
    pub fn new(stale_time: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stale_time,
        }
    }

    pub fn get(&self, query: &str) -> Option<&QueryEntry> {
        self.entries.get(query)
    }

    /// True when `query` has a successful answer younger than the stale time.
    pub fn is_fresh(&self, query: &str, now: Instant) -> bool {
        self.entries.get(query).is_some_and(|entry| {
            entry.error.is_none()
                && !entry.pages.is_empty()
                && entry
                    .updated_at
                    .is_some_and(|at| now.saturating_duration_since(at) < self.stale_time)
        })
    }

    pub fn is_fetching(&self, query: &str) -> bool {
        self.entries.get(query).is_some_and(QueryEntry::is_fetching)
    }

    /// Records that request `id` for `page` of `query` is on the wire. A newer
    /// request supersedes an older one for the same query.
    pub fn begin(&mut self, query: &str, id: u64, page: usize) {
        let entry = self.entries.entry(query.to_string()).or_default();
        entry.in_flight = Some(InFlight { id, page });
    }

    /// Stores a response under its own query. Returns false when the response
    /// was superseded by a later request for the same query and was dropped.
    pub fn complete(&mut self, response: SearchResponse, now: Instant) -> bool {
        let Some(entry) = self.entries.get_mut(&response.query) else {
            return false;
        };
        if entry.in_flight.map(|f| f.id) != Some(response.id) {
            return false;
        }
        entry.in_flight = None;

        match response.result {
            Ok(result) => {
                // A refreshed first page restarts pagination
                entry.pages.truncate(response.page);
                entry.pages.push(Arc::new(result));
                entry.error = None;
                entry.updated_at = Some(now);
            }
            Err(e) => {
                entry.error = Some(e);
            }
        }
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
