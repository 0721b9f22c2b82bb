use crate::constants::{MAX_LIMIT, PAGE_SIZE};
use crate::iconify::{Error, SearchResult};
use serde::Serialize;

/// Retrieval strategy of a session.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FetchMode {
    /// One request per query with the high limit; results exposed as groups.
    #[default]
    All,
    /// Small first page, optional single "load more"; results exposed flat.
    Paginated,
}

impl FetchMode {
    /// Limit for page `page` (0-based) of a query.
    pub fn limit_for_page(self, page: usize) -> u32 {
        match (self, page) {
            (FetchMode::Paginated, 0) => PAGE_SIZE,
            _ => MAX_LIMIT,
        }
    }
}

/// Icons of one collection present in the current view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CollectionGroup {
    pub prefix: String,
    pub name: String,
    pub icons: Vec<String>,
}

// Search request and response for async communication
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub id: u64,
    pub query: String,
    pub page: usize,
    pub limit: u32,
}

#[derive(Debug)]
pub struct SearchResponse {
    pub id: u64,
    pub query: String,
    pub page: usize,
    pub result: Result<SearchResult, Error>,
}
