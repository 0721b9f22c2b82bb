use crate::iconify::{IconifyClient, SearchParams};
use crate::interactive::domain::models::{SearchRequest, SearchResponse};
use tracing::debug;

pub struct SearchService {
    client: IconifyClient,
}

impl SearchService {
    pub fn new(client: IconifyClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &IconifyClient {
        &self.client
    }

    /// Runs one request. Failures are carried in the response, never returned,
    /// so the session can record them against the query that caused them.
    pub async fn search(&self, request: SearchRequest) -> SearchResponse {
        let params = SearchParams::with_limit(request.limit);
        let result = self.client.search(&request.query, params).await;

        match &result {
            Ok(found) => debug!(
                "search #{} {:?} page {} -> {} icons",
                request.id,
                request.query,
                request.page,
                found.icons.len()
            ),
            Err(e) => debug!("search #{} {:?} failed: {}", request.id, request.query, e),
        }

        SearchResponse {
            id: request.id,
            query: request.query,
            page: request.page,
            result,
        }
    }
}
