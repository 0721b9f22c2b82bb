use super::error::{RemoteError, Result, ValidationError};
use super::icon_id::IconId;
use super::transport::{ReqwestTransport, Transport};
use super::types::{SearchParams, SearchResult};
use crate::constants::{DEFAULT_API_URL, DEFAULT_ICON_SIZE, DEFAULT_SEARCH_LIMIT};
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Stateless client for the Iconify search and icon endpoints.
#[derive(Clone)]
pub struct IconifyClient {
    base: String,
    transport: Arc<dyn Transport>,
}

impl IconifyClient {
    pub fn new() -> Self {
        Self::with_transport(DEFAULT_API_URL, Arc::new(ReqwestTransport::new()))
    }

    pub fn with_base_url(base: impl Into<String>) -> Self {
        Self::with_transport(base, Arc::new(ReqwestTransport::new()))
    }

    pub fn with_transport(base: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self { base, transport }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// URL for `GET /search`. The API rejects an empty query, so a blank one
    /// is sent as a single space.
    pub fn search_url(&self, query: &str, params: SearchParams) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/search", self.base)).map_err(|e| {
            RemoteError::Transport {
                details: format!("invalid API base URL {:?}: {e}", self.base),
            }
        })?;

        let trimmed = query.trim();
        let query = if trimmed.is_empty() { " " } else { trimmed };
        let limit = params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", query);
            pairs.append_pair("limit", &limit.to_string());
            if let Some(start) = params.start {
                pairs.append_pair("start", &start.to_string());
            }
        }

        Ok(url)
    }

    pub async fn search(&self, query: &str, params: SearchParams) -> Result<SearchResult> {
        let url = self.search_url(query, params)?;
        debug!("GET {}", url);

        let response = self.transport.get(&url).await?;
        if !response.is_success() {
            return Err(RemoteError::Status {
                status: response.status,
            }
            .into());
        }

        let result = serde_json::from_str(&response.body).map_err(|e| RemoteError::Decode {
            details: e.to_string(),
        })?;
        Ok(result)
    }

    /// SVG asset URL for `id`. Pure: the same input always yields the same string.
    pub fn icon_url(&self, id: &str, size: u32) -> std::result::Result<String, ValidationError> {
        asset_url(&self.base, id, size)
    }

    pub fn default_icon_url(&self, id: &str) -> std::result::Result<String, ValidationError> {
        self.icon_url(id, DEFAULT_ICON_SIZE)
    }

    pub async fn icon_svg(&self, id: &str, size: u32) -> Result<String> {
        let url = self.icon_url(id, size)?;
        let url = Url::parse(&url).map_err(|e| RemoteError::Transport {
            details: format!("invalid icon URL {url:?}: {e}"),
        })?;
        debug!("GET {}", url);

        let response = self.transport.get(&url).await?;
        if !response.is_success() {
            return Err(RemoteError::Icon {
                id: id.to_string(),
                status: response.status,
            }
            .into());
        }

        Ok(response.body)
    }
}

/// `<base>/<prefix>/<name>.svg?height=<size>` for a `prefix:name` id.
pub fn asset_url(base: &str, id: &str, size: u32) -> std::result::Result<String, ValidationError> {
    let id = IconId::parse(id)?;
    Ok(format!(
        "{}/{}/{}.svg?height={}",
        base.trim_end_matches('/'),
        id.prefix(),
        id.name(),
        size
    ))
}

impl Default for IconifyClient {
    fn default() -> Self {
        Self::new()
    }
}
