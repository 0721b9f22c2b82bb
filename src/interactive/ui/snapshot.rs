use crate::iconify::{Error, IconId, SearchResult, ValidationError, asset_url};
use crate::interactive::domain::models::{CollectionGroup, FetchMode};
use std::sync::Arc;

/// Fetch status of the current debounced query.
#[derive(Clone, Debug)]
pub enum FetchStatus {
    Idle,
    Loading,
    Success(Arc<SearchResult>),
    Error(Error),
}

impl FetchStatus {
    pub fn is_error(&self) -> bool {
        matches!(self, FetchStatus::Error(_))
    }
}

/// Immutable view of a session handed to the host for rendering.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub multiple: bool,
    pub mode: FetchMode,
    /// Raw input, updated on every keystroke
    pub query: String,
    /// Input the current results belong to
    pub debounced_query: String,
    pub is_debouncing: bool,
    pub status: FetchStatus,
    /// Latest response for the current query (fetch-all mode only)
    pub data: Option<Arc<SearchResult>>,
    /// First fetch for the current query is in flight
    pub is_loading: bool,
    /// Any fetch for the current query is in flight
    pub is_fetching: bool,
    pub is_pending: bool,
    pub selection: Vec<IconId>,
    /// Fetch-all mode: icons grouped by collection
    pub groups: Vec<CollectionGroup>,
    /// Paginated mode: flat icon list over all pages
    pub icons: Vec<String>,
    pub has_next_page: bool,
    pub is_fetching_next_page: bool,
    pub is_closed: bool,
    pub(crate) api_base: Arc<str>,
}

impl Snapshot {
    pub fn icon_url(&self, id: &str, size: u32) -> Result<String, ValidationError> {
        asset_url(&self.api_base, id, size)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.iter().any(|selected| selected.as_str() == id)
    }

    /// Every icon on display, in display order, whichever mode produced it.
    pub fn visible_icons(&self) -> Vec<&str> {
        match self.mode {
            FetchMode::All => self
                .groups
                .iter()
                .flat_map(|group| group.icons.iter().map(String::as_str))
                .collect(),
            FetchMode::Paginated => self.icons.iter().map(String::as_str).collect(),
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match &self.status {
            FetchStatus::Error(e) => Some(e),
            _ => None,
        }
    }
}
