pub mod config;
pub mod constants;
pub mod format;
pub mod iconify;
pub mod interactive;
pub mod logging;

pub use config::SearchConfig;
pub use format::{format_groups, format_search_result, format_selection, format_snapshot};
pub use iconify::{
    CollectionInfo, Error, IconId, IconifyClient, RemoteError, SearchParams, SearchResult,
    ValidationError,
};
pub use interactive::IconSearch;
pub use interactive::domain::models::{CollectionGroup, FetchMode};
pub use interactive::ui::snapshot::{FetchStatus, Snapshot};
