use crate::iconify::IconId;
use crate::interactive::domain::models::SearchResponse;

#[derive(Debug)]
pub enum Message {
    // Query events
    QueryChanged(String),
    DebounceElapsed,

    // Selection events
    SelectIcon(IconId),
    SetSelection(Vec<IconId>),
    ClearSelection,

    // Fetch events
    LoadMore,
    Refetch,
    SearchCompleted(SearchResponse),

    // Lifecycle
    Close,
}
