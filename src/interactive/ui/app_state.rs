use crate::config::SearchConfig;
use crate::iconify::IconId;
use crate::interactive::application::cache_service::{CacheService, QueryEntry};
use crate::interactive::domain::grouping::{group_icons, merge_pages};
use crate::interactive::domain::models::{FetchMode, SearchRequest};
use crate::interactive::ui::commands::Command;
use crate::interactive::ui::events::Message;
use crate::interactive::ui::snapshot::{FetchStatus, Snapshot};
use std::sync::Arc;
use tokio::time::Instant;
use tracing::debug;

/// State of one search-and-select interaction.
///
/// Purely synchronous: every input is a [`Message`], every side effect the
/// caller must perform comes back as a [`Command`]. Timers and network calls
/// live in the driver.
pub struct SearchSession {
    config: SearchConfig,
    api_base: Arc<str>,
    query: String,
    debounced_query: String,
    is_debouncing: bool,
    selection: Vec<IconId>,
    cache: CacheService,
    next_request_id: u64,
    closed: bool,
}

impl SearchSession {
    pub fn new(config: SearchConfig, api_base: impl Into<Arc<str>>) -> Self {
        let cache = CacheService::new(config.stale_time);
        Self {
            config,
            api_base: api_base.into(),
            query: String::new(),
            debounced_query: String::new(),
            is_debouncing: false,
            selection: Vec::new(),
            cache,
            next_request_id: 0,
            closed: false,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn debounced_query(&self) -> &str {
        &self.debounced_query
    }

    pub fn is_debouncing(&self) -> bool {
        self.is_debouncing
    }

    pub fn selection(&self) -> &[IconId] {
        &self.selection
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn update(&mut self, msg: Message, now: Instant) -> Command {
        if self.closed {
            return Command::None;
        }

        match msg {
            Message::QueryChanged(q) => {
                self.query = q;
                self.is_debouncing = true;
                Command::ScheduleSearch(self.config.debounce)
            }
            Message::DebounceElapsed => {
                if !self.is_debouncing {
                    return Command::None;
                }
                self.is_debouncing = false;
                self.debounced_query = self.query.clone();
                self.fetch_current(now, false)
            }
            Message::SelectIcon(id) => {
                if self.config.multiple {
                    if let Some(pos) = self.selection.iter().position(|s| *s == id) {
                        self.selection.remove(pos);
                    } else {
                        self.selection.push(id);
                    }
                } else {
                    self.selection = vec![id];
                }
                Command::None
            }
            Message::SetSelection(ids) => {
                self.set_selection(ids);
                Command::None
            }
            Message::ClearSelection => {
                self.set_selection(Vec::new());
                Command::None
            }
            Message::LoadMore => {
                if self.config.mode != FetchMode::Paginated || is_blank(&self.debounced_query) {
                    return Command::None;
                }
                let ready = self
                    .cache
                    .get(&self.debounced_query)
                    .is_some_and(|entry| entry.has_next_page() && !entry.is_fetching());
                if ready {
                    let query = self.debounced_query.clone();
                    self.start_request(query, 1)
                } else {
                    Command::None
                }
            }
            Message::Refetch => self.fetch_current(now, true),
            Message::SearchCompleted(response) => {
                let (id, query) = (response.id, response.query.clone());
                if !self.cache.complete(response, now) {
                    debug!("dropped superseded response #{} for {:?}", id, query);
                }
                Command::None
            }
            Message::Close => {
                self.closed = true;
                self.is_debouncing = false;
                Command::Shutdown
            }
        }
    }

    fn set_selection(&mut self, ids: Vec<IconId>) {
        let mut selection: Vec<IconId> = Vec::with_capacity(ids.len());
        for id in ids {
            if !selection.contains(&id) {
                selection.push(id);
            }
        }
        if !self.config.multiple {
            selection.truncate(1);
        }
        self.selection = selection;
    }

    fn fetch_current(&mut self, now: Instant, force: bool) -> Command {
        let query = self.debounced_query.clone();
        if is_blank(&query) {
            return Command::None;
        }
        if !force && (self.cache.is_fresh(&query, now) || self.cache.is_fetching(&query)) {
            return Command::None;
        }
        self.start_request(query, 0)
    }

    fn start_request(&mut self, query: String, page: usize) -> Command {
        self.next_request_id += 1;
        let id = self.next_request_id;
        self.cache.begin(&query, id, page);
        Command::ExecuteSearch(SearchRequest {
            id,
            limit: self.config.mode.limit_for_page(page),
            query,
            page,
        })
    }

    fn current_entry(&self) -> Option<&QueryEntry> {
        if is_blank(&self.debounced_query) {
            None
        } else {
            self.cache.get(&self.debounced_query)
        }
    }

    /// Builds the read model. Groups and icons are recomputed from scratch
    /// from the current entry and selection on every call.
    pub fn snapshot(&self) -> Snapshot {
        let entry = self.current_entry();

        let status = match entry {
            None => FetchStatus::Idle,
            Some(e) if e.is_fetching() && e.pages.is_empty() => FetchStatus::Loading,
            Some(e) => match (&e.error, e.latest()) {
                (Some(err), _) => FetchStatus::Error(err.clone()),
                (None, Some(page)) => FetchStatus::Success(page.clone()),
                (None, None) => FetchStatus::Idle,
            },
        };

        let is_loading = entry.is_some_and(|e| e.is_fetching() && e.pages.is_empty());
        let is_fetching = entry.is_some_and(QueryEntry::is_fetching);

        let (data, groups, icons, has_next_page, is_fetching_next_page) = match self.config.mode {
            FetchMode::All => {
                let data = entry.and_then(|e| e.latest().cloned());
                let groups = group_icons(data.as_deref(), &self.selection);
                (data, groups, Vec::new(), false, false)
            }
            FetchMode::Paginated => {
                let pages = entry.map(|e| e.pages.as_slice()).unwrap_or_default();
                let icons = merge_pages(pages.iter().map(Arc::as_ref), &self.selection);
                (
                    None,
                    Vec::new(),
                    icons,
                    entry.is_some_and(QueryEntry::has_next_page),
                    entry.is_some_and(QueryEntry::is_fetching_next_page),
                )
            }
        };

        Snapshot {
            multiple: self.config.multiple,
            mode: self.config.mode,
            query: self.query.clone(),
            debounced_query: self.debounced_query.clone(),
            is_debouncing: self.is_debouncing,
            status,
            data,
            is_loading,
            is_fetching,
            is_pending: self.is_debouncing || is_loading || is_fetching,
            selection: self.selection.clone(),
            groups,
            icons,
            has_next_page,
            is_fetching_next_page,
            is_closed: self.closed,
            api_base: self.api_base.clone(),
        }
    }
}

fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}
