//! Debounced search-and-select primitive over the Iconify API.
//!
//! [`IconSearch`] is the handle a host UI holds. Mutations are applied to the
//! [`SearchSession`] synchronously, so the next [`IconSearch::snapshot`] sees
//! them. A background task owns the debounce timer and the in-flight fetches
//! and feeds their outcomes back into the session as messages.

use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::{mpsc, watch};
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::config::SearchConfig;
use crate::iconify::{IconId, IconifyClient, ValidationError};

pub mod application;
pub mod domain;
pub mod ui;


use self::application::search_service::SearchService;
use self::domain::models::SearchResponse;
use self::ui::{app_state::SearchSession, commands::Command, events::Message, snapshot::Snapshot};

/// State shared by the handle and the driver task.
struct Shared {
    session: Mutex<SearchSession>,
    publisher: watch::Sender<Snapshot>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, SearchSession> {
        self.session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Applies `msg`, publishes the resulting snapshot and returns the side
    /// effect the session asked for.
    fn dispatch(&self, msg: Message) -> Command {
        let (command, snapshot) = {
            let mut session = self.lock();
            let command = session.update(msg, Instant::now());
            (command, session.snapshot())
        };
        self.publisher.send_replace(snapshot);
        command
    }
}

pub struct IconSearch {
    shared: Arc<Shared>,
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<Snapshot>,
    client: IconifyClient,
    task: Option<JoinHandle<()>>,
}

impl IconSearch {
    /// Starts a session. Must be called from within a tokio runtime.
    pub fn new(client: IconifyClient, config: SearchConfig) -> Self {
        let session = SearchSession::new(config, client.base_url());
        let (publisher, snapshots) = watch::channel(session.snapshot());
        let shared = Arc::new(Shared {
            session: Mutex::new(session),
            publisher,
        });

        let (commands, receiver) = mpsc::unbounded_channel();
        let service = Arc::new(SearchService::new(client.clone()));
        let task = tokio::spawn(run_driver(shared.clone(), service, receiver));

        Self {
            shared,
            commands,
            snapshots,
            client,
            task: Some(task),
        }
    }

    pub fn set_query(&self, text: impl Into<String>) {
        self.send(Message::QueryChanged(text.into()));
    }

    pub fn select_icon(&self, id: IconId) {
        self.send(Message::SelectIcon(id));
    }

    pub fn set_selection(&self, ids: Vec<IconId>) {
        self.send(Message::SetSelection(ids));
    }

    pub fn clear_selection(&self) {
        self.send(Message::ClearSelection);
    }

    /// Requests the follow-up page in paginated mode. No-op otherwise.
    pub fn load_more(&self) {
        self.send(Message::LoadMore);
    }

    /// Fetches the current query again, ignoring the cache.
    pub fn refetch(&self) {
        self.send(Message::Refetch);
    }

    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    /// A receiver that is notified after every state change.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }

    /// Waits until nothing is debouncing or loading and returns that state.
    pub async fn settled(&self) -> Snapshot {
        let mut receiver = self.snapshots.clone();
        match receiver.wait_for(|s| !s.is_pending || s.is_closed).await {
            Ok(snapshot) => snapshot.clone(),
            Err(_) => self.snapshot(),
        }
    }

    pub fn icon_url(&self, id: &str, size: u32) -> Result<String, ValidationError> {
        self.client.icon_url(id, size)
    }

    pub fn client(&self) -> &IconifyClient {
        &self.client
    }

    /// Tears the session down: the debounce timer is dropped, in-flight
    /// fetches are aborted and every later mutation is ignored.
    pub async fn shutdown(mut self) {
        self.send(Message::Close);
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!("search driver ended abnormally: {}", e);
            }
        }
    }

    fn send(&self, msg: Message) {
        let command = self.shared.dispatch(msg);
        if command != Command::None {
            // The driver only goes away after Close, when commands are moot
            let _ = self.commands.send(command);
        }
    }
}

impl Drop for IconSearch {
    fn drop(&mut self) {
        if !self.shared.lock().is_closed() {
            self.send(Message::Close);
        }
    }
}

async fn run_driver(
    shared: Arc<Shared>,
    service: Arc<SearchService>,
    mut commands: mpsc::UnboundedReceiver<Command>,
) {
    let mut deadline: Option<Instant> = None;
    let mut fetches: JoinSet<SearchResponse> = JoinSet::new();

    loop {
        let command = tokio::select! {
            biased;

            received = commands.recv() => match received {
                Some(command) => command,
                None => Command::Shutdown,
            },
            _ = tokio::time::sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                deadline = None;
                shared.dispatch(Message::DebounceElapsed)
            }
            Some(joined) = fetches.join_next(), if !fetches.is_empty() => match joined {
                Ok(response) => shared.dispatch(Message::SearchCompleted(response)),
                Err(e) => {
                    warn!("search task failed: {}", e);
                    Command::None
                }
            },
        };

        match command {
            Command::None => {}
            Command::ScheduleSearch(delay) => {
                deadline = Some(Instant::now() + delay);
            }
            Command::ExecuteSearch(request) => {
                debug!("fetching {:?} page {} (#{})", request.query, request.page, request.id);
                let service = service.clone();
                fetches.spawn(async move { service.search(request).await });
            }
            Command::Shutdown => break,
        }
    }

    if !fetches.is_empty() {
        info!("aborting {} in-flight search(es)", fetches.len());
    }
    fetches.abort_all();

    // Covers the handle being dropped without an explicit Close
    if !shared.lock().is_closed() {
        shared.dispatch(Message::Close);
    }
}
