//! Scripted in-memory transport for tests.

use super::error::RemoteError;
use super::transport::{HttpResponse, Transport};
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;
use url::Url;

type Handler = dyn Fn(&Url) -> Scripted + Send + Sync;

/// What the mock answers for one request.
pub(crate) struct Scripted {
    pub delay: Duration,
    pub response: Result<HttpResponse, RemoteError>,
}

impl Scripted {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            delay: Duration::ZERO,
            response: Ok(HttpResponse {
                status: 200,
                body: body.into(),
            }),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            delay: Duration::ZERO,
            response: Ok(HttpResponse {
                status,
                body: String::new(),
            }),
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

pub(crate) struct MockTransport {
    handler: Box<Handler>,
    requests: Mutex<Vec<Url>>,
}

impl MockTransport {
    pub fn new(handler: impl Fn(&Url) -> Scripted + Send + Sync + 'static) -> Self {
        Self {
            handler: Box::new(handler),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, RemoteError> {
        self.requests.lock().unwrap().push(url.clone());
        let scripted = (self.handler)(url);
        if !scripted.delay.is_zero() {
            tokio::time::sleep(scripted.delay).await;
        }
        scripted.response
    }
}

pub(crate) fn query_param(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// JSON body of a search response over `icons`.
pub(crate) fn search_body(icons: &[&str], limit: u32) -> String {
    let mut collections = serde_json::Map::new();
    for icon in icons {
        if let Some((prefix, _)) = icon.split_once(':') {
            collections
                .entry(prefix.to_string())
                .or_insert_with(|| serde_json::json!({ "name": format!("{prefix} icons") }));
        }
    }
    serde_json::json!({
        "icons": icons,
        "total": icons.len(),
        "limit": limit,
        "start": 0,
        "collections": collections,
        "request": {},
    })
    .to_string()
}
