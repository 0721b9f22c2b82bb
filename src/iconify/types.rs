use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Body of `GET /search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub icons: Vec<String>,
    pub total: u32,
    pub limit: u32,
    #[serde(default)]
    pub start: u32,
    #[serde(default)]
    pub collections: HashMap<String, CollectionInfo>,
    #[serde(default)]
    pub request: BTreeMap<String, String>,
}

impl SearchResult {
    /// A page that came back full may have more results behind it.
    pub fn is_full_page(&self) -> bool {
        self.limit > 0 && self.icons.len() >= self.limit as usize
    }

    pub fn collection_name(&self, prefix: &str) -> Option<&str> {
        self.collections.get(prefix).and_then(|info| info.name.as_deref())
    }
}

/// Collection metadata. Only `name` and `total` are typed; every other field
/// the API sends is kept as-is in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl CollectionInfo {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Options for one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub limit: Option<u32>,
    pub start: Option<u32>,
}

impl SearchParams {
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            start: None,
        }
    }
}
