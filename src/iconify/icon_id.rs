use super::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Group key used for identifiers that carry no `prefix:` part.
pub const OTHER_PREFIX: &str = "other";

/// A validated `"prefix:name"` icon identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IconId {
    raw: String,
    split: usize,
}

impl IconId {
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        match raw.find(':') {
            Some(split) if split > 0 && split + 1 < raw.len() => Ok(Self { raw, split }),
            _ => Err(ValidationError { id: raw }),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.raw[..self.split]
    }

    pub fn name(&self) -> &str {
        &self.raw[self.split + 1..]
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for IconId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for IconId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<IconId> for String {
    fn from(id: IconId) -> Self {
        id.raw
    }
}

impl AsRef<str> for IconId {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

/// Collection key of a raw identifier as returned by the server.
///
/// Unlike [`IconId::parse`] this never fails: the server's icon list is not
/// validated, so anything without a `:` is filed under [`OTHER_PREFIX`].
pub fn collection_prefix(id: &str) -> &str {
    match id.split_once(':') {
        Some((prefix, _)) => prefix,
        None => OTHER_PREFIX,
    }
}
