//! Client for the Iconify search API and icon CDN.

pub mod client;
pub mod error;
pub mod icon_id;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

#[cfg(test)]
mod client_test;

pub use client::{IconifyClient, asset_url};
pub use error::{Error, RemoteError, Result, ValidationError};
pub use icon_id::{IconId, OTHER_PREFIX, collection_prefix};
pub use transport::{HttpResponse, ReqwestTransport, Transport};
pub use types::{CollectionInfo, SearchParams, SearchResult};
