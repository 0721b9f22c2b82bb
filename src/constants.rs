//! Constants for the Iconify client and the search primitive
//!
//! This module centralizes magic numbers and configuration values
//! so the client, the session and the CLI agree on them.

// Remote endpoint
/// Base URL of the Iconify API (search endpoint and SVG assets)
pub const DEFAULT_API_URL: &str = "https://api.iconify.design";

/// Result count sent when the caller gives no limit
pub const DEFAULT_SEARCH_LIMIT: u32 = 64;

/// Default rendered icon height in pixels
pub const DEFAULT_ICON_SIZE: u32 = 24;

// Retrieval strategies
/// First-page size in paginated mode
pub const PAGE_SIZE: u32 = 64;

/// Limit used by fetch-all mode and by the single "load more" page
pub const MAX_LIMIT: u32 = 999;

/// Requests allowed per query in paginated mode (first page + one follow-up)
pub const MAX_PAGES: usize = 2;

// Timing constants
/// Debounce interval in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// How long a successful result is served from cache, in seconds
pub const DEFAULT_STALE_TIME_SECS: u64 = 5 * 60;
