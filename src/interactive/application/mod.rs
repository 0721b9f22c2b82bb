pub mod cache_service;
pub mod search_service;
