mod data;

pub use data::{
    fetch_info, fetch_info_article, fetch_itinerary, fetch_shops, fetch_trip, fetch_trips,
    find_info_item, find_trip, DataSource,
};

/// Failure loading one of the static trip documents
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("Failed to deserialize: {0}")]
    Decode(String),
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}
