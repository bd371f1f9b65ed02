use serde::de::DeserializeOwned;

use super::DataError;
use crate::constants::{
    BASE_PATH, DATA_DIR, INFO_ARTICLE_DIR, INFO_FILE, ITINERARY_FILE, SHOPS_FILE, TRIPS_FILE,
};
use crate::models::{InfoItem, ItineraryDay, Shop, Trip};

/// Root URL the `data/` tree is served from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    base_url: String,
}

impl DataSource {
    /// `base_url` is the app root, e.g. `http://localhost:8080/travel-pocket/`
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    /// Build from the page origin and the compile-time base path
    ///
    /// # Errors
    ///
    /// Returns an error if there is no browser window or its origin can't be read.
    pub fn from_window() -> Result<Self, DataError> {
        let window = web_sys::window().ok_or_else(|| DataError::InvalidUrl("No window".to_string()))?;
        let origin = window
            .location()
            .origin()
            .map_err(|_| DataError::InvalidUrl("Failed to read location origin".to_string()))?;
        Ok(Self::with_base_path(&origin, BASE_PATH))
    }

    /// Like [`DataSource::from_window`], falling back to a path relative to the page
    #[must_use]
    pub fn from_window_or_relative() -> Self {
        Self::from_window().unwrap_or_else(|e| {
            leptos::logging::warn!("{e}; using relative data URLs");
            Self::with_base_path("", BASE_PATH)
        })
    }

    #[must_use]
    pub fn with_base_path(origin: &str, base_path: &str) -> Self {
        let origin = origin.trim_end_matches('/');
        let base_path = base_path.trim_matches('/');
        if base_path.is_empty() {
            Self::new(format!("{origin}/"))
        } else {
            Self::new(format!("{origin}/{base_path}/"))
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn trips_url(&self) -> String {
        format!("{}{DATA_DIR}/{TRIPS_FILE}", self.base_url)
    }

    fn trip_file_url(&self, trip_id: &str, file: &str) -> String {
        format!("{}{DATA_DIR}/{}/{file}", self.base_url, urlencoding::encode(trip_id))
    }

    #[must_use]
    pub fn itinerary_url(&self, trip_id: &str) -> String {
        self.trip_file_url(trip_id, ITINERARY_FILE)
    }

    #[must_use]
    pub fn shops_url(&self, trip_id: &str) -> String {
        self.trip_file_url(trip_id, SHOPS_FILE)
    }

    #[must_use]
    pub fn info_url(&self, trip_id: &str) -> String {
        self.trip_file_url(trip_id, INFO_FILE)
    }

    #[must_use]
    pub fn article_url(&self, trip_id: &str, item: &InfoItem) -> String {
        let file = urlencoding::encode(&item.article_file()).into_owned();
        self.trip_file_url(trip_id, &format!("{INFO_ARTICLE_DIR}/{file}"))
    }
}

async fn get_text(url: &str) -> Result<String, DataError> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| DataError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(DataError::Status(status.as_u16()));
    }

    response
        .text()
        .await
        .map_err(|e| DataError::Request(e.to_string()))
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, DataError> {
    serde_json::from_str(text).map_err(|e| DataError::Decode(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, DataError> {
    let text = get_text(url).await?;
    decode(&text)
}

/// # Errors
///
/// Returns an error if the request fails, the status is not ok, or the body
/// is not a trip list.
pub async fn fetch_trips(source: &DataSource) -> Result<Vec<Trip>, DataError> {
    get_json(&source.trips_url()).await
}

/// Find one trip in `trips.json`
///
/// # Errors
///
/// Same as [`fetch_trips`], plus [`DataError::NotFound`] for an unknown id.
pub async fn fetch_trip(source: &DataSource, trip_id: &str) -> Result<Trip, DataError> {
    let trips = fetch_trips(source).await?;
    find_trip(trips, trip_id)
}

/// # Errors
///
/// Returns [`DataError::NotFound`] if no trip has `trip_id`.
pub fn find_trip(trips: Vec<Trip>, trip_id: &str) -> Result<Trip, DataError> {
    trips
        .into_iter()
        .find(|trip| trip.id == trip_id)
        .ok_or_else(|| DataError::NotFound {
            kind: "Trip",
            id: trip_id.to_string(),
        })
}

/// # Errors
///
/// Returns an error if the request fails or the body is not an itinerary.
pub async fn fetch_itinerary(source: &DataSource, trip_id: &str) -> Result<Vec<ItineraryDay>, DataError> {
    get_json(&source.itinerary_url(trip_id)).await
}

/// # Errors
///
/// Returns an error if the request fails or the body is not a shop list.
pub async fn fetch_shops(source: &DataSource, trip_id: &str) -> Result<Vec<Shop>, DataError> {
    get_json(&source.shops_url(trip_id)).await
}

/// # Errors
///
/// Returns an error if the request fails or the body is not an info list.
pub async fn fetch_info(source: &DataSource, trip_id: &str) -> Result<Vec<InfoItem>, DataError> {
    get_json(&source.info_url(trip_id)).await
}

/// # Errors
///
/// Returns [`DataError::NotFound`] if no item has `info_id`.
pub fn find_info_item(items: Vec<InfoItem>, info_id: &str) -> Result<InfoItem, DataError> {
    items
        .into_iter()
        .find(|item| item.id == info_id)
        .ok_or_else(|| DataError::NotFound {
            kind: "Info item",
            id: info_id.to_string(),
        })
}

/// Resolve `info_id` through `info.json`, then fetch its markdown article
///
/// # Errors
///
/// Returns an error if either request fails or the item is not listed.
pub async fn fetch_info_article(source: &DataSource, trip_id: &str, info_id: &str) -> Result<String, DataError> {
    let items = fetch_info(source, trip_id).await?;
    let item = find_info_item(items, info_id)?;
    get_text(&source.article_url(trip_id, &item)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn source() -> DataSource {
        DataSource::new("http://localhost:8080/travel-pocket")
    }

    fn trip(id: &str) -> Trip {
        Trip {
            id: id.to_string(),
            name: id.to_uppercase(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 3).expect("valid date"),
            cover_image: String::new(),
        }
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        assert_eq!(source().base_url(), "http://localhost:8080/travel-pocket/");
    }

    #[test]
    fn test_with_base_path() {
        let source = DataSource::with_base_path("https://example.org/", "/travel-pocket/");
        assert_eq!(source.trips_url(), "https://example.org/travel-pocket/data/trips.json");

        let root = DataSource::with_base_path("https://example.org", "/");
        assert_eq!(root.trips_url(), "https://example.org/data/trips.json");
    }

    #[test]
    fn test_trip_urls() {
        let source = source();
        assert_eq!(
            source.itinerary_url("tokyo-2025"),
            "http://localhost:8080/travel-pocket/data/tokyo-2025/itinerary.json"
        );
        assert_eq!(
            source.shops_url("tokyo-2025"),
            "http://localhost:8080/travel-pocket/data/tokyo-2025/shops.json"
        );
        assert_eq!(
            source.info_url("east asia"),
            "http://localhost:8080/travel-pocket/data/east%20asia/info.json"
        );
    }

    #[test]
    fn test_article_url_uses_item_file() {
        let item = InfoItem {
            id: "visa".to_string(),
            title: "Visa".to_string(),
            icon: String::new(),
            links: Vec::new(),
            file: None,
        };
        assert_eq!(
            source().article_url("tokyo", &item),
            "http://localhost:8080/travel-pocket/data/tokyo/info/visa.md"
        );
    }

    #[test]
    fn test_find_trip() {
        let trips = vec![trip("a"), trip("b")];
        assert_eq!(find_trip(trips.clone(), "b").map(|t| t.name), Ok("B".to_string()));
        assert_eq!(
            find_trip(trips, "z"),
            Err(DataError::NotFound { kind: "Trip", id: "z".to_string() })
        );
    }

    #[test]
    fn test_find_info_item_not_found_message() {
        let err = find_info_item(Vec::new(), "faq").expect_err("should be missing");
        assert_eq!(err.to_string(), "Info item not found: faq");
    }

    #[test]
    fn test_decode_error_is_reported() {
        let result: Result<Vec<Trip>, DataError> = decode("{not json");
        assert!(matches!(result, Err(DataError::Decode(_))));
    }
}
