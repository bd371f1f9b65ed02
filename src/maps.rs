use crate::constants::MAPS_SEARCH_URL;
use crate::models::ItineraryItem;

/// Deep link to a map search for an itinerary item
///
/// An explicit `googleMapLink` wins; otherwise coordinates are preferred over
/// the free-text location.
#[must_use]
pub fn map_search_url(item: &ItineraryItem) -> String {
    if let Some(link) = item.google_map_link.as_deref().map(str::trim) {
        if !link.is_empty() {
            return link.to_string();
        }
    }

    match item.coordinates {
        Some(coords) => format!("{MAPS_SEARCH_URL}{},{}", coords.lat, coords.lng),
        None => location_search_url(&item.location),
    }
}

#[must_use]
pub fn location_search_url(location: &str) -> String {
    format!("{MAPS_SEARCH_URL}{}", urlencoding::encode(location))
}
