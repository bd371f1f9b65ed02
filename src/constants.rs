/// Path the app is served under; override at build time with `TRAVEL_POCKET_BASE_PATH`
pub const BASE_PATH: &str = match option_env!("TRAVEL_POCKET_BASE_PATH") {
    Some(path) => path,
    None => "/travel-pocket",
};

/// Directory under `BASE_PATH` holding the static trip documents
pub const DATA_DIR: &str = "data";

pub const TRIPS_FILE: &str = "trips.json";
pub const ITINERARY_FILE: &str = "itinerary.json";
pub const SHOPS_FILE: &str = "shops.json";
pub const INFO_FILE: &str = "info.json";
pub const INFO_ARTICLE_DIR: &str = "info";

pub const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

pub const THEME_STORAGE_KEY: &str = "travel_pocket_theme";
pub const LOCALE_STORAGE_KEY: &str = "travel_pocket_locale";

/// Query string parameter that forces a locale, e.g. `?lng=ja`
pub const LOCALE_QUERY_PARAM: &str = "lng";

pub const FONT_AWESOME_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";
