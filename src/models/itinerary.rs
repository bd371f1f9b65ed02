use chrono::NaiveDate;
use serde::Deserialize;

use super::Description;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Accommodation,
    Sightseeing,
    #[default]
    #[serde(other)]
    Other,
}

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Accommodation => "accommodation",
            Self::Sightseeing => "sightseeing",
            Self::Other => "other",
        }
    }

    /// Capitalized name shown in the detail sheet header
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Accommodation => "Accommodation",
            Self::Sightseeing => "Sightseeing",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: Category,
    /// Wall-clock `HH:MM`, kept raw so one bad value doesn't reject the file
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub google_map_link: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub description: Description,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItineraryDay {
    pub id: String,
    pub day: u32,
    pub date: NaiveDate,
    #[serde(default)]
    pub items: Vec<ItineraryItem>,
}

impl ItineraryDay {
    #[must_use]
    pub fn find_item(&self, item_id: &str) -> Option<&ItineraryItem> {
        self.items.iter().find(|item| item.id == item_id)
    }
}
