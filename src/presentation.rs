use crate::models::Category;

/// Icon and color treatment for an itinerary category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    /// Font Awesome class list
    pub icon: &'static str,
    /// CSS modifier, e.g. `tone-orange`
    pub tone: &'static str,
}

const FOOD: CategoryStyle = CategoryStyle { icon: "fa-solid fa-mug-hot", tone: "tone-orange" };
const ACCOMMODATION: CategoryStyle = CategoryStyle { icon: "fa-solid fa-bed", tone: "tone-blue" };
const SIGHTSEEING: CategoryStyle = CategoryStyle { icon: "fa-solid fa-landmark", tone: "tone-green" };
const TRANSPORT: CategoryStyle = CategoryStyle { icon: "fa-solid fa-bus", tone: "tone-purple" };
const DEFAULT_STYLE: CategoryStyle = CategoryStyle { icon: "fa-solid fa-ellipsis", tone: "tone-gray" };

#[must_use]
pub const fn category_style(category: Category) -> CategoryStyle {
    match category {
        Category::Food => FOOD,
        Category::Accommodation => ACCOMMODATION,
        Category::Sightseeing => SIGHTSEEING,
        Category::Transport => TRANSPORT,
        Category::Other => DEFAULT_STYLE,
    }
}

/// Icon for an info card, keyed by the icon name in `info.json`
#[must_use]
pub fn info_icon(name: &str) -> &'static str {
    match name {
        "Landmark" => "fa-solid fa-landmark",
        "Train" => "fa-solid fa-train",
        "BookOpen" => "fa-solid fa-book-open",
        "Plane" => "fa-solid fa-plane",
        _ => "fa-solid fa-circle-info",
    }
}
