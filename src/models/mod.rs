mod description;
mod info;
mod itinerary;
mod shop;
mod trip;

pub use description::Description;
pub use info::{InfoItem, InfoLink};
pub use itinerary::{Category, Coordinates, ItineraryDay, ItineraryItem};
pub use shop::Shop;
pub use trip::Trip;
