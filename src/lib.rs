pub mod api;
pub mod components;
pub mod constants;
pub mod context;
pub mod i18n;
pub mod logging;
pub mod maps;
pub mod markdown;
pub mod models;
pub mod presentation;
pub mod schedule;
pub mod shops;
pub mod theme;
pub mod time;
pub mod timeline;

pub use components::app::App;
