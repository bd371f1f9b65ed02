#![allow(clippy::needless_pass_by_value)]

pub mod app;
pub mod bottom_nav;
pub mod detail_sheet;
pub mod home;
pub mod info_detail;
pub mod info_view;
pub mod language_switcher;
pub mod modal_overlay;
pub mod schedule_view;
pub mod shops_view;
pub mod theme_toggle;
pub mod trip_view;
