use crate::maps::map_search_url;
use crate::models::{Category, ItineraryDay};
use crate::timeline::format_time_range;

/// Screen-local selection state for the schedule tab
///
/// Owned by the schedule screen and reset whenever the active trip changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleSelection {
    pub day_index: usize,
    pub open_item: Option<String>,
}

impl ScheduleSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to another day, clamped to `day_count`
    ///
    /// Closes the detail sheet only when the day actually changes.
    pub fn select_day(&mut self, index: usize, day_count: usize) {
        let index = index.min(day_count.saturating_sub(1));
        if index != self.day_index {
            self.day_index = index;
            self.open_item = None;
        }
    }

    pub fn open(&mut self, item_id: impl Into<String>) {
        self.open_item = Some(item_id.into());
    }

    /// Close the detail sheet, from either its close button or the backdrop
    pub fn close_sheet(&mut self) {
        self.open_item = None;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_sheet_open(&self) -> bool {
        self.open_item.is_some()
    }

    #[must_use]
    pub fn current_day<'a>(&self, days: &'a [ItineraryDay]) -> Option<&'a ItineraryDay> {
        days.get(self.day_index)
    }

    /// Resolve the open item against the current day
    ///
    /// Returns `None` if nothing is open or the id isn't part of that day.
    #[must_use]
    pub fn open_detail(&self, days: &[ItineraryDay]) -> Option<DetailSheet> {
        let item_id = self.open_item.as_deref()?;
        let day = self.current_day(days)?;
        let item = day.find_item(item_id)?;

        Some(DetailSheet {
            category: item.category,
            category_label: item.category.label(),
            title: item.title.clone(),
            time_range: format_time_range(item),
            day_number: day.day,
            location: item.location.clone(),
            map_url: map_search_url(item),
            description: item.description.paragraphs().to_vec(),
        })
    }
}

/// Everything the detail sheet displays for one item
#[derive(Debug, Clone, PartialEq)]
pub struct DetailSheet {
    pub category: Category,
    pub category_label: &'static str,
    pub title: String,
    pub time_range: String,
    pub day_number: u32,
    pub location: String,
    pub map_url: String,
    pub description: Vec<String>,
}

impl DetailSheet {
    #[must_use]
    pub fn day_label(&self) -> String {
        format!("Day {}", self.day_number)
    }
}

/// `Day {n}` chip text for the day selector
#[must_use]
pub fn day_chip_label(day: &ItineraryDay) -> String {
    format!("Day {}", day.day)
}

/// `MM/dd` suffix shown next to the day chip
#[must_use]
pub fn day_chip_date(day: &ItineraryDay) -> String {
    day.date.format("%m/%d").to_string()
}

/// The selector is hidden for single-day trips
#[must_use]
pub fn shows_day_selector(days: &[ItineraryDay]) -> bool {
    days.len() > 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Description;
    use crate::timeline::tests::item;
    use chrono::NaiveDate;

    fn three_day_trip() -> Vec<ItineraryDay> {
        (1..=3)
            .map(|n| {
                let mut first = item(&format!("d{n}-a"), "09:00", "10:30");
                first.title = format!("Morning of day {n}");
                let second = item(&format!("d{n}-b"), "12:00", "13:00");
                ItineraryDay {
                    id: format!("d{n}"),
                    day: n,
                    date: NaiveDate::from_ymd_opt(2025, 3, n).expect("valid date"),
                    items: vec![first, second],
                }
            })
            .collect()
    }

    #[test]
    fn test_defaults_to_first_day_with_no_sheet() {
        let selection = ScheduleSelection::new();
        assert_eq!(selection.day_index, 0);
        assert!(!selection.is_sheet_open());
    }

    #[test]
    fn test_open_item_on_third_day() {
        let days = three_day_trip();
        let mut selection = ScheduleSelection::new();

        selection.select_day(2, days.len());
        selection.open("d3-a");

        let sheet = selection.open_detail(&days).expect("sheet is open");
        assert_eq!(sheet.title, "Morning of day 3");
        assert_eq!(sheet.time_range, "09:00 - 10:30");
        assert_eq!(sheet.day_label(), "Day 3");
        assert_eq!(sheet.category_label, "Sightseeing");
    }

    #[test]
    fn test_close_sheet_keeps_day() {
        let days = three_day_trip();
        let mut selection = ScheduleSelection::new();
        selection.select_day(2, days.len());
        selection.open("d3-b");

        selection.close_sheet();

        assert_eq!(selection.day_index, 2);
        assert_eq!(selection.open_item, None);
        assert_eq!(selection.current_day(&days).map(|d| d.day), Some(3));
    }

    #[test]
    fn test_changing_day_closes_sheet() {
        let mut selection = ScheduleSelection::new();
        selection.open("d1-a");

        selection.select_day(1, 3);

        assert_eq!(selection.day_index, 1);
        assert!(!selection.is_sheet_open());
    }

    #[test]
    fn test_reselecting_same_day_keeps_sheet() {
        let mut selection = ScheduleSelection::new();
        selection.open("d1-a");

        selection.select_day(0, 3);

        assert_eq!(selection.open_item.as_deref(), Some("d1-a"));
    }

    #[test]
    fn test_select_day_is_clamped() {
        let mut selection = ScheduleSelection::new();
        selection.select_day(10, 3);
        assert_eq!(selection.day_index, 2);

        selection.select_day(5, 0);
        assert_eq!(selection.day_index, 0);
    }

    #[test]
    fn test_reset_on_trip_change() {
        let mut selection = ScheduleSelection::new();
        selection.select_day(2, 3);
        selection.open("d3-a");

        selection.reset();

        assert_eq!(selection, ScheduleSelection::default());
    }

    #[test]
    fn test_unknown_item_has_no_sheet() {
        let days = three_day_trip();
        let mut selection = ScheduleSelection::new();
        selection.open("d2-a");

        assert!(selection.open_detail(&days).is_none());
    }

    #[test]
    fn test_no_days_has_no_current_day() {
        let selection = ScheduleSelection::new();
        assert!(selection.current_day(&[]).is_none());
        assert!(!shows_day_selector(&[]));
    }

    #[test]
    fn test_detail_carries_description_and_map_url() {
        let mut days = three_day_trip();
        days[0].items[0].description = Description::from_text("Line one\n\nLine two");
        days[0].items[0].location = "Asakusa".to_string();

        let mut selection = ScheduleSelection::new();
        selection.open("d1-a");
        let sheet = selection.open_detail(&days).expect("sheet is open");

        assert_eq!(sheet.description, vec!["Line one", "Line two"]);
        assert!(sheet.map_url.ends_with("query=Asakusa"));
    }

    #[test]
    fn test_day_chip_text() {
        let days = three_day_trip();
        assert_eq!(day_chip_label(&days[1]), "Day 2");
        assert_eq!(day_chip_date(&days[1]), "03/02");
        assert!(shows_day_selector(&days));
        assert!(!shows_day_selector(&days[..1]));
    }
}
