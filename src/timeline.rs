use crate::models::ItineraryItem;
use crate::time::{format_duration_minutes, minutes_between};

/// Idle or transit time following an item within the same day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gap {
    pub after_item_id: String,
    pub minutes: i64,
}

impl Gap {
    #[must_use]
    pub fn label(&self) -> String {
        format_gap(self.minutes)
    }
}

/// One row of a rendered day: an item card, or the gap indicator below it
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineEntry<'a> {
    Item(&'a ItineraryItem),
    Gap(Gap),
}

/// Minutes between the end of `prev` and the start of `next`
///
/// Unparseable times yield 0 so the indicator is suppressed.
#[must_use]
pub fn gap_minutes(prev: &ItineraryItem, next: &ItineraryItem) -> i64 {
    minutes_between(&prev.end_time, &next.start_time)
}

fn gap_after(items: &[ItineraryItem], index: usize) -> Option<Gap> {
    let (prev, next) = (items.get(index)?, items.get(index + 1)?);
    let minutes = gap_minutes(prev, next);
    (minutes > 0).then(|| Gap {
        after_item_id: prev.id.clone(),
        minutes,
    })
}

/// Compute the positive gaps between adjacent items of one day
///
/// Back-to-back and overlapping pairs produce no entry, and the last item
/// never has a trailing gap.
#[must_use]
pub fn compute_gaps(items: &[ItineraryItem]) -> Vec<Gap> {
    (0..items.len())
        .filter_map(|index| gap_after(items, index))
        .collect()
}

/// Interleave items with the gaps that follow them, in display order
#[must_use]
pub fn build_timeline(items: &[ItineraryItem]) -> Vec<TimelineEntry<'_>> {
    let mut entries = Vec::with_capacity(items.len() * 2);

    for (index, item) in items.iter().enumerate() {
        entries.push(TimelineEntry::Item(item));
        if let Some(gap) = gap_after(items, index) {
            entries.push(TimelineEntry::Gap(gap));
        }
    }

    entries
}

#[must_use]
pub fn format_gap(minutes: i64) -> String {
    format_duration_minutes(minutes)
}

/// `start - end` as shown on the card and in the detail sheet
#[must_use]
pub fn format_time_range(item: &ItineraryItem) -> String {
    format!("{} - {}", item.start_time, item.end_time)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{Category, Description};

    pub(crate) fn item(id: &str, start: &str, end: &str) -> ItineraryItem {
        ItineraryItem {
            id: id.to_string(),
            title: format!("Item {id}"),
            location: "Somewhere".to_string(),
            category: Category::Sightseeing,
            start_time: start.to_string(),
            end_time: end.to_string(),
            google_map_link: None,
            coordinates: None,
            description: Description::default(),
            thumbnail: None,
        }
    }

    #[test]
    fn test_gap_of_ninety_minutes() {
        let items = vec![item("a", "09:00", "10:30"), item("b", "12:00", "13:00")];
        let gaps = compute_gaps(&items);

        assert_eq!(
            gaps,
            vec![Gap {
                after_item_id: "a".to_string(),
                minutes: 90
            }]
        );
        assert_eq!(gaps[0].label(), "1h 30m");
    }

    #[test]
    fn test_back_to_back_items_have_no_gap() {
        let items = vec![item("a", "09:00", "10:00"), item("b", "10:00", "11:00")];
        assert!(compute_gaps(&items).is_empty());
    }

    #[test]
    fn test_overlapping_items_have_no_gap() {
        let items = vec![item("a", "09:00", "11:00"), item("b", "10:00", "12:00")];
        assert!(compute_gaps(&items).is_empty());
    }

    #[test]
    fn test_single_and_empty_days() {
        assert!(compute_gaps(&[]).is_empty());
        assert!(compute_gaps(&[item("only", "09:00", "10:00")]).is_empty());
    }

    #[test]
    fn test_unparsed_times_suppress_gap() {
        let items = vec![item("a", "09:00", "late"), item("b", "12:00", "13:00")];
        assert!(compute_gaps(&items).is_empty());
    }

    #[test]
    fn test_short_gap_formats_minutes_only() {
        let items = vec![item("a", "09:00", "09:40"), item("b", "09:55", "10:30")];
        let gaps = compute_gaps(&items);
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].label(), "15m");
    }

    #[test]
    fn test_gaps_for_each_adjacent_pair() {
        let items = vec![
            item("a", "08:00", "09:00"),
            item("b", "09:30", "10:00"),
            item("c", "10:00", "11:00"),
            item("d", "13:05", "14:00"),
        ];
        let gaps = compute_gaps(&items);

        let summary: Vec<(&str, i64)> = gaps
            .iter()
            .map(|g| (g.after_item_id.as_str(), g.minutes))
            .collect();
        assert_eq!(summary, vec![("a", 30), ("c", 125)]);
    }

    #[test]
    fn test_build_timeline_interleaves_gaps() {
        let items = vec![
            item("a", "09:00", "10:30"),
            item("b", "10:30", "11:00"),
            item("c", "12:00", "13:00"),
        ];
        let timeline = build_timeline(&items);

        let shape: Vec<String> = timeline
            .iter()
            .map(|entry| match entry {
                TimelineEntry::Item(item) => item.id.clone(),
                TimelineEntry::Gap(gap) => gap.label(),
            })
            .collect();
        assert_eq!(shape, vec!["a", "b", "1h 0m", "c"]);
    }

    #[test]
    fn test_build_timeline_places_gap_by_position() {
        let items = vec![
            item("x", "09:00", "10:00"),
            item("x", "10:00", "11:00"),
            item("y", "12:30", "13:00"),
        ];
        let timeline = build_timeline(&items);
        assert_eq!(timeline.len(), 4);
        assert!(matches!(timeline[1], TimelineEntry::Item(_)));
        assert!(matches!(timeline[2], TimelineEntry::Gap(Gap { minutes: 90, .. })));
    }

    #[test]
    fn test_format_time_range() {
        assert_eq!(format_time_range(&item("a", "09:00", "10:30")), "09:00 - 10:30");
    }
}
