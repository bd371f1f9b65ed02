use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub cover_image: String,
}

impl Trip {
    /// Date range as shown on the trip card, e.g. `2025-03-01 - 2025-03-05`
    #[must_use]
    pub fn date_range_label(&self) -> String {
        format!("{} - {}", self.start_date, self.end_date)
    }

    /// Total number of calendar days covered, inclusive of both ends
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days().max(0) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_trip_list() {
        let json = r#"[
            {"id": "tokyo-2025", "name": "Tokyo", "startDate": "2025-03-01", "endDate": "2025-03-05", "coverImage": "/img/tokyo.jpg"},
            {"id": "osaka", "name": "Osaka", "startDate": "2025-04-10", "endDate": "2025-04-10"}
        ]"#;
        let trips: Vec<Trip> = serde_json::from_str(json).expect("valid trips");

        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].id, "tokyo-2025");
        assert_eq!(trips[0].cover_image, "/img/tokyo.jpg");
        assert_eq!(trips[1].cover_image, "");
    }

    #[test]
    fn test_date_range_and_duration() {
        let trip = Trip {
            id: "t".to_string(),
            name: "T".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 5).expect("valid date"),
            cover_image: String::new(),
        };

        assert_eq!(trip.date_range_label(), "2025-03-01 - 2025-03-05");
        assert_eq!(trip.duration_days(), 5);
    }
}
