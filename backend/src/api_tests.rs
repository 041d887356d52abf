#[cfg(test)]
mod tests {
    use crate::api::{
        HourCount, MonthlyPoint, UserType, UserTypeEntry, WeekdayCount, WeekdayHourMatrix,
    };
    use crate::models::{DateRange, HourRange, UsageFilter, Weekday};
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_weekday_count_json() {
        let entry = WeekdayCount {
            weekday: Weekday::Monday,
            count: 12,
        };
        assert_eq!(
            serde_json::to_value(entry).unwrap(),
            json!({"weekday": "Monday", "count": 12})
        );
    }

    #[test]
    fn test_hour_count_json() {
        let entry = HourCount { hour: 8, count: 3 };
        assert_eq!(serde_json::to_value(entry).unwrap(), json!({"hour": 8, "count": 3}));
    }

    #[test]
    fn test_monthly_point_json() {
        let point = MonthlyPoint {
            year: 2012,
            month: 2,
            label: "Feb".to_string(),
            count: 99,
        };
        assert_eq!(
            serde_json::to_value(point).unwrap(),
            json!({"year": 2012, "month": 2, "label": "Feb", "count": 99})
        );
    }

    #[test]
    fn test_user_type_entry_json() {
        let entry = UserTypeEntry {
            weekday: Weekday::Sunday,
            user_type: UserType::Casual,
            count: 5,
        };
        assert_eq!(
            serde_json::to_value(entry).unwrap(),
            json!({"weekday": "Sunday", "user_type": "casual", "count": 5})
        );
    }

    #[test]
    fn test_heatmap_unobserved_cells_are_null() {
        let mut matrix = WeekdayHourMatrix::empty();
        matrix.rows[0].cells[8] = Some(0);
        let value = serde_json::to_value(&matrix).unwrap();

        let monday = &value["rows"][0];
        assert_eq!(monday["weekday"], "Monday");
        assert_eq!(monday["cells"][8], json!(0));
        assert!(monday["cells"][9].is_null());
    }

    #[test]
    fn test_filter_json_uses_iso_dates() {
        let filter = UsageFilter::new(
            DateRange::new(
                NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2011, 1, 7).unwrap(),
            ),
            HourRange::new(8, 8),
        );
        assert_eq!(
            serde_json::to_value(filter).unwrap(),
            json!({
                "dates": {"start": "2011-01-01", "end": "2011-01-07"},
                "hours": {"start": 8, "end": 8}
            })
        );
    }
}
