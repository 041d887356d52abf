#[cfg(test)]
mod tests {
    use crate::db::repositories::LocalRepository;
    use crate::models::{
        CustomerTypeRecord, DailyHourRecord, DateRange, DayType, DayTypeHourRecord, HourRange,
        HourlyRecord, UsageDatasets, UsageFilter, Weekday,
    };
    use crate::services::dashboard::{compute_dashboard, get_dashboard_data};
    use chrono::{Datelike, Duration, NaiveDate};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Four weeks of synthetic data, every extract filled for each (date, hour).
    fn datasets() -> UsageDatasets {
        let start = date(2011, 1, 1);
        let mut data = UsageDatasets::default();
        for offset in 0..28 {
            let day = start + Duration::days(offset);
            let weekday = Weekday::of_date(day);
            for hour in 0..24u8 {
                let count = (offset as u64 % 5) * 10 + hour as u64;
                data.daily_hours.push(DailyHourRecord { date: day, hour, weekday, count });
                data.hours.push(HourlyRecord {
                    date: day,
                    hour,
                    year: day.year(),
                    month: day.month() as u8,
                    weekday,
                    casual: count / 3,
                    registered: count - count / 3,
                    count,
                });
                data.day_type_hours.push(DayTypeHourRecord {
                    date: day,
                    hour,
                    day_type: DayType::of(weekday),
                    count,
                });
            }
            data.customer_types.push(CustomerTypeRecord {
                date: day,
                hour: None,
                weekday,
                casual: offset as u64,
                registered: 2 * offset as u64,
            });
        }
        data
    }

    #[test]
    fn test_first_week_totals() {
        let data = datasets();
        let filter = UsageFilter::new(
            DateRange::new(date(2011, 1, 1), date(2011, 1, 7)),
            HourRange::ALL_DAY,
        );
        let dashboard = compute_dashboard(&data, &filter);

        let expected: u64 = data
            .daily_hours
            .iter()
            .filter(|r| r.date <= date(2011, 1, 7))
            .map(|r| r.count)
            .sum();
        let weekday_total: u64 = dashboard.by_weekday.totals.iter().map(|e| e.count).sum();
        let hour_total: u64 = dashboard.by_hour.iter().map(|e| e.count).sum();

        assert_eq!(weekday_total, expected);
        assert_eq!(hour_total, expected);
        assert_eq!(dashboard.row_counts.daily_hours, 7 * 24);
        assert_eq!(dashboard.row_counts.customer_types, 7);
        assert!(!dashboard.insufficient_data);
        assert_eq!(dashboard.rfm.distinct_dates, 7);
    }

    #[test]
    fn test_single_hour_filter() {
        let data = datasets();
        let bounds = data.bounds().unwrap();
        let filter = UsageFilter::new(bounds.date_range(), HourRange::new(8, 8));
        let dashboard = compute_dashboard(&data, &filter);

        assert!(dashboard
            .by_hour
            .iter()
            .all(|e| (e.hour == 8) == (e.count > 0)));
        assert!(dashboard.by_year_hour.iter().all(|p| p.hour == 8));
        assert!(dashboard.by_day_type.iter().all(|p| p.hour == 8));
        assert!(dashboard.rfm.rows.iter().all(|r| r.hour == 8));
        assert_eq!(dashboard.heatmap.cell(Weekday::Monday, 9), None);
        assert!(dashboard.heatmap.cell(Weekday::Monday, 8).is_some());
        // Daily-grain customer rows ignore the hour range
        assert_eq!(dashboard.row_counts.customer_types, 28);
    }

    #[test]
    fn test_filter_matching_nothing() {
        let data = datasets();
        let filter = UsageFilter::new(
            DateRange::new(date(2011, 2, 1), date(2011, 1, 1)),
            HourRange::ALL_DAY,
        );
        let dashboard = compute_dashboard(&data, &filter);

        assert!(dashboard.insufficient_data);
        assert_eq!(dashboard.by_weekday.totals.len(), 7);
        assert!(dashboard.by_weekday.totals.iter().all(|e| e.count == 0));
        assert!(dashboard.by_hour.iter().all(|e| e.count == 0));
        assert!(dashboard.by_month.is_empty());
        assert!(dashboard.by_year_hour.is_empty());
        assert!(dashboard.by_day_type.is_empty());
        assert_eq!(dashboard.heatmap.total(), 0);
        assert!(dashboard.rfm.rows.is_empty());
        assert_eq!(dashboard.by_user_type.wide.len(), 7);
        assert_eq!(dashboard.bounds, data.bounds());
    }

    #[tokio::test]
    async fn test_repository_path_matches_pure_path() {
        let data = datasets();
        let repo = LocalRepository::with_datasets(data.clone());
        let filter = UsageFilter::new(
            DateRange::new(date(2011, 1, 10), date(2011, 1, 20)),
            HourRange::new(6, 20),
        );

        let from_repo = get_dashboard_data(&repo, &filter).await.unwrap();
        assert_eq!(from_repo, compute_dashboard(&data, &filter));
    }
}
