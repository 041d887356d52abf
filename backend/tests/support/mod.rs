#![allow(dead_code)]

use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

use chrono::{Datelike, Duration, NaiveDate};
use tempfile::TempDir;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Restores variables on unwind and serializes access to process-global env
/// vars across parallel tests.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

pub const FIRST_DAY: (i32, u32, u32) = (2011, 1, 1);

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Deterministic rental count for a (day offset, hour) slot.
pub fn slot_count(offset: i64, hour: u32) -> u64 {
    ((offset * 7 + hour as i64 * 3) % 50) as u64
}

/// Write the four extracts covering `days` days from 2011-01-01 into `dir`.
///
/// The weekday column is written as names in the daily summary and as codes
/// in the hourly extract, as the real extracts do.
pub fn write_extracts(dir: &Path, days: i64) {
    let start = date(FIRST_DAY.0, FIRST_DAY.1, FIRST_DAY.2);
    let mut daily = String::from("dteday,hour,weekday,sum_cnt\n");
    let mut hours =
        String::from("instant,dteday,yr,mnth,hr,weekday,casual,registered,cnt\n");
    let mut day_type = String::from("dteday,hour,day_type,sum_cnt\n");
    let mut customers = String::from("dteday,weekday,casual_sum,registered_sum\n");

    let mut instant = 0;
    for offset in 0..days {
        let day = start + Duration::days(offset);
        let weekday = day.weekday();
        let code = weekday.num_days_from_sunday();
        let name = format!("{:?}", weekday);
        let kind = if code == 0 || code == 6 { "Weekend" } else { "Weekday" };
        let mut casual_sum = 0;
        let mut registered_sum = 0;

        for hour in 0..24u32 {
            instant += 1;
            let count = slot_count(offset, hour);
            let casual = count / 3;
            let registered = count - casual;
            casual_sum += casual;
            registered_sum += registered;

            writeln!(daily, "{},{},{},{}", day, hour, full_name(&name), count).unwrap();
            writeln!(
                hours,
                "{},{},{},{},{},{},{},{},{}",
                instant,
                day,
                day.year() - 2011,
                day.month(),
                hour,
                code,
                casual,
                registered,
                count
            )
            .unwrap();
            writeln!(day_type, "{},{},{},{}", day, hour, kind, count).unwrap();
        }
        writeln!(
            customers,
            "{},{},{},{}",
            day,
            full_name(&name),
            casual_sum,
            registered_sum
        )
        .unwrap();
    }

    fs::write(dir.join("daily_hours_df.csv"), daily).unwrap();
    fs::write(dir.join("hours_df.csv"), hours).unwrap();
    fs::write(dir.join("day_type_hours_df.csv"), day_type).unwrap();
    fs::write(dir.join("cust_type_df.csv"), customers).unwrap();
}

fn full_name(short: &str) -> &'static str {
    match short {
        "Mon" => "Monday",
        "Tue" => "Tuesday",
        "Wed" => "Wednesday",
        "Thu" => "Thursday",
        "Fri" => "Friday",
        "Sat" => "Saturday",
        _ => "Sunday",
    }
}

/// A temp directory holding `days` days of extracts.
pub fn extracts_dir(days: i64) -> TempDir {
    let dir = TempDir::new().unwrap();
    write_extracts(dir.path(), days);
    dir
}
