use anyhow::{Context, Result};
use log::{info, warn};
use std::io::{Error as IoError, ErrorKind};
use std::path::{Path, PathBuf};

use crate::models::UsageDatasets;
use crate::parsing::csv_parser;

/// Default file names of the four extracts.
pub const DAILY_HOURS_FILE: &str = "daily_hours_df.csv";
pub const HOURS_FILE: &str = "hours_df.csv";
pub const DAY_TYPE_HOURS_FILE: &str = "day_type_hours_df.csv";
pub const CUSTOMER_TYPE_FILE: &str = "cust_type_df.csv";

/// Locations of the four extracts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub daily_hours: PathBuf,
    pub hours: PathBuf,
    pub day_type_hours: PathBuf,
    pub customer_type: PathBuf,
}

impl DataPaths {
    /// Default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            daily_hours: dir.join(DAILY_HOURS_FILE),
            hours: dir.join(HOURS_FILE),
            day_type_hours: dir.join(DAY_TYPE_HOURS_FILE),
            customer_type: dir.join(CUSTOMER_TYPE_FILE),
        }
    }
}

/// Load and validate all four extracts.
///
/// Fails on the first extract that cannot be read or breaks its column
/// contract; the error names the offending file.
pub fn load_datasets(paths: &DataPaths) -> Result<UsageDatasets> {
    for path in [
        &paths.daily_hours,
        &paths.hours,
        &paths.day_type_hours,
        &paths.customer_type,
    ] {
        ensure_exists(path)?;
    }

    let daily_hours = csv_parser::parse_daily_hours_csv(&paths.daily_hours)
        .with_context(|| format!("Failed to load {}", paths.daily_hours.display()))?;
    let hours = csv_parser::parse_hours_csv(&paths.hours)
        .with_context(|| format!("Failed to load {}", paths.hours.display()))?;
    let day_type_hours = csv_parser::parse_day_type_hours_csv(&paths.day_type_hours)
        .with_context(|| format!("Failed to load {}", paths.day_type_hours.display()))?;
    let customer_types = csv_parser::parse_customer_type_csv(&paths.customer_type)
        .with_context(|| format!("Failed to load {}", paths.customer_type.display()))?;

    let datasets = UsageDatasets::new(daily_hours, hours, day_type_hours, customer_types);
    let counts = datasets.row_counts();
    info!(
        "Loaded datasets: daily_hours={}, hours={}, day_type_hours={}, customer_types={}",
        counts.daily_hours, counts.hours, counts.day_type_hours, counts.customer_types
    );
    if datasets.is_empty() {
        warn!("All datasets are empty; every aggregate will be blank");
    }

    Ok(datasets)
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.is_file() {
        return Ok(());
    }
    Err(IoError::new(ErrorKind::NotFound, "extract file does not exist"))
        .with_context(|| format!("Failed to load {}", path.display()))
}
