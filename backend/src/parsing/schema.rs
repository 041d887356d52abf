//! Column contracts of the four extracts and the error raised when a file
//! breaks them.

/// Dataset labels used in error messages and logs.
pub const DAILY_HOURS: &str = "daily_hours";
pub const HOURS: &str = "hours";
pub const DAY_TYPE_HOURS: &str = "day_type_hours";
pub const CUSTOMER_TYPE: &str = "customer_type";

pub const DAILY_HOURS_COLUMNS: [&str; 4] = ["dteday", "hour", "weekday", "sum_cnt"];
pub const HOURS_COLUMNS: [&str; 8] = [
    "dteday",
    "hr",
    "yr",
    "mnth",
    "weekday",
    "casual",
    "registered",
    "cnt",
];
pub const DAY_TYPE_HOURS_COLUMNS: [&str; 4] = ["dteday", "hour", "day_type", "sum_cnt"];
pub const CUSTOMER_TYPE_COLUMNS: [&str; 4] = ["dteday", "weekday", "casual_sum", "registered_sum"];
/// Present when the customer-type extract is hour-bucketed.
pub const CUSTOMER_TYPE_OPTIONAL_COLUMNS: [&str; 1] = ["hour"];

/// A load-time violation of an extract's column contract.
///
/// Rows are reported 0-based, excluding the header.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("{dataset}: missing required column '{column}'")]
    MissingColumn {
        dataset: &'static str,
        column: &'static str,
    },

    #[error("{dataset}: missing value in column '{column}' at row {row}")]
    MissingValue {
        dataset: &'static str,
        column: &'static str,
        row: usize,
    },

    #[error("{dataset}: invalid value '{value}' in column '{column}' at row {row}: {reason}")]
    InvalidValue {
        dataset: &'static str,
        column: &'static str,
        row: usize,
        value: String,
        reason: String,
    },
}

impl SchemaError {
    pub fn dataset(&self) -> &'static str {
        match self {
            Self::MissingColumn { dataset, .. }
            | Self::MissingValue { dataset, .. }
            | Self::InvalidValue { dataset, .. } => dataset,
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            Self::MissingColumn { column, .. }
            | Self::MissingValue { column, .. }
            | Self::InvalidValue { column, .. } => column,
        }
    }
}
