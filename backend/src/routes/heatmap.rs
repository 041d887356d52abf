use serde::{Deserialize, Serialize};

use crate::models::{Weekday, HOURS_PER_DAY};

/// One heatmap row: a weekday and its 24 hourly cells.
///
/// `None` marks an hour with no observations in the filtered data;
/// `Some(0)` is an observed hour whose rentals sum to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapRow {
    pub weekday: Weekday,
    pub cells: Vec<Option<u64>>,
}

/// Weekday × hour rental matrix, rows Monday first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayHourMatrix {
    pub rows: Vec<HeatmapRow>,
}

impl WeekdayHourMatrix {
    /// All 7 rows with every cell unobserved.
    pub fn empty() -> Self {
        Self {
            rows: Weekday::MONDAY_FIRST
                .iter()
                .map(|&weekday| HeatmapRow {
                    weekday,
                    cells: vec![None; HOURS_PER_DAY],
                })
                .collect(),
        }
    }

    pub fn cell(&self, weekday: Weekday, hour: u8) -> Option<u64> {
        self.rows
            .get(weekday.monday_first_index())
            .and_then(|row| row.cells.get(usize::from(hour)))
            .copied()
            .flatten()
    }

    /// Sum over the observed cells.
    pub fn total(&self) -> u64 {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter().flatten())
            .fold(0u64, |acc, &cell| acc.saturating_add(cell))
    }
}

pub const GET_HEATMAP: &str = "/rentals/heatmap";
