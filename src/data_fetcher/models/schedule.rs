use crate::constants::columns;
use crate::data_fetcher::csv::CsvRecord;
use serde::{Deserialize, Serialize};

/// One scheduled game from the schedule sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScheduleRow {
    /// Game day as `M/D` without zero padding.
    pub date: String,
    pub team1: String,
    pub team2: String,
}

impl ScheduleRow {
    pub fn new(date: impl Into<String>, team1: impl Into<String>, team2: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            team1: team1.into(),
            team2: team2.into(),
        }
    }

    pub fn from_record(record: &CsvRecord) -> Self {
        Self {
            date: record.get_or_empty(columns::DATE).to_string(),
            team1: record.get_or_empty(columns::TEAM_1).to_string(),
            team2: record.get_or_empty(columns::TEAM_2).to_string(),
        }
    }
}
