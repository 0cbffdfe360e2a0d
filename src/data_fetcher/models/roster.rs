use crate::constants::{columns, scoring};
use crate::data_fetcher::csv::CsvRecord;
use serde::{Deserialize, Serialize};

/// One player row from the roster sheet. Values are kept as published;
/// interpretation happens through the accessor methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RosterRow {
    pub team: String,
    /// Raw `playing?` cell, "yes" in any case means active.
    pub playing: String,
    /// `None` when the row is too short to contain the column.
    pub user_id: Option<String>,
    pub handle: String,
    /// Raw `deductions` cell, parsed by [`crate::data_fetcher::processors::parse_deduction`].
    pub deduction: String,
    pub role: String,
}

impl RosterRow {
    pub fn from_record(record: &CsvRecord) -> Self {
        Self {
            team: record.get_or_empty(columns::TEAM).to_string(),
            playing: record.get_or_empty(columns::PLAYING).to_string(),
            user_id: record.get(columns::USER_ID).map(str::to_string),
            handle: record.get_or_empty(columns::HANDLE).to_string(),
            deduction: record.get_or_empty(columns::DEDUCTIONS).to_string(),
            role: record.get_or_empty(columns::ROLE).to_string(),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing.trim().eq_ignore_ascii_case("yes")
    }

    pub fn is_captain(&self) -> bool {
        self.role.trim().eq_ignore_ascii_case("captain")
    }

    /// Handle used in display lines.
    pub fn display_handle(&self) -> &str {
        match self.handle.trim() {
            "" => scoring::UNKNOWN_HANDLE,
            handle => handle,
        }
    }

    /// User id usable for a statistics lookup; `None` when blank or the
    /// sheet's "not found" placeholder.
    pub fn resolved_user_id(&self) -> Option<&str> {
        self.user_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty() && *id != scoring::MISSING_ID_SENTINEL)
    }
}
