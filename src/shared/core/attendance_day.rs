// Attendance day contract shared by the attendance service and the check-in flow.
//
// The service owns the day; the flow only reads it to pick the next action.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceDayState {
    pub is_checked_in: bool,
    /// Epoch milliseconds.
    pub check_in_time: Option<i64>,
    /// Epoch milliseconds.
    pub check_out_time: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceAction {
    CheckIn,
    CheckOut,
}

impl fmt::Display for AttendanceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendanceAction::CheckIn => f.write_str("check-in"),
            AttendanceAction::CheckOut => f.write_str("check-out"),
        }
    }
}

/// Where the employee stands in the current calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayProgress {
    NotCheckedIn,
    CheckedInOnly,
    DayComplete,
}

impl DayProgress {
    pub fn next_action(self) -> Option<AttendanceAction> {
        match self {
            DayProgress::NotCheckedIn => Some(AttendanceAction::CheckIn),
            DayProgress::CheckedInOnly => Some(AttendanceAction::CheckOut),
            DayProgress::DayComplete => None,
        }
    }
}

impl AttendanceDayState {
    pub fn progress(&self) -> DayProgress {
        let checked_in = self.is_checked_in || self.check_in_time.is_some();
        match (checked_in, self.check_out_time) {
            (_, Some(_)) => DayProgress::DayComplete,
            (true, None) => DayProgress::CheckedInOnly,
            (false, None) => DayProgress::NotCheckedIn,
        }
    }
}
