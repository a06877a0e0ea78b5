use crate::modules::attendance::core::events::AttendanceEvent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("already checked in today")]
    AlreadyCheckedIn,

    #[error("cannot check out without checking in first")]
    NotCheckedIn,

    #[error("already checked out today")]
    AlreadyCheckedOut,

    #[error("check-out must not precede check-in")]
    InvalidInterval,
}

#[derive(Debug)]
pub enum Decision {
    Accepted { events: Vec<AttendanceEvent> },
    Rejected { reason: DecideError },
}
