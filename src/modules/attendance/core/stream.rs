use chrono::{DateTime, NaiveDate, Utc};

/// One stream per employee per calendar day.
pub fn attendance_day_stream_id(employee_id: &str, work_date: NaiveDate) -> String {
    format!("AttendanceDay-{employee_id}-{}", work_date.format("%Y-%m-%d"))
}

/// Work days are UTC calendar days, whatever the client's zone.
pub fn work_date_of(at: DateTime<Utc>) -> NaiveDate {
    at.date_naive()
}

/// Today's work day on the server clock.
pub fn current_work_date() -> NaiveDate {
    work_date_of(Utc::now())
}
