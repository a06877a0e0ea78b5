pub mod commands {
    pub mod record_attendance;
}
pub mod events;
pub mod fakes;
