pub mod v1 {
    pub mod checked_in;
    pub mod checked_out;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum AttendanceEvent {
    CheckedInV1(v1::checked_in::CheckedInV1),
    CheckedOutV1(v1::checked_out::CheckedOutV1),
}
