use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum JustificationError {
    #[error("a reason is required when punching outside the office boundary")]
    Missing,
}

/// Written reason for a punch outside the office boundary. Never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Justification(String);

impl Justification {
    pub fn parse(text: &str) -> Result<Self, JustificationError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(JustificationError::Missing);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
