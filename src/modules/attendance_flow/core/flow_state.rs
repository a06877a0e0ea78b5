use std::fmt;

/// Observable state of one check-in/check-out attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    Idle,
    LocatingPrimary,
    LocatingFallback,
    AwaitingJustification,
    Submitting,
    Settled,
    Failed,
}

impl FlowState {
    /// True while an attempt owns the controller.
    pub fn is_busy(self) -> bool {
        matches!(
            self,
            FlowState::LocatingPrimary
                | FlowState::LocatingFallback
                | FlowState::AwaitingJustification
                | FlowState::Submitting
        )
    }
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlowState::Idle => "idle",
            FlowState::LocatingPrimary => "locating_primary",
            FlowState::LocatingFallback => "locating_fallback",
            FlowState::AwaitingJustification => "awaiting_justification",
            FlowState::Submitting => "submitting",
            FlowState::Settled => "settled",
            FlowState::Failed => "failed",
        };
        f.write_str(name)
    }
}
