//! Error types surfaced by the dialogue state machine.
use thiserror::Error;

use crate::quiz::errors::EmptyQuestionBank;

use super::types::DialoguePhase;

/// Failures raised by dialogue transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialogueError {
    /// A question was needed but the bank has no entries.
    #[error("cannot start a quiz: {0}")]
    EmptyQuestionBank(#[from] EmptyQuestionBank),
    /// An answer arrived while no question was being asked. Callers treat this
    /// as a no-op.
    #[error("answer submitted while {phase}")]
    InvalidSubmissionContext { phase: DialoguePhase },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_describe_context() {
        let empty = DialogueError::from(EmptyQuestionBank);
        assert_eq!(empty.to_string(), "cannot start a quiz: question bank is empty");

        let stray = DialogueError::InvalidSubmissionContext {
            phase: DialoguePhase::Feedback,
        };
        assert_eq!(stray.to_string(), "answer submitted while feedback");
    }
}
