//! State, ticket, and outcome types exposed by the dialogue module.
use std::fmt;

use serde::Serialize;

use crate::quiz::Question;

/// Quiz state. The question travels with the variant, so it is present
/// exactly when the session is not idle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogueState {
    #[default]
    Idle,
    Asking {
        question: Question,
    },
    Feedback {
        question: Question,
        ticket: FeedbackTicket,
    },
}

impl DialogueState {
    pub fn phase(&self) -> DialoguePhase {
        match self {
            Self::Idle => DialoguePhase::Idle,
            Self::Asking { .. } => DialoguePhase::Asking,
            Self::Feedback { .. } => DialoguePhase::Feedback,
        }
    }

    pub fn question(&self) -> Option<&Question> {
        match self {
            Self::Idle => None,
            Self::Asking { question } | Self::Feedback { question, .. } => Some(question),
        }
    }
}

/// Payload-free view of [`DialogueState`] for logs and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DialoguePhase {
    Idle,
    Asking,
    Feedback,
}

impl DialoguePhase {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Asking => "asking",
            Self::Feedback => "feedback",
        }
    }
}

impl fmt::Display for DialoguePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Session generation stamped on a scheduled feedback event. The event is
/// honoured only if the session is still in that generation's feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FeedbackTicket(u64);

impl FeedbackTicket {
    pub fn new(generation: u64) -> Self {
        Self(generation)
    }
}

impl fmt::Display for FeedbackTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gen-{}", self.0)
    }
}

/// Result of comparing a trimmed submission against the expected answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerOutcome {
    Correct,
    Wrong,
}

/// State changes reported to the rest of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DialogueTransition {
    /// A new question was drawn and is being asked.
    Asked,
    /// An answer was evaluated and feedback is showing.
    Answered { outcome: AnswerOutcome },
    /// The session returned to idle.
    Ended,
}

/// Serializable view of the session for structured logging.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DialogueSnapshot {
    pub phase: DialoguePhase,
    pub message: String,
    pub alpha: u8,
    pub generation: u64,
}
