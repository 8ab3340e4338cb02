//! Messages flowing into and out of the dialogue session.
use bevy::prelude::Message;

use super::{
    errors::DialogueError,
    types::{DialogueSnapshot, DialogueTransition, FeedbackTicket},
};

/// Raw answer text delivered when the player presses Enter in the answer field.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct AnswerSubmitted {
    pub text: String,
}

/// Fired when a scheduled feedback window elapses.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackTimerFired {
    pub ticket: FeedbackTicket,
}

/// Fired after every state change of the session.
#[derive(Message, Debug, Clone)]
pub struct DialogueTransitioned {
    pub transition: DialogueTransition,
    pub snapshot: DialogueSnapshot,
}

/// Fired once per approach when the session could not open a question.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct DialogueFailed {
    pub error: DialogueError,
}
