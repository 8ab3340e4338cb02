//! The quiz dialogue state machine.
use bevy::prelude::Resource;

use crate::quiz::{Question, QuestionBank, QuizRng};

use super::{
    errors::DialogueError,
    types::{
        AnswerOutcome, DialoguePhase, DialogueSnapshot, DialogueState, DialogueTransition,
        FeedbackTicket,
    },
};

/// Quiz session shared by the whole scene. Created once and kept idle between
/// sessions.
///
/// `generation` advances every time a question is drawn or the session ends.
/// Feedback tickets carry the generation they were issued in, so a timer that
/// outlives its session can never act on a newer one.
#[derive(Resource, Debug, Default)]
pub struct DialogueSession {
    state: DialogueState,
    message: String,
    alpha: u8,
    generation: u64,
}

impl DialogueSession {
    pub fn phase(&self) -> DialoguePhase {
        self.state.phase()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.state.question()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// The dialog box is drawn while any opacity remains, including the
    /// trailing fade after the session ends.
    pub fn is_dialog_visible(&self) -> bool {
        self.alpha > 0
    }

    /// The answer field is shown only while a question awaits an answer.
    pub fn is_answer_field_visible(&self) -> bool {
        matches!(self.state, DialogueState::Asking { .. })
    }

    pub fn snapshot(&self) -> DialogueSnapshot {
        DialogueSnapshot {
            phase: self.phase(),
            message: self.message.clone(),
            alpha: self.alpha,
            generation: self.generation,
        }
    }

    /// Applies the per-tick proximity signal.
    ///
    /// Idle and in range draws a question. Asking or feedback and out of range
    /// ends the session at once. Every other combination is a no-op.
    pub fn evaluate_proximity(
        &mut self,
        active: bool,
        bank: &QuestionBank,
        rng: &mut QuizRng,
    ) -> Result<Option<DialogueTransition>, DialogueError> {
        match (self.phase(), active) {
            (DialoguePhase::Idle, true) => self.begin_question(bank, rng).map(Some),
            (DialoguePhase::Idle, false) => Ok(None),
            (_, true) => Ok(None),
            (_, false) => Ok(Some(self.end_session())),
        }
    }

    /// Evaluates an answer. Only valid while asking.
    ///
    /// The text is trimmed and compared exactly, case included. Returns the
    /// ticket the caller must schedule for the end of the feedback window.
    pub fn submit(&mut self, text: &str) -> Result<(AnswerOutcome, FeedbackTicket), DialogueError> {
        let question = match std::mem::take(&mut self.state) {
            DialogueState::Asking { question } => question,
            other => {
                let phase = other.phase();
                self.state = other;
                return Err(DialogueError::InvalidSubmissionContext { phase });
            }
        };

        let outcome = if text.trim() == question.answer {
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Wrong
        };
        self.message = match outcome {
            AnswerOutcome::Correct => question.correct_feedback.clone(),
            AnswerOutcome::Wrong => question.wrong_feedback.clone(),
        };

        let ticket = FeedbackTicket::new(self.generation);
        self.state = DialogueState::Feedback { question, ticket };
        Ok((outcome, ticket))
    }

    /// Handles the end of a feedback window.
    ///
    /// Stale tickets are discarded and yield `Ok(None)`. Otherwise the session
    /// asks a fresh question if the player is still in range, or ends.
    pub fn resolve_feedback(
        &mut self,
        ticket: FeedbackTicket,
        active: bool,
        bank: &QuestionBank,
        rng: &mut QuizRng,
    ) -> Result<Option<DialogueTransition>, DialogueError> {
        match &self.state {
            DialogueState::Feedback { ticket: current, .. } if *current == ticket => {}
            _ => return Ok(None),
        }

        if !active {
            return Ok(Some(self.end_session()));
        }

        match self.begin_question(bank, rng) {
            Ok(transition) => Ok(Some(transition)),
            Err(err) => {
                self.end_session();
                Err(err)
            }
        }
    }

    /// Moves alpha one step toward `max_alpha` while a session is open and
    /// toward zero while idle.
    pub fn fade(&mut self, step: u8, max_alpha: u8) {
        self.alpha = match self.state {
            DialogueState::Idle => self.alpha.saturating_sub(step),
            _ => self.alpha.saturating_add(step).min(max_alpha),
        };
    }

    fn begin_question(
        &mut self,
        bank: &QuestionBank,
        rng: &mut QuizRng,
    ) -> Result<DialogueTransition, DialogueError> {
        let question = bank.pick_random(rng)?.clone();
        self.generation += 1;
        self.message = question.prompt.clone();
        self.state = DialogueState::Asking { question };
        Ok(DialogueTransition::Asked)
    }

    fn end_session(&mut self) -> DialogueTransition {
        self.generation += 1;
        self.message.clear();
        self.state = DialogueState::Idle;
        DialogueTransition::Ended
    }
}
