//! Dialogue plugin wiring the quiz session, feedback timers, and transition logging.
use bevy::prelude::*;

use crate::{
    core::plugin::SceneSet,
    quiz::{QuestionBank, QuizRng},
};

use super::{
    config::DialogueSettings,
    events::{AnswerSubmitted, DialogueFailed, DialogueTransitioned, FeedbackTimerFired},
    schedule::FeedbackSchedule,
    session::DialogueSession,
    systems::{
        advance_feedback_schedule, fade_dialogue, log_dialogue_transitions, run_dialogue_session,
    },
};

pub struct DialoguePlugin;

impl Plugin for DialoguePlugin {
    fn build(&self, app: &mut App) {
        let settings = DialogueSettings::load_or_default();
        let bank = QuestionBank::load_or_default(&settings.questions_path);

        app.insert_resource(settings)
            .insert_resource(bank)
            .init_resource::<QuizRng>()
            .init_resource::<DialogueSession>()
            .init_resource::<FeedbackSchedule>()
            .add_message::<AnswerSubmitted>()
            .add_message::<FeedbackTimerFired>()
            .add_message::<DialogueTransitioned>()
            .add_message::<DialogueFailed>()
            .add_systems(Startup, log_dialogue_settings)
            .add_systems(
                Update,
                (
                    advance_feedback_schedule.in_set(SceneSet::Timers),
                    run_dialogue_session.in_set(SceneSet::Dialogue),
                    fade_dialogue.in_set(SceneSet::Fade),
                    log_dialogue_transitions.in_set(SceneSet::Present),
                ),
            );
    }
}

fn log_dialogue_settings(settings: Res<DialogueSettings>, bank: Res<QuestionBank>) {
    info!(
        "DialoguePlugin initialised with {} questions | threshold: {:.1} | feedback: {}ms",
        bank.len(),
        settings.proximity_threshold,
        settings.feedback_delay.as_millis()
    );
    if bank.is_empty() {
        warn!(
            target: "dialogue",
            "No questions loaded from {}; the quiz will not open",
            settings.questions_path
        );
    }
}
