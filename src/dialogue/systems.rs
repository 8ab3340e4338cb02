//! Systems driving the dialogue session each frame.
use bevy::{
    ecs::message::{MessageReader, MessageWriter},
    prelude::*,
};
use serde::Serialize;

use crate::{
    actor::proximity::ProximityProbe,
    core::plugin::SceneClock,
    quiz::{QuestionBank, QuizRng},
};

use super::{
    config::DialogueSettings,
    errors::DialogueError,
    events::{AnswerSubmitted, DialogueFailed, DialogueTransitioned, FeedbackTimerFired},
    schedule::FeedbackSchedule,
    session::DialogueSession,
    types::{DialogueSnapshot, DialogueTransition},
};

/// Releases feedback timers whose delay elapsed during the last frame.
pub fn advance_feedback_schedule(
    clock: Res<SceneClock>,
    mut schedule: ResMut<FeedbackSchedule>,
    mut fired: MessageWriter<FeedbackTimerFired>,
) {
    if schedule.is_empty() {
        return;
    }
    for ticket in schedule.advance(clock.last_scaled_delta()) {
        debug!(target: "dialogue", "Feedback window {} elapsed", ticket);
        fired.write(FeedbackTimerFired { ticket });
    }
}

/// Runs the state machine: elapsed feedback windows first, then answers, then
/// the fresh proximity signal.
#[allow(clippy::too_many_arguments)]
pub fn run_dialogue_session(
    mut session: ResMut<DialogueSession>,
    mut schedule: ResMut<FeedbackSchedule>,
    mut quiz_rng: ResMut<QuizRng>,
    bank: Res<QuestionBank>,
    settings: Res<DialogueSettings>,
    probe: ProximityProbe,
    mut fired: MessageReader<FeedbackTimerFired>,
    mut submissions: MessageReader<AnswerSubmitted>,
    mut transitions: MessageWriter<DialogueTransitioned>,
    mut failures: MessageWriter<DialogueFailed>,
    mut empty_bank_reported: Local<bool>,
) {
    let active = probe.any_in_range(settings.proximity_threshold);
    let rng = &mut *quiz_rng;

    if !active {
        *empty_bank_reported = false;
    }

    for event in fired.read() {
        let result = session.resolve_feedback(event.ticket, active, &bank, rng);
        if matches!(result, Ok(None)) {
            debug!(
                target: "dialogue",
                "Discarding stale feedback ticket {}",
                event.ticket
            );
        }
        apply_result(
            &session,
            &mut schedule,
            &mut transitions,
            &mut failures,
            &mut empty_bank_reported,
            result,
        );
    }

    for event in submissions.read() {
        match session.submit(&event.text) {
            Ok((outcome, ticket)) => {
                schedule.schedule(ticket, settings.feedback_delay);
                transitions.write(DialogueTransitioned {
                    transition: DialogueTransition::Answered { outcome },
                    snapshot: session.snapshot(),
                });
            }
            Err(err) => debug!(target: "dialogue", "Ignoring answer: {}", err),
        }
    }

    let result = session.evaluate_proximity(active, &bank, rng);
    apply_result(
        &session,
        &mut schedule,
        &mut transitions,
        &mut failures,
        &mut empty_bank_reported,
        result,
    );
}

fn apply_result(
    session: &DialogueSession,
    schedule: &mut FeedbackSchedule,
    transitions: &mut MessageWriter<DialogueTransitioned>,
    failures: &mut MessageWriter<DialogueFailed>,
    empty_bank_reported: &mut bool,
    result: Result<Option<DialogueTransition>, DialogueError>,
) {
    match result {
        Ok(Some(transition)) => {
            if transition == DialogueTransition::Ended {
                let cancelled = schedule.cancel_all();
                if cancelled > 0 {
                    debug!(
                        target: "dialogue",
                        "Cancelled {} pending feedback timer(s)",
                        cancelled
                    );
                }
            }
            transitions.write(DialogueTransitioned {
                transition,
                snapshot: session.snapshot(),
            });
        }
        Ok(None) => {}
        Err(err) => {
            if !*empty_bank_reported {
                error!(target: "dialogue", "{}", err);
                failures.write(DialogueFailed { error: err });
                *empty_bank_reported = true;
            }
        }
    }
}

/// Steps the dialog box opacity toward its target for the current state.
pub fn fade_dialogue(mut session: ResMut<DialogueSession>, settings: Res<DialogueSettings>) {
    session.fade(settings.fade_step, settings.max_alpha);
}

#[derive(Serialize)]
struct TransitionLogLine<'a> {
    transition: &'a DialogueTransition,
    #[serde(flatten)]
    snapshot: &'a DialogueSnapshot,
}

/// Writes each transition as a single JSON log line.
pub fn log_dialogue_transitions(mut transitions: MessageReader<DialogueTransitioned>) {
    for event in transitions.read() {
        let line = TransitionLogLine {
            transition: &event.transition,
            snapshot: &event.snapshot,
        };
        match serde_json::to_string(&line) {
            Ok(json) => info!(target: "dialogue", "{}", json),
            Err(err) => warn!(target: "dialogue", "Failed to encode transition: {}", err),
        }
    }
}
