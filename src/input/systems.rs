//! Systems translating keyboard state and messages into scene intents.
use bevy::{
    ecs::message::{MessageReader, MessageWriter},
    input::{keyboard::KeyboardInput, ButtonState},
    prelude::*,
};

use crate::{
    actor::movement::{Direction, HeldDirections},
    dialogue::{
        events::{AnswerSubmitted, DialogueTransitioned},
        session::DialogueSession,
        types::DialogueTransition,
    },
};

use super::answer::AnswerInput;

/// Arrow keys steer the player. Every other key is left to the answer field.
pub fn direction_for_key(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::ArrowUp => Some(Direction::Up),
        KeyCode::ArrowDown => Some(Direction::Down),
        KeyCode::ArrowLeft => Some(Direction::Left),
        KeyCode::ArrowRight => Some(Direction::Right),
        _ => None,
    }
}

fn key_for_direction(direction: Direction) -> KeyCode {
    match direction {
        Direction::Up => KeyCode::ArrowUp,
        Direction::Down => KeyCode::ArrowDown,
        Direction::Left => KeyCode::ArrowLeft,
        Direction::Right => KeyCode::ArrowRight,
    }
}

/// Mirrors the arrow keys' pressed state into the held flags every frame.
/// `ButtonInput` releases everything when the window loses keyboard focus, so
/// no flag outlives an alt-tab.
pub fn route_direction_keys(keys: Res<ButtonInput<KeyCode>>, mut held: ResMut<HeldDirections>) {
    for direction in Direction::ALL {
        held.set(direction, keys.pressed(key_for_direction(direction)));
    }
}

/// Feeds pressed keys into the answer field while a question is open and
/// submits its contents on Enter.
pub fn route_answer_keys(
    mut keys: MessageReader<KeyboardInput>,
    session: Res<DialogueSession>,
    mut answer: ResMut<AnswerInput>,
    mut submissions: MessageWriter<AnswerSubmitted>,
) {
    if !session.is_answer_field_visible() {
        keys.clear();
        return;
    }

    for event in keys.read() {
        if event.state != ButtonState::Pressed {
            continue;
        }
        if let Some(text) = answer.apply_key(&event.logical_key) {
            debug!(target: "input", "Submitting answer {:?}", text);
            submissions.write(AnswerSubmitted { text });
        }
    }
}

/// Empties the answer field whenever a question opens or the session ends.
pub fn reset_answer_on_transition(
    mut transitions: MessageReader<DialogueTransitioned>,
    mut answer: ResMut<AnswerInput>,
) {
    let reset = transitions.read().any(|event| {
        matches!(
            event.transition,
            DialogueTransition::Asked | DialogueTransition::Ended
        )
    });
    if reset {
        answer.clear();
    }
}

#[cfg(test)]
mod tests {
    use bevy::{
        ecs::message::Messages,
        input::keyboard::{Key, KeyboardFocusLost},
    };

    use super::*;
    use crate::{
        dialogue::types::{DialoguePhase, DialogueSnapshot},
        quiz::{Question, QuestionBank, QuizRng},
    };

    fn key_event(key_code: KeyCode, logical_key: Key, state: ButtonState) -> KeyboardInput {
        KeyboardInput {
            key_code,
            logical_key,
            state,
            text: None,
            repeat: false,
            window: Entity::PLACEHOLDER,
        }
    }

    fn press_char(c: &str) -> KeyboardInput {
        key_event(KeyCode::KeyA, Key::Character(c.into()), ButtonState::Pressed)
    }

    fn send(app: &mut App, event: KeyboardInput) {
        app.world_mut()
            .resource_mut::<Messages<KeyboardInput>>()
            .write(event);
    }

    #[derive(Resource, Default)]
    struct Submitted(Vec<String>);

    fn collect_submissions(mut reader: MessageReader<AnswerSubmitted>, mut out: ResMut<Submitted>) {
        out.0.extend(reader.read().map(|event| event.text.clone()));
    }

    fn asking_session() -> DialogueSession {
        let bank = QuestionBank::new(vec![Question::new("2+2?", "4", "Yes!", "No", "")]);
        let mut session = DialogueSession::default();
        let mut rng = QuizRng::seeded(1);
        session
            .evaluate_proximity(true, &bank, &mut rng)
            .expect("bank has a question");
        session
    }

    #[test]
    fn arrow_keys_map_to_directions() {
        assert_eq!(direction_for_key(KeyCode::ArrowUp), Some(Direction::Up));
        assert_eq!(direction_for_key(KeyCode::ArrowLeft), Some(Direction::Left));
        assert_eq!(direction_for_key(KeyCode::KeyW), None);
        assert_eq!(direction_for_key(KeyCode::Enter), None);
        for direction in Direction::ALL {
            assert_eq!(direction_for_key(key_for_direction(direction)), Some(direction));
        }
    }

    fn direction_app() -> App {
        let mut app = App::new();
        app.add_plugins(bevy::input::InputPlugin)
            .init_resource::<HeldDirections>()
            .add_systems(Update, route_direction_keys);
        app
    }

    #[test]
    fn press_and_release_toggle_held_flags() {
        let mut app = direction_app();

        send(
            &mut app,
            key_event(KeyCode::ArrowRight, Key::ArrowRight, ButtonState::Pressed),
        );
        send(
            &mut app,
            key_event(KeyCode::ArrowUp, Key::ArrowUp, ButtonState::Pressed),
        );
        app.update();
        let held = app.world().resource::<HeldDirections>();
        assert!(held.is_held(Direction::Right));
        assert!(held.is_held(Direction::Up));
        assert!(!held.is_held(Direction::Left));

        send(
            &mut app,
            key_event(KeyCode::ArrowRight, Key::ArrowRight, ButtonState::Released),
        );
        app.update();
        let held = app.world().resource::<HeldDirections>();
        assert!(!held.is_held(Direction::Right));
        assert!(held.is_held(Direction::Up));
    }

    #[test]
    fn losing_focus_releases_held_arrows() {
        let mut app = direction_app();

        send(
            &mut app,
            key_event(KeyCode::ArrowRight, Key::ArrowRight, ButtonState::Pressed),
        );
        app.update();
        assert!(app.world().resource::<HeldDirections>().is_held(Direction::Right));

        app.world_mut()
            .resource_mut::<Messages<KeyboardFocusLost>>()
            .write(KeyboardFocusLost);
        app.update();
        assert!(!app.world().resource::<HeldDirections>().any());

        app.update();
        assert!(!app.world().resource::<HeldDirections>().any());
    }

    fn answer_app(session: DialogueSession) -> App {
        let mut app = App::new();
        app.add_message::<KeyboardInput>()
            .add_message::<AnswerSubmitted>()
            .insert_resource(session)
            .init_resource::<AnswerInput>()
            .init_resource::<Submitted>()
            .add_systems(Update, (route_answer_keys, collect_submissions).chain());
        app
    }

    #[test]
    fn typed_answer_is_submitted_on_enter() {
        let mut app = answer_app(asking_session());

        send(&mut app, press_char("4"));
        send(&mut app, press_char("2"));
        send(
            &mut app,
            key_event(KeyCode::Backspace, Key::Backspace, ButtonState::Pressed),
        );
        app.update();
        assert_eq!(app.world().resource::<AnswerInput>().text(), "4");
        assert!(app.world().resource::<Submitted>().0.is_empty());

        send(
            &mut app,
            key_event(KeyCode::Enter, Key::Enter, ButtonState::Pressed),
        );
        app.update();
        assert_eq!(app.world().resource::<Submitted>().0, vec!["4".to_string()]);
        assert_eq!(app.world().resource::<AnswerInput>().text(), "");
    }

    #[test]
    fn keys_are_dropped_while_no_question_is_open() {
        let mut app = answer_app(DialogueSession::default());

        send(&mut app, press_char("4"));
        send(
            &mut app,
            key_event(KeyCode::Enter, Key::Enter, ButtonState::Pressed),
        );
        app.update();

        assert_eq!(app.world().resource::<AnswerInput>().text(), "");
        assert!(app.world().resource::<Submitted>().0.is_empty());
    }

    #[test]
    fn releases_do_not_type() {
        let mut app = answer_app(asking_session());
        send(
            &mut app,
            key_event(KeyCode::KeyA, Key::Character("a".into()), ButtonState::Released),
        );
        app.update();
        assert_eq!(app.world().resource::<AnswerInput>().text(), "");
    }

    #[test]
    fn new_question_resets_the_field() {
        let mut app = App::new();
        app.add_message::<DialogueTransitioned>()
            .init_resource::<AnswerInput>()
            .add_systems(Update, reset_answer_on_transition);

        app.world_mut()
            .resource_mut::<AnswerInput>()
            .apply_key(&Key::Character("9".into()));
        app.world_mut()
            .resource_mut::<Messages<DialogueTransitioned>>()
            .write(DialogueTransitioned {
                transition: DialogueTransition::Asked,
                snapshot: DialogueSnapshot {
                    phase: DialoguePhase::Asking,
                    message: "2+2?".into(),
                    alpha: 0,
                    generation: 3,
                },
            });
        app.update();

        assert_eq!(app.world().resource::<AnswerInput>().text(), "");
    }
}
