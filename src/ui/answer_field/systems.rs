// src/ui/answer_field/systems.rs
//
// Spawns the answer field and keeps it above the player while a question is open.

use bevy::prelude::*;

use crate::{
    actor::components::{DisplaySize, Mover, WorldPosition},
    actor::systems::scene_to_translation,
    dialogue::session::DialogueSession,
    input::answer::AnswerInput,
};

use super::components::{field_origin, AnswerField, AnswerFieldText, FIELD_SIZE};

const FIELD_BACKGROUND: Color = Color::WHITE;
const FIELD_BORDER: Color = Color::srgb(0.46, 0.46, 0.46);
const FIELD_TEXT: Color = Color::BLACK;
const FIELD_FONT_SIZE: f32 = 14.0;

/// Spawns the hidden answer field.
pub fn spawn_answer_field(mut commands: Commands) {
    commands
        .spawn((
            Node {
                display: Display::None,
                position_type: PositionType::Absolute,
                width: Val::Px(FIELD_SIZE.x),
                height: Val::Px(FIELD_SIZE.y),
                border: UiRect::all(Val::Px(1.0)),
                padding: UiRect::horizontal(Val::Px(2.0)),
                align_items: AlignItems::Center,
                overflow: Overflow::clip(),
                ..default()
            },
            BackgroundColor(FIELD_BACKGROUND),
            BorderColor::from(FIELD_BORDER),
            AnswerField,
            Name::new("AnswerField"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: FIELD_FONT_SIZE,
                    ..default()
                },
                TextColor(FIELD_TEXT),
                AnswerFieldText,
            ));
        });
}

/// Shows the field only while asking, placed above the player's head.
#[allow(clippy::type_complexity)]
pub fn update_answer_field(
    session: Res<DialogueSession>,
    answer: Res<AnswerInput>,
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
    player_query: Query<(&WorldPosition, &DisplaySize), With<Mover>>,
    mut fields: Query<&mut Node, With<AnswerField>>,
    mut texts: Query<&mut Text, With<AnswerFieldText>>,
) {
    let Ok(mut node) = fields.single_mut() else {
        return;
    };

    if !session.is_answer_field_visible() {
        node.display = Display::None;
        return;
    }

    for mut text in texts.iter_mut() {
        if text.0 != answer.text() {
            text.0 = answer.text().to_string();
        }
    }

    let Ok((camera, camera_transform)) = camera_query.single() else {
        node.display = Display::None;
        return;
    };
    let Some((position, size)) = player_query.iter().next() else {
        node.display = Display::None;
        return;
    };
    let Ok(feet) = camera.world_to_viewport(camera_transform, scene_to_translation(position.0, 0.0))
    else {
        node.display = Display::None;
        return;
    };

    let origin = field_origin(feet, size.0.y);
    node.display = Display::Flex;
    node.left = Val::Px(origin.x);
    node.top = Val::Px(origin.y);
}
