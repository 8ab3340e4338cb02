// src/ui/dialogue_box/systems.rs
//
// Spawns the dialog box once and projects the session onto it every frame.

use bevy::{prelude::*, window::PrimaryWindow};

use crate::dialogue::{config::DialogueSettings, session::DialogueSession, types::DialoguePhase};

use super::components::{
    tint, DialogueBox, DialogueBoxStyle, DialogueHintText, DialogueMessageText, BORDER_COLOR,
    FILL_COLOR, TEXT_COLOR,
};

/// Spawns the hidden dialog box hierarchy.
pub fn spawn_dialogue_box(mut commands: Commands, style: Res<DialogueBoxStyle>) {
    commands
        .spawn((
            Node {
                display: Display::None,
                position_type: PositionType::Absolute,
                top: Val::Px(style.top_offset),
                left: Val::Percent(50.0),
                width: Val::Px(style.max_width),
                height: Val::Px(style.height),
                margin: UiRect::left(Val::Px(-style.max_width / 2.0)),
                border: UiRect::all(Val::Px(style.border_width)),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(tint(FILL_COLOR, 0)),
            BorderColor::from(tint(BORDER_COLOR, 0)),
            DialogueBox,
            Name::new("DialogueBox"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: style.font_size,
                    ..default()
                },
                TextColor(tint(TEXT_COLOR, 0)),
                DialogueMessageText,
            ));
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: style.hint_font_size,
                    ..default()
                },
                TextColor(tint(TEXT_COLOR, 0)),
                Node {
                    display: Display::None,
                    margin: UiRect::top(Val::Px(6.0)),
                    ..default()
                },
                DialogueHintText,
            ));
        });

    debug!("Dialog box spawned");
}

/// Lays the box out for the current window and tints it by the session alpha.
/// Drawn only while any opacity remains.
#[allow(clippy::type_complexity)]
pub fn update_dialogue_box(
    session: Res<DialogueSession>,
    settings: Res<DialogueSettings>,
    style: Res<DialogueBoxStyle>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut boxes: Query<
        (&mut Node, &mut BackgroundColor, &mut BorderColor),
        (With<DialogueBox>, Without<DialogueHintText>),
    >,
    mut messages: Query<
        (&mut Text, &mut TextColor),
        (With<DialogueMessageText>, Without<DialogueHintText>),
    >,
    mut hints: Query<
        (&mut Text, &mut TextColor, &mut Node),
        (With<DialogueHintText>, Without<DialogueBox>),
    >,
) {
    let alpha = session.alpha();
    let visible = session.is_dialog_visible();
    let width = windows
        .single()
        .map(|window| style.width_for(window.width()))
        .unwrap_or(style.max_width);

    for (mut node, mut background, mut border) in boxes.iter_mut() {
        node.display = if visible { Display::Flex } else { Display::None };
        node.width = Val::Px(width);
        node.margin = UiRect::left(Val::Px(-width / 2.0));
        background.0 = tint(FILL_COLOR, alpha);
        *border = BorderColor::from(tint(BORDER_COLOR, alpha));
    }

    for (mut text, mut color) in messages.iter_mut() {
        if text.0 != session.message() {
            text.0 = session.message().to_string();
        }
        color.0 = tint(TEXT_COLOR, alpha);
    }

    let hint = session
        .current_question()
        .filter(|_| settings.show_hint && session.phase() == DialoguePhase::Asking)
        .map(|question| question.hint.as_str())
        .filter(|hint| !hint.is_empty());
    for (mut text, mut color, mut node) in hints.iter_mut() {
        match hint {
            Some(hint) => {
                node.display = Display::Flex;
                if text.0 != hint {
                    text.0 = hint.to_string();
                }
                color.0 = tint(TEXT_COLOR, alpha);
            }
            None => node.display = Display::None,
        }
    }
}
