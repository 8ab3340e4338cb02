// src/ui/plugin.rs
//
// UiPlugin spawns the quiz UI and refreshes it in the present stage.

use bevy::prelude::*;

use crate::core::plugin::SceneSet;

use super::{
    answer_field::systems::{spawn_answer_field, update_answer_field},
    dialogue_box::{
        components::DialogueBoxStyle,
        systems::{spawn_dialogue_box, update_dialogue_box},
    },
};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        info!("UiPlugin registered");

        app.init_resource::<DialogueBoxStyle>()
            .add_systems(Startup, (spawn_dialogue_box, spawn_answer_field))
            .add_systems(
                Update,
                (update_dialogue_box, update_answer_field).in_set(SceneSet::Present),
            );
    }
}
