//! Input plugin routing keyboard messages at the start of every frame.
use bevy::prelude::*;

use crate::{core::plugin::SceneSet, dialogue::systems::run_dialogue_session};

use super::{
    answer::AnswerInput,
    systems::{reset_answer_on_transition, route_answer_keys, route_direction_keys},
};

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnswerInput>().add_systems(
            Update,
            (
                (route_direction_keys, route_answer_keys).in_set(SceneSet::Input),
                reset_answer_on_transition
                    .in_set(SceneSet::Dialogue)
                    .after(run_dialogue_session),
            ),
        );
    }
}
