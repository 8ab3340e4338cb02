// src/ui/answer_field/components.rs
//
// Markers and placement for the floating answer field.

use bevy::prelude::*;

/// Root node of the answer field.
#[derive(Component, Debug)]
pub struct AnswerField;

/// Text node echoing the typed answer.
#[derive(Component, Debug)]
pub struct AnswerFieldText;

/// Size of the field in logical pixels.
pub const FIELD_SIZE: Vec2 = Vec2::new(100.0, 20.0);

/// Gap between the top of the player's sprite and the field.
pub const HEAD_CLEARANCE: f32 = 40.0;

/// Top-left corner of the field, centred over the player.
///
/// `feet` is the player's position in viewport pixels (origin top-left, y
/// down); the field's top edge sits `display_height + HEAD_CLEARANCE` above it.
pub fn field_origin(feet: Vec2, display_height: f32) -> Vec2 {
    Vec2::new(
        feet.x - FIELD_SIZE.x / 2.0,
        feet.y - display_height - HEAD_CLEARANCE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_sits_centred_above_head() {
        let origin = field_origin(Vec2::new(400.0, 300.0), 80.4);
        assert_eq!(origin.x, 350.0);
        assert!((origin.y - (300.0 - 80.4 - 40.0)).abs() < 1e-4);
    }
}
