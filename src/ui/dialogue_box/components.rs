// src/ui/dialogue_box/components.rs
//
// Marker components and layout settings for the dialog box.

use bevy::prelude::*;

/// Root node of the dialog box.
#[derive(Component, Debug)]
pub struct DialogueBox;

/// Text node holding the prompt or feedback message.
#[derive(Component, Debug)]
pub struct DialogueMessageText;

/// Optional second line showing the question's hint.
#[derive(Component, Debug)]
pub struct DialogueHintText;

pub const FILL_COLOR: Color = Color::WHITE;
pub const BORDER_COLOR: Color = Color::srgb(0.392, 0.392, 0.392);
pub const TEXT_COLOR: Color = Color::BLACK;

/// Layout of the dialog box in logical pixels.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct DialogueBoxStyle {
    /// Share of the window width the box may take.
    pub width_fraction: f32,
    pub max_width: f32,
    pub height: f32,
    /// Gap between the top of the window and the box.
    pub top_offset: f32,
    pub border_width: f32,
    pub font_size: f32,
    pub hint_font_size: f32,
}

impl Default for DialogueBoxStyle {
    fn default() -> Self {
        Self {
            width_fraction: 0.8,
            max_width: 600.0,
            height: 100.0,
            top_offset: 30.0,
            border_width: 2.0,
            font_size: 18.0,
            hint_font_size: 14.0,
        }
    }
}

impl DialogueBoxStyle {
    /// Box width for the given window width: a fixed share, capped.
    pub fn width_for(&self, window_width: f32) -> f32 {
        (window_width * self.width_fraction).min(self.max_width)
    }
}

/// Applies the session's 0..=255 opacity to a base colour.
pub fn tint(base: Color, alpha: u8) -> Color {
    base.with_alpha(f32::from(alpha) / 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_is_capped_on_wide_windows() {
        let style = DialogueBoxStyle::default();
        assert_eq!(style.width_for(500.0), 400.0);
        assert_eq!(style.width_for(750.0), 600.0);
        assert_eq!(style.width_for(1920.0), 600.0);
    }

    #[test]
    fn tint_scales_alpha() {
        assert_eq!(tint(TEXT_COLOR, 0).alpha(), 0.0);
        assert_eq!(tint(FILL_COLOR, 255).alpha(), 1.0);
        assert!((tint(FILL_COLOR, 220).alpha() - 220.0 / 255.0).abs() < f32::EPSILON);
    }
}
