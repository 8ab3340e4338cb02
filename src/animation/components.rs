//! Animation clock component.
use bevy::prelude::*;

/// Cyclic frame index advanced every `ticks_per_frame` ticks.
///
/// Frames are laid out left to right in a single-row sheet, so the source
/// rectangle of frame `n` starts at `n * frame_size.x`.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct SpriteAnimation {
    total_frames: usize,
    ticks_per_frame: u32,
    frame_size: Vec2,
    frame: usize,
    counter: u32,
}

impl SpriteAnimation {
    /// Creates a clock at frame 0. Zero frame counts or speeds are raised to 1.
    pub fn new(total_frames: usize, ticks_per_frame: u32, frame_size: Vec2) -> Self {
        Self {
            total_frames: total_frames.max(1),
            ticks_per_frame: ticks_per_frame.max(1),
            frame_size,
            frame: 0,
            counter: 0,
        }
    }

    pub fn tick(&mut self) {
        self.counter += 1;
        if self.counter >= self.ticks_per_frame {
            self.counter = 0;
            self.frame = (self.frame + 1) % self.total_frames;
        }
    }

    /// Pixel rectangle of the current frame inside the sheet.
    pub fn source_rect(&self) -> Rect {
        let min = Vec2::new(self.frame as f32 * self.frame_size.x, 0.0);
        Rect::from_corners(min, min + self.frame_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_once_per_speed_ticks() {
        let mut animation = SpriteAnimation::new(8, 6, Vec2::new(52.375, 67.0));

        for _ in 0..5 {
            animation.tick();
        }
        assert_eq!(animation.frame, 0);

        animation.tick();
        assert_eq!(animation.frame, 1);

        for _ in 0..6 {
            animation.tick();
        }
        assert_eq!(animation.frame, 2);
    }

    #[test]
    fn wraps_after_last_frame() {
        let mut animation = SpriteAnimation::new(3, 1, Vec2::ONE);
        let frames: Vec<usize> = (0..7)
            .map(|_| {
                animation.tick();
                animation.frame
            })
            .collect();
        assert_eq!(frames, vec![1, 2, 0, 1, 2, 0, 1]);
    }

    #[test]
    fn source_rect_tracks_current_frame() {
        let mut animation = SpriteAnimation::new(8, 1, Vec2::new(28.125, 48.0));
        animation.tick();
        animation.tick();

        let rect = animation.source_rect();
        assert_eq!(rect.min, Vec2::new(56.25, 0.0));
        assert_eq!(rect.max, Vec2::new(84.375, 48.0));
    }

    #[test]
    fn degenerate_parameters_are_clamped() {
        let mut animation = SpriteAnimation::new(0, 0, Vec2::ONE);
        assert_eq!(animation.total_frames, 1);
        animation.tick();
        assert_eq!(animation.frame, 0);
    }
}
