//! Held-direction state and the per-tick movement step.
use bevy::prelude::*;

use super::components::Facing;

/// The four directional inputs. Closed set, so held state fits in an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }
}

/// Which directions are currently held down.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldDirections([bool; 4]);

impl HeldDirections {
    pub fn set(&mut self, direction: Direction, held: bool) {
        self.0[direction.index()] = held;
    }

    pub fn is_held(&self, direction: Direction) -> bool {
        self.0[direction.index()]
    }

    pub fn any(&self) -> bool {
        self.0.iter().any(|held| *held)
    }
}

#[cfg(test)]
impl HeldDirections {
    pub fn with(mut self, direction: Direction) -> Self {
        self.set(direction, true);
        self
    }
}

/// Applies one tick of movement.
///
/// Each held direction adds `move_speed` along its axis, so two axes at once
/// travel further than one. Up decreases y. Right then Left update facing in
/// that order; vertical input never touches it. No bounds are enforced.
pub fn step(
    position: Vec2,
    facing: Facing,
    held: &HeldDirections,
    move_speed: f32,
) -> (Vec2, Facing) {
    let mut position = position;
    let mut facing = facing;

    if held.is_held(Direction::Right) {
        position.x += move_speed;
        facing = Facing::Right;
    }
    if held.is_held(Direction::Left) {
        position.x -= move_speed;
        facing = Facing::Left;
    }
    if held.is_held(Direction::Up) {
        position.y -= move_speed;
    }
    if held.is_held(Direction::Down) {
        position.y += move_speed;
    }

    (position, facing)
}
