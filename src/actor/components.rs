//! Actor components and the capability flag set used to compose them.
use bevy::prelude::*;

/// Position in scene units with y growing downward. This is the single source
/// of truth for proximity and rendering; `Transform` is derived from it.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldPosition(pub Vec2);

/// Horizontal mirroring applied to the actor's sprite.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// On-screen size of the actor's sprite, used to anchor UI above its head.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct DisplaySize(pub Vec2);

/// Which per-tick behaviours an actor takes part in.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// Driven by held direction keys.
    pub movable: bool,
    /// Carries a sprite sheet animation clock.
    pub animated: bool,
    /// Approaching it opens a quiz.
    pub interactable: bool,
}

impl Capabilities {
    pub const PLAYER: Self = Self {
        movable: true,
        animated: true,
        interactable: false,
    };
    pub const ANIMATED_NPC: Self = Self {
        movable: false,
        animated: true,
        interactable: true,
    };
    pub const STATIC_NPC: Self = Self {
        movable: false,
        animated: false,
        interactable: true,
    };

    /// Short label for logs. Flag sets outside the three stock roles are
    /// reported as custom.
    pub fn role(self) -> &'static str {
        match self {
            Self::PLAYER => "player",
            Self::ANIMATED_NPC => "animated npc",
            Self::STATIC_NPC => "static npc",
            _ => "custom",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_flag_sets_have_roles() {
        assert_eq!(Capabilities::PLAYER.role(), "player");
        assert_eq!(Capabilities::ANIMATED_NPC.role(), "animated npc");
        assert_eq!(Capabilities::STATIC_NPC.role(), "static npc");
        assert_eq!(Capabilities::default().role(), "custom");
    }
}

/// Present on movable actors; holds the per-tick displacement.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Mover {
    pub move_speed: f32,
}

/// Marker for actors that trigger the quiz when the player is close.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Interactable;
