//! Actor roster loaded from `config/actors.toml`.
use bevy::prelude::*;
use serde::Deserialize;

use crate::core::config::load_toml_or_default;

use super::components::Capabilities;

const CONFIG_PATH: &str = "config/actors.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawActorsConfig {
    #[serde(rename = "actor")]
    actors: Vec<RawActor>,
}

impl Default for RawActorsConfig {
    fn default() -> Self {
        Self {
            actors: vec![
                RawActor {
                    name: "Player".into(),
                    position: [0.0, 0.0],
                    movable: true,
                    animated: true,
                    interactable: false,
                    move_speed: 4.0,
                    sprite: RawSprite {
                        path: "2/all-2.png".into(),
                        sheet_width: 419.0,
                        frame_height: 67.0,
                        ..RawSprite::default()
                    },
                },
                RawActor {
                    name: "Wanderer".into(),
                    position: [-150.0, 0.0],
                    movable: false,
                    animated: true,
                    interactable: true,
                    move_speed: 0.0,
                    sprite: RawSprite {
                        path: "4/8-all.png".into(),
                        sheet_width: 225.0,
                        frame_height: 48.0,
                        ..RawSprite::default()
                    },
                },
                RawActor {
                    name: "Companion".into(),
                    position: [150.0, 0.0],
                    movable: false,
                    animated: false,
                    interactable: true,
                    move_speed: 0.0,
                    sprite: RawSprite {
                        path: "companion.png".into(),
                        total_frames: 1,
                        display_size: Some([70.0, 60.0]),
                        ..RawSprite::default()
                    },
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawActor {
    name: String,
    position: [f32; 2],
    movable: bool,
    animated: bool,
    interactable: bool,
    move_speed: f32,
    sprite: RawSprite,
}

impl Default for RawActor {
    fn default() -> Self {
        Self {
            name: "Actor".into(),
            position: [0.0, 0.0],
            movable: false,
            animated: false,
            interactable: false,
            move_speed: 4.0,
            sprite: RawSprite::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawSprite {
    path: String,
    sheet_width: f32,
    frame_height: f32,
    total_frames: usize,
    ticks_per_frame: u32,
    scale: f32,
    display_size: Option<[f32; 2]>,
}

impl Default for RawSprite {
    fn default() -> Self {
        Self {
            path: String::new(),
            sheet_width: 64.0,
            frame_height: 64.0,
            total_frames: 8,
            ticks_per_frame: 6,
            scale: 1.2,
            display_size: None,
        }
    }
}

/// Sprite sheet layout for one actor.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSpec {
    pub path: String,
    pub total_frames: usize,
    pub ticks_per_frame: u32,
    pub frame_size: Vec2,
    pub display_size: Vec2,
}

/// Everything needed to spawn one actor.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorSpec {
    pub name: String,
    pub position: Vec2,
    pub capabilities: Capabilities,
    pub move_speed: f32,
    pub sprite: SpriteSpec,
}

/// The actors present in the scene, in spawn order.
#[derive(Resource, Debug, Clone)]
pub struct ActorRoster {
    pub actors: Vec<ActorSpec>,
}

impl ActorRoster {
    pub fn load_or_default() -> Self {
        load_toml_or_default::<RawActorsConfig>(CONFIG_PATH).into()
    }
}

impl Default for ActorRoster {
    fn default() -> Self {
        RawActorsConfig::default().into()
    }
}

impl From<RawActorsConfig> for ActorRoster {
    fn from(value: RawActorsConfig) -> Self {
        Self {
            actors: value.actors.into_iter().map(ActorSpec::from).collect(),
        }
    }
}

impl From<RawActor> for ActorSpec {
    fn from(value: RawActor) -> Self {
        let sprite = value.sprite;
        let total_frames = sprite.total_frames.max(1);
        let scale = if sprite.scale > 0.0 { sprite.scale } else { 1.0 };
        let frame_size = Vec2::new(
            sprite.sheet_width / total_frames as f32,
            sprite.frame_height,
        );
        let display_size = sprite
            .display_size
            .map(Vec2::from)
            .unwrap_or(frame_size * scale);

        Self {
            name: value.name,
            position: Vec2::from(value.position),
            capabilities: Capabilities {
                movable: value.movable,
                animated: value.animated,
                interactable: value.interactable,
            },
            move_speed: value.move_speed.max(0.0),
            sprite: SpriteSpec {
                path: sprite.path,
                total_frames,
                ticks_per_frame: sprite.ticks_per_frame.max(1),
                frame_size,
                display_size,
            },
        }
    }
}
