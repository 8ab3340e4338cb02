//! Scene presentation settings loaded from `config/scene.toml`.
use bevy::prelude::*;
use serde::Deserialize;

use crate::core::config::load_toml_or_default;

const CONFIG_PATH: &str = "config/scene.toml";

#[derive(Debug, Clone, Deserialize, Default)]
struct RawSceneConfig {
    #[serde(default)]
    background: RawBackgroundSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawBackgroundSection {
    path: Option<String>,
    clear_color: [f32; 3],
}

impl Default for RawBackgroundSection {
    fn default() -> Self {
        Self {
            path: Some("5/0.png".into()),
            clear_color: [0.86, 0.86, 0.86],
        }
    }
}

/// Backdrop drawn behind the actors.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SceneSettings {
    /// Image stretched over the whole window; `None` leaves only the clear colour.
    pub background: Option<String>,
    pub clear_color: Color,
}

impl SceneSettings {
    pub fn load_or_default() -> Self {
        load_toml_or_default::<RawSceneConfig>(CONFIG_PATH).into()
    }
}

impl Default for SceneSettings {
    fn default() -> Self {
        RawSceneConfig::default().into()
    }
}

impl From<RawSceneConfig> for SceneSettings {
    fn from(value: RawSceneConfig) -> Self {
        let [r, g, b] = value.background.clear_color;
        Self {
            background: value
                .background
                .path
                .filter(|path| !path.trim().is_empty()),
            clear_color: Color::srgb(r, g, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::parse_toml_or_default;
    use std::path::Path;

    #[test]
    fn default_uses_bundled_backdrop() {
        let settings = SceneSettings::default();
        assert_eq!(settings.background.as_deref(), Some("5/0.png"));
    }

    #[test]
    fn blank_path_disables_image() {
        let raw: RawSceneConfig =
            parse_toml_or_default("[background]\npath = \"  \"", Path::new("inline"));
        let settings = SceneSettings::from(raw);
        assert_eq!(settings.background, None);
        assert_eq!(settings.clear_color, Color::srgb(0.86, 0.86, 0.86));
    }
}
