//! Dialogue tuning loaded from `config/dialogue.toml`.
use std::time::Duration;

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::config::load_toml_or_default;

const CONFIG_PATH: &str = "config/dialogue.toml";

#[derive(Debug, Clone, Deserialize, Default)]
struct RawDialogueConfig {
    #[serde(default)]
    proximity: RawProximitySection,
    #[serde(default)]
    feedback: RawFeedbackSection,
    #[serde(default)]
    fade: RawFadeSection,
    #[serde(default)]
    questions: RawQuestionsSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawProximitySection {
    threshold: f32,
}

impl Default for RawProximitySection {
    fn default() -> Self {
        Self { threshold: 80.0 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawFeedbackSection {
    delay_ms: u64,
}

impl Default for RawFeedbackSection {
    fn default() -> Self {
        Self { delay_ms: 3_000 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawFadeSection {
    step: u8,
    max_alpha: u8,
}

impl Default for RawFadeSection {
    fn default() -> Self {
        Self {
            step: 15,
            max_alpha: 220,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawQuestionsSection {
    path: String,
    show_hint: bool,
}

impl Default for RawQuestionsSection {
    fn default() -> Self {
        Self {
            path: "assets/quiz.csv".into(),
            show_hint: false,
        }
    }
}

/// Tunable parameters for the quiz dialogue.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct DialogueSettings {
    /// Distance at which an interactable actor opens the quiz.
    pub proximity_threshold: f32,
    /// How long feedback stays up before the next question or idle.
    pub feedback_delay: Duration,
    pub fade_step: u8,
    pub max_alpha: u8,
    pub questions_path: String,
    /// Show the question's hint under the prompt while asking.
    pub show_hint: bool,
}

impl DialogueSettings {
    pub fn load_or_default() -> Self {
        load_toml_or_default::<RawDialogueConfig>(CONFIG_PATH).into()
    }
}

impl Default for DialogueSettings {
    fn default() -> Self {
        RawDialogueConfig::default().into()
    }
}

impl From<RawDialogueConfig> for DialogueSettings {
    fn from(value: RawDialogueConfig) -> Self {
        Self {
            proximity_threshold: value.proximity.threshold.max(0.0),
            feedback_delay: Duration::from_millis(value.feedback.delay_ms),
            fade_step: value.fade.step.max(1),
            max_alpha: value.fade.max_alpha,
            questions_path: value.questions.path,
            show_hint: value.questions.show_hint,
        }
    }
}
