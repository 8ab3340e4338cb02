//! Text buffer behind the on-screen answer field.
use bevy::{input::keyboard::Key, prelude::Resource};

/// Characters typed since the field was last cleared.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerInput {
    text: String,
}

impl AnswerInput {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Applies one pressed key. Returns the full buffer on Enter and leaves the
    /// field empty; every other key edits the buffer and returns `None`.
    pub fn apply_key(&mut self, key: &Key) -> Option<String> {
        match key {
            Key::Enter => Some(std::mem::take(&mut self.text)),
            Key::Backspace => {
                self.text.pop();
                None
            }
            Key::Space => {
                self.text.push(' ');
                None
            }
            Key::Character(chars) => {
                self.text
                    .extend(chars.as_str().chars().filter(|c| !c.is_control()));
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(input: &mut AnswerInput, text: &str) {
        for c in text.chars() {
            let key = if c == ' ' {
                Key::Space
            } else {
                Key::Character(c.to_string().as_str().into())
            };
            assert_eq!(input.apply_key(&key), None);
        }
    }

    #[test]
    fn enter_yields_buffer_and_clears_it() {
        let mut input = AnswerInput::default();
        type_str(&mut input, "4 2");
        assert_eq!(input.text(), "4 2");

        assert_eq!(input.apply_key(&Key::Enter), Some("4 2".to_string()));
        assert_eq!(input.text(), "");
        assert_eq!(input.apply_key(&Key::Enter), Some(String::new()));
    }

    #[test]
    fn backspace_pops_and_tolerates_empty() {
        let mut input = AnswerInput::default();
        type_str(&mut input, "ab");
        input.apply_key(&Key::Backspace);
        assert_eq!(input.text(), "a");
        input.apply_key(&Key::Backspace);
        input.apply_key(&Key::Backspace);
        assert_eq!(input.text(), "");
    }

    #[test]
    fn navigation_keys_are_ignored() {
        let mut input = AnswerInput::default();
        type_str(&mut input, "x");
        assert_eq!(input.apply_key(&Key::ArrowLeft), None);
        assert_eq!(input.apply_key(&Key::Shift), None);
        assert_eq!(input.text(), "x");
    }
}
