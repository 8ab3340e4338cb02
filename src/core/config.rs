//! Shared TOML loading used by every module's settings resource.
use std::{fs, path::Path};

use bevy::log::warn;
use serde::de::DeserializeOwned;

/// Reads and parses a TOML file, falling back to `T::default()` with a warning.
pub fn load_toml_or_default<T>(path: impl AsRef<Path>) -> T
where
    T: DeserializeOwned + Default,
{
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(data) => parse_toml_or_default(&data, path),
        Err(err) => {
            warn!(
                "Failed to read {} ({}). Falling back to defaults.",
                path.display(),
                err
            );
            T::default()
        }
    }
}

/// Parses TOML text; `origin` is only used for the warning message.
pub fn parse_toml_or_default<T>(data: &str, origin: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    match toml::from_str::<T>(data) {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!(
                "Failed to parse {} ({}). Falling back to defaults.",
                origin.display(),
                err
            );
            T::default()
        }
    }
}
