use std::io::Read;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// User-facing options recognized by the shell. Every field has a default,
/// and unknown keys in a stored blob are ignored, so older or hand-edited
/// profiles keep loading.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Ring the terminal bell on merges.
    #[serde(default = "defaults::sound")]
    pub sound: bool,

    /// Show the new-tile highlight after each spawn.
    #[serde(default = "defaults::animations")]
    pub animations: bool,

    /// Accept mouse-drag swipes as move input.
    #[serde(default = "defaults::swipe_enabled")]
    pub swipe_enabled: bool,

    /// How long the new-tile highlight stays on screen, in milliseconds.
    /// Must be positive.
    #[serde(default = "defaults::animation_speed_ms")]
    pub animation_speed_ms: u64,

    /// Color palette identifier; unrecognized names fall back to "classic".
    #[serde(default = "defaults::theme")]
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound: defaults::sound(),
            animations: defaults::animations(),
            swipe_enabled: defaults::swipe_enabled(),
            animation_speed_ms: defaults::animation_speed_ms(),
            theme: defaults::theme(),
        }
    }
}

impl Settings {
    pub fn from_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let mut file = std::fs::File::open(path.as_ref())
            .with_context(|| format!("opening {}", path.as_ref().display()))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        let settings: Self = toml::from_str(&contents)?;
        Ok(settings)
    }

    /// Replace out-of-range values with defaults instead of erroring: a
    /// broken profile must never block the game.
    pub fn sanitized(mut self) -> Self {
        if self.animation_speed_ms == 0 {
            self.animation_speed_ms = defaults::animation_speed_ms();
        }
        self
    }
}

mod defaults {
    pub fn sound() -> bool {
        true
    }
    pub fn animations() -> bool {
        true
    }
    pub fn swipe_enabled() -> bool {
        true
    }
    pub fn animation_speed_ms() -> u64 {
        150
    }
    pub fn theme() -> String {
        "classic".to_string()
    }
}
