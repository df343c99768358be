//! Game configuration and difficulty presets
//!
//! Every tunable number the simulation reads lives in `GameConfig`. Defaults
//! come from `crate::consts`; presets only touch the physics trio.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A 4-bit-per-channel colour as the handheld's pen takes it (0..=15)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(15, 15, 15);
    pub const RED: Rgb = Rgb::new(15, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 15, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 15);
    pub const YELLOW: Rgb = Rgb::new(15, 15, 0);
    pub const GRAY: Rgb = Rgb::new(8, 8, 8);
    pub const BROWN: Rgb = Rgb::new(8, 4, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Expand to 8-bit channels (15 -> 255). Channels above 15 saturate.
    pub fn to_rgb8(self) -> [u8; 3] {
        [self.r.min(15) * 17, self.g.min(15) * 17, self.b.min(15) * 17]
    }
}

/// Colours for everything that isn't a platform (platforms carry their own)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    pub player: Rgb,
    /// Eyes on the player sprite, shine on coins
    pub highlight: Rgb,
    pub collectible: Rgb,
    pub score_text: Rgb,
    pub banner_text: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::BLUE,
            player: Rgb::RED,
            highlight: Rgb::WHITE,
            collectible: Rgb::YELLOW,
            score_text: Rgb::WHITE,
            banner_text: Rgb::BLACK,
        }
    }
}

/// Difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "default" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Gravity per tick
    pub fn gravity(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.3,
            Difficulty::Normal => GRAVITY,
            Difficulty::Hard => 0.7,
        }
    }

    /// Jump impulse (negative is up)
    pub fn jump_strength(&self) -> f32 {
        match self {
            Difficulty::Easy => -10.0,
            Difficulty::Normal => JUMP_STRENGTH,
            Difficulty::Hard => -6.0,
        }
    }

    /// Horizontal speed
    pub fn player_speed(&self) -> f32 {
        match self {
            Difficulty::Easy => 3.0,
            Difficulty::Normal => PLAYER_SPEED,
            Difficulty::Hard => 1.5,
        }
    }
}

/// Runtime configuration for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Physics ===
    /// Added to vertical velocity every tick
    pub gravity: f32,
    /// Vertical velocity set on jump (negative is up)
    pub jump_strength: f32,
    /// Horizontal speed while left/right is held
    pub player_speed: f32,

    // === Sprites ===
    pub player_width: f32,
    pub player_height: f32,
    pub collectible_size: f32,

    // === Rules ===
    /// Score added per collectible picked up
    pub collectible_points: u32,
    /// Player falling past `screen_height + fall_margin` restarts the level
    pub fall_margin: f32,

    // === Animation ===
    pub bob_amplitude: f32,
    /// Radians per tick
    pub bob_frequency: f32,

    // === Host ===
    /// Auto-exit once the tick index exceeds this; `None` runs forever
    pub max_ticks: Option<u64>,

    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            player_speed: PLAYER_SPEED,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            collectible_size: COLLECTIBLE_SIZE,

            collectible_points: COLLECTIBLE_POINTS,
            fall_margin: FALL_MARGIN,

            bob_amplitude: BOB_AMPLITUDE,
            bob_frequency: BOB_FREQUENCY,

            max_ticks: Some(MAX_TICKS),

            palette: Palette::default(),
        }
    }
}

impl GameConfig {
    /// Default config with a difficulty preset applied
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        let mut config = Self::default();
        config.apply_difficulty(difficulty);
        config
    }

    /// Overwrite the physics values with a preset's
    pub fn apply_difficulty(&mut self, difficulty: Difficulty) {
        self.gravity = difficulty.gravity();
        self.jump_strength = difficulty.jump_strength();
        self.player_speed = difficulty.player_speed();
    }

    /// Largest x the player may occupy
    pub fn player_max_x(&self) -> f32 {
        self.screen_width - self.player_width
    }

    /// y past which the level restarts
    pub fn fall_limit(&self) -> f32 {
        self.screen_height + self.fall_margin
    }

    /// Whether the host should exit after updating `tick`
    pub fn should_exit(&self, tick: u64) -> bool {
        self.max_ticks.is_some_and(|max| tick > max)
    }

    /// Parse from JSON (unknown fields are ignored, missing ones defaulted)
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load from a JSON file, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => log::warn!("Invalid config {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read config {}: {}", path.display(), e),
        }

        log::warn!("Using default config");
        Self::default()
    }

    /// Write as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Config saved to {}", path.as_ref().display());
        Ok(())
    }
}
