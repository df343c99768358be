//! Level layouts
//!
//! A layout is plain data: where the player starts, the platforms, the
//! collectibles (exactly one flagged as the star) and any enemies. Two layouts
//! are built in; others can be loaded from JSON.

use std::fmt;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::Rgb;
use crate::sim::Rect;

fn default_platform_color() -> Rgb {
    Rgb::BROWN
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformDef {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default = "default_platform_color")]
    pub color: Rgb,
}

impl PlatformDef {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectibleDef {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub is_star: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyDef {
    pub x: f32,
    pub y: f32,
    pub patrol_range: f32,
    pub speed: f32,
}

/// Everything needed to build a `Game`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    pub name: String,
    pub player_start: Vec2,
    pub platforms: Vec<PlatformDef>,
    pub collectibles: Vec<CollectibleDef>,
    #[serde(default)]
    pub enemies: Vec<EnemyDef>,
}

#[derive(Debug)]
pub enum LevelError {
    /// Layouts need exactly one star
    StarCount { found: usize },
    /// Platform with zero or negative width/height
    DegeneratePlatform { index: usize },
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StarCount { found } => write!(f, "layout needs exactly one star, found {found}"),
            Self::DegeneratePlatform { index } => {
                write!(f, "platform {index} has zero or negative size")
            }
            Self::Io(e) => write!(f, "could not read layout: {e}"),
            Self::Parse(e) => write!(f, "invalid layout JSON: {e}"),
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LevelError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for LevelError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

fn platform(x: f32, y: f32, width: f32, height: f32, color: Rgb) -> PlatformDef {
    PlatformDef {
        x,
        y,
        width,
        height,
        color,
    }
}

fn coin(x: f32, y: f32) -> CollectibleDef {
    CollectibleDef { x, y, is_star: false }
}

fn star(x: f32, y: f32) -> CollectibleDef {
    CollectibleDef { x, y, is_star: true }
}

impl LevelLayout {
    /// The main level: a climb from the ground to the star on the top ledge
    pub fn level_one() -> Self {
        Self {
            name: "one".to_string(),
            player_start: Vec2::new(20.0, 80.0),
            platforms: vec![
                // Ground
                platform(0.0, 110.0, 40.0, 10.0, Rgb::GREEN),
                platform(60.0, 110.0, 60.0, 10.0, Rgb::GREEN),
                // Mid
                platform(30.0, 90.0, 20.0, 8.0, Rgb::WHITE),
                platform(70.0, 80.0, 25.0, 8.0, Rgb::WHITE),
                platform(15.0, 70.0, 20.0, 8.0, Rgb::WHITE),
                platform(80.0, 60.0, 30.0, 8.0, Rgb::WHITE),
                // Upper
                platform(10.0, 50.0, 25.0, 8.0, Rgb::WHITE),
                platform(50.0, 40.0, 30.0, 8.0, Rgb::WHITE),
                platform(90.0, 30.0, 25.0, 8.0, Rgb::WHITE),
                // Top
                platform(40.0, 20.0, 40.0, 8.0, Rgb::GRAY),
            ],
            collectibles: vec![
                coin(35.0, 82.0),
                coin(78.0, 72.0),
                coin(20.0, 62.0),
                coin(88.0, 52.0),
                coin(20.0, 42.0),
                coin(65.0, 32.0),
                coin(98.0, 22.0),
                star(55.0, 12.0),
            ],
            enemies: Vec::new(),
        }
    }

    /// Scattered small ledges over a wide gap. The last collectible is the star.
    pub fn level_two() -> Self {
        let brown = Rgb::BROWN;
        Self {
            name: "two".to_string(),
            // Over the left ground ledge (0..20)
            player_start: Vec2::new(5.0, 90.0),
            platforms: vec![
                platform(0.0, 110.0, 20.0, 10.0, brown),
                platform(100.0, 110.0, 20.0, 10.0, brown),
                platform(40.0, 100.0, 15.0, 8.0, brown),
                platform(20.0, 85.0, 15.0, 8.0, brown),
                platform(80.0, 85.0, 15.0, 8.0, brown),
                platform(50.0, 70.0, 15.0, 8.0, brown),
                platform(10.0, 55.0, 15.0, 8.0, brown),
                platform(90.0, 55.0, 15.0, 8.0, brown),
                platform(35.0, 40.0, 15.0, 8.0, brown),
                platform(70.0, 40.0, 15.0, 8.0, brown),
                platform(55.0, 25.0, 15.0, 8.0, brown),
            ],
            collectibles: vec![
                coin(45.0, 92.0),
                coin(25.0, 77.0),
                coin(85.0, 77.0),
                coin(55.0, 62.0),
                coin(15.0, 47.0),
                coin(95.0, 47.0),
                coin(40.0, 32.0),
                coin(75.0, 32.0),
                star(60.0, 17.0),
            ],
            enemies: Vec::new(),
        }
    }

    /// Built-in layout by name
    pub fn builtin(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "one" | "1" => Some(Self::level_one()),
            "two" | "2" => Some(Self::level_two()),
            _ => None,
        }
    }

    /// Check the invariants `Game` relies on
    pub fn validate(&self) -> Result<(), LevelError> {
        let stars = self.collectibles.iter().filter(|c| c.is_star).count();
        if stars != 1 {
            return Err(LevelError::StarCount { found: stars });
        }

        if let Some(index) = self.platforms.iter().position(|p| p.rect().is_degenerate()) {
            return Err(LevelError::DegeneratePlatform { index });
        }

        Ok(())
    }

    /// Parse and validate a JSON layout
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let layout: Self = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Read, parse and validate a JSON layout file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let layout = Self::from_json(&json)?;
        log::info!("Loaded level '{}' from {}", layout.name, path.as_ref().display());
        Ok(layout)
    }
}
