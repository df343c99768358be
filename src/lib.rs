//! Pico Platformer - a tick-driven 2D platformer core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `level`: Built-in and JSON-loadable level layouts
//! - `renderer`: Draw-call contract and software sinks
//! - `config`: Tunable constants, palette and difficulty presets
//! - `session`: Host-side loop with edge detection and auto-exit

pub mod config;
pub mod level;
pub mod renderer;
pub mod session;
pub mod sim;

pub use config::{Difficulty, GameConfig, Palette, Rgb};
pub use level::{LevelError, LevelLayout};
pub use renderer::DrawSink;
pub use session::{RunSummary, Session, StepOutcome};
pub use sim::{Game, GamePhase, InputState};

/// Default tuning values (see `GameConfig` for the runtime copy)
pub mod consts {
    /// Screen dimensions in pixels
    pub const SCREEN_WIDTH: f32 = 120.0;
    pub const SCREEN_HEIGHT: f32 = 120.0;

    /// Downward acceleration added to vertical velocity every tick
    pub const GRAVITY: f32 = 0.5;
    /// Vertical velocity applied on jump (negative is up)
    pub const JUMP_STRENGTH: f32 = -8.0;
    /// Horizontal speed while a direction is held
    pub const PLAYER_SPEED: f32 = 2.0;

    /// Player sprite size
    pub const PLAYER_WIDTH: f32 = 8.0;
    pub const PLAYER_HEIGHT: f32 = 8.0;

    /// Collectible sprite size
    pub const COLLECTIBLE_SIZE: f32 = 6.0;
    /// Points per picked-up collectible (the star included)
    pub const COLLECTIBLE_POINTS: u32 = 10;
    /// Bob animation: amplitude in pixels, frequency in radians per tick
    pub const BOB_AMPLITUDE: f32 = 2.0;
    pub const BOB_FREQUENCY: f32 = 0.1;

    /// How far below the screen the player may fall before the level restarts
    pub const FALL_MARGIN: f32 = 20.0;

    /// Host auto-exit after this many ticks
    pub const MAX_TICKS: u64 = 1000;

    /// Enemy sprite size
    pub const ENEMY_SIZE: f32 = 8.0;
}

/// Convert a simulation coordinate to a pixel coordinate (truncates toward zero)
#[inline]
pub fn to_pixel(v: f32) -> i32 {
    v as i32
}
