//! Game state and entity types
//!
//! Everything the simulation mutates lives in `Game`. The host owns the value
//! and drives it through `Game::on_tick`; drawing only ever borrows it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::{GameConfig, Rgb};
use crate::level::{LevelError, LevelLayout};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Star collected; only restart is processed
    Complete,
}

/// Entities that advance themselves once per tick without player input
pub trait Updatable {
    fn update(&mut self, config: &GameConfig);
}

/// A static platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    pub color: Rgb,
}

impl Platform {
    pub fn new(rect: Rect, color: Rgb) -> Self {
        Self { rect, color }
    }
}

/// A pickup that bobs in place. One per level is the star.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    /// Resting top-left corner (before bobbing)
    pub pos: Vec2,
    pub size: Vec2,
    pub collected: bool,
    pub is_star: bool,
    /// Ticks this collectible has been updated
    pub anim_tick: u64,
    /// Current vertical bob, a pure function of `anim_tick`
    pub bob_offset: f32,
}

impl Collectible {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self {
            pos,
            size: Vec2::splat(size),
            collected: false,
            is_star: false,
            anim_tick: 0,
            bob_offset: 0.0,
        }
    }

    pub fn star(pos: Vec2, size: f32) -> Self {
        Self {
            is_star: true,
            ..Self::new(pos, size)
        }
    }

    /// Collision box at the current bobbed height
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.bobbed_pos(), self.size)
    }

    #[inline]
    pub fn bobbed_pos(&self) -> Vec2 {
        Vec2::new(self.pos.x, self.pos.y + self.bob_offset)
    }
}

impl Updatable for Collectible {
    fn update(&mut self, config: &GameConfig) {
        self.anim_tick += 1;
        // f64 phase: an f32 tick count stops advancing past 2^24
        let phase = self.anim_tick as f64 * config.bob_frequency as f64;
        self.bob_offset = config.bob_amplitude * phase.sin() as f32;
    }
}

/// A patrolling enemy. Modeled but inert: the tick loop neither moves it nor
/// checks it against the player. Hosts can drive it through `Updatable`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    pub start_x: f32,
    pub patrol_range: f32,
    pub speed: f32,
    /// +1 moving right, -1 moving left
    pub direction: f32,
}

impl Enemy {
    pub fn new(pos: Vec2, patrol_range: f32, speed: f32) -> Self {
        Self {
            pos,
            size: Vec2::splat(crate::consts::ENEMY_SIZE),
            start_x: pos.x,
            patrol_range,
            speed,
            direction: 1.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

impl Updatable for Enemy {
    fn update(&mut self, _config: &GameConfig) {
        self.pos.x += self.speed * self.direction;

        if self.pos.x <= self.start_x {
            self.direction = 1.0;
        } else if self.pos.x >= self.start_x + self.patrol_range {
            self.direction = -1.0;
        }
    }
}

/// The player sprite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Set only by a landing during the most recent collision pass
    pub on_ground: bool,
    /// Where restarts put the player
    pub start: Vec2,
}

impl Player {
    pub fn new(start: Vec2, size: Vec2) -> Self {
        Self {
            pos: start,
            vel: Vec2::ZERO,
            size,
            on_ground: false,
            start,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Back to the start position, at rest
    pub fn reset(&mut self) {
        self.pos = self.start;
        self.vel = Vec2::ZERO;
        self.on_ground = false;
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub config: GameConfig,
    /// Name of the layout this game was built from
    pub level_name: String,
    pub player: Player,
    /// Drawn back to front in this order
    pub platforms: Vec<Platform>,
    /// Drawn in this order
    pub collectibles: Vec<Collectible>,
    /// Inert, see `Enemy`
    pub enemies: Vec<Enemy>,
    pub score: u32,
    pub phase: GamePhase,
    /// Tick index of the most recent `on_tick`
    pub last_tick: Option<u64>,
    /// Restarts so far (button or fall-off)
    pub restarts: u32,
    /// Index into `collectibles`
    star_index: usize,
}

impl Game {
    /// Create a game on the built-in first level
    pub fn new(config: GameConfig) -> Self {
        Self::build(config, &LevelLayout::level_one())
    }

    /// Create a game from any layout, rejecting layouts without exactly one
    /// star or with degenerate platforms
    pub fn from_layout(config: GameConfig, layout: &LevelLayout) -> Result<Self, LevelError> {
        layout.validate()?;
        Ok(Self::build(config, layout))
    }

    fn build(config: GameConfig, layout: &LevelLayout) -> Self {
        let player = Player::new(
            layout.player_start,
            Vec2::new(config.player_width, config.player_height),
        );

        let platforms = layout
            .platforms
            .iter()
            .map(|p| Platform::new(p.rect(), p.color))
            .collect();

        let collectibles: Vec<Collectible> = layout
            .collectibles
            .iter()
            .map(|c| {
                let pos = Vec2::new(c.x, c.y);
                if c.is_star {
                    Collectible::star(pos, config.collectible_size)
                } else {
                    Collectible::new(pos, config.collectible_size)
                }
            })
            .collect();

        // Built-in layouts always carry a star; custom ones went through validate()
        let star_index = collectibles.iter().position(|c| c.is_star).unwrap_or(0);

        let enemies = layout
            .enemies
            .iter()
            .map(|e| Enemy::new(Vec2::new(e.x, e.y), e.patrol_range, e.speed))
            .collect();

        log::info!(
            "Level '{}': {} platforms, {} collectibles",
            layout.name,
            layout.platforms.len(),
            layout.collectibles.len()
        );

        Self {
            config,
            level_name: layout.name.clone(),
            player,
            platforms,
            collectibles,
            enemies,
            score: 0,
            phase: GamePhase::Playing,
            last_tick: None,
            restarts: 0,
            star_index,
        }
    }

    /// Advance one tick (the host's per-frame update entry point)
    pub fn on_tick(&mut self, tick_index: u64, input: &super::InputState) {
        self.last_tick = Some(tick_index);
        super::tick(self, input);
    }

    /// The star collectible
    pub fn star(&self) -> &Collectible {
        &self.collectibles[self.star_index]
    }

    pub fn star_index(&self) -> usize {
        self.star_index
    }

    pub fn game_complete(&self) -> bool {
        self.phase == GamePhase::Complete
    }

    /// Number of collectibles picked up since the last restart
    pub fn collected_count(&self) -> usize {
        self.collectibles.iter().filter(|c| c.collected).count()
    }

    pub fn all_collected(&self) -> bool {
        self.collectibles.iter().all(|c| c.collected)
    }

    /// Put the player back at the start, zero the score, return every pickup
    pub fn restart_level(&mut self) {
        self.player.reset();
        self.score = 0;
        self.phase = GamePhase::Playing;
        for collectible in &mut self.collectibles {
            collectible.collected = false;
        }
        self.restarts += 1;
        log::info!("Level '{}' restarted ({} so far)", self.level_name, self.restarts);
    }

    /// Drive the inert enemies one step. Never called by the tick loop.
    pub fn advance_enemies(&mut self) {
        for enemy in &mut self.enemies {
            enemy.update(&self.config);
        }
    }
}
