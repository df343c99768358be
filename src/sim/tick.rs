//! Fixed-step simulation tick
//!
//! Core game loop that advances the game deterministically. Nothing here reads
//! a clock; one call is one tick.

use serde::{Deserialize, Serialize};

use super::collision::{rects_overlap, resolve_platform_collisions};
use super::state::{Game, GamePhase, Platform, Player, Updatable};
use crate::config::GameConfig;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    /// Left is held (level-triggered)
    pub left_held: bool,
    /// Right is held (level-triggered)
    pub right_held: bool,
    /// Jump went from released to pressed this tick
    pub jump_pressed: bool,
    /// Restart went from released to pressed this tick
    pub restart_pressed: bool,
}

/// Advance the game by one tick
pub fn tick(game: &mut Game, input: &InputState) {
    // Restart wins over everything, including a finished level
    if input.restart_pressed {
        game.restart_level();
        return;
    }

    if game.phase == GamePhase::Complete {
        return;
    }

    update_player(&mut game.player, input, &game.platforms, &game.config);
    update_collectibles(game);

    if game.player.pos.y > game.config.fall_limit() {
        log::debug!("Player fell off at y={:.1}", game.player.pos.y);
        game.restart_level();
    }

    if game.star().collected {
        game.phase = GamePhase::Complete;
        log::info!("Star collected, level '{}' complete with score {}", game.level_name, game.score);
    }
}

/// Input, gravity, integration, platform collisions, horizontal clamp
pub fn update_player(player: &mut Player, input: &InputState, platforms: &[Platform], config: &GameConfig) {
    player.vel.x = if input.left_held {
        -config.player_speed
    } else if input.right_held {
        config.player_speed
    } else {
        0.0
    };

    if input.jump_pressed && player.on_ground {
        player.vel.y = config.jump_strength;
        player.on_ground = false;
    }

    // Gravity applies on the jump tick too
    player.vel.y += config.gravity;

    player.pos += player.vel;

    resolve_platform_collisions(player, platforms);

    let max_x = config.player_max_x();
    if player.pos.x < 0.0 {
        player.pos.x = 0.0;
    } else if player.pos.x > max_x {
        player.pos.x = max_x;
    }
}

/// Animate every collectible and pick up the ones the player touches
fn update_collectibles(game: &mut Game) {
    let player_rect = game.player.rect();

    for (i, collectible) in game.collectibles.iter_mut().enumerate() {
        collectible.update(&game.config);

        if !collectible.collected && rects_overlap(&player_rect, &collectible.rect()) {
            collectible.collected = true;
            game.score += game.config.collectible_points;
            log::debug!(
                "Picked up {} #{} (score {})",
                if collectible.is_star { "star" } else { "coin" },
                i,
                game.score
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn idle() -> InputState {
        InputState::default()
    }

    /// Tick until the player has settled on a platform
    fn settle(game: &mut Game) {
        for _ in 0..60 {
            tick(game, &idle());
            if game.player.on_ground {
                return;
            }
        }
        panic!("player never landed");
    }

    #[test]
    fn test_player_falls_onto_ground_platform() {
        let mut game = Game::new(GameConfig::default());
        settle(&mut game);

        // x 20..28 misses the mid platforms, so the drop ends on the ground at y=110
        assert_eq!(game.player.pos, Vec2::new(20.0, 102.0));
        assert_eq!(game.player.vel.y, 0.0);
    }

    #[test]
    fn test_on_ground_recomputed_each_tick() {
        let mut game = Game::new(GameConfig::default());
        settle(&mut game);

        // Standing still: gravity pulls 0.5 into the floor and the landing repeats
        tick(&mut game, &idle());
        assert!(game.player.on_ground);
        assert_eq!(game.player.pos.y, 102.0);

        // Walk off the right edge of the left ground platform (0..40)
        let right = InputState {
            right_held: true,
            ..Default::default()
        };
        for _ in 0..12 {
            tick(&mut game, &right);
        }
        assert!(game.player.pos.x >= 40.0);
        assert!(!game.player.on_ground);
    }

    #[test]
    fn test_left_takes_priority() {
        let mut game = Game::new(GameConfig::default());
        let both = InputState {
            left_held: true,
            right_held: true,
            ..Default::default()
        };
        tick(&mut game, &both);
        assert_eq!(game.player.vel.x, -2.0);
        assert_eq!(game.player.pos.x, 18.0);
    }

    #[test]
    fn test_jump_and_gravity_same_tick() {
        let mut game = Game::new(GameConfig::default());
        settle(&mut game);

        let jump = InputState {
            jump_pressed: true,
            ..Default::default()
        };
        tick(&mut game, &jump);

        // -8 impulse plus 0.5 gravity
        assert_eq!(game.player.vel.y, -7.5);
        assert_eq!(game.player.pos.y, 94.5);
        assert!(!game.player.on_ground);
    }

    #[test]
    fn test_jump_ignored_in_air() {
        let mut game = Game::new(GameConfig::default());
        let jump = InputState {
            jump_pressed: true,
            ..Default::default()
        };
        // Fresh game: not on ground yet
        tick(&mut game, &jump);
        assert_eq!(game.player.vel.y, 0.5);
    }

    #[test]
    fn test_pickup_scores_once() {
        let mut game = Game::new(GameConfig::default());
        // Park the player on top of the first coin at (35, 82)
        game.player.pos = Vec2::new(34.0, 80.0);
        tick(&mut game, &idle());
        assert!(game.collectibles[0].collected);
        assert_eq!(game.score, 10);

        // Still overlapping next tick: no double count
        game.player.pos = Vec2::new(34.0, 80.0);
        game.player.vel = Vec2::ZERO;
        tick(&mut game, &idle());
        assert_eq!(game.score, 10);
    }

    #[test]
    fn test_star_completes_level() {
        let mut game = Game::new(GameConfig::default());
        // Star rests at (55, 12); top platform at (40, 20)
        game.player.pos = Vec2::new(54.0, 12.0);
        tick(&mut game, &idle());

        assert!(game.star().collected);
        assert_eq!(game.phase, GamePhase::Complete);
        assert_eq!(game.score, 10);
    }

    #[test]
    fn test_complete_freezes_updates() {
        let mut game = Game::new(GameConfig::default());
        game.player.pos = Vec2::new(54.0, 12.0);
        tick(&mut game, &idle());
        assert!(game.game_complete());

        let snapshot_pos = game.player.pos;
        let snapshot_anim = game.collectibles[0].anim_tick;
        let right = InputState {
            right_held: true,
            ..Default::default()
        };
        for _ in 0..10 {
            tick(&mut game, &right);
        }
        assert_eq!(game.player.pos, snapshot_pos);
        assert_eq!(game.collectibles[0].anim_tick, snapshot_anim);
        assert!(game.game_complete());
    }

    #[test]
    fn test_restart_from_complete() {
        let mut game = Game::new(GameConfig::default());
        game.player.pos = Vec2::new(54.0, 12.0);
        tick(&mut game, &idle());
        assert!(game.game_complete());

        let restart = InputState {
            restart_pressed: true,
            ..Default::default()
        };
        tick(&mut game, &restart);

        assert_eq!(game.phase, GamePhase::Playing);
        assert_eq!(game.score, 0);
        assert_eq!(game.player.pos, Vec2::new(20.0, 80.0));
        assert_eq!(game.player.vel, Vec2::ZERO);
        assert!(game.collectibles.iter().all(|c| !c.collected));
    }

    #[test]
    fn test_restart_tick_does_nothing_else() {
        let mut game = Game::new(GameConfig::default());
        let anim = game.collectibles[0].anim_tick;
        let restart = InputState {
            restart_pressed: true,
            right_held: true,
            ..Default::default()
        };
        tick(&mut game, &restart);
        assert_eq!(game.player.pos, game.player.start);
        assert_eq!(game.collectibles[0].anim_tick, anim);
    }

    #[test]
    fn test_fall_off_restarts() {
        let mut game = Game::new(GameConfig::default());
        game.score = 30;
        game.collectibles[2].collected = true;
        game.player.pos = Vec2::new(50.0, 141.0);

        tick(&mut game, &idle());

        assert_eq!(game.player.pos, Vec2::new(20.0, 80.0));
        assert_eq!(game.player.vel, Vec2::ZERO);
        assert_eq!(game.score, 0);
        assert!(game.collectibles.iter().all(|c| !c.collected));
        assert_eq!(game.phase, GamePhase::Playing);
    }

    #[test]
    fn test_fall_limit_is_strict() {
        let mut game = Game::new(GameConfig::default());
        // Lands exactly on the limit after gravity: 139.5 + 0.5 = 140, not past it
        game.player.pos = Vec2::new(50.0, 139.5);
        tick(&mut game, &idle());
        assert_eq!(game.player.pos.y, 140.0);
        assert_eq!(game.restarts, 0);
    }

    #[test]
    fn test_clamp_converges_to_edges() {
        let mut game = Game::new(GameConfig::default());
        let left = InputState {
            left_held: true,
            ..Default::default()
        };
        for _ in 0..20 {
            tick(&mut game, &left);
            assert!(game.player.pos.x >= 0.0);
        }
        assert_eq!(game.player.pos.x, 0.0);

        // Right ground platform spans 60..120, so no gap to fall through
        game.player.pos = Vec2::new(80.0, 102.0);
        let right = InputState {
            right_held: true,
            ..Default::default()
        };
        for _ in 0..30 {
            tick(&mut game, &right);
            assert!(game.player.pos.x <= 112.0);
        }
        assert_eq!(game.player.pos.x, 112.0);
    }

    /// One wide floor at y=110 and a star far out of reach, so walking
    /// never falls off or completes the level
    fn flat_game(start_x: f32) -> Game {
        let layout = crate::level::LevelLayout {
            name: "flat".to_string(),
            player_start: Vec2::new(start_x, 102.0),
            platforms: vec![crate::level::PlatformDef {
                x: -1000.0,
                y: 110.0,
                width: 2000.0,
                height: 10.0,
                color: crate::config::Rgb::GRAY,
            }],
            collectibles: vec![crate::level::CollectibleDef {
                x: -500.0,
                y: -500.0,
                is_star: true,
            }],
            enemies: Vec::new(),
        };
        Game::from_layout(GameConfig::default(), &layout).unwrap()
    }

    proptest! {
        #[test]
        fn prop_clamp_holds_from_any_start(start_x in -200.0f32..400.0) {
            let left = InputState { left_held: true, ..Default::default() };
            let right = InputState { right_held: true, ..Default::default() };

            let mut game = flat_game(start_x);
            for _ in 0..300 {
                tick(&mut game, &left);
                prop_assert!(game.player.pos.x >= 0.0);
            }
            prop_assert_eq!(game.player.pos.x, 0.0);

            let max_x = game.config.screen_width - game.player.size.x;
            let mut game = flat_game(start_x);
            for _ in 0..300 {
                tick(&mut game, &right);
                prop_assert!(game.player.pos.x <= max_x);
            }
            prop_assert_eq!(game.player.pos.x, max_x);
            prop_assert_eq!(game.restarts, 0);
            prop_assert_eq!(game.phase, GamePhase::Playing);
        }

        #[test]
        fn prop_score_tracks_collected(moves in proptest::collection::vec(0u8..6, 1..300)) {
            let mut game = Game::new(GameConfig::default());
            let mut prev_score = 0;
            let mut prev_restarts = 0;

            for m in moves {
                let input = InputState {
                    left_held: m == 1 || m == 4,
                    right_held: m == 2 || m == 5,
                    jump_pressed: m >= 3,
                    restart_pressed: false,
                };
                tick(&mut game, &input);

                prop_assert_eq!(game.score, 10 * game.collected_count() as u32);
                prop_assert_eq!(game.game_complete(), game.star().collected);
                if game.restarts == prev_restarts {
                    prop_assert!(game.score >= prev_score);
                    prop_assert!(game.score - prev_score <= 10 * game.collectibles.len() as u32);
                }
                prev_score = game.score;
                prev_restarts = game.restarts;
            }
        }
    }
}
