//! End-to-end runs through the public API: tapes in, summaries and frames out

use glam::Vec2;

use pico_platformer::renderer::CommandRecorder;
use pico_platformer::sim::{Buttons, decode_buttons, encode_tape, parse_tape};
use pico_platformer::{Game, GameConfig, GamePhase, LevelLayout, Session, StepOutcome};

/// Level one in 34 ticks: up the left ledges, bonk under the (10, 50) ledge,
/// jump again and drift right into the star. Picks up the first coin on the way.
const WINNING_TAPE: [u8; 34] = [
    2, 2, 2, 2, 2, 2, 2, 6, 0, 0, 1, 0, 0, 0, 0, 6, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 2, 2, 2, 2, 2,
    2, 2, 2,
];

fn winning_tape() -> Vec<Buttons> {
    parse_tape(&WINNING_TAPE).unwrap()
}

#[test]
fn test_winning_tape_completes_level_one() {
    let mut session = Session::new(Game::new(GameConfig::default()));
    let summary = session.run_tape(&winning_tape());

    assert_eq!(summary.phase, GamePhase::Complete);
    assert_eq!(summary.completed_at, Some(33));
    assert_eq!(summary.score, 20);
    assert_eq!(summary.collected, 2);
    assert_eq!(summary.restarts, 0);

    let game = session.game();
    assert!(game.collectibles[0].collected);
    assert!(game.star().collected);
    assert_eq!(game.player.pos, Vec2::new(48.0, 5.0));
}

#[test]
fn test_route_checkpoints() {
    let mut session = Session::new(Game::new(GameConfig::default()));
    let tape = winning_tape();

    // Walk right onto the (30, 90) ledge
    for &held in &tape[..7] {
        session.step(held);
    }
    let player = &session.game().player;
    assert_eq!(player.pos, Vec2::new(34.0, 82.0));
    assert!(player.on_ground);

    // Jump: impulse and gravity land in the same tick
    session.step(tape[7]);
    assert_eq!(session.game().player.vel.y, -7.5);

    // Bonk under the (10, 50) ledge snaps to its underside
    for &held in &tape[8..11] {
        session.step(held);
    }
    let player = &session.game().player;
    assert_eq!(player.pos, Vec2::new(34.0, 58.0));
    assert_eq!(player.vel.y, 0.0);
}

#[test]
fn test_complete_then_restart() {
    let mut session = Session::new(Game::new(GameConfig::default()));
    session.run_tape(&winning_tape());
    assert!(session.game().game_complete());

    // Holding right does nothing while complete
    let right = decode_buttons(0x02);
    for _ in 0..5 {
        session.step(right);
    }
    assert_eq!(session.game().player.pos, Vec2::new(48.0, 5.0));

    // Restart
    session.step(decode_buttons(0x08));
    let game = session.game();
    assert_eq!(game.phase, GamePhase::Playing);
    assert_eq!(game.score, 0);
    assert_eq!(game.player.pos, game.player.start);
    assert_eq!(game.player.vel, Vec2::ZERO);
    assert!(game.collectibles.iter().all(|c| !c.collected));
}

#[test]
fn test_winning_frame_shows_banner() {
    let mut session = Session::new(Game::new(GameConfig::default()));
    session.run_tape(&winning_tape());

    let mut rec = CommandRecorder::new();
    session.render(&mut rec);
    assert_eq!(
        rec.texts(),
        vec!["Score: 20", "You found the star!", "Press X to restart"]
    );
}

#[test]
fn test_replay_is_deterministic() {
    let tape = winning_tape();
    assert_eq!(encode_tape(&tape), WINNING_TAPE.to_vec());

    let mut a = Session::new(Game::new(GameConfig::default()));
    let mut b = Session::new(Game::new(GameConfig::default()));
    assert_eq!(a.run_tape(&tape), b.run_tape(&tape));
    assert_eq!(
        serde_json::to_string(a.game()).unwrap(),
        serde_json::to_string(b.game()).unwrap()
    );
}

#[test]
fn test_fall_off_resets_from_any_state() {
    let mut session = Session::new(Game::new(GameConfig::default()));
    // Play part of the route so there is score to lose
    for &held in &winning_tape()[..20] {
        session.step(held);
    }
    assert_eq!(session.game().score, 10);

    let mut game = session.game().clone();
    game.player.pos.y = game.config.screen_height + 21.0;
    game.player.vel = Vec2::ZERO;
    game.on_tick(20, &Default::default());

    assert_eq!(game.score, 0);
    assert_eq!(game.player.pos, Vec2::new(20.0, 80.0));
    assert_eq!(game.player.vel, Vec2::ZERO);
    assert_eq!(game.phase, GamePhase::Playing);
    assert!(game.collectibles.iter().all(|c| !c.collected));
}

#[test]
fn test_tick_limit_cuts_tape() {
    let config = GameConfig {
        max_ticks: Some(9),
        ..Default::default()
    };
    let mut session = Session::new(Game::new(config));
    let summary = session.run_tape(&winning_tape());

    assert_eq!(summary.ticks, 11);
    assert!(summary.hit_tick_limit);
    assert_eq!(summary.phase, GamePhase::Playing);
}

#[test]
fn test_step_reports_exit() {
    let config = GameConfig {
        max_ticks: Some(0),
        ..Default::default()
    };
    let mut session = Session::new(Game::new(config));
    assert_eq!(session.step(Buttons::default()), StepOutcome::Continue);
    assert_eq!(session.step(Buttons::default()), StepOutcome::Exit);
}

#[test]
fn test_level_two_player_lands() {
    let game = Game::from_layout(GameConfig::default(), &LevelLayout::level_two()).unwrap();
    let mut session = Session::new(game);
    let summary = session.run_tape(&[Buttons::default(); 30]);

    assert_eq!(summary.restarts, 0);
    assert!(session.game().player.on_ground);
    assert_eq!(session.game().player.pos.y, 102.0);
}
