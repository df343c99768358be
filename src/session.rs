//! Host-side driver
//!
//! Owns a `Game`, turns held buttons into edges, hands out tick indices and
//! applies the auto-exit policy from `GameConfig::max_ticks`.

use serde::Serialize;

use crate::renderer::DrawSink;
use crate::sim::{Buttons, Game, GamePhase, InputTracker};

/// Whether the host should keep calling `step`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    /// The tick limit was passed; the host should quit
    Exit,
}

/// What happened over a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub level: String,
    /// Ticks actually simulated
    pub ticks: u64,
    pub score: u32,
    pub collected: usize,
    pub phase: GamePhase,
    /// Tick index on which the level was last completed
    pub completed_at: Option<u64>,
    pub restarts: u32,
    /// Stopped by the tick limit rather than by running out of input
    pub hit_tick_limit: bool,
}

pub struct Session {
    game: Game,
    tracker: InputTracker,
    next_tick: u64,
    completed_at: Option<u64>,
    hit_tick_limit: bool,
}

impl Session {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            tracker: InputTracker::new(),
            next_tick: 0,
            completed_at: None,
            hit_tick_limit: false,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run one tick with the buttons currently held
    pub fn step(&mut self, held: Buttons) -> StepOutcome {
        let tick = self.next_tick;
        let input = self.tracker.next(held);
        let was_complete = self.game.game_complete();

        self.game.on_tick(tick, &input);
        self.next_tick += 1;

        if !was_complete && self.game.game_complete() {
            self.completed_at = Some(tick);
        }

        if self.game.config.should_exit(tick) {
            log::info!("Tick limit reached at tick {}, exiting", tick);
            self.hit_tick_limit = true;
            return StepOutcome::Exit;
        }
        StepOutcome::Continue
    }

    /// Draw the current frame
    pub fn render<S: DrawSink + ?Sized>(&self, sink: &mut S) {
        self.game.render(sink);
    }

    /// Feed a whole tape, stopping early on the tick limit
    pub fn run_tape(&mut self, tape: &[Buttons]) -> RunSummary {
        for &held in tape {
            if self.step(held) == StepOutcome::Exit {
                break;
            }
        }
        self.summary()
    }

    /// Step with no buttons held until the tick limit. `None` if the config
    /// has no limit, since that would never return.
    pub fn run_idle(&mut self) -> Option<RunSummary> {
        self.game.config.max_ticks?;
        while self.step(Buttons::default()) == StepOutcome::Continue {}
        Some(self.summary())
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            level: self.game.level_name.clone(),
            ticks: self.next_tick,
            score: self.game.score,
            collected: self.game.collected_count(),
            phase: self.game.phase,
            completed_at: self.completed_at,
            restarts: self.game.restarts,
            hit_tick_limit: self.hit_tick_limit,
        }
    }
}
