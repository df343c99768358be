//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` is one step; no wall-clock time
//! - Stable iteration order (insertion order of platforms and collectibles)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{Contact, rects_overlap, resolve_platform_collisions};
pub use input::{Buttons, InputTracker, TapeError, decode_buttons, encode_buttons, encode_tape, parse_tape};
pub use rect::Rect;
pub use state::{Collectible, Enemy, Game, GamePhase, Platform, Player, Updatable};
pub use tick::{InputState, tick, update_player};
