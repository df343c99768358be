//! Button edge detection and input tapes
//!
//! The device reports which buttons are held. The simulation wants jump and
//! restart as edges, so `InputTracker` remembers the previous tick's buttons.
//!
//! A tape stores one byte of held buttons per tick:
//!
//! | bit    | button  |
//! |--------|---------|
//! | `0x01` | left    |
//! | `0x02` | right   |
//! | `0x04` | jump    |
//! | `0x08` | restart |
//!
//! The upper nibble is reserved and must be zero.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::tick::InputState;

const LEFT_BIT: u8 = 0x01;
const RIGHT_BIT: u8 = 0x02;
const JUMP_BIT: u8 = 0x04;
const RESTART_BIT: u8 = 0x08;
const RESERVED_BITS: u8 = 0xF0;

/// Raw held state of the buttons the game uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buttons {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub restart: bool,
}

/// Turns held buttons into per-tick `InputState`
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    previous: Buttons,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input for this tick given the buttons held right now
    pub fn next(&mut self, held: Buttons) -> InputState {
        let input = InputState {
            left_held: held.left,
            right_held: held.right,
            jump_pressed: held.jump && !self.previous.jump,
            restart_pressed: held.restart && !self.previous.restart,
        };
        self.previous = held;
        input
    }

    /// Forget held buttons (a button held across a reset fires again)
    pub fn reset(&mut self) {
        self.previous = Buttons::default();
    }
}

#[inline]
pub fn encode_buttons(buttons: Buttons) -> u8 {
    (if buttons.left { LEFT_BIT } else { 0 })
        | (if buttons.right { RIGHT_BIT } else { 0 })
        | (if buttons.jump { JUMP_BIT } else { 0 })
        | (if buttons.restart { RESTART_BIT } else { 0 })
}

#[inline]
pub fn decode_buttons(byte: u8) -> Buttons {
    Buttons {
        left: (byte & LEFT_BIT) != 0,
        right: (byte & RIGHT_BIT) != 0,
        jump: (byte & JUMP_BIT) != 0,
        restart: (byte & RESTART_BIT) != 0,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TapeError {
    ReservedBits { tick: usize, byte: u8 },
}

impl fmt::Display for TapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReservedBits { tick, byte } => {
                write!(f, "reserved input bits set at tick {tick}: 0x{byte:02x}")
            }
        }
    }
}

impl std::error::Error for TapeError {}

/// Decode a whole tape
pub fn parse_tape(bytes: &[u8]) -> Result<Vec<Buttons>, TapeError> {
    bytes
        .iter()
        .enumerate()
        .map(|(tick, &byte)| {
            if byte & RESERVED_BITS != 0 {
                return Err(TapeError::ReservedBits { tick, byte });
            }
            Ok(decode_buttons(byte))
        })
        .collect()
}

/// Encode a sequence of held buttons as a tape
pub fn encode_tape(buttons: &[Buttons]) -> Vec<u8> {
    buttons.iter().copied().map(encode_buttons).collect()
}
