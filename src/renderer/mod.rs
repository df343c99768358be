//! Presentation adapter
//!
//! The game never touches pixels directly. `Game::render` walks the current
//! state and issues calls against a `DrawSink`, which the host implements over
//! its display API. Two sinks ship with the crate: `CommandRecorder` (keeps the
//! calls) and `Framebuffer` (rasterizes them in software).

pub mod commands;
pub mod framebuffer;
pub mod sprites;

pub use commands::{CommandRecorder, DrawCommand};
pub use framebuffer::Framebuffer;

use crate::config::Rgb;
use crate::sim::Game;

/// Draw calls the handheld's display API offers. Colours are 4-bit (0..=15).
pub trait DrawSink {
    fn set_color(&mut self, r: u8, g: u8, b: u8);
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32);
    fn set_pixel(&mut self, x: i32, y: i32);
    fn draw_text(&mut self, text: &str, x: i32, y: i32);
    /// Fill the whole screen with the current colour
    fn clear_screen(&mut self);

    fn set_rgb(&mut self, color: Rgb) {
        self.set_color(color.r, color.g, color.b);
    }
}

impl Game {
    /// Draw the current state. Read-only: calling it twice draws the same frame.
    pub fn render<S: DrawSink + ?Sized>(&self, sink: &mut S) {
        sprites::draw_game(self, sink);
    }
}
