//! Recorded draw calls

use serde::{Deserialize, Serialize};

use super::DrawSink;

/// One call against a `DrawSink`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawCommand {
    SetColor { r: u8, g: u8, b: u8 },
    FillRect { x: i32, y: i32, w: i32, h: i32 },
    SetPixel { x: i32, y: i32 },
    Text { text: String, x: i32, y: i32 },
    Clear,
}

/// Sink that keeps every call in order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandRecorder {
    pub commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text strings drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of `FillRect` calls
    pub fn rect_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
            .count()
    }
}

impl DrawSink for CommandRecorder {
    fn set_color(&mut self, r: u8, g: u8, b: u8) {
        self.commands.push(DrawCommand::SetColor { r, g, b });
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h });
    }

    fn set_pixel(&mut self, x: i32, y: i32) {
        self.commands.push(DrawCommand::SetPixel { x, y });
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn clear_screen(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }
}
