//! Software RGB framebuffer sink
//!
//! Rasterizes rects and pixels with clipping. There is no font, so text is
//! kept as positioned lines alongside the image.

use std::io::{self, Write};

use super::DrawSink;
use crate::config::Rgb;

/// A line of text drawn into the frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub color: [u8; 3],
}

pub struct Framebuffer {
    width: usize,
    height: usize,
    /// Row-major 8-bit RGB
    pixels: Vec<[u8; 3]>,
    pen: [u8; 3],
    text: Vec<TextLine>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 3]; width * height],
            pen: [0; 3],
            text: Vec::new(),
        }
    }

    /// Colour at a pixel, `None` outside the frame
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    pub fn text(&self) -> &[TextLine] {
        &self.text
    }

    /// Binary PPM (P6)
    pub fn write_ppm<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "P6\n{} {}\n255\n", self.width, self.height)?;
        for px in &self.pixels {
            out.write_all(px)?;
        }
        out.flush()
    }

    /// Clip a span `[start, start + len)` to `[0, limit)`
    fn clip(start: i32, len: i32, limit: usize) -> Option<(usize, usize)> {
        let lo = start.max(0) as i64;
        let hi = (start as i64 + len as i64).min(limit as i64);
        (lo < hi).then_some((lo as usize, hi as usize))
    }
}

impl DrawSink for Framebuffer {
    fn set_color(&mut self, r: u8, g: u8, b: u8) {
        self.pen = Rgb::new(r, g, b).to_rgb8();
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        let (Some((x0, x1)), Some((y0, y1))) =
            (Self::clip(x, w, self.width), Self::clip(y, h, self.height))
        else {
            return;
        };

        for row in y0..y1 {
            let start = row * self.width;
            self.pixels[start + x0..start + x1].fill(self.pen);
        }
    }

    fn set_pixel(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = self.pen;
        }
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        self.text.push(TextLine {
            text: text.to_string(),
            x,
            y,
            color: self.pen,
        });
    }

    fn clear_screen(&mut self) {
        self.pixels.fill(self.pen);
        self.text.clear();
    }
}
