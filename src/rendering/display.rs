//! # Display Management
//!
//! Macroquad glue: clearing the frame, drawing wall slices as 1-pixel
//! vertical lines, and the FPS overlay. Everything above this module works
//! in plain slice/color values and never touches the window.

use crate::rendering::palette::{Rgba, BACKDROP};
use crate::rendering::WallSlice;
use log::debug;
use macroquad::prelude::*;

/// Macroquad display manager for the renderer.
pub struct MacroquadDisplay {
    /// Timestamp of the last FPS log line, in seconds since startup
    last_fps_log: f64,
}

impl Default for MacroquadDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl MacroquadDisplay {
    /// Creates a new display manager.
    pub fn new() -> Self {
        Self { last_fps_log: 0.0 }
    }

    /// Current window size in whole pixels.
    pub fn screen_size(&self) -> (u32, u32) {
        (screen_width() as u32, screen_height() as u32)
    }

    /// Clears the frame to the backdrop color.
    pub fn clear(&self) {
        clear_background(to_macroquad(BACKDROP));
    }

    /// Draws one vertical line per wall slice.
    pub fn draw_slices(&self, slices: &[WallSlice]) {
        for slice in slices {
            let x = slice.column as f32;
            draw_line(
                x,
                slice.top as f32,
                x,
                slice.bottom as f32,
                1.0,
                to_macroquad(slice.color),
            );
        }
    }

    /// Draws the FPS readout and logs it once per second.
    pub fn draw_fps(&mut self) {
        let fps = get_fps();
        draw_text(&format!("FPS: {}", fps), 10.0, 20.0, 20.0, WHITE);

        let now = get_time();
        if now - self.last_fps_log >= 1.0 {
            debug!("{} fps", fps);
            self.last_fps_log = now;
        }
    }
}

fn to_macroquad(color: Rgba) -> Color {
    Color::from_rgba(color.r, color.g, color.b, color.a)
}
