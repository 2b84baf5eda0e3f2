//! # Rendering Module
//!
//! Per-column projection of ray hits into vertical wall slices, plus the
//! macroquad display glue that puts them on screen.
//!
//! One ray is cast per screen column; its perpendicular hit distance sets
//! the slice height, and the hit material and strike axis pick the color.
//! Columns never interact, so a frame is just the ordered collection of
//! independent slices.

pub mod display;
pub mod palette;

pub use display::*;
pub use palette::*;

use crate::player::Player;
use crate::raycast;
use crate::world::GridMap;
use crate::MazecastResult;

/// A draw instruction for one screen column: fill the vertical run from
/// `top` to `bottom` with `color`. Both ends are clamped to
/// `[0, screen_height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSlice {
    pub column: u32,
    pub top: i32,
    pub bottom: i32,
    pub color: Rgba,
}

/// Projects the maze into wall slices, one per screen column.
#[derive(Debug, Clone, Copy)]
pub struct ColumnRenderer {
    width: u32,
    height: u32,
    palette: Palette,
}

impl ColumnRenderer {
    /// Creates a renderer for the given screen dimensions.
    pub fn new(width: u32, height: u32, palette: Palette) -> Self {
        Self {
            width,
            height,
            palette,
        }
    }

    /// Renders a single column.
    ///
    /// The column index is mapped to a camera-space offset in `[-1, 1)`,
    /// the ray direction is `dir + plane * camera_x`, and the slice height
    /// is the screen height over the perpendicular hit distance. A hit at
    /// distance zero (origin flush against a wall face) fills the whole
    /// column instead of dividing.
    pub fn render_column(
        &self,
        map: &GridMap,
        player: &Player,
        column: u32,
    ) -> MazecastResult<WallSlice> {
        let camera_x = 2.0 * column as f32 / self.width as f32 - 1.0;
        let ray_dir = player.dir + player.plane.scaled(camera_x);
        let hit = raycast::cast(map, player.pos, ray_dir)?;

        let height = self.height as i32;
        let line_height = if hit.distance > 0.0 {
            (self.height as f32 / hit.distance) as i32
        } else {
            height
        };

        let top = (height / 2 - line_height / 2).clamp(0, height);
        let bottom = (height / 2 + line_height / 2).clamp(0, height);
        let color = self.palette.wall_color(hit.material, hit.axis);

        Ok(WallSlice {
            column,
            top,
            bottom,
            color,
        })
    }

    /// Renders a full frame: exactly one slice per column, in ascending
    /// column order.
    pub fn render_frame(&self, map: &GridMap, player: &Player) -> MazecastResult<Vec<WallSlice>> {
        (0..self.width)
            .map(|column| self.render_column(map, player, column))
            .collect()
    }
}
