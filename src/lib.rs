//! # Mazecast
//!
//! A real-time first-person renderer that projects a 2-D grid maze into a
//! pseudo-3D view using ray casting.
//!
//! ## Architecture Overview
//!
//! The crate is a small library with a thin macroquad binary on top. The
//! core pieces are:
//!
//! - **Grid Map**: immutable square grid of wall cells with a validated,
//!   fully-walled border
//! - **Ray Caster**: DDA grid traversal producing a hit cell, strike axis,
//!   and perpendicular distance per ray
//! - **Column Renderer**: one ray per screen column, converted into a
//!   clamped vertical wall slice with a palette color
//! - **Player Controller**: rotation of the facing/camera-plane pair and
//!   axis-separated, collision-checked movement
//! - **Display/Input**: macroquad glue for the window, key state, and
//!   vertical-line drawing
//!
//! Columns are independent of one another; the whole frame is recomputed
//! from the player pose and the immutable map every iteration of the loop.

pub mod input;
pub mod player;
pub mod raycast;
pub mod rendering;
pub mod utils;
pub mod world;

pub use input::*;
pub use player::*;
pub use raycast::*;
pub use rendering::*;
pub use utils::*;
pub use world::*;

/// Core error type for the mazecast engine.
#[derive(thiserror::Error, Debug)]
pub enum MazecastError {
    /// Map cell data does not match the declared side length
    #[error("map data has {got} cells, expected {expected} for a {side}x{side} grid")]
    MapSize {
        side: usize,
        expected: usize,
        got: usize,
    },

    /// A map cell carries a code with no material mapping
    #[error("unknown material code {code} at cell ({x}, {y})")]
    UnknownMaterial { code: u8, x: usize, y: usize },

    /// The map border is not fully walled
    #[error("map border is open at cell ({x}, {y})")]
    OpenBorder { x: usize, y: usize },

    /// A ray direction with both components zero cannot be cast
    #[error("ray direction is the zero vector")]
    DegenerateRay,

    /// The DDA walk ran out of steps without striking a wall
    #[error("ray marched {steps} cells without striking a wall")]
    RayOverrun { steps: u32 },

    /// Player pose violates a construction invariant
    #[error("invalid player pose: {0}")]
    InvalidPose(String),
}

/// Result type used throughout the mazecast codebase.
pub type MazecastResult<T> = Result<T, MazecastError>;

/// Version information for the renderer.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine configuration constants.
pub mod config {
    /// Window width in pixels
    pub const SCREEN_WIDTH: u32 = 1280;

    /// Window height in pixels
    pub const SCREEN_HEIGHT: u32 = 720;

    /// Side length of the square maze grid, in cells
    pub const MAP_SIZE: usize = 16;

    /// Player translation speed in grid cells per frame
    pub const MOVE_SPEED: f32 = 0.05;

    /// Player rotation step in radians per rotate event
    pub const ROTATE_SPEED: f32 = 0.025;

    /// Camera plane half-width; encodes the horizontal field of view
    pub const PLANE_MAGNITUDE: f32 = 0.66;

    /// Upper bound on DDA steps per ray; a ray on an enclosed map strikes
    /// a border wall long before this
    pub const MAX_RAY_STEPS: u32 = 4 * MAP_SIZE as u32;

    /// Window title
    pub const WINDOW_TITLE: &str = "The Maze";
}
