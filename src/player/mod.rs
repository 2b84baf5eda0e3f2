//! # Player Module
//!
//! The player pose and its two operations: rotating the facing/plane pair
//! and collision-checked translation.
//!
//! Collision is resolved per axis, not with a single combined check: the x
//! and y components of a movement delta are accepted or refused
//! independently, so motion blocked on one axis still proceeds on the
//! other and the player slides along walls instead of sticking to them.

use crate::input::{FrameInput, Spin};
use crate::utils::math::Vec2;
use crate::world::GridMap;
use crate::{config, MazecastError, MazecastResult};

/// The player pose: continuous position, facing direction, and camera
/// plane.
///
/// `dir` and `plane` always rotate together through the same angle, so the
/// angle between them (which encodes the field of view) never drifts.
///
/// # Examples
///
/// ```
/// use mazecast::{Player, Vec2};
///
/// let player = Player::spawn().unwrap();
/// assert_eq!(player.pos, Vec2::new(4.0, 4.0));
/// assert_eq!(player.dir, Vec2::new(-1.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// Position in grid-cell units
    pub pos: Vec2,
    /// Facing direction
    pub dir: Vec2,
    /// Camera plane; its magnitude sets the field of view
    pub plane: Vec2,
}

impl Player {
    /// Creates a player, validating the pose invariants.
    ///
    /// `dir` must be non-zero and `plane` must not be parallel to it;
    /// together these guarantee that no per-column ray direction
    /// (`dir + plane * camera_x`) can ever be the zero vector. Rotation
    /// preserves both properties, so they hold for the whole run.
    pub fn new(pos: Vec2, dir: Vec2, plane: Vec2) -> MazecastResult<Self> {
        if dir.length_sq() == 0.0 {
            return Err(MazecastError::InvalidPose(
                "facing direction is the zero vector".to_string(),
            ));
        }
        if dir.cross(plane) == 0.0 {
            return Err(MazecastError::InvalidPose(
                "camera plane is parallel to the facing direction".to_string(),
            ));
        }
        Ok(Self { pos, dir, plane })
    }

    /// Creates the player at the maze starting pose: centered in the open
    /// west quarter, facing the western border wall.
    pub fn spawn() -> MazecastResult<Self> {
        Self::new(
            Vec2::new(4.0, 4.0),
            Vec2::new(-1.0, 0.0),
            Vec2::new(0.0, config::PLANE_MAGNITUDE),
        )
    }

    /// Rotates the facing direction and camera plane by one rotation step.
    pub fn rotate(&mut self, spin: Spin) {
        let angle = match spin {
            Spin::Left => config::ROTATE_SPEED,
            Spin::Right => -config::ROTATE_SPEED,
        };
        self.dir = self.dir.rotated(angle);
        self.plane = self.plane.rotated(angle);
    }

    /// Applies one frame of input: a rotation event if present, then each
    /// held movement direction.
    ///
    /// Strafing deltas are the forward delta rotated 90 degrees, so all
    /// four directions derive from `dir` alone. Blocked movement is a
    /// normal outcome, not an error; the delta is simply not applied.
    pub fn advance(&mut self, input: &FrameInput, map: &GridMap) {
        if let Some(spin) = input.spin {
            self.rotate(spin);
        }

        let forward = self.dir.scaled(config::MOVE_SPEED);
        if input.forward {
            self.try_step(forward, map);
        }
        if input.back {
            self.try_step(forward.scaled(-1.0), map);
        }
        if input.strafe_left {
            self.try_step(forward.perp(), map);
        }
        if input.strafe_right {
            self.try_step(forward.perp().scaled(-1.0), map);
        }
    }

    /// Moves by `delta` with per-axis collision: each component is applied
    /// only if its destination cell is open, checked against the position
    /// left by the other axis staying put.
    fn try_step(&mut self, delta: Vec2, map: &GridMap) {
        let next_x = self.pos.x + delta.x;
        if map.is_open(next_x.floor() as i32, self.pos.y.floor() as i32) {
            self.pos.x = next_x;
        }
        let next_y = self.pos.y + delta.y;
        if map.is_open(self.pos.x.floor() as i32, next_y.floor() as i32) {
            self.pos.y = next_y;
        }
    }
}
