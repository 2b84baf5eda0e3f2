//! # Input Module
//!
//! Per-frame input snapshots for the player controller.
//!
//! Movement keys are sampled as held state every frame; rotation is a
//! discrete event per key press, so one press turns the player by exactly
//! one rotation step.

use macroquad::prelude::*;

/// A discrete rotation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    /// Counter-clockwise (Q)
    Left,
    /// Clockwise (E)
    Right,
}

/// Snapshot of the player-relevant input for one frame.
///
/// The four movement flags are independent; the controller resolves each
/// one against the map on its own, which is what produces wall sliding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub forward: bool,
    pub back: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub spin: Option<Spin>,
    pub quit: bool,
}

/// Polls macroquad key state into [`FrameInput`] snapshots.
pub struct InputHandler;

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    pub fn new() -> Self {
        Self
    }

    /// Samples the keyboard for this frame.
    ///
    /// W/S move forward/back, A/D strafe, Q/E rotate, Escape quits.
    pub fn poll(&self) -> FrameInput {
        let spin = if is_key_pressed(KeyCode::Q) {
            Some(Spin::Left)
        } else if is_key_pressed(KeyCode::E) {
            Some(Spin::Right)
        } else {
            None
        };

        FrameInput {
            forward: is_key_down(KeyCode::W),
            back: is_key_down(KeyCode::S),
            strafe_left: is_key_down(KeyCode::A),
            strafe_right: is_key_down(KeyCode::D),
            spin,
            quit: is_key_pressed(KeyCode::Escape),
        }
    }
}
