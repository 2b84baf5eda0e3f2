//! # Utilities Module
//!
//! Vector math shared by the ray caster and the player controller.

pub mod math;

pub use math::*;
