//! # Wall Palette
//!
//! Material base colors and the strike-axis shading rule.

use crate::raycast::Axis;
use crate::world::Material;

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Creates a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns this color with the red/green/blue channels halved and the
    /// alpha unchanged, the darker of the two wall tones.
    pub fn shaded(self) -> Self {
        Self::new(self.r / 2, self.g / 2, self.b / 2, self.a)
    }
}

/// Backdrop color the frame is cleared to before the column pass.
pub const BACKDROP: Rgba = Rgba::new(0x18, 0x18, 0x18, 0xFF);

/// Base colors for every wall material.
///
/// The mapping is exhaustive over [`Material`], so a decoded map can always
/// be colored; unknown material codes never get this far (they are rejected
/// when the map is constructed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub brick: Rgba,
    pub moss: Rgba,
    pub slate: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            brick: Rgba::new(0xFF, 0x00, 0x00, 0xFF),
            moss: Rgba::new(0x00, 0xFF, 0x00, 0xFF),
            slate: Rgba::new(0x00, 0x00, 0xFF, 0xFF),
        }
    }
}

impl Palette {
    /// Returns the base color for a material.
    pub fn base(&self, material: Material) -> Rgba {
        match material {
            Material::Brick => self.brick,
            Material::Moss => self.moss,
            Material::Slate => self.slate,
        }
    }

    /// Returns the color a wall face renders with: the material's base
    /// color, darkened when the strike axis is north/south so the two wall
    /// orientations read as distinct surfaces.
    pub fn wall_color(&self, material: Material, axis: Axis) -> Rgba {
        let base = self.base(material);
        match axis {
            Axis::EastWest => base,
            Axis::NorthSouth => base.shaded(),
        }
    }
}
