//! # Vector Math
//!
//! 2-D vector primitives. The same rotation is applied to the player's
//! facing vector and camera plane, which keeps the angle between them (and
//! so the field of view) constant across arbitrary turn sequences.

/// A 2-D float vector used for positions, facing directions, and the
/// camera plane.
///
/// # Examples
///
/// ```
/// use mazecast::Vec2;
///
/// let v = Vec2::new(3.0, 4.0);
/// assert_eq!(v.length_sq(), 25.0);
/// assert_eq!(v.scaled(2.0), Vec2::new(6.0, 8.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Creates a new vector with the given components.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns this vector scaled by a factor.
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Rotates this vector counter-clockwise by an angle in radians.
    ///
    /// Uses the standard 2-D rotation matrix (cos/sin combination); both
    /// the facing vector and the camera plane go through this one helper.
    pub fn rotated(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Returns this vector rotated 90 degrees counter-clockwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazecast::Vec2;
    ///
    /// assert_eq!(Vec2::new(1.0, 0.0).perp(), Vec2::new(0.0, 1.0));
    /// ```
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Returns the squared length of this vector.
    pub fn length_sq(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Returns the dot product with another vector.
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the 2-D cross product (signed area) with another vector.
    ///
    /// Zero exactly when the two vectors are parallel or one is zero.
    pub fn cross(self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

/// An integer cell coordinate or per-axis step direction on the grid.
///
/// # Examples
///
/// ```
/// use mazecast::GridPos;
///
/// let cell = GridPos::new(4, 7);
/// assert_eq!(cell.x, 4);
/// assert_eq!(cell.y, 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    /// Creates a new grid position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
    }

    #[test]
    fn test_vec2_arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(a - b, Vec2::new(-2.0, 3.0));
        assert_eq!(a.scaled(-2.0), Vec2::new(-2.0, -4.0));
    }

    #[test]
    fn test_rotation_quarter_turn_matches_perp() {
        let v = Vec2::new(0.3, -1.7);
        let rotated = v.rotated(std::f32::consts::FRAC_PI_2);
        assert!(approx_eq(rotated, v.perp()));
    }

    #[test]
    fn test_rotation_inverse() {
        let v = Vec2::new(-1.0, 0.0);
        let back = v.rotated(0.37).rotated(-0.37);
        assert!(approx_eq(back, v));
    }

    #[test]
    fn test_rotation_preserves_length() {
        let v = Vec2::new(2.0, 3.0);
        let rotated = v.rotated(1.234);
        assert!((rotated.length_sq() - v.length_sq()).abs() < 1e-4);
    }

    #[test]
    fn test_cross_detects_parallel() {
        let v = Vec2::new(2.0, 1.0);
        assert_eq!(v.cross(v.scaled(-3.0)), 0.0);
        assert!(v.cross(v.perp()) > 0.0);
    }
}
