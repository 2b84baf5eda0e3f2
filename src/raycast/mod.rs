//! # Ray Casting
//!
//! DDA (Digital Differential Analysis) grid traversal: a ray is stepped
//! from grid-line crossing to grid-line crossing rather than sampled at
//! fixed intervals, so the first wall cell along the ray is found exactly.
//!
//! The reported distance is the perpendicular distance, the hit projected
//! onto the view-plane normal rather than the Euclidean ray length. Using it for
//! wall heights is what prevents the fisheye distortion a true-distance
//! renderer shows.

use crate::utils::math::{GridPos, Vec2};
use crate::world::{Cell, GridMap, Material};
use crate::{config, MazecastError, MazecastResult};

/// Stand-in for an infinite per-cell crossing distance when a ray runs
/// parallel to an axis; that axis then never wins the side-distance race.
const NO_CROSSING: f32 = 1e30;

/// Which kind of grid line a ray crossed when it entered its hit cell.
///
/// Crossing a vertical grid line exposes an east- or west-facing wall
/// surface; a horizontal line a north- or south-facing one. The renderer
/// shades the two differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    EastWest,
    NorthSouth,
}

/// The result of casting a single ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Grid coordinates of the wall cell struck
    pub cell: GridPos,
    /// Material of that wall cell
    pub material: Material,
    /// Which kind of grid line the ray crossed into the cell
    pub axis: Axis,
    /// Perpendicular distance from the origin to the strike, in cells
    pub distance: f32,
}

/// Casts a ray from `origin` along `dir` and returns the first wall struck.
///
/// `dir` need not be normalized; distances are measured in the ray
/// parameter of a unit-per-cell traversal, so the result is in grid-cell
/// units either way. A zero component is fine (the ray simply never
/// crosses that axis), but a direction with *both* components zero is
/// rejected as [`MazecastError::DegenerateRay`].
///
/// On a map with a fully walled border the walk always terminates; the
/// step bound [`config::MAX_RAY_STEPS`] is a last-resort guard that turns
/// an unenclosed map into an explicit [`MazecastError::RayOverrun`]
/// instead of an out-of-bounds walk.
pub fn cast(map: &GridMap, origin: Vec2, dir: Vec2) -> MazecastResult<RayHit> {
    if dir.x == 0.0 && dir.y == 0.0 {
        return Err(MazecastError::DegenerateRay);
    }

    let mut cell = GridPos::new(origin.x.floor() as i32, origin.y.floor() as i32);

    // Ray-parameter cost of crossing one full cell along each axis.
    let delta_x = if dir.x == 0.0 { NO_CROSSING } else { (1.0 / dir.x).abs() };
    let delta_y = if dir.y == 0.0 { NO_CROSSING } else { (1.0 / dir.y).abs() };

    // Step direction and distance to the first grid-line crossing per axis.
    let (step_x, mut side_x) = if dir.x < 0.0 {
        (-1, (origin.x - cell.x as f32) * delta_x)
    } else {
        (1, (cell.x as f32 + 1.0 - origin.x) * delta_x)
    };
    let (step_y, mut side_y) = if dir.y < 0.0 {
        (-1, (origin.y - cell.y as f32) * delta_y)
    } else {
        (1, (cell.y as f32 + 1.0 - origin.y) * delta_y)
    };

    // Advance whichever axis has the nearer pending crossing until a wall
    // cell is entered.
    let mut axis = Axis::EastWest;
    for _ in 0..config::MAX_RAY_STEPS {
        if side_x < side_y {
            side_x += delta_x;
            cell.x += step_x;
            axis = Axis::EastWest;
        } else {
            side_y += delta_y;
            cell.y += step_y;
            axis = Axis::NorthSouth;
        }

        match map.cell(cell.x, cell.y) {
            Some(Cell::Wall(material)) => {
                // Distance to the crossing that entered the cell, i.e. the
                // side distance before its final increment.
                let distance = match axis {
                    Axis::EastWest => side_x - delta_x,
                    Axis::NorthSouth => side_y - delta_y,
                };
                return Ok(RayHit {
                    cell,
                    material,
                    axis,
                    distance,
                });
            }
            Some(Cell::Empty) => {}
            // Off the grid: only reachable when the border invariant is
            // violated. Fall through to the overrun report.
            None => break,
        }
    }

    Err(MazecastError::RayOverrun {
        steps: config::MAX_RAY_STEPS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_westward_ray_hits_border() {
        let map = GridMap::the_maze().unwrap();
        let hit = cast(&map, Vec2::new(4.0, 4.0), Vec2::new(-1.0, 0.0)).unwrap();
        assert_eq!(hit.cell, GridPos::new(0, 4));
        assert_eq!(hit.material, Material::Brick);
        assert_eq!(hit.axis, Axis::EastWest);
        // entry plane of the border cell is x = 1.0
        assert_eq!(hit.distance, 3.0);
    }

    #[test]
    fn test_southward_ray_hits_cross_wall() {
        let map = GridMap::the_maze().unwrap();
        let hit = cast(&map, Vec2::new(4.0, 4.0), Vec2::new(0.0, 1.0)).unwrap();
        assert_eq!(hit.cell, GridPos::new(4, 6));
        assert_eq!(hit.material, Material::Slate);
        assert_eq!(hit.axis, Axis::NorthSouth);
        assert_eq!(hit.distance, 2.0);
    }

    #[test]
    fn test_diagonal_ray() {
        let map = GridMap::the_maze().unwrap();
        let hit = cast(&map, Vec2::new(4.5, 4.5), Vec2::new(1.0, 1.0)).unwrap();
        assert_eq!(hit.cell, GridPos::new(5, 6));
        assert_eq!(hit.axis, Axis::NorthSouth);
        assert_eq!(hit.distance, 1.5);
    }

    #[test]
    fn test_origin_on_grid_line_gives_zero_distance() {
        // 3x3 map, only the center open; origin sits exactly on the grid
        // line shared with the western wall cell
        let codes = [1, 1, 1, 1, 0, 1, 1, 1, 1];
        let map = GridMap::from_codes(3, &codes).unwrap();
        let hit = cast(&map, Vec2::new(1.0, 1.5), Vec2::new(-1.0, 0.0)).unwrap();
        assert_eq!(hit.cell, GridPos::new(0, 1));
        assert_eq!(hit.axis, Axis::EastWest);
        assert_eq!(hit.distance, 0.0);
    }

    #[test]
    fn test_zero_direction_rejected() {
        let map = GridMap::the_maze().unwrap();
        let err = cast(&map, Vec2::new(4.0, 4.0), Vec2::new(0.0, 0.0)).unwrap_err();
        assert!(matches!(err, MazecastError::DegenerateRay));
    }

    #[test]
    fn test_all_directions_terminate() {
        let map = GridMap::the_maze().unwrap();
        let origin = Vec2::new(2.5, 13.5);
        for i in 0..64 {
            let angle = i as f32 * std::f32::consts::TAU / 64.0;
            let dir = Vec2::new(angle.cos(), angle.sin());
            let hit = cast(&map, origin, dir).unwrap();
            assert!(hit.distance >= 0.0);
        }
    }
}
