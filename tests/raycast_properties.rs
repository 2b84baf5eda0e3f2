//! Property tests for the ray caster, the rotation laws, and slice
//! clamping.

use std::f32::consts::TAU;

use proptest::prelude::*;

use mazecast::{raycast, ColumnRenderer, GridMap, Palette, Player, Spin, Vec2};

fn fov_angle(player: &Player) -> f32 {
    player
        .dir
        .cross(player.plane)
        .atan2(player.dir.dot(player.plane))
}

proptest! {
    /// Any ray cast from inside an open cell of the enclosed maze
    /// terminates with a hit at a non-negative perpendicular distance.
    #[test]
    fn cast_terminates_on_enclosed_map(
        x in 1i32..15,
        y in 1i32..15,
        fx in 0.05f32..0.95,
        fy in 0.05f32..0.95,
        angle in 0.0f32..TAU,
    ) {
        let map = GridMap::the_maze().unwrap();
        prop_assume!(map.is_open(x, y));

        let origin = Vec2::new(x as f32 + fx, y as f32 + fy);
        let dir = Vec2::new(angle.cos(), angle.sin());
        let hit = raycast::cast(&map, origin, dir).unwrap();
        prop_assert!(hit.distance >= 0.0);
        prop_assert!(!map.is_open(hit.cell.x, hit.cell.y));
    }

    /// A ray pointed straight at a wall at least one cell away reports a
    /// strictly positive distance.
    #[test]
    fn cast_into_facing_wall_is_positive(
        y in 1i32..15,
        fy in 0.05f32..0.95,
        fx in 0.05f32..0.95,
    ) {
        let map = GridMap::the_maze().unwrap();
        prop_assume!(map.is_open(1, y));

        // from inside the westernmost open column, the western border is
        // at least one cell away for any origin past its near face
        let origin = Vec2::new(2.0 + fx, y as f32 + fy);
        prop_assume!(map.is_open(2, y));
        let hit = raycast::cast(&map, origin, Vec2::new(-1.0, 0.0)).unwrap();
        prop_assert!(hit.distance > 0.0);
    }

    /// Rotating one step and rotating back restores the pose within
    /// floating-point tolerance.
    #[test]
    fn rotation_has_an_inverse(angle in 0.0f32..TAU) {
        let dir = Vec2::new(angle.cos(), angle.sin());
        let plane = dir.perp().scaled(0.66);
        let mut player = Player::new(Vec2::new(4.0, 4.0), dir, plane).unwrap();
        let original = player;

        player.rotate(Spin::Right);
        player.rotate(Spin::Left);

        prop_assert!((player.dir.x - original.dir.x).abs() < 1e-5);
        prop_assert!((player.dir.y - original.dir.y).abs() < 1e-5);
        prop_assert!((player.plane.x - original.plane.x).abs() < 1e-5);
        prop_assert!((player.plane.y - original.plane.y).abs() < 1e-5);
    }

    /// The angle between the facing direction and the camera plane is
    /// invariant under any sequence of rotations.
    #[test]
    fn rotation_preserves_fov(
        spins in prop::collection::vec(
            prop_oneof![Just(Spin::Left), Just(Spin::Right)],
            0..200,
        ),
    ) {
        let mut player = Player::spawn().unwrap();
        let initial = fov_angle(&player);
        for spin in spins {
            player.rotate(spin);
        }
        prop_assert!((fov_angle(&player) - initial).abs() < 1e-4);
    }

    /// Every rendered slice stays inside the screen extent for any player
    /// pose, including poses flush against a wall.
    #[test]
    fn slices_stay_on_screen(
        x in 1i32..15,
        y in 1i32..15,
        fx in 0.02f32..0.98,
        fy in 0.02f32..0.98,
        angle in 0.0f32..TAU,
    ) {
        let map = GridMap::the_maze().unwrap();
        prop_assume!(map.is_open(x, y));

        let dir = Vec2::new(angle.cos(), angle.sin());
        let player = Player::new(
            Vec2::new(x as f32 + fx, y as f32 + fy),
            dir,
            dir.perp().scaled(0.66),
        )
        .unwrap();

        let renderer = ColumnRenderer::new(160, 120, Palette::default());
        let slices = renderer.render_frame(&map, &player).unwrap();
        prop_assert_eq!(slices.len(), 160);
        for slice in slices {
            prop_assert!(slice.top >= 0);
            prop_assert!(slice.bottom <= 120);
            prop_assert!(slice.top <= slice.bottom);
        }
    }
}
