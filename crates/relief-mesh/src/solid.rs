//! Solid closure: the wall and bottom faces that seal a heightfield.

use relief_geom::{Triangle, Vec3};

/// Triangles appended by [`close_solid`], independent of grid size.
pub const CLOSURE_TRIANGLES: usize = 8;

/// The four vertical walls of the closure box, named by footprint edge.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Wall {
    North,
    East,
    South,
    West,
}

impl Wall {
    pub const ALL: [Wall; 4] = [Wall::North, Wall::East, Wall::South, Wall::West];

    /// Outward unit normal of this wall.
    #[inline]
    pub fn normal(self) -> Vec3 {
        match self {
            Wall::North => Vec3::new(0.0, -1.0, 0.0),
            Wall::East => Vec3::new(1.0, 0.0, 0.0),
            Wall::South => Vec3::new(0.0, 1.0, 0.0),
            Wall::West => Vec3::new(-1.0, 0.0, 0.0),
        }
    }

    /// The wall's two triangles, spanning the footprint edge from z = 0 down
    /// to z = -base_height. Wound so the normal faces outward.
    fn panels(self, side: f32, base_height: f32) -> [Triangle; 2] {
        let b = -base_height;
        match self {
            Wall::North => [
                Triangle::new(
                    Vec3::new(0.0, 0.0, 0.0),
                    Vec3::new(0.0, 0.0, b),
                    Vec3::new(side, 0.0, 0.0),
                ),
                Triangle::new(
                    Vec3::new(side, 0.0, 0.0),
                    Vec3::new(0.0, 0.0, b),
                    Vec3::new(side, 0.0, b),
                ),
            ],
            Wall::East => [
                Triangle::new(
                    Vec3::new(side, 0.0, 0.0),
                    Vec3::new(side, 0.0, b),
                    Vec3::new(side, side, 0.0),
                ),
                Triangle::new(
                    Vec3::new(side, 0.0, b),
                    Vec3::new(side, side, b),
                    Vec3::new(side, side, 0.0),
                ),
            ],
            Wall::South => [
                Triangle::new(
                    Vec3::new(0.0, side, b),
                    Vec3::new(0.0, side, 0.0),
                    Vec3::new(side, side, 0.0),
                ),
                Triangle::new(
                    Vec3::new(0.0, side, b),
                    Vec3::new(side, side, 0.0),
                    Vec3::new(side, side, b),
                ),
            ],
            Wall::West => [
                Triangle::new(
                    Vec3::new(0.0, 0.0, 0.0),
                    Vec3::new(0.0, side, 0.0),
                    Vec3::new(0.0, 0.0, b),
                ),
                Triangle::new(
                    Vec3::new(0.0, 0.0, b),
                    Vec3::new(0.0, side, 0.0),
                    Vec3::new(0.0, side, b),
                ),
            ],
        }
    }
}

/// Appends the four walls and the bottom face that close the top surface
/// into a solid. Always exactly [`CLOSURE_TRIANGLES`] triangles; the walls
/// meet the top surface at the footprint boundary on the base plane, which
/// stays at z = 0 because only interior grid points ever receive height.
pub fn close_solid(tris: &mut Vec<Triangle>, side_length: f32, base_height: f32) {
    for wall in Wall::ALL {
        tris.extend(wall.panels(side_length, base_height));
    }

    let b = -base_height;
    tris.push(Triangle::new(
        Vec3::new(0.0, side_length, b),
        Vec3::new(side_length, 0.0, b),
        Vec3::new(0.0, 0.0, b),
    ));
    tris.push(Triangle::new(
        Vec3::new(side_length, side_length, b),
        Vec3::new(side_length, 0.0, b),
        Vec3::new(0.0, side_length, b),
    ));
}
