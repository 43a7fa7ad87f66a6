//! Grid-indexed height store and top-surface triangulation.

use relief_geom::{Triangle, Vec3};

/// An N×N-cell square lattice with one owned height per grid point.
///
/// Grid point `(col, row)` sits at world `(col·square_size, row·square_size)`.
/// Triangulation reads every vertex height from this store, so all triangles
/// touching a grid point always agree on its z.
#[derive(Clone, Debug)]
pub struct HeightGrid {
    cells: usize,
    square_size: f32,
    // (cells+1)^2 lattice heights, row-major
    heights: Vec<f32>,
}

impl HeightGrid {
    pub fn new(cells: usize, square_size: f32) -> Self {
        Self {
            cells,
            square_size,
            heights: vec![0.0; (cells + 1) * (cells + 1)],
        }
    }

    #[inline]
    fn idx(&self, col: usize, row: usize) -> usize {
        row * (self.cells + 1) + col
    }

    /// Number of cells per side.
    #[inline]
    pub fn cells(&self) -> usize {
        self.cells
    }

    #[inline]
    pub fn square_size(&self) -> f32 {
        self.square_size
    }

    /// World-space extent of the grid in both axes.
    #[inline]
    pub fn side_length(&self) -> f32 {
        self.cells as f32 * self.square_size
    }

    #[inline]
    pub fn height(&self, col: usize, row: usize) -> f32 {
        self.heights[self.idx(col, row)]
    }

    /// Sets one grid point's height. Every triangle vertex at that grid
    /// point reflects the new z on the next triangulation.
    pub fn set_height(&mut self, col: usize, row: usize, z: f32) {
        let i = self.idx(col, row);
        self.heights[i] = z;
    }

    /// Consumes offsets over the interior grid points, column outer / row
    /// inner, starting at (1,1). Stops when the offsets run out, leaving the
    /// remaining interior points at height 0; returns how many offsets were
    /// consumed. Perimeter points are never touched.
    pub fn apply_offsets(&mut self, offsets: &[f32]) -> usize {
        let mut next = 0;
        for col in 1..self.cells {
            for row in 1..self.cells {
                let Some(&z) = offsets.get(next) else {
                    return next;
                };
                self.set_height(col, row, z);
                next += 1;
            }
        }
        next
    }

    #[inline]
    fn point(&self, col: usize, row: usize) -> Vec3 {
        Vec3::new(
            col as f32 * self.square_size,
            row as f32 * self.square_size,
            self.height(col, row),
        )
    }

    /// Emits the top surface: two triangles per cell, split along a fixed
    /// diagonal so both halves of a cell always share the tr-bl edge.
    /// Winding keeps the surface normal pointing up (+z).
    pub fn triangulate(&self) -> Vec<Triangle> {
        let mut tris = Vec::with_capacity(2 * self.cells * self.cells);
        for col in 0..self.cells {
            for row in 0..self.cells {
                let tl = self.point(col, row);
                let tr = self.point(col + 1, row);
                let bl = self.point(col, row + 1);
                let br = self.point(col + 1, row + 1);
                tris.push(Triangle::new(tl, tr, bl));
                tris.push(Triangle::new(tr, br, bl));
            }
        }
        tris
    }
}
