//! Heightfield meshing: grid triangulation and solid closure.
#![forbid(unsafe_code)]

pub mod grid;
pub mod params;
pub mod solid;

mod error;

pub use error::{BuildError, ConfigError};
pub use grid::HeightGrid;
pub use params::BuildParams;

use relief_geom::Triangle;

/// Builds a watertight terrain solid from raw height offsets.
///
/// The offset count gates the build: only odd-length sequences are accepted.
/// `N = floor(sqrt(len))` cells per side; offsets are applied to interior
/// grid points only, so the footprint boundary stays on the base plane and
/// the closure walls always meet the top surface flush.
pub fn build_terrain(offsets: &[f32], params: &BuildParams) -> Result<Vec<Triangle>, BuildError> {
    if offsets.len() % 2 != 1 {
        return Err(BuildError::InvalidSampleCount {
            len: offsets.len(),
        });
    }

    let cells = (offsets.len() as f64).sqrt().floor() as usize;
    let mut grid = HeightGrid::new(cells, params.square_size);

    let consumed = grid.apply_offsets(offsets);
    if consumed < offsets.len() {
        log::debug!(
            "dropped {} height samples beyond interior capacity",
            offsets.len() - consumed
        );
    }

    let mut tris = grid.triangulate();
    log::info!(
        "grid: {cells}x{cells} squares, {} top triangles, side length {:.2}",
        tris.len(),
        grid.side_length()
    );

    solid::close_solid(&mut tris, grid.side_length(), params.base_height);
    Ok(tris)
}
