//! Binary STL export and import for triangle soups.
#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use relief_geom::{Triangle, Vec3};
use thiserror::Error;

const HEADER_LEN: usize = 80;
// normal + 3 vertices (12 f32) + attribute byte count
const RECORD_LEN: usize = 50;

#[derive(Debug, Error)]
pub enum StlError {
    #[error("stl i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("triangle count {0} exceeds the format's u32 limit")]
    TooManyTriangles(usize),

    #[error("stl data truncated: header says {expected} triangles, found {read}")]
    Truncated { expected: u32, read: u32 },
}

/// Writes `tris` as binary STL: an 80-byte header, a little-endian u32
/// triangle count, then one 50-byte record per triangle (normal, three
/// vertices, zero attribute byte count). Normals are computed from winding.
pub fn write_stl<W: Write>(mut w: W, tris: &[Triangle]) -> Result<(), StlError> {
    let count = u32::try_from(tris.len()).map_err(|_| StlError::TooManyTriangles(tris.len()))?;

    let mut header = [0u8; HEADER_LEN];
    let tag = b"relief heightfield solid";
    header[..tag.len()].copy_from_slice(tag);
    w.write_all(&header)?;
    w.write_u32::<LittleEndian>(count)?;

    for t in tris {
        write_vec3(&mut w, t.normal())?;
        write_vec3(&mut w, t.a)?;
        write_vec3(&mut w, t.b)?;
        write_vec3(&mut w, t.c)?;
        w.write_u16::<LittleEndian>(0)?;
    }
    Ok(())
}

/// Writes `tris` to a file at `path`, replacing any existing file.
pub fn save_stl(path: impl AsRef<Path>, tris: &[Triangle]) -> Result<(), StlError> {
    let mut w = BufWriter::new(File::create(path)?);
    write_stl(&mut w, tris)?;
    w.flush()?;
    Ok(())
}

/// Reads a binary STL back into a triangle soup. Stored normals are
/// ignored; winding is the source of truth.
pub fn read_stl<R: Read>(mut r: R) -> Result<Vec<Triangle>, StlError> {
    let mut header = [0u8; HEADER_LEN];
    r.read_exact(&mut header)?;
    let expected = r.read_u32::<LittleEndian>()?;

    let mut tris = Vec::new();
    let mut record = [0u8; RECORD_LEN];
    for read in 0..expected {
        if let Err(e) = r.read_exact(&mut record) {
            return Err(match e.kind() {
                io::ErrorKind::UnexpectedEof => StlError::Truncated { expected, read },
                _ => StlError::Io(e),
            });
        }
        // skip the stored normal at the front of the record
        let mut cur = &record[12..];
        let a = read_vec3(&mut cur)?;
        let b = read_vec3(&mut cur)?;
        let c = read_vec3(&mut cur)?;
        tris.push(Triangle::new(a, b, c));
    }
    Ok(tris)
}

fn write_vec3<W: Write>(w: &mut W, v: Vec3) -> io::Result<()> {
    w.write_f32::<LittleEndian>(v.x)?;
    w.write_f32::<LittleEndian>(v.y)?;
    w.write_f32::<LittleEndian>(v.z)
}

fn read_vec3<R: Read>(r: &mut R) -> io::Result<Vec3> {
    let x = r.read_f32::<LittleEndian>()?;
    let y = r.read_f32::<LittleEndian>()?;
    let z = r.read_f32::<LittleEndian>()?;
    Ok(Vec3::new(x, y, z))
}
