//! Test asset generation
//!
//! Writes small OBJ files for the integration tests.

use std::fs;
use std::io::Write;
use std::path::Path;

/// Number of lines written by [`generate_cube_obj`]
pub const CUBE_LINES: usize = 29;

/// Generate a unit cube OBJ with normals, UVs and blank separator lines
pub fn generate_cube_obj(path: &Path) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;

    writeln!(file, "# Simple cube for testing")?;
    writeln!(file)?;

    // Vertices (8 corners of unit cube)
    writeln!(file, "v -0.5 -0.5  0.5")?;
    writeln!(file, "v  0.5 -0.5  0.5")?;
    writeln!(file, "v  0.5  0.5  0.5")?;
    writeln!(file, "v -0.5  0.5  0.5")?;
    writeln!(file, "v -0.5 -0.5 -0.5")?;
    writeln!(file, "v  0.5 -0.5 -0.5")?;
    writeln!(file, "v  0.5  0.5 -0.5")?;
    writeln!(file, "v -0.5  0.5 -0.5")?;
    writeln!(file)?;

    // Normals
    writeln!(file, "vn  0  0  1")?;
    writeln!(file, "vn  0  0 -1")?;
    writeln!(file, "vn  1  0  0")?;
    writeln!(file, "vn -1  0  0")?;
    writeln!(file, "vn  0  1  0")?;
    writeln!(file, "vn  0 -1  0")?;
    writeln!(file)?;

    // UVs
    writeln!(file, "vt 0 0")?;
    writeln!(file, "vt 1 0")?;
    writeln!(file, "vt 1 1")?;
    writeln!(file, "vt 0 1")?;
    writeln!(file)?;

    // Faces as quads
    writeln!(file, "f 1/1/1 2/2/1 3/3/1 4/4/1")?;
    writeln!(file, "f 6/1/2 5/2/2 8/3/2 7/4/2")?;
    writeln!(file, "f 2/1/3 6/2/3 7/3/3 3/4/3")?;
    writeln!(file, "f 5/1/4 1/2/4 4/3/4 8/4/4")?;
    writeln!(file, "f 4/1/5 3/2/5 7/3/5 8/4/5")?;
    writeln!(file, "f 5/1/6 6/2/6 2/3/6 1/4/6")?;

    Ok(())
}

/// Generate a single-line OBJ with no trailing newline
pub fn generate_point_obj(path: &Path) -> std::io::Result<()> {
    fs::write(path, "v 0 0 0")
}

/// Generate an OBJ whose object name contains double quotes
pub fn generate_quoted_obj(path: &Path) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    writeln!(file, "o \"Hero\"")?;
    writeln!(file, "v 0 0 0")?;
    Ok(())
}
