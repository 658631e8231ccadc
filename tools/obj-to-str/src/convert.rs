//! File-level OBJ conversion

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::escape::escape_lines;

/// Extension of generated files
pub const OUTPUT_EXT: &str = "txt";

/// Output path for `input` inside `out_dir`: same stem, `.txt` extension.
pub fn output_path(input: &Path, out_dir: &Path) -> Result<PathBuf, ConvertError> {
    let stem = input
        .file_stem()
        .ok_or_else(|| ConvertError::InvalidInputName {
            path: input.to_path_buf(),
        })?;

    // Built by hand: with_extension() would eat the "v2" of "ship.v2"
    let mut name = stem.to_os_string();
    name.push(".");
    name.push(OUTPUT_EXT);
    Ok(out_dir.join(name))
}

/// Read an OBJ file and return the escaped literals without touching disk
pub fn convert_obj_to_memory(input: &Path) -> Result<Vec<u8>, ConvertError> {
    let content = std::fs::read(input).map_err(|source| ConvertError::InputNotFound {
        path: input.to_path_buf(),
        source,
    })?;
    tracing::debug!("Read {} bytes from {:?}", content.len(), input);

    Ok(escape_lines(&content))
}

/// Convert an OBJ file, writing `<stem>.txt` into `out_dir`
///
/// The input is read in full before the output is created, so a missing
/// input never leaves an output file behind. A failure while writing may.
pub fn convert_obj_into(input: &Path, out_dir: &Path) -> Result<PathBuf, ConvertError> {
    let output = output_path(input, out_dir)?;
    let data = convert_obj_to_memory(input)?;

    let write_err = |source: std::io::Error| ConvertError::OutputWriteFailure {
        path: output.clone(),
        source,
    };

    let file = File::create(&output).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&data).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    let records = data.iter().filter(|&&b| b == b'\n').count();
    tracing::info!(
        "Converted OBJ: {} lines, {} bytes -> {:?}",
        records,
        data.len(),
        output
    );

    Ok(output)
}

/// Convert an OBJ file into the current working directory
pub fn convert_obj(input: &Path) -> Result<PathBuf, ConvertError> {
    let cwd = std::env::current_dir().map_err(|source| ConvertError::OutputWriteFailure {
        path: PathBuf::from("."),
        source,
    })?;
    convert_obj_into(input, &cwd)
}
