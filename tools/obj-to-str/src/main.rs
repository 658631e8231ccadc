//! obj-to-str - embed Wavefront OBJ models in source code
//!
//! Reads an OBJ file and writes `<stem>.txt` to the current directory, with
//! every input line wrapped as a `"...\n"` string literal.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "obj-to-str")]
#[command(about = "Convert a Wavefront OBJ file into escaped string literals")]
#[command(version)]
struct Cli {
    /// Name of the Wavefront OBJ file to convert
    #[arg(long)]
    filename: PathBuf,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    tracing::info!("Converting {:?}", cli.filename);
    let output = obj_to_str::convert_obj(&cli.filename)
        .with_context(|| format!("Failed to convert {:?}", cli.filename))?;
    tracing::info!("Done! Wrote {:?}", output);

    Ok(())
}
