//! Export command for rasterizing a pattern.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::{load_settings, ExportConfig, DEFAULT_EXPORT_FILE};
use crate::data::load_pattern;
use crate::export::{export_pattern, ExportError, ExportFormat};


/// Run the export command.
///
/// Pipeline failures (empty selection, unsupported format, bad config) are
/// surfaced as user-facing messages here and never propagate further.
pub fn run(
    file: String,
    format: ExportFormat,
    resolution: Option<u32>,
    margin: Option<u32>,
    output: Option<String>,
) -> Result<()> {
    let settings = load_settings()?;
    let config = ExportConfig::resolve(&settings, resolution, margin);

    let pattern_path = PathBuf::from(file);
    let grid = load_pattern(&pattern_path)?;

    let output_path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE));

    println!("Exporting to {}...", format);

    let bytes = match export_pattern(&grid, &config, format) {
        Ok(bytes) => bytes,
        Err(err @ ExportError::EmptySelection) => {
            eprintln!("\x1b[1m\x1b[31m! {}\x1b[0m", err);
            eprintln!(
                "Fill some cells first: \x1b[36mgst paint {} ROW,COL\x1b[0m",
                pattern_path.display()
            );
            return Ok(());
        }
        Err(err) => {
            eprintln!("\x1b[1m\x1b[31m! {}\x1b[0m", err);
            return Ok(());
        }
    };

    std::fs::write(&output_path, &bytes)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!("\x1b[32m+ Exported to: {}\x1b[0m", output_path.display());

    Ok(())
}
