//! New pattern command.

use std::path::PathBuf;

use anyhow::Result;

use crate::config::DEFAULT_PATTERN_FILE;
use crate::data::{parse_dimensions, save_pattern};
use crate::models::PatternGrid;


/// Run the new command.
pub fn run(size: &str, output: Option<String>) -> Result<()> {
    let (rows, cols) = parse_dimensions(size)?;

    let path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PATTERN_FILE));

    let grid = PatternGrid::new(rows, cols);
    save_pattern(&grid, &path)?;

    println!(
        "\x1b[32m+ Created {}x{} pattern: {}\x1b[0m",
        rows,
        cols,
        path.display()
    );
    println!(
        "\x1b[2mTip: Fill cells with\x1b[0m \x1b[36mgst paint {} ROW,COL...\x1b[0m",
        path.display()
    );

    Ok(())
}
