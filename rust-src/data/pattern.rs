//! Pattern file parsing and serialization.
//!
//! A pattern file is plain text: one row per line, `#` for a filled cell and
//! `.` for an empty one. Lines starting with `;` are comments.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

use crate::models::PatternGrid;


const FILLED: char = '#';
const EMPTY: char = '.';
const COMMENT: char = ';';


/// Load a pattern grid from a text file.
pub fn load_pattern(path: &Path) -> Result<PatternGrid> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read pattern file: {}", path.display()))?;

    parse_pattern(&content)
        .with_context(|| format!("Failed to parse pattern file: {}", path.display()))
}


/// Save a pattern grid to a text file.
pub fn save_pattern(grid: &PatternGrid, path: &Path) -> Result<()> {
    fs::write(path, format_pattern(grid))
        .with_context(|| format!("Failed to write pattern file: {}", path.display()))
}


/// Parse pattern text into a grid.
pub fn parse_pattern(content: &str) -> Result<PatternGrid> {
    let mut rows: Vec<Vec<bool>> = Vec::new();

    for (line_num, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(COMMENT) {
            continue;
        }

        let mut row = Vec::with_capacity(line.len());
        for ch in line.chars() {
            match ch {
                FILLED => row.push(true),
                EMPTY => row.push(false),
                _ => anyhow::bail!("Invalid character '{}' on line {}", ch, line_num + 1),
            }
        }

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                anyhow::bail!(
                    "Row on line {} has {} cells, expected {}",
                    line_num + 1,
                    row.len(),
                    first.len()
                );
            }
        }

        rows.push(row);
    }

    if rows.is_empty() {
        anyhow::bail!("Pattern contains no rows");
    }

    let row_count = rows.len() as u32;
    let col_count = rows[0].len() as u32;
    let cells = rows.into_iter().flatten().collect();

    Ok(PatternGrid::from_cells(row_count, col_count, cells))
}


/// Serialize a grid to pattern text.
pub fn format_pattern(grid: &PatternGrid) -> String {
    let mut out = String::new();

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            out.push(if grid.is_filled(row, col) { FILLED } else { EMPTY });
        }
        out.push('\n');
    }

    out
}


/// Parse a `ROW,COL` cell reference argument.
pub fn parse_cell_ref(s: &str) -> Result<(u32, u32)> {
    let re = Regex::new(r"^(\d+)\s*,\s*(\d+)$")?;
    let caps = re
        .captures(s.trim())
        .with_context(|| format!("Invalid cell reference '{}', expected ROW,COL", s))?;

    let row = caps[1]
        .parse()
        .with_context(|| format!("Row out of range in '{}'", s))?;
    let col = caps[2]
        .parse()
        .with_context(|| format!("Column out of range in '{}'", s))?;

    Ok((row, col))
}


/// Parse a `ROWSxCOLS` grid dimension argument.
pub fn parse_dimensions(s: &str) -> Result<(u32, u32)> {
    let re = Regex::new(r"^(\d+)\s*[xX]\s*(\d+)$")?;
    let caps = re
        .captures(s.trim())
        .with_context(|| format!("Invalid dimensions '{}', expected ROWSxCOLS", s))?;

    let rows: u32 = caps[1]
        .parse()
        .with_context(|| format!("Row count out of range in '{}'", s))?;
    let cols: u32 = caps[2]
        .parse()
        .with_context(|| format!("Column count out of range in '{}'", s))?;

    if rows == 0 || cols == 0 {
        anyhow::bail!("Grid dimensions must be positive, got {}x{}", rows, cols);
    }

    Ok((rows, cols))
}
