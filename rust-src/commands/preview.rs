//! Terminal preview of a pattern grid.

use std::path::PathBuf;

use anyhow::Result;

use crate::data::load_pattern;


const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";


/// Run the preview command.
pub fn run(file: String) -> Result<()> {
    let path = PathBuf::from(file);
    let grid = load_pattern(&path)?;

    for row in 0..grid.rows() {
        let mut line = String::new();
        for col in 0..grid.cols() {
            // Two characters per cell keeps the aspect roughly square.
            line.push_str(if grid.is_filled(row, col) { "██" } else { "░░" });
        }
        println!("{}", line);
    }

    println!();
    println!(
        "{}{}x{} grid, {} filled{}",
        DIM,
        grid.rows(),
        grid.cols(),
        grid.fill_count(),
        RESET
    );

    Ok(())
}
