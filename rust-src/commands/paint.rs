//! Paint command applying a stroke of cell toggles.

use std::path::PathBuf;

use anyhow::Result;

use crate::data::{load_pattern, parse_cell_ref, save_pattern};
use crate::models::EditSession;


/// Run the paint command.
///
/// The cell arguments form one stroke, in order. Bad or out-of-range
/// references are skipped with a warning so the rest of the stroke still
/// applies.
pub fn run(file: String, cells: Vec<String>) -> Result<()> {
    let path = PathBuf::from(file);
    let grid = load_pattern(&path)?;

    let mut session = EditSession::new(grid);
    let mut toggled = 0usize;

    for arg in &cells {
        let (row, col) = match parse_cell_ref(arg) {
            Ok(cell) => cell,
            Err(e) => {
                eprintln!("Warning: {}", e);
                continue;
            }
        };

        if !session.grid().in_bounds(row, col) {
            eprintln!(
                "Warning: cell {},{} is outside the {}x{} grid",
                row,
                col,
                session.grid().rows(),
                session.grid().cols()
            );
            continue;
        }

        if session.stroke(row, col) {
            toggled += 1;
        }
    }

    session.end_stroke();
    let grid = session.into_grid();
    save_pattern(&grid, &path)?;

    println!(
        "Toggled {} cells, {} now filled: {}",
        toggled,
        grid.fill_count(),
        path.display()
    );

    Ok(())
}
