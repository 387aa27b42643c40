//! Edit session state for stroke painting.

use crate::models::PatternGrid;


/// Controller owning the grid during a paint stroke.
///
/// A stroke visits cells in order; revisiting the cell that was just toggled
/// must not flip it straight back, so the session keeps the last-toggled
/// position until the stroke ends.
#[derive(Debug)]
pub struct EditSession {
    grid: PatternGrid,
    last_toggled: Option<(u32, u32)>,
}


impl EditSession {
    pub fn new(grid: PatternGrid) -> Self {
        Self {
            grid,
            last_toggled: None,
        }
    }

    pub fn grid(&self) -> &PatternGrid {
        &self.grid
    }

    pub fn into_grid(self) -> PatternGrid {
        self.grid
    }

    /// Toggle a cell as part of the current stroke.
    ///
    /// Returns false when the cell is the one toggled immediately before,
    /// in which case the grid is left unchanged.
    pub fn stroke(&mut self, row: u32, col: u32) -> bool {
        if self.last_toggled == Some((row, col)) {
            return false;
        }

        self.grid.toggle(row, col);
        self.last_toggled = Some((row, col));
        true
    }

    /// End the current stroke, clearing the last-toggled guard.
    pub fn end_stroke(&mut self) {
        self.last_toggled = None;
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_toggles_cell() {
        let mut session = EditSession::new(PatternGrid::new(3, 3));
        assert!(session.stroke(0, 1));
        assert!(session.grid().is_filled(0, 1));
    }

    #[test]
    fn test_consecutive_repeat_is_ignored() {
        let mut session = EditSession::new(PatternGrid::new(3, 3));
        assert!(session.stroke(1, 1));
        assert!(!session.stroke(1, 1));
        assert!(session.grid().is_filled(1, 1));
    }

    #[test]
    fn test_revisit_after_other_cell_toggles_again() {
        let mut session = EditSession::new(PatternGrid::new(3, 3));
        session.stroke(1, 1);
        session.stroke(1, 2);
        session.stroke(1, 1);
        assert!(!session.grid().is_filled(1, 1));
        assert!(session.grid().is_filled(1, 2));
    }

    #[test]
    fn test_end_stroke_clears_guard() {
        let mut session = EditSession::new(PatternGrid::new(3, 3));
        session.stroke(2, 2);
        session.end_stroke();
        assert!(session.stroke(2, 2));
        assert!(!session.grid().is_filled(2, 2));
    }
}
