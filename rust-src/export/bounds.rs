//! Bounding box computation over filled cells.

use crate::export::ExportError;
use crate::models::CellRect;


/// Minimal axis-aligned box containing every filled cell's full extent,
/// in source pixel units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}


impl BoundingBox {
    /// Compute the tight box around the given cell rectangles.
    ///
    /// An empty set has no bounding box and signals `EmptySelection`.
    pub fn of(cells: &[CellRect]) -> Result<Self, ExportError> {
        let first = cells.first().ok_or(ExportError::EmptySelection)?;

        let mut bbox = BoundingBox {
            x_min: first.x,
            y_min: first.y,
            x_max: first.x + first.width,
            y_max: first.y + first.height,
        };

        for cell in &cells[1..] {
            bbox.x_min = bbox.x_min.min(cell.x);
            bbox.y_min = bbox.y_min.min(cell.y);
            bbox.x_max = bbox.x_max.max(cell.x + cell.width);
            bbox.y_max = bbox.y_max.max(cell.y + cell.height);
        }

        Ok(bbox)
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn cell(x: f64, y: f64) -> CellRect {
        CellRect {
            x,
            y,
            width: 30.0,
            height: 30.0,
        }
    }

    #[test]
    fn test_empty_set_has_no_bbox() {
        assert_eq!(BoundingBox::of(&[]), Err(ExportError::EmptySelection));
    }

    #[test]
    fn test_single_cell_bbox_is_cell_extent() {
        let bbox = BoundingBox::of(&[cell(60.0, 90.0)]).unwrap();
        assert_eq!(bbox.x_min, 60.0);
        assert_eq!(bbox.y_min, 90.0);
        assert_eq!(bbox.x_max, 90.0);
        assert_eq!(bbox.y_max, 120.0);
        assert_eq!(bbox.width(), 30.0);
        assert_eq!(bbox.height(), 30.0);
    }

    #[test]
    fn test_bbox_spans_all_cells() {
        let cells = [cell(0.0, 0.0), cell(60.0, 60.0), cell(30.0, 0.0)];
        let bbox = BoundingBox::of(&cells).unwrap();
        assert_eq!(bbox.x_min, 0.0);
        assert_eq!(bbox.y_min, 0.0);
        assert_eq!(bbox.x_max, 90.0);
        assert_eq!(bbox.y_max, 90.0);
    }

    #[test]
    fn test_bbox_is_minimal() {
        let cells = [cell(30.0, 60.0), cell(120.0, 90.0)];
        let bbox = BoundingBox::of(&cells).unwrap();

        // Every cell fits inside the box...
        for c in &cells {
            assert!(c.x >= bbox.x_min && c.x + c.width <= bbox.x_max);
            assert!(c.y >= bbox.y_min && c.y + c.height <= bbox.y_max);
        }

        // ...and each edge touches some cell.
        assert!(cells.iter().any(|c| c.x == bbox.x_min));
        assert!(cells.iter().any(|c| c.y == bbox.y_min));
        assert!(cells.iter().any(|c| c.x + c.width == bbox.x_max));
        assert!(cells.iter().any(|c| c.y + c.height == bbox.y_max));
    }
}
