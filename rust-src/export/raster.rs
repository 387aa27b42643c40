//! Rasterization of filled cells onto the output surface.

use tiny_skia::{Color, Paint, Pixmap, Rect, Transform};

use crate::export::{BoundingBox, ExportError, ScaledCanvas};
use crate::models::CellRect;


/// Paint every filled cell as a scaled, margin-offset opaque black rectangle
/// on a fresh transparent surface.
///
/// Each rectangle's position and size are rounded independently, so adjacent
/// cells may leave 1px seams or overlaps at fractional scale factors.
pub fn rasterize(
    cells: &[CellRect],
    bbox: &BoundingBox,
    canvas: &ScaledCanvas,
    margin: u32,
) -> Result<Pixmap, ExportError> {
    let mut pixmap =
        Pixmap::new(canvas.width, canvas.height).ok_or(ExportError::DegenerateBounds)?;
    pixmap.fill(Color::TRANSPARENT);

    let mut paint = Paint::default();
    paint.set_color_rgba8(0, 0, 0, 255);
    paint.anti_alias = false;

    let margin = f64::from(margin);

    for cell in cells {
        let x = ((cell.x - bbox.x_min) * canvas.scale_factor).round() + margin;
        let y = ((cell.y - bbox.y_min) * canvas.scale_factor).round() + margin;
        let w = (cell.width * canvas.scale_factor).round();
        let h = (cell.height * canvas.scale_factor).round();

        // Cells can round down to nothing at very small scale factors.
        let Some(rect) = Rect::from_xywh(x as f32, y as f32, w as f32, h as f32) else {
            continue;
        };

        pixmap.fill_rect(rect, &paint, Transform::identity(), None);
    }

    Ok(pixmap)
}
