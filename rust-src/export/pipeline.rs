//! One-shot export pipeline: cells -> bbox -> scale -> raster -> bytes.

use std::fmt;

use clap::ValueEnum;

use crate::config::ExportConfig;
use crate::export::{rasterize, BoundingBox, ExportError, ScaledCanvas};
use crate::models::PatternGrid;


/// Output formats selectable for export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Raster image, cropped to the filled cells.
    Png,
    /// Vector image (not implemented).
    Svg,
    /// Encapsulated PostScript (not implemented).
    Eps,
}


impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Png => write!(f, "PNG"),
            Self::Svg => write!(f, "SVG"),
            Self::Eps => write!(f, "EPS"),
        }
    }
}


/// Export the grid's filled cells as an encoded image.
///
/// Synchronous and pure: the same grid and config always produce identical
/// bytes. Vector formats are rejected up front, before any geometry work.
pub fn export_pattern(
    grid: &PatternGrid,
    config: &ExportConfig,
    format: ExportFormat,
) -> Result<Vec<u8>, ExportError> {
    if format != ExportFormat::Png {
        return Err(ExportError::Unsupported(format));
    }

    let cells = grid.filled_rects();
    let bbox = BoundingBox::of(&cells)?;
    let canvas = ScaledCanvas::fit(&bbox, config)?;
    let pixmap = rasterize(&cells, &bbox, &canvas, config.margin)?;

    pixmap
        .encode_png()
        .map_err(|e| ExportError::Encode(e.to_string()))
}
