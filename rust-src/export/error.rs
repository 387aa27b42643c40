//! Export pipeline error taxonomy.

use thiserror::Error;

use crate::export::ExportFormat;


/// Errors that can end a single export attempt.
///
/// Every variant is terminal for that attempt, never retried, and leaves the
/// pattern untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// No filled cells at export time.
    #[error("no filled cells to export")]
    EmptySelection,

    /// Filled cells span a zero-size region, so no scale factor exists.
    #[error("filled cells span a zero-size region")]
    DegenerateBounds,

    /// The margin leaves no pixel budget for content.
    #[error("resolution {resolution} leaves no room for content inside a {margin}px margin")]
    InvalidConfig { resolution: u32, margin: u32 },

    /// Vector formats are not implemented.
    #[error("{0} export is not implemented yet")]
    Unsupported(ExportFormat),

    /// The raster encoder failed.
    #[error("PNG encoding failed: {0}")]
    Encode(String),
}
