//! Export pipeline for rasterizing filled cells.

mod bounds;
mod error;
mod pipeline;
mod raster;
mod scale;

#[allow(unused_imports)]
pub use bounds::BoundingBox;
pub use error::ExportError;
pub use pipeline::{export_pattern, ExportFormat};
pub use raster::rasterize;
pub use scale::ScaledCanvas;
