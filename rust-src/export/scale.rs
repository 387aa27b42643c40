//! Uniform scale fitting the bounding box to the target resolution.

use crate::config::ExportConfig;
use crate::export::{BoundingBox, ExportError};


/// Output canvas geometry derived from a bounding box and export config.
///
/// The scale is uniform and driven by the longer bounding-box side, so the
/// shorter side of the canvas comes out below the requested resolution and
/// non-square selections yield non-square canvases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledCanvas {
    pub scale_factor: f64,
    pub width: u32,
    pub height: u32,
}


impl ScaledCanvas {
    /// Fit the bounding box into `resolution - 2*margin` pixels along its
    /// longer side.
    pub fn fit(bbox: &BoundingBox, config: &ExportConfig) -> Result<Self, ExportError> {
        config.validate()?;

        let longest = bbox.width().max(bbox.height());
        if longest <= 0.0 {
            return Err(ExportError::DegenerateBounds);
        }

        let effective = f64::from(config.resolution - 2 * config.margin);
        let scale_factor = effective / longest;

        let width = (bbox.width() * scale_factor).round() as u32 + 2 * config.margin;
        let height = (bbox.height() * scale_factor).round() as u32 + 2 * config.margin;

        Ok(Self {
            scale_factor,
            width,
            height,
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn bbox(x_max: f64, y_max: f64) -> BoundingBox {
        BoundingBox {
            x_min: 0.0,
            y_min: 0.0,
            x_max,
            y_max,
        }
    }

    #[test]
    fn test_reference_scenario() {
        // Cells at (0,0) and (2,2) on a 30-unit grid span 90x90 units.
        let config = ExportConfig {
            resolution: 100,
            margin: 10,
        };
        let canvas = ScaledCanvas::fit(&bbox(90.0, 90.0), &config).unwrap();

        assert!((canvas.scale_factor - 80.0 / 90.0).abs() < 1e-9);
        assert_eq!(canvas.width, 100);
        assert_eq!(canvas.height, 100);
    }

    #[test]
    fn test_square_bbox_yields_square_canvas() {
        let config = ExportConfig {
            resolution: 640,
            margin: 16,
        };
        let canvas = ScaledCanvas::fit(&bbox(150.0, 150.0), &config).unwrap();
        assert_eq!(canvas.width, canvas.height);
    }

    #[test]
    fn test_longer_side_drives_scale() {
        let config = ExportConfig {
            resolution: 100,
            margin: 0,
        };
        let canvas = ScaledCanvas::fit(&bbox(90.0, 30.0), &config).unwrap();

        assert_eq!(canvas.width, 100);
        // Shorter side scales by the same factor: 30 * (100/90) = 33.3.
        assert_eq!(canvas.height, 33);
    }

    #[test]
    fn test_invalid_config_rejected_before_scaling() {
        let config = ExportConfig {
            resolution: 10,
            margin: 5,
        };
        assert_eq!(
            ScaledCanvas::fit(&bbox(90.0, 90.0), &config),
            Err(ExportError::InvalidConfig {
                resolution: 10,
                margin: 5,
            })
        );
    }

    #[test]
    fn test_degenerate_bounds() {
        let config = ExportConfig {
            resolution: 100,
            margin: 10,
        };
        assert_eq!(
            ScaledCanvas::fit(&bbox(0.0, 0.0), &config),
            Err(ExportError::DegenerateBounds)
        );
    }
}
