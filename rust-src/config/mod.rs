//! Configuration and settings for Grid Stencil.

mod settings;

#[allow(unused_imports)]
pub use settings::{
    get_settings_path,
    load_settings,
    ExportConfig,
    Settings,
    CELL_SIZE,
    DEFAULT_EXPORT_FILE,
    DEFAULT_MARGIN,
    DEFAULT_PATTERN_FILE,
    DEFAULT_RESOLUTION,
};
