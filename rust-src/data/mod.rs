//! Data access layer for pattern files.

mod pattern;

#[allow(unused_imports)]
pub use pattern::{
    format_pattern,
    load_pattern,
    parse_cell_ref,
    parse_dimensions,
    parse_pattern,
    save_pattern,
};
