//! CLI command implementations.

pub mod export;
pub mod new;
pub mod paint;
pub mod preview;
