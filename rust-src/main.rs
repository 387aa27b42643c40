//! Grid Stencil CLI
//!
//! Draw pixel-art grid patterns and export them as cropped raster images.

mod cli;
mod commands;
mod config;
mod data;
mod export;
mod models;


fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
