//! CLI definitions using clap.

use clap::{Parser, Subcommand};

use crate::commands;
use crate::export::ExportFormat;


/// Grid Stencil - draw pixel-art grid patterns and export cropped raster images
#[derive(Parser)]
#[command(name = "gst")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}


#[derive(Subcommand)]
enum Commands {
    /// Create an empty pattern file
    New {
        /// Grid dimensions as ROWSxCOLS, e.g. 8x8
        size: String,

        /// Pattern file path (default: pattern.txt)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Toggle cells along a stroke
    Paint {
        /// Pattern file to edit
        file: String,

        /// Cells to toggle, as ROW,COL pairs in stroke order
        #[arg(required = true)]
        cells: Vec<String>,
    },

    /// Print a pattern to the terminal
    Preview {
        /// Pattern file to show
        file: String,
    },

    /// Export a pattern as an image cropped to its filled cells
    Export {
        /// Pattern file to export
        file: String,

        /// Output image format
        #[arg(short, long, value_enum, default_value = "png")]
        format: ExportFormat,

        /// Long-side pixel count of the exported image
        #[arg(short, long)]
        resolution: Option<u32>,

        /// Empty border around the exported content, in pixels
        #[arg(short, long)]
        margin: Option<u32>,

        /// Output file path (default: grid.png)
        #[arg(short, long)]
        output: Option<String>,
    },
}


/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::New { size, output }) => commands::new::run(&size, output),
        Some(Commands::Paint { file, cells }) => commands::paint::run(file, cells),
        Some(Commands::Preview { file }) => commands::preview::run(file),
        Some(Commands::Export {
            file,
            format,
            resolution,
            margin,
            output,
        }) => commands::export::run(file, format, resolution, margin, output),
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
