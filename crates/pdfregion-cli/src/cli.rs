use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Extract text, image, and vector metadata from a bounded region of a PDF page.
#[derive(Debug, Parser)]
#[command(name = "pdfregion", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract metadata from a rectangular region of one page
    Extract {
        /// Path to the PDF file
        #[arg(long, value_name = "FILE")]
        pdf: PathBuf,

        /// Page index (0-based)
        #[arg(long)]
        page: usize,

        /// Region of interest: x0 top x1 bottom, in points from the top-left corner
        #[arg(long, num_args = 4, allow_negative_numbers = true, value_names = ["X0", "TOP", "X1", "BOTTOM"])]
        bbox: Vec<f64>,

        /// Write JSON to this file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Vertical tolerance for line grouping (default: 2.0)
        #[arg(long, default_value_t = 2.0)]
        y_tolerance: f64,

        /// Gap fraction of average glyph width that separates words (default: 0.3)
        #[arg(long, default_value_t = 0.3)]
        space_gap_ratio: f64,
    },
}
