//! pdfregion: bounded-region PDF metadata extraction.
//!
//! A thin glue layer over existing PDF libraries. lopdf validates the
//! container and counts pages; pdfium supplies per-page geometry; the pure
//! algorithms in [`pdfregion_core`] clamp the requested region, filter page
//! objects by intersection, group characters into lines, and assemble the
//! result.
//!
//! # Example
//!
//! ```no_run
//! use pdfregion::{BBox, LineGroupOptions, extract_region};
//! use std::path::Path;
//!
//! let result = extract_region(
//!     Path::new("report.pdf"),
//!     0,
//!     &BBox::new(0.0, 0.0, 400.0, 200.0),
//!     &LineGroupOptions::default(),
//! )?;
//! for line in &result.lines {
//!     println!("{}", line.text);
//! }
//! # Ok::<(), pdfregion::ExtractError>(())
//! ```

mod backend;
pub mod error;
pub mod extract;

pub use error::ExtractError;
pub use extract::{extract_from_contents, extract_region};
pub use pdfregion_core::{
    BBox, ExtractionResult, Glyph, ImageRef, LineGroupOptions, PageContents, PageObject,
    TableSignal, TextLine, VectorKind, VectorPrimitive,
};
