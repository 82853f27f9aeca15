//! pdfregion-core: Backend-independent data types and algorithms.
//!
//! This crate provides the foundational types (BBox, Glyph, ImageRef,
//! VectorPrimitive, TextLine, ExtractionResult) and the pure algorithms
//! (region filtering, line grouping, result assembly) used by pdfregion.
//! It knows nothing about PDF files; page contents arrive pre-digested
//! from a backend.

pub mod filter;
pub mod geometry;
pub mod lines;
pub mod objects;
pub mod result;

pub use filter::intersecting;
pub use geometry::BBox;
pub use lines::{LineGroupOptions, TextLine, group_lines};
pub use objects::{Glyph, ImageRef, PageContents, PageObject, VectorKind, VectorPrimitive};
pub use result::{ExtractionResult, TableSignal};
