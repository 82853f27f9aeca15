//! Assembly of the final extraction result.

use crate::geometry::BBox;
use crate::lines::TextLine;
use crate::objects::{ImageRef, VectorKind, VectorPrimitive};

/// Vector primitives above this count suggest a drawn table grid.
const LIKELY_TABLE_THRESHOLD: usize = 15;

/// Counts of vector primitives inside the region, with a coarse table hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableSignal {
    /// Number of line primitives.
    pub line_count: usize,
    /// Number of rect primitives.
    pub rect_count: usize,
    /// Number of curve primitives.
    pub curve_count: usize,
    /// `true` when lines and rects together exceed the table threshold.
    pub likely_table: bool,
}

impl TableSignal {
    /// Tallies vector primitives into per-kind counts.
    pub fn tally<'a>(vectors: impl IntoIterator<Item = &'a VectorPrimitive>) -> Self {
        let mut line_count = 0;
        let mut rect_count = 0;
        let mut curve_count = 0;
        for vector in vectors {
            match vector.kind {
                VectorKind::Line => line_count += 1,
                VectorKind::Rect => rect_count += 1,
                VectorKind::Curve => curve_count += 1,
            }
        }
        TableSignal {
            line_count,
            rect_count,
            curve_count,
            likely_table: line_count + rect_count > LIKELY_TABLE_THRESHOLD,
        }
    }
}

/// Everything extracted from one region of one page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExtractionResult {
    /// Zero-based page index.
    pub page: usize,
    /// The region after clamping to the page bounds.
    pub bbox: BBox,
    /// Text lines, ordered top to bottom.
    pub lines: Vec<TextLine>,
    /// Images, in page encounter order.
    pub images: Vec<ImageRef>,
    /// Vector primitive counts and table hint.
    pub table_signal: TableSignal,
}

impl ExtractionResult {
    /// Assembles the result from its already-computed parts.
    pub fn assemble(
        page: usize,
        bbox: BBox,
        lines: Vec<TextLine>,
        images: Vec<ImageRef>,
        table_signal: TableSignal,
    ) -> Self {
        Self { page, bbox, lines, images, table_signal }
    }
}
