use crate::geometry::BBox;

/// A single character extracted from a PDF page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyph {
    /// Decoded text content of this character.
    pub text: String,
    /// Bounding box in top-left origin coordinates.
    pub bbox: BBox,
    /// Font name.
    pub fontname: String,
    /// Rendered font size in points.
    pub size: f64,
}

/// An image placement on a PDF page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageRef {
    /// Sequential identifier in page encounter order, starting at 0.
    pub id: usize,
    /// Bounding box in top-left origin coordinates.
    pub bbox: BBox,
    /// Display width in points.
    pub width: f64,
    /// Display height in points.
    pub height: f64,
}

/// Classification of a painted vector path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VectorKind {
    /// A straight stroke (single segment or degenerate-thin box).
    Line,
    /// A rectangle or other multi-segment straight-edged path.
    Rect,
    /// A path containing bezier segments.
    Curve,
}

/// A painted vector path reduced to its classification and bounding box.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VectorPrimitive {
    /// Path classification.
    pub kind: VectorKind,
    /// Bounding box in top-left origin coordinates.
    pub bbox: BBox,
}

/// Anything a page can contain that carries a bounding box.
#[derive(Debug, Clone, PartialEq)]
pub enum PageObject {
    /// A positioned character.
    Glyph(Glyph),
    /// An image placement.
    Image(ImageRef),
    /// A painted vector path.
    Vector(VectorPrimitive),
}

impl PageObject {
    /// Bounding box of the object, whatever its kind.
    pub fn bbox(&self) -> BBox {
        match self {
            PageObject::Glyph(glyph) => glyph.bbox,
            PageObject::Image(image) => image.bbox,
            PageObject::Vector(vector) => vector.bbox,
        }
    }
}

/// The contents of one page as furnished by a PDF backend.
///
/// Objects appear in the order the backend encountered them on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContents {
    /// Zero-based page index within the document.
    pub index: usize,
    /// Page width in points.
    pub width: f64,
    /// Page height in points.
    pub height: f64,
    /// All objects on the page, in encounter order.
    pub objects: Vec<PageObject>,
}
