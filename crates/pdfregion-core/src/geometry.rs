/// Axis-aligned bounding box in top-left origin coordinates.
///
/// `top` and `bottom` grow downward from the top edge of the page, matching
/// the convention used throughout the crate. A box is well-formed when
/// `x0 <= x1` and `top <= bottom`; a well-formed box with zero width or
/// height is empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    /// Left edge.
    pub x0: f64,
    /// Top edge (distance from the top of the page).
    pub top: f64,
    /// Right edge.
    pub x1: f64,
    /// Bottom edge.
    pub bottom: f64,
}

impl BBox {
    /// Creates a bounding box from its four edges.
    pub fn new(x0: f64, top: f64, x1: f64, bottom: f64) -> Self {
        Self { x0, top, x1, bottom }
    }

    /// Width of the box.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Height of the box.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Area of the box.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Returns `true` if the box encloses no area.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Returns `true` if `self` and `other` overlap with non-zero area.
    ///
    /// Boxes that merely share an edge or a corner do not intersect.
    pub fn intersects(&self, other: &BBox) -> bool {
        let overlap_w = self.x1.min(other.x1) - self.x0.max(other.x0);
        let overlap_h = self.bottom.min(other.bottom) - self.top.max(other.top);
        overlap_w > 0.0 && overlap_h > 0.0
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &BBox) -> BBox {
        BBox {
            x0: self.x0.min(other.x0),
            top: self.top.min(other.top),
            x1: self.x1.max(other.x1),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Clamps the box to a page of the given dimensions.
    ///
    /// Each edge is bounded to `[0, width]` horizontally and `[0, height]`
    /// vertically. A box whose edges cross after clamping (inverted or fully
    /// outside the page) collapses to an empty zero-area box instead of
    /// producing an error.
    pub fn clamp_to(&self, width: f64, height: f64) -> BBox {
        let x0 = self.x0.clamp(0.0, width);
        let top = self.top.clamp(0.0, height);
        let mut x1 = self.x1.clamp(0.0, width);
        let mut bottom = self.bottom.clamp(0.0, height);
        if x1 < x0 {
            x1 = x0;
        }
        if bottom < top {
            bottom = top;
        }
        BBox { x0, top, x1, bottom }
    }
}

// Serialized as the compact `[x0, top, x1, bottom]` array form rather than an
// object, matching the output format of the tool.
#[cfg(feature = "serde")]
impl serde::Serialize for BBox {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.x0, self.top, self.x1, self.bottom).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BBox {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (x0, top, x1, bottom) = <(f64, f64, f64, f64)>::deserialize(deserializer)?;
        Ok(BBox { x0, top, x1, bottom })
    }
}
