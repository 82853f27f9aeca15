//! Region filtering: which page objects belong to a bounding box.

use crate::geometry::BBox;
use crate::objects::PageObject;

/// Returns the objects whose bounding box overlaps `region` with non-zero
/// area, in their original page order.
///
/// Partial overlap counts; touching an edge or a corner of the region does
/// not. Object coordinates are kept as-is, in page space.
pub fn intersecting(objects: &[PageObject], region: &BBox) -> Vec<PageObject> {
    objects
        .iter()
        .filter(|object| object.bbox().intersects(region))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{Glyph, ImageRef, VectorKind, VectorPrimitive};

    fn glyph_at(x0: f64, top: f64) -> PageObject {
        PageObject::Glyph(Glyph {
            text: "x".to_string(),
            bbox: BBox::new(x0, top, x0 + 6.0, top + 10.0),
            fontname: "Helvetica".to_string(),
            size: 10.0,
        })
    }

    #[test]
    fn test_inside_objects_are_kept() {
        let objects = vec![glyph_at(10.0, 10.0), glyph_at(50.0, 50.0)];
        let region = BBox::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(intersecting(&objects, &region).len(), 2);
    }

    #[test]
    fn test_outside_objects_are_dropped() {
        let objects = vec![glyph_at(10.0, 10.0), glyph_at(500.0, 500.0)];
        let region = BBox::new(0.0, 0.0, 100.0, 100.0);
        let kept = intersecting(&objects, &region);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].bbox().x0, 10.0);
    }

    #[test]
    fn test_partial_overlap_is_kept() {
        // Image straddles the right edge of the region.
        let objects = vec![PageObject::Image(ImageRef {
            id: 0,
            bbox: BBox::new(90.0, 10.0, 150.0, 60.0),
            width: 60.0,
            height: 50.0,
        })];
        let region = BBox::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(intersecting(&objects, &region).len(), 1);
    }

    #[test]
    fn test_edge_touching_is_dropped() {
        let objects = vec![PageObject::Vector(VectorPrimitive {
            kind: VectorKind::Line,
            bbox: BBox::new(100.0, 0.0, 120.0, 100.0),
        })];
        let region = BBox::new(0.0, 0.0, 100.0, 100.0);
        assert!(intersecting(&objects, &region).is_empty());
    }

    #[test]
    fn test_empty_region_keeps_nothing() {
        let objects = vec![glyph_at(10.0, 10.0)];
        let region = BBox::new(50.0, 50.0, 50.0, 50.0);
        assert!(intersecting(&objects, &region).is_empty());
    }

    #[test]
    fn test_page_order_is_preserved() {
        let objects = vec![glyph_at(80.0, 10.0), glyph_at(10.0, 10.0), glyph_at(40.0, 10.0)];
        let region = BBox::new(0.0, 0.0, 100.0, 100.0);
        let kept = intersecting(&objects, &region);
        let xs: Vec<f64> = kept.iter().map(|o| o.bbox().x0).collect();
        assert_eq!(xs, vec![80.0, 10.0, 40.0]);
    }

    #[test]
    fn test_coordinates_stay_in_page_space() {
        let objects = vec![glyph_at(60.0, 60.0)];
        let region = BBox::new(50.0, 50.0, 100.0, 100.0);
        let kept = intersecting(&objects, &region);
        // Not translated relative to the region origin.
        assert_eq!(kept[0].bbox().x0, 60.0);
        assert_eq!(kept[0].bbox().top, 60.0);
    }
}
