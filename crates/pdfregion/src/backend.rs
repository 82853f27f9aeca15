//! PDF backends.
//!
//! Two libraries cooperate here: lopdf parses the container cheaply to
//! validate the document and count pages, and pdfium supplies the per-page
//! geometry (character boxes, image boxes, path boxes). Everything that
//! touches a PDF library lives in this module; the rest of the crate works
//! on [`PageContents`].

use std::path::Path;

use pdfium_render::prelude::*;
use pdfregion_core::{
    BBox, Glyph, ImageRef, PageContents, PageObject, VectorKind, VectorPrimitive,
};
use tracing::debug;

use crate::error::ExtractError;

/// Boxes thinner than this on either axis are treated as strokes, not rects.
const THIN_STROKE_PT: f64 = 1.0;

/// Parses the container with lopdf and returns the page count.
///
/// Runs before pdfium is bound, so documents that are not PDFs at all and
/// out-of-range page indexes are rejected without a pdfium library present.
pub(crate) fn page_count(path: &Path) -> Result<usize, ExtractError> {
    let document =
        lopdf::Document::load(path).map_err(|e| ExtractError::CorruptDocument(e.to_string()))?;
    Ok(document.get_pages().len())
}

/// Loads the geometry of one page through pdfium.
///
/// Coordinates are converted from PDF's bottom-up user space to the
/// top-left origin convention at this boundary.
pub(crate) fn load_page(path: &Path, index: usize) -> Result<PageContents, ExtractError> {
    let bindings = Pdfium::bind_to_system_library()
        .map_err(|e| ExtractError::BackendUnavailable(e.to_string()))?;
    let pdfium = Pdfium::new(bindings);

    let document = pdfium
        .load_pdf_from_file(path, None)
        .map_err(|e| ExtractError::CorruptDocument(e.to_string()))?;
    let page_index = u16::try_from(index)
        .map_err(|_| ExtractError::InvalidArgument(format!("page index {index} too large")))?;
    let page = document
        .pages()
        .get(page_index)
        .map_err(|e| ExtractError::CorruptDocument(e.to_string()))?;

    let width = f64::from(page.width().value);
    let height = f64::from(page.height().value);

    let mut objects = Vec::new();
    collect_glyphs(&page, height, &mut objects)?;
    collect_images_and_paths(&page, height, &mut objects);

    debug!(page = index, objects = objects.len(), "loaded page geometry");
    Ok(PageContents { index, width, height, objects })
}

#[allow(deprecated)] // PdfRect field access deprecated in 0.8.28, removed in 0.9.0
fn collect_glyphs(
    page: &PdfPage<'_>,
    page_height: f64,
    out: &mut Vec<PageObject>,
) -> Result<(), ExtractError> {
    let text = page
        .text()
        .map_err(|e| ExtractError::CorruptDocument(e.to_string()))?;
    for ch in text.chars().iter() {
        // Characters without a unicode mapping or measurable bounds carry no
        // usable metadata; skip them.
        if let (Some(unicode_ch), Ok(rect)) = (ch.unicode_char(), ch.tight_bounds()) {
            out.push(PageObject::Glyph(Glyph {
                text: unicode_ch.to_string(),
                bbox: to_bbox(
                    rect.left.value,
                    rect.bottom.value,
                    rect.right.value,
                    rect.top.value,
                    page_height,
                ),
                fontname: ch.font_name(),
                size: f64::from(ch.scaled_font_size().value),
            }));
        }
    }
    Ok(())
}

#[allow(deprecated)] // PdfRect field access deprecated in 0.8.28, removed in 0.9.0
fn collect_images_and_paths(page: &PdfPage<'_>, page_height: f64, out: &mut Vec<PageObject>) {
    let mut next_image_id = 0;
    for object in page.objects().iter() {
        let Ok(rect) = object.bounds().map(|quad| quad.to_rect()) else {
            continue;
        };
        let bbox = to_bbox(
            rect.left.value,
            rect.bottom.value,
            rect.right.value,
            rect.top.value,
            page_height,
        );
        match object {
            PdfPageObject::Image(_) => {
                out.push(PageObject::Image(ImageRef {
                    id: next_image_id,
                    bbox,
                    width: bbox.width(),
                    height: bbox.height(),
                }));
                next_image_id += 1;
            }
            PdfPageObject::Path(ref path) => {
                let kind = classify_path(path, &bbox);
                out.push(PageObject::Vector(VectorPrimitive { kind, bbox }));
            }
            _ => {}
        }
    }
}

/// Converts bottom-up PDF-space bounds to a top-left origin [`BBox`].
fn to_bbox(left: f32, bottom: f32, right: f32, top: f32, page_height: f64) -> BBox {
    BBox::new(
        f64::from(left),
        page_height - f64::from(top),
        f64::from(right),
        page_height - f64::from(bottom),
    )
}

/// Classifies a painted path from its segments and bounding box.
///
/// Any bezier segment makes the path a curve. A single straight segment, or
/// a box thin enough to be a stroke, is a line. Everything else is a rect.
fn classify_path(path: &PdfPagePathObject<'_>, bbox: &BBox) -> VectorKind {
    let mut line_segments = 0;
    for segment in path.segments().iter() {
        match segment.segment_type() {
            PdfPathSegmentType::BezierTo => return VectorKind::Curve,
            PdfPathSegmentType::LineTo => line_segments += 1,
            _ => {}
        }
    }
    classify_straight(line_segments, bbox)
}

fn classify_straight(line_segments: usize, bbox: &BBox) -> VectorKind {
    if line_segments <= 1 || bbox.width() < THIN_STROKE_PT || bbox.height() < THIN_STROKE_PT {
        VectorKind::Line
    } else {
        VectorKind::Rect
    }
}
