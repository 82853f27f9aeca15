//! The extraction pipeline: validate, load, clamp, filter, group, assemble.

use std::path::Path;

use pdfregion_core::{
    BBox, ExtractionResult, LineGroupOptions, PageContents, PageObject, TableSignal, filter,
    lines,
};
use tracing::debug;

use crate::backend;
use crate::error::ExtractError;

/// Extracts region metadata from one page of a PDF file.
///
/// Validation happens in a fixed order: the bbox must be finite, the file
/// must exist, the container must parse, and the page index must be in
/// range. Only then is the page geometry loaded and filtered.
pub fn extract_region(
    path: &Path,
    page_index: usize,
    requested: &BBox,
    options: &LineGroupOptions,
) -> Result<ExtractionResult, ExtractError> {
    for value in [requested.x0, requested.top, requested.x1, requested.bottom] {
        if !value.is_finite() {
            return Err(ExtractError::InvalidArgument(format!(
                "bbox coordinate {value} is not finite"
            )));
        }
    }
    if !path.exists() {
        return Err(ExtractError::FileNotFound(path.to_path_buf()));
    }

    let page_count = backend::page_count(path)?;
    if page_index >= page_count {
        return Err(ExtractError::PageIndexOutOfRange { index: page_index, page_count });
    }

    let contents = backend::load_page(path, page_index)?;
    Ok(extract_from_contents(&contents, requested, options))
}

/// The pure tail of the pipeline, operating on already-loaded page contents.
pub fn extract_from_contents(
    contents: &PageContents,
    requested: &BBox,
    options: &LineGroupOptions,
) -> ExtractionResult {
    let clamped = requested.clamp_to(contents.width, contents.height);
    let selected = filter::intersecting(&contents.objects, &clamped);

    let mut glyphs = Vec::new();
    let mut images = Vec::new();
    let mut vectors = Vec::new();
    for object in selected {
        match object {
            PageObject::Glyph(glyph) => glyphs.push(glyph),
            PageObject::Image(image) => images.push(image),
            PageObject::Vector(vector) => vectors.push(vector),
        }
    }

    let text_lines = lines::group_lines(&glyphs, options);
    let table_signal = TableSignal::tally(&vectors);
    debug!(
        page = contents.index,
        lines = text_lines.len(),
        images = images.len(),
        "extracted region"
    );

    ExtractionResult::assemble(contents.index, clamped, text_lines, images, table_signal)
}
