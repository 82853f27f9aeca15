use std::fs;
use std::path::Path;

use pdfregion::{BBox, ExtractError, LineGroupOptions, extract_region};

pub fn run(
    pdf: &Path,
    page: usize,
    bbox: &[f64],
    out: Option<&Path>,
    y_tolerance: f64,
    space_gap_ratio: f64,
) -> Result<(), i32> {
    // clap enforces num_args = 4; the slice match keeps the invariant explicit.
    let region = match bbox {
        [x0, top, x1, bottom] => BBox::new(*x0, *top, *x1, *bottom),
        _ => {
            eprintln!("Error: --bbox expects exactly four values: x0 top x1 bottom");
            return Err(exit_code(&ExtractError::InvalidArgument(String::new())));
        }
    };
    let options = LineGroupOptions { y_tolerance, space_gap_ratio };

    let result = extract_region(pdf, page, &region, &options).map_err(|e| {
        eprintln!("Error: {e}");
        exit_code(&e)
    })?;

    // Serialize fully before touching the output; a failed run leaves no file.
    let json = serde_json::to_string_pretty(&result).map_err(|e| {
        eprintln!("Error: failed to serialize result: {e}");
        exit_code(&ExtractError::Io(std::io::Error::other(e)))
    })?;

    match out {
        Some(path) => fs::write(path, &json).map_err(|e| {
            eprintln!("Error: cannot write {}: {e}", path.display());
            exit_code(&ExtractError::Io(e))
        })?,
        None => println!("{json}"),
    }
    Ok(())
}

/// Maps each error category to its own non-zero exit code.
fn exit_code(error: &ExtractError) -> i32 {
    match error {
        ExtractError::InvalidArgument(_) => 2,
        ExtractError::FileNotFound(_) => 3,
        ExtractError::PageIndexOutOfRange { .. } => 4,
        ExtractError::CorruptDocument(_) => 5,
        ExtractError::BackendUnavailable(_) => 6,
        ExtractError::Io(_) => 7,
    }
}
