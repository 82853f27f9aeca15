//! Error types for region extraction.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Each variant is a
//! distinct failure category; the CLI maps each one to its own exit code.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for region extraction operations.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A semantically invalid argument (e.g. a non-finite bbox coordinate).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The input PDF path does not exist.
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// The requested page index is at or beyond the document's page count.
    #[error("page index {index} out of range: document has {page_count} page(s)")]
    PageIndexOutOfRange {
        /// The requested zero-based page index.
        index: usize,
        /// The number of pages in the document.
        page_count: usize,
    },

    /// The document could not be parsed as a PDF.
    #[error("corrupt document: {0}")]
    CorruptDocument(String),

    /// No pdfium library could be bound at runtime.
    #[error("PDF backend unavailable: {0}")]
    BackendUnavailable(String),

    /// Error reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_error_display_messages() {
        let err = ExtractError::FileNotFound(PathBuf::from("/tmp/missing.pdf"));
        assert_eq!(err.to_string(), "file not found: /tmp/missing.pdf");

        let err = ExtractError::PageIndexOutOfRange { index: 5, page_count: 3 };
        assert_eq!(
            err.to_string(),
            "page index 5 out of range: document has 3 page(s)"
        );

        let err = ExtractError::InvalidArgument("bbox coordinate NaN is not finite".to_string());
        assert!(err.to_string().starts_with("invalid argument:"));
    }

    #[test]
    fn extract_error_io_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ExtractError = io_err.into();
        assert!(matches!(err, ExtractError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn extract_error_implements_std_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(ExtractError::CorruptDocument("bad xref".to_string()));
        assert!(err.to_string().contains("bad xref"));
    }
}
