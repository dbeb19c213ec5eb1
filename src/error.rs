//! Error types for the pdf2png library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`ConvertError`] — **File-fatal**: this document cannot be converted at
//!   all (unreadable file, missing or wrong password, zero pages). The file
//!   is reported and skipped; the rest of the batch is unaffected.
//!
//! * [`PageError`] — **Page-local**: a single page failed to render or its
//!   PNG could not be written. The page is reported and skipped; the rest of
//!   the document continues processing.
//!
//! Neither type ever aborts a batch. [`crate::convert::convert_pdf`] converts
//! every error into a status line on the caller's [`crate::sink::LogSink`];
//! the only batch-level failure is "zero PDFs discovered", which the CLI
//! surfaces as a non-zero exit code.

use std::path::PathBuf;
use thiserror::Error;

/// A fatal error for a whole document.
///
/// Produced by the open/authenticate/page-count steps of
/// [`crate::convert::convert_pdf`]. Page-level failures use [`PageError`].
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The file is missing, corrupt, or not a readable PDF.
    #[error("Could not open '{name}': {detail}")]
    OpenFailed { name: String, detail: String },

    /// The PDF is encrypted and no password was supplied.
    #[error("Password required for '{name}'. Skipping.")]
    PasswordRequired { name: String },

    /// A password was supplied but authentication failed.
    #[error("Password failed for '{name}'. Skipping.")]
    WrongPassword { name: String },

    /// The document opened but contains no pages.
    #[error("'{name}' has 0 pages. Skipping.")]
    EmptyDocument { name: String },

    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\
Place libpdfium next to the executable or install it system-wide."
    )]
    PdfiumBindingFailed(String),
}

/// A non-fatal error for a single page.
///
/// Reported as a `Warn` status line; the remaining pages of the document
/// are unaffected.
#[derive(Debug, Error)]
pub enum PageError {
    /// pdfium failed to rasterise the page.
    #[error("Failed to render/save '{name}' Pg {page}: {detail}")]
    RenderFailed {
        name: String,
        page: usize,
        detail: String,
    },

    /// The rendered bitmap could not be written as a PNG.
    #[error("Failed to render/save '{name}' Pg {page}: cannot write '{}': {source}", path.display())]
    SaveFailed {
        name: String,
        page: usize,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_failed_display() {
        let e = ConvertError::OpenFailed {
            name: "report.pdf".into(),
            detail: "bad xref".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("report.pdf"), "got: {msg}");
        assert!(msg.contains("bad xref"), "got: {msg}");
    }

    #[test]
    fn password_required_display() {
        let e = ConvertError::PasswordRequired {
            name: "secret.pdf".into(),
        };
        assert!(e.to_string().contains("Password required"));
    }

    #[test]
    fn empty_document_display() {
        let e = ConvertError::EmptyDocument {
            name: "blank.pdf".into(),
        };
        assert!(e.to_string().contains("0 pages"));
    }

    #[test]
    fn save_failed_display_names_the_target_path() {
        let e = PageError::SaveFailed {
            name: "slides.pdf".into(),
            page: 2,
            path: PathBuf::from("/out/slides/slides - Pg 2.png"),
            source: image::ImageError::IoError(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only filesystem",
            )),
        };
        let msg = e.to_string();
        assert!(msg.contains("slides - Pg 2.png"), "got: {msg}");
        assert!(msg.contains("read-only filesystem"), "got: {msg}");
    }

    #[test]
    fn render_failed_display_is_one_indexed() {
        let e = PageError::RenderFailed {
            name: "slides.pdf".into(),
            page: 3,
            detail: "out of memory".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("Pg 3"), "got: {msg}");
        assert!(msg.contains("slides.pdf"), "got: {msg}");
    }
}
