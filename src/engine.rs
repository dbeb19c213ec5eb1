//! Binding to the pdfium rendering engine.
//!
//! pdfium is a shared library, not a Rust crate, so the binding can fail at
//! runtime when no copy is installed. One [`Pdfium`] instance is created per
//! batch and shared by every conversion in it; pdfium itself is not
//! thread-safe, which is fine here because processing is strictly
//! sequential.

use crate::error::ConvertError;
use pdfium_render::prelude::*;
use tracing::debug;

/// Bind to a pdfium library: a copy next to the executable wins, otherwise
/// the system-wide installation is used.
pub fn bind_pdfium() -> Result<Pdfium, ConvertError> {
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| ConvertError::PdfiumBindingFailed(e.to_string()))?;

    debug!("Bound to pdfium library");
    Ok(Pdfium::new(bindings))
}
