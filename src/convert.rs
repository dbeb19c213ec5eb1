//! Per-file PDF→PNG conversion.
//!
//! One call converts one document, writing outputs strictly beside the
//! source file: a single-page document becomes `<stem>.png`, a multi-page
//! document becomes a sibling directory `<stem>/` holding
//! `<stem> - Pg N.png` for each page. The naming convention is a fixed
//! contract, not configurable.
//!
//! ## Error containment
//!
//! No error escapes a call. Open, password, and page-count failures are
//! file-fatal: reported on the sink, the file is skipped, and the caller's
//! batch loop moves on. Render and save failures are page-local: reported
//! on the sink, that page is skipped, and the remaining pages of the same
//! document still process. The document handle is released on every exit
//! path by RAII.

use crate::config::ConvertOptions;
use crate::error::{ConvertError, PageError};
use crate::sink::{LogSink, Status};
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Convert one PDF to PNG file(s) next to it.
///
/// Status is communicated purely through `sink` and the filesystem; see the
/// module docs for the containment policy. Callers that need a richer
/// result (a progress count, say) wrap the call and inspect the sink lines
/// or count the artifacts written.
pub fn convert_pdf(
    pdfium: &Pdfium,
    pdf_path: &Path,
    options: &ConvertOptions,
    sink: &mut dyn LogSink,
) {
    let name = display_name(pdf_path);

    let document = match open_document(pdfium, pdf_path, &name, options.password.as_deref()) {
        Ok(doc) => doc,
        Err(e) => {
            sink.log(Status::Error, &e.to_string());
            return;
        }
    };

    let page_count = document.pages().len();
    if page_count == 0 {
        let e = ConvertError::EmptyDocument { name };
        sink.log(Status::Warn, &e.to_string());
        return;
    }
    info!("Opened '{}': {} page(s)", name, page_count);

    let stem = file_stem(pdf_path);
    let render_config = render_config(options);

    if page_count == 1 {
        let out_png = single_page_target(pdf_path);
        if out_png.exists() && !options.overwrite {
            sink.log(
                Status::Skip,
                &format!("Exists (use --overwrite): {}", out_png.display()),
            );
            return;
        }
        match render_to_png(&document, 0, &name, &render_config, options.alpha, &out_png) {
            Ok(()) => sink.log(
                Status::Ok,
                &format!("{} -> {}", name, display_name(&out_png)),
            ),
            Err(e) => sink.log(Status::Warn, &e.to_string()),
        }
        return;
    }

    // Multi-page: outputs live in a sibling directory named after the stem.
    let out_dir = multi_page_dir(pdf_path);
    if let Err(e) = fs::create_dir_all(&out_dir) {
        sink.log(
            Status::Warn,
            &format!("Could not create '{}': {}", out_dir.display(), e),
        );
        return;
    }

    for index in 0..page_count {
        let page_num = index as usize + 1;
        let out_png = page_target(&out_dir, &stem, page_num);

        if out_png.exists() && !options.overwrite {
            sink.log(
                Status::Skip,
                &format!("Exists (use --overwrite): {}", out_png.display()),
            );
            continue;
        }

        if let Err(e) = render_to_png(&document, index, &name, &render_config, options.alpha, &out_png) {
            sink.log(Status::Warn, &e.to_string());
            continue;
        }
    }

    sink.log(
        Status::Ok,
        &format!("{} -> {}/(Pg 1..{})", name, out_dir.display(), page_count),
    );
}

/// Convert a batch of PDFs, strictly sequentially.
///
/// A failure on one file never prevents processing of the next.
pub fn convert_batch(
    pdfium: &Pdfium,
    paths: &[PathBuf],
    options: &ConvertOptions,
    sink: &mut dyn LogSink,
) {
    info!("Converting {} PDF(s) at {} DPI", paths.len(), options.dpi);
    for path in paths {
        convert_pdf(pdfium, path, options, sink);
    }
}

// ── Output naming ────────────────────────────────────────────────────────

/// Target for a single-page document: `<stem>.png` beside the source.
pub fn single_page_target(pdf_path: &Path) -> PathBuf {
    pdf_path.with_extension("png")
}

/// Output directory for a multi-page document: a sibling `<stem>/`.
pub fn multi_page_dir(pdf_path: &Path) -> PathBuf {
    pdf_path.with_extension("")
}

/// Target for one page of a multi-page document: `<stem> - Pg N.png`
/// (1-indexed).
pub fn page_target(out_dir: &Path, stem: &str, page_num: usize) -> PathBuf {
    out_dir.join(format!("{stem} - Pg {page_num}.png"))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| display_name(path))
}

// ── Rendering internals ──────────────────────────────────────────────────

/// Open a document, mapping pdfium's password error onto the
/// required-vs-wrong distinction.
fn open_document<'a>(
    pdfium: &'a Pdfium,
    pdf_path: &Path,
    name: &str,
    password: Option<&'a str>,
) -> Result<PdfDocument<'a>, ConvertError> {
    pdfium.load_pdf_from_file(pdf_path, password).map_err(|e| {
        let detail = format!("{:?}", e);
        if detail.contains("Password") || detail.contains("password") {
            if password.is_some() {
                ConvertError::WrongPassword { name: name.into() }
            } else {
                ConvertError::PasswordRequired { name: name.into() }
            }
        } else {
            ConvertError::OpenFailed {
                name: name.into(),
                detail,
            }
        }
    })
}

/// One render configuration per document: scale = dpi/72, and a transparent
/// BGRA surface when the alpha channel is kept.
fn render_config(options: &ConvertOptions) -> PdfRenderConfig {
    let config = PdfRenderConfig::new().scale_page_by_factor(options.scale());
    if options.alpha {
        config
            .set_format(PdfBitmapFormat::BGRA)
            .set_clear_color(PdfColor::new(255, 255, 255, 0))
    } else {
        config
    }
}

/// Render one page (0-indexed) and save it as a PNG.
fn render_to_png(
    document: &PdfDocument<'_>,
    index: u16,
    name: &str,
    render_config: &PdfRenderConfig,
    alpha: bool,
    out_png: &Path,
) -> Result<(), PageError> {
    let page_num = index as usize + 1;

    let pages = document.pages();
    let page = pages.get(index).map_err(|e| PageError::RenderFailed {
        name: name.into(),
        page: page_num,
        detail: format!("{:?}", e),
    })?;

    let bitmap = page
        .render_with_config(render_config)
        .map_err(|e| PageError::RenderFailed {
            name: name.into(),
            page: page_num,
            detail: format!("{:?}", e),
        })?;

    let image = bitmap.as_image();
    debug!(
        "Rendered '{}' Pg {} -> {}x{} px",
        name,
        page_num,
        image.width(),
        image.height()
    );

    // RGBA keeps the transparent clear colour; RGB flattens to opaque.
    let image = if alpha {
        DynamicImage::ImageRgba8(image.into_rgba8())
    } else {
        DynamicImage::ImageRgb8(image.into_rgb8())
    };

    image.save(out_png).map_err(|e| PageError::SaveFailed {
        name: name.into(),
        page: page_num,
        path: out_png.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_page_target_is_sibling_png() {
        let target = single_page_target(Path::new("/docs/report.pdf"));
        assert_eq!(target, PathBuf::from("/docs/report.png"));
    }

    #[test]
    fn multi_page_dir_is_sibling_stem() {
        let dir = multi_page_dir(Path::new("/docs/slides.pdf"));
        assert_eq!(dir, PathBuf::from("/docs/slides"));
    }

    #[test]
    fn page_target_naming_contract() {
        let dir = PathBuf::from("/docs/slides");
        assert_eq!(
            page_target(&dir, "slides", 1),
            PathBuf::from("/docs/slides/slides - Pg 1.png")
        );
        assert_eq!(
            page_target(&dir, "slides", 12),
            PathBuf::from("/docs/slides/slides - Pg 12.png")
        );
    }

    #[test]
    fn stem_handles_dotted_names() {
        assert_eq!(file_stem(Path::new("/a/report.v2.pdf")), "report.v2");
        assert_eq!(
            single_page_target(Path::new("/a/report.v2.pdf")),
            PathBuf::from("/a/report.v2.png")
        );
    }

    #[test]
    fn display_name_is_the_file_name() {
        assert_eq!(display_name(Path::new("/a/b/c.pdf")), "c.pdf");
    }
}
