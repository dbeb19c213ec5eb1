//! # pdf2png
//!
//! Convert PDF documents to PNG raster images, placed beside the source
//! files.
//!
//! ## Pipeline Overview
//!
//! ```text
//! inputs (files / folders)
//!  │
//!  ├─ 1. Discover  expand folders recursively, dedup, keep *.pdf
//!  ├─ 2. Open      load each document via pdfium (password if encrypted)
//!  ├─ 3. Render    rasterise every page at dpi/72 scale (RGB or RGBA)
//!  └─ 4. Save      <stem>.png, or <stem>/<stem> - Pg N.png per page
//! ```
//!
//! Processing is strictly sequential and single-threaded. No error aborts a
//! batch: a file that cannot be opened, and a page that cannot be rendered,
//! each turn into one status line on the caller's [`sink::LogSink`] and are
//! skipped.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2png::{bind_pdfium, convert_batch, find_pdfs, ConvertOptions, StdoutSink};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pdfium = bind_pdfium()?;
//!     let pdfs = find_pdfs(["~/scans", "report.pdf"]);
//!     let options = ConvertOptions::builder().dpi(300).overwrite(true).build();
//!     convert_batch(&pdfium, &pdfs, &options, &mut StdoutSink);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2png` binary (clap + anyhow + indicatif + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only
//! deps:
//! ```toml
//! pdf2png = { version = "0.3", default-features = false }
//! ```
//!
//! ## Embedding in an interface shell
//!
//! A desktop front-end owns a [`targets::TargetList`], feeds it to
//! [`find_pdfs`] on start, and passes a sink that appends lines to its log
//! panel instead of standard output. The library never spawns threads; a
//! shell that wants a responsive window runs the batch on a worker thread
//! and marshals sink lines back itself.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod discover;
pub mod engine;
pub mod error;
pub mod sink;
pub mod targets;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConvertOptions, ConvertOptionsBuilder};
pub use convert::{convert_batch, convert_pdf};
pub use discover::find_pdfs;
pub use engine::bind_pdfium;
pub use error::{ConvertError, PageError};
pub use sink::{LogSink, MemorySink, Status, StdoutSink};
pub use targets::{split_dropped_paths, TargetList};

// The rendering engine type callers pass around.
pub use pdfium_render::prelude::Pdfium;
