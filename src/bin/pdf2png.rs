//! CLI binary for pdf2png.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ConvertOptions` and routes status lines to the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pdf2png::{bind_pdfium, convert_pdf, find_pdfs, ConvertOptions, LogSink, Status};
use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}

/// Render one status line with a coloured `[TAG]` prefix.
fn render_line(status: Status, message: &str) -> String {
    let tag = format!("[{}]", status.tag());
    let tag = match status {
        Status::Ok => green(&tag),
        Status::Skip => dim(&tag),
        Status::Warn => cyan(&tag),
        Status::Error => red(&tag),
        Status::Info => bold(&tag),
    };
    format!("{tag} {message}")
}

// ── Terminal sinks ───────────────────────────────────────────────────────────

/// Sink that prints above a live progress bar so lines are not clobbered
/// by bar redraws.
struct BarSink {
    bar: ProgressBar,
}

impl LogSink for BarSink {
    fn log(&mut self, status: Status, message: &str) {
        self.bar.println(render_line(status, message));
    }
}

/// Plain line-per-event sink for `--no-progress` and `--quiet` runs.
struct PlainSink {
    quiet: bool,
}

impl LogSink for PlainSink {
    fn log(&mut self, status: Status, message: &str) {
        match status {
            Status::Error => eprintln!("{}", render_line(status, message)),
            _ if self.quiet => {}
            _ => println!("{}", render_line(status, message)),
        }
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert one file (600 DPI, output beside the source)
  pdf2png report.pdf

  # A whole folder tree, replacing existing PNGs
  pdf2png --overwrite ~/scans

  # Keep transparency, render at 300 DPI
  pdf2png --dpi 300 --alpha diagram.pdf

  # Encrypted documents (one password for the whole batch)
  pdf2png --password secret statements/

OUTPUT NAMING:
  single page   report.pdf  ->  report.png
  multi page    slides.pdf  ->  slides/slides - Pg 1.png .. slides - Pg N.png

EXIT CODES:
  0  at least one PDF was discovered and attempted
  1  no PDFs were discovered from the given inputs

SETUP:
  pdf2png renders through the pdfium shared library. Place libpdfium next
  to the executable or install it system-wide.
"#;

/// Convert PDFs to PNG images beside the source files.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2png",
    version,
    about = "Convert PDFs to PNG images beside the source files",
    long_about = "Convert PDF documents to PNG raster images. Single-page documents become a \
sibling <stem>.png; multi-page documents become a sibling <stem>/ directory with one PNG per \
page. Folders are searched recursively for *.pdf (case-insensitive).",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// PDF files and/or folders (folders searched recursively).
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Render resolution in DPI (0 is treated as 1).
    #[arg(long, default_value_t = 600)]
    dpi: u32,

    /// Keep transparency (alpha channel).
    #[arg(long)]
    alpha: bool,

    /// Overwrite existing PNG files.
    #[arg(long)]
    overwrite: bool,

    /// Password to open encrypted PDFs (applies to all).
    #[arg(long)]
    password: Option<String>,

    /// Disable the progress bar.
    #[arg(long)]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Library tracing goes to stderr; suppress INFO-level logs while the
    // progress bar is active — the status lines carry the feedback.
    let show_progress = !cli.quiet && !cli.no_progress;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Discover targets ─────────────────────────────────────────────────
    let pdfs = find_pdfs(&cli.inputs);
    if pdfs.is_empty() {
        println!("{}", render_line(Status::Info, "No PDFs found."));
        return Ok(ExitCode::FAILURE);
    }

    // ── Convert ──────────────────────────────────────────────────────────
    let pdfium = bind_pdfium().context("Failed to bind to the pdfium rendering engine")?;

    let mut builder = ConvertOptions::builder()
        .dpi(cli.dpi)
        .alpha(cli.alpha)
        .overwrite(cli.overwrite);
    if let Some(ref pwd) = cli.password {
        builder = builder.password(pwd);
    }
    let options = builder.build();

    if show_progress {
        let bar = batch_bar(pdfs.len());
        let mut sink = BarSink { bar: bar.clone() };

        for pdf in &pdfs {
            bar.set_message(file_label(pdf));
            convert_pdf(&pdfium, pdf, &options, &mut sink);
            bar.inc(1);
        }

        bar.finish_and_clear();
        eprintln!(
            "{} {} file(s) processed at {} DPI",
            green("✔"),
            bold(&pdfs.len().to_string()),
            cli.dpi,
        );
    } else {
        let mut sink = PlainSink { quiet: cli.quiet };
        for pdf in &pdfs {
            convert_pdf(&pdfium, pdf, &options, &mut sink);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// One tick per file, status lines printed above the bar.
fn batch_bar(total: usize) -> ProgressBar {
    let bar = ProgressBar::new(total as u64);
    bar.set_style(
        ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  \
             [{bar:42.green/238}] {pos:>3}/{len} files  {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ")
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]),
    );
    bar.set_prefix("Converting");
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn dpi_zero_parses_and_is_floored_by_the_builder() {
        let cli = Cli::try_parse_from(["pdf2png", "--dpi", "0", "doc.pdf"]).unwrap();
        assert_eq!(cli.dpi, 0);

        let options = pdf2png::ConvertOptions::builder().dpi(cli.dpi).build();
        assert_eq!(options.dpi, 1);
    }
}
