//! Configuration for a PDF→PNG conversion.
//!
//! All conversion behaviour is controlled through [`ConvertOptions`], built
//! via its [`ConvertOptionsBuilder`]. One options struct per batch: the same
//! DPI, overwrite, alpha, and password settings apply uniformly to every
//! file in an invocation — there is no per-file password prompt.

use std::fmt;

/// Options for converting one PDF (or a whole batch) to PNG files.
///
/// Built via [`ConvertOptions::builder()`] or using
/// [`ConvertOptions::default()`].
///
/// # Example
/// ```rust
/// use pdf2png::ConvertOptions;
///
/// let options = ConvertOptions::builder()
///     .dpi(300)
///     .overwrite(true)
///     .build();
/// assert_eq!(options.dpi, 300);
/// ```
#[derive(Clone)]
pub struct ConvertOptions {
    /// Rendering resolution in dots per inch. Default: 600.
    ///
    /// PDF pages are measured in points (72 per inch), so the render scale
    /// is `dpi / 72`. Values below 1 are treated as 1 when computing the
    /// scale; see [`ConvertOptions::scale`].
    pub dpi: u32,

    /// Replace existing PNG files. Default: false.
    ///
    /// When false, an existing target PNG makes that page (or the whole
    /// single-page output) a reported skip, and its bytes are left untouched.
    pub overwrite: bool,

    /// Keep per-pixel transparency. Default: false.
    ///
    /// When true pages render RGBA over a transparent background; when false
    /// they render RGB over opaque white.
    pub alpha: bool,

    /// Password for encrypted documents. Applies to every file in a batch.
    pub password: Option<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            dpi: 600,
            overwrite: false,
            alpha: false,
            password: None,
        }
    }
}

impl fmt::Debug for ConvertOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConvertOptions")
            .field("dpi", &self.dpi)
            .field("overwrite", &self.overwrite)
            .field("alpha", &self.alpha)
            .field("password", &self.password.as_ref().map(|_| "<set>"))
            .finish()
    }
}

impl ConvertOptions {
    /// Create a new builder for `ConvertOptions`.
    pub fn builder() -> ConvertOptionsBuilder {
        ConvertOptionsBuilder {
            options: Self::default(),
        }
    }

    /// Render scale relative to the PDF's native 72-points-per-inch unit.
    ///
    /// A DPI of 0 is floored to 1 so the scale is always positive.
    pub fn scale(&self) -> f32 {
        self.dpi.max(1) as f32 / 72.0
    }
}

/// Builder for [`ConvertOptions`].
#[derive(Debug)]
pub struct ConvertOptionsBuilder {
    options: ConvertOptions,
}

impl ConvertOptionsBuilder {
    pub fn dpi(mut self, dpi: u32) -> Self {
        self.options.dpi = dpi.max(1);
        self
    }

    pub fn overwrite(mut self, v: bool) -> Self {
        self.options.overwrite = v;
        self
    }

    pub fn alpha(mut self, v: bool) -> Self {
        self.options.alpha = v;
        self
    }

    pub fn password(mut self, pwd: impl Into<String>) -> Self {
        self.options.password = Some(pwd.into());
        self
    }

    pub fn build(self) -> ConvertOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_cli_defaults() {
        let o = ConvertOptions::default();
        assert_eq!(o.dpi, 600);
        assert!(!o.overwrite);
        assert!(!o.alpha);
        assert!(o.password.is_none());
    }

    #[test]
    fn builder_floors_dpi_at_one() {
        let o = ConvertOptions::builder().dpi(0).build();
        assert_eq!(o.dpi, 1);
    }

    #[test]
    fn scale_is_dpi_over_72() {
        let o = ConvertOptions::builder().dpi(600).build();
        assert!((o.scale() - 600.0 / 72.0).abs() < f32::EPSILON);

        let native = ConvertOptions::builder().dpi(72).build();
        assert!((native.scale() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn debug_redacts_password() {
        let o = ConvertOptions::builder().password("hunter2").build();
        let dbg = format!("{:?}", o);
        assert!(!dbg.contains("hunter2"), "got: {dbg}");
    }
}
