//! Errors raised while turning a figure into a file or a browser page.
//!
//! The builder layer never validates anything; every failure below is detected when a figure is
//! rendered or exported and is handed back to the caller unchanged (wrapped in `anyhow::Error`).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// The file extension does not map to any supported output format.
    #[error(
        "invalid format '{extension}' for '{}'; supported formats: png, jpeg, jpg, webp, svg, pdf, eps, html",
        path.display()
    )]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// The output path has no extension to infer the format from.
    #[error("cannot infer the output format of '{}': missing file extension", .0.display())]
    MissingExtension(PathBuf),

    /// Width, height or scale produce an empty image.
    #[error("invalid figure size {width}x{height} at scale {scale}")]
    InvalidSize { width: u32, height: u32, scale: f64 },

    /// A color string that is neither hex, rgb()/rgba() nor a known color name.
    #[error("invalid color value '{0}'")]
    InvalidColor(String),

    /// A colorscale name that is not one of the built-in scales.
    #[error("unknown colorscale '{0}'")]
    UnknownColorscale(String),

    /// `templates::set_default` was given a name that was never registered.
    #[error("unknown template '{0}'")]
    UnknownTemplate(String),

    /// Errors from the plotters drawing backends.
    #[error("render failed: {0}")]
    Render(String),

    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("figure serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }

    /// Map a plotters drawing error into [`ExportError::Render`].
    pub(crate) fn render<E: std::fmt::Debug>(e: E) -> Self {
        ExportError::Render(format!("{:?}", e))
    }
}
