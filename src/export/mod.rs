//! File export and interactive display of a [`NativeFigure`].
//!
//! The format is chosen by the file extension alone. Raster formats and the raster-backed PDF
//! and EPS documents come from [`viz::render_rgb`]; SVG from [`viz::render_svg`]; HTML is a
//! standalone plotly.js page built from the figure JSON.

mod container;

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::Result;
use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, RgbImage};
use log::{debug, warn};
use serde_json::Value;

use crate::config::ExportConfig;
use crate::error::ExportError;
use crate::graph::NativeFigure;
use crate::viz;

/// JPEG quality of the raster embedded in PDF and EPS output.
const DOCUMENT_JPEG_QUALITY: u8 = 92;

/// Output formats, keyed by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Webp,
    Svg,
    Pdf,
    Eps,
    Html,
}

impl ImageFormat {
    /// Infer the format from the extension of `path` (case-insensitive).
    pub fn from_path(path: &Path) -> Result<ImageFormat, ExportError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| ExportError::MissingExtension(path.to_path_buf()))?;
        match ext.to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpeg" | "jpg" => Ok(ImageFormat::Jpeg),
            "webp" => Ok(ImageFormat::Webp),
            "svg" => Ok(ImageFormat::Svg),
            "pdf" => Ok(ImageFormat::Pdf),
            "eps" => Ok(ImageFormat::Eps),
            "html" => Ok(ImageFormat::Html),
            _ => Err(ExportError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: ext.to_string(),
            }),
        }
    }

    fn raster(self) -> Option<image::ImageFormat> {
        match self {
            ImageFormat::Png => Some(image::ImageFormat::Png),
            ImageFormat::Jpeg => Some(image::ImageFormat::Jpeg),
            ImageFormat::Webp => Some(image::ImageFormat::WebP),
            _ => None,
        }
    }
}

/// Write `figure` to `path` in the format named by its extension.
///
/// `width` and `height` are layout pixels; raster output is multiplied by `scale`.
pub fn save(
    figure: &NativeFigure,
    path: &Path,
    width: u32,
    height: u32,
    scale: f64,
    config: &ExportConfig,
) -> Result<()> {
    let format = ImageFormat::from_path(path)?;
    if width == 0 || height == 0 || !scale.is_finite() || scale <= 0.0 {
        return Err(ExportError::InvalidSize {
            width,
            height,
            scale,
        }
        .into());
    }
    debug!(
        "exporting {:?} {}x{} at scale {} to {}",
        format,
        width,
        height,
        scale,
        path.display()
    );

    let bytes = match format {
        ImageFormat::Svg => viz::render_svg(figure, width, height, config)?.into_bytes(),
        ImageFormat::Html => html_page(figure, width, height, config)?.into_bytes(),
        ImageFormat::Pdf | ImageFormat::Eps => {
            let (rgb, w, h) = viz::render_rgb(figure, width, height, scale, config)?;
            let jpeg = encode_jpeg(&rgb, w, h)?;
            if format == ImageFormat::Pdf {
                container::pdf(&jpeg, w, h, width, height)
            } else {
                container::eps(&jpeg, w, h, width, height)
            }
        }
        raster => {
            let (rgb, w, h) = viz::render_rgb(figure, width, height, scale, config)?;
            let image = RgbImage::from_raw(w, h, rgb)
                .ok_or_else(|| ExportError::Render("pixel buffer does not match size".into()))?;
            let mut out = Cursor::new(Vec::new());
            if let Some(target) = raster.raster() {
                image
                    .write_to(&mut out, target)
                    .map_err(ExportError::from)?;
            }
            out.into_inner()
        }
    };
    fs::write(path, bytes).map_err(|e| ExportError::io(path, e))?;
    Ok(())
}

fn encode_jpeg(rgb: &[u8], width: u32, height: u32) -> Result<Vec<u8>, ExportError> {
    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, DOCUMENT_JPEG_QUALITY).encode(
        rgb,
        width,
        height,
        ExtendedColorType::Rgb8,
    )?;
    Ok(out)
}

/// Standalone HTML page drawing the figure with plotly.js.
pub fn html_page(
    figure: &NativeFigure,
    width: u32,
    height: u32,
    config: &ExportConfig,
) -> Result<String, ExportError> {
    let value = figure.to_value();
    let data = script_json(value.get("data").unwrap_or(&Value::Null))?;
    let layout = script_json(value.get("layout").unwrap_or(&Value::Null))?;
    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<script src="{src}"></script>
</head>
<body>
<div id="reaktplot" style="width:{width}px;height:{height}px;"></div>
<script>
Plotly.newPlot("reaktplot", {data}, {layout}, {{"responsive": true}});
</script>
</body>
</html>
"#,
        src = config.plotly_js_src.replace('"', "&quot;"),
    ))
}

/// JSON safe to place inside a `<script>` element.
fn script_json(value: &Value) -> Result<String, ExportError> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// Write the figure as an HTML page to a kept temporary file and open it in the system viewer.
pub fn show(figure: &NativeFigure, config: &ExportConfig) -> Result<PathBuf> {
    let page = html_page(figure, config.width, config.height, config)?;
    let file = tempfile::Builder::new()
        .prefix("reaktplot-")
        .suffix(".html")
        .tempfile()
        .map_err(|e| ExportError::io(std::env::temp_dir(), e))?;
    let (_, path) = file
        .keep()
        .map_err(|e| ExportError::io(std::env::temp_dir(), e.error))?;
    fs::write(&path, page).map_err(|e| ExportError::io(&path, e))?;
    debug!("opening {}", path.display());
    if let Err(e) = open::that(&path) {
        warn!("could not open {}: {}", path.display(), e);
        return Err(ExportError::io(&path, e).into());
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Trace, TraceKind};
    use crate::templates::Template;
    use serde_json::json;
    use std::sync::Arc;

    fn line_figure() -> NativeFigure {
        let mut fig = NativeFigure::with_template(Arc::new(Template::default()));
        let options = match json!({"x": [0, 1, 2], "y": [1, 3, 2], "name": "</script>"}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        fig.add_trace(Trace::new(TraceKind::Scatter, options));
        fig
    }

    #[test]
    fn formats_follow_the_extension() {
        let cases = [
            ("a.png", ImageFormat::Png),
            ("a.JPG", ImageFormat::Jpeg),
            ("a.jpeg", ImageFormat::Jpeg),
            ("a.webp", ImageFormat::Webp),
            ("a.svg", ImageFormat::Svg),
            ("a.Pdf", ImageFormat::Pdf),
            ("a.eps", ImageFormat::Eps),
            ("a.html", ImageFormat::Html),
        ];
        for (name, format) in cases {
            assert_eq!(ImageFormat::from_path(Path::new(name)).unwrap(), format);
        }
        assert!(matches!(
            ImageFormat::from_path(Path::new("a.gif")),
            Err(ExportError::UnsupportedFormat { .. })
        ));
        assert!(matches!(
            ImageFormat::from_path(Path::new("noext")),
            Err(ExportError::MissingExtension(_))
        ));
    }

    #[test]
    fn zero_size_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = save(
            &line_figure(),
            &dir.path().join("a.png"),
            0,
            500,
            1.0,
            &ExportConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExportError>(),
            Some(ExportError::InvalidSize { .. })
        ));
    }

    #[test]
    fn html_page_embeds_escaped_json() {
        let config = ExportConfig {
            plotly_js_src: "plotly.min.js".into(),
            ..ExportConfig::default()
        };
        let page = html_page(&line_figure(), 640, 480, &config).unwrap();
        assert!(page.contains(r#"<script src="plotly.min.js"></script>"#));
        assert!(page.contains("width:640px;height:480px;"));
        assert!(page.contains("Plotly.newPlot(\"reaktplot\""));
        assert!(page.contains(r#""type":"scatter""#));
        assert!(!page.contains("\"</script>\""));
    }
}
