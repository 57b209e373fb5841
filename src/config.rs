//! Export settings shared by `save`, `show` and the demo binary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default figure width in px.
pub const DEFAULT_WIDTH: u32 = 800;
/// Default figure height in px.
pub const DEFAULT_HEIGHT: u32 = 500;
/// Default raster scale factor.
pub const DEFAULT_SCALE: f64 = 1.0;
/// plotly.js bundle referenced by exported HTML pages.
pub const DEFAULT_PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Width used by `Figure::save`.
    pub width: u32,
    /// Height used by `Figure::save`.
    pub height: u32,
    /// Scale used by `Figure::save`.
    pub scale: f64,
    /// Script source of plotly.js in HTML output (URL or relative path).
    pub plotly_js_src: String,
    /// TrueType font for text in raster/SVG output; tried before the system locations.
    pub font_path: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scale: DEFAULT_SCALE,
            plotly_js_src: DEFAULT_PLOTLY_JS.to_string(),
            font_path: None,
        }
    }
}

impl ExportConfig {
    /// Read settings from a JSON file; missing fields keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let cfg = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn partial_json_keeps_defaults() {
        let mut f = NamedTempFile::new().unwrap();
        write!(f, r#"{{"width": 1024, "font_path": "/tmp/font.ttf"}}"#).unwrap();
        let cfg = ExportConfig::from_json_file(f.path()).unwrap();
        assert_eq!(cfg.width, 1024);
        assert_eq!(cfg.height, DEFAULT_HEIGHT);
        assert_eq!(cfg.scale, DEFAULT_SCALE);
        assert_eq!(cfg.plotly_js_src, DEFAULT_PLOTLY_JS);
        assert_eq!(cfg.font_path, Some(PathBuf::from("/tmp/font.ttf")));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(ExportConfig::from_json_file("/definitely/not/here.json").is_err());
    }
}
