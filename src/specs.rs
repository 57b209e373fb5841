//! Style builders for fonts, lines, markers and contours.
//!
//! Each spec owns one flat [`Options`] map and is consumed by a `Figure::draw_*` call or nested
//! into another spec. Nesting copies the accumulated options at call time, so changing the inner
//! spec afterwards has no effect on the outer one:
//!
//! ```
//! use reaktplot::{LineSpecs, MarkerSpecs};
//!
//! let line = LineSpecs::new().color("red");
//! let marker = MarkerSpecs::new().line(&line);
//! let _line = line.color("blue");
//! assert_eq!(marker.options()["line"]["color"], "red");
//! ```

use serde_json::Value;

use crate::options::Options;

/// Colorscale preselected by [`ContourSpecs::new`].
pub const DEFAULT_CONTOUR_COLORSCALE: &str = "Portland";

macro_rules! impl_spec_common {
    ($spec:ident) => {
        impl $spec {
            /// The accumulated options.
            pub fn options(&self) -> &Options {
                &self.options
            }

            /// Consume the spec and return its options.
            pub fn into_options(self) -> Options {
                self.options
            }
        }

        impl From<&$spec> for Options {
            fn from(spec: &$spec) -> Self {
                spec.options.clone()
            }
        }

        impl From<$spec> for Options {
            fn from(spec: $spec) -> Self {
                spec.options
            }
        }
    };
}

/// Attributes of a font used for a text in a figure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontSpecs {
    options: Options,
}

impl FontSpecs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Font size in px.
    pub fn size(mut self, value: i64) -> Self {
        self.options.insert("size".into(), value.into());
        self
    }

    /// Text color, e.g. `"#ff0000"`, `"rgb(100, 150, 200)"`, `"coral"`.
    pub fn color(mut self, value: impl Into<String>) -> Self {
        self.options.insert("color".into(), value.into().into());
        self
    }

    /// Font family, e.g. `"Arial"`, `"Sans-Serif"`, `"Droid Sans"`.
    pub fn family(mut self, value: impl Into<String>) -> Self {
        self.options.insert("family".into(), value.into().into());
        self
    }
}

impl_spec_common!(FontSpecs);

/// Attributes of a line trace (or of a marker border).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineSpecs {
    options: Options,
}

impl LineSpecs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Line width in px.
    pub fn width(mut self, value: i64) -> Self {
        self.options.insert("width".into(), value.into());
        self
    }

    pub fn color(mut self, value: impl Into<String>) -> Self {
        self.options.insert("color".into(), value.into().into());
        self
    }

    /// Dash style: `"solid"`, `"dot"`, `"dash"`, `"longdash"`, `"dashdot"` or `"longdashdot"`.
    pub fn dash(mut self, value: impl Into<String>) -> Self {
        self.options.insert("dash".into(), value.into().into());
        self
    }

    /// Line shape between points: `"linear"`, `"spline"`, `"hv"`, `"vh"`, `"hvh"` or `"vhv"`.
    pub fn shape(mut self, value: impl Into<String>) -> Self {
        self.options.insert("shape".into(), value.into().into());
        self
    }
}

impl_spec_common!(LineSpecs);

/// Attributes of the markers of a scatter trace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerSpecs {
    options: Options,
}

impl MarkerSpecs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marker size in px, a number in `[0, inf)`.
    pub fn size(mut self, value: i64) -> Self {
        self.options.insert("size".into(), value.into());
        self
    }

    /// Marker symbol, e.g. `"circle"`, `"diamond"`, `"square"`, `"circle-open"`.
    pub fn symbol(mut self, value: impl Into<String>) -> Self {
        self.options.insert("symbol".into(), value.into().into());
        self
    }

    pub fn color(mut self, value: impl Into<String>) -> Self {
        self.options.insert("color".into(), value.into().into());
        self
    }

    /// Border line of the marker. The line options are copied now.
    pub fn line(mut self, value: &LineSpecs) -> Self {
        self.options
            .insert("line".into(), Value::Object(value.options.clone()));
        self
    }

    /// Marker opacity in `[0, 1]`.
    pub fn opacity(mut self, value: f64) -> Self {
        self.options.insert("opacity".into(), value.into());
        self
    }
}

impl_spec_common!(MarkerSpecs);

/// Attributes of a contour trace.
///
/// A fresh instance already carries an empty `contours` map and the
/// [`DEFAULT_CONTOUR_COLORSCALE`].
#[derive(Debug, Clone, PartialEq)]
pub struct ContourSpecs {
    options: Options,
}

impl Default for ContourSpecs {
    fn default() -> Self {
        let mut options = Options::new();
        options.insert("contours".into(), Value::Object(Options::new()));
        ContourSpecs { options }.colorscale(DEFAULT_CONTOUR_COLORSCALE)
    }
}

impl ContourSpecs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Colorscale name, e.g. `"Portland"`, `"Viridis"`, `"Jet"`.
    pub fn colorscale(mut self, value: impl Into<String>) -> Self {
        self.options.insert("colorscale".into(), value.into().into());
        self
    }

    /// Fill the bands between contour levels.
    pub fn coloring_mode_fill(mut self) -> Self {
        self.options
            .insert("contours_coloring".into(), "fill".into());
        self
    }

    /// Color the cells with a continuous gradient.
    pub fn coloring_mode_heatmap(mut self) -> Self {
        self.options
            .insert("contours_coloring".into(), "heatmap".into());
        self
    }

    /// Color only the contour lines.
    pub fn coloring_mode_lines(mut self) -> Self {
        self.options
            .insert("contours_coloring".into(), "lines".into());
        self
    }

    /// Maximum number of contour levels.
    pub fn num_contours(mut self, value: i64) -> Self {
        self.options.insert("ncontours".into(), value.into());
        self
    }

    /// Show labels along the contour lines.
    pub fn show_labels(mut self, value: bool) -> Self {
        self.contours().insert("showlabels".into(), value.into());
        self
    }

    /// Show the contour lines (only meaningful for fill coloring).
    pub fn show_lines(mut self, value: bool) -> Self {
        self.contours().insert("showlines".into(), value.into());
        self
    }

    /// Font of the contour labels. The font options are copied now.
    pub fn label_font(mut self, value: &FontSpecs) -> Self {
        let font = Value::Object(value.options.clone());
        self.contours().insert("labelfont".into(), font);
        self
    }

    /// d3 format of the contour labels, e.g. `".1f"`, `".2e"`.
    pub fn label_format(mut self, value: impl Into<String>) -> Self {
        let format = Value::from(value.into());
        self.contours().insert("labelformat".into(), format);
        self
    }

    /// Style of the contour lines. The line options are copied now.
    pub fn line(mut self, value: &LineSpecs) -> Self {
        self.options
            .insert("line".into(), Value::Object(value.options.clone()));
        self
    }

    /// Show or hide the color bar.
    pub fn show_scale(mut self, value: bool) -> Self {
        self.options.insert("showscale".into(), value.into());
        self
    }

    fn contours(&mut self) -> &mut Options {
        let entry = self
            .options
            .entry("contours")
            .or_insert_with(|| Value::Object(Options::new()));
        if !entry.is_object() {
            *entry = Value::Object(Options::new());
        }
        match entry {
            Value::Object(map) => map,
            _ => unreachable!("contours entry was just made an object"),
        }
    }
}

impl_spec_common!(ContourSpecs);
