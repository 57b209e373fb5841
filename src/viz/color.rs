//! Color strings and colorscales.
//!
//! Color strings are parsed by `colorgrad` (CSS syntax: `#rgb`, `#rrggbb`, `#rrggbbaa`,
//! `rgb()`, `rgba()`, `hsl()` and the named colors). Colorscales are `colorgrad` linear gradients
//! built from plotly's stop tables or from explicit `[[position, color], ..]` arrays.

use std::fmt;
use std::sync::Arc;

use colorgrad::{Gradient, GradientBuilder, LinearGradient};
use plotters::style::RGBAColor;
use serde_json::Value;

use crate::error::ExportError;

/// Parse a color string into an RGBA color.
pub fn parse_color(text: &str) -> Result<RGBAColor, ExportError> {
    colorgrad::Color::from_html(text.trim())
        .map(|c| to_rgba(&c))
        .map_err(|_| ExportError::InvalidColor(text.to_string()))
}

/// Parse a color held in an options value. Non-string values are rejected.
pub fn color_value(value: &Value) -> Result<RGBAColor, ExportError> {
    match value {
        Value::String(s) => parse_color(s),
        other => Err(ExportError::InvalidColor(other.to_string())),
    }
}

fn to_rgba(c: &colorgrad::Color) -> RGBAColor {
    let [r, g, b, _] = c.to_rgba8();
    RGBAColor(r, g, b, c.a.clamp(0.0, 1.0) as f64)
}

macro_rules! named_colorscales {
    ($( $name:literal => [ $( ($t:expr, $c:literal) ),+ $(,)? ] ),+ $(,)?) => {
        /// Built-in colorscales, stops exactly as plotly defines them.
        const NAMED_COLORSCALES: &[(&str, &[(f64, &str)])] = &[
            $( ($name, &[ $( ($t, $c) ),+ ]) ),+
        ];
    };
}

named_colorscales! {
    "Greys" => [(0.0, "rgb(0,0,0)"), (1.0, "rgb(255,255,255)")],
    "YlGnBu" => [
        (0.0, "rgb(8,29,88)"), (0.125, "rgb(37,52,148)"), (0.25, "rgb(34,94,168)"),
        (0.375, "rgb(29,145,192)"), (0.5, "rgb(65,182,196)"), (0.625, "rgb(127,205,187)"),
        (0.75, "rgb(199,233,180)"), (0.875, "rgb(237,248,217)"), (1.0, "rgb(255,255,217)"),
    ],
    "Greens" => [
        (0.0, "rgb(0,68,27)"), (0.125, "rgb(0,109,44)"), (0.25, "rgb(35,139,69)"),
        (0.375, "rgb(65,171,93)"), (0.5, "rgb(116,196,118)"), (0.625, "rgb(161,217,155)"),
        (0.75, "rgb(199,233,192)"), (0.875, "rgb(229,245,224)"), (1.0, "rgb(247,252,245)"),
    ],
    "YlOrRd" => [
        (0.0, "rgb(128,0,38)"), (0.125, "rgb(189,0,38)"), (0.25, "rgb(227,26,28)"),
        (0.375, "rgb(252,78,42)"), (0.5, "rgb(253,141,60)"), (0.625, "rgb(254,178,76)"),
        (0.75, "rgb(254,217,118)"), (0.875, "rgb(255,237,160)"), (1.0, "rgb(255,255,204)"),
    ],
    "Bluered" => [(0.0, "rgb(0,0,255)"), (1.0, "rgb(255,0,0)")],
    "RdBu" => [
        (0.0, "rgb(5,10,172)"), (0.35, "rgb(106,137,247)"), (0.5, "rgb(190,190,190)"),
        (0.6, "rgb(220,170,132)"), (0.7, "rgb(230,145,90)"), (1.0, "rgb(178,10,28)"),
    ],
    "Reds" => [
        (0.0, "rgb(220,220,220)"), (0.2, "rgb(245,195,157)"), (0.4, "rgb(245,160,105)"),
        (1.0, "rgb(178,10,28)"),
    ],
    "Blues" => [
        (0.0, "rgb(5,10,172)"), (0.35, "rgb(40,60,190)"), (0.5, "rgb(70,100,245)"),
        (0.6, "rgb(90,120,245)"), (0.7, "rgb(106,137,247)"), (1.0, "rgb(220,220,220)"),
    ],
    "Picnic" => [
        (0.0, "rgb(0,0,255)"), (0.1, "rgb(51,153,255)"), (0.2, "rgb(102,204,255)"),
        (0.3, "rgb(153,204,255)"), (0.4, "rgb(204,204,255)"), (0.5, "rgb(255,255,255)"),
        (0.6, "rgb(255,204,255)"), (0.7, "rgb(255,153,255)"), (0.8, "rgb(255,102,204)"),
        (0.9, "rgb(255,102,102)"), (1.0, "rgb(255,0,0)"),
    ],
    "Rainbow" => [
        (0.0, "rgb(150,0,90)"), (0.125, "rgb(0,0,200)"), (0.25, "rgb(0,25,255)"),
        (0.375, "rgb(0,152,255)"), (0.5, "rgb(44,255,150)"), (0.625, "rgb(151,255,0)"),
        (0.75, "rgb(255,234,0)"), (0.875, "rgb(255,111,0)"), (1.0, "rgb(255,0,0)"),
    ],
    "Portland" => [
        (0.0, "rgb(12,51,131)"), (0.25, "rgb(10,136,186)"), (0.5, "rgb(242,211,56)"),
        (0.75, "rgb(242,143,56)"), (1.0, "rgb(217,30,30)"),
    ],
    "Jet" => [
        (0.0, "rgb(0,0,131)"), (0.125, "rgb(0,60,170)"), (0.375, "rgb(5,255,255)"),
        (0.625, "rgb(255,255,0)"), (0.875, "rgb(250,0,0)"), (1.0, "rgb(128,0,0)"),
    ],
    "Hot" => [
        (0.0, "rgb(0,0,0)"), (0.3, "rgb(230,0,0)"), (0.6, "rgb(255,210,0)"),
        (1.0, "rgb(255,255,255)"),
    ],
    "Blackbody" => [
        (0.0, "rgb(0,0,0)"), (0.2, "rgb(230,0,0)"), (0.4, "rgb(230,210,0)"),
        (0.7, "rgb(255,255,255)"), (1.0, "rgb(160,200,255)"),
    ],
    "Earth" => [
        (0.0, "rgb(0,0,130)"), (0.1, "rgb(0,180,180)"), (0.2, "rgb(40,210,40)"),
        (0.4, "rgb(230,230,50)"), (0.6, "rgb(120,70,20)"), (1.0, "rgb(255,255,255)"),
    ],
    "Electric" => [
        (0.0, "rgb(0,0,0)"), (0.15, "rgb(30,0,100)"), (0.4, "rgb(120,0,100)"),
        (0.6, "rgb(160,90,0)"), (0.8, "rgb(230,200,0)"), (1.0, "rgb(255,250,220)"),
    ],
    "Viridis" => [
        (0.0, "#440154"), (0.06274509803921569, "#48186a"), (0.12549019607843137, "#472d7b"),
        (0.18823529411764706, "#424086"), (0.25098039215686274, "#3b528b"),
        (0.3137254901960784, "#33638d"), (0.3764705882352941, "#2c728e"),
        (0.4392156862745098, "#26828e"), (0.5019607843137255, "#21918c"),
        (0.5647058823529412, "#1fa088"), (0.6274509803921569, "#28ae80"),
        (0.6901960784313725, "#3fbc73"), (0.7529411764705882, "#5ec962"),
        (0.8156862745098039, "#84d44b"), (0.8784313725490196, "#addc30"),
        (0.9411764705882353, "#d8e219"), (1.0, "#fde725"),
    ],
}


/// A continuous colorscale over `[0, 1]`.
#[derive(Clone)]
pub struct Colorscale {
    stops: Vec<(f64, colorgrad::Color)>,
    gradient: Arc<LinearGradient>,
}

impl fmt::Debug for Colorscale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Colorscale")
            .field("stops", &self.stops)
            .finish()
    }
}

impl PartialEq for Colorscale {
    fn eq(&self, other: &Self) -> bool {
        self.stops == other.stops
    }
}

impl Colorscale {
    /// Names of the built-in colorscales.
    pub fn names() -> impl Iterator<Item = &'static str> {
        NAMED_COLORSCALES.iter().map(|(name, _)| *name)
    }

    /// Look up a built-in colorscale by name (case-insensitive). A `_r` suffix reverses it.
    pub fn named(name: &str) -> Result<Self, ExportError> {
        let unknown = || ExportError::UnknownColorscale(name.to_string());
        let (base, reversed) = match name.strip_suffix("_r") {
            Some(base) => (base, true),
            None => (name, false),
        };
        let (_, stops) = NAMED_COLORSCALES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(base))
            .ok_or_else(unknown)?;
        let stops = stops
            .iter()
            .map(|(t, c)| colorgrad::Color::from_html(c).map(|c| (*t, c)))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| unknown())?;
        let scale = Self::from_stops(stops).ok_or_else(unknown)?;
        if reversed { scale.reversed() } else { Ok(scale) }
    }

    /// A colorscale from an options value: a name or an array of `[position, color]` pairs.
    pub fn from_value(value: &Value) -> Result<Self, ExportError> {
        let unknown = || ExportError::UnknownColorscale(value.to_string());
        match value {
            Value::String(name) => Self::named(name),
            Value::Array(items) if !items.is_empty() => {
                let mut stops = Vec::with_capacity(items.len());
                for item in items {
                    let pair = item.as_array().filter(|p| p.len() == 2);
                    let (t, c) = match pair {
                        Some(p) => (p[0].as_f64(), &p[1]),
                        None => (None, item),
                    };
                    let t = t.ok_or_else(unknown)?;
                    let color = match c {
                        Value::String(s) => colorgrad::Color::from_html(s.trim())
                            .map_err(|_| ExportError::InvalidColor(s.clone()))?,
                        other => return Err(ExportError::InvalidColor(other.to_string())),
                    };
                    stops.push((t.clamp(0.0, 1.0), color));
                }
                stops.sort_by(|a, b| a.0.total_cmp(&b.0));
                Self::from_stops(stops).ok_or_else(unknown)
            }
            _ => Err(unknown()),
        }
    }

    fn from_stops(mut stops: Vec<(f64, colorgrad::Color)>) -> Option<Self> {
        if let [(t, c)] = stops.as_slice() {
            let (t, c) = (*t, c.clone());
            stops = vec![(t.min(0.0), c.clone()), (t.max(1.0), c)];
        }
        let colors: Vec<colorgrad::Color> = stops.iter().map(|(_, c)| c.clone()).collect();
        let domain: Vec<f32> = stops.iter().map(|(t, _)| *t as f32).collect();
        let gradient = GradientBuilder::new()
            .colors(&colors)
            .domain(&domain)
            .build::<LinearGradient>()
            .ok()?;
        Some(Colorscale {
            stops,
            gradient: Arc::new(gradient),
        })
    }

    pub fn reversed(&self) -> Result<Self, ExportError> {
        let stops = self
            .stops
            .iter()
            .rev()
            .map(|(t, c)| (1.0 - t, c.clone()))
            .collect();
        Self::from_stops(stops).ok_or_else(|| ExportError::UnknownColorscale(format!("{:?}", self)))
    }

    /// Color at normalized position `t`; values outside `[0, 1]` are clamped.
    pub fn at(&self, t: f64) -> RGBAColor {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        to_rgba(&self.gradient.at(t as f32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rgb(c: RGBAColor) -> (u8, u8, u8) {
        (c.0, c.1, c.2)
    }

    fn close(a: (u8, u8, u8), b: (u8, u8, u8)) -> bool {
        a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1 && a.2.abs_diff(b.2) <= 1
    }

    #[test]
    fn parses_the_usual_forms() {
        assert_eq!(rgb(parse_color("#f00").unwrap()), (255, 0, 0));
        assert_eq!(rgb(parse_color("#4C78A8").unwrap()), (0x4c, 0x78, 0xa8));
        assert_eq!(rgb(parse_color("rgb(100, 150, 200)").unwrap()), (100, 150, 200));
        let c = parse_color("rgba(1,2,3,0.5)").unwrap();
        assert_eq!((rgb(c), c.3), ((1, 2, 3), 0.5));
        assert_eq!(rgb(parse_color("Coral").unwrap()), (255, 127, 80));
        assert_eq!(parse_color(" black ").unwrap().3, 1.0);
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "#12", "#ggg", "rgb(1,2)", "notacolor", "rgb(a,b,c)"] {
            assert!(
                matches!(parse_color(bad), Err(ExportError::InvalidColor(_))),
                "{bad:?} should be rejected"
            );
        }
        assert!(color_value(&json!(12)).is_err());
    }

    #[test]
    fn portland_endpoints_and_midpoint() {
        let scale = Colorscale::named("Portland").unwrap();
        assert!(close(rgb(scale.at(0.0)), (12, 51, 131)));
        assert!(close(rgb(scale.at(0.5)), (242, 211, 56)));
        assert!(close(rgb(scale.at(1.0)), (217, 30, 30)));
        assert!(close(rgb(scale.at(7.0)), (217, 30, 30)));
    }

    #[test]
    fn names_are_case_insensitive_and_reversible() {
        let a = Colorscale::named("viridis").unwrap();
        let b = Colorscale::named("Viridis_r").unwrap();
        assert!(close(rgb(a.at(0.0)), rgb(b.at(1.0))));
        assert!(matches!(
            Colorscale::named("Sparkles"),
            Err(ExportError::UnknownColorscale(_))
        ));
        assert!(Colorscale::names().any(|n| n == "Jet"));
    }

    #[test]
    fn every_builtin_scale_builds() {
        for name in Colorscale::names() {
            assert!(Colorscale::named(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn explicit_stop_arrays() {
        let scale = Colorscale::from_value(&json!([[1, "white"], [0, "black"]])).unwrap();
        assert_eq!(rgb(scale.at(0.0)), (0, 0, 0));
        assert!(close(rgb(scale.at(0.5)), (128, 128, 128)));
        assert!(matches!(
            Colorscale::from_value(&json!([[0, "nope"]])),
            Err(ExportError::InvalidColor(_))
        ));
        assert!(Colorscale::from_value(&json!(3)).is_err());

        let single = Colorscale::from_value(&json!([[0.5, "red"]])).unwrap();
        assert_eq!(rgb(single.at(0.9)), (255, 0, 0));
    }
}
