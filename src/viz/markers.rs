//! Scatter marker symbols and how they are drawn in pixel space.

use plotters::coord::Shift;
use plotters::prelude::*;
use serde_json::Value;

use crate::error::ExportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Square,
    Diamond,
    Cross,
    X,
    TriangleUp,
    TriangleDown,
    TriangleLeft,
    TriangleRight,
    Star,
}

/// A marker symbol: shape plus whether it is drawn as an outline only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub shape: MarkerShape,
    pub open: bool,
}

impl Default for Symbol {
    fn default() -> Self {
        Symbol {
            shape: MarkerShape::Circle,
            open: false,
        }
    }
}

impl Symbol {
    /// Read a plotly symbol: a name (`"square"`, `"diamond-open"`) or a numeric code
    /// (`1`, `101`). Unknown symbols draw as circles.
    pub fn from_value(value: &Value) -> Symbol {
        match value {
            Value::String(name) => Self::from_name(name),
            Value::Number(n) => n
                .as_u64()
                .map(|code| Self::from_code(code as u32))
                .unwrap_or_default(),
            _ => Symbol::default(),
        }
    }

    fn from_name(name: &str) -> Symbol {
        let name = name.trim().to_ascii_lowercase();
        let (base, open) = match name.strip_suffix("-open") {
            Some(base) => (base, true),
            None => (name.as_str(), false),
        };
        let shape = match base.trim_end_matches("-dot") {
            "square" => MarkerShape::Square,
            "diamond" => MarkerShape::Diamond,
            "cross" => MarkerShape::Cross,
            "x" => MarkerShape::X,
            "triangle-up" => MarkerShape::TriangleUp,
            "triangle-down" => MarkerShape::TriangleDown,
            "triangle-left" => MarkerShape::TriangleLeft,
            "triangle-right" => MarkerShape::TriangleRight,
            "star" => MarkerShape::Star,
            _ => MarkerShape::Circle,
        };
        Symbol { shape, open }
    }

    fn from_code(code: u32) -> Symbol {
        let shape = match code % 100 {
            1 => MarkerShape::Square,
            2 => MarkerShape::Diamond,
            3 => MarkerShape::Cross,
            4 => MarkerShape::X,
            5 => MarkerShape::TriangleUp,
            6 => MarkerShape::TriangleDown,
            7 => MarkerShape::TriangleLeft,
            8 => MarkerShape::TriangleRight,
            17 => MarkerShape::Star,
            _ => MarkerShape::Circle,
        };
        let variant = code / 100;
        Symbol {
            shape,
            open: variant == 1 || variant == 3,
        }
    }
}

/// Outline of `shape` for a marker of diameter `size`, as offsets from the centre.
/// Circles have no polygon.
pub fn outline(shape: MarkerShape, size: f64) -> Vec<(f64, f64)> {
    let r = size / 2.0;
    match shape {
        MarkerShape::Circle => Vec::new(),
        MarkerShape::Square => vec![(-r, -r), (r, -r), (r, r), (-r, r)],
        MarkerShape::Diamond => {
            let d = r * 1.3;
            vec![(0.0, -d), (d, 0.0), (0.0, d), (-d, 0.0)]
        }
        MarkerShape::Cross => plus(r * 1.2, r * 0.4, 0.0),
        MarkerShape::X => plus(r * 1.2, r * 0.4, std::f64::consts::FRAC_PI_4),
        MarkerShape::TriangleUp => triangle(r, -std::f64::consts::FRAC_PI_2),
        MarkerShape::TriangleDown => triangle(r, std::f64::consts::FRAC_PI_2),
        MarkerShape::TriangleLeft => triangle(r, std::f64::consts::PI),
        MarkerShape::TriangleRight => triangle(r, 0.0),
        MarkerShape::Star => {
            let outer = r * 1.3;
            let inner = outer * 0.4;
            (0..10)
                .map(|i| {
                    let a = -std::f64::consts::FRAC_PI_2 + i as f64 * std::f64::consts::PI / 5.0;
                    let rad = if i % 2 == 0 { outer } else { inner };
                    (rad * a.cos(), rad * a.sin())
                })
                .collect()
        }
    }
}

fn triangle(r: f64, tip_angle: f64) -> Vec<(f64, f64)> {
    let rt = r * 1.15;
    (0..3)
        .map(|i| {
            let a = tip_angle + i as f64 * 2.0 * std::f64::consts::PI / 3.0;
            (rt * a.cos(), rt * a.sin())
        })
        .collect()
}

fn plus(arm: f64, half: f64, rotation: f64) -> Vec<(f64, f64)> {
    let base = [
        (-half, -arm),
        (half, -arm),
        (half, -half),
        (arm, -half),
        (arm, half),
        (half, half),
        (half, arm),
        (-half, arm),
        (-half, half),
        (-arm, half),
        (-arm, -half),
        (-half, -half),
    ];
    let (s, c) = rotation.sin_cos();
    base.iter()
        .map(|(x, y)| (x * c - y * s, x * s + y * c))
        .collect()
}

/// Style of one drawn marker in pixel units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerPaint {
    pub symbol: Symbol,
    pub size: f64,
    pub fill: RGBAColor,
    pub border: Option<(RGBAColor, u32)>,
}

/// Draw one marker centred on the pixel `c`.
pub fn draw_marker<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    c: (i32, i32),
    paint: &MarkerPaint,
) -> Result<(), ExportError> {
    let radius = (paint.size / 2.0).round().max(1.0) as i32;
    let fill_style = ShapeStyle {
        color: paint.fill,
        filled: true,
        stroke_width: 0,
    };
    let stroke_style = match (paint.symbol.open, paint.border) {
        (true, Some((_, w))) => Some(paint.fill.stroke_width(w.max(1))),
        (true, None) => Some(paint.fill.stroke_width(1)),
        (false, Some((color, w))) if w > 0 => Some(color.stroke_width(w)),
        _ => None,
    };

    if paint.symbol.shape == MarkerShape::Circle {
        if !paint.symbol.open {
            area.draw(&(EmptyElement::at(c) + Circle::new((0, 0), radius, fill_style)))
                .map_err(ExportError::render)?;
        }
        if let Some(style) = stroke_style {
            area.draw(&(EmptyElement::at(c) + Circle::new((0, 0), radius, style)))
                .map_err(ExportError::render)?;
        }
        return Ok(());
    }

    let points: Vec<(i32, i32)> = outline(paint.symbol.shape, paint.size)
        .into_iter()
        .map(|(x, y)| (x.round() as i32, y.round() as i32))
        .collect();
    if !paint.symbol.open {
        area.draw(&(EmptyElement::at(c) + Polygon::new(points.clone(), fill_style)))
            .map_err(ExportError::render)?;
    }
    if let Some(style) = stroke_style {
        let mut closed = points;
        if let Some(first) = closed.first().copied() {
            closed.push(first);
        }
        area.draw(&(EmptyElement::at(c) + PathElement::new(closed, style)))
            .map_err(ExportError::render)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn names_and_codes() {
        assert_eq!(Symbol::from_value(&json!("circle")), Symbol::default());
        assert_eq!(
            Symbol::from_value(&json!("diamond-open")),
            Symbol {
                shape: MarkerShape::Diamond,
                open: true
            }
        );
        assert_eq!(
            Symbol::from_value(&json!(105)).shape,
            MarkerShape::TriangleUp
        );
        assert!(Symbol::from_value(&json!(105)).open);
        assert_eq!(Symbol::from_value(&json!(17)).shape, MarkerShape::Star);
        assert_eq!(Symbol::from_value(&json!("hexagram")), Symbol::default());
    }

    #[test]
    fn outlines_fit_the_marker() {
        assert!(outline(MarkerShape::Circle, 10.0).is_empty());
        assert_eq!(outline(MarkerShape::Square, 10.0).len(), 4);
        assert_eq!(outline(MarkerShape::Star, 10.0).len(), 10);
        for shape in [MarkerShape::Cross, MarkerShape::X, MarkerShape::TriangleLeft] {
            let pts = outline(shape, 10.0);
            assert!(pts.iter().all(|(x, y)| x.abs() <= 6.5 && y.abs() <= 6.5));
        }
    }
}
