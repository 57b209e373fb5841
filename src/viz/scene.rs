//! Everything needed to draw one figure, resolved up front.
//!
//! [`Scene::build`] reads the native figure's effective layout and traces (template defaults
//! included), applies plotly's defaults for whatever is unset, converts data to axis coordinates
//! and lays out the margins, legend, colour bar and title in pixels. Drawing code only reads the
//! result. Invalid colours and colorscale names are reported here, before anything is drawn.

use plotters::style::RGBAColor;
use serde_json::Value;

use crate::error::ExportError;
use crate::graph::{NativeFigure, TraceKind};
use crate::options::{Options, lookup};

use super::color::{Colorscale, color_value, parse_color};
use super::contour::{Levels, node_positions, z_range};
use super::dates::{format_date, parse_date};
use super::format::{default_number, format_number};
use super::lines::{Rect, dash_pattern};
use super::markers::{MarkerPaint, Symbol};
use super::text::{estimate_text_width_px, markup_lines, truncate_to_width, widest_line_px};

/// Trace colour cycle used when neither the figure nor its template sets `colorway`.
pub const PLOTLY_COLORWAY: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

const WHITE: RGBAColor = RGBAColor(255, 255, 255, 1.0);
const BLACK: RGBAColor = RGBAColor(0, 0, 0, 1.0);
const DARK_GREY: RGBAColor = RGBAColor(0x44, 0x44, 0x44, 1.0);
const GRID_GREY: RGBAColor = RGBAColor(0xee, 0xee, 0xee, 1.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSpec {
    pub size: f64,
    pub color: RGBAColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

/// Positioned block of text; `(x, y)` is the anchor point in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub lines: Vec<String>,
    pub font: TextSpec,
    pub x: f64,
    pub y: f64,
    pub h: HAlign,
    pub v: VAlign,
}

impl Label {
    pub fn line_height(&self) -> f64 {
        self.font.size * 1.3
    }

    /// Top of the first line, given the vertical anchor.
    pub fn top(&self) -> f64 {
        let block = self.line_height() * self.lines.len() as f64;
        match self.v {
            VAlign::Top => self.y,
            VAlign::Middle => self.y - block / 2.0,
            VAlign::Bottom => self.y - block,
        }
    }
}

/// Colour and width (px) of a straight line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: RGBAColor,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisKind {
    Linear,
    Log,
    Category,
    Date,
}

/// One resolved cartesian axis. `range` is in plot coordinates: log10 units on log axes, category
/// positions on category axes, epoch ms on date axes, negated when the axis is reversed so that it
/// is always ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub kind: AxisKind,
    pub categories: Vec<String>,
    pub reversed: bool,
    pub range: (f64, f64),
    pub title: Option<String>,
    pub title_font: TextSpec,
    pub tick_font: TextSpec,
    pub tickformat: Option<String>,
    pub tickprefix: String,
    pub ticksuffix: String,
    pub nticks: Option<usize>,
    pub tick_count: usize,
    pub tick_len: f64,
    pub show_ticklabels: bool,
    pub visible: bool,
    pub grid: Option<Stroke>,
    pub line: Option<Stroke>,
    pub zeroline: Option<Stroke>,
}

impl Axis {
    fn raw_coord(&self, value: &Value) -> Option<f64> {
        let c = match self.kind {
            AxisKind::Linear => numeric(value),
            AxisKind::Log => numeric(value).filter(|v| *v > 0.0).map(f64::log10),
            AxisKind::Date => match value {
                Value::String(s) => parse_date(s),
                other => other.as_f64(),
            },
            AxisKind::Category => {
                let key = category_key(value)?;
                self.categories
                    .iter()
                    .position(|c| *c == key)
                    .map(|i| i as f64)
            }
        }?;
        c.is_finite().then_some(c)
    }

    /// Plot coordinate of a data value, `None` for gaps and values the axis cannot show.
    pub fn to_coord(&self, value: &Value) -> Option<f64> {
        let c = self.raw_coord(value)?;
        Some(if self.reversed { -c } else { c })
    }

    /// Tick label for plot coordinate `c`.
    pub fn label(&self, c: f64) -> String {
        if !self.show_ticklabels {
            return String::new();
        }
        let v = if self.reversed { -c } else { c };
        let text = match self.kind {
            AxisKind::Linear => self.number(v),
            AxisKind::Log => {
                let value = 10f64.powf(v);
                match &self.tickformat {
                    Some(spec) => format_number(value, spec),
                    None => format_number(value, ".3~g"),
                }
            }
            AxisKind::Category => {
                let idx = v.round();
                if (v - idx).abs() > 1e-6 || idx < 0.0 {
                    return String::new();
                }
                match self.categories.get(idx as usize) {
                    Some(c) => c.clone(),
                    None => return String::new(),
                }
            }
            AxisKind::Date => format_date(
                v,
                self.range.1 - self.range.0,
                self.tickformat.as_deref(),
            ),
        };
        format!("{}{}{}", self.tickprefix, text, self.ticksuffix)
    }

    fn number(&self, v: f64) -> String {
        match &self.tickformat {
            Some(spec) => format_number(v, spec),
            None => default_number(v),
        }
    }

    /// Plot coordinate of the zero line, when one is drawn and visible.
    pub fn zero(&self) -> Option<f64> {
        let (lo, hi) = self.range;
        (self.zeroline.is_some() && lo <= 0.0 && hi >= 0.0).then_some(0.0)
    }
}

/// Resolved style of a polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: RGBAColor,
    pub width: f64,
    /// On/off lengths in px; empty for solid lines.
    pub dash: Vec<f64>,
    pub shape: String,
}

/// One scatter trace in plot coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub name: String,
    /// Connected runs of points; gaps in the data start a new run.
    pub runs: Vec<Vec<(f64, f64)>>,
    pub line: Option<LineStyle>,
    pub marker: Option<MarkerPaint>,
    pub in_legend: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coloring {
    Fill,
    Heatmap,
    Lines,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContourLabels {
    pub format: Option<String>,
    pub font: TextSpec,
}

/// One contour trace on a node grid in plot coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ContourSeries {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub z: Vec<Vec<f64>>,
    pub zmin: f64,
    pub zmax: f64,
    pub levels: Levels,
    pub coloring: Coloring,
    pub colorscale: Colorscale,
    pub line: Option<LineStyle>,
    pub labels: Option<ContourLabels>,
}

impl ContourSeries {
    fn normalized(&self, z: f64) -> f64 {
        let span = self.zmax - self.zmin;
        if span > 0.0 {
            (z - self.zmin) / span
        } else {
            0.5
        }
    }

    /// Surface colour at value `z`: banded between levels for `fill`, continuous otherwise.
    pub fn fill_color(&self, z: f64) -> RGBAColor {
        match self.coloring {
            Coloring::Fill => {
                let count = self.levels.count();
                self.colorscale
                    .at(self.levels.band(z) as f64 / count as f64)
            }
            _ => self.colorscale.at(self.normalized(z)),
        }
    }

    /// Colour of the iso-line at `level`.
    pub fn level_color(&self, level: f64) -> RGBAColor {
        match (self.coloring, &self.line) {
            (Coloring::Lines, _) => self.colorscale.at(self.normalized(level)),
            (_, Some(line)) => line.color,
            _ => BLACK,
        }
    }

    pub fn level_label(&self, level: f64) -> String {
        match self.labels.as_ref().and_then(|l| l.format.as_deref()) {
            Some(spec) => format_number(level, spec),
            None => default_number(level),
        }
    }
}

/// Colour bar of the contour trace at `series`, laid out right of the plot.
#[derive(Debug, Clone, PartialEq)]
pub struct Colorbar {
    pub series: usize,
    pub rect: Rect,
    /// Pixel y and text of each tick label.
    pub ticks: Vec<(f64, String)>,
    pub font: TextSpec,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    /// Left edge of the glyph and vertical centre of the row, in pixels.
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub line: Option<LineStyle>,
    pub marker: Option<MarkerPaint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub rect: Rect,
    pub bg: RGBAColor,
    pub border: Option<Stroke>,
    pub font: TextSpec,
    pub title: Option<Label>,
    pub entries: Vec<LegendEntry>,
}

/// Width of the glyph column in a legend row, before scaling.
pub const LEGEND_GLYPH_W: f64 = 40.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub scale: f64,
    pub paper_bg: RGBAColor,
    pub plot_bg: RGBAColor,
    pub font: TextSpec,
    /// Plotting area in pixels (`y0` is the top edge).
    pub plot: Rect,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub scatters: Vec<ScatterSeries>,
    pub contours: Vec<ContourSeries>,
    pub colorbar: Option<Colorbar>,
    pub legend: Option<Legend>,
    pub title: Option<Label>,
}

/// Data values one axis has to show, and whether markers ask for padding.
#[derive(Default)]
struct AxisSamples {
    values: Vec<Value>,
    padded: bool,
}

impl Scene {
    /// Resolve `figure` for a canvas of `width x height` layout pixels drawn at `scale`.
    pub fn build(
        figure: &NativeFigure,
        width: u32,
        height: u32,
        scale: f64,
    ) -> Result<Scene, ExportError> {
        let layout = figure.effective_layout();
        let w = (width as f64 * scale).round().max(1.0);
        let h = (height as f64 * scale).round().max(1.0);

        let font = TextSpec {
            size: num(&layout, &["font", "size"]).unwrap_or(12.0) * scale,
            color: color_or(&layout, &["font", "color"], DARK_GREY)?,
        };
        let paper_bg = color_or(&layout, &["paper_bgcolor"], WHITE)?;
        let plot_bg = color_or(&layout, &["plot_bgcolor"], WHITE)?;
        let colorway = read_colorway(&layout)?;

        let traces: Vec<(TraceKind, Options)> = figure
            .data()
            .iter()
            .enumerate()
            .filter_map(|(i, t)| Some((t.kind, figure.effective_trace(i)?)))
            .collect();

        let mut x_samples = AxisSamples::default();
        let mut y_samples = AxisSamples::default();
        for (kind, trace) in &traces {
            if trace.get("visible") == Some(&Value::Bool(false)) {
                continue;
            }
            match kind {
                TraceKind::Scatter => {
                    let ys = array(trace, "y");
                    let xs = array(trace, "x")
                        .unwrap_or_else(|| index_values(ys.as_ref().map_or(0, Vec::len)));
                    let markers = scatter_mode(trace, xs.len()).1;
                    x_samples.values.extend(xs.iter().cloned());
                    x_samples.padded |= markers;
                    if let Some(ys) = ys {
                        y_samples.values.extend(ys.iter().cloned());
                        y_samples.padded |= markers;
                    }
                }
                TraceKind::Contour => {
                    let z = grid(trace);
                    let (rows, cols) = (z.len(), z.first().map_or(0, Vec::len));
                    x_samples
                        .values
                        .extend(array(trace, "x").unwrap_or_else(|| index_values(cols)));
                    y_samples
                        .values
                        .extend(array(trace, "y").unwrap_or_else(|| index_values(rows)));
                }
            }
        }

        let empty = Options::new();
        let xopts = layout.get("xaxis").and_then(Value::as_object).unwrap_or(&empty);
        let yopts = layout.get("yaxis").and_then(Value::as_object).unwrap_or(&empty);
        let mut xaxis = build_axis(xopts, &x_samples, (-1.0, 6.0), &font, scale)?;
        let mut yaxis = build_axis(yopts, &y_samples, (-1.0, 4.0), &font, scale)?;

        let mut scatters = Vec::new();
        let mut contours = Vec::new();
        for (index, (kind, trace)) in traces.iter().enumerate() {
            if trace.get("visible") == Some(&Value::Bool(false)) {
                continue;
            }
            let default_color = colorway[index % colorway.len()];
            match kind {
                TraceKind::Scatter => {
                    if let Some(series) =
                        build_scatter(trace, index, default_color, &xaxis, &yaxis, scale)?
                    {
                        scatters.push(series);
                    }
                }
                TraceKind::Contour => {
                    if let Some(series) =
                        build_contour(trace, &layout, &font, &xaxis, &yaxis, scale)?
                    {
                        contours.push((series, flag(trace, &["showscale"]).unwrap_or(true)));
                    }
                }
            }
        }

        // Margins, then whatever has to fit into the right margin.
        let margin = |key: &str, default: f64| num(&layout, &["margin", key]).unwrap_or(default) * scale;
        let (mut l, mut r, mut t, mut b) = (
            margin("l", 80.0),
            margin("r", 80.0),
            margin("t", 100.0),
            margin("b", 80.0),
        );
        let autoexpand = flag(&layout, &["margin", "autoexpand"]).unwrap_or(true);

        let colorbar_series = contours.iter().position(|(_, shown)| *shown);
        let colorbar_ticks = colorbar_series.map(|i| colorbar_tick_values(&contours[i].0));
        let thickness = 30.0 * scale;
        let colorbar_w = colorbar_ticks.as_ref().map(|ticks| {
            let label_w = ticks
                .iter()
                .map(|(_, t)| estimate_text_width_px(t, font.size))
                .fold(0.0, f64::max);
            thickness + 6.0 * scale + label_w + 10.0 * scale
        });

        let mut legend_spec = LegendSpec::read(&layout, &font, scale)?;
        let legend_items: Vec<&ScatterSeries> = scatters.iter().filter(|s| s.in_legend).collect();
        let show_legend = match flag(&layout, &["showlegend"]) {
            Some(shown) => shown && !legend_items.is_empty(),
            None => legend_items.len() >= 2,
        };
        let legend_size = show_legend.then(|| legend_spec.measure(&legend_items, w - l - r, w));

        if autoexpand {
            let gap = 0.02 * (w - l - r).max(0.0);
            let mut needed = 0.0;
            if let Some(cw) = colorbar_w {
                needed += gap + cw;
            }
            if let Some((lw, lh)) = legend_size {
                if legend_spec.horizontal && legend_spec.y < 0.0 {
                    b += lh;
                } else if legend_spec.x >= 1.0 {
                    needed += gap + lw + 10.0 * scale;
                }
            }
            r = r.max(needed);
        }
        fit_margins(&mut l, &mut r, w);
        fit_margins(&mut t, &mut b, h);
        let plot = Rect {
            x0: l,
            x1: w - r,
            y0: t,
            y1: h - b,
        };
        let plot_w = plot.x1 - plot.x0;
        let plot_h = plot.y1 - plot.y0;

        xaxis.tick_count = tick_count(&xaxis, plot_w, 80.0 * scale, scale);
        yaxis.tick_count = tick_count(&yaxis, plot_h, 40.0 * scale, scale);

        let colorbar = match (colorbar_series, colorbar_ticks) {
            (Some(series), Some(ticks)) => {
                let series_ref = &contours[series].0;
                let x0 = plot.x1 + 0.02 * plot_w;
                let rect = Rect {
                    x0,
                    x1: x0 + thickness,
                    y0: plot.y0,
                    y1: plot.y1,
                };
                let ticks = ticks
                    .into_iter()
                    .map(|(value, text)| {
                        let t = series_ref.normalized(value);
                        (rect.y1 - t * (rect.y1 - rect.y0), text)
                    })
                    .collect();
                Some(Colorbar {
                    series,
                    rect,
                    ticks,
                    font,
                })
            }
            _ => None,
        };

        let legend = match legend_size {
            Some(size) => {
                let shift = match (&colorbar, colorbar_w) {
                    (Some(cb), Some(cw)) if legend_spec.x >= 1.0 && !legend_spec.horizontal => {
                        cb.rect.x0 + cw - plot.x1
                    }
                    _ => 0.0,
                };
                Some(legend_spec.place(&legend_items, size, &plot, shift, paper_bg)?)
            }
            None => None,
        };

        let title = build_title(&layout, &font, &plot, (w, h), scale)?;
        let contours = contours.into_iter().map(|(series, _)| series).collect();

        Ok(Scene {
            width: w as u32,
            height: h as u32,
            scale,
            paper_bg,
            plot_bg,
            font,
            plot,
            xaxis,
            yaxis,
            scatters,
            contours,
            colorbar,
            legend,
            title,
        })
    }

    /// The visible part of the plot in plot coordinates.
    pub fn bounds(&self) -> Rect {
        Rect {
            x0: self.xaxis.range.0,
            x1: self.xaxis.range.1,
            y0: self.yaxis.range.0,
            y1: self.yaxis.range.1,
        }
    }
}

fn fit_margins(a: &mut f64, b: &mut f64, total: f64) {
    let limit = total * 0.9;
    if *a + *b > limit && *a + *b > 0.0 {
        let f = limit / (*a + *b);
        *a *= f;
        *b *= f;
    }
}

/// Densest tick spacing an explicit `nticks` may ask for, in px at scale 1.
const MIN_TICK_SPACING_PX: f64 = 8.0;

/// `nticks` is a maximum: it may thin out or densify the automatic ticks, but never beyond one
/// tick per [`MIN_TICK_SPACING_PX`].
fn tick_count(axis: &Axis, length_px: f64, per_tick_px: f64, scale: f64) -> usize {
    let fit = |spacing: f64| {
        let n = (length_px / spacing).floor();
        if n.is_finite() && n >= 2.0 { n as usize } else { 2 }
    };
    let auto = fit(per_tick_px);
    let densest = fit(MIN_TICK_SPACING_PX * scale).max(auto);
    let count = axis
        .nticks
        .filter(|n| *n > 0)
        .map_or(auto, |n| n.min(densest));
    if axis.kind == AxisKind::Category {
        count.min(axis.categories.len().max(1))
    } else {
        count
    }
}

fn build_axis(
    opts: &Options,
    samples: &AxisSamples,
    empty_range: (f64, f64),
    font: &TextSpec,
    scale: f64,
) -> Result<Axis, ExportError> {
    let kind = match text(opts, &["type"]) {
        Some("linear") => AxisKind::Linear,
        Some("log") => AxisKind::Log,
        Some("date") => AxisKind::Date,
        Some("category" | "multicategory") => AxisKind::Category,
        _ => detect_kind(&samples.values),
    };

    let categories = if kind == AxisKind::Category {
        collect_categories(opts, &samples.values)
    } else {
        Vec::new()
    };

    let line = (flag(opts, &["showline"]) == Some(true)).then_some(Stroke {
        color: color_or(opts, &["linecolor"], DARK_GREY)?,
        width: num(opts, &["linewidth"]).unwrap_or(1.0) * scale,
    });
    let grid = match flag(opts, &["showgrid"]).unwrap_or(true) {
        true => Some(Stroke {
            color: color_or(opts, &["gridcolor"], GRID_GREY)?,
            width: num(opts, &["gridwidth"]).unwrap_or(1.0) * scale,
        }),
        false => None,
    };
    let zeroline_width = num(opts, &["zerolinewidth"]).unwrap_or(1.0) * scale;
    let zeroline = (kind == AxisKind::Linear
        && flag(opts, &["zeroline"]).unwrap_or(true)
        && zeroline_width > 0.0)
        .then_some(Stroke {
            color: color_or(opts, &["zerolinecolor"], DARK_GREY)?,
            width: zeroline_width,
        });
    let tick_len = match text(opts, &["ticks"]) {
        Some("outside" | "inside") => num(opts, &["ticklen"]).unwrap_or(5.0) * scale,
        _ => 0.0,
    };

    let title = title_text(opts.get("title")).map(one_line);
    let title_font = read_font(opts, &["title", "font"], font, scale)?;
    let tick_font = read_font(opts, &["tickfont"], font, scale)?;

    let mut axis = Axis {
        kind,
        categories,
        reversed: false,
        range: empty_range,
        title,
        title_font,
        tick_font,
        tickformat: text(opts, &["tickformat"])
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        tickprefix: text(opts, &["tickprefix"]).unwrap_or("").to_string(),
        ticksuffix: text(opts, &["ticksuffix"]).unwrap_or("").to_string(),
        nticks: num(opts, &["nticks"]).map(|n| n.max(0.0) as usize),
        tick_count: 5,
        tick_len,
        show_ticklabels: flag(opts, &["showticklabels"]).unwrap_or(true),
        visible: flag(opts, &["visible"]).unwrap_or(true),
        grid,
        line,
        zeroline,
    };

    let explicit = explicit_range(opts, &axis);
    let (lo, hi, reversed) = match explicit {
        Some((a, b)) => (a.min(b), a.max(b), a > b),
        None => {
            let reversed = text(opts, &["autorange"]) == Some("reversed");
            let (lo, hi) = auto_range(opts, &axis, samples, empty_range);
            (lo, hi, reversed)
        }
    };
    axis.reversed = reversed;
    axis.range = if reversed { (-hi, -lo) } else { (lo, hi) };
    Ok(axis)
}

fn explicit_range(opts: &Options, axis: &Axis) -> Option<(f64, f64)> {
    let items = opts.get("range")?.as_array().filter(|r| r.len() == 2)?;
    let end = |v: &Value| match (axis.kind, v) {
        (AxisKind::Date, Value::String(s)) => parse_date(s),
        (_, other) => numeric(other),
    };
    let (a, b) = (end(&items[0])?, end(&items[1])?);
    (a != b).then_some((a, b))
}

fn auto_range(
    opts: &Options,
    axis: &Axis,
    samples: &AxisSamples,
    empty_range: (f64, f64),
) -> (f64, f64) {
    let coords: Vec<f64> = samples
        .values
        .iter()
        .filter_map(|v| axis.raw_coord(v))
        .collect();
    let Some(first) = coords.first().copied() else {
        return empty_range;
    };
    let (mut lo, mut hi) = coords
        .iter()
        .fold((first, first), |(lo, hi), c| (lo.min(*c), hi.max(*c)));

    let mode = text(opts, &["rangemode"]).unwrap_or("normal");
    let anchored = axis.kind == AxisKind::Linear && matches!(mode, "tozero" | "nonnegative");
    if anchored {
        if lo > 0.0 {
            lo = 0.0;
        }
        if mode == "tozero" && hi < 0.0 {
            hi = 0.0;
        }
    }
    if hi - lo <= 0.0 {
        return (lo - 1.0, hi + 1.0);
    }
    if samples.padded {
        let pad = (hi - lo) * 0.04;
        if !(anchored && lo == 0.0) {
            lo -= pad;
        }
        if !(anchored && hi == 0.0) {
            hi += pad;
        }
    }
    if anchored && mode == "nonnegative" {
        lo = lo.max(0.0);
    }
    (lo, hi)
}

fn detect_kind(values: &[Value]) -> AxisKind {
    let words: Vec<&str> = values
        .iter()
        .filter_map(Value::as_str)
        .filter(|s| s.trim().parse::<f64>().is_err())
        .collect();
    if words.is_empty() {
        AxisKind::Linear
    } else if words.iter().all(|s| parse_date(s).is_some()) {
        AxisKind::Date
    } else {
        AxisKind::Category
    }
}

fn collect_categories(opts: &Options, values: &[Value]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    let order = text(opts, &["categoryorder"]).unwrap_or("trace");
    if matches!(order, "array" | "trace") {
        if let Some(array) = opts.get("categoryarray").and_then(Value::as_array) {
            categories.extend(array.iter().filter_map(category_key));
        }
    }
    for key in values.iter().filter_map(category_key) {
        if !categories.contains(&key) {
            categories.push(key);
        }
    }
    match order {
        "category ascending" => categories.sort(),
        "category descending" => categories.sort_by(|a, b| b.cmp(a)),
        _ => {}
    }
    categories
}

fn build_scatter(
    trace: &Options,
    index: usize,
    default_color: RGBAColor,
    xaxis: &Axis,
    yaxis: &Axis,
    scale: f64,
) -> Result<Option<ScatterSeries>, ExportError> {
    let Some(ys) = array(trace, "y") else {
        return Ok(None);
    };
    let xs = array(trace, "x").unwrap_or_else(|| index_values(ys.len()));

    let mut runs: Vec<Vec<(f64, f64)>> = Vec::new();
    let mut current = Vec::new();
    for (x, y) in xs.iter().zip(ys.iter()) {
        match (xaxis.to_coord(x), yaxis.to_coord(y)) {
            (Some(cx), Some(cy)) => current.push((cx, cy)),
            _ => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }

    let (lines, markers) = scatter_mode(trace, xs.len().min(ys.len()));
    let opacity = num(trace, &["opacity"]).unwrap_or(1.0).clamp(0.0, 1.0);

    let line_color = color_or(trace, &["line", "color"], default_color)?;
    let line = lines
        .then(|| read_line(trace, &["line"], line_color, 2.0, scale))
        .transpose()?
        .map(|mut l| {
            l.color.3 *= opacity;
            l
        });

    let marker = match markers {
        true => {
            let fill = color_or(trace, &["marker", "color"], line_color)?;
            let alpha = num(trace, &["marker", "opacity"]).unwrap_or(1.0).clamp(0.0, 1.0) * opacity;
            let border_w = num(trace, &["marker", "line", "width"]).unwrap_or(0.0) * scale;
            let border = match border_w > 0.0 {
                true => Some((
                    color_or(trace, &["marker", "line", "color"], DARK_GREY)?,
                    border_w.round().max(1.0) as u32,
                )),
                false => None,
            };
            Some(MarkerPaint {
                symbol: lookup(trace, &["marker", "symbol"])
                    .map(Symbol::from_value)
                    .unwrap_or_default(),
                size: num(trace, &["marker", "size"]).unwrap_or(6.0) * scale,
                fill: RGBAColor(fill.0, fill.1, fill.2, fill.3 * alpha),
                border,
            })
        }
        false => None,
    };

    Ok(Some(ScatterSeries {
        name: text(trace, &["name"])
            .map(str::to_string)
            .unwrap_or_else(|| format!("trace {}", index)),
        runs,
        line,
        marker,
        in_legend: flag(trace, &["showlegend"]).unwrap_or(true),
    }))
}

/// `(lines, markers)` of a scatter trace; unset mode follows plotly's point-count rule.
fn scatter_mode(trace: &Options, points: usize) -> (bool, bool) {
    let mode = match text(trace, &["mode"]) {
        Some(mode) => mode.to_string(),
        None if points < 20 => "lines+markers".to_string(),
        None => "lines".to_string(),
    };
    let parts: Vec<&str> = mode.split('+').map(str::trim).collect();
    (parts.contains(&"lines"), parts.contains(&"markers"))
}

fn build_contour(
    trace: &Options,
    layout: &Options,
    font: &TextSpec,
    xaxis: &Axis,
    yaxis: &Axis,
    scale: f64,
) -> Result<Option<ContourSeries>, ExportError> {
    let mut z = grid(trace);
    if flag(trace, &["transpose"]) == Some(true) {
        z = transpose(&z);
    }
    let (rows, cols) = (z.len(), z.first().map_or(0, Vec::len));
    if rows == 0 || cols == 0 {
        return Ok(None);
    }

    let positions = |values: Option<Vec<Value>>, count: usize, axis: &Axis| -> Vec<f64> {
        let values = values.unwrap_or_else(|| index_values(count));
        let coords: Option<Vec<f64>> = values.iter().map(|v| axis.to_coord(v)).collect();
        match coords {
            Some(coords) => node_positions(&coords, count),
            None => {
                let fallback: Option<Vec<f64>> =
                    index_values(count).iter().map(|v| axis.to_coord(v)).collect();
                fallback.unwrap_or_else(|| node_positions(&[], count))
            }
        }
    };
    let xs = positions(array(trace, "x"), cols, xaxis);
    let ys = positions(array(trace, "y"), rows, yaxis);

    let (data_min, data_max) = z_range(&z).unwrap_or((0.0, 1.0));
    let zmin = num(trace, &["zmin"]).unwrap_or(data_min);
    let zmax = num(trace, &["zmax"]).unwrap_or(data_max);

    let levels = match (
        num(trace, &["contours", "start"]),
        num(trace, &["contours", "end"]),
        num(trace, &["contours", "size"]),
    ) {
        (Some(start), Some(end), Some(size)) if size > 0.0 && end >= start => {
            Levels { start, end, size }
        }
        _ => {
            let count = num(trace, &["ncontours"]).unwrap_or(15.0).max(1.0) as usize;
            Levels::auto(zmin, zmax, count)
        }
    };

    let coloring = match text(trace, &["contours", "coloring"]) {
        Some("heatmap") => Coloring::Heatmap,
        Some("lines") => Coloring::Lines,
        Some("none") => Coloring::None,
        _ => Coloring::Fill,
    };

    let scale_value = trace
        .get("colorscale")
        .or_else(|| lookup(layout, &["colorscale", "sequential"]))
        .cloned()
        .unwrap_or_else(|| Value::from("RdBu"));
    let mut colorscale = Colorscale::from_value(&scale_value)?;
    if flag(trace, &["reversescale"]) == Some(true) {
        colorscale = colorscale.reversed()?;
    }

    let show_lines = flag(trace, &["contours", "showlines"]).unwrap_or(true);
    let default_width = if coloring == Coloring::Lines { 1.0 } else { 0.5 };
    let line = show_lines
        .then(|| {
            let color = color_or(trace, &["line", "color"], BLACK)?;
            read_line(trace, &["line"], color, default_width, scale)
        })
        .transpose()?;

    let labels = match flag(trace, &["contours", "showlabels"]).unwrap_or(false) {
        true => Some(ContourLabels {
            format: text(trace, &["contours", "labelformat"])
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            font: read_font(trace, &["contours", "labelfont"], font, scale)?,
        }),
        false => None,
    };

    Ok(Some(ContourSeries {
        xs,
        ys,
        z,
        zmin,
        zmax,
        levels,
        coloring,
        colorscale,
        line,
        labels,
    }))
}

fn colorbar_tick_values(series: &ContourSeries) -> Vec<(f64, String)> {
    let ticks = Levels::auto(series.zmin, series.zmax, 6);
    let mut values = ticks.values();
    if series.zmax <= series.zmin {
        values = vec![series.zmin];
    }
    values
        .into_iter()
        .filter(|v| *v >= series.zmin && *v <= series.zmax)
        .map(|v| (v, default_number(v)))
        .collect()
}

fn transpose(z: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let cols = z.iter().map(Vec::len).max().unwrap_or(0);
    (0..cols)
        .map(|c| {
            z.iter()
                .map(|row| row.get(c).copied().unwrap_or(f64::NAN))
                .collect()
        })
        .collect()
}

/// Legend settings read from the layout, before anything is measured.
struct LegendSpec {
    x: f64,
    y: f64,
    xanchor: HAlign,
    yanchor: VAlign,
    horizontal: bool,
    font: TextSpec,
    title: Option<String>,
    title_font: TextSpec,
    bg: Option<RGBAColor>,
    border: Option<Stroke>,
    scale: f64,
    max_text_px: f64,
}

impl LegendSpec {
    fn read(layout: &Options, font: &TextSpec, scale: f64) -> Result<LegendSpec, ExportError> {
        let horizontal = text(layout, &["legend", "orientation"]) == Some("h");
        let x = num(layout, &["legend", "x"]).unwrap_or(if horizontal { 0.0 } else { 1.02 });
        let y = num(layout, &["legend", "y"]).unwrap_or(if horizontal { -0.1 } else { 1.0 });
        let xanchor = match text(layout, &["legend", "xanchor"]) {
            Some("center") => HAlign::Center,
            Some("right") => HAlign::Right,
            Some("auto") => thirds_h(x),
            _ => HAlign::Left,
        };
        let yanchor = match text(layout, &["legend", "yanchor"]) {
            Some("top") => VAlign::Top,
            Some("middle") => VAlign::Middle,
            Some("bottom") => VAlign::Bottom,
            _ if horizontal && y < 0.0 => VAlign::Top,
            _ => thirds_v(y),
        };
        let font = read_font(layout, &["legend", "font"], font, scale)?;
        let title = title_text(lookup(layout, &["legend", "title"])).map(one_line);
        let title_font = read_font(layout, &["legend", "title", "font"], &font, scale)?;
        let bg = match lookup(layout, &["legend", "bgcolor"]) {
            Some(v) if !v.is_null() => Some(color_value(v)?),
            _ => None,
        };
        let border_w = num(layout, &["legend", "borderwidth"]).unwrap_or(0.0) * scale;
        let border = match border_w > 0.0 {
            true => Some(Stroke {
                color: color_or(layout, &["legend", "bordercolor"], DARK_GREY)?,
                width: border_w,
            }),
            false => None,
        };
        Ok(LegendSpec {
            x,
            y,
            xanchor,
            yanchor,
            horizontal,
            font,
            title,
            title_font,
            bg,
            border,
            scale,
            max_text_px: 0.0,
        })
    }

    fn row_h(&self) -> f64 {
        (self.font.size * 1.3).max(16.0 * self.scale)
    }

    fn pad(&self) -> f64 {
        8.0 * self.scale
    }

    fn title_h(&self) -> f64 {
        match &self.title {
            Some(_) => self.title_font.size * 1.3 + 4.0 * self.scale,
            None => 0.0,
        }
    }

    fn entry_w(&self, text: &str) -> f64 {
        LEGEND_GLYPH_W * self.scale + estimate_text_width_px(text, self.font.size)
    }

    /// Total box size in pixels; vertical legends cap label width at 40% of the canvas.
    fn measure(&mut self, items: &[&ScatterSeries], plot_w: f64, canvas_w: f64) -> (f64, f64) {
        self.max_text_px = canvas_w * 0.4;
        let names: Vec<String> = items.iter().map(|s| self.entry_text(&s.name)).collect();
        let title_w = self
            .title
            .as_ref()
            .map_or(0.0, |t| estimate_text_width_px(t, self.title_font.size));
        if self.horizontal {
            let rows = self.rows(&names, plot_w.max(1.0));
            let row_w = rows
                .iter()
                .map(|r| r.iter().map(|i| self.entry_w(&names[*i]) + self.pad()).sum::<f64>())
                .fold(0.0, f64::max);
            let w = row_w.max(title_w) + self.pad() * 2.0;
            let h = self.title_h() + rows.len() as f64 * self.row_h() + self.pad() * 2.0;
            (w, h)
        } else {
            let text_w = widest_line_px(&names, self.font.size);
            let w = (LEGEND_GLYPH_W * self.scale + text_w).max(title_w) + self.pad() * 2.0;
            let h = self.title_h() + names.len() as f64 * self.row_h() + self.pad() * 2.0;
            (w, h)
        }
    }

    fn entry_text(&self, name: &str) -> String {
        let plain = markup_lines(name).join(" ");
        if self.max_text_px > 0.0 {
            truncate_to_width(&plain, self.font.size, self.max_text_px)
        } else {
            plain
        }
    }

    /// Greedy packing of horizontal entries into rows no wider than `max_w`.
    fn rows(&self, names: &[String], max_w: f64) -> Vec<Vec<usize>> {
        let mut rows: Vec<Vec<usize>> = Vec::new();
        let mut current = Vec::new();
        let mut used = 0.0;
        for (i, name) in names.iter().enumerate() {
            let w = self.entry_w(name) + self.pad();
            if used + w > max_w && !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                used = 0.0;
            }
            current.push(i);
            used += w;
        }
        if !current.is_empty() {
            rows.push(current);
        }
        rows
    }

    fn place(
        &self,
        items: &[&ScatterSeries],
        (w, h): (f64, f64),
        plot: &Rect,
        shift: f64,
        paper_bg: RGBAColor,
    ) -> Result<Legend, ExportError> {
        let plot_w = plot.x1 - plot.x0;
        let plot_h = plot.y1 - plot.y0;
        let ax = plot.x0 + self.x * plot_w + shift;
        let ay = plot.y1 - self.y * plot_h;
        let x0 = match self.xanchor {
            HAlign::Left => ax,
            HAlign::Center => ax - w / 2.0,
            HAlign::Right => ax - w,
        };
        let y0 = match self.yanchor {
            VAlign::Top => ay,
            VAlign::Middle => ay - h / 2.0,
            VAlign::Bottom => ay - h,
        };
        let rect = Rect {
            x0,
            x1: x0 + w,
            y0,
            y1: y0 + h,
        };

        let title = self.title.as_ref().map(|t| Label {
            lines: vec![t.clone()],
            font: self.title_font,
            x: x0 + self.pad(),
            y: y0 + self.pad(),
            h: HAlign::Left,
            v: VAlign::Top,
        });

        let names: Vec<String> = items.iter().map(|s| self.entry_text(&s.name)).collect();
        let top = y0 + self.pad() + self.title_h();
        let row_h = self.row_h();
        let mut entries = Vec::with_capacity(items.len());
        let mut push = |i: usize, x: f64, row: usize| {
            let series = items[i];
            entries.push(LegendEntry {
                x,
                y: top + row as f64 * row_h + row_h / 2.0,
                text: names[i].clone(),
                line: series.line.clone(),
                marker: series.marker,
            });
        };
        if self.horizontal {
            for (row, members) in self.rows(&names, plot_w.max(1.0)).iter().enumerate() {
                let mut x = x0 + self.pad();
                for &i in members {
                    push(i, x, row);
                    x += self.entry_w(&names[i]) + self.pad();
                }
            }
        } else {
            for i in 0..items.len() {
                push(i, x0 + self.pad(), i);
            }
        }

        Ok(Legend {
            rect,
            bg: self.bg.unwrap_or(paper_bg),
            border: self.border,
            font: self.font,
            title,
            entries,
        })
    }
}

fn thirds_h(x: f64) -> HAlign {
    if x < 1.0 / 3.0 {
        HAlign::Left
    } else if x > 2.0 / 3.0 {
        HAlign::Right
    } else {
        HAlign::Center
    }
}

fn thirds_v(y: f64) -> VAlign {
    if y > 2.0 / 3.0 {
        VAlign::Top
    } else if y < 1.0 / 3.0 {
        VAlign::Bottom
    } else {
        VAlign::Middle
    }
}

fn build_title(
    layout: &Options,
    font: &TextSpec,
    plot: &Rect,
    (canvas_w, canvas_h): (f64, f64),
    scale: f64,
) -> Result<Option<Label>, ExportError> {
    let Some(title) = title_text(layout.get("title")) else {
        return Ok(None);
    };
    let base = TextSpec {
        size: font.size * 1.4,
        color: font.color,
    };
    let title_font = read_font(layout, &["title", "font"], &base, scale)?;
    let paper = |key: &str| text(layout, &["title", key]) == Some("paper");

    let x = num(layout, &["title", "x"]).unwrap_or(0.5);
    let px = if paper("xref") {
        plot.x0 + x * (plot.x1 - plot.x0)
    } else {
        x * canvas_w
    };
    let h = match text(layout, &["title", "xanchor"]) {
        Some("left") => HAlign::Left,
        Some("center") => HAlign::Center,
        Some("right") => HAlign::Right,
        _ => thirds_h(x),
    };

    let (py, auto_v) = match num(layout, &["title", "y"]) {
        Some(y) if paper("yref") => (plot.y0 + (1.0 - y) * (plot.y1 - plot.y0), thirds_v(y)),
        Some(y) => ((1.0 - y) * canvas_h, thirds_v(y)),
        None => (plot.y0 / 2.0, VAlign::Middle),
    };
    let v = match text(layout, &["title", "yanchor"]) {
        Some("top") => VAlign::Top,
        Some("middle") => VAlign::Middle,
        Some("bottom") => VAlign::Bottom,
        _ => auto_v,
    };

    Ok(Some(Label {
        lines: markup_lines(&title),
        font: title_font,
        x: px,
        y: py,
        h,
        v,
    }))
}

/// Raw title markup; `title` may be a plain string or an object with `text`.
fn title_text(value: Option<&Value>) -> Option<String> {
    let raw = match value? {
        Value::String(s) => s.clone(),
        Value::Object(map) => map.get("text")?.as_str()?.to_string(),
        _ => return None,
    };
    Some(raw).filter(|t| !t.is_empty())
}

fn one_line(text: String) -> String {
    markup_lines(&text).join(" ")
}

fn read_colorway(layout: &Options) -> Result<Vec<RGBAColor>, ExportError> {
    let colors = match layout.get("colorway").and_then(Value::as_array) {
        Some(list) if !list.is_empty() => list.iter().map(color_value).collect(),
        _ => PLOTLY_COLORWAY.iter().map(|c| parse_color(c)).collect(),
    };
    colors
}

fn read_line(
    opts: &Options,
    prefix: &[&str],
    color: RGBAColor,
    default_width: f64,
    scale: f64,
) -> Result<LineStyle, ExportError> {
    let path = |key: &'static str| {
        let mut p = prefix.to_vec();
        p.push(key);
        p
    };
    let width = num(opts, &path("width")).unwrap_or(default_width);
    let dash = text(opts, &path("dash")).unwrap_or("solid");
    Ok(LineStyle {
        color,
        width: width * scale,
        dash: dash_pattern(dash, width)
            .into_iter()
            .map(|d| d * scale)
            .collect(),
        shape: text(opts, &path("shape")).unwrap_or("linear").to_string(),
    })
}

fn read_font(
    opts: &Options,
    prefix: &[&str],
    base: &TextSpec,
    scale: f64,
) -> Result<TextSpec, ExportError> {
    let mut size_path = prefix.to_vec();
    size_path.push("size");
    let mut color_path = prefix.to_vec();
    color_path.push("color");
    Ok(TextSpec {
        size: num(opts, &size_path).map_or(base.size, |s| s * scale),
        color: color_or(opts, &color_path, base.color)?,
    })
}

fn color_or(opts: &Options, path: &[&str], default: RGBAColor) -> Result<RGBAColor, ExportError> {
    match lookup(opts, path) {
        None | Some(Value::Null) => Ok(default),
        Some(value) => color_value(value),
    }
}

fn num(opts: &Options, path: &[&str]) -> Option<f64> {
    lookup(opts, path).and_then(Value::as_f64)
}

fn flag(opts: &Options, path: &[&str]) -> Option<bool> {
    lookup(opts, path).and_then(Value::as_bool)
}

fn text<'a>(opts: &'a Options, path: &[&str]) -> Option<&'a str> {
    lookup(opts, path).and_then(Value::as_str)
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn category_key(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn array(opts: &Options, key: &str) -> Option<Vec<Value>> {
    opts.get(key).and_then(Value::as_array).cloned()
}

fn index_values(count: usize) -> Vec<Value> {
    (0..count).map(|i| Value::from(i as u64)).collect()
}

fn grid(trace: &Options) -> Vec<Vec<f64>> {
    trace
        .get("z")
        .and_then(Value::as_array)
        .map(|rows| {
            rows.iter()
                .filter_map(Value::as_array)
                .map(|row| {
                    row.iter()
                        .map(|v| v.as_f64().unwrap_or(f64::NAN))
                        .collect()
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Trace;
    use crate::templates::Template;
    use serde_json::json;
    use std::sync::Arc;

    fn options(value: Value) -> Options {
        match value {
            Value::Object(map) => map,
            _ => Options::new(),
        }
    }

    fn figure() -> NativeFigure {
        NativeFigure::with_template(Arc::new(Template::default()))
    }

    fn scatter(fig: &mut NativeFigure, value: Value) {
        fig.add_trace(Trace::new(TraceKind::Scatter, options(value)));
    }

    #[test]
    fn empty_figure_uses_default_ranges() {
        let scene = Scene::build(&figure(), 800, 500, 1.0).unwrap();
        assert_eq!((scene.width, scene.height), (800, 500));
        assert_eq!(scene.xaxis.range, (-1.0, 6.0));
        assert_eq!(scene.yaxis.range, (-1.0, 4.0));
        assert!(scene.legend.is_none());
        assert!(scene.title.is_none());
        assert_eq!(scene.plot, Rect { x0: 80.0, x1: 720.0, y0: 100.0, y1: 420.0 });
    }

    #[test]
    fn scale_multiplies_the_canvas() {
        let scene = Scene::build(&figure(), 400, 300, 2.0).unwrap();
        assert_eq!((scene.width, scene.height), (800, 600));
        assert_eq!(scene.plot.x0, 160.0);
    }

    #[test]
    fn lines_only_range_is_the_data_extent() {
        let mut fig = figure();
        scatter(&mut fig, json!({"x": [1, 2, 3], "y": [10, 30, 20], "mode": "lines"}));
        let scene = Scene::build(&fig, 800, 500, 1.0).unwrap();
        assert_eq!(scene.xaxis.range, (1.0, 3.0));
        assert_eq!(scene.yaxis.range, (10.0, 30.0));
        assert_eq!(scene.scatters[0].runs, vec![vec![(1.0, 10.0), (2.0, 30.0), (3.0, 20.0)]]);
    }

    #[test]
    fn markers_pad_the_range() {
        let mut fig = figure();
        scatter(&mut fig, json!({"x": [0, 10], "y": [0, 100], "mode": "markers"}));
        let scene = Scene::build(&fig, 800, 500, 1.0).unwrap();
        let (lo, hi) = scene.xaxis.range;
        assert!((lo + 0.4).abs() < 1e-9 && (hi - 10.4).abs() < 1e-9);
        assert!(scene.scatters[0].line.is_none());
        assert!(scene.scatters[0].marker.is_some());
    }

    #[test]
    fn explicit_and_reversed_ranges() {
        let mut fig = figure();
        scatter(&mut fig, json!({"x": [0, 10], "y": [0, 1], "mode": "lines"}));
        fig.update_xaxes(&options(json!({"range": [5, 2]})));
        fig.update_yaxes(&options(json!({"autorange": "reversed"})));
        let scene = Scene::build(&fig, 800, 500, 1.0).unwrap();
        assert!(scene.xaxis.reversed);
        assert_eq!(scene.xaxis.range, (-5.0, -2.0));
        assert_eq!(scene.xaxis.to_coord(&json!(3)), Some(-3.0));
        assert_eq!(scene.xaxis.label(-3.0), "3");
        assert!(scene.yaxis.reversed);
        assert_eq!(scene.yaxis.range, (-1.0, 0.0));
    }

    #[test]
    fn gaps_split_runs() {
        let mut fig = figure();
        scatter(&mut fig, json!({"x": [0, 1, 2, 3], "y": [1, null, 2, 3], "mode": "lines"}));
        let scene = Scene::build(&fig, 800, 500, 1.0).unwrap();
        assert_eq!(scene.scatters[0].runs.len(), 2);
    }

    #[test]
    fn string_axes_become_categories_or_dates() {
        let mut fig = figure();
        scatter(&mut fig, json!({"x": ["b", "a", "b", "c"], "y": ["2024-01-01", "2024-06-01", "2024-03-01", "2024-02-01"]}));
        let scene = Scene::build(&fig, 800, 500, 1.0).unwrap();
        assert_eq!(scene.xaxis.kind, AxisKind::Category);
        assert_eq!(scene.xaxis.categories, vec!["b", "a", "c"]);
        assert_eq!(scene.xaxis.label(1.0), "a");
        assert_eq!(scene.xaxis.label(0.5), "");
        assert_eq!(scene.yaxis.kind, AxisKind::Date);
        assert_eq!(scene.yaxis.to_coord(&json!("2024-01-01")), parse_date("2024-01-01"));
    }

    #[test]
    fn category_order_is_honoured() {
        let mut fig = figure();
        scatter(&mut fig, json!({"x": ["b", "a"], "y": [1, 2]}));
        fig.update_xaxes(&options(json!({"categoryorder": "category ascending"})));
        let scene = Scene::build(&fig, 800, 500, 1.0).unwrap();
        assert_eq!(scene.xaxis.categories, vec!["a", "b"]);
    }

    #[test]
    fn log_axis_works_in_decades() {
        let mut fig = figure();
        scatter(&mut fig, json!({"x": [1, 2], "y": [1, 1000], "mode": "lines"}));
        fig.update_yaxes(&options(json!({"type": "log"})));
        let scene = Scene::build(&fig, 800, 500, 1.0).unwrap();
        assert_eq!(scene.yaxis.range, (0.0, 3.0));
        assert_eq!(scene.yaxis.label(2.0), "100");
        assert_eq!(scene.yaxis.to_coord(&json!(-5)), None);
        assert!(scene.yaxis.zeroline.is_none());
    }

    #[test]
    fn trace_colors_cycle_through_the_colorway() {
        let mut fig = figure();
        for _ in 0..3 {
            scatter(&mut fig, json!({"y": [1, 2], "mode": "lines"}));
        }
        fig.update_layout(&options(json!({"colorway": ["black", "green"]})));
        let scene = Scene::build(&fig, 800, 500, 1.0).unwrap();
        let colors: Vec<RGBAColor> = scene
            .scatters
            .iter()
            .filter_map(|s| s.line.as_ref().map(|l| l.color))
            .collect();
        let black = parse_color("black").unwrap();
        let green = parse_color("green").unwrap();
        assert_eq!(colors, vec![black, green, black]);
    }

    #[test]
    fn default_colorway_when_unset() {
        let mut fig = figure();
        scatter(&mut fig, json!({"y": [1, 2], "mode": "lines"}));
        let scene = Scene::build(&fig, 800, 500, 1.0).unwrap();
        let line = scene.scatters[0].line.as_ref().unwrap();
        assert_eq!(line.color, parse_color(PLOTLY_COLORWAY[0]).unwrap());
        assert_eq!(line.width, 2.0);
        assert_eq!(scene.scatters[0].name, "trace 0");
    }

    #[test]
    fn invalid_colors_are_reported() {
        let mut fig = figure();
        scatter(&mut fig, json!({"y": [1, 2], "line": {"color": "not-a-color"}}));
        let err = Scene::build(&fig, 800, 500, 1.0).unwrap_err();
        assert!(matches!(err, ExportError::InvalidColor(_)));

        let mut fig = figure();
        fig.update_layout(&options(json!({"paper_bgcolor": "#zzz"})));
        assert!(Scene::build(&fig, 800, 500, 1.0).is_err());
    }

    #[test]
    fn legend_shows_for_two_traces_or_when_asked() {
        let mut fig = figure();
        scatter(&mut fig, json!({"y": [1, 2], "name": "only"}));
        let scene = Scene::build(&fig, 800, 500, 1.0).unwrap();
        assert!(scene.legend.is_none());

        fig.update_layout(&options(json!({"showlegend": true})));
        let scene = Scene::build(&fig, 800, 500, 1.0).unwrap();
        let legend = scene.legend.unwrap();
        assert_eq!(legend.entries.len(), 1);
        assert_eq!(legend.entries[0].text, "only");
        assert!(legend.rect.x0 > scene.plot.x1);

        let mut fig = figure();
        scatter(&mut fig, json!({"y": [1, 2]}));
        scatter(&mut fig, json!({"y": [2, 1], "showlegend": false}));
        scatter(&mut fig, json!({"y": [3, 1]}));
        let scene = Scene::build(&fig, 800, 500, 1.0).unwrap();
        assert_eq!(scene.legend.unwrap().entries.len(), 2);
    }

    #[test]
    fn title_sits_in_the_top_margin() {
        let mut fig = figure();
        fig.update_layout(&options(json!({"title": {"text": "Hello<br>world"}, "font": {"size": 10}})));
        let scene = Scene::build(&fig, 800, 500, 1.0).unwrap();
        let title = scene.title.unwrap();
        assert_eq!(title.lines, vec!["Hello", "world"]);
        assert!((title.font.size - 14.0).abs() < 1e-9);
        assert_eq!((title.x, title.y), (400.0, 50.0));
        assert_eq!((title.h, title.v), (HAlign::Center, VAlign::Middle));
    }

    #[test]
    fn contour_levels_colorbar_and_margin() {
        let mut fig = figure();
        fig.add_trace(Trace::new(
            TraceKind::Contour,
            options(json!({"z": [[0, 5], [5, 10]], "contours_coloring": "lines"})),
        ));
        let scene = Scene::build(&fig, 800, 500, 1.0).unwrap();
        let contour = &scene.contours[0];
        assert_eq!(contour.coloring, Coloring::Lines);
        assert_eq!((contour.zmin, contour.zmax), (0.0, 10.0));
        assert_eq!(contour.levels.values().first().copied(), Some(1.0));
        assert_eq!(contour.xs, vec![0.0, 1.0]);
        assert_eq!(scene.xaxis.range, (0.0, 1.0));
        let bar = scene.colorbar.unwrap();
        assert!(bar.rect.x0 > scene.plot.x1);
        assert!(!bar.ticks.is_empty());
    }

    #[test]
    fn nticks_is_bounded_by_the_plot_size() {
        let mut fig = figure();
        scatter(&mut fig, json!({"x": [0, 1], "y": [0, 1]}));
        fig.update_xaxes(&options(json!({"nticks": 1_000_000_000u64})));
        fig.update_yaxes(&options(json!({"nticks": 3})));
        let scene = Scene::build(&fig, 800, 500, 1.0).unwrap();
        // 640 px wide plot, one tick per 8 px at most.
        assert_eq!(scene.xaxis.tick_count, 80);
        assert_eq!(scene.yaxis.tick_count, 3);
    }

    #[test]
    fn huge_ncontours_is_capped() {
        let mut fig = figure();
        fig.add_trace(Trace::new(
            TraceKind::Contour,
            options(json!({"z": [[0, 1], [1, 2]], "ncontours": 1_000_000})),
        ));
        let scene = Scene::build(&fig, 800, 500, 1.0).unwrap();
        let contour = &scene.contours[0];
        assert!(contour.levels.count() <= crate::viz::contour::MAX_LEVELS);
        assert_eq!(contour.fill_color(2.0), contour.fill_color(5.0));
    }

    #[test]
    fn unknown_colorscale_is_reported() {
        let mut fig = figure();
        fig.add_trace(Trace::new(
            TraceKind::Contour,
            options(json!({"z": [[0, 1], [1, 0]], "colorscale": "NoSuchScale"})),
        ));
        let err = Scene::build(&fig, 800, 500, 1.0).unwrap_err();
        assert!(matches!(err, ExportError::UnknownColorscale(_)));
    }

    #[test]
    fn hidden_traces_are_skipped() {
        let mut fig = figure();
        scatter(&mut fig, json!({"y": [1, 2], "visible": false}));
        let scene = Scene::build(&fig, 800, 500, 1.0).unwrap();
        assert!(scene.scatters.is_empty());
        assert_eq!(scene.xaxis.range, (-1.0, 6.0));
    }
}
