//! Static rendering of a [`NativeFigure`] with plotters.
//!
//! [`scene::Scene`] resolves the figure into pixels and plot coordinates; this module paints it on
//! a plotters backend: SVG through [`render_svg`], an RGB pixel buffer through [`render_rgb`]
//! (which the export layer encodes as PNG, JPEG, WebP or embeds in PDF and EPS).
//!
//! Drawing order follows plotly: paper, plot background, grid, zero lines, contours, scatter
//! traces, colour bar, legend, title.

pub mod color;
pub mod contour;
pub mod dates;
pub mod fonts;
pub mod format;
pub mod legend;
pub mod lines;
pub mod markers;
pub mod scene;
pub mod text;

use log::debug;
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use crate::config::ExportConfig;
use crate::error::ExportError;
use crate::graph::NativeFigure;

use contour::{iso_segments, label_anchor, sample_patches};
use legend::draw_legend;
use lines::{Rect, apply_shape, clip_polyline, dash_polyline};
use markers::draw_marker;
use scene::{Axis, Colorbar, Coloring, ContourSeries, HAlign, Label, LineStyle, Scene, VAlign};

type Chart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Render `figure` as an SVG document of `width x height` pixels.
pub fn render_svg(
    figure: &NativeFigure,
    width: u32,
    height: u32,
    config: &ExportConfig,
) -> Result<String, ExportError> {
    let scene = Scene::build(figure, width, height, 1.0)?;
    let has_text = fonts::ensure_fonts_registered(config);
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (scene.width, scene.height))
            .into_drawing_area();
        draw_scene(&root, &scene, has_text)?;
    }
    debug!("rendered svg {}x{}", scene.width, scene.height);
    Ok(svg)
}

/// Render `figure` into a packed RGB buffer. The canvas is `width x height` layout pixels
/// multiplied by `scale`; the actual pixel size is returned with the buffer.
pub fn render_rgb(
    figure: &NativeFigure,
    width: u32,
    height: u32,
    scale: f64,
    config: &ExportConfig,
) -> Result<(Vec<u8>, u32, u32), ExportError> {
    let scene = Scene::build(figure, width, height, scale)?;
    let has_text = fonts::ensure_fonts_registered(config);
    let (w, h) = (scene.width, scene.height);
    let mut buffer = vec![0u8; w as usize * h as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (w, h)).into_drawing_area();
        draw_scene(&root, &scene, has_text)?;
    }
    debug!("rendered bitmap {}x{} at scale {}", w, h, scale);
    Ok((buffer, w, h))
}

fn draw_scene<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    scene: &Scene,
    has_text: bool,
) -> Result<(), ExportError> {
    root.fill(&scene.paper_bg).map_err(ExportError::render)?;
    let plot = scene.plot;
    root.draw(&Rectangle::new(
        [px(plot.x0, plot.y0), px(plot.x1, plot.y1)],
        scene.plot_bg.filled(),
    ))
    .map_err(ExportError::render)?;

    let mut builder = ChartBuilder::on(root);
    let (w, h) = (scene.width as f64, scene.height as f64);
    builder
        .margin_top(plot.y0.round() as i32)
        .margin_right((w - plot.x1).round() as i32);
    if has_text {
        builder
            .x_label_area_size((h - plot.y1).round() as i32)
            .y_label_area_size(plot.x0.round() as i32);
    } else {
        builder
            .margin_bottom((h - plot.y1).round() as i32)
            .margin_left(plot.x0.round() as i32);
    }
    let (xs, ys) = (scene.xaxis.range, scene.yaxis.range);
    let mut chart = builder
        .build_cartesian_2d(xs.0..xs.1, ys.0..ys.1)
        .map_err(ExportError::render)?;

    draw_axes(&mut chart, scene)?;

    for series in &scene.contours {
        draw_contour(root, &mut chart, scene, series, has_text)?;
    }
    for series in &scene.scatters {
        if let Some(line) = &series.line {
            for run in &series.runs {
                draw_polyline(root, &chart, &scene.bounds(), &apply_shape(run, &line.shape), line)?;
            }
        }
        if let Some(marker) = &series.marker {
            let bounds = scene.bounds();
            for point in series.runs.iter().flatten() {
                if bounds.contains(*point) {
                    draw_marker(root, chart.backend_coord(point), marker)?;
                }
            }
        }
    }

    if let Some(bar) = &scene.colorbar {
        draw_colorbar(root, scene, bar, has_text)?;
    }
    if let Some(legend) = &scene.legend {
        draw_legend(root, legend, scene.scale, has_text)?;
    }
    if has_text {
        if let Some(title) = &scene.title {
            draw_label(root, title)?;
        }
    }
    root.present().map_err(ExportError::render)
}

/// Grid, axis lines, tick labels and axis titles, then the zero lines on top of the grid.
fn draw_axes<DB: DrawingBackend>(chart: &mut Chart<'_, DB>, scene: &Scene) -> Result<(), ExportError> {
    let (x, y) = (&scene.xaxis, &scene.yaxis);
    let x_fmt = |v: &f64| x.label(*v);
    let y_fmt = |v: &f64| y.label(*v);

    let mut mesh = chart.configure_mesh();
    mesh.x_labels(x.tick_count)
        .y_labels(y.tick_count)
        .x_label_formatter(&x_fmt)
        .y_label_formatter(&y_fmt)
        .max_light_lines(0)
        .x_label_style(text_style(x.tick_font.size, x.tick_font.color, HPos::Center, VPos::Top))
        .y_label_style(text_style(y.tick_font.size, y.tick_font.color, HPos::Right, VPos::Center))
        .axis_desc_style(text_style(
            x.title_font.size,
            x.title_font.color,
            HPos::Center,
            VPos::Center,
        ))
        .set_all_tick_mark_size(tick_mark(x).max(tick_mark(y)));

    // One axis style for both axes; the x axis decides whether a line is drawn.
    let axis_line = x.line.or(y.line);
    match axis_line {
        Some(line) => mesh.axis_style(line.color.stroke_width(stroke(line.width))),
        None => mesh.axis_style(TRANSPARENT),
    };
    match x.grid.or(y.grid) {
        Some(grid) => mesh.bold_line_style(grid.color.stroke_width(stroke(grid.width))),
        None => mesh.bold_line_style(TRANSPARENT),
    };
    if x.grid.is_none() {
        mesh.disable_x_mesh();
    }
    if y.grid.is_none() {
        mesh.disable_y_mesh();
    }
    if !x.visible {
        mesh.disable_x_axis();
    }
    if !y.visible {
        mesh.disable_y_axis();
    }
    if let Some(title) = x.title.as_deref().filter(|_| x.visible) {
        mesh.x_desc(title);
    }
    if let Some(title) = y.title.as_deref().filter(|_| y.visible) {
        mesh.y_desc(title);
    }
    mesh.draw().map_err(ExportError::render)?;

    let bounds = scene.bounds();
    if let (Some(zero), Some(style)) = (x.zero(), x.zeroline) {
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(zero, bounds.y0), (zero, bounds.y1)],
                style.color.stroke_width(stroke(style.width)),
            )))
            .map_err(ExportError::render)?;
    }
    if let (Some(zero), Some(style)) = (y.zero(), y.zeroline) {
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(bounds.x0, zero), (bounds.x1, zero)],
                style.color.stroke_width(stroke(style.width)),
            )))
            .map_err(ExportError::render)?;
    }
    Ok(())
}

/// Tick mark length in px; labels sit twice this far from the axis, so keep a small gap.
fn tick_mark(axis: &Axis) -> i32 {
    (axis.tick_len.round() as i32).max(3)
}

fn draw_contour<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &mut Chart<'_, DB>,
    scene: &Scene,
    series: &ContourSeries,
    has_text: bool,
) -> Result<(), ExportError> {
    let bounds = scene.bounds();
    if matches!(series.coloring, Coloring::Fill | Coloring::Heatmap) {
        let cols = series.xs.len().max(2) - 1;
        let rows = series.ys.len().max(2) - 1;
        let cell_px = ((scene.plot.x1 - scene.plot.x0) / cols as f64)
            .max((scene.plot.y1 - scene.plot.y0) / rows as f64);
        let k = ((cell_px / 4.0).ceil() as usize).clamp(1, 24);
        let patches = sample_patches(&series.xs, &series.ys, &series.z, k);
        chart
            .draw_series(patches.iter().filter_map(|p| {
                let x0 = p.x0.min(p.x1).max(bounds.x0);
                let x1 = p.x0.max(p.x1).min(bounds.x1);
                let y0 = p.y0.min(p.y1).max(bounds.y0);
                let y1 = p.y0.max(p.y1).min(bounds.y1);
                (x0 < x1 && y0 < y1).then(|| {
                    Rectangle::new([(x0, y0), (x1, y1)], series.fill_color(p.z).filled())
                })
            }))
            .map_err(ExportError::render)?;
    }

    let centre = ((bounds.x0 + bounds.x1) / 2.0, (bounds.y0 + bounds.y1) / 2.0);
    for level in series.levels.values() {
        let segments = iso_segments(&series.xs, &series.ys, &series.z, level);
        if segments.is_empty() {
            continue;
        }
        if let Some(line) = &series.line {
            let style = LineStyle {
                color: series.level_color(level),
                ..line.clone()
            };
            for (a, b) in &segments {
                draw_polyline(root, chart, &bounds, &[*a, *b], &style)?;
            }
        }
        if let (true, Some(labels)) = (has_text, &series.labels) {
            let Some(anchor) = label_anchor(&segments, centre).filter(|p| bounds.contains(*p))
            else {
                continue;
            };
            let (x, y) = chart.backend_coord(&anchor);
            draw_label(
                root,
                &Label {
                    lines: vec![series.level_label(level)],
                    font: labels.font,
                    x: x as f64,
                    y: y as f64,
                    h: HAlign::Center,
                    v: VAlign::Middle,
                },
            )?;
        }
    }
    Ok(())
}

fn draw_colorbar<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    scene: &Scene,
    bar: &Colorbar,
    has_text: bool,
) -> Result<(), ExportError> {
    let Some(series) = scene.contours.get(bar.series) else {
        return Ok(());
    };
    let r = bar.rect;
    let (top, bottom) = (r.y0.round() as i32, r.y1.round() as i32);
    let span = (bottom - top).max(1) as f64;
    for y in top..bottom {
        let t = (bottom - y) as f64 / span;
        let z = series.zmin + (series.zmax - series.zmin) * t;
        root.draw(&Rectangle::new(
            [(r.x0.round() as i32, y), (r.x1.round() as i32, y + 1)],
            series.fill_color(z).filled(),
        ))
        .map_err(ExportError::render)?;
    }
    if has_text {
        for (y, text) in &bar.ticks {
            draw_label(
                root,
                &Label {
                    lines: vec![text.clone()],
                    font: bar.font,
                    x: r.x1 + 6.0 * scene.scale,
                    y: *y,
                    h: HAlign::Left,
                    v: VAlign::Middle,
                },
            )?;
        }
    }
    Ok(())
}

/// Clip a polyline in plot coordinates, map it to pixels and stroke it (dashed when asked).
fn draw_polyline<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &Chart<'_, DB>,
    bounds: &Rect,
    points: &[(f64, f64)],
    line: &LineStyle,
) -> Result<(), ExportError> {
    let style = line.color.stroke_width(stroke(line.width));
    for visible in clip_polyline(points, bounds) {
        if visible.len() < 2 {
            continue;
        }
        let pixels: Vec<(f64, f64)> = visible
            .iter()
            .map(|p| {
                let (x, y) = chart.backend_coord(p);
                (x as f64, y as f64)
            })
            .collect();
        for piece in dash_polyline(&pixels, &line.dash) {
            let path: Vec<(i32, i32)> = piece.iter().map(|(x, y)| px(*x, *y)).collect();
            root.draw(&PathElement::new(path, style))
                .map_err(ExportError::render)?;
        }
    }
    Ok(())
}

/// Draw a multi-line label at its anchor.
pub(crate) fn draw_label<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    label: &Label,
) -> Result<(), ExportError> {
    let hpos = match label.h {
        HAlign::Left => HPos::Left,
        HAlign::Center => HPos::Center,
        HAlign::Right => HPos::Right,
    };
    let style = text_style(label.font.size, label.font.color, hpos, VPos::Center);
    let line_h = label.line_height();
    let top = label.top();
    for (i, line) in label.lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let y = top + line_h * (i as f64 + 0.5);
        root.draw_text(line, &style, px(label.x, y))
            .map_err(ExportError::render)?;
    }
    Ok(())
}

fn text_style(size: f64, color: RGBAColor, h: HPos, v: VPos) -> TextStyle<'static> {
    FontDesc::new(FontFamily::SansSerif, size.max(1.0), FontStyle::Normal)
        .color(&color)
        .pos(Pos::new(h, v))
}

fn stroke(width: f64) -> u32 {
    width.round().max(1.0) as u32
}

fn px(x: f64, y: f64) -> (i32, i32) {
    (x.round() as i32, y.round() as i32)
}
