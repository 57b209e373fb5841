//! Legend box drawing. Placement and sizes come from [`Scene`](super::scene::Scene); this only
//! paints the resolved [`Legend`].

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;

use super::draw_label;
use super::lines::dash_polyline;
use super::markers::{MarkerPaint, draw_marker};
use super::scene::{HAlign, LEGEND_GLYPH_W, Label, Legend, LegendEntry, VAlign};
use crate::error::ExportError;

/// Draw the legend box, its optional title and one row per entry.
pub fn draw_legend<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    legend: &Legend,
    scale: f64,
    has_text: bool,
) -> Result<(), ExportError> {
    let r = &legend.rect;
    let corners = (
        (r.x0.round() as i32, r.y0.round() as i32),
        (r.x1.round() as i32, r.y1.round() as i32),
    );
    root.draw(&Rectangle::new([corners.0, corners.1], legend.bg.filled()))
        .map_err(ExportError::render)?;
    if let Some(border) = legend.border {
        let width = border.width.round().max(1.0) as u32;
        root.draw(&Rectangle::new(
            [corners.0, corners.1],
            border.color.stroke_width(width),
        ))
        .map_err(ExportError::render)?;
    }

    if has_text {
        if let Some(title) = &legend.title {
            draw_label(root, title)?;
        }
    }

    for entry in &legend.entries {
        draw_glyph(root, entry, scale)?;
        if has_text {
            let label = Label {
                lines: vec![entry.text.clone()],
                font: legend.font,
                x: entry.x + LEGEND_GLYPH_W * scale,
                y: entry.y,
                h: HAlign::Left,
                v: VAlign::Middle,
            };
            draw_label(root, &label)?;
        }
    }
    Ok(())
}

/// Line sample across the glyph column with the marker centred on it.
fn draw_glyph<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    entry: &LegendEntry,
    scale: f64,
) -> Result<(), ExportError> {
    let x0 = entry.x + 5.0 * scale;
    let x1 = entry.x + (LEGEND_GLYPH_W - 5.0) * scale;
    if let Some(line) = &entry.line {
        let width = line.width.min(5.0 * scale).round().max(1.0) as u32;
        let style = line.color.stroke_width(width);
        for piece in dash_polyline(&[(x0, entry.y), (x1, entry.y)], &line.dash) {
            let points: Vec<(i32, i32)> = piece
                .iter()
                .map(|(x, y)| (x.round() as i32, y.round() as i32))
                .collect();
            root.draw(&PathElement::new(points, style))
                .map_err(ExportError::render)?;
        }
    }
    if let Some(marker) = &entry.marker {
        // Huge markers would spill into the neighbouring rows.
        let paint = MarkerPaint {
            size: marker.size.min(16.0 * scale),
            ..*marker
        };
        let centre = (((x0 + x1) / 2.0).round() as i32, entry.y.round() as i32);
        draw_marker(root, centre, &paint)?;
    }
    Ok(())
}
