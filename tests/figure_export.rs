use reaktplot::theme::T10;
use reaktplot::{ContourSpecs, ExportError, Figure, LineSpecs, MarkerSpecs};
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn testing_figure() -> Figure {
    let x: Vec<f64> = (0..10).map(|i| i as f64 / 9.0).collect();
    let u: Vec<f64> = x.iter().map(|v| v * v).collect();
    let v: Vec<f64> = x.iter().map(|v| v * v * v).collect();
    let w: Vec<f64> = x.iter().map(|v| v * v * v * v).collect();

    let mut fig = Figure::new();
    fig.title("TESTING TITLE").xaxis_title_text("x").yaxis_title_text("y");
    fig.draw_line(x.clone(), u, "u", &LineSpecs::new())
        .draw_line_with_markers(x.clone(), v, "v", &LineSpecs::new(), &MarkerSpecs::new())
        .draw_markers(x, w, "w", &MarkerSpecs::new());
    fig
}

fn contour_figure(specs: &ContourSpecs) -> Figure {
    let xy = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    let z = vec![
        vec![10.000, 10.625, 12.500, 15.625, 20.000],
        vec![5.625, 6.250, 8.125, 11.250, 15.625],
        vec![2.500, 3.125, 5.000, 8.125, 12.500],
        vec![0.625, 1.250, 3.125, 6.250, 10.625],
        vec![0.000, 0.625, 2.500, 5.625, 10.000],
    ];
    let mut fig = Figure::new();
    fig.title("CONTOUR PLOT").draw_contour(xy.clone(), xy, z, specs);
    fig
}

fn export_error(err: &anyhow::Error) -> &ExportError {
    err.downcast_ref::<ExportError>()
        .expect("error should carry an ExportError")
}

#[test]
fn saves_png_pdf_and_svg() {
    let dir = tempdir().unwrap();
    let mut fig = testing_figure();
    for ext in ["png", "pdf", "svg"] {
        let path = dir.path().join(format!("test_figure.{ext}"));
        fig.save(&path).unwrap();
        assert!(fs::metadata(&path).unwrap().len() > 0, "{ext} is empty");
    }
    assert_eq!(fig.layout()["title_text"], json!("TESTING TITLE"));

    let png = fs::read(dir.path().join("test_figure.png")).unwrap();
    assert!(png.starts_with(b"\x89PNG"));
    let pdf = fs::read(dir.path().join("test_figure.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF-1.4"));
    let svg = fs::read_to_string(dir.path().join("test_figure.svg")).unwrap();
    assert!(svg.contains("<svg"));
}

#[test]
fn saves_every_other_format() {
    let dir = tempdir().unwrap();
    let mut fig = testing_figure();
    let cases: [(&str, &[u8]); 5] = [
        ("jpg", b"\xFF\xD8"),
        ("jpeg", b"\xFF\xD8"),
        ("webp", b"RIFF"),
        ("eps", b"%!PS-Adobe"),
        ("html", b"<!DOCTYPE html>"),
    ];
    for (ext, magic) in cases {
        let path = dir.path().join(format!("figure.{ext}"));
        fig.save(&path).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(magic), "{ext} has the wrong header");
    }
}

#[test]
fn raster_size_follows_width_height_and_scale() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scaled.png");
    testing_figure().save_with(&path, 400, 300, 2.0).unwrap();
    assert_eq!(image::image_dimensions(&path).unwrap(), (800, 600));

    let path = dir.path().join("default.png");
    testing_figure().save(&path).unwrap();
    assert_eq!(image::image_dimensions(&path).unwrap(), (800, 500));
}

#[test]
fn unsupported_extension_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("figure.gif");
    let err = testing_figure().save(&path).unwrap_err();
    match export_error(&err) {
        ExportError::UnsupportedFormat { extension, .. } => assert_eq!(extension, "gif"),
        other => panic!("unexpected error {other:?}"),
    }
    assert!(err.to_string().contains("invalid format"));
    assert!(!path.exists());

    let err = testing_figure().save(dir.path().join("figure")).unwrap_err();
    assert!(matches!(export_error(&err), ExportError::MissingExtension(_)));
}

#[test]
fn invalid_values_fail_at_save_time() {
    let dir = tempdir().unwrap();
    let mut fig = testing_figure();
    // Accepted by the setter, rejected when rendered.
    fig.paper_background_color("not-a-color");
    let err = fig.save(dir.path().join("bad.png")).unwrap_err();
    assert!(matches!(export_error(&err), ExportError::InvalidColor(_)));

    let err = testing_figure()
        .save_with(dir.path().join("empty.png"), 0, 500, 1.0)
        .unwrap_err();
    assert!(matches!(export_error(&err), ExportError::InvalidSize { .. }));
}

#[test]
fn colorway_defaults_to_the_theme_and_can_be_overridden() {
    let mut fig = testing_figure();
    assert_eq!(fig.colorway_in_effect(), Some(json!(T10)));

    fig.colorway(["black", "green"]);
    assert_eq!(fig.colorway_in_effect(), Some(json!(["black", "green"])));

    let dir = tempdir().unwrap();
    fig.save(dir.path().join("colorway.png")).unwrap();
}

#[test]
fn contour_figures_export() {
    let dir = tempdir().unwrap();
    let mut fig = contour_figure(&ContourSpecs::new().show_labels(true));
    for ext in ["pdf", "png", "svg"] {
        fig.save(dir.path().join(format!("contour.{ext}"))).unwrap();
    }

    let mut heatmap = contour_figure(&ContourSpecs::new().coloring_mode_heatmap());
    heatmap.save(dir.path().join("heatmap.png")).unwrap();
}

#[test]
fn unknown_colorscale_fails_at_save_time() {
    let dir = tempdir().unwrap();
    let mut fig = contour_figure(&ContourSpecs::new().colorscale("NoSuchScale"));
    let err = fig.save(dir.path().join("contour.svg")).unwrap_err();
    assert!(matches!(
        export_error(&err),
        ExportError::UnknownColorscale(name) if name == "NoSuchScale"
    ));
}

#[test]
fn each_save_reflects_the_current_configuration() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("page.html");
    let mut fig = testing_figure();
    fig.save(&path).unwrap();
    assert!(fs::read_to_string(&path).unwrap().contains("TESTING TITLE"));

    fig.title("RENAMED");
    fig.save(&path).unwrap();
    let page = fs::read_to_string(&path).unwrap();
    assert!(page.contains("RENAMED"));
    assert!(!page.contains("TESTING TITLE"));
}

#[test]
fn html_page_loads_plotly() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("figure.html");
    testing_figure().save(&path).unwrap();
    let page = fs::read_to_string(Path::new(&path)).unwrap();
    assert!(page.contains("Plotly.newPlot"));
    assert!(page.contains(reaktplot::config::DEFAULT_PLOTLY_JS));
    assert!(page.contains("\"template\""));
}

#[test]
fn oversized_tick_and_level_counts_still_render() {
    let dir = tempdir().unwrap();
    let mut fig = testing_figure();
    fig.xaxis_nticks(1_000_000_000).yaxis_nticks(1_000_000_000);
    fig.save(dir.path().join("nticks.png")).unwrap();

    let mut contour = Figure::new();
    contour.draw_contour(
        vec![0.0, 1.0],
        vec![0.0, 1.0],
        vec![vec![0.0, 1.0], vec![1.0, 2.0]],
        &ContourSpecs::new().num_contours(1_000_000),
    );
    contour.save(dir.path().join("levels.png")).unwrap();
}
