use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use log::info;
use reaktplot::{ContourSpecs, ExportConfig, Figure, LineSpecs, MarkerSpecs};
use serde_json::Value;
use std::f64::consts::PI;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "reaktplot-demo",
    version,
    about = "Render the reaktplot example figures to PNG/JPEG/WEBP/SVG/PDF/EPS/HTML"
)]
struct Cli {
    /// Which example figure to build.
    #[arg(value_enum)]
    example: Example,
    /// Output file; the format is inferred from the extension.
    #[arg(short, long)]
    out: PathBuf,
    /// Width in px (defaults to the config value, 800).
    #[arg(long)]
    width: Option<u32>,
    /// Height in px (defaults to the config value, 500).
    #[arg(long)]
    height: Option<u32>,
    /// Raster scale factor (defaults to the config value, 1.0).
    #[arg(long)]
    scale: Option<f64>,
    /// JSON file with export settings (width, height, scale, plotly_js_src, font_path).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Apply a figure option by setter name, e.g. `--set title_font_size=30`.
    /// The value is parsed as JSON and falls back to a plain string.
    #[arg(long = "set", value_name = "NAME=VALUE")]
    set: Vec<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Example {
    /// Polynomials drawn as lines with markers.
    Readme,
    /// sin(k x) for k = 1..6 on [0, pi].
    Sine,
    /// The 5 x 5 contour grid.
    Contour,
}

fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    let step = (end - start) / (count.max(2) - 1) as f64;
    (0..count).map(|i| start + step * i as f64).collect()
}

fn build(example: Example, config: ExportConfig) -> Figure {
    let mut fig = Figure::with_config(config);
    match example {
        Example::Readme => {
            let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
            let squares: Vec<f64> = x.iter().map(|v| v * v).collect();
            let doubled: Vec<f64> = squares.iter().map(|v| 2.0 * v).collect();
            fig.title("POLYNOMIALS")
                .xaxis_title("x")
                .yaxis_title("y")
                .draw_line_with_markers(
                    x.clone(),
                    squares,
                    "x²",
                    &LineSpecs::new(),
                    &MarkerSpecs::new(),
                )
                .draw_line_with_markers(
                    x,
                    doubled,
                    "2x²",
                    &LineSpecs::new().dash("dash"),
                    &MarkerSpecs::new().symbol("square"),
                );
        }
        Example::Sine => {
            let x = linspace(0.0, PI, 200);
            fig.title("SINE FUNCTIONS").xaxis_title("x").yaxis_title("y");
            for k in 1..=6 {
                let y: Vec<f64> = x.iter().map(|v| (k as f64 * v).sin()).collect();
                let name = if k == 1 {
                    "sin(x)".to_string()
                } else {
                    format!("sin({k}x)")
                };
                fig.draw_line(x.clone(), y, &name, &LineSpecs::new());
            }
        }
        Example::Contour => {
            let x = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
            let y = x.clone();
            let z = vec![
                vec![10.000, 10.625, 12.500, 15.625, 20.000],
                vec![5.625, 6.250, 8.125, 11.250, 15.625],
                vec![2.500, 3.125, 5.000, 8.125, 12.500],
                vec![0.625, 1.250, 3.125, 6.250, 10.625],
                vec![0.000, 0.625, 2.500, 5.625, 10.000],
            ];
            fig.title("CONTOUR PLOT")
                .xaxis_title("x")
                .yaxis_title("y")
                .draw_contour(x, y, z, &ContourSpecs::new().show_labels(true));
        }
    }
    fig
}

fn parse_assignment(text: &str) -> Result<(&str, Value)> {
    let (name, raw) = text
        .split_once('=')
        .ok_or_else(|| anyhow!("expected NAME=VALUE, got '{}'", text))?;
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((name.trim(), value))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ExportConfig::from_json_file(path)?,
        None => ExportConfig::default(),
    };
    let width = cli.width.unwrap_or(config.width);
    let height = cli.height.unwrap_or(config.height);
    let scale = cli.scale.unwrap_or(config.scale);

    let mut fig = build(cli.example, config);
    for assignment in &cli.set {
        let (name, value) = parse_assignment(assignment)?;
        fig.set_option(name, value)
            .with_context(|| format!("applying --set {}", assignment))?;
    }

    fig.save_with(&cli.out, width, height, scale)
        .with_context(|| format!("saving {}", cli.out.display()))?;
    info!("wrote {}", cli.out.display());
    println!("Saved {}", cli.out.display());
    Ok(())
}
