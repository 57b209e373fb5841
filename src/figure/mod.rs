//! The [`Figure`] facade: chainable configuration, draw calls and output.
//!
//! A figure keeps three flat option maps (layout, x axis, y axis) that its setters write into,
//! plus the native figure that holds the drawn traces. The maps are merged into the native figure
//! every time it is shown or saved, so setters may be called in any order relative to draw calls.

#[macro_use]
mod table;
mod setters;

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use log::debug;
use serde_json::Value;

use crate::config::ExportConfig;
use crate::export;
use crate::graph::{NativeFigure, Trace, TraceKind};
use crate::options::{Data, Grid, Options};
use crate::specs::{ContourSpecs, LineSpecs, MarkerSpecs};
use crate::theme;

pub use table::{OptionEntry, OptionTarget};

/// A figure under construction.
///
/// ```no_run
/// use reaktplot::{Figure, LineSpecs, MarkerSpecs};
///
/// let x = vec![0.0, 1.0, 2.0, 3.0];
/// let y: Vec<f64> = x.iter().map(|v| v * v).collect();
///
/// let mut fig = Figure::new();
/// fig.title("Squares")
///     .xaxis_title("x")
///     .yaxis_title("x²")
///     .draw_line_with_markers(x, y, "x²", &LineSpecs::new(), &MarkerSpecs::new());
/// fig.save("squares.svg")?;
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Figure {
    native: NativeFigure,
    layout: Options,
    xaxis: Options,
    yaxis: Options,
    config: ExportConfig,
}

impl Default for Figure {
    fn default() -> Self {
        Self::new()
    }
}

impl Figure {
    /// Empty figure styled by the current default template (the built-in theme unless changed).
    pub fn new() -> Self {
        Self::with_config(ExportConfig::default())
    }

    /// Empty figure whose `save`/`show` use `config`.
    pub fn with_config(config: ExportConfig) -> Self {
        theme::init();
        Figure {
            native: NativeFigure::new(),
            layout: Options::new(),
            xaxis: Options::new(),
            yaxis: Options::new(),
            config,
        }
    }

    /// Layout options set so far, keys as written by the setters.
    pub fn layout(&self) -> &Options {
        &self.layout
    }

    pub fn xaxis(&self) -> &Options {
        &self.xaxis
    }

    pub fn yaxis(&self) -> &Options {
        &self.yaxis
    }

    /// The native figure. Option maps are only merged into it by `show`, `save` and `to_json`.
    pub fn native(&self) -> &NativeFigure {
        &self.native
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Look up a setter table row by method name.
    pub fn option_entry(name: &str) -> Option<&'static OptionEntry> {
        Self::OPTIONS.iter().find(|entry| entry.name == name)
    }

    /// Apply a setter by its method name, e.g. `set_option("title_font_size", json!(30))`.
    ///
    /// The value is stored unchanged, exactly as the named setter would store it.
    pub fn set_option(&mut self, name: &str, value: Value) -> Result<&mut Self> {
        let entry =
            Self::option_entry(name).ok_or_else(|| anyhow!("unknown figure option '{}'", name))?;
        self.options_mut(entry.target)
            .insert(entry.key.to_string(), value);
        Ok(self)
    }

    fn options_mut(&mut self, target: OptionTarget) -> &mut Options {
        match target {
            OptionTarget::Layout => &mut self.layout,
            OptionTarget::XAxis => &mut self.xaxis,
            OptionTarget::YAxis => &mut self.yaxis,
        }
    }

    /// The trace colors in effect: the colorway set on this figure, else the template's.
    pub fn colorway_in_effect(&self) -> Option<Value> {
        self.layout
            .get("colorway")
            .or_else(|| self.native.template().colorway())
            .cloned()
    }

    /// Sets the range of the x axis. Log axes take the range in log10 units.
    pub fn xaxis_range(&mut self, left: f64, right: f64) -> &mut Self {
        self.xaxis.insert("range".into(), Value::from(vec![left, right]));
        self
    }

    /// Sets the range of the y axis. Log axes take the range in log10 units.
    pub fn yaxis_range(&mut self, left: f64, right: f64) -> &mut Self {
        self.yaxis.insert("range".into(), Value::from(vec![left, right]));
        self
    }

    /// Sets the y range of the x axis range slider.
    pub fn xaxis_range_slider_yaxis_range(&mut self, left: f64, right: f64) -> &mut Self {
        self.xaxis
            .insert("rangeslider_yaxis_range".into(), Value::from(vec![left, right]));
        self
    }

    pub fn yaxis_range_slider_yaxis_range(&mut self, left: f64, right: f64) -> &mut Self {
        self.yaxis
            .insert("rangeslider_yaxis_range".into(), Value::from(vec![left, right]));
        self
    }

    pub fn xaxis_scale_linear(&mut self) -> &mut Self {
        self.xaxis_type("linear")
    }

    /// Logarithmic x axis.
    pub fn xaxis_scale_log(&mut self) -> &mut Self {
        self.xaxis_type("log")
    }

    pub fn xaxis_type_date(&mut self) -> &mut Self {
        self.xaxis_type("date")
    }

    pub fn yaxis_scale_linear(&mut self) -> &mut Self {
        self.yaxis_type("linear")
    }

    /// Logarithmic y axis.
    pub fn yaxis_scale_log(&mut self) -> &mut Self {
        self.yaxis_type("log")
    }

    pub fn yaxis_type_date(&mut self) -> &mut Self {
        self.yaxis_type("date")
    }

    /// Add a line trace.
    pub fn draw_line(
        &mut self,
        x: impl Into<Data>,
        y: impl Into<Data>,
        name: &str,
        line: &LineSpecs,
    ) -> &mut Self {
        let mut options = scatter_options(x.into(), y.into(), name, "lines");
        options.insert("line".into(), Value::Object(line.options().clone()));
        self.native
            .add_trace(Trace::new(TraceKind::Scatter, options));
        self
    }

    /// Add a line trace with a marker at every point.
    pub fn draw_line_with_markers(
        &mut self,
        x: impl Into<Data>,
        y: impl Into<Data>,
        name: &str,
        line: &LineSpecs,
        marker: &MarkerSpecs,
    ) -> &mut Self {
        let mut options = scatter_options(x.into(), y.into(), name, "lines+markers");
        options.insert("line".into(), Value::Object(line.options().clone()));
        options.insert("marker".into(), Value::Object(marker.options().clone()));
        self.native
            .add_trace(Trace::new(TraceKind::Scatter, options));
        self
    }

    /// Add a marker-only trace.
    pub fn draw_markers(
        &mut self,
        x: impl Into<Data>,
        y: impl Into<Data>,
        name: &str,
        marker: &MarkerSpecs,
    ) -> &mut Self {
        let mut options = scatter_options(x.into(), y.into(), name, "markers");
        options.insert("marker".into(), Value::Object(marker.options().clone()));
        self.native
            .add_trace(Trace::new(TraceKind::Scatter, options));
        self
    }

    /// Add a contour trace. `z` is row-major: rows follow `y`, columns follow `x`.
    ///
    /// `x` (`y`) may hold one value per column (row) or one more, in which case the values are
    /// taken as cell edges.
    pub fn draw_contour(
        &mut self,
        x: impl Into<Data>,
        y: impl Into<Data>,
        z: impl Into<Grid>,
        specs: &ContourSpecs,
    ) -> &mut Self {
        let mut options = Options::new();
        options.insert("x".into(), x.into().into());
        options.insert("y".into(), y.into().into());
        options.insert("z".into(), z.into().into());
        for (key, value) in specs.options() {
            options.insert(key.clone(), value.clone());
        }
        self.native
            .add_trace(Trace::new(TraceKind::Contour, options));
        self
    }

    /// Open the figure as an interactive page in the system viewer.
    ///
    /// Returns the path of the generated HTML file, which is left in place for the viewer.
    pub fn show(&mut self) -> Result<PathBuf> {
        self.sync();
        export::show(&self.native, &self.config)
    }

    /// Save at the configured size (800 x 500 at scale 1.0 by default).
    ///
    /// The format follows the extension: `png`, `jpeg`/`jpg`, `webp`, `svg`, `pdf`, `eps` or
    /// `html`. Failures are returned as [`ExportError`](crate::ExportError) inside the
    /// `anyhow::Error`.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let (width, height, scale) = (self.config.width, self.config.height, self.config.scale);
        self.save_with(path, width, height, scale)
    }

    /// Save at an explicit size in px; raster formats are multiplied by `scale`.
    pub fn save_with<P: AsRef<Path>>(
        &mut self,
        path: P,
        width: u32,
        height: u32,
        scale: f64,
    ) -> Result<()> {
        let path = path.as_ref();
        self.sync();
        debug!(
            "saving figure with {} traces to {}",
            self.native.data().len(),
            path.display()
        );
        export::save(&self.native, path, width, height, scale, &self.config)
    }

    /// The merged figure as plotly JSON (`data`, `layout` and the template).
    pub fn to_json(&mut self) -> Result<String> {
        self.sync();
        Ok(serde_json::to_string(&self.native.to_value())?)
    }

    fn sync(&mut self) {
        self.native.update_layout(&self.layout);
        self.native.update_xaxes(&self.xaxis);
        self.native.update_yaxes(&self.yaxis);
    }
}

fn scatter_options(x: Data, y: Data, name: &str, mode: &str) -> Options {
    let mut options = Options::new();
    options.insert("x".into(), x.into());
    options.insert("y".into(), y.into());
    options.insert("name".into(), name.into());
    options.insert("mode".into(), mode.into());
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn setters_store_values_under_their_key() {
        let mut fig = Figure::new();
        fig.title_font_size(30)
            .legend_show(false)
            .title_x(0.5)
            .xaxis_grid_color("#ccc")
            .yaxis_tick_values(vec![1, 2, 3]);
        assert_eq!(fig.layout()["title_font_size"], json!(30));
        assert_eq!(fig.layout()["showlegend"], json!(false));
        assert_eq!(fig.layout()["title_x"], json!(0.5));
        assert_eq!(fig.xaxis()["gridcolor"], json!("#ccc"));
        assert_eq!(fig.yaxis()["tickvals"], json!([1, 2, 3]));
        assert!(fig.yaxis().get("gridcolor").is_none());
    }

    #[test]
    fn option_names_are_unique() {
        let mut seen = HashSet::new();
        for entry in Figure::OPTIONS {
            assert!(seen.insert(entry.name), "duplicate option {}", entry.name);
        }
    }

    #[test]
    fn axis_rows_come_in_pairs() {
        let x = Figure::OPTIONS
            .iter()
            .filter(|e| e.target == OptionTarget::XAxis)
            .count();
        let y = Figure::OPTIONS
            .iter()
            .filter(|e| e.target == OptionTarget::YAxis)
            .count();
        assert_eq!(x, y);
        assert!(x > 100);
    }

    #[test]
    fn set_option_matches_the_setter() {
        let mut by_name = Figure::new();
        by_name
            .set_option("yaxis_title_font_size", json!(12))
            .unwrap()
            .set_option("legend_title", json!("Series"))
            .unwrap();
        let mut by_call = Figure::new();
        by_call.yaxis_title_font_size(12).legend_title("Series");
        assert_eq!(by_name.yaxis(), by_call.yaxis());
        assert_eq!(by_name.layout(), by_call.layout());
        assert!(by_name.set_option("no_such_option", json!(1)).is_err());
    }

    #[test]
    fn transforms_write_range_and_type() {
        let mut fig = Figure::new();
        fig.xaxis_range(-1.0, 4.5).yaxis_scale_log().xaxis_type_date();
        assert_eq!(fig.xaxis()["range"], json!([-1.0, 4.5]));
        assert_eq!(fig.xaxis()["type"], json!("date"));
        assert_eq!(fig.yaxis()["type"], json!("log"));
    }

    #[test]
    fn draw_calls_add_scatter_traces() {
        let mut fig = Figure::new();
        let line = LineSpecs::new().width(2);
        let marker = MarkerSpecs::new().size(4);
        fig.draw_line(vec![0.0, 1.0], vec![1.0, 2.0], "a", &line)
            .draw_line_with_markers(vec![0.0], vec![0.0], "b", &line, &marker)
            .draw_markers(vec!["p", "q"], vec![3.0, 4.0], "c", &marker);
        let data = fig.native().data();
        assert_eq!(data.len(), 3);
        assert_eq!(data[0].mode(), Some("lines"));
        assert_eq!(data[1].mode(), Some("lines+markers"));
        assert_eq!(data[2].mode(), Some("markers"));
        assert_eq!(data[2].name(), Some("c"));
        assert_eq!(data[1].options["marker"], json!({"size": 4}));
        assert!(data[2].options.get("line").is_none());
        assert_eq!(data[2].options["x"], json!(["p", "q"]));
    }

    #[test]
    fn contour_trace_carries_spec_options() {
        let mut fig = Figure::new();
        let specs = ContourSpecs::new().coloring_mode_heatmap().show_labels(true);
        fig.draw_contour(
            vec![0.0, 1.0],
            vec![0.0, 1.0],
            vec![vec![1.0, 2.0], vec![3.0, 4.0]],
            &specs,
        );
        let trace = &fig.native().data()[0];
        assert_eq!(trace.kind, TraceKind::Contour);
        assert_eq!(trace.options["colorscale"], json!("Portland"));
        assert_eq!(
            trace.options["contours"],
            json!({"showlabels": true, "coloring": "heatmap"})
        );
        assert_eq!(trace.options["z"], json!([[1.0, 2.0], [3.0, 4.0]]));
    }

    #[test]
    fn json_output_nests_the_merged_layout() {
        let mut fig = Figure::new();
        fig.title("T").xaxis_title("x").paper_background_color("white");
        let value: Value = serde_json::from_str(&fig.to_json().unwrap()).unwrap();
        assert_eq!(value["layout"]["title"]["text"], json!("T"));
        assert_eq!(value["layout"]["xaxis"]["title"]["text"], json!("x"));
        assert_eq!(value["layout"]["paper_bgcolor"], json!("white"));
    }
}
