//! The native figure: an ordered list of traces plus a nested layout document.
//!
//! This is the collaborator the [`Figure`](crate::Figure) facade hands its configuration to. It
//! follows plotly's figure model: `data` is a list of trace objects, `layout` a nested map, and
//! the `update_*` operations merge underscore attribute paths into the stored layout.

use std::sync::Arc;

use serde_json::{Value, json};

use crate::options::{Options, expand_paths, merge};
use crate::templates::{self, Template};

/// Kind of a trace in the native figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {
    Scatter,
    Contour,
}

impl TraceKind {
    /// Trace type name as used in figure JSON and template trace defaults.
    pub fn as_str(self) -> &'static str {
        match self {
            TraceKind::Scatter => "scatter",
            TraceKind::Contour => "contour",
        }
    }
}

/// One drawn primitive: positional data and style options, attribute paths already nested.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub kind: TraceKind,
    pub options: Options,
}

impl Trace {
    /// Build a trace, expanding underscore paths in `options` (`contours_coloring` ->
    /// `contours.coloring`).
    pub fn new(kind: TraceKind, options: Options) -> Self {
        Trace {
            kind,
            options: expand_paths(&options),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.options.get("name").and_then(Value::as_str)
    }

    pub fn mode(&self) -> Option<&str> {
        self.options.get("mode").and_then(Value::as_str)
    }

    fn to_json(&self) -> Value {
        let mut obj = Options::new();
        obj.insert("type".into(), self.kind.as_str().into());
        merge(&mut obj, &self.options);
        Value::Object(obj)
    }
}

/// Traces and layout of one figure, bound to the template that was default at creation.
#[derive(Debug, Clone)]
pub struct NativeFigure {
    data: Vec<Trace>,
    layout: Options,
    template: Arc<Template>,
}

impl Default for NativeFigure {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeFigure {
    /// Empty figure using the registry's current default template.
    pub fn new() -> Self {
        Self::with_template(templates::default_template())
    }

    pub fn with_template(template: Arc<Template>) -> Self {
        NativeFigure {
            data: Vec::new(),
            layout: Options::new(),
            template,
        }
    }

    pub fn add_trace(&mut self, trace: Trace) {
        self.data.push(trace);
    }

    /// Merge layout options (underscore paths allowed) into the stored layout.
    pub fn update_layout(&mut self, options: &Options) {
        merge(&mut self.layout, &expand_paths(options));
    }

    /// Merge options into the x axis.
    pub fn update_xaxes(&mut self, options: &Options) {
        self.update_axis("xaxis", options);
    }

    /// Merge options into the y axis.
    pub fn update_yaxes(&mut self, options: &Options) {
        self.update_axis("yaxis", options);
    }

    fn update_axis(&mut self, axis: &str, options: &Options) {
        let mut wrapped = Options::new();
        wrapped.insert(axis.to_string(), Value::Object(expand_paths(options)));
        merge(&mut self.layout, &wrapped);
    }

    pub fn data(&self) -> &[Trace] {
        &self.data
    }

    /// The figure's own layout, without template defaults.
    pub fn layout(&self) -> &Options {
        &self.layout
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Template layout overlaid with the figure's own layout.
    pub fn effective_layout(&self) -> Options {
        let mut layout = expand_paths(&self.template.layout);
        merge(&mut layout, &self.layout);
        layout
    }

    /// Options of the `index`-th trace with the template's defaults for its type merged beneath.
    pub fn effective_trace(&self, index: usize) -> Option<Options> {
        let trace = self.data.get(index)?;
        let same_kind = self.data[..index]
            .iter()
            .filter(|t| t.kind == trace.kind)
            .count();
        let mut options = self
            .template
            .trace_defaults(trace.kind.as_str(), same_kind)
            .map(expand_paths)
            .unwrap_or_default();
        merge(&mut options, &trace.options);
        Some(options)
    }

    /// The figure as plotly JSON: `{"data": [...], "layout": {..., "template": {...}}}`.
    pub fn to_value(&self) -> Value {
        let data: Vec<Value> = self.data.iter().map(Trace::to_json).collect();

        let template_data: serde_json::Map<String, Value> = self
            .template
            .data
            .iter()
            .map(|(kind, list)| {
                let list = list
                    .iter()
                    .map(|o| Value::Object(expand_paths(o)))
                    .collect();
                (kind.clone(), Value::Array(list))
            })
            .collect();

        let mut layout = self.layout.clone();
        layout.insert(
            "template".into(),
            json!({
                "layout": Value::Object(expand_paths(&self.template.layout)),
                "data": Value::Object(template_data),
            }),
        );
        json!({ "data": data, "layout": Value::Object(layout) })
    }
}
