//! Process-wide registry of named figure templates.
//!
//! A template carries default layout options and per-trace-type style defaults. Every
//! [`NativeFigure`](crate::graph::NativeFigure) captures the registry's default template when it
//! is created, so changing the default later does not affect figures that already exist.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, OnceLock, RwLock};

use anyhow::Result;
use log::debug;
use serde_json::Value;

use crate::error::ExportError;
use crate::options::Options;

/// Default layout and trace styles applied beneath a figure's own configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Template {
    /// Layout options, keys in underscore path form (`title_font_size`).
    pub layout: Options,
    /// Style defaults per trace type (`"scatter"`, `"contour"`), cycled by trace index.
    pub data: BTreeMap<String, Vec<Options>>,
}

impl Template {
    /// Defaults for the `index`-th trace of type `kind`, cycling through the list.
    pub fn trace_defaults(&self, kind: &str, index: usize) -> Option<&Options> {
        let list = self.data.get(kind)?;
        if list.is_empty() {
            None
        } else {
            list.get(index % list.len())
        }
    }

    /// The template's trace color sequence, if it defines one.
    pub fn colorway(&self) -> Option<&Value> {
        self.layout.get("colorway")
    }
}

#[derive(Default)]
struct Registry {
    templates: HashMap<String, Arc<Template>>,
    default: Option<String>,
}

fn registry() -> &'static RwLock<Registry> {
    static REGISTRY: OnceLock<RwLock<Registry>> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new(Registry::default()))
}

/// Register (or replace) a template under `name`.
pub fn register(name: &str, template: Template) {
    let mut reg = registry().write().unwrap_or_else(|e| e.into_inner());
    reg.templates.insert(name.to_string(), Arc::new(template));
    debug!("registered template '{}'", name);
}

/// Make the template registered under `name` the process-wide default.
pub fn set_default(name: &str) -> Result<()> {
    let mut reg = registry().write().unwrap_or_else(|e| e.into_inner());
    if !reg.templates.contains_key(name) {
        return Err(ExportError::UnknownTemplate(name.to_string()).into());
    }
    reg.default = Some(name.to_string());
    debug!("default template is now '{}'", name);
    Ok(())
}

/// Look up a registered template.
pub fn get(name: &str) -> Option<Arc<Template>> {
    let reg = registry().read().unwrap_or_else(|e| e.into_inner());
    reg.templates.get(name).cloned()
}

/// Name of the current default template.
pub fn default_name() -> Option<String> {
    let reg = registry().read().unwrap_or_else(|e| e.into_inner());
    reg.default.clone()
}

/// The current default template, or an empty one when none is set.
pub fn default_template() -> Arc<Template> {
    let reg = registry().read().unwrap_or_else(|e| e.into_inner());
    reg.default
        .as_ref()
        .and_then(|name| reg.templates.get(name).cloned())
        .unwrap_or_default()
}
