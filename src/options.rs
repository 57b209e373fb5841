//! Options mappings and the positional data containers handed to draw calls.
//!
//! An [`Options`] map mirrors the attribute paths of plotly figures. Builders store keys exactly as
//! written (`title_font_color`); the native figure expands them into nested maps with
//! [`expand_paths`] when configuration is merged in, the same way plotly's "magic underscore"
//! updates work.

use serde_json::{Map, Value};

/// Mapping from attribute key to value. Keys are unique; the last write wins.
pub type Options = Map<String, Value>;

/// Attribute names that contain an underscore but are a single path segment.
const COMPOUND_KEYS: &[&str] = &["paper_bgcolor", "plot_bgcolor"];

/// Turn underscore attribute paths into nested maps.
///
/// `{"title_font_color": "red", "title_text": "A"}` becomes
/// `{"title": {"font": {"color": "red"}, "text": "A"}}`. Nested map values are expanded too.
/// Later keys are merged over earlier ones.
pub fn expand_paths(options: &Options) -> Options {
    let mut out = Options::new();
    for (key, value) in options {
        let value = match value {
            Value::Object(inner) => Value::Object(expand_paths(inner)),
            other => other.clone(),
        };
        let segments = split_path(key);
        let mut nested = value;
        for segment in segments.iter().skip(1).rev() {
            let mut wrapper = Options::new();
            wrapper.insert((*segment).to_string(), nested);
            nested = Value::Object(wrapper);
        }
        let mut single = Options::new();
        single.insert(segments[0].to_string(), nested);
        merge(&mut out, &single);
    }
    out
}

/// Split an attribute key into path segments, keeping compound names whole.
pub fn split_path(key: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut rest = key;
    while !rest.is_empty() {
        if let Some(compound) = COMPOUND_KEYS.iter().find(|c| {
            rest.starts_with(*c) && (rest.len() == c.len() || rest.as_bytes()[c.len()] == b'_')
        }) {
            segments.push(&rest[..compound.len()]);
            rest = rest[compound.len()..].trim_start_matches('_');
            continue;
        }
        match rest.find('_') {
            Some(idx) => {
                segments.push(&rest[..idx]);
                rest = &rest[idx + 1..];
            }
            None => {
                segments.push(rest);
                rest = "";
            }
        }
    }
    if segments.is_empty() {
        segments.push(key);
    }
    segments
}

/// Deep-merge `source` into `target`: maps merge recursively, anything else replaces.
pub fn merge(target: &mut Options, source: &Options) {
    for (key, value) in source {
        match (target.get_mut(key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => merge(existing, incoming),
            _ => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Read a nested value by path segments.
pub fn lookup<'a>(options: &'a Options, path: &[&str]) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    let value = options.get(*first)?;
    if rest.is_empty() {
        return Some(value);
    }
    match value {
        Value::Object(inner) => lookup(inner, rest),
        _ => None,
    }
}

/// One positional data sequence (x or y values): numbers or categorical labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Data(pub Vec<Value>);

impl Data {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Data> for Value {
    fn from(data: Data) -> Self {
        Value::Array(data.0)
    }
}

impl From<Vec<f64>> for Data {
    fn from(values: Vec<f64>) -> Self {
        Data(values.into_iter().map(Value::from).collect())
    }
}

impl From<&[f64]> for Data {
    fn from(values: &[f64]) -> Self {
        Data(values.iter().copied().map(Value::from).collect())
    }
}

impl From<&Vec<f64>> for Data {
    fn from(values: &Vec<f64>) -> Self {
        Data::from(values.as_slice())
    }
}

impl<const N: usize> From<[f64; N]> for Data {
    fn from(values: [f64; N]) -> Self {
        Data(values.into_iter().map(Value::from).collect())
    }
}

impl From<Vec<i64>> for Data {
    fn from(values: Vec<i64>) -> Self {
        Data(values.into_iter().map(Value::from).collect())
    }
}

impl From<Vec<&str>> for Data {
    fn from(values: Vec<&str>) -> Self {
        Data(values.into_iter().map(Value::from).collect())
    }
}

impl From<&[&str]> for Data {
    fn from(values: &[&str]) -> Self {
        Data(values.iter().map(|v| Value::from(*v)).collect())
    }
}

impl From<Vec<String>> for Data {
    fn from(values: Vec<String>) -> Self {
        Data(values.into_iter().map(Value::from).collect())
    }
}

/// Row-major numeric table for contour traces: `z[row][col]`, rows follow `y`, columns follow `x`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid(pub Vec<Vec<f64>>);

impl From<Grid> for Value {
    fn from(grid: Grid) -> Self {
        Value::Array(
            grid.0
                .into_iter()
                .map(|row| Value::Array(row.into_iter().map(Value::from).collect()))
                .collect(),
        )
    }
}

impl From<Vec<Vec<f64>>> for Grid {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Grid(rows)
    }
}

impl From<&[Vec<f64>]> for Grid {
    fn from(rows: &[Vec<f64>]) -> Self {
        Grid(rows.to_vec())
    }
}

impl From<&Vec<Vec<f64>>> for Grid {
    fn from(rows: &Vec<Vec<f64>>) -> Self {
        Grid(rows.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn opts(v: Value) -> Options {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn split_keeps_compound_names() {
        assert_eq!(split_path("title_font_color"), vec!["title", "font", "color"]);
        assert_eq!(split_path("paper_bgcolor"), vec!["paper_bgcolor"]);
        assert_eq!(split_path("plot_bgcolor"), vec!["plot_bgcolor"]);
        assert_eq!(split_path("showlegend"), vec!["showlegend"]);
    }

    #[test]
    fn expand_nests_and_merges_siblings() {
        let flat = opts(json!({
            "title_text": "A",
            "title_font_color": "red",
            "title_font_size": 24,
            "paper_bgcolor": "#fff"
        }));
        let nested = expand_paths(&flat);
        assert_eq!(
            Value::Object(nested),
            json!({
                "title": {"text": "A", "font": {"color": "red", "size": 24}},
                "paper_bgcolor": "#fff"
            })
        );
    }

    #[test]
    fn expand_recurses_into_map_values() {
        let flat = opts(json!({"legend": {"title_text": "L"}}));
        assert_eq!(
            Value::Object(expand_paths(&flat)),
            json!({"legend": {"title": {"text": "L"}}})
        );
    }

    #[test]
    fn merge_is_deep_and_last_write_wins() {
        let mut target = opts(json!({"title": {"text": "a", "x": 0.0}, "width": 100}));
        merge(
            &mut target,
            &opts(json!({"title": {"text": "b"}, "width": [1, 2]})),
        );
        assert_eq!(
            Value::Object(target),
            json!({"title": {"text": "b", "x": 0.0}, "width": [1, 2]})
        );
    }

    #[test]
    fn lookup_walks_nested_maps() {
        let o = opts(json!({"a": {"b": {"c": 3}}}));
        assert_eq!(lookup(&o, &["a", "b", "c"]), Some(&json!(3)));
        assert_eq!(lookup(&o, &["a", "x"]), None);
        assert_eq!(lookup(&o, &[]), None);
    }

    #[test]
    fn data_conversions() {
        let d: Data = vec![1.0, 2.5].into();
        assert_eq!(Value::from(d), json!([1.0, 2.5]));
        let d: Data = vec!["a", "b"].into();
        assert_eq!(d.len(), 2);
        let g: Grid = vec![vec![1.0, 2.0], vec![3.0, 4.0]].into();
        assert_eq!(Value::from(g), json!([[1.0, 2.0], [3.0, 4.0]]));
    }
}
