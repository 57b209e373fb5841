//! The default `reaktplot` look, registered once per process.
//!
//! [`init`] is idempotent and is called by [`Figure::new`](crate::Figure::new), so applications
//! normally never call it. Call it explicitly first if you want to register the theme and then
//! switch the default to a template of your own.

use std::sync::Once;

use serde_json::{Value, json};

use crate::options::Options;
use crate::templates::{self, Template};

/// Name under which the default theme is registered.
pub const TEMPLATE_NAME: &str = "reaktplot";

/// Qualitative palette (Tableau 10) used as the default trace color cycle.
pub const T10: [&str; 10] = [
    "#4C78A8", "#F58518", "#E45756", "#72B7B2", "#54A24B", "#EECA3B", "#B279A2", "#FF9DA6",
    "#9D755D", "#BAB0AC",
];

static INIT_THEME: Once = Once::new();

/// Register the default theme and make it the process-wide default template.
pub fn init() {
    INIT_THEME.call_once(|| {
        templates::register(TEMPLATE_NAME, default_template());
        // Registered just above, so the lookup cannot miss.
        let _ = templates::set_default(TEMPLATE_NAME);
    });
}

/// Build the default theme without registering it.
pub fn default_template() -> Template {
    let layout = json!({
        // font
        "font_family": "Arial",
        "font_size": 16,
        "font_color": "#2e2e2e",

        // title
        "title_font_size": 24,
        "title_font_color": "#636363",
        "title_xref": "paper",
        "title_yref": "paper",
        "title_yanchor": "middle",
        "title_x": 0.0,

        // legend
        "legend_title_text": "",

        "margin_b": 100,
        "margin_t": 100,
        "margin_l": 100,
        "margin_r": 100,
        "margin_pad": 5,

        "xaxis_title_font_size": 20,
        "yaxis_title_font_size": 20,

        "xaxis_zerolinecolor": "#2e2e2e",
        "xaxis_zerolinewidth": 0,

        "yaxis_zerolinecolor": "#2e2e2e",
        "yaxis_zerolinewidth": 0,

        // backgrounds
        "paper_bgcolor": "#f7f7f7",
        "plot_bgcolor": "#f7f7f7",

        "colorway": T10,
    });

    let scatter = json!({
        "line": {"width": 4},
        "marker": {"symbol": "circle", "size": 10},
    });

    let mut template = Template {
        layout: into_options(layout),
        ..Template::default()
    };
    template
        .data
        .insert("scatter".into(), vec![into_options(scatter)]);
    template
}

fn into_options(value: Value) -> Options {
    match value {
        Value::Object(map) => map,
        _ => Options::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_registers_the_default_template() {
        init();
        init();
        assert_eq!(templates::default_name().as_deref(), Some(TEMPLATE_NAME));
        let t = templates::get(TEMPLATE_NAME).unwrap();
        assert_eq!(t.colorway(), Some(&json!(T10)));
    }

    #[test]
    fn theme_values_are_exact() {
        let t = default_template();
        assert_eq!(t.layout["font_family"], json!("Arial"));
        assert_eq!(t.layout["font_size"], json!(16));
        assert_eq!(t.layout["title_font_size"], json!(24));
        assert_eq!(t.layout["title_font_color"], json!("#636363"));
        assert_eq!(t.layout["margin_l"], json!(100));
        assert_eq!(t.layout["margin_pad"], json!(5));
        assert_eq!(t.layout["paper_bgcolor"], json!("#f7f7f7"));
        assert_eq!(t.layout["xaxis_zerolinewidth"], json!(0));

        let scatter = t.trace_defaults("scatter", 0).unwrap();
        assert_eq!(scatter["line"]["width"], json!(4));
        assert_eq!(scatter["marker"]["symbol"], json!("circle"));
        assert_eq!(scatter["marker"]["size"], json!(10));
    }
}
