use reaktplot::specs::DEFAULT_CONTOUR_COLORSCALE;
use reaktplot::{ContourSpecs, Figure, FontSpecs, LineSpecs, OptionTarget, Options};
use serde_json::{Value, json};

fn target_map(fig: &Figure, target: OptionTarget) -> &Options {
    match target {
        OptionTarget::Layout => fig.layout(),
        OptionTarget::XAxis => fig.xaxis(),
        OptionTarget::YAxis => fig.yaxis(),
    }
}

#[test]
fn every_named_option_lands_under_its_key() {
    let mut fig = Figure::new();
    for (i, entry) in Figure::OPTIONS.iter().enumerate() {
        let value = json!(i);
        fig.set_option(entry.name, value.clone()).unwrap();
        assert_eq!(
            target_map(&fig, entry.target).get(entry.key),
            Some(&value),
            "{} should write {}",
            entry.name,
            entry.key
        );
    }
}

#[test]
fn aliases_share_a_key() {
    let pairs = [
        ("title", "title_text"),
        ("legend_title", "legend_title_text"),
        ("xaxis_title", "xaxis_title_text"),
        ("yaxis_title", "yaxis_title_text"),
    ];
    for (alias, full) in pairs {
        let a = Figure::option_entry(alias).unwrap();
        let b = Figure::option_entry(full).unwrap();
        assert_eq!((a.target, a.key), (b.target, b.key), "{alias} vs {full}");
    }
    assert_eq!(
        Figure::option_entry("xaxis_title").unwrap().target,
        OptionTarget::XAxis
    );
}

#[test]
fn typed_setters_store_plain_values() {
    let mut fig = Figure::new();
    fig.title("T")
        .title_font_size(30)
        .legend_x(0.1)
        .legend_show(false)
        .colorway(["black", "green"])
        .xaxis_title("x")
        .yaxis_range(0.0, 2.0);

    assert_eq!(fig.layout()["title_text"], json!("T"));
    assert_eq!(fig.layout()["title_font_size"], json!(30));
    assert_eq!(fig.layout()["legend_x"], json!(0.1));
    assert_eq!(fig.layout()["showlegend"], json!(false));
    assert_eq!(fig.layout()["colorway"], json!(["black", "green"]));
    assert_eq!(fig.xaxis()["title_text"], json!("x"));
    assert_eq!(fig.yaxis()["range"], json!([0.0, 2.0]));
    assert!(fig.layout().get("xaxis").is_none());
}

#[test]
fn last_write_wins_across_aliases() {
    let mut fig = Figure::new();
    fig.title("first").title_text("second");
    assert_eq!(fig.layout()["title_text"], json!("second"));
    fig.title("third");
    assert_eq!(fig.layout()["title_text"], json!("third"));
}

#[test]
fn specs_setters_take_a_snapshot() {
    let mut fig = Figure::new();
    let font = FontSpecs::new().size(20).color("red");
    fig.title_font_specs(font.options().clone());
    let later = font.family("Courier");
    assert_eq!(
        fig.layout()["title_font"],
        json!({"size": 20, "color": "red"})
    );
    assert_eq!(later.options()["family"], json!("Courier"));
}

#[test]
fn contour_specs_default_colorscale() {
    let specs = ContourSpecs::new();
    assert_eq!(
        specs.options()["colorscale"],
        json!(DEFAULT_CONTOUR_COLORSCALE)
    );
    let specs = specs.colorscale("Viridis");
    assert_eq!(specs.options()["colorscale"], json!("Viridis"));
}

#[test]
fn layout_is_applied_on_export() {
    let mut fig = Figure::new();
    fig.title("Merged").xaxis_title("x axis");
    let value: Value = serde_json::from_str(&fig.to_json().unwrap()).unwrap();
    assert_eq!(value["layout"]["title"]["text"], json!("Merged"));
    assert_eq!(value["layout"]["xaxis"]["title"]["text"], json!("x axis"));
    assert_eq!(
        value["layout"]["template"]["layout"]["font"]["family"],
        json!("Arial")
    );
}

#[test]
fn setters_and_draws_return_the_same_figure() {
    let mut fig = Figure::new();
    let base: *const Figure = &fig;
    let chained: *const Figure = fig
        .title("a")
        .legend_x(0.1)
        .xaxis_title_text("x")
        .yaxis_type_date()
        .draw_line(vec![0.0, 1.0], vec![1.0, 2.0], "line", &LineSpecs::new());
    assert!(std::ptr::eq(base, chained));
    assert_eq!(fig.layout()["legend_x"], json!(0.1));
}
