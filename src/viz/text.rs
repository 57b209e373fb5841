//! Text measurement, truncation and the small subset of plotly's text markup we honour.

/// Heuristic pixel width of `text` (layout happens before any backend exists to measure with).
pub fn estimate_text_width_px(text: &str, font_px: f64) -> f64 {
    (text.chars().count() as f64 * font_px * 0.60).ceil()
}

/// Widest line of `lines`, in estimated pixels.
pub fn widest_line_px<S: AsRef<str>>(lines: &[S], font_px: f64) -> f64 {
    lines
        .iter()
        .map(|l| estimate_text_width_px(l.as_ref(), font_px))
        .fold(0.0, f64::max)
}

/// Truncate to fit `max_px` and add a single ellipsis if needed.
pub fn truncate_to_width(text: &str, font_px: f64, max_px: f64) -> String {
    if estimate_text_width_px(text, font_px) <= max_px {
        return text.to_string();
    }
    let mut out = String::new();
    for ch in text.chars() {
        out.push(ch);
        if estimate_text_width_px(&out, font_px) + font_px * 0.60 > max_px {
            out.pop();
            break;
        }
    }
    out.push('…');
    out
}

/// Split at `<br>` line breaks and drop the inline style tags (`<b>`, `<i>`, `<sup>`, `<sub>`, `<span ...>`).
pub fn markup_lines(text: &str) -> Vec<String> {
    let mut lines = vec![String::new()];
    let mut rest = text;
    while let Some(open) = rest.find('<') {
        let Some(close) = rest[open..].find('>') else {
            break;
        };
        if let Some(line) = lines.last_mut() {
            line.push_str(&rest[..open]);
        }
        let tag = rest[open + 1..open + close]
            .trim()
            .trim_end_matches('/')
            .trim()
            .to_ascii_lowercase();
        let name = tag.split_whitespace().next().unwrap_or("");
        match name {
            "br" => lines.push(String::new()),
            "b" | "/b" | "i" | "/i" | "sup" | "/sup" | "sub" | "/sub" | "span" | "/span" | "em"
            | "/em" => {}
            _ => {
                // Not a known tag: keep it as literal text.
                if let Some(line) = lines.last_mut() {
                    line.push_str(&rest[open..=open + close]);
                }
            }
        }
        rest = &rest[open + close + 1..];
    }
    if let Some(line) = lines.last_mut() {
        line.push_str(rest);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_grows_with_length_and_size() {
        assert_eq!(estimate_text_width_px("abcde", 10.0), 30.0);
        assert!(estimate_text_width_px("abc", 20.0) > estimate_text_width_px("abc", 10.0));
        assert_eq!(widest_line_px(&["ab", "abcd"], 10.0), 24.0);
    }

    #[test]
    fn truncation_adds_one_ellipsis() {
        assert_eq!(truncate_to_width("short", 10.0, 100.0), "short");
        let cut = truncate_to_width("a rather long legend entry", 10.0, 60.0);
        assert!(cut.ends_with('…'));
        assert!(estimate_text_width_px(&cut, 10.0) <= 60.0);
    }

    #[test]
    fn markup_breaks_and_tags() {
        assert_eq!(markup_lines("one<br>two<br />three"), vec!["one", "two", "three"]);
        assert_eq!(markup_lines("<b>bold</b> and <i>it</i>"), vec!["bold and it"]);
        assert_eq!(markup_lines("a < b"), vec!["a < b"]);
        assert_eq!(markup_lines("x<y>z"), vec!["x<y>z"]);
    }
}
