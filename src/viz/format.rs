//! Number formatting for tick and contour labels.
//!
//! `tickformat` and `contours.labelformat` use d3-format specifiers. The subset understood here is
//! `[+][,][.precision][~][type]` with type `f`, `e`, `g`, `%`, `d` or none.

/// Format a tick value the way plotly's automatic ticks read: shortest form, no float noise.
pub fn default_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = (value * 1e9).round() / 1e9;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let abs = rounded.abs();
    if !(1e-5..1e15).contains(&abs) {
        return exponent(value, 2, true);
    }
    format!("{}", rounded)
}

/// Format `value` with a d3-format specifier; unknown specifiers fall back to [`default_number`].
pub fn format_number(value: f64, spec: &str) -> String {
    match Spec::parse(spec) {
        Some(spec) => spec.apply(value),
        None => default_number(value),
    }
}

#[derive(Debug, Default, PartialEq)]
struct Spec {
    plus: bool,
    group: bool,
    precision: Option<usize>,
    trim: bool,
    kind: Option<char>,
}

impl Spec {
    fn parse(text: &str) -> Option<Spec> {
        let mut spec = Spec::default();
        let mut rest = text;
        if let Some(r) = rest.strip_prefix('+') {
            spec.plus = true;
            rest = r;
        }
        if let Some(r) = rest.strip_prefix(',') {
            spec.group = true;
            rest = r;
        }
        if let Some(r) = rest.strip_prefix('.') {
            let digits: String = r.chars().take_while(char::is_ascii_digit).collect();
            if digits.is_empty() {
                return None;
            }
            spec.precision = Some(digits.parse().ok()?);
            rest = &r[digits.len()..];
        }
        if let Some(r) = rest.strip_prefix('~') {
            spec.trim = true;
            rest = r;
        }
        let mut chars = rest.chars();
        spec.kind = chars.next();
        if chars.next().is_some() {
            return None;
        }
        match spec.kind {
            None | Some('f' | 'e' | 'g' | '%' | 'd') => Some(spec),
            _ => None,
        }
    }

    fn apply(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let mut out = match self.kind {
            Some('f') => format!("{:.*}", self.precision.unwrap_or(6), value),
            Some('%') => format!("{:.*}", self.precision.unwrap_or(6), value * 100.0),
            Some('e') => exponent(value, self.precision.unwrap_or(6), false),
            Some('d') => format!("{}", value.round()),
            Some('g') => significant(value, self.precision.unwrap_or(6).max(1)),
            _ => match self.precision {
                Some(p) => trim_zeros(&significant(value, p.max(1))),
                None => default_number(value),
            },
        };
        if self.trim {
            out = trim_zeros(&out);
        }
        if self.group {
            out = group_thousands(&out);
        }
        if self.kind == Some('%') {
            out.push('%');
        }
        if out == "-0" {
            out = "0".to_string();
        }
        if self.plus && !out.starts_with('-') {
            out.insert(0, '+');
        }
        out
    }
}

/// `1.5e+3` style exponent notation with `precision` fraction digits.
fn exponent(value: f64, precision: usize, trim: bool) -> String {
    let raw = format!("{:.*e}", precision, value);
    let (mantissa, exp) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let mantissa = if trim {
        trim_zeros(mantissa)
    } else {
        mantissa.to_string()
    };
    match exp.strip_prefix('-') {
        Some(digits) => format!("{}e-{}", mantissa, digits),
        None => format!("{}e+{}", mantissa, exp),
    }
}

/// d3 `g`: `precision` significant digits, exponent notation for very small or large values.
fn significant(value: f64, precision: usize) -> String {
    if value == 0.0 {
        return format!("{:.*}", precision.saturating_sub(1), 0.0);
    }
    let exp = value.abs().log10().floor() as i32;
    if exp < -6 || exp >= precision as i32 {
        exponent(value, precision - 1, false)
    } else {
        let decimals = (precision as i32 - 1 - exp).max(0) as usize;
        format!("{:.*}", decimals, value)
    }
}

fn trim_zeros(text: &str) -> String {
    if let Some((mantissa, exp)) = text.split_once('e') {
        return format!("{}e{}", trim_zeros(mantissa), exp);
    }
    if !text.contains('.') {
        return text.to_string();
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn group_thousands(text: &str) -> String {
    let (sign, body) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let split = body
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(body.len());
    let (int, tail) = body.split_at(split);
    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}{}", sign, grouped, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_numbers_drop_float_noise() {
        assert_eq!(default_number(0.1 + 0.2), "0.3");
        assert_eq!(default_number(-0.0), "0");
        assert_eq!(default_number(2.0), "2");
        assert_eq!(default_number(1250.5), "1250.5");
        assert_eq!(default_number(1e20), "1e+20");
    }

    #[test]
    fn fixed_percent_and_grouping() {
        assert_eq!(format_number(3.14159, ".2f"), "3.14");
        assert_eq!(format_number(0.256, ".1%"), "25.6%");
        assert_eq!(format_number(1234567.891, ",.1f"), "1,234,567.9");
        assert_eq!(format_number(-1234.0, ",d"), "-1,234");
        assert_eq!(format_number(5.0, "+d"), "+5");
    }

    #[test]
    fn exponent_and_significant() {
        assert_eq!(format_number(12345.0, ".2e"), "1.23e+4");
        assert_eq!(format_number(0.00012, ".1e"), "1.2e-4");
        assert_eq!(format_number(3.14159, ".3g"), "3.14");
        assert_eq!(format_number(1.5, ".3~g"), "1.5");
        assert_eq!(format_number(2.5, ".3"), "2.5");
    }

    #[test]
    fn unknown_specifiers_fall_back() {
        assert_eq!(format_number(2.0, "%Y-%m"), "2");
        assert_eq!(format_number(2.0, ".xf"), "2");
        assert_eq!(format_number(2.0, ""), "2");
    }
}
