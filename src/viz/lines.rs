//! Polyline geometry for scatter lines: shape interpolation, clipping and dash patterns.

/// Axis-aligned rectangle `[x0, x1] x [y0, y1]` with `x0 <= x1`, `y0 <= y1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl Rect {
    pub fn contains(&self, (x, y): (f64, f64)) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

/// Re-sample a polyline according to a plotly `line.shape`.
pub fn apply_shape(points: &[(f64, f64)], shape: &str) -> Vec<(f64, f64)> {
    if points.len() < 2 {
        return points.to_vec();
    }
    if shape == "spline" {
        return catmull_rom(points, 8);
    }
    let mut out = vec![points[0]];
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        match shape {
            "hv" => out.push((b.0, a.1)),
            "vh" => out.push((a.0, b.1)),
            "hvh" => {
                let mx = (a.0 + b.0) / 2.0;
                out.extend([(mx, a.1), (mx, b.1)]);
            }
            "vhv" => {
                let my = (a.1 + b.1) / 2.0;
                out.extend([(a.0, my), (b.0, my)]);
            }
            _ => {}
        }
        out.push(b);
    }
    out
}

/// Uniform Catmull-Rom spline through all points.
fn catmull_rom(points: &[(f64, f64)], steps: usize) -> Vec<(f64, f64)> {
    let n = points.len();
    let mut out = Vec::with_capacity((n - 1) * steps + 1);
    out.push(points[0]);
    for i in 0..n - 1 {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(n - 1)];
        for s in 1..=steps {
            let t = s as f64 / steps as f64;
            let t2 = t * t;
            let t3 = t2 * t;
            let f = |a: f64, b: f64, c: f64, d: f64| {
                0.5 * (2.0 * b
                    + (-a + c) * t
                    + (2.0 * a - 5.0 * b + 4.0 * c - d) * t2
                    + (-a + 3.0 * b - 3.0 * c + d) * t3)
            };
            out.push((f(p0.0, p1.0, p2.0, p3.0), f(p0.1, p1.1, p2.1, p3.1)));
        }
    }
    out
}

/// Clip a polyline to `rect`, returning the visible runs.
pub fn clip_polyline(points: &[(f64, f64)], rect: &Rect) -> Vec<Vec<(f64, f64)>> {
    let mut runs: Vec<Vec<(f64, f64)>> = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    if points.len() == 1 && rect.contains(points[0]) {
        return vec![points.to_vec()];
    }
    for pair in points.windows(2) {
        match clip_segment(pair[0], pair[1], rect) {
            Some((a, b)) => {
                if current.last() != Some(&a) {
                    if !current.is_empty() {
                        runs.push(std::mem::take(&mut current));
                    }
                    current.push(a);
                }
                current.push(b);
            }
            None => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Liang-Barsky segment clipping.
fn clip_segment(a: (f64, f64), b: (f64, f64), r: &Rect) -> Option<((f64, f64), (f64, f64))> {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;
    for (p, q) in [
        (-dx, a.0 - r.x0),
        (dx, r.x1 - a.0),
        (-dy, a.1 - r.y0),
        (dy, r.y1 - a.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let t = q / p;
            if p < 0.0 {
                t0 = t0.max(t);
            } else {
                t1 = t1.min(t);
            }
        }
    }
    if t0 > t1 {
        return None;
    }
    let at = |t: f64| {
        if t == 0.0 {
            a
        } else if t == 1.0 {
            b
        } else {
            (
                snap(a.0 + dx * t, r.x0, r.x1),
                snap(a.1 + dy * t, r.y0, r.y1),
            )
        }
    };
    Some((at(t0), at(t1)))
}

/// Pull values that missed a boundary by rounding error onto it.
fn snap(v: f64, lo: f64, hi: f64) -> f64 {
    let eps = (hi - lo).abs().max(1.0) * 1e-9;
    if (v - lo).abs() < eps {
        lo
    } else if (v - hi).abs() < eps {
        hi
    } else {
        v
    }
}

/// On/off lengths in px of a plotly dash name (`dot`, `dash`, `longdash`, `dashdot`,
/// `longdashdot`) or an explicit `"5px,10px"` list. Solid lines give an empty pattern.
pub fn dash_pattern(dash: &str, width: f64) -> Vec<f64> {
    let d = width.max(3.0);
    match dash {
        "dot" => vec![d, d],
        "dash" => vec![3.0 * d, 3.0 * d],
        "longdash" => vec![5.0 * d, 5.0 * d],
        "dashdot" => vec![3.0 * d, d, d, d],
        "longdashdot" => vec![5.0 * d, 2.0 * d, d, 2.0 * d],
        other => {
            let parsed: Option<Vec<f64>> = other
                .split(',')
                .map(|p| p.trim().trim_end_matches("px").trim().parse::<f64>().ok())
                .collect();
            match parsed {
                Some(p) if p.len() >= 2 && p.iter().all(|v| *v > 0.0) => p,
                _ => Vec::new(),
            }
        }
    }
}

/// Cut a pixel polyline into the "on" pieces of `pattern`.
pub fn dash_polyline(points: &[(f64, f64)], pattern: &[f64]) -> Vec<Vec<(f64, f64)>> {
    if pattern.is_empty() || points.len() < 2 {
        return vec![points.to_vec()];
    }
    let mut pieces = Vec::new();
    let mut idx = 0;
    let mut left = pattern[0];
    let mut current = vec![points[0]];
    for pair in points.windows(2) {
        let (mut a, b) = (pair[0], pair[1]);
        let mut seg = ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt();
        while seg > left {
            let t = left / seg;
            let cut = (a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t);
            if idx % 2 == 0 {
                current.push(cut);
                pieces.push(std::mem::take(&mut current));
            } else {
                current = vec![cut];
            }
            seg -= left;
            a = cut;
            idx = (idx + 1) % pattern.len();
            left = pattern[idx];
        }
        left -= seg;
        if idx % 2 == 0 {
            current.push(b);
        }
    }
    if idx % 2 == 0 && current.len() > 1 {
        pieces.push(current);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT: Rect = Rect {
        x0: 0.0,
        x1: 1.0,
        y0: 0.0,
        y1: 1.0,
    };

    #[test]
    fn step_shapes() {
        let pts = [(0.0, 0.0), (2.0, 1.0)];
        assert_eq!(apply_shape(&pts, "hv"), vec![(0.0, 0.0), (2.0, 0.0), (2.0, 1.0)]);
        assert_eq!(apply_shape(&pts, "vh"), vec![(0.0, 0.0), (0.0, 1.0), (2.0, 1.0)]);
        assert_eq!(
            apply_shape(&pts, "hvh"),
            vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (2.0, 1.0)]
        );
        assert_eq!(apply_shape(&pts, "linear"), pts.to_vec());
    }

    #[test]
    fn spline_passes_through_points() {
        let pts = [(0.0, 0.0), (1.0, 2.0), (2.0, 0.0)];
        let curve = apply_shape(&pts, "spline");
        assert_eq!(curve.len(), 17);
        assert_eq!(curve[0], (0.0, 0.0));
        let mid = curve[8];
        assert!((mid.0 - 1.0).abs() < 1e-9 && (mid.1 - 2.0).abs() < 1e-9);
    }

    #[test]
    fn clipping_keeps_visible_runs() {
        let runs = clip_polyline(&[(-1.0, 0.5), (0.5, 0.5), (2.0, 0.5)], &UNIT);
        assert_eq!(runs, vec![vec![(0.0, 0.5), (0.5, 0.5), (1.0, 0.5)]]);

        let runs = clip_polyline(&[(0.5, 0.5), (0.5, 2.0), (0.6, 2.0), (0.6, 0.5)], &UNIT);
        assert_eq!(runs.len(), 2);

        assert!(clip_polyline(&[(2.0, 2.0), (3.0, 3.0)], &UNIT).is_empty());
    }

    #[test]
    fn named_dashes_scale_with_width() {
        assert_eq!(dash_pattern("solid", 2.0), Vec::<f64>::new());
        assert_eq!(dash_pattern("dot", 2.0), vec![3.0, 3.0]);
        assert_eq!(dash_pattern("dash", 4.0), vec![12.0, 12.0]);
        assert_eq!(dash_pattern("5px, 10px", 4.0), vec![5.0, 10.0]);
    }

    #[test]
    fn dashes_cut_the_line() {
        let pieces = dash_polyline(&[(0.0, 0.0), (10.0, 0.0)], &[2.0, 3.0]);
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0], vec![(0.0, 0.0), (2.0, 0.0)]);
        assert_eq!(pieces[1], vec![(5.0, 0.0), (7.0, 0.0)]);
    }
}
