//! Contour geometry: level selection, grid sampling and marching squares.
//!
//! Everything here works in plot coordinates on a node grid: `z[row][col]` sits at
//! `(xs[col], ys[row])`. Missing values are `NaN` and leave holes.

/// Upper bound on the number of contour levels, auto or explicit.
pub const MAX_LEVELS: usize = 1000;

/// Evenly spaced contour levels `start, start + size, ..., end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Levels {
    pub start: f64,
    pub end: f64,
    pub size: f64,
}

impl Levels {
    /// At most `max_count` levels on "nice" values strictly inside `(zmin, zmax)`.
    pub fn auto(zmin: f64, zmax: f64, max_count: usize) -> Self {
        let span = zmax - zmin;
        if !(span > 0.0) || !span.is_finite() {
            let mid = if zmin.is_finite() { zmin } else { 0.0 };
            return Levels {
                start: mid,
                end: mid,
                size: 1.0,
            };
        }
        let size = nice_step(span / max_count.clamp(1, MAX_LEVELS) as f64);
        let mut start = (zmin / size).floor() * size + size;
        let mut end = (zmax / size).ceil() * size - size;
        if end < start {
            start = (zmin + zmax) / 2.0;
            end = start;
        }
        start = snap(start, size);
        end = snap(end, size);
        Levels { start, end, size }
    }

    /// Number of levels, never more than [`MAX_LEVELS`].
    pub fn count(&self) -> usize {
        if !(self.size > 0.0) || !(self.end >= self.start) {
            return 1;
        }
        let steps = ((self.end - self.start) / self.size + 1e-9).floor();
        if steps.is_finite() && steps < MAX_LEVELS as f64 {
            steps as usize + 1
        } else {
            MAX_LEVELS
        }
    }

    /// The level values, ascending.
    pub fn values(&self) -> Vec<f64> {
        if self.count() == 1 {
            return vec![self.start];
        }
        (0..self.count())
            .map(|i| snap(self.start + i as f64 * self.size, self.size))
            .collect()
    }

    /// Index of the band `z` falls into: 0 below the first level, `count()` above the last.
    pub fn band(&self, z: f64) -> usize {
        if !(z >= self.start) || !(self.size > 0.0) {
            return 0;
        }
        let idx = ((z - self.start) / self.size).floor() + 1.0;
        let count = self.count();
        if idx < count as f64 { idx as usize } else { count }
    }
}

/// Smallest value from {1, 2, 2.5, 5} x 10^k that is not below `rough`.
pub fn nice_step(rough: f64) -> f64 {
    if !(rough > 0.0) || !rough.is_finite() {
        return 1.0;
    }
    let base = 10f64.powf(rough.log10().floor());
    for m in [1.0, 2.0, 2.5, 5.0, 10.0] {
        if base * m >= rough * (1.0 - 1e-9) {
            return base * m;
        }
    }
    base * 10.0
}

fn snap(v: f64, size: f64) -> f64 {
    let q = (v / size).round() * size;
    if (q - v).abs() < size * 1e-9 { q } else { v }
}

/// Node coordinates for `count` values along one axis.
///
/// `coords` may hold one value per node, one more (cell edges, converted to midpoints) or be
/// empty or mismatched (node indices are used).
pub fn node_positions(coords: &[f64], count: usize) -> Vec<f64> {
    if coords.len() == count {
        coords.to_vec()
    } else if coords.len() == count + 1 {
        coords.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect()
    } else {
        (0..count).map(|i| i as f64).collect()
    }
}

/// Range of the finite values of a grid, `None` when there are none.
pub fn z_range(z: &[Vec<f64>]) -> Option<(f64, f64)> {
    let mut it = z.iter().flatten().copied().filter(|v| v.is_finite());
    let first = it.next()?;
    Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}

/// One sampled rectangle of the coloured surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Patch {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub z: f64,
}

/// Split every grid cell into `k x k` patches carrying the bilinear value at their centre.
pub fn sample_patches(xs: &[f64], ys: &[f64], z: &[Vec<f64>], k: usize) -> Vec<Patch> {
    let k = k.max(1);
    let mut out = Vec::new();
    for row in 0..ys.len().saturating_sub(1) {
        for col in 0..xs.len().saturating_sub(1) {
            let (Some(z00), Some(z10), Some(z01), Some(z11)) = (
                at(z, row, col),
                at(z, row, col + 1),
                at(z, row + 1, col),
                at(z, row + 1, col + 1),
            ) else {
                continue;
            };
            let (xa, xb) = (xs[col], xs[col + 1]);
            let (ya, yb) = (ys[row], ys[row + 1]);
            for sj in 0..k {
                for si in 0..k {
                    let u = (si as f64 + 0.5) / k as f64;
                    let v = (sj as f64 + 0.5) / k as f64;
                    let zv = z00 * (1.0 - u) * (1.0 - v)
                        + z10 * u * (1.0 - v)
                        + z01 * (1.0 - u) * v
                        + z11 * u * v;
                    out.push(Patch {
                        x0: xa + (xb - xa) * si as f64 / k as f64,
                        x1: xa + (xb - xa) * (si + 1) as f64 / k as f64,
                        y0: ya + (yb - ya) * sj as f64 / k as f64,
                        y1: ya + (yb - ya) * (sj + 1) as f64 / k as f64,
                        z: zv,
                    });
                }
            }
        }
    }
    out
}

fn at(z: &[Vec<f64>], row: usize, col: usize) -> Option<f64> {
    z.get(row)
        .and_then(|r| r.get(col))
        .copied()
        .filter(|v| v.is_finite())
}

pub type Segment = ((f64, f64), (f64, f64));

/// Iso-line segments of `level` by marching squares; saddles are split by the cell mean.
pub fn iso_segments(xs: &[f64], ys: &[f64], z: &[Vec<f64>], level: f64) -> Vec<Segment> {
    let mut out = Vec::new();
    for row in 0..ys.len().saturating_sub(1) {
        for col in 0..xs.len().saturating_sub(1) {
            // Corners counter-clockwise from bottom-left.
            let corners = [
                (xs[col], ys[row], at(z, row, col)),
                (xs[col + 1], ys[row], at(z, row, col + 1)),
                (xs[col + 1], ys[row + 1], at(z, row + 1, col + 1)),
                (xs[col], ys[row + 1], at(z, row + 1, col)),
            ];
            let mut vals = [0.0; 4];
            let mut complete = true;
            for (i, c) in corners.iter().enumerate() {
                match c.2 {
                    Some(v) => vals[i] = v,
                    None => complete = false,
                }
            }
            if !complete {
                continue;
            }

            let case = vals
                .iter()
                .enumerate()
                .fold(0u8, |acc, (i, v)| if *v >= level { acc | (1 << i) } else { acc });
            if case == 0 || case == 15 {
                continue;
            }

            let cross = |a: usize, b: usize| -> (f64, f64) {
                let (xa, ya, _) = corners[a];
                let (xb, yb, _) = corners[b];
                let t = (level - vals[a]) / (vals[b] - vals[a]);
                (xa + (xb - xa) * t, ya + (yb - ya) * t)
            };
            // Edges: 0 bottom (0-1), 1 right (1-2), 2 top (2-3), 3 left (3-0).
            let edge = |e: usize| match e {
                0 => cross(0, 1),
                1 => cross(1, 2),
                2 => cross(2, 3),
                _ => cross(3, 0),
            };
            let mean = vals.iter().sum::<f64>() / 4.0;
            let pairs: &[(usize, usize)] = match case {
                1 | 14 => &[(3, 0)],
                2 | 13 => &[(0, 1)],
                3 | 12 => &[(3, 1)],
                4 | 11 => &[(1, 2)],
                6 | 9 => &[(0, 2)],
                7 | 8 => &[(2, 3)],
                5 if mean >= level => &[(3, 2), (0, 1)],
                5 => &[(3, 0), (1, 2)],
                10 if mean >= level => &[(3, 0), (1, 2)],
                10 => &[(0, 1), (2, 3)],
                _ => &[],
            };
            out.extend(pairs.iter().map(|&(a, b)| (edge(a), edge(b))));
        }
    }
    out
}

/// Where to print the label of one iso-line: the midpoint of the segment closest to `centre`.
pub fn label_anchor(segments: &[Segment], centre: (f64, f64)) -> Option<(f64, f64)> {
    segments
        .iter()
        .map(|(a, b)| ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0))
        .min_by(|p, q| {
            let dp = (p.0 - centre.0).powi(2) + (p.1 - centre.1).powi(2);
            let dq = (q.0 - centre.0).powi(2) + (q.1 - centre.1).powi(2);
            dp.total_cmp(&dq)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_steps() {
        assert_eq!(nice_step(0.7), 1.0);
        assert_eq!(nice_step(1.3), 2.0);
        assert_eq!(nice_step(2.2), 2.5);
        assert_eq!(nice_step(3.0), 5.0);
        assert_eq!(nice_step(40.0), 50.0);
        assert_eq!(nice_step(0.0), 1.0);
    }

    #[test]
    fn auto_levels_stay_inside_the_data() {
        let levels = Levels::auto(0.0, 10.0, 15);
        assert_eq!(levels.size, 1.0);
        assert_eq!(levels.values(), (1..=9).map(f64::from).collect::<Vec<_>>());
        assert!(levels.values().len() <= 15);

        let few = Levels::auto(0.0, 10.0, 4);
        assert_eq!(few.size, 2.5);
        assert_eq!(few.values(), vec![2.5, 5.0, 7.5]);
    }

    #[test]
    fn flat_data_gets_one_level() {
        let levels = Levels::auto(3.0, 3.0, 15);
        assert_eq!(levels.values(), vec![3.0]);
    }

    #[test]
    fn bands_bracket_the_levels() {
        let levels = Levels::auto(0.0, 10.0, 4);
        assert_eq!(levels.band(1.0), 0);
        assert_eq!(levels.band(2.5), 1);
        assert_eq!(levels.band(6.0), 2);
        assert_eq!(levels.band(9.9), 3);
        assert_eq!(levels.band(f64::NAN), 0);
    }

    #[test]
    fn level_count_is_capped() {
        let many = Levels::auto(0.0, 1.0, 1_000_000);
        assert!(many.count() <= MAX_LEVELS);
        assert_eq!(many.values().len(), many.count());

        let explicit = Levels {
            start: 0.0,
            end: 1.0,
            size: 1e-12,
        };
        assert_eq!(explicit.count(), MAX_LEVELS);
        assert_eq!(explicit.band(0.5), MAX_LEVELS);
        assert_eq!(explicit.values().len(), MAX_LEVELS);
    }

    #[test]
    fn edges_become_midpoints() {
        assert_eq!(node_positions(&[0.0, 2.0, 4.0], 2), vec![1.0, 3.0]);
        assert_eq!(node_positions(&[5.0, 6.0], 2), vec![5.0, 6.0]);
        assert_eq!(node_positions(&[], 3), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn single_cell_crossing() {
        let z = vec![vec![0.0, 2.0], vec![0.0, 2.0]];
        let segs = iso_segments(&[0.0, 1.0], &[0.0, 1.0], &z, 1.0);
        assert_eq!(segs.len(), 1);
        let ((x0, _), (x1, _)) = segs[0];
        assert!((x0 - 0.5).abs() < 1e-12 && (x1 - 0.5).abs() < 1e-12);
    }

    #[test]
    fn missing_values_leave_holes() {
        let z = vec![vec![0.0, f64::NAN], vec![0.0, 2.0]];
        assert!(iso_segments(&[0.0, 1.0], &[0.0, 1.0], &z, 1.0).is_empty());
        assert!(sample_patches(&[0.0, 1.0], &[0.0, 1.0], &z, 2).is_empty());
        assert_eq!(z_range(&z), Some((0.0, 2.0)));
    }

    #[test]
    fn patches_cover_the_cell() {
        let z = vec![vec![0.0, 4.0], vec![0.0, 4.0]];
        let patches = sample_patches(&[0.0, 2.0], &[0.0, 1.0], &z, 2);
        assert_eq!(patches.len(), 4);
        assert_eq!(patches[0].z, 1.0);
        assert_eq!(patches[1].z, 3.0);
        assert_eq!(patches[3].x1, 2.0);
    }
}
