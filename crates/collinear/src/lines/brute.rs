//! Exhaustive triple enumeration: the O(n³) reference strategy.
//!
//! Checks every 3-combination of the deduplicated points with the exact
//! cross-product identity and canonicalizes each collinear triple through
//! the same key derivation as the pairwise finder. Kept as the verification
//! oracle for [`find_lines`](super::find_lines); never the production path.

use std::collections::HashSet;

use nalgebra::Vector2;

use super::types::{ExactPoint, Line, LineKey};
use super::util::{dedup_exact, sort_lines};
use crate::exact;

/// Distinct lines through three or more of `points`, by brute force.
///
/// Agrees with [`find_lines`](super::find_lines) on every input; output
/// contract (dedup, empty-below-three, sorting) is identical.
pub fn find_lines_exhaustive(points: &[Vector2<f64>]) -> Vec<Line> {
    let pts = dedup_exact(points);
    if pts.len() < 3 {
        return Vec::new();
    }
    let mut lines: HashSet<LineKey> = HashSet::new();
    for i in 0..pts.len() - 2 {
        for j in i + 1..pts.len() - 1 {
            for k in j + 1..pts.len() {
                if collinear_exact(&pts[i], &pts[j], &pts[k]) {
                    lines.insert(LineKey::through(&pts[i], &pts[j]));
                }
            }
        }
    }
    let mut out: Vec<Line> = lines.into_iter().map(|key| key.to_line()).collect();
    sort_lines(&mut out);
    out
}

/// Exact collinearity of three points.
///
/// False whenever a coordinate is non-finite.
pub fn is_collinear(p0: Vector2<f64>, p1: Vector2<f64>, p2: Vector2<f64>) -> bool {
    let exact_pt = |p: Vector2<f64>| Some((exact::decimal(p.x)?, exact::decimal(p.y)?));
    match (exact_pt(p0), exact_pt(p1), exact_pt(p2)) {
        (Some(a), Some(b), Some(c)) => collinear_exact(&a, &b, &c),
        _ => false,
    }
}

/// `(x2-x1)(y0-y1) == (x0-x1)(y2-y1)`, evaluated without rounding.
pub(crate) fn collinear_exact(p0: &ExactPoint, p1: &ExactPoint, p2: &ExactPoint) -> bool {
    (&p2.0 - &p1.0) * (&p0.1 - &p1.1) == (&p0.0 - &p1.0) * (&p2.1 - &p1.1)
}

/// Signed area of the parallelogram spanned by `b - a` and `c - a`.
///
/// Zero iff the three points are collinear, up to floating-point error; a
/// fast inexact convenience next to [`is_collinear`].
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}
