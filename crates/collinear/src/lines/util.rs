use std::collections::HashSet;

use nalgebra::Vector2;

use super::types::{ExactPoint, Line};
use crate::exact;

/// Convert to exact coordinates and deduplicate, preserving first-seen
/// order. Non-finite coordinates lie on no line and are discarded.
pub(crate) fn dedup_exact(points: &[Vector2<f64>]) -> Vec<ExactPoint> {
    let mut seen: HashSet<ExactPoint> = HashSet::with_capacity(points.len());
    let mut out = Vec::with_capacity(points.len());
    for p in points {
        let (Some(x), Some(y)) = (exact::decimal(p.x), exact::decimal(p.y)) else {
            continue;
        };
        let pt = (x, y);
        if seen.insert(pt.clone()) {
            out.push(pt);
        }
    }
    out
}

/// Stable presentation order: by (slope, intercept) under total ordering,
/// which places vertical lines (infinite slope) last.
pub(crate) fn sort_lines(lines: &mut [Line]) {
    lines.sort_by(|a, b| {
        a.slope()
            .total_cmp(&b.slope())
            .then_with(|| a.intercept().total_cmp(&b.intercept()))
    });
}
