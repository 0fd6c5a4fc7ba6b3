//! Pairwise line bucketing: the production O(n²) strategy.
//!
//! Every unordered pair of distinct points defines a line key. With k >= 3
//! collinear points there are k*(k-1)/2 >= 3 pairs mapping to the same key,
//! so the key is seen more than once and its bucket flips to "supported";
//! a line carried by only two points is seen exactly once and stays out of
//! the result.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use nalgebra::Vector2;

use super::types::{Line, LineKey};
use super::util::{dedup_exact, sort_lines};

/// Distinct lines passing through three or more of `points`.
///
/// Duplicate points are ignored, and fewer than three distinct points yield
/// an empty result rather than an error. Non-finite coordinates are
/// discarded. The result is sorted by `(slope, intercept)` for stable
/// presentation; vertical lines order last under the infinity sentinel.
///
/// O(n²) time over the n distinct points, O(n²) worst-case space for the
/// line buckets.
pub fn find_lines(points: &[Vector2<f64>]) -> Vec<Line> {
    let pts = dedup_exact(points);
    if pts.len() < 3 {
        return Vec::new();
    }
    let mut buckets: HashMap<LineKey, bool> = HashMap::new();
    for i in 0..pts.len() - 1 {
        for j in i + 1..pts.len() {
            match buckets.entry(LineKey::through(&pts[i], &pts[j])) {
                // First pair on this line: two supporters so far.
                Entry::Vacant(slot) => {
                    slot.insert(false);
                }
                // Any repeat means a third (or later) collinear point.
                Entry::Occupied(mut slot) => {
                    slot.insert(true);
                }
            }
        }
    }
    let mut out: Vec<Line> = buckets
        .into_iter()
        .filter_map(|(key, supported)| supported.then(|| key.to_line()))
        .collect();
    sort_lines(&mut out);
    out
}
