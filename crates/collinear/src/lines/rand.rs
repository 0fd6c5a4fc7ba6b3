//! Reproducible point scenarios for tests and benchmarks.
//!
//! Model
//! - Integer lattice coordinates within configurable bounds, kept small
//!   enough that every drawn value and every seeded `y = m*x + b` stays
//!   exactly representable in f64.
//! - A candidate point is admitted only if it closes no collinear triple
//!   with already-admitted points outside its own cluster: no exact slope
//!   may repeat among the admitted points as seen from the candidate.
//!   Scenario line counts are therefore exact, not merely probable.
//! - Determinism uses a replay token `(seed, index)` mixed into one RNG.

use std::collections::{HashMap, HashSet};

use nalgebra::Vector2;
use num_rational::Ratio;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Largest admitted coordinate magnitude; integers beyond 2^53 are not
/// exactly representable in f64.
const COORD_LIMIT: i128 = 1 << 53;

/// Candidate draws allowed per requested point before a draw gives up.
const ATTEMPTS_PER_POINT: usize = 1_000;

/// Candidate draws allowed per seeded point before a cluster re-rolls its
/// line. An admitted point of an earlier cluster can land exactly on a
/// later cluster's line, and such a line can never fill; re-rolling it
/// keeps the draw total.
const ATTEMPTS_PER_CLUSTER_POINT: usize = 64;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    fn rng(self) -> StdRng {
        // SplitMix64 finalizer; keeps nearby (seed, index) pairs apart.
        let mut x = self.seed.rotate_left(17) ^ self.index.wrapping_mul(0x9e3779b97f4a7c15);
        x ^= x >> 30;
        x = x.wrapping_mul(0xbf58476d1ce4e5b9);
        x ^= x >> 27;
        x = x.wrapping_mul(0x94d049bb133111eb);
        x ^= x >> 31;
        StdRng::seed_from_u64(x)
    }
}

/// Noise scenario: points with no three collinear.
#[derive(Clone, Copy, Debug)]
pub struct ScatterCfg {
    /// Number of points to draw.
    pub count: usize,
    /// Coordinates are integers in `[-bound, bound]`.
    pub bound: i64,
}

impl Default for ScatterCfg {
    fn default() -> Self {
        Self {
            count: 200,
            bound: 10_000,
        }
    }
}

/// Seeded collinear families: `lines` random distinct lines, each carrying
/// between `points_min` and `points_max` distinct points (floor of 3).
#[derive(Clone, Copy, Debug)]
pub struct ClusterCfg {
    pub lines: usize,
    pub points_min: usize,
    pub points_max: usize,
    /// Slopes, intercepts, and x-coordinates are integers in `[-bound, bound]`.
    pub bound: i64,
}

impl Default for ClusterCfg {
    fn default() -> Self {
        Self {
            lines: 100,
            points_min: 3,
            points_max: 5,
            bound: 1_000,
        }
    }
}

/// Which axis a family of parallel lines follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal lines `y = const` (slope zero).
    X,
    /// Vertical lines `x = const` (infinite slope).
    Y,
}

/// Axis-parallel families: `lines` clusters sharing one coordinate each.
#[derive(Clone, Copy, Debug)]
pub struct AxisParallelCfg {
    pub lines: usize,
    pub points_per_line: usize,
    /// Coordinates are integers in `[-bound, bound]`.
    pub bound: i64,
}

impl Default for AxisParallelCfg {
    fn default() -> Self {
        Self {
            lines: 10,
            points_per_line: 10,
            bound: 10_000,
        }
    }
}

/// Draw `cfg.count` noise points; no three are collinear, by construction.
///
/// `None` if the bounds are too tight to place every point.
pub fn draw_scatter(cfg: ScatterCfg, tok: ReplayToken) -> Option<Vec<Vector2<f64>>> {
    let mut rng = tok.rng();
    let mut board = Board::default();
    let mut budget = ATTEMPTS_PER_POINT * cfg.count.max(1);
    fill_scatter(&mut board, &mut rng, cfg, &mut budget)?;
    Some(board.into_points())
}

/// Draw `cfg.lines` distinct seeded lines with their supporting points;
/// the admitted set carries exactly those lines and no accidental ones.
///
/// `None` if the bounds are too tight to place every point.
pub fn draw_line_clusters(cfg: ClusterCfg, tok: ReplayToken) -> Option<Vec<Vector2<f64>>> {
    let mut rng = tok.rng();
    let mut board = Board::default();
    let mut budget = ATTEMPTS_PER_POINT * (cfg.lines * cfg.points_max.max(3)).max(1);
    fill_clusters(&mut board, &mut rng, cfg, &mut budget)?;
    Some(board.into_points())
}

/// Seeded clusters plus noise in one jointly-admitted scenario: the noise
/// closes no triple with any cluster pair, so the line count stays exactly
/// `clusters.lines`.
pub fn draw_mixed(
    clusters: ClusterCfg,
    noise: ScatterCfg,
    tok: ReplayToken,
) -> Option<Vec<Vector2<f64>>> {
    let mut rng = tok.rng();
    let mut board = Board::default();
    let target = clusters.lines * clusters.points_max.max(3) + noise.count;
    let mut budget = ATTEMPTS_PER_POINT * target.max(1);
    fill_clusters(&mut board, &mut rng, clusters, &mut budget)?;
    fill_scatter(&mut board, &mut rng, noise, &mut budget)?;
    Some(board.into_points())
}

/// Draw `cfg.lines` axis-parallel clusters, each sharing one distinct
/// coordinate; cross-cluster slanted triples are rejected at admission.
///
/// `None` if the bounds are too tight to place every point.
pub fn draw_axis_parallel(
    axis: Axis,
    cfg: AxisParallelCfg,
    tok: ReplayToken,
) -> Option<Vec<Vector2<f64>>> {
    let mut rng = tok.rng();
    let bound = cfg.bound.max(1);
    let per_line = cfg.points_per_line.max(3);
    let mut board = Board::default();
    let mut shared_seen: HashSet<i64> = HashSet::new();
    let mut budget = ATTEMPTS_PER_POINT * (cfg.lines * per_line).max(1);
    for cluster in 0..cfg.lines {
        let shared = loop {
            budget = budget.checked_sub(1)?;
            let s = rng.gen_range(-bound..=bound);
            if shared_seen.insert(s) {
                break s;
            }
        };
        let mut placed = 0;
        while placed < per_line {
            budget = budget.checked_sub(1)?;
            let free = rng.gen_range(-bound..=bound);
            let p = match axis {
                Axis::X => (free, shared),
                Axis::Y => (shared, free),
            };
            if board.try_admit(p, Some(cluster)) {
                placed += 1;
            }
        }
    }
    Some(board.into_points())
}

/// Deterministically shuffle `points` in place.
pub fn shuffle(points: &mut [Vector2<f64>], tok: ReplayToken) {
    points.shuffle(&mut tok.rng());
}

fn fill_scatter(
    board: &mut Board,
    rng: &mut StdRng,
    cfg: ScatterCfg,
    budget: &mut usize,
) -> Option<()> {
    let bound = cfg.bound.max(1);
    let mut placed = 0;
    while placed < cfg.count {
        *budget = budget.checked_sub(1)?;
        let p = (rng.gen_range(-bound..=bound), rng.gen_range(-bound..=bound));
        if board.try_admit(p, None) {
            placed += 1;
        }
    }
    Some(())
}

fn fill_clusters(
    board: &mut Board,
    rng: &mut StdRng,
    cfg: ClusterCfg,
    budget: &mut usize,
) -> Option<()> {
    let bound = cfg.bound.max(1);
    let lo = cfg.points_min.max(3);
    let hi = cfg.points_max.max(lo);
    let mut seen_lines: HashSet<(i64, i64)> = HashSet::new();
    for cluster in 0..cfg.lines {
        let count = rng.gen_range(lo..=hi);
        'reroll: loop {
            let (m, b) = loop {
                *budget = budget.checked_sub(1)?;
                let m = rng.gen_range(-bound..=bound);
                let b = rng.gen_range(-bound..=bound);
                if seen_lines.insert((m, b)) {
                    break (m, b);
                }
            };
            let mark = board.len();
            let mut attempts = ATTEMPTS_PER_CLUSTER_POINT * count;
            let mut placed = 0;
            while placed < count {
                if attempts == 0 {
                    board.truncate(mark);
                    continue 'reroll;
                }
                attempts -= 1;
                *budget = budget.checked_sub(1)?;
                let x = rng.gen_range(-bound..=bound);
                let y = m as i128 * x as i128 + b as i128;
                if y.abs() > COORD_LIMIT {
                    continue;
                }
                if board.try_admit((x, y as i64), Some(cluster)) {
                    placed += 1;
                }
            }
            break 'reroll;
        }
    }
    Some(())
}

/// Admitted points with their cluster labels (`None` for noise).
#[derive(Default)]
struct Board {
    points: Vec<(i64, i64)>,
    cluster: Vec<Option<usize>>,
    occupied: HashSet<(i64, i64)>,
}

impl Board {
    /// Admit `p` for `cluster` unless it duplicates a point or closes a
    /// collinear triple with any pair not wholly inside `cluster`.
    ///
    /// Three points are collinear iff two of them show the same exact slope
    /// from the third, so one pass over the admitted points suffices.
    fn try_admit(&mut self, p: (i64, i64), cluster: Option<usize>) -> bool {
        if self.occupied.contains(&p) {
            return false;
        }
        let mut buckets: HashMap<Option<Ratio<i64>>, (usize, usize)> = HashMap::new();
        for (q, qc) in self.points.iter().zip(&self.cluster) {
            let slot = buckets.entry(slope_key(p, *q)).or_insert((0, 0));
            slot.0 += 1;
            if cluster.is_some() && *qc == cluster {
                slot.1 += 1;
            }
        }
        if buckets.values().any(|&(total, own)| total >= 2 && total != own) {
            return false;
        }
        self.points.push(p);
        self.cluster.push(cluster);
        self.occupied.insert(p);
        true
    }

    fn len(&self) -> usize {
        self.points.len()
    }

    /// Roll back to the first `len` admitted points.
    fn truncate(&mut self, len: usize) {
        while self.points.len() > len {
            if let Some(p) = self.points.pop() {
                self.occupied.remove(&p);
            }
            self.cluster.pop();
        }
    }

    fn into_points(self) -> Vec<Vector2<f64>> {
        self.points
            .into_iter()
            .map(|(x, y)| Vector2::new(x as f64, y as f64))
            .collect()
    }
}

/// Reduced slope from `p` to `q`; `None` encodes vertical.
fn slope_key(p: (i64, i64), q: (i64, i64)) -> Option<Ratio<i64>> {
    let dx = q.0 - p.0;
    if dx == 0 {
        None
    } else {
        Some(Ratio::new(q.1 - p.1, dx))
    }
}
