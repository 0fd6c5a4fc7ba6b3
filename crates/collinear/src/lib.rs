//! Collinear-line detection over planar point sets.
//!
//! Purpose
//! - Given a finite collection of 2D points, report every line passing
//!   through three or more of them, one canonical (slope, intercept)
//!   descriptor per line. Vertical lines carry an infinity sentinel slope
//!   and their constant x-coordinate.
//! - Line keys are derived in exact decimal-rational arithmetic, so
//!   mathematically equal lines collapse to a single entry no matter which
//!   point pair produced them or in which order the points arrived.
//!
//! Entry points
//! - [`find_lines`]: typed core, `&[Vec2<f64>]` in, `Vec<Line>` out.
//! - [`find_lines_value`]: loosely-typed boundary with full input
//!   validation, for callers holding untyped (JSON-shaped) data.
//! - [`find_lines_exhaustive`]: O(n³) reference finder the production path
//!   is verified against.

pub mod exact;
pub mod input;
pub mod lines;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use input::{find_lines_value, ElementIssue, InputError};
pub use lines::{cross, find_lines, find_lines_exhaustive, is_collinear, Line};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::input::{find_lines_value, ElementIssue, InputError};
    pub use crate::lines::rand::{
        draw_axis_parallel, draw_line_clusters, draw_mixed, draw_scatter, shuffle, Axis,
        AxisParallelCfg, ClusterCfg, ReplayToken, ScatterCfg,
    };
    pub use crate::lines::{cross, find_lines, find_lines_exhaustive, is_collinear, Line};
    pub use nalgebra::Vector2 as Vec2;
}
