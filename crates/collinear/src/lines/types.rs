//! Line descriptors: the public f64 form and the exact internal key.

use num_rational::BigRational;
use num_traits::Zero;

use crate::exact;

/// A point with exact decimal-rational coordinates.
pub(crate) type ExactPoint = (BigRational, BigRational);

/// Canonical descriptor of an infinite line in the plane.
///
/// Two `Line` values are equal iff their canonical fields are equal. The
/// vertical case is an explicit discriminant rather than a magic slope;
/// [`Line::slope`] reports the `f64::INFINITY` sentinel for it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Line {
    /// `y = slope * x + intercept`.
    Sloped { slope: f64, intercept: f64 },
    /// `x = const`; no finite slope or y-intercept exists.
    Vertical { x: f64 },
}

impl Line {
    #[inline]
    pub fn is_vertical(&self) -> bool {
        matches!(self, Line::Vertical { .. })
    }

    /// Slope, with `f64::INFINITY` standing in for vertical lines.
    #[inline]
    pub fn slope(&self) -> f64 {
        match *self {
            Line::Sloped { slope, .. } => slope,
            Line::Vertical { .. } => f64::INFINITY,
        }
    }

    /// The y-intercept, or the constant x-coordinate for vertical lines.
    #[inline]
    pub fn intercept(&self) -> f64 {
        match *self {
            Line::Sloped { intercept, .. } => intercept,
            Line::Vertical { x } => x,
        }
    }

    /// The external `(slope, intercept)` pair encoding.
    #[inline]
    pub fn as_pair(&self) -> (f64, f64) {
        (self.slope(), self.intercept())
    }
}

impl From<Line> for (f64, f64) {
    fn from(line: Line) -> Self {
        line.as_pair()
    }
}

/// Exact-domain line key.
///
/// Invariant: two point pairs lying on the same mathematical line build
/// equal keys, because slope and intercept are computed without rounding.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum LineKey {
    Sloped {
        slope: BigRational,
        intercept: BigRational,
    },
    Vertical {
        x: BigRational,
    },
}

impl LineKey {
    /// Key of the line through two distinct exact points.
    pub(crate) fn through(p0: &ExactPoint, p1: &ExactPoint) -> Self {
        let dx = &p1.0 - &p0.0;
        if dx.is_zero() {
            LineKey::Vertical { x: p0.0.clone() }
        } else {
            let slope = (&p1.1 - &p0.1) / dx;
            let intercept = &p0.1 - &slope * &p0.0;
            LineKey::Sloped { slope, intercept }
        }
    }

    /// Externally-visible f64 form; the only place exactness is given up.
    pub(crate) fn to_line(&self) -> Line {
        match self {
            LineKey::Sloped { slope, intercept } => Line::Sloped {
                slope: exact::to_f64(slope),
                intercept: exact::to_f64(intercept),
            },
            LineKey::Vertical { x } => Line::Vertical {
                x: exact::to_f64(x),
            },
        }
    }
}
