//! Exact decimal coordinates.
//!
//! Purpose
//! - Line keys must be bit-identical for mathematically equal slopes and
//!   intercepts, so all key arithmetic runs on exact rationals derived from
//!   the shortest round-trip decimal form of each input float. Only the
//!   final externally-visible values convert back to f64.
//!
//! Why decimal literals, not raw bit patterns
//! - `0.1 + 0.1 + 0.1 != 0.3` in binary floating point, yet the decimal
//!   literals behind those values are exactly proportional. Parsing the
//!   shortest decimal form recovers the number the caller wrote, so points
//!   seeded from decimal data land exactly on their intended line.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{pow, ToPrimitive};

/// Exact rational value of `v`'s shortest round-trip decimal form.
///
/// `None` for NaN and infinities, which have no decimal form.
pub fn decimal(v: f64) -> Option<BigRational> {
    if !v.is_finite() {
        return None;
    }
    parse_literal(&format!("{v}"))
}

/// Nearest f64 to an exact rational.
pub fn to_f64(r: &BigRational) -> f64 {
    r.to_f64().unwrap_or(f64::NAN)
}

/// Parse a plain decimal literal (optional sign, optional fraction,
/// optional exponent) into an exact rational.
fn parse_literal(s: &str) -> Option<BigRational> {
    let (mantissa, exp) = match s.find(|c| c == 'e' || c == 'E') {
        Some(i) => (&s[..i], s[i + 1..].parse::<i64>().ok()?),
        None => (s, 0i64),
    };
    let (negative, digits) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, f),
        None => (digits, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }
    let mut unscaled: BigInt = format!("{int_part}{frac_part}").parse().ok()?;
    if negative {
        unscaled = -unscaled;
    }
    let ten = BigInt::from(10);
    // Net power of ten dividing the unscaled digits.
    let scale = frac_part.len() as i64 - exp;
    Some(if scale >= 0 {
        BigRational::new(unscaled, pow(ten, scale as usize))
    } else {
        BigRational::from_integer(unscaled * pow(ten, (-scale) as usize))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    #[test]
    fn sums_of_tenths_are_exact() {
        // The artifact this module exists to avoid:
        assert_ne!(0.1 + 0.1 + 0.1, 0.3);
        let tenth = decimal(0.1).unwrap();
        let sum = &tenth + &tenth + &tenth;
        assert_eq!(sum, decimal(0.3).unwrap());
        assert_eq!(to_f64(&sum), 0.3);
    }

    #[test]
    fn integers_and_signs_parse() {
        assert_eq!(decimal(4.0).unwrap(), BigRational::from_integer(4.into()));
        assert_eq!(
            decimal(-12.5).unwrap(),
            BigRational::new((-25).into(), 2.into())
        );
        assert!(decimal(-0.0).unwrap().is_zero());
        assert_eq!(decimal(0.0), decimal(-0.0));
    }

    #[test]
    fn extreme_magnitudes_parse() {
        assert_eq!(to_f64(&decimal(1e21).unwrap()), 1e21);
        assert_eq!(to_f64(&decimal(1e-10).unwrap()), 1e-10);
        assert_eq!(to_f64(&decimal(f64::MAX).unwrap()), f64::MAX);
    }

    #[test]
    fn non_finite_is_rejected() {
        assert_eq!(decimal(f64::NAN), None);
        assert_eq!(decimal(f64::INFINITY), None);
        assert_eq!(decimal(f64::NEG_INFINITY), None);
    }

    #[test]
    fn round_trips_shortest_form() {
        for v in [0.1, -3.75, 12345.6789, 2.0f64.powi(-40), 1.0 / 3.0] {
            assert_eq!(to_f64(&decimal(v).unwrap()), v);
        }
    }
}
