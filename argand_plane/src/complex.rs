// Copyright 2026 the Argand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::hash::{Hash, Hasher};

use kurbo::Point;

/// A complex number as plotted on the plane.
///
/// Equality and hashing compare the bit patterns of both parts, with `-0.0`
/// folded into `0.0` and every NaN folded into one, so that plotted sets keep
/// a single copy of each value (non-finite ones included).
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex {
    /// Real part.
    pub re: f64,
    /// Imaginary part.
    pub im: f64,
}

impl Complex {
    /// Zero.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates `re + im·i`.
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Returns `true` when both parts are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// The number as a plane point (`x` real, `y` imaginary).
    #[must_use]
    pub fn to_point(self) -> Point {
        Point::new(self.re, self.im)
    }

    fn key(&self) -> (u64, u64) {
        (canonical_bits(self.re), canonical_bits(self.im))
    }
}

fn canonical_bits(v: f64) -> u64 {
    if v == 0.0 {
        0
    } else if v.is_nan() {
        f64::NAN.to_bits()
    } else {
        v.to_bits()
    }
}

impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Complex {}

impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<Point> for Complex {
    fn from(pt: Point) -> Self {
        Self::new(pt.x, pt.y)
    }
}

impl From<Complex> for Point {
    fn from(c: Complex) -> Self {
        c.to_point()
    }
}

/// Prints a real number with at most ten fractional digits, trailing zeros
/// removed, and without a negative sign on zero.
pub(crate) fn format_real(v: f64) -> String {
    let text = format!("{v:.10}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" || text.is_empty() {
        return "0".into();
    }
    text.into()
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_finite() {
            return f.write_str("∞");
        }
        let re = format_real(self.re);
        let im = format_real(self.im.abs());
        let negative = self.im < 0.0 && im != "0";
        let coefficient = if im == "1" { "" } else { im.as_str() };
        match (re.as_str(), im.as_str()) {
            (_, "0") => f.write_str(&re),
            ("0", _) if negative => write!(f, "-{coefficient}i"),
            ("0", _) => write!(f, "{coefficient}i"),
            _ if negative => write!(f, "{re}-{coefficient}i"),
            _ => write!(f, "{re}+{coefficient}i"),
        }
    }
}

#[cfg(test)]
mod tests {
    use hashbrown::HashSet;

    use super::Complex;

    #[test]
    fn display_forms() {
        assert_eq!(Complex::new(3.0, 4.0).to_string(), "3+4i");
        assert_eq!(Complex::new(3.0, -4.0).to_string(), "3-4i");
        assert_eq!(Complex::new(-1.5, 0.0).to_string(), "-1.5");
        assert_eq!(Complex::new(0.0, 2.0).to_string(), "2i");
        assert_eq!(Complex::new(0.0, 1.0).to_string(), "i");
        assert_eq!(Complex::new(-0.0, -1.0).to_string(), "-i");
        assert_eq!(Complex::new(2.0, 1.0).to_string(), "2+i");
        assert_eq!(Complex::ZERO.to_string(), "0");
        assert_eq!(Complex::new(0.1 + 0.2, 1e-12).to_string(), "0.3");
        assert_eq!(Complex::new(f64::INFINITY, 0.0).to_string(), "∞");
        assert_eq!(Complex::new(0.0, f64::NAN).to_string(), "∞");
    }

    #[test]
    fn set_membership_is_by_value() {
        let mut set = HashSet::new();
        assert!(set.insert(Complex::new(1.0, 2.0)));
        assert!(!set.insert(Complex::new(1.0, 2.0)));
        assert!(set.insert(Complex::new(0.0, 0.0)));
        assert!(!set.insert(Complex::new(-0.0, 0.0)));
        assert!(set.insert(Complex::new(f64::NAN, 0.0)));
        assert!(!set.insert(Complex::new(-f64::NAN, 0.0)));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn finiteness() {
        assert!(Complex::new(1.0, -1.0).is_finite());
        assert!(!Complex::new(f64::INFINITY, 1.0).is_finite());
        assert!(!Complex::new(1.0, f64::NAN).is_finite());
    }
}
