// Copyright 2026 the Argand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// Raises a positive distance to the nearest "smooth" value at or above it.
///
/// The distance is normalized into `[1, 10)` and its mantissa snapped up to
/// one of `1, 2, 2.5, 5, 10`, giving spacings such as `0.25`, `1`, `20`, `50`.
/// Zero, negative and non-finite inputs are returned unchanged.
#[must_use]
pub fn raise_smooth(distance: f64) -> f64 {
    if !(distance > 0.0 && distance.is_finite()) {
        return distance;
    }

    let mut d = distance;
    let mut exponent = 0_i32;
    while d < 1.0 {
        d *= 10.0;
        exponent -= 1;
    }
    while d >= 10.0 {
        d /= 10.0;
        exponent += 1;
    }

    d = if d > 5.0 {
        10.0
    } else if d > 2.5 {
        5.0
    } else if d > 2.0 {
        2.5
    } else if d > 1.0 {
        2.0
    } else {
        d
    };

    // Scale back one decade at a time so results like 0.1 and 200 come out
    // as the same doubles a literal would.
    while exponent < 0 {
        d /= 10.0;
        exponent += 1;
    }
    while exponent > 0 {
        d *= 10.0;
        exponent -= 1;
    }
    d
}

/// Which axis a tick belongs to, for labeling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis; labels are plain numbers.
    Real,
    /// Vertical axis; labels carry an `i` suffix.
    Imaginary,
}

/// A single tick on an axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Plane coordinate of the tick along its axis.
    pub value: f64,
    /// Spacing of the tick run this tick belongs to.
    pub spacing: f64,
}

impl Tick {
    /// Returns `true` for the tick at zero.
    #[must_use]
    pub fn is_origin(&self) -> bool {
        self.value == 0.0
    }

    /// The text drawn next to the tick.
    #[must_use]
    pub fn label(&self, axis: Axis) -> String {
        let mut label = format_tick(self.value, self.spacing);
        if axis == Axis::Imaginary {
            label.push('i');
        }
        label
    }
}

/// Iterator over the multiples of a spacing inside a half-open interval.
///
/// Created by [`ticks`]. The number of ticks is fixed up front, and the run
/// also ends as soon as a value fails to grow, which happens once the tick
/// index outgrows the precision of `f64`.
#[derive(Clone, Debug)]
pub struct Ticks {
    next_index: f64,
    remaining: usize,
    last: f64,
    end: f64,
    spacing: f64,
}

impl Iterator for Ticks {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        if self.remaining == 0 {
            return None;
        }
        // Adding zero turns a -0.0 index into 0.0.
        let value = self.next_index * self.spacing + 0.0;
        if value.is_nan() || value >= self.end || value <= self.last {
            self.remaining = 0;
            return None;
        }
        self.remaining -= 1;
        self.last = value;
        self.next_index += 1.0;
        Some(Tick {
            value,
            spacing: self.spacing,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

/// Enumerates ticks at every multiple of `spacing` in `range`.
///
/// The first tick is `ceil(range.start / spacing) * spacing`; ticks stop
/// before `range.end`. Values are computed from the tick index rather than
/// accumulated, so long runs do not drift. A non-positive or non-finite
/// spacing, or an empty range, yields nothing. Far from the origin, where
/// neighbouring multiples are no longer distinct doubles, the run stops at
/// the last distinct value.
#[must_use]
pub fn ticks(range: Range<f64>, spacing: f64) -> Ticks {
    let usable = spacing > 0.0 && spacing.is_finite() && range.start.is_finite();
    let first = if usable {
        (range.start / spacing).ceil()
    } else {
        0.0
    };
    let count = if usable {
        ((range.end - first * spacing) / spacing).ceil()
    } else {
        0.0
    };
    Ticks {
        next_index: first,
        remaining: saturating_count(count),
        last: f64::NEG_INFINITY,
        end: range.end,
        spacing,
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "count is a whole number, saturated at usize::MAX"
)]
fn saturating_count(count: f64) -> usize {
    if count.is_nan() || count <= 0.0 {
        0
    } else if count >= usize::MAX as f64 {
        usize::MAX
    } else {
        count as usize
    }
}

/// Formats a tick value with as many fractional digits as `spacing` needs.
///
/// A spacing of `0.25` prints two digits, `0.5` one and `20` none. Negative
/// zero prints as `0`.
#[must_use]
pub fn format_tick(value: f64, spacing: f64) -> String {
    let digits = fraction_digits(spacing);
    let text = format!("{value:.digits$}");
    if text.trim_start_matches('-').bytes().all(|b| b == b'0' || b == b'.') {
        return format!("{:.digits$}", 0.0);
    }
    text
}

fn fraction_digits(spacing: f64) -> usize {
    if !(spacing > 0.0 && spacing.is_finite()) {
        return 0;
    }
    let mut s = spacing;
    let mut digits = 0;
    while s < 1.0 - 1e-9 {
        s *= 10.0;
        digits += 1;
    }
    // Mantissas such as 2.5 need one more digit than their decade.
    let decade = digits;
    while digits < decade + 3 && (s - s.round()).abs() > s * 1e-9 {
        s *= 10.0;
        digits += 1;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::{Axis, format_tick, raise_smooth, ticks};

    #[test]
    fn raise_smooth_literal_cases() {
        assert_eq!(raise_smooth(0.6), 1.0);
        assert_eq!(raise_smooth(3.2), 5.0);
        assert_eq!(raise_smooth(120.0), 200.0);
        assert_eq!(raise_smooth(0.75), 1.0);
        assert_eq!(raise_smooth(2.2), 2.5);
        assert_eq!(raise_smooth(0.021), 0.025);
        assert_eq!(raise_smooth(1.0), 1.0);
        assert_eq!(raise_smooth(10.0), 10.0);
        assert_eq!(raise_smooth(5.0), 5.0);
        assert_eq!(raise_smooth(7.0), 10.0);
    }

    #[test]
    fn raise_smooth_is_a_nice_upper_bound() {
        let mut previous = 0.0;
        let mut d = 1e-7;
        while d < 1e7 {
            let smooth = raise_smooth(d);
            assert!(smooth >= d * (1.0 - 1e-12), "{smooth} < {d}");
            assert!(smooth >= previous, "not monotone at {d}");
            previous = smooth;

            let mut mantissa = smooth;
            while mantissa >= 10.0 - 1e-9 {
                mantissa /= 10.0;
            }
            while mantissa < 1.0 - 1e-9 {
                mantissa *= 10.0;
            }
            assert!(
                [1.0, 2.0, 2.5, 5.0, 10.0]
                    .iter()
                    .any(|m| (mantissa - m).abs() < 1e-9),
                "{smooth} has mantissa {mantissa}"
            );
            d *= 1.37;
        }
    }

    #[test]
    fn raise_smooth_is_total() {
        assert_eq!(raise_smooth(0.0), 0.0);
        assert_eq!(raise_smooth(-4.0), -4.0);
        assert!(raise_smooth(f64::NAN).is_nan());
        assert_eq!(raise_smooth(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn ticks_start_at_first_multiple_and_exclude_end() {
        let values: Vec<f64> = ticks(-1.3..1.0, 0.5).map(|t| t.value).collect();
        assert_eq!(values, [-1.0, -0.5, 0.0, 0.5]);

        let values: Vec<f64> = ticks(20.0..100.0, 20.0).map(|t| t.value).collect();
        assert_eq!(values, [20.0, 40.0, 60.0, 80.0]);
    }

    #[test]
    fn ticks_are_total_over_degenerate_input() {
        assert_eq!(ticks(5.0..1.0, 1.0).count(), 0);
        assert_eq!(ticks(0.0..10.0, 0.0).count(), 0);
        assert_eq!(ticks(0.0..10.0, -1.0).count(), 0);
        assert_eq!(ticks(0.0..10.0, f64::NAN).count(), 0);
        assert_eq!(ticks(f64::NAN..10.0, 1.0).count(), 0);
    }

    #[test]
    fn ticks_end_where_doubles_run_out() {
        // Beyond 2^53 consecutive integers are no longer all representable.
        let run: Vec<f64> = ticks(9_007_199_254_740_987.0..9_007_199_254_740_996.0, 1.0)
            .map(|t| t.value)
            .collect();
        assert!(!run.is_empty());
        assert!(run.len() <= 9, "{} ticks", run.len());
        assert!(run.windows(2).all(|w| w[0] < w[1]));

        // Around 1.0 a spacing of 1e-17 is below the resolution of `f64`.
        assert!(ticks(1.0..1.0 + 1e-14, 1e-17).count() <= 2);
    }

    #[test]
    fn tick_count_is_known_up_front() {
        assert_eq!(ticks(-1.3..1.0, 0.5).size_hint(), (0, Some(4)));
        assert_eq!(ticks(0.0..1e300, 1e-300).size_hint(), (0, Some(usize::MAX)));
    }

    #[test]
    fn tick_values_do_not_drift() {
        let last = ticks(0.0..100.0, 0.1).last().map(|t| t.label(Axis::Real));
        assert_eq!(last.as_deref(), Some("99.9"));
    }

    #[test]
    fn labels_follow_spacing_precision() {
        assert_eq!(format_tick(0.5, 0.25), "0.50");
        assert_eq!(format_tick(0.75, 0.25), "0.75");
        assert_eq!(format_tick(0.3, 0.1), "0.3");
        assert_eq!(format_tick(0.30000000000000004, 0.1), "0.3");
        assert_eq!(format_tick(-40.0, 20.0), "-40");
        assert_eq!(format_tick(-0.0, 1.0), "0");
        assert_eq!(format_tick(-1e-17, 0.5), "0.0");
    }

    #[test]
    fn tiny_spacings_keep_labels_apart() {
        let labels: Vec<String> = ticks(0.5e-20..3.5e-20, 1e-20)
            .map(|t| t.label(Axis::Real))
            .collect();
        assert_eq!(labels.len(), 3);
        assert!(labels[0] != labels[1] && labels[1] != labels[2], "{labels:?}");
        assert!(labels.iter().all(|l| l.starts_with("0.0000000000000000000")));
    }

    #[test]
    fn imaginary_labels_carry_suffix_and_zero_is_positive() {
        let labels: Vec<String> = ticks(-0.9..1.1, 1.0)
            .map(|t| t.label(Axis::Imaginary))
            .collect();
        assert_eq!(labels, ["0i", "1i"]);

        let origin = ticks(-0.9..1.1, 1.0).next();
        assert!(origin.is_some_and(|t| t.is_origin()));
    }
}
