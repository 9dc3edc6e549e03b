// Copyright 2026 the Argand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Complex;

/// A plottable geometric object.
///
/// Lines, circles and rectangles are drawn from their closed-form geometry.
/// Anything else is a [`Piclet::Curve`] drawn as a polyline through its
/// samples; `S` is the sample container and only needs to be iterable by
/// reference, so callers can plug in lazily generated sequences.
#[derive(Clone, Debug, PartialEq)]
pub enum Piclet<S = Vec<Complex>> {
    /// Straight segment between two numbers.
    Line {
        /// First endpoint.
        start: Complex,
        /// Second endpoint.
        end: Complex,
    },
    /// Circle around a center with a radius in plane units.
    Circle {
        /// Center of the circle.
        center: Complex,
        /// Radius in plane units.
        radius: f64,
    },
    /// Axis-aligned rectangle given by two opposite corners.
    Rectangle {
        /// Corner with the smallest real and imaginary parts.
        bottom_left: Complex,
        /// Corner with the largest real and imaginary parts.
        top_right: Complex,
    },
    /// Polyline through a sequence of samples.
    Curve(S),
}

/// The corners of a rectangle in drawing order, starting and ending at the
/// bottom-left corner.
pub(crate) fn rectangle_outline(bottom_left: Complex, top_right: Complex) -> [Complex; 5] {
    let bottom_right = Complex::new(top_right.re, bottom_left.im);
    let top_left = Complex::new(bottom_left.re, top_right.im);
    [bottom_left, bottom_right, top_right, top_left, bottom_left]
}
