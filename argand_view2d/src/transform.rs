// Copyright 2026 the Argand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Mapping between pixel space and the complex plane for one frame.
///
/// A transform is fully determined by the plane coordinates of the top-left
/// pixel and the scale (pixels per unit). It is cheap to copy and is usually
/// obtained from [`crate::ViewState::transform`].
///
/// Projections into pixel space truncate toward zero so that ticks, markers
/// and shapes land on the same whole pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneTransform {
    left_real: f64,
    top_imaginary: f64,
    scale: f64,
}

impl PlaneTransform {
    /// Creates a transform whose top-left pixel shows `left_real + top_imaginary·i`.
    #[must_use]
    pub fn new(left_real: f64, top_imaginary: f64, scale: f64) -> Self {
        Self {
            left_real,
            top_imaginary,
            scale,
        }
    }

    /// Real part shown at pixel column zero.
    #[must_use]
    pub fn left_real(&self) -> f64 {
        self.left_real
    }

    /// Imaginary part shown at pixel row zero.
    #[must_use]
    pub fn top_imaginary(&self) -> f64 {
        self.top_imaginary
    }

    /// Pixels per unit of plane distance.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Converts a pixel position into a plane point (`x` real, `y` imaginary).
    #[must_use]
    pub fn to_complex(&self, px: Point) -> Point {
        Point::new(
            self.left_real + px.x / self.scale,
            self.top_imaginary - px.y / self.scale,
        )
    }

    /// Converts a plane point into a pixel position, truncating toward zero.
    #[must_use]
    pub fn to_pixel(&self, pt: Point) -> Point {
        Point::new(self.real_to_pixel_x(pt.x), self.imaginary_to_pixel_y(pt.y))
    }

    /// Pixel column of a real value.
    #[must_use]
    pub fn real_to_pixel_x(&self, re: f64) -> f64 {
        ((re - self.left_real) * self.scale).trunc()
    }

    /// Pixel row of an imaginary value.
    #[must_use]
    pub fn imaginary_to_pixel_y(&self, im: f64) -> f64 {
        ((self.top_imaginary - im) * self.scale).trunc()
    }

    /// Plane distance to whole pixels, rounded to nearest.
    #[must_use]
    pub fn math_to_pixels(&self, distance: f64) -> f64 {
        (distance * self.scale).round()
    }

    /// Pixel distance to plane distance.
    #[must_use]
    pub fn pixels_to_math(&self, pixels: f64) -> f64 {
        pixels / self.scale
    }
}
