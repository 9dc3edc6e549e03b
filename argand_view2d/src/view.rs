// Copyright 2026 the Argand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::transform::PlaneTransform;

/// Center and scale of a view onto the complex plane.
///
/// `ViewState` is a small `Copy` value. Every operation returns a new state
/// instead of mutating in place, so owners can snapshot, persist, or compare
/// states freely. The visible region is never stored; it is derived from the
/// center, the scale and the viewport size each time it is needed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewState {
    center_real: f64,
    center_imaginary: f64,
    scale: f64,
}

/// Plane coordinates of the edges of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleBounds {
    /// Real part at the left edge.
    pub left: f64,
    /// Real part at the right edge.
    pub right: f64,
    /// Imaginary part at the bottom edge.
    pub bottom: f64,
    /// Imaginary part at the top edge.
    pub top: f64,
}

impl ViewState {
    /// Creates a view centered on zero with the given scale in pixels per unit.
    #[must_use]
    pub fn new(scale: f64) -> Self {
        Self {
            center_real: 0.0,
            center_imaginary: 0.0,
            scale,
        }
    }

    /// Creates a view from raw parts, for example when restoring saved state.
    #[must_use]
    pub fn from_parts(center_real: f64, center_imaginary: f64, scale: f64) -> Self {
        Self {
            center_real,
            center_imaginary,
            scale,
        }
    }

    /// The plane point shown at the pixel center (`x` real, `y` imaginary).
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.center_real, self.center_imaginary)
    }

    /// Real part of the center.
    #[must_use]
    pub fn center_real(&self) -> f64 {
        self.center_real
    }

    /// Imaginary part of the center.
    #[must_use]
    pub fn center_imaginary(&self) -> f64 {
        self.center_imaginary
    }

    /// Pixels per unit of plane distance.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Plane coordinates of the viewport edges.
    ///
    /// Half extents are taken in whole pixels, so an odd-sized viewport has
    /// its center pixel on the left/upper side of the exact middle.
    #[must_use]
    pub fn visible_bounds(&self, viewport: Size) -> VisibleBounds {
        let half_width = (viewport.width / 2.0).trunc() / self.scale;
        let half_height = (viewport.height / 2.0).trunc() / self.scale;
        VisibleBounds {
            left: self.center_real - half_width,
            right: self.center_real + half_width,
            bottom: self.center_imaginary - half_height,
            top: self.center_imaginary + half_height,
        }
    }

    /// The pixel/plane transform for a viewport of the given size.
    #[must_use]
    pub fn transform(&self, viewport: Size) -> PlaneTransform {
        let bounds = self.visible_bounds(viewport);
        PlaneTransform::new(bounds.left, bounds.top, self.scale)
    }

    /// Returns the view moved by a pixel delta.
    ///
    /// A positive `delta.x` moves the center right; a positive `delta.y` moves
    /// it down, since pixel rows grow downwards.
    #[must_use]
    pub fn panned(self, delta: Vec2) -> Self {
        Self {
            center_real: self.center_real + delta.x / self.scale,
            center_imaginary: self.center_imaginary - delta.y / self.scale,
            scale: self.scale,
        }
    }

    /// Returns the view zoomed by `factor` while `anchor` keeps showing the
    /// same plane point.
    ///
    /// The pixel offset from the anchor to the view center is measured at the
    /// old scale and reapplied at the new one. The new scale is floored at
    /// `min_scale`; a non-finite result leaves the view unchanged.
    #[must_use]
    pub fn zoomed(self, anchor: Point, factor: f64, viewport: Size, min_scale: f64) -> Self {
        let scale = Self::guarded_scale(self.scale * factor, min_scale);
        if !scale.is_finite() {
            return self;
        }

        let before = self.transform(viewport);
        let fixed = before.to_complex(anchor);
        let offset_x = before.math_to_pixels(self.center_real - fixed.x);
        let offset_y = before.math_to_pixels(self.center_imaginary - fixed.y);

        Self {
            center_real: fixed.x + offset_x / scale,
            center_imaginary: fixed.y + offset_y / scale,
            scale,
        }
    }

    /// Returns the view with its scale replaced, keeping the center.
    #[must_use]
    pub fn with_scale(self, scale: f64, min_scale: f64) -> Self {
        Self {
            scale: Self::guarded_scale(scale, min_scale),
            ..self
        }
    }

    /// Floors `scale` at `min_scale`, also catching NaN.
    ///
    /// Infinite scales are passed through for the caller to reject.
    #[must_use]
    pub fn guarded_scale(scale: f64, min_scale: f64) -> f64 {
        if scale >= min_scale { scale } else { min_scale }
    }
}
