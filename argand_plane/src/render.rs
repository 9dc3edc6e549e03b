// Copyright 2026 the Argand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene renderer: axes, plotted numbers and piclets in pixel space.

use argand_view2d::{
    Axis, Extremes, PlaneTransform, ViewState, VisibleBounds, raise_smooth, ticks,
};
use kurbo::{BezPath, Point, Size, Vec2};

use crate::piclet::rectangle_outline;
use crate::surface::Surface;
use crate::{Complex, Piclet, PlaneConfig};

/// Draws one frame of the plane onto a [`Surface`].
///
/// A renderer is built per frame; it freezes the transform and visible bounds
/// for the current view and viewport so that every element projects the same
/// way.
#[derive(Clone, Debug)]
pub struct SceneRenderer<'a> {
    config: &'a PlaneConfig,
    transform: PlaneTransform,
    bounds: VisibleBounds,
    extremes: Extremes,
}

#[derive(Clone, Copy, Debug)]
enum Direction {
    North,
    East,
    South,
    West,
}

impl<'a> SceneRenderer<'a> {
    /// Prepares a frame for `view` shown in a viewport of `viewport` pixels.
    pub fn new(
        config: &'a PlaneConfig,
        view: ViewState,
        viewport: Size,
        extremes: Extremes,
    ) -> Self {
        Self {
            config,
            transform: view.transform(viewport),
            bounds: view.visible_bounds(viewport),
            extremes,
        }
    }

    /// The frame's pixel/plane transform.
    pub fn transform(&self) -> PlaneTransform {
        self.transform
    }

    /// Plane coordinates of the frame's edges.
    pub fn bounds(&self) -> VisibleBounds {
        self.bounds
    }

    /// Tick spacing in plane units for this frame.
    pub fn tick_spacing(&self) -> f64 {
        raise_smooth(self.transform.pixels_to_math(self.config.tick_spacing_px))
    }

    /// Clears the surface and selects the ink.
    pub fn begin(&self, surface: &mut impl Surface) {
        surface.clear(self.config.background);
        surface.set_ink(self.config.ink);
    }

    /// Draws both axes with arrowheads, tick marks and tick labels.
    ///
    /// Each axis runs between the viewport edges minus the configured inset.
    /// An axis sits at zero on the other axis when zero is in view and is
    /// otherwise pinned to the nearest inset edge.
    pub fn draw_axes(&self, surface: &mut impl Surface) {
        let config = self.config;
        let t = &self.transform;
        let b = &self.bounds;
        let spacing = self.tick_spacing();
        let inset = t.pixels_to_math(config.axis_inset);

        let left = b.left + inset;
        let right = b.right - inset;
        let bottom = b.bottom + inset;
        let top = b.top - inset;
        let axis_re = pin_axis(left, right);
        let axis_im = pin_axis(bottom, top);
        let origin = t.to_pixel(Point::new(axis_re, axis_im));

        log::trace!("axes: bounds {b:?}, spacing {spacing}, crossing at {axis_re}{axis_im:+}i");

        // Real axis.
        let west = t.to_pixel(Point::new(left, axis_im));
        let east = t.to_pixel(Point::new(right, axis_im));
        surface.draw_line(west, east, config.axis_color);
        self.arrowhead(
            surface,
            east,
            Direction::East,
            self.extremes.max_real.is_some_and(|max| b.right <= max),
        );
        self.arrowhead(
            surface,
            west,
            Direction::West,
            self.extremes.min_real.is_some_and(|min| min <= b.left),
        );
        for tick in ticks(left..right, spacing) {
            let x = t.real_to_pixel_x(tick.value);
            surface.move_to(Point::new(x, origin.y));
            surface.line_to(Point::new(x, origin.y + config.mark_length));
            surface.draw_text(
                &tick.label(Axis::Real),
                Point::new(x + config.mark_length, origin.y + config.font_height),
            );
        }

        // Imaginary axis.
        let south = t.to_pixel(Point::new(axis_re, bottom));
        let north = t.to_pixel(Point::new(axis_re, top));
        surface.draw_line(south, north, config.axis_color);
        self.arrowhead(
            surface,
            north,
            Direction::North,
            self.extremes.max_imaginary.is_some_and(|max| b.top <= max),
        );
        self.arrowhead(
            surface,
            south,
            Direction::South,
            self.extremes.min_imaginary.is_some_and(|min| min <= b.bottom),
        );
        for tick in ticks(bottom..top, spacing) {
            // The real axis already labels the origin.
            if tick.is_origin() && axis_re == 0.0 {
                continue;
            }
            let label = tick.label(Axis::Imaginary);
            let y = t.imaginary_to_pixel_y(tick.value);
            surface.move_to(Point::new(origin.x, y));
            surface.line_to(Point::new(origin.x - config.mark_length, y));
            let width = surface.measure_text(&label);
            surface.draw_text(
                &label,
                Point::new(origin.x - config.mark_length - width, y + config.font_height),
            );
        }
    }

    /// Draws a marker and a label for a number. Non-finite numbers are skipped.
    pub fn draw_number(&self, surface: &mut impl Surface, number: Complex) {
        if !number.is_finite() {
            return;
        }
        let at = self.transform.to_pixel(number.to_point());
        surface.draw_cross(at, self.config.mark_length);
        surface.draw_text(&number.to_string(), at + self.config.label_offset);
    }

    /// Draws a piclet.
    ///
    /// Shapes with a non-finite coordinate are skipped; curves skip their
    /// non-finite samples and resume with a fresh move-to.
    pub fn draw_piclet<S>(&self, surface: &mut impl Surface, piclet: &Piclet<S>)
    where
        for<'s> &'s S: IntoIterator<Item = &'s Complex>,
    {
        match piclet {
            Piclet::Line { start, end } => {
                if start.is_finite() && end.is_finite() {
                    self.draw_samples(surface, [*start, *end]);
                }
            }
            Piclet::Circle { center, radius } => {
                if center.is_finite() && radius.is_finite() {
                    surface.draw_circle(
                        self.transform.to_pixel(center.to_point()),
                        self.transform.math_to_pixels(*radius),
                    );
                }
            }
            Piclet::Rectangle {
                bottom_left,
                top_right,
            } => {
                if bottom_left.is_finite() && top_right.is_finite() {
                    self.draw_samples(surface, rectangle_outline(*bottom_left, *top_right));
                }
            }
            Piclet::Curve(samples) => self.draw_samples(surface, samples.into_iter().copied()),
        }
    }

    /// Draws a polyline through `samples`, consuming them lazily.
    ///
    /// The first finite sample is a move-to and every following one a
    /// line-to. An empty sequence draws nothing.
    pub fn draw_samples(
        &self,
        surface: &mut impl Surface,
        samples: impl IntoIterator<Item = Complex>,
    ) {
        let mut pen_down = false;
        for sample in samples {
            if !sample.is_finite() {
                pen_down = false;
                continue;
            }
            let p = self.transform.to_pixel(sample.to_point());
            if pen_down {
                surface.line_to(p);
            } else {
                surface.move_to(p);
                pen_down = true;
            }
        }
    }

    fn arrowhead(&self, surface: &mut impl Surface, at: Point, direction: Direction, beyond: bool) {
        let shape = triangle(at, direction, self.config.arrow_size);
        surface.stroke_shape(&shape);
        if beyond {
            surface.fill_shape(&shape, self.config.highlight);
        }
    }
}

/// Where an axis crosses the other one: zero if `lo..=hi` contains it,
/// otherwise the nearer end.
fn pin_axis(lo: f64, hi: f64) -> f64 {
    if lo <= 0.0 && hi >= 0.0 {
        0.0
    } else if lo > 0.0 {
        lo
    } else if hi < 0.0 {
        hi
    } else {
        0.0
    }
}

/// A triangle whose base is centered on `at` and whose tip points `direction`.
fn triangle(at: Point, direction: Direction, size: f64) -> BezPath {
    let (forward, side) = match direction {
        Direction::North => (Vec2::new(0.0, -size), Vec2::new(size / 2.0, 0.0)),
        Direction::East => (Vec2::new(size, 0.0), Vec2::new(0.0, size / 2.0)),
        Direction::South => (Vec2::new(0.0, size), Vec2::new(size / 2.0, 0.0)),
        Direction::West => (Vec2::new(-size, 0.0), Vec2::new(0.0, size / 2.0)),
    };
    let mut path = BezPath::new();
    path.move_to(at + side);
    path.line_to(at + forward);
    path.line_to(at - side);
    path.close_path();
    path
}
