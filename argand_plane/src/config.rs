// Copyright 2026 the Argand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;
use peniko::Color;
use peniko::color::palette::css;

/// Drawing constants and initial view settings for a [`crate::Plane`].
///
/// All distances are in pixels unless stated otherwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneConfig {
    /// Gap between the axis tips and the viewport border.
    pub axis_inset: f64,
    /// Approximate distance between neighbouring axis ticks.
    pub tick_spacing_px: f64,
    /// Approximate font height; tick labels sit this far below the x axis.
    pub font_height: f64,
    /// Size of the arrowheads at the axis ends.
    pub arrow_size: f64,
    /// Length of tick marks and half-size of number markers.
    pub mark_length: f64,
    /// Offset of a number's label from its marker.
    pub label_offset: Vec2,
    /// Pixels per unit after construction and after a reset.
    pub initial_scale: f64,
    /// Smallest scale a zoom can reach.
    pub min_scale: f64,
    /// Background fill.
    pub background: Color,
    /// Color of markers, labels, ticks and piclets.
    pub ink: Color,
    /// Color of the axis lines.
    pub axis_color: Color,
    /// Fill of an arrowhead whose extreme lies beyond the visible edge.
    pub highlight: Color,
}

impl Default for PlaneConfig {
    fn default() -> Self {
        Self {
            axis_inset: 30.0,
            tick_spacing_px: 60.0,
            font_height: 18.0,
            arrow_size: 10.0,
            mark_length: 4.0,
            label_offset: Vec2::new(2.0, 2.0),
            initial_scale: 80.0,
            min_scale: 1e-12,
            background: css::WHITE,
            ink: css::BLUE,
            axis_color: Color::from_rgb8(0xcc, 0xcc, 0xcc),
            highlight: css::RED,
        }
    }
}
