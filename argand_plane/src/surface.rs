// Copyright 2026 the Argand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing surface consumed by the scene renderer.
//!
//! The renderer never rasterizes anything itself. It emits pixel-space
//! commands through [`Surface`], which a platform adapter maps onto its
//! canvas. [`DisplayList`] is a recording implementation for tests and
//! debugging.

use kurbo::{BezPath, Point};
use peniko::Color;

/// Pixel-space drawing primitives.
///
/// Primitives without an explicit color use the current ink set by
/// [`Surface::set_ink`]. `move_to`/`line_to` share one pen position.
pub trait Surface {
    /// Fills the whole surface.
    fn clear(&mut self, background: Color);
    /// Sets the color used by primitives without an explicit color.
    fn set_ink(&mut self, color: Color);
    /// Moves the pen without drawing.
    fn move_to(&mut self, p: Point);
    /// Draws from the pen position to `p` and moves the pen there.
    fn line_to(&mut self, p: Point);
    /// Draws a standalone segment in `color`.
    fn draw_line(&mut self, p0: Point, p1: Point, color: Color);
    /// Strokes a circle.
    fn draw_circle(&mut self, center: Point, radius: f64);
    /// Draws a `+` shaped marker whose arms are `size` long.
    fn draw_cross(&mut self, center: Point, size: f64);
    /// Draws text with its baseline starting at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point);
    /// Fills a closed shape in `color`.
    fn fill_shape(&mut self, shape: &BezPath, color: Color);
    /// Strokes a shape outline.
    fn stroke_shape(&mut self, shape: &BezPath);
    /// Width of `text` in pixels when drawn with [`Surface::draw_text`].
    fn measure_text(&self, text: &str) -> f64;
}

/// A drawing command recorded by [`DisplayList`].
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// See [`Surface::clear`].
    Clear(Color),
    /// See [`Surface::set_ink`].
    SetInk(Color),
    /// See [`Surface::move_to`].
    MoveTo(Point),
    /// See [`Surface::line_to`].
    LineTo(Point),
    /// See [`Surface::draw_line`].
    Line(Point, Point, Color),
    /// See [`Surface::draw_circle`].
    Circle(Point, f64),
    /// See [`Surface::draw_cross`].
    Cross(Point, f64),
    /// See [`Surface::draw_text`].
    Text(String, Point),
    /// See [`Surface::fill_shape`].
    Fill(BezPath, Color),
    /// See [`Surface::stroke_shape`].
    Stroke(BezPath),
}

/// A [`Surface`] that records every command in order.
///
/// Text is measured as a fixed advance per character.
#[derive(Clone, Debug)]
pub struct DisplayList {
    commands: Vec<Command>,
    advance: f64,
}

impl DisplayList {
    /// Creates an empty list measuring text at `advance` pixels per character.
    pub fn new(advance: f64) -> Self {
        Self {
            commands: Vec::new(),
            advance,
        }
    }

    /// Recorded commands, oldest first.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Drops all recorded commands.
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Texts drawn so far, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            Command::Text(text, _) => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new(10.0)
    }
}

impl Surface for DisplayList {
    fn clear(&mut self, background: Color) {
        self.commands.push(Command::Clear(background));
    }

    fn set_ink(&mut self, color: Color) {
        self.commands.push(Command::SetInk(color));
    }

    fn move_to(&mut self, p: Point) {
        self.commands.push(Command::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.commands.push(Command::LineTo(p));
    }

    fn draw_line(&mut self, p0: Point, p1: Point, color: Color) {
        self.commands.push(Command::Line(p0, p1, color));
    }

    fn draw_circle(&mut self, center: Point, radius: f64) {
        self.commands.push(Command::Circle(center, radius));
    }

    fn draw_cross(&mut self, center: Point, size: f64) {
        self.commands.push(Command::Cross(center, size));
    }

    fn draw_text(&mut self, text: &str, origin: Point) {
        self.commands.push(Command::Text(text.into(), origin));
    }

    fn fill_shape(&mut self, shape: &BezPath, color: Color) {
        self.commands.push(Command::Fill(shape.clone(), color));
    }

    fn stroke_shape(&mut self, shape: &BezPath) {
        self.commands.push(Command::Stroke(shape.clone()));
    }

    fn measure_text(&self, text: &str) -> f64 {
        let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        f64::from(chars) * self.advance
    }
}
