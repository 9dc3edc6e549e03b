// Copyright 2026 the Argand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Argand Event State: turn raw pointer streams into plane gestures.
//!
//! The plane only understands three abstract gestures, collected in
//! [`Gesture`]: a tap at a pixel, a pan by a pixel delta, and a zoom by a
//! factor around a fixed pixel. This crate provides the small state machines
//! that derive those gestures from pointer down/move/up streams:
//!
//! - [`tap`]: a press and release that stays within a slop radius.
//! - [`drag`]: a one-finger drag, reported as pan deltas.
//! - [`pinch`]: a two-finger pinch, reported as a zoom factor.
//! - [`recognizer`]: combines the three for a stream of [`PointerEvent`]s.
//!
//! Nothing here knows about the complex plane; gestures are in pixels.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use argand_event_state::{Gesture, GestureRecognizer, PointerEvent};
//!
//! let mut recognizer = GestureRecognizer::new(8.0);
//!
//! // A quick press and release is a tap.
//! assert_eq!(recognizer.handle(PointerEvent::Down(1, Point::new(10.0, 20.0))), None);
//! assert_eq!(
//!     recognizer.handle(PointerEvent::Up(1, Point::new(11.0, 21.0))),
//!     Some(Gesture::Tap(Point::new(10.0, 20.0)))
//! );
//! ```

pub mod drag;
pub mod pinch;
pub mod recognizer;
pub mod tap;

use kurbo::{Point, Vec2};

pub use recognizer::{GestureRecognizer, PointerEvent};

/// An abstract gesture on the plane, in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// The user selected the pixel.
    Tap(Point),
    /// Move the view by a pixel delta.
    ///
    /// The delta is the drag's start minus its end, so the plane follows the
    /// finger: dragging right yields a negative `x` and moves the view left.
    Pan(Vec2),
    /// Scale the view by `factor` while keeping `anchor` in place.
    Zoom {
        /// Pixel that keeps showing the same plane point.
        anchor: Point,
        /// Scale multiplier; greater than one zooms in.
        factor: f64,
    },
}
