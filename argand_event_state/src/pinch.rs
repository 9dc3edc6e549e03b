// Copyright 2026 the Argand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch state: turn two-finger spread/contract into a zoom.
//!
//! A pinch remembers where both fingers went down and where they are now.
//! The zoom factor is the ratio of the current finger distance to the initial
//! one; the fixed pixel is the midpoint of the *initial* finger positions,
//! truncated to whole pixels.
//!
//! ```
//! use kurbo::Point;
//! use argand_event_state::{Gesture, pinch::PinchState};
//!
//! let mut pinch = PinchState::default();
//! pinch.start(Point::new(100.0, 100.0), Point::new(200.0, 100.0));
//! pinch.update(Point::new(50.0, 100.0), Point::new(250.0, 100.0));
//!
//! assert_eq!(
//!     pinch.end(),
//!     Some(Gesture::Zoom { anchor: Point::new(150.0, 100.0), factor: 2.0 })
//! );
//! ```

use kurbo::Point;

use crate::Gesture;

/// Tracks a two-finger pinch.
#[derive(Debug, Clone, Default, Copy)]
pub struct PinchState {
    initial: Option<(Point, Point)>,
    current: Option<(Point, Point)>,
}

impl PinchState {
    /// Starts a pinch with both fingers down at `a` and `b`.
    pub fn start(&mut self, a: Point, b: Point) {
        self.initial = Some((a, b));
        self.current = Some((a, b));
    }

    /// Records the current finger positions. Ignored when no pinch is active.
    pub fn update(&mut self, a: Point, b: Point) {
        if self.initial.is_some() {
            self.current = Some((a, b));
        }
    }

    /// Returns `true` while a pinch is active.
    pub fn is_pinching(&self) -> bool {
        self.initial.is_some()
    }

    /// The pinch's fixed pixel: initial finger midpoint, truncated.
    pub fn anchor(&self) -> Option<Point> {
        let (a, b) = self.initial?;
        let mid = a.midpoint(b);
        Some(Point::new(mid.x.trunc(), mid.y.trunc()))
    }

    /// Current distance ratio; greater than one when the fingers spread.
    ///
    /// `None` when no pinch is active or the fingers started at the same spot.
    pub fn factor(&self) -> Option<f64> {
        let (a0, b0) = self.initial?;
        let (a1, b1) = self.current?;
        let initial = a0.distance(b0);
        if initial <= 0.0 {
            return None;
        }
        Some(a1.distance(b1) / initial)
    }

    /// Ends the pinch, returning the zoom it describes.
    pub fn end(&mut self) -> Option<Gesture> {
        let zoom = match (self.anchor(), self.factor()) {
            (Some(anchor), Some(factor)) => Some(Gesture::Zoom { anchor, factor }),
            _ => None,
        };
        self.initial = None;
        self.current = None;
        zoom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contracting_fingers_zoom_out() {
        let mut pinch = PinchState::default();
        pinch.start(Point::new(0.0, 0.0), Point::new(0.0, 400.0));
        pinch.update(Point::new(0.0, 100.0), Point::new(0.0, 300.0));
        assert_eq!(pinch.factor(), Some(0.5));
    }

    #[test]
    fn anchor_uses_initial_midpoint_truncated() {
        let mut pinch = PinchState::default();
        pinch.start(Point::new(10.0, 11.0), Point::new(21.0, 30.0));
        pinch.update(Point::new(500.0, 500.0), Point::new(600.0, 600.0));
        assert_eq!(pinch.anchor(), Some(Point::new(15.0, 20.0)));
    }

    #[test]
    fn coincident_start_yields_no_zoom() {
        let mut pinch = PinchState::default();
        let p = Point::new(5.0, 5.0);
        pinch.start(p, p);
        pinch.update(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        assert_eq!(pinch.end(), None);
        assert!(!pinch.is_pinching());
    }

    #[test]
    fn update_without_start_is_ignored() {
        let mut pinch = PinchState::default();
        pinch.update(Point::ZERO, Point::new(1.0, 1.0));
        assert_eq!(pinch.factor(), None);
        assert_eq!(pinch.end(), None);
    }

    #[test]
    fn unmoved_pinch_is_identity_zoom() {
        let mut pinch = PinchState::default();
        pinch.start(Point::new(1.0, 2.0), Point::new(3.0, 4.0));
        assert_eq!(
            pinch.end(),
            Some(Gesture::Zoom {
                anchor: Point::new(2.0, 3.0),
                factor: 1.0
            })
        );
    }
}
