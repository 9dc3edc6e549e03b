// Copyright 2026 the Argand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Combined recognizer for one- and two-finger pointer streams.
//!
//! - One finger that stays within the slop radius is a [`Gesture::Tap`].
//! - One finger that leaves the slop radius becomes a drag and produces a
//!   [`Gesture::Pan`] per move (the first one covers the distance travelled
//!   since the press).
//! - A second finger cancels any tap or drag and starts a pinch; lifting
//!   either finger ends it with a single [`Gesture::Zoom`]. The remaining
//!   finger is ignored until every finger is up.
//!
//! Further fingers beyond two are ignored.

use kurbo::{Point, Vec2};

use crate::Gesture;
use crate::drag::DragState;
use crate::pinch::PinchState;
use crate::tap::TapState;

/// A raw pointer event, keyed by a pointer identifier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent<K> {
    /// Pointer `K` touched down.
    Down(K, Point),
    /// Pointer `K` moved.
    Move(K, Point),
    /// Pointer `K` lifted.
    Up(K, Point),
    /// The platform cancelled the whole interaction.
    Cancel,
}

/// Recognizes taps, drags and pinches from [`PointerEvent`]s.
#[derive(Clone, Debug)]
pub struct GestureRecognizer<K> {
    pointers: Vec<(K, Point)>,
    press: Option<Point>,
    tap: TapState,
    drag: DragState,
    pinch: PinchState,
    spent: bool,
}

impl<K: Copy + PartialEq> GestureRecognizer<K> {
    /// Creates a recognizer with the given tap slop radius in pixels.
    pub fn new(slop: f64) -> Self {
        Self {
            pointers: Vec::with_capacity(2),
            press: None,
            tap: TapState::new(slop),
            drag: DragState::default(),
            pinch: PinchState::default(),
            spent: false,
        }
    }

    /// Feeds one pointer event, returning the gesture it completes, if any.
    pub fn handle(&mut self, event: PointerEvent<K>) -> Option<Gesture> {
        let gesture = match event {
            PointerEvent::Down(id, pos) => {
                self.down(id, pos);
                None
            }
            PointerEvent::Move(id, pos) => self.moved(id, pos),
            PointerEvent::Up(id, pos) => self.up(id, pos),
            PointerEvent::Cancel => {
                self.reset();
                None
            }
        };
        if let Some(gesture) = &gesture {
            log::trace!("recognized {gesture:?}");
        }
        gesture
    }

    /// Returns `true` while any tracked pointer is down.
    pub fn is_active(&self) -> bool {
        !self.pointers.is_empty()
    }

    fn down(&mut self, id: K, pos: Point) {
        if self.pointers.len() >= 2 || self.position(id).is_some() {
            return;
        }
        self.pointers.push((id, pos));
        match self.pointers.as_slice() {
            [_] => {
                self.spent = false;
                self.press = Some(pos);
                self.tap.press(pos);
            }
            [(_, a), (_, b)] => {
                self.tap.cancel();
                self.drag.end();
                self.pinch.start(*a, *b);
            }
            _ => {}
        }
    }

    fn moved(&mut self, id: K, pos: Point) -> Option<Gesture> {
        *self.position(id)? = pos;
        if self.pinch.is_pinching() {
            if let [(_, a), (_, b)] = self.pointers.as_slice() {
                self.pinch.update(*a, *b);
            }
            return None;
        }
        if self.spent {
            return None;
        }
        if !self.drag.is_dragging() {
            if self.tap.moved(pos) {
                return None;
            }
            self.drag.start(self.press?);
        }
        self.drag.update(pos).and_then(pan)
    }

    fn up(&mut self, id: K, pos: Point) -> Option<Gesture> {
        *self.position(id)? = pos;
        let gesture = if self.pinch.is_pinching() {
            if let [(_, a), (_, b)] = self.pointers.as_slice() {
                self.pinch.update(*a, *b);
            }
            self.spent = true;
            self.pinch.end()
        } else if self.spent {
            None
        } else if self.drag.is_dragging() {
            let delta = self.drag.update(pos);
            self.drag.end();
            delta.and_then(pan)
        } else {
            self.tap.release(pos)
        };
        self.pointers.retain(|(p, _)| *p != id);
        if self.pointers.is_empty() {
            self.reset();
        }
        gesture
    }

    fn position(&mut self, id: K) -> Option<&mut Point> {
        self.pointers
            .iter_mut()
            .find(|(p, _)| *p == id)
            .map(|(_, pos)| pos)
    }

    fn reset(&mut self) {
        self.pointers.clear();
        self.press = None;
        self.tap.cancel();
        self.drag.end();
        self.pinch = PinchState::default();
        self.spent = false;
    }
}

fn pan(delta: Vec2) -> Option<Gesture> {
    (delta != Vec2::ZERO).then_some(Gesture::Pan(delta))
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{GestureRecognizer, PointerEvent};
    use crate::Gesture;

    fn run(events: &[PointerEvent<u32>]) -> Vec<Gesture> {
        let mut recognizer = GestureRecognizer::new(8.0);
        events
            .iter()
            .filter_map(|e| recognizer.handle(*e))
            .collect()
    }

    #[test]
    fn press_and_release_is_a_tap() {
        let gestures = run(&[
            PointerEvent::Down(1, Point::new(40.0, 50.0)),
            PointerEvent::Move(1, Point::new(42.0, 51.0)),
            PointerEvent::Up(1, Point::new(42.0, 51.0)),
        ]);
        assert_eq!(gestures, [Gesture::Tap(Point::new(40.0, 50.0))]);
    }

    #[test]
    fn drag_pans_by_start_minus_end() {
        let gestures = run(&[
            PointerEvent::Down(1, Point::new(100.0, 100.0)),
            PointerEvent::Move(1, Point::new(120.0, 100.0)),
            PointerEvent::Move(1, Point::new(130.0, 90.0)),
            PointerEvent::Up(1, Point::new(130.0, 90.0)),
        ]);
        assert_eq!(
            gestures,
            [
                Gesture::Pan(Vec2::new(-20.0, 0.0)),
                Gesture::Pan(Vec2::new(-10.0, 10.0)),
            ]
        );
    }

    #[test]
    fn pinch_emits_one_zoom_and_swallows_the_rest() {
        let gestures = run(&[
            PointerEvent::Down(1, Point::new(100.0, 100.0)),
            PointerEvent::Down(2, Point::new(200.0, 100.0)),
            PointerEvent::Move(1, Point::new(50.0, 100.0)),
            PointerEvent::Move(2, Point::new(250.0, 100.0)),
            PointerEvent::Up(2, Point::new(250.0, 100.0)),
            PointerEvent::Move(1, Point::new(10.0, 10.0)),
            PointerEvent::Up(1, Point::new(10.0, 10.0)),
        ]);
        assert_eq!(
            gestures,
            [Gesture::Zoom {
                anchor: Point::new(150.0, 100.0),
                factor: 2.0
            }]
        );
    }

    #[test]
    fn cancel_drops_pending_tap() {
        let gestures = run(&[
            PointerEvent::Down(1, Point::new(1.0, 1.0)),
            PointerEvent::Cancel,
            PointerEvent::Up(1, Point::new(1.0, 1.0)),
        ]);
        assert!(gestures.is_empty());
    }

    #[test]
    fn unknown_pointers_and_third_fingers_are_ignored() {
        let mut recognizer = GestureRecognizer::new(8.0);
        assert_eq!(recognizer.handle(PointerEvent::Move(9, Point::ZERO)), None);
        assert_eq!(recognizer.handle(PointerEvent::Up(9, Point::ZERO)), None);
        assert!(!recognizer.is_active());

        recognizer.handle(PointerEvent::Down(1, Point::ZERO));
        recognizer.handle(PointerEvent::Down(2, Point::new(10.0, 0.0)));
        recognizer.handle(PointerEvent::Down(3, Point::new(20.0, 0.0)));
        assert_eq!(recognizer.handle(PointerEvent::Up(3, Point::ZERO)), None);
        assert_eq!(
            recognizer.handle(PointerEvent::Up(1, Point::ZERO)),
            Some(Gesture::Zoom {
                anchor: Point::new(5.0, 0.0),
                factor: 1.0
            })
        );
    }
}
