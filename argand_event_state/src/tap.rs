// Copyright 2026 the Argand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap state: a press and release that does not wander.
//!
//! A tap is reported at the press position, so a slight wobble before the
//! release does not shift the selected pixel.

use kurbo::Point;

use crate::Gesture;

/// Tracks a potential tap.
#[derive(Debug, Clone, Copy)]
pub struct TapState {
    slop: f64,
    down: Option<Point>,
}

impl TapState {
    /// Creates a tap tracker that gives up once the pointer moves more than
    /// `slop` pixels from where it went down.
    pub fn new(slop: f64) -> Self {
        Self { slop, down: None }
    }

    /// Pointer went down at `pos`.
    pub fn press(&mut self, pos: Point) {
        self.down = Some(pos);
    }

    /// Pointer moved to `pos`. Returns `false` once the tap is abandoned.
    pub fn moved(&mut self, pos: Point) -> bool {
        match self.down {
            Some(down) if down.distance(pos) > self.slop => {
                self.down = None;
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    /// Pointer went up at `pos`, completing the tap if it is still alive.
    pub fn release(&mut self, pos: Point) -> Option<Gesture> {
        if !self.moved(pos) {
            return None;
        }
        self.down.take().map(Gesture::Tap)
    }

    /// Abandons the tap, for example when a second finger goes down.
    pub fn cancel(&mut self) {
        self.down = None;
    }

    /// Returns `true` while a press could still become a tap.
    pub fn is_pending(&self) -> bool {
        self.down.is_some()
    }
}
