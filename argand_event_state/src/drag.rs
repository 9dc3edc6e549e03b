// Copyright 2026 the Argand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state: turn pointer movement into pan deltas.
//!
//! ## Usage
//!
//! 1) Start a drag with [`DragState::start`] at the initial position.
//! 2) On each move, call [`DragState::update`] to get the pan delta since the
//!    last update.
//! 3) End the drag with [`DragState::end`].
//!
//! Pan deltas point from the new position back to the previous one, which is
//! the direction the view center has to travel for the plane to follow the
//! finger.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use argand_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 20.0));
//!
//! // Finger moves right and down by 5; the view pans left and up by 5.
//! assert_eq!(drag.update(Point::new(15.0, 25.0)), Some(Vec2::new(-5.0, -5.0)));
//! assert_eq!(drag.total_pan(Point::new(15.0, 25.0)), Some(Vec2::new(-5.0, -5.0)));
//! ```

use kurbo::{Point, Vec2};

/// Tracks a single-pointer drag.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Where the drag began.
    pub start_pos: Option<Point>,
    /// Last position reported through [`DragState::update`].
    pub last_pos: Option<Point>,
}

impl DragState {
    /// Starts tracking a drag from `pos`, replacing any drag in progress.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Moves the pointer to `pos`, returning the pan delta since the last move.
    ///
    /// Returns `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        if self.start_pos.is_none() {
            return None;
        }
        let last = self.last_pos.replace(pos)?;
        Some(last - pos)
    }

    /// Pan delta accumulated from the start of the drag to `current_pos`.
    pub fn total_pan(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| start - current_pos)
    }

    /// Ends the drag and resets state.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }

    /// Returns `true` while a drag is active.
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}
