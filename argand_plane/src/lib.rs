// Copyright 2026 the Argand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Argand Plane: an interactive view of the complex plane.
//!
//! A [`Plane`] shows a set of plotted complex numbers and geometric
//! [`Piclet`]s over a pair of labeled axes. It:
//! - Responds to [`Gesture`]s: a tap plots and reports the number under the
//!   finger, a drag pans, a pinch zooms around a fixed pixel.
//! - Tracks the extremes of everything plotted and highlights an axis
//!   arrowhead when something lies beyond that edge of the view.
//! - Draws itself onto any [`Surface`] in pixel space.
//! - Saves and restores its state through a flat [`StateBag`].
//!
//! The view math lives in [`argand_view2d`] and gesture recognition in
//! [`argand_event_state`]; this crate ties them together.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use argand_plane::{Complex, DisplayList, Gesture, Plane, PlaneEvent};
//!
//! let mut plane = Plane::default();
//! plane.set_viewport(Size::new(800.0, 600.0));
//!
//! // At the default 80 pixels per unit, the pixel (480, 140) shows 1+2i.
//! let events = plane.dispatch([Gesture::Tap(Point::new(480.0, 140.0))]);
//! assert_eq!(events, [PlaneEvent::NumberSelected(Complex::new(1.0, 2.0))]);
//!
//! let mut list = DisplayList::default();
//! plane.render(&mut list);
//! assert!(list.texts().any(|t| t == "1+2i"));
//! ```

mod complex;
mod config;
mod piclet;
mod plane;

pub mod persist;
pub mod render;
pub mod surface;

pub use argand_event_state::Gesture;
pub use complex::Complex;
pub use config::PlaneConfig;
pub use persist::{MemoryBag, RestoreError, StateBag};
pub use piclet::Piclet;
pub use plane::{Plane, PlaneEvent};
pub use render::SceneRenderer;
pub use surface::{Command, DisplayList, Surface};
