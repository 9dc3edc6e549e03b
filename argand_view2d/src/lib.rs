// Copyright 2026 the Argand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Argand View 2D: headless view primitives for the complex plane.
//!
//! This crate models a pixel viewport looking at a region of the complex
//! plane. It focuses on:
//! - View state (center + scale) with pan and fixed-point zoom.
//! - Coordinate conversion between pixel space and the plane.
//! - "Smooth" axis tick spacing and tick enumeration.
//! - Tracking the extremes of everything plotted so far.
//!
//! It does **not** draw anything or own any plotted values. Callers are
//! expected to:
//! - Keep their own set of plotted numbers and shapes.
//! - Derive a [`PlaneTransform`] from [`ViewState::transform`] once per frame
//!   and project through it.
//! - Feed gesture results into [`ViewState::panned`] and [`ViewState::zoomed`].
//!
//! Pixel space has its origin at the top-left corner of the viewport with `y`
//! growing downwards. Plane coordinates are carried in [`kurbo::Point`] with
//! `x` the real part and `y` the imaginary part, growing upwards.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use argand_view2d::ViewState;
//!
//! let viewport = Size::new(800.0, 600.0);
//! let view = ViewState::new(80.0);
//!
//! // The pixel center of the viewport shows the view center.
//! let t = view.transform(viewport);
//! assert_eq!(t.to_complex(Point::new(400.0, 300.0)), Point::ZERO);
//!
//! // Zoom in around the touched pixel; it keeps showing the same number.
//! let touched = Point::new(500.0, 200.0);
//! let before = t.to_complex(touched);
//! let zoomed = view.zoomed(touched, 2.0, viewport, 1e-12);
//! let after = zoomed.transform(viewport).to_complex(touched);
//! assert!((before - after).hypot() < 1.0 / zoomed.scale());
//! ```
//!
//! ## Axis ticks
//!
//! ```rust
//! use argand_view2d::{raise_smooth, Axis, ticks};
//!
//! // Ticks roughly 60 pixels apart at 80 pixels per unit.
//! let spacing = raise_smooth(60.0 / 80.0);
//! assert_eq!(spacing, 1.0);
//!
//! let labels: Vec<_> = ticks(-2.5..2.5, spacing)
//!     .map(|t| t.label(Axis::Imaginary))
//!     .collect();
//! assert_eq!(labels, ["-2i", "-1i", "0i", "1i", "2i"]);
//! ```

mod extremes;
mod ticks;
mod transform;
mod view;

pub use extremes::{Extremes, max_unset, min_unset};
pub use ticks::{Axis, Tick, Ticks, format_tick, raise_smooth, ticks};
pub use transform::PlaneTransform;
pub use view::{VisibleBounds, ViewState};
