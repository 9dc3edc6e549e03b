// Copyright 2026 the Argand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan, zoom and tick planning driven together, as a host would per frame.

use argand_view2d::{Axis, Extremes, ViewState, raise_smooth, ticks};
use kurbo::{Point, Size, Vec2};

const MIN_SCALE: f64 = 1e-12;

#[test]
fn odd_viewports_use_whole_pixel_half_extents() {
    let view = ViewState::new(80.0);
    let bounds = view.visible_bounds(Size::new(801.0, 601.0));
    assert_eq!((bounds.left, bounds.right), (-5.0, 5.0));
    assert_eq!((bounds.bottom, bounds.top), (-3.75, 3.75));
    let t = view.transform(Size::new(801.0, 601.0));
    assert_eq!(t.to_complex(Point::new(400.0, 300.0)), Point::ZERO);
}

#[test]
fn pan_round_trip_returns_home() {
    let view = ViewState::new(80.0);
    let moved = view.panned(Vec2::new(123.0, -77.0)).panned(Vec2::new(-123.0, 77.0));
    assert!((moved.center() - view.center()).hypot() < 1e-12);
}

#[test]
fn repeated_zooms_keep_the_anchor() {
    let viewport = Size::new(1080.0, 1920.0);
    let anchor = Point::new(901.0, 133.0);
    let view = ViewState::from_parts(-3.25, 12.5, 80.0).panned(Vec2::new(17.0, 9.0));
    let mut current = view;
    for factor in [3.0, 0.5, 7.5, 0.1, 1.0 / 0.45] {
        let before = current.transform(viewport).to_complex(anchor);
        current = current.zoomed(anchor, factor, viewport, MIN_SCALE);
        let seen = current.transform(viewport).to_complex(anchor);
        let one_pixel = 1.0 / current.scale();
        assert!(
            (seen - before).hypot() < one_pixel,
            "anchor drifted to {seen:?} at scale {}",
            current.scale()
        );
    }
}

#[test]
fn tick_spacing_follows_the_zoom_level() {
    let viewport = Size::new(800.0, 600.0);
    let spacing = |view: ViewState| raise_smooth(view.transform(viewport).pixels_to_math(60.0));

    let view = ViewState::new(80.0);
    assert_eq!(spacing(view), 1.0);
    assert_eq!(spacing(view.with_scale(8.0, MIN_SCALE)), 10.0);
    assert_eq!(spacing(view.with_scale(400.0, MIN_SCALE)), 0.2);
    assert_eq!(spacing(view.with_scale(1.0, MIN_SCALE)), 100.0);
}

#[test]
fn ticks_cover_the_visible_range() {
    let view = ViewState::from_parts(0.3, 0.0, 400.0);
    let bounds = view.visible_bounds(Size::new(800.0, 600.0));
    let labels: Vec<String> = ticks(bounds.left..bounds.right, 0.2)
        .map(|t| t.label(Axis::Real))
        .collect();
    assert_eq!(labels, ["-0.6", "-0.4", "-0.2", "0.0", "0.2", "0.4", "0.6", "0.8", "1.0", "1.2"]);
}

#[test]
fn extremes_grow_monotonically() {
    let points = [
        Point::new(1.0, -1.0),
        Point::new(f64::NAN, 100.0),
        Point::new(-2.0, 0.5),
        Point::new(0.0, 3.0),
    ];
    let extremes = points.into_iter().fold(Extremes::UNSET, Extremes::include);
    assert_eq!(extremes.min_real, Some(-2.0));
    assert_eq!(extremes.max_real, Some(1.0));
    assert_eq!(extremes.min_imaginary, Some(-1.0));
    assert_eq!(extremes.max_imaginary, Some(3.0));
}

#[cfg(feature = "serde")]
#[test]
fn view_state_serializes_by_field() {
    let view = ViewState::from_parts(1.5, -2.0, 80.0);
    let json = serde_json::to_string(&view).unwrap();
    let back: ViewState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, view);

    let extremes = Extremes::UNSET.include(Point::new(1.0, 2.0));
    let json = serde_json::to_string(&extremes).unwrap();
    let back: Extremes = serde_json::from_str(&json).unwrap();
    assert_eq!(back, extremes);
}
