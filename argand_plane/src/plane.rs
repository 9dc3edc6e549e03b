// Copyright 2026 the Argand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use argand_event_state::Gesture;
use argand_view2d::{Extremes, PlaneTransform, ViewState, max_unset, min_unset};
use hashbrown::HashSet;
use kurbo::{Point, Size, Vec2};

use crate::persist::{self, RestoreError, StateBag, keys};
use crate::render::SceneRenderer;
use crate::surface::Surface;
use crate::{Complex, Piclet, PlaneConfig};

/// Something the plane reports to its host while handling gestures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaneEvent {
    /// The user tapped a number; the host usually echoes it in its display.
    NumberSelected(Complex),
}

/// The interactive complex plane.
///
/// A plane owns its view state, the set of plotted numbers and piclets, and
/// the extremes of every finite number plotted since the last clear. It is
/// driven by [`Gesture`]s and drawn onto any [`Surface`].
///
/// Every mutation marks the plane for redraw; hosts poll
/// [`Plane::take_redraw`] and schedule a frame when it returns `true`.
#[derive(Clone, Debug)]
pub struct Plane {
    config: PlaneConfig,
    viewport: Size,
    view: ViewState,
    extremes: Extremes,
    numbers: HashSet<Complex>,
    piclets: Vec<Piclet>,
    redraw: bool,
}

impl Default for Plane {
    fn default() -> Self {
        Self::new(PlaneConfig::default())
    }
}

impl Plane {
    /// Creates an empty plane centered on zero at the configured initial scale.
    pub fn new(config: PlaneConfig) -> Self {
        Self {
            view: ViewState::new(config.initial_scale),
            config,
            viewport: Size::ZERO,
            extremes: Extremes::UNSET,
            numbers: HashSet::new(),
            piclets: Vec::new(),
            redraw: true,
        }
    }

    /// Drawing constants in use.
    #[must_use]
    pub fn config(&self) -> &PlaneConfig {
        &self.config
    }

    /// Current view state.
    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Extremes of the finite numbers plotted since the last clear.
    #[must_use]
    pub fn extremes(&self) -> Extremes {
        self.extremes
    }

    /// Plotted numbers, in no particular order.
    #[must_use]
    pub fn numbers(&self) -> impl Iterator<Item = Complex> + '_ {
        self.numbers.iter().copied()
    }

    /// Returns `true` if `number` is plotted.
    #[must_use]
    pub fn contains(&self, number: Complex) -> bool {
        self.numbers.contains(&number)
    }

    /// Number of plotted numbers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Returns `true` when no number is plotted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Plotted piclets, oldest first.
    #[must_use]
    pub fn piclets(&self) -> &[Piclet] {
        &self.piclets
    }

    /// Size of the viewport in pixels.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Records a new viewport size. Center and scale are kept.
    pub fn set_viewport(&mut self, viewport: Size) {
        if self.viewport != viewport {
            log::debug!("viewport {:?} -> {viewport:?}", self.viewport);
            self.viewport = viewport;
            self.redraw = true;
        }
    }

    /// The pixel/plane transform for the current view and viewport.
    #[must_use]
    pub fn transform(&self) -> PlaneTransform {
        self.view.transform(self.viewport)
    }

    /// Plots a number, growing the extremes if it is finite.
    pub fn add(&mut self, number: Complex) {
        log::debug!("add {number}");
        self.extremes = self.extremes.include(number.to_point());
        self.numbers.insert(number);
        self.redraw = true;
    }

    /// Plots a piclet.
    ///
    /// Curves kept by the plane own their samples as a `Vec<Complex>` so they
    /// can be redrawn every frame. To draw a one-shot or lazily generated
    /// sequence without storing it, pass it to [`SceneRenderer::draw_samples`]
    /// while rendering instead.
    pub fn add_piclet(&mut self, piclet: Piclet) {
        self.piclets.push(piclet);
        self.redraw = true;
    }

    /// Removes every number and piclet and unsets the extremes.
    pub fn clear(&mut self) {
        log::debug!("clear {} numbers, {} piclets", self.numbers.len(), self.piclets.len());
        self.numbers.clear();
        self.piclets.clear();
        self.extremes = Extremes::UNSET;
        self.redraw = true;
    }

    /// Centers the view on zero at the initial scale.
    pub fn reset(&mut self) {
        log::debug!("reset view");
        self.view = ViewState::new(self.config.initial_scale);
        self.redraw = true;
    }

    /// Moves the view by a pixel delta; see [`Gesture::Pan`].
    pub fn shift(&mut self, delta: Vec2) {
        self.view = self.view.panned(delta);
        self.redraw = true;
    }

    /// Scales the view by `factor`, keeping the number under `anchor` in place.
    pub fn zoom(&mut self, anchor: Point, factor: f64) {
        if factor.is_nan() || factor <= 0.0 {
            log::warn!("zoom factor {factor} is not positive");
        }
        let requested = self.view.scale() * factor;
        let guarded = ViewState::guarded_scale(requested, self.config.min_scale);
        if guarded != requested {
            log::warn!("scale {requested} clamped to {guarded}");
        }
        self.view = self
            .view
            .zoomed(anchor, factor, self.viewport, self.config.min_scale);
        self.redraw = true;
    }

    /// The number shown at a pixel.
    #[must_use]
    pub fn number_at(&self, pixel: Point) -> Complex {
        self.transform().to_complex(pixel).into()
    }

    /// Applies one gesture.
    pub fn handle(&mut self, gesture: Gesture) -> Option<PlaneEvent> {
        log::debug!("gesture {gesture:?}");
        match gesture {
            Gesture::Tap(pixel) => {
                let number = self.number_at(pixel);
                self.add(number);
                Some(PlaneEvent::NumberSelected(number))
            }
            Gesture::Pan(delta) => {
                self.shift(delta);
                None
            }
            Gesture::Zoom { anchor, factor } => {
                self.zoom(anchor, factor);
                None
            }
        }
    }

    /// Applies gestures in order, collecting what the host needs to hear.
    pub fn dispatch(&mut self, gestures: impl IntoIterator<Item = Gesture>) -> Vec<PlaneEvent> {
        gestures
            .into_iter()
            .filter_map(|gesture| self.handle(gesture))
            .collect()
    }

    /// Returns whether a redraw was requested since the last call, and resets the request.
    pub fn take_redraw(&mut self) -> bool {
        core::mem::take(&mut self.redraw)
    }

    /// Returns `true` if a redraw is pending.
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    /// Draws axes, numbers and piclets.
    pub fn render(&self, surface: &mut impl Surface) {
        let scene = SceneRenderer::new(&self.config, self.view, self.viewport, self.extremes);
        scene.begin(surface);
        scene.draw_axes(surface);
        for &number in &self.numbers {
            scene.draw_number(surface, number);
        }
        for piclet in &self.piclets {
            scene.draw_piclet(surface, piclet);
        }
    }

    /// Writes the view, extremes and plotted numbers under `prefix`.
    pub fn save(&self, prefix: &str, bag: &mut impl StateBag) {
        let bounds = self.view.visible_bounds(self.viewport);
        let e = &self.extremes;
        for (name, value) in [
            (keys::CENTER_REAL, self.view.center_real()),
            (keys::CENTER_IMAGINARY, self.view.center_imaginary()),
            (keys::SCALE_FACTOR, self.view.scale()),
            (keys::LEFT_REAL, bounds.left),
            (keys::RIGHT_REAL, bounds.right),
            (keys::TOP_IMAGINARY, bounds.top),
            (keys::BOTTOM_IMAGINARY, bounds.bottom),
            (keys::MIN_REAL, e.min_real.unwrap_or(f64::NAN)),
            (keys::MAX_REAL, e.max_real.unwrap_or(f64::NAN)),
            (keys::MIN_IMAGINARY, e.min_imaginary.unwrap_or(f64::NAN)),
            (keys::MAX_IMAGINARY, e.max_imaginary.unwrap_or(f64::NAN)),
        ] {
            bag.put_f64(&persist::key(prefix, name), value);
        }
        bag.put_numbers(
            &persist::key(prefix, keys::NUMBERS),
            self.numbers.iter().copied().collect(),
        );
    }

    /// Restores state written by [`Plane::save`].
    ///
    /// Center and scale are replaced. Saved numbers are merged into the ones
    /// already plotted, and the saved extremes are merged with the current
    /// ones so they still cover every plotted number. Nothing changes unless
    /// every entry is present and valid.
    pub fn restore(&mut self, prefix: &str, bag: &impl StateBag) -> Result<(), RestoreError> {
        let center_real = persist::read_f64(bag, prefix, keys::CENTER_REAL)?;
        let center_imaginary = persist::read_f64(bag, prefix, keys::CENTER_IMAGINARY)?;
        let scale = persist::read_f64(bag, prefix, keys::SCALE_FACTOR)?;
        if !(scale > 0.0 && scale.is_finite()) {
            return Err(RestoreError::InvalidScale {
                key: persist::key(prefix, keys::SCALE_FACTOR),
                value: scale,
            });
        }
        let saved = Extremes {
            min_real: persist::read_extreme(bag, prefix, keys::MIN_REAL)?,
            max_real: persist::read_extreme(bag, prefix, keys::MAX_REAL)?,
            min_imaginary: persist::read_extreme(bag, prefix, keys::MIN_IMAGINARY)?,
            max_imaginary: persist::read_extreme(bag, prefix, keys::MAX_IMAGINARY)?,
        };
        let numbers = persist::read_numbers(bag, prefix, keys::NUMBERS)?;

        log::debug!(
            "restore {prefix}: {center_real}{center_imaginary:+}i at {scale}, {} numbers",
            numbers.len()
        );
        self.view = ViewState::from_parts(center_real, center_imaginary, scale);
        self.extremes = Extremes {
            min_real: min_unset(self.extremes.min_real, saved.min_real),
            max_real: max_unset(self.extremes.max_real, saved.max_real),
            min_imaginary: min_unset(self.extremes.min_imaginary, saved.min_imaginary),
            max_imaginary: max_unset(self.extremes.max_imaginary, saved.max_imaginary),
        };
        self.numbers.extend(numbers);
        self.redraw = true;
        Ok(())
    }
}
