// Copyright 2026 the Argand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Like [`f64::max`], but an unset side yields the other side.
#[must_use]
pub fn max_unset(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Like [`f64::min`], but an unset side yields the other side.
#[must_use]
pub fn min_unset(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Bounding box of every finite point included since the last reset.
///
/// Each side is tracked separately and starts out unset. Non-finite points
/// are ignored by [`Extremes::include`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extremes {
    /// Smallest real part seen.
    pub min_real: Option<f64>,
    /// Largest real part seen.
    pub max_real: Option<f64>,
    /// Smallest imaginary part seen.
    pub min_imaginary: Option<f64>,
    /// Largest imaginary part seen.
    pub max_imaginary: Option<f64>,
}

impl Extremes {
    /// All four sides unset.
    pub const UNSET: Self = Self {
        min_real: None,
        max_real: None,
        min_imaginary: None,
        max_imaginary: None,
    };

    /// Returns the extremes grown to include `pt` (`x` real, `y` imaginary).
    ///
    /// Points with a non-finite coordinate leave the extremes unchanged.
    #[must_use]
    pub fn include(self, pt: Point) -> Self {
        if !pt.is_finite() {
            return self;
        }
        Self {
            min_real: min_unset(self.min_real, Some(pt.x)),
            max_real: max_unset(self.max_real, Some(pt.x)),
            min_imaginary: min_unset(self.min_imaginary, Some(pt.y)),
            max_imaginary: max_unset(self.max_imaginary, Some(pt.y)),
        }
    }

    /// Returns `true` when no side has been set yet.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        *self == Self::UNSET
    }
}
