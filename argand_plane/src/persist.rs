// Copyright 2026 the Argand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Saving and restoring plane state through a flat key/value bag.
//!
//! Every entry lives under `{prefix}.{name}`, with the names listed in
//! [`keys`]. Unset extremes are written as NaN, and a NaN read back means
//! "unset". Visible-bound entries are written for the benefit of other
//! readers but ignored on restore, since bounds are derived from center,
//! scale and viewport.

use hashbrown::HashMap;

use crate::Complex;

/// Entry names, relative to the caller's prefix.
pub mod keys {
    /// Real part of the view center.
    pub const CENTER_REAL: &str = "centerReal";
    /// Imaginary part of the view center.
    pub const CENTER_IMAGINARY: &str = "centerImaginary";
    /// Pixels per unit.
    pub const SCALE_FACTOR: &str = "scaleFactor";
    /// Real part at the left edge (informational).
    pub const LEFT_REAL: &str = "leftReal";
    /// Real part at the right edge (informational).
    pub const RIGHT_REAL: &str = "rightReal";
    /// Imaginary part at the top edge (informational).
    pub const TOP_IMAGINARY: &str = "topImaginary";
    /// Imaginary part at the bottom edge (informational).
    pub const BOTTOM_IMAGINARY: &str = "bottomImaginary";
    /// Smallest plotted real part, NaN when unset.
    pub const MIN_REAL: &str = "minReal";
    /// Largest plotted real part, NaN when unset.
    pub const MAX_REAL: &str = "maxReal";
    /// Smallest plotted imaginary part, NaN when unset.
    pub const MIN_IMAGINARY: &str = "minImaginary";
    /// Largest plotted imaginary part, NaN when unset.
    pub const MAX_IMAGINARY: &str = "maxImaginary";
    /// Plotted numbers, in no particular order.
    pub const NUMBERS: &str = "numbers";
}

/// Joins a caller prefix and an entry name.
pub fn key(prefix: &str, name: &str) -> String {
    format!("{prefix}.{name}")
}

/// Key/value storage for saved state, typically backed by the platform.
pub trait StateBag {
    /// Stores a number under `key`.
    fn put_f64(&mut self, key: &str, value: f64);
    /// Reads the number stored under `key`.
    fn get_f64(&self, key: &str) -> Option<f64>;
    /// Stores a list of complex numbers under `key`.
    fn put_numbers(&mut self, key: &str, numbers: Vec<Complex>);
    /// Reads the list of complex numbers stored under `key`.
    fn get_numbers(&self, key: &str) -> Option<Vec<Complex>>;
}

/// Reasons a restore can fail. A failed restore leaves the plane untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RestoreError {
    /// A required entry is absent or has the wrong type.
    #[error("saved plane state has no `{key}` entry")]
    MissingKey {
        /// Full key that was looked up.
        key: String,
    },
    /// The saved scale cannot drive a view.
    #[error("saved scale `{key}` = {value} is not a positive finite number")]
    InvalidScale {
        /// Full key of the scale entry.
        key: String,
        /// Value found there.
        value: f64,
    },
}

/// A value held by [`MemoryBag`].
#[derive(Debug, Clone, PartialEq)]
pub enum BagValue {
    /// A single number.
    F64(f64),
    /// A list of complex numbers.
    Numbers(Vec<Complex>),
}

/// In-memory [`StateBag`].
#[derive(Debug, Clone, Default)]
pub struct MemoryBag {
    entries: HashMap<String, BagValue>,
}

impl MemoryBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes an entry, returning it.
    pub fn remove(&mut self, key: &str) -> Option<BagValue> {
        self.entries.remove(key)
    }

    /// Returns `true` if an entry exists under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl StateBag for MemoryBag {
    fn put_f64(&mut self, key: &str, value: f64) {
        self.entries.insert(key.into(), BagValue::F64(value));
    }

    fn get_f64(&self, key: &str) -> Option<f64> {
        match self.entries.get(key)? {
            BagValue::F64(v) => Some(*v),
            BagValue::Numbers(_) => None,
        }
    }

    fn put_numbers(&mut self, key: &str, numbers: Vec<Complex>) {
        self.entries.insert(key.into(), BagValue::Numbers(numbers));
    }

    fn get_numbers(&self, key: &str) -> Option<Vec<Complex>> {
        match self.entries.get(key)? {
            BagValue::Numbers(v) => Some(v.clone()),
            BagValue::F64(_) => None,
        }
    }
}

pub(crate) fn read_f64(bag: &impl StateBag, prefix: &str, name: &str) -> Result<f64, RestoreError> {
    let key = key(prefix, name);
    bag.get_f64(&key).ok_or(RestoreError::MissingKey { key })
}

pub(crate) fn read_extreme(
    bag: &impl StateBag,
    prefix: &str,
    name: &str,
) -> Result<Option<f64>, RestoreError> {
    read_f64(bag, prefix, name).map(|v| (!v.is_nan()).then_some(v))
}

pub(crate) fn read_numbers(
    bag: &impl StateBag,
    prefix: &str,
    name: &str,
) -> Result<Vec<Complex>, RestoreError> {
    let key = key(prefix, name);
    bag.get_numbers(&key).ok_or(RestoreError::MissingKey { key })
}

#[cfg(test)]
mod tests {
    use super::{MemoryBag, RestoreError, StateBag, key, read_extreme, read_f64};
    use crate::Complex;

    #[test]
    fn keys_are_prefixed() {
        assert_eq!(key("plane", "centerReal"), "plane.centerReal");
    }

    #[test]
    fn memory_bag_is_typed() {
        let mut bag = MemoryBag::new();
        bag.put_f64("a", 1.5);
        bag.put_numbers("b", vec![Complex::new(1.0, 2.0)]);
        assert_eq!(bag.get_f64("a"), Some(1.5));
        assert_eq!(bag.get_numbers("b"), Some(vec![Complex::new(1.0, 2.0)]));
        assert_eq!(bag.get_f64("b"), None);
        assert_eq!(bag.get_numbers("a"), None);
        assert_eq!(bag.len(), 2);
    }

    #[test]
    fn nan_reads_back_as_unset() {
        let mut bag = MemoryBag::new();
        bag.put_f64("p.minReal", f64::NAN);
        bag.put_f64("p.maxReal", -2.0);
        assert_eq!(read_extreme(&bag, "p", "minReal"), Ok(None));
        assert_eq!(read_extreme(&bag, "p", "maxReal"), Ok(Some(-2.0)));
    }

    #[test]
    fn missing_key_names_the_full_key() {
        let bag = MemoryBag::new();
        let err = read_f64(&bag, "p", "scaleFactor").unwrap_err();
        assert_eq!(
            err,
            RestoreError::MissingKey {
                key: "p.scaleFactor".into()
            }
        );
        assert_eq!(err.to_string(), "saved plane state has no `p.scaleFactor` entry");
    }
}
