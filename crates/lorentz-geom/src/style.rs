//! Opaque pass-through styling metadata.
//!
//! The core never interprets these values; they exist so a renderer can
//! attach and recover presentation data across transforms and clones.
//! Ordering is deterministic (BTreeMap) so sampled output is reproducible.

use std::collections::btree_map;
use std::collections::BTreeMap;

use lorentz_core::Scalar;

/// A style entry. `Color` is a 4-component value whose meaning belongs to
/// the renderer; the gradient builder only ever lerps it.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Text(String),
    Number(Scalar),
    Color([Scalar; 4]),
}

/// An ordered string-keyed map of style entries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleMap(BTreeMap<String, StyleValue>);

impl StyleMap {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: StyleValue) -> Option<StyleValue> {
        self.0.insert(key.into(), value)
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: StyleValue) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.0.get(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> btree_map::Iter<'_, String, StyleValue> {
        self.0.iter()
    }
}

impl FromIterator<(String, StyleValue)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (String, StyleValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
