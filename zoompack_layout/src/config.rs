// Copyright 2026 the Zoompack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Weight assigned to leaves before packing.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LeafWeight {
    /// Every leaf gets the same weight, so all leaves render as equal-area
    /// circles and the packing emphasizes the shape of the hierarchy.
    Uniform(f64),
    /// Keep the leaf values from the input.
    Input,
}

impl Default for LeafWeight {
    fn default() -> Self {
        Self::Uniform(100.0)
    }
}

/// Order in which siblings are handed to the packer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChildOrder {
    /// Keep the input order.
    #[default]
    Input,
    /// Stable sort by subtree weight, heaviest first.
    ///
    /// The packed arena follows the sorted order.
    ByValueDescending,
}

/// Configuration for [`crate::layout`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PackConfig {
    /// Gap, in layout units, between sibling circles and between a child and
    /// its parent's boundary.
    pub padding: f64,
    /// Leaf weight normalization.
    pub leaf_weight: LeafWeight,
    /// Sibling ordering.
    pub child_order: ChildOrder,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            padding: 3.0,
            leaf_weight: LeafWeight::default(),
            child_order: ChildOrder::default(),
        }
    }
}

impl PackConfig {
    /// Returns a copy with the given padding.
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Returns a copy with the given leaf weight policy.
    #[must_use]
    pub fn with_leaf_weight(mut self, leaf_weight: LeafWeight) -> Self {
        self.leaf_weight = leaf_weight;
        self
    }

    /// Returns a copy with the given child order.
    #[must_use]
    pub fn with_child_order(mut self, child_order: ChildOrder) -> Self {
        self.child_order = child_order;
        self
    }
}
