// Copyright 2026 the Zoompack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input hierarchy and the weight rewrites applied before packing.

use alloc::string::String;
use alloc::vec::Vec;

use crate::config::LeafWeight;

/// A named node of the input hierarchy.
///
/// A node with children is an internal node and its `value` is ignored; its
/// weight is always derived from its descendants. A node without children
/// (absent or empty) is a leaf and needs a positive weight to be packed.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HierarchyNode {
    /// Display name of the node.
    pub name: String,
    /// Optional weight. Only meaningful for leaves.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub value: Option<f64>,
    /// Ordered children.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub children: Vec<Self>,
}

impl HierarchyNode {
    /// Creates a leaf with the given weight.
    #[must_use]
    pub fn leaf(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
            children: Vec::new(),
        }
    }

    /// Creates an internal node with the given children.
    #[must_use]
    pub fn branch(name: impl Into<String>, children: impl IntoIterator<Item = Self>) -> Self {
        Self {
            name: name.into(),
            value: None,
            children: children.into_iter().collect(),
        }
    }

    /// Returns `true` if this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = alloc::vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }
}

/// Rewrites leaf weights according to `weight`, preserving shape and order.
///
/// With [`LeafWeight::Uniform`] every leaf receives the same weight so all
/// leaves pack into equal-area circles. Internal values are always cleared;
/// they are re-derived as the sum of descendant weights when the tree is
/// packed.
#[must_use]
pub fn normalize_leaves(node: &HierarchyNode, weight: LeafWeight) -> HierarchyNode {
    if node.is_leaf() {
        let value = match weight {
            LeafWeight::Uniform(w) => Some(w),
            LeafWeight::Input => node.value,
        };
        return HierarchyNode {
            name: node.name.clone(),
            value,
            children: Vec::new(),
        };
    }
    HierarchyNode {
        name: node.name.clone(),
        value: None,
        children: node
            .children
            .iter()
            .map(|child| normalize_leaves(child, weight))
            .collect(),
    }
}

/// Stably sorts every child list by subtree weight, heaviest first.
///
/// Returns the weight of `node`. Missing leaf values count as zero; they are
/// rejected later when the tree is packed.
pub(crate) fn sort_by_weight_descending(node: &mut HierarchyNode) -> f64 {
    if node.is_leaf() {
        return node.value.unwrap_or(0.0);
    }
    let mut weighted: Vec<(f64, HierarchyNode)> = core::mem::take(&mut node.children)
        .into_iter()
        .map(|mut child| (sort_by_weight_descending(&mut child), child))
        .collect();
    weighted.sort_by(|a, b| b.0.total_cmp(&a.0));
    let total = weighted.iter().map(|(w, _)| w).sum();
    node.children = weighted.into_iter().map(|(_, child)| child).collect();
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HierarchyNode {
        HierarchyNode {
            name: "root".into(),
            value: Some(42.0),
            children: alloc::vec![
                HierarchyNode::leaf("a", 10.0),
                HierarchyNode::branch(
                    "b",
                    [HierarchyNode::leaf("c", 5.0), HierarchyNode::leaf("d", 50.0)]
                ),
                HierarchyNode {
                    name: "e".into(),
                    value: Some(7.0),
                    children: Vec::new(),
                },
            ],
        }
    }

    #[test]
    fn uniform_normalization_flattens_leaf_weights() {
        let n = normalize_leaves(&sample(), LeafWeight::Uniform(100.0));
        assert_eq!(n.value, None, "internal values are discarded");
        assert_eq!(n.children[0].value, Some(100.0));
        assert_eq!(n.children[1].value, None);
        assert_eq!(n.children[1].children[1].value, Some(100.0));
        assert_eq!(n.children[2].value, Some(100.0));
    }

    #[test]
    fn normalization_preserves_shape_and_order() {
        let src = sample();
        let n = normalize_leaves(&src, LeafWeight::Uniform(1.0));
        assert_eq!(n.node_count(), src.node_count());
        let names: Vec<&str> = n.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "e"]);
        assert_eq!(n.children[1].children[0].name, "c");
    }

    #[test]
    fn input_weights_are_kept_for_leaves_only() {
        let n = normalize_leaves(&sample(), LeafWeight::Input);
        assert_eq!(n.value, None);
        assert_eq!(n.children[1].children[1].value, Some(50.0));
    }

    #[test]
    fn sorting_puts_heaviest_subtree_first() {
        let mut n = normalize_leaves(&sample(), LeafWeight::Input);
        let total = sort_by_weight_descending(&mut n);
        assert_eq!(total, 72.0);
        let names: Vec<&str> = n.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "e"]);
        assert_eq!(n.children[0].children[0].name, "d");
    }

    #[test]
    fn empty_children_is_a_leaf() {
        let node = HierarchyNode::branch("lonely", []);
        assert!(node.is_leaf());
        let n = normalize_leaves(&node, LeafWeight::Uniform(3.0));
        assert_eq!(n.value, Some(3.0));
    }
}
