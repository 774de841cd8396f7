// Copyright 2026 the Zoompack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index arena holding the packed circles.

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;
use core::sync::atomic::{AtomicU32, Ordering};

use kurbo::{Circle, Point};
use smallvec::SmallVec;

use crate::LayoutError;
use crate::hierarchy::HierarchyNode;

static NEXT_STAMP: AtomicU32 = AtomicU32::new(1);

/// Handle to a node of a [`PackedTree`].
///
/// A `NodeId` remembers which tree created it, so handing it to a different
/// tree is detected instead of silently addressing an unrelated node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    stamp: u32,
    index: u32,
}

impl NodeId {
    /// Pre-order position of the node in its tree.
    #[must_use]
    pub fn index(self) -> usize {
        self.index as usize
    }
}

/// A node of the hierarchy with its packed layout-space circle.
#[derive(Clone, Debug)]
pub struct PositionedCircle {
    id: NodeId,
    pub(crate) center: Point,
    pub(crate) radius: f64,
    depth: u32,
    value: f64,
    name: String,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
    subtree_end: u32,
}

impl PositionedCircle {
    /// Handle of this node.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Layout-space center.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Layout-space x coordinate of the center.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.center.x
    }

    /// Layout-space y coordinate of the center.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.center.y
    }

    /// Layout-space radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Layout-space circle.
    #[must_use]
    pub fn circle(&self) -> Circle {
        Circle::new(self.center, self.radius)
    }

    /// Distance from the root (the root has depth `0`).
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Packed weight: the leaf weight, or the sum of all descendant leaf weights.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Name of the originating hierarchy node.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parent handle, `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in input order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Returns `true` if the node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Packed hierarchy stored as a flat pre-order arena.
///
/// The root sits at index `0`, followed by each subtree in input child order,
/// so every subtree occupies a contiguous index range. Parents and children
/// refer to each other by [`NodeId`]; there are no owning back-references.
#[derive(Clone, Debug)]
pub struct PackedTree {
    stamp: u32,
    nodes: Vec<PositionedCircle>,
}

impl PackedTree {
    /// Flattens `root` into an arena with zeroed geometry and derived weights.
    ///
    /// Leaves must carry a positive, finite value. Geometry is filled in by a
    /// [`crate::Packer`].
    pub fn from_hierarchy(root: &HierarchyNode) -> Result<Self, LayoutError> {
        let count = root.node_count();
        if u32::try_from(count).is_err() {
            return Err(LayoutError::TooManyNodes { count });
        }
        let stamp = NEXT_STAMP.fetch_add(1, Ordering::Relaxed);
        let mut nodes: Vec<PositionedCircle> = Vec::with_capacity(count);
        let mut stack: Vec<(&HierarchyNode, Option<NodeId>, u32)> = alloc::vec![(root, None, 0)];

        while let Some((node, parent, depth)) = stack.pop() {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "node count was checked against u32::MAX above"
            )]
            let id = NodeId {
                stamp,
                index: nodes.len() as u32,
            };
            let value = if node.is_leaf() {
                let value = node.value.unwrap_or(0.0);
                if !value.is_finite() {
                    return Err(LayoutError::NonFiniteWeight {
                        name: node.name.clone(),
                    });
                }
                if value <= 0.0 {
                    return Err(LayoutError::NonPositiveWeight {
                        name: node.name.clone(),
                        value,
                    });
                }
                value
            } else {
                0.0
            };
            if let Some(parent) = parent {
                nodes[parent.index()].children.push(id);
            }
            nodes.push(PositionedCircle {
                id,
                center: Point::ZERO,
                radius: 0.0,
                depth,
                value,
                name: node.name.clone(),
                parent,
                children: SmallVec::new(),
                subtree_end: id.index + 1,
            });
            // Reverse so children pop in input order.
            for child in node.children.iter().rev() {
                stack.push((child, Some(id), depth + 1));
            }
        }

        // Children always follow their parent, so a reverse sweep sees every
        // subtree complete before its root.
        for i in (0..nodes.len()).rev() {
            let Some(&last) = nodes[i].children.last() else {
                continue;
            };
            let sum: f64 = nodes[i]
                .children
                .iter()
                .map(|c| nodes[c.index()].value)
                .sum();
            nodes[i].value = sum;
            nodes[i].subtree_end = nodes[last.index()].subtree_end;
        }

        Ok(Self { stamp, nodes })
    }

    /// Handle of the root node.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.nodes[0].id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree has at least a root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if `id` was created by this tree.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        id.stamp == self.stamp && id.index() < self.nodes.len()
    }

    /// Returns the node for `id`, or `None` if it belongs to another tree.
    #[must_use]
    pub fn try_get(&self, id: NodeId) -> Option<&PositionedCircle> {
        if id.stamp != self.stamp {
            return None;
        }
        self.nodes.get(id.index())
    }

    /// Returns the node for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[must_use]
    #[track_caller]
    pub fn get(&self, id: NodeId) -> &PositionedCircle {
        match self.try_get(id) {
            Some(node) => node,
            None => panic!("{id:?} does not belong to this tree"),
        }
    }

    /// All nodes in pre-order.
    #[must_use]
    pub fn nodes(&self) -> &[PositionedCircle] {
        &self.nodes
    }

    /// Handles of all nodes in pre-order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(PositionedCircle::id)
    }

    /// Arena index range covered by the subtree rooted at `id` (inclusive of `id`).
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[must_use]
    #[track_caller]
    pub fn subtree_range(&self, id: NodeId) -> Range<usize> {
        let node = self.get(id);
        id.index()..node.subtree_end as usize
    }

    /// The subtree rooted at `id`, in pre-order, starting with `id` itself.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[must_use]
    #[track_caller]
    pub fn descendants(&self, id: NodeId) -> &[PositionedCircle] {
        &self.nodes[self.subtree_range(id)]
    }

    /// Walks from `id` up to the root, excluding `id` itself.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut current = self.try_get(id).and_then(PositionedCircle::parent);
        core::iter::from_fn(move || {
            let id = current?;
            current = self.nodes[id.index()].parent;
            Some(id)
        })
    }

    /// Returns `true` if `ancestor` is `node` or one of its ancestors.
    #[must_use]
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        if !self.contains(ancestor) || !self.contains(node) {
            return false;
        }
        self.subtree_range(ancestor).contains(&node.index())
    }

    /// Overwrites the layout-space circle of `id`.
    ///
    /// This is the write path for [`crate::Packer`] implementations.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[track_caller]
    pub fn set_circle(&mut self, id: NodeId, center: Point, radius: f64) {
        assert!(self.contains(id), "{id:?} does not belong to this tree");
        let node = &mut self.nodes[id.index()];
        node.center = center;
        node.radius = radius;
    }
}
