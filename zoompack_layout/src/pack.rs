// Copyright 2026 the Zoompack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Packer seam and the default front-chain sibling packer.

use alloc::vec::Vec;

use kurbo::Point;

use crate::LayoutError;
use crate::enclose::{Lcg, PackCircle, enclose};
use crate::tree::PackedTree;

/// Assigns layout-space circles to every node of a [`PackedTree`].
///
/// Implementations must uphold the layout contract:
/// - every non-root circle lies inside its parent's circle, leaving a gap of
///   about `padding` between the two boundaries;
/// - sibling circles do not overlap and are separated by about `padding`;
/// - a node's radius grows monotonically with its subtree weight;
/// - the root is centered at the layout origin and its diameter fits in
///   `min(width, height)`.
///
/// Node weights ([`crate::PositionedCircle::value`]) are already derived and
/// validated when `pack` is called.
pub trait Packer {
    /// Packs `tree` in place.
    fn pack(
        &self,
        tree: &mut PackedTree,
        width: f64,
        height: f64,
        padding: f64,
    ) -> Result<(), LayoutError>;
}

/// Default packer: front-chain placement of siblings plus smallest enclosing circles.
///
/// Leaves get a radius of `sqrt(weight)`. Each parent packs its children
/// tangent to one another around the origin and takes the enclosing circle of
/// the resulting front chain as its own radius. A second pass inflates children
/// by a padding term scaled from the unpadded root radius. After the final fit
/// to the requested extent the gaps are close to `padding` layout units, a
/// little less when padding makes the root noticeably larger.
#[derive(Clone, Copy, Debug, Default)]
pub struct SiblingPacker;

impl Packer for SiblingPacker {
    fn pack(
        &self,
        tree: &mut PackedTree,
        width: f64,
        height: f64,
        padding: f64,
    ) -> Result<(), LayoutError> {
        let n = tree.len();
        let mut circles: Vec<PackCircle> = tree
            .nodes()
            .iter()
            .map(|node| PackCircle {
                x: 0.0,
                y: 0.0,
                r: if node.is_leaf() { node.value().sqrt() } else { 0.0 },
            })
            .collect();
        let mut rng = Lcg::new();

        pack_children(tree, &mut circles, 0.0, &mut rng)?;
        let extent = width.min(height);
        if padding > 0.0 {
            let pad = padding * circles[0].r / extent;
            pack_children(tree, &mut circles, pad, &mut rng)?;
        }

        // Children were placed relative to their parent's center. Pre-order
        // guarantees the parent is absolute before its children are visited.
        let scale = extent / (2.0 * circles[0].r);
        let mut absolute: Vec<Point> = Vec::with_capacity(n);
        for (i, node) in tree.nodes().iter().enumerate() {
            let center = match node.parent() {
                Some(parent) => {
                    let origin = absolute[parent.index()];
                    Point::new(
                        origin.x + scale * circles[i].x,
                        origin.y + scale * circles[i].y,
                    )
                }
                None => Point::ZERO,
            };
            absolute.push(center);
        }
        let ids: Vec<_> = tree.ids().collect();
        for (i, id) in ids.into_iter().enumerate() {
            tree.set_circle(id, absolute[i], circles[i].r * scale);
        }
        Ok(())
    }
}

/// Packs every internal node's children, deepest subtrees first.
fn pack_children(
    tree: &PackedTree,
    circles: &mut [PackCircle],
    pad: f64,
    rng: &mut Lcg,
) -> Result<(), LayoutError> {
    let mut siblings: Vec<PackCircle> = Vec::new();
    for node in tree.nodes().iter().rev() {
        let children = node.children();
        if children.is_empty() {
            continue;
        }
        siblings.clear();
        siblings.extend(children.iter().map(|c| {
            let mut circle = circles[c.index()];
            circle.r += pad;
            circle
        }));
        let enclosing = pack_siblings(&mut siblings, rng)?;
        for (c, packed) in children.iter().zip(&siblings) {
            let slot = &mut circles[c.index()];
            slot.x = packed.x;
            slot.y = packed.y;
            slot.r = packed.r - pad;
        }
        circles[node.id().index()].r = enclosing + pad;
    }
    Ok(())
}

/// Places `c` tangent to both `a` and `b`.
fn place(b: PackCircle, a: PackCircle, c: &mut PackCircle) {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let d2 = dx * dx + dy * dy;
    if d2 > 0.0 {
        let a2 = (a.r + c.r) * (a.r + c.r);
        let b2 = (b.r + c.r) * (b.r + c.r);
        if a2 > b2 {
            let x = (d2 + b2 - a2) / (2.0 * d2);
            let y = (b2 / d2 - x * x).max(0.0).sqrt();
            c.x = b.x - x * dx - y * dy;
            c.y = b.y - x * dy + y * dx;
        } else {
            let x = (d2 + a2 - b2) / (2.0 * d2);
            let y = (a2 / d2 - x * x).max(0.0).sqrt();
            c.x = a.x + x * dx - y * dy;
            c.y = a.y + x * dy + y * dx;
        }
    } else {
        c.x = a.x + c.r;
        c.y = a.y;
    }
}

fn intersects(a: PackCircle, b: PackCircle) -> bool {
    let dr = a.r + b.r - 1e-6;
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dr > 0.0 && dr * dr > dx * dx + dy * dy
}

/// Squared distance from the origin to the weighted midpoint of `a` and `b`.
fn score(a: PackCircle, b: PackCircle) -> f64 {
    let ab = a.r + b.r;
    let dx = (a.x * b.r + b.x * a.r) / ab;
    let dy = (a.y * b.r + b.y * a.r) / ab;
    dx * dx + dy * dy
}

/// Packs `circles` around the origin and returns the enclosing radius.
///
/// On return the circles are translated so the enclosing circle is centered
/// at the origin. The front chain is a circular doubly linked list over
/// indices into `circles`.
pub(crate) fn pack_siblings(
    circles: &mut [PackCircle],
    rng: &mut Lcg,
) -> Result<f64, LayoutError> {
    let n = circles.len();
    if n == 0 {
        return Ok(0.0);
    }

    circles[0].x = 0.0;
    circles[0].y = 0.0;
    if n == 1 {
        return Ok(circles[0].r);
    }

    circles[0].x = -circles[1].r;
    circles[1].x = circles[0].r;
    circles[1].y = 0.0;
    if n == 2 {
        return Ok(circles[0].r + circles[1].r);
    }

    let (first, second) = (circles[0], circles[1]);
    place(second, first, &mut circles[2]);

    let mut next = alloc::vec![0_usize; n];
    let mut prev = alloc::vec![0_usize; n];
    // Initial chain: 0 -> 1 -> 2 -> 0.
    next[0] = 1;
    next[1] = 2;
    next[2] = 0;
    prev[0] = 2;
    prev[1] = 0;
    prev[2] = 1;
    let mut a = 0;
    let mut b = 1;

    let mut i = 3;
    'pack: while i < n {
        let (ca, cb) = (circles[a], circles[b]);
        place(ca, cb, &mut circles[i]);
        let c = i;

        // Find the closest intersecting circle on the front chain, measured
        // by arc length ahead of `b` and behind `a`.
        let mut j = next[b];
        let mut k = prev[a];
        let mut sj = circles[b].r;
        let mut sk = circles[a].r;
        loop {
            if sj <= sk {
                if intersects(circles[j], circles[c]) {
                    b = j;
                    next[a] = b;
                    prev[b] = a;
                    continue 'pack;
                }
                sj += circles[j].r;
                j = next[j];
            } else {
                if intersects(circles[k], circles[c]) {
                    a = k;
                    next[a] = b;
                    prev[b] = a;
                    continue 'pack;
                }
                sk += circles[k].r;
                k = prev[k];
            }
            if j == next[k] {
                break;
            }
        }

        // Insert `c` between `a` and `b`.
        prev[c] = a;
        next[c] = b;
        next[a] = c;
        prev[b] = c;
        b = c;

        // Pick the chain pair closest to the centroid as the next anchor.
        let mut best = score(circles[a], circles[next[a]]);
        let mut cursor = next[b];
        while cursor != b {
            let s = score(circles[cursor], circles[next[cursor]]);
            if s < best {
                a = cursor;
                best = s;
            }
            cursor = next[cursor];
        }
        b = next[a];
        i += 1;
    }

    let mut chain = alloc::vec![circles[b]];
    let mut cursor = next[b];
    while cursor != b {
        chain.push(circles[cursor]);
        cursor = next[cursor];
    }
    let enclosing = enclose(&chain, rng).ok_or(LayoutError::Enclosure)?;

    for circle in circles.iter_mut() {
        circle.x -= enclosing.x;
        circle.y -= enclosing.y;
    }
    Ok(enclosing.r)
}
