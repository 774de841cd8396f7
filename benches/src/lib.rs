// Copyright 2026 the Zoompack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the Zoompack benchmarks.

use zoompack_layout::HierarchyNode;

/// Small deterministic generator so fixtures are stable across runs.
#[derive(Clone, Debug)]
pub struct Lcg(u64);

impl Lcg {
    /// Seeds the generator.
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        // Knuth MMIX multiplier.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }

    /// Next value in `0..upper_exclusive`.
    pub fn gen_range_usize(&mut self, upper_exclusive: usize) -> usize {
        if upper_exclusive == 0 {
            return 0;
        }
        ((self.next_f64() * upper_exclusive as f64) as usize).min(upper_exclusive - 1)
    }
}

/// A hierarchy of roughly `leaves` leaves with a varying fanout and leaf values.
pub fn random_hierarchy(leaves: usize, max_fanout: usize, seed: u64) -> HierarchyNode {
    fn build(rng: &mut Lcg, name: String, leaves: usize, max_fanout: usize) -> HierarchyNode {
        if leaves <= 1 {
            return HierarchyNode::leaf(name, 1.0 + 99.0 * rng.next_f64());
        }
        let fanout = (2 + rng.gen_range_usize(max_fanout.max(2) - 1)).min(leaves);
        let share = leaves / fanout;
        let mut rest = leaves;
        let mut children = Vec::with_capacity(fanout);
        for i in 0..fanout {
            let take = if i + 1 == fanout { rest } else { share };
            rest -= take;
            children.push(build(rng, format!("{name}/{i}"), take, max_fanout));
        }
        HierarchyNode::branch(name, children)
    }
    let mut rng = Lcg::new(seed);
    build(&mut rng, "root".into(), leaves, max_fanout)
}
