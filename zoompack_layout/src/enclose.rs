// Copyright 2026 the Zoompack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smallest enclosing circle of a set of circles.
//!
//! Randomized incremental construction: circles are visited in shuffled order
//! and the support basis (at most three circles) is extended whenever a
//! circle falls outside the current enclosure.

use alloc::vec::Vec;

/// Scratch circle used by the packer: center `(x, y)` and radius `r`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct PackCircle {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) r: f64,
}

/// Linear congruential generator with the classic Numerical Recipes constants.
///
/// Deterministic, so packing the same hierarchy twice yields identical output.
#[derive(Clone, Debug)]
pub(crate) struct Lcg(u64);

impl Lcg {
    const A: u64 = 1_664_525;
    const C: u64 = 1_013_904_223;
    const M: u64 = 1 << 32;

    pub(crate) fn new() -> Self {
        Self(1)
    }

    /// Next value in `[0, 1)`.
    pub(crate) fn next_f64(&mut self) -> f64 {
        self.0 = (Self::A * self.0 + Self::C) % Self::M;
        self.0 as f64 / Self::M as f64
    }
}

fn shuffle(circles: &mut [PackCircle], rng: &mut Lcg) {
    let mut m = circles.len();
    while m > 0 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "the product is in [0, m), which fits in usize"
        )]
        let i = (rng.next_f64() * m as f64) as usize;
        m -= 1;
        circles.swap(m, i);
    }
}

/// Returns the smallest circle enclosing all `circles`, or `None` if the
/// input is empty or numerically degenerate.
pub(crate) fn enclose(circles: &[PackCircle], rng: &mut Lcg) -> Option<PackCircle> {
    let mut circles = circles.to_vec();
    shuffle(&mut circles, rng);

    let mut basis: Vec<PackCircle> = Vec::new();
    let mut enclosure: Option<PackCircle> = None;
    let mut i = 0;
    while i < circles.len() {
        let p = circles[i];
        if let Some(e) = enclosure
            && encloses_weak(e, p)
        {
            i += 1;
        } else {
            basis = extend_basis(&basis, p)?;
            enclosure = Some(enclose_basis(&basis));
            i = 0;
        }
    }
    enclosure
}

fn extend_basis(basis: &[PackCircle], p: PackCircle) -> Option<Vec<PackCircle>> {
    if encloses_weak_all(p, basis) {
        return Some(alloc::vec![p]);
    }

    for &b in basis {
        if encloses_not(p, b) && encloses_weak_all(enclose_basis2(b, p), basis) {
            return Some(alloc::vec![b, p]);
        }
    }

    for i in 0..basis.len().saturating_sub(1) {
        for j in (i + 1)..basis.len() {
            let (bi, bj) = (basis[i], basis[j]);
            if encloses_not(enclose_basis2(bi, bj), p)
                && encloses_not(enclose_basis2(bi, p), bj)
                && encloses_not(enclose_basis2(bj, p), bi)
                && encloses_weak_all(enclose_basis3(bi, bj, p), basis)
            {
                return Some(alloc::vec![bi, bj, p]);
            }
        }
    }

    None
}

/// `a` does not contain `b`.
fn encloses_not(a: PackCircle, b: PackCircle) -> bool {
    let dr = a.r - b.r;
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dr < 0.0 || dr * dr < dx * dx + dy * dy
}

/// `a` contains `b`, with a small relative tolerance.
fn encloses_weak(a: PackCircle, b: PackCircle) -> bool {
    let dr = a.r - b.r + a.r.max(b.r).max(1.0) * 1e-9;
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dr > 0.0 && dr * dr > dx * dx + dy * dy
}

fn encloses_weak_all(a: PackCircle, basis: &[PackCircle]) -> bool {
    basis.iter().all(|&b| encloses_weak(a, b))
}

fn enclose_basis(basis: &[PackCircle]) -> PackCircle {
    match *basis {
        [a] => a,
        [a, b] => enclose_basis2(a, b),
        [a, b, c] => enclose_basis3(a, b, c),
        _ => unreachable!("a basis holds one to three circles"),
    }
}

fn enclose_basis2(a: PackCircle, b: PackCircle) -> PackCircle {
    let x21 = b.x - a.x;
    let y21 = b.y - a.y;
    let r21 = b.r - a.r;
    let l = (x21 * x21 + y21 * y21).sqrt();
    PackCircle {
        x: (a.x + b.x + x21 / l * r21) / 2.0,
        y: (a.y + b.y + y21 / l * r21) / 2.0,
        r: (l + a.r + b.r) / 2.0,
    }
}

fn enclose_basis3(a: PackCircle, b: PackCircle, c: PackCircle) -> PackCircle {
    let (x1, y1, r1) = (a.x, a.y, a.r);
    let (x2, y2, r2) = (b.x, b.y, b.r);
    let (x3, y3, r3) = (c.x, c.y, c.r);
    let a2 = x1 - x2;
    let a3 = x1 - x3;
    let b2 = y1 - y2;
    let b3 = y1 - y3;
    let c2 = r2 - r1;
    let c3 = r3 - r1;
    let d1 = x1 * x1 + y1 * y1 - r1 * r1;
    let d2 = d1 - x2 * x2 - y2 * y2 + r2 * r2;
    let d3 = d1 - x3 * x3 - y3 * y3 + r3 * r3;
    let ab = a3 * b2 - a2 * b3;
    let xa = (b2 * d3 - b3 * d2) / (ab * 2.0) - x1;
    let xb = (b3 * c2 - b2 * c3) / ab;
    let ya = (a3 * d2 - a2 * d3) / (ab * 2.0) - y1;
    let yb = (a2 * c3 - a3 * c2) / ab;
    let qa = xb * xb + yb * yb - 1.0;
    let qb = 2.0 * (r1 + xa * xb + ya * yb);
    let qc = xa * xa + ya * ya - r1 * r1;
    let r = -(if qa.abs() > 1e-6 {
        (qb + (qb * qb - 4.0 * qa * qc).sqrt()) / (2.0 * qa)
    } else {
        qc / qb
    });
    PackCircle {
        x: x1 + xa + xb * r,
        y: y1 + ya + yb * r,
        r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: f64, y: f64, r: f64) -> PackCircle {
        PackCircle { x, y, r }
    }

    fn contains(outer: PackCircle, inner: PackCircle) -> bool {
        let d = ((inner.x - outer.x).powi(2) + (inner.y - outer.y).powi(2)).sqrt();
        d + inner.r <= outer.r + 1e-6
    }

    #[test]
    fn single_circle_encloses_itself() {
        let mut rng = Lcg::new();
        let e = enclose(&[c(3.0, 4.0, 2.0)], &mut rng).unwrap();
        assert_eq!(e, c(3.0, 4.0, 2.0));
    }

    #[test]
    fn two_touching_circles() {
        let mut rng = Lcg::new();
        let e = enclose(&[c(-1.0, 0.0, 1.0), c(1.0, 0.0, 1.0)], &mut rng).unwrap();
        assert!(e.x.abs() < 1e-12, "centered between the two");
        assert!((e.r - 2.0).abs() < 1e-12, "radius spans both circles");
    }

    #[test]
    fn enclosure_contains_every_input() {
        let circles = [
            c(0.0, 0.0, 1.0),
            c(3.0, 1.0, 0.5),
            c(-2.0, 2.5, 1.5),
            c(0.5, -3.0, 0.75),
            c(1.0, 1.0, 0.1),
        ];
        let mut rng = Lcg::new();
        let e = enclose(&circles, &mut rng).unwrap();
        for &p in &circles {
            assert!(contains(e, p), "{p:?} escapes {e:?}");
        }
    }

    #[test]
    fn empty_input_has_no_enclosure() {
        let mut rng = Lcg::new();
        assert!(enclose(&[], &mut rng).is_none());
    }

    #[test]
    fn lcg_stays_in_unit_interval() {
        let mut rng = Lcg::new();
        for _ in 0..1000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v), "{v} out of range");
        }
    }
}
