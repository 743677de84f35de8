//! Pythagorean triples from Euclid's parameterization.
//!
//! For generators m > n > 0 with m + n odd and gcd(m, n) = 1:
//!
//! - a = m² - n²
//! - b = 2mn
//! - c = m² + n²
//!
//! is a primitive triple, and every other triple is (da, db, dc) for some
//! primitive triple and integer d ≥ 1.

use std::fmt;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::gcd::gcd;

/// A Pythagorean triple (a, b, c) with a² + b² = c².
///
/// Sides keep the order the generator produced them in, so `a` may be
/// larger than `b` (m = 4, n = 1 gives `[15, 8, 17]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triple {
    pub a: u64,
    pub b: u64,
    pub c: u64,
}

impl Triple {
    pub fn new(a: u64, b: u64, c: u64) -> Self {
        let triple = Triple { a, b, c };
        debug_assert!(triple.is_pythagorean(), "{} is not a Pythagorean triple", triple);
        triple
    }

    /// Primitive triple (m² - n², 2mn, m² + n²).
    ///
    /// Callers must pass m > n > 0; coprimality and parity are not checked.
    pub fn from_generators(m: u64, n: u64) -> Self {
        debug_assert!(m > n && n > 0, "generators must satisfy m > n > 0");
        Triple {
            a: m * m - n * n,
            b: 2 * m * n,
            c: m * m + n * n,
        }
    }

    /// Scale every side by d.
    pub fn scale(&self, d: u64) -> Self {
        Triple {
            a: d * self.a,
            b: d * self.b,
            c: d * self.c,
        }
    }

    pub fn perimeter(&self) -> u64 {
        self.a + self.b + self.c
    }

    /// Product a·b·c, or None if it overflows u64.
    pub fn checked_product(&self) -> Option<u64> {
        self.a.checked_mul(self.b)?.checked_mul(self.c)
    }

    pub fn is_pythagorean(&self) -> bool {
        let (a, b, c) = (self.a as u128, self.b as u128, self.c as u128);
        (a * a).checked_add(b * b) == Some(c * c)
    }

    /// True when gcd(a, b, c) = 1.
    pub fn is_primitive(&self) -> bool {
        gcd(gcd(self.a, self.b), self.c) == 1
    }

    pub fn sides(&self) -> [u64; 3] {
        [self.a, self.b, self.c]
    }
}

impl From<Triple> for [u64; 3] {
    fn from(triple: Triple) -> Self {
        triple.sides()
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.a, self.b, self.c)
    }
}

/// Iterator over every Pythagorean triple with perimeter at most `max_perimeter`.
///
/// Walks m = 2, 3, ... while m² + 1 fits the bound, and n = 1..m for each m.
/// Each valid (m, n) pair yields its primitive triple scaled by
/// d = 1, 2, 3, ... for as long as the scaled perimeter fits.
///
/// # Example
///
/// ```
/// use math::pythagorean::PythagoreanTriples;
///
/// let triples: Vec<[u64; 3]> = PythagoreanTriples::new(30).map(Into::into).collect();
/// assert_eq!(triples, vec![[3, 4, 5], [6, 8, 10], [5, 12, 13]]);
/// ```
#[derive(Debug, Clone)]
pub struct PythagoreanTriples {
    max_perimeter: u64,
    m: u64,
    n: u64,
    /// Primitive triple being scaled and the next multiplier to emit.
    scaling: Option<(Triple, u64)>,
}

impl PythagoreanTriples {
    pub fn new(max_perimeter: u64) -> Self {
        PythagoreanTriples {
            max_perimeter,
            m: 2,
            n: 1,
            scaling: None,
        }
    }

    pub fn max_perimeter(&self) -> u64 {
        self.max_perimeter
    }

    /// Outer loop bound, always evaluated with n = 1.
    fn m_in_range(&self) -> bool {
        self.m
            .checked_mul(self.m)
            .and_then(|square| square.checked_add(1))
            .is_some_and(|c| c <= self.max_perimeter)
    }

    fn advance_m(&mut self) {
        self.m += 1;
        self.n = 1;
    }
}

impl Iterator for PythagoreanTriples {
    type Item = Triple;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((primitive, d)) = self.scaling {
                let fits = d
                    .checked_mul(primitive.perimeter())
                    .is_some_and(|p| p <= self.max_perimeter);
                if fits {
                    self.scaling = Some((primitive, d + 1));
                    return Some(primitive.scale(d));
                }
                self.scaling = None;
                self.n += 1;
            }

            if self.n >= self.m {
                self.advance_m();
            }
            if self.n == 1 && !self.m_in_range() {
                return None;
            }

            let (m, n) = (self.m, self.n);
            if (m + n).is_multiple_of(2) || gcd(m, n) != 1 {
                self.n += 1;
                continue;
            }

            let primitive = Triple::from_generators(m, n);
            if primitive.perimeter() > self.max_perimeter {
                // The primitive perimeter is 2m(m + n), strictly increasing in n,
                // so no larger n for this m fits either. Move on to m + 1.
                trace!(m, n, perimeter = primitive.perimeter(), "pruning remaining n");
                self.advance_m();
                continue;
            }
            self.scaling = Some((primitive, 1));
        }
    }
}

impl FusedIterator for PythagoreanTriples {}

/// Returns every Pythagorean triple whose perimeter is at most `max_perimeter`,
/// in generation order.
///
/// Bounds below 12 (the perimeter of [3, 4, 5]) give an empty vector.
///
/// # Example
///
/// ```
/// use math::pythagorean::{pythagorean_triples, Triple};
///
/// assert_eq!(pythagorean_triples(12), vec![Triple::new(3, 4, 5)]);
/// assert!(pythagorean_triples(11).is_empty());
/// ```
pub fn pythagorean_triples(max_perimeter: u64) -> Vec<Triple> {
    let triples: Vec<Triple> = PythagoreanTriples::new(max_perimeter).collect();
    debug!(max_perimeter, count = triples.len(), "generated Pythagorean triples");
    triples
}

/// Returns the first triple, in generation order, whose perimeter is exactly
/// `perimeter`, or None if there is no such triple.
///
/// # Example
///
/// ```
/// use math::pythagorean::{triple_with_perimeter, Triple};
///
/// assert_eq!(triple_with_perimeter(1000), Some(Triple::new(375, 200, 425)));
/// assert_eq!(triple_with_perimeter(1001), None);
/// ```
pub fn triple_with_perimeter(perimeter: u64) -> Option<Triple> {
    PythagoreanTriples::new(perimeter).find(|triple| triple.perimeter() == perimeter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sides(triples: &[Triple]) -> Vec<[u64; 3]> {
        triples.iter().map(Triple::sides).collect()
    }

    #[test]
    fn test_from_generators() {
        // (m=2, n=1) → (3, 4, 5)
        assert_eq!(Triple::from_generators(2, 1), Triple::new(3, 4, 5));
        // (m=4, n=1) → (15, 8, 17): a is not always the shorter leg
        assert_eq!(Triple::from_generators(4, 1), Triple::new(15, 8, 17));
        assert_eq!(Triple::from_generators(3, 2), Triple::new(5, 12, 13));
    }

    #[test]
    fn test_triple_helpers() {
        let triple = Triple::new(3, 4, 5);
        assert_eq!(triple.perimeter(), 12);
        assert_eq!(triple.checked_product(), Some(60));
        assert_eq!(triple.scale(3), Triple::new(9, 12, 15));
        assert!(triple.is_primitive());
        assert!(!triple.scale(2).is_primitive());
        assert_eq!(<[u64; 3]>::from(triple), [3, 4, 5]);
        assert_eq!(triple.to_string(), "[3, 4, 5]");
    }

    #[test]
    fn test_is_pythagorean() {
        assert!(Triple { a: 20, b: 21, c: 29 }.is_pythagorean());
        assert!(!Triple { a: 2, b: 3, c: 4 }.is_pythagorean());
    }

    #[test]
    fn test_checked_product_overflow() {
        let big = Triple::new(3, 4, 5).scale(1 << 21);
        assert_eq!(big.checked_product(), None);
    }

    #[test]
    fn test_empty_below_smallest_perimeter() {
        assert!(pythagorean_triples(0).is_empty());
        assert!(pythagorean_triples(1).is_empty());
        assert!(pythagorean_triples(11).is_empty());
    }

    #[test]
    fn test_smallest_perimeter() {
        assert_eq!(sides(&pythagorean_triples(12)), vec![[3, 4, 5]]);
    }

    #[test]
    fn test_generation_order() {
        assert_eq!(
            sides(&pythagorean_triples(40)),
            vec![[3, 4, 5], [6, 8, 10], [9, 12, 15], [5, 12, 13], [15, 8, 17]]
        );
        assert_eq!(
            sides(&pythagorean_triples(60)),
            vec![
                [3, 4, 5],
                [6, 8, 10],
                [9, 12, 15],
                [12, 16, 20],
                [15, 20, 25],
                [5, 12, 13],
                [10, 24, 26],
                [15, 8, 17],
                [7, 24, 25],
            ]
        );
    }

    #[test]
    fn test_counts() {
        assert_eq!(pythagorean_triples(100).len(), 17);
        assert_eq!(pythagorean_triples(1000).len(), 325);
    }

    #[test]
    fn test_perimeter_1000() {
        let triples = pythagorean_triples(1000);
        let matches: Vec<&Triple> = triples.iter().filter(|t| t.perimeter() == 1000).collect();
        assert_eq!(matches.len(), 1);

        let found = *matches[0];
        let mut sorted = found.sides();
        sorted.sort();
        assert_eq!(sorted, [200, 375, 425]);
        // 25 * (15, 8, 17) from m=4, n=1
        assert_eq!(found, Triple::new(375, 200, 425));
        assert_eq!(found.checked_product(), Some(31_875_000));
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(pythagorean_triples(500), pythagorean_triples(500));
    }

    #[test]
    fn test_iterator_matches_vec() {
        let lazy: Vec<Triple> = PythagoreanTriples::new(300).collect();
        assert_eq!(lazy, pythagorean_triples(300));
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut triples = PythagoreanTriples::new(12);
        assert_eq!(triples.next(), Some(Triple::new(3, 4, 5)));
        assert_eq!(triples.next(), None);
        assert_eq!(triples.next(), None);
    }

    #[test]
    fn test_triple_with_perimeter() {
        assert_eq!(triple_with_perimeter(12), Some(Triple::new(3, 4, 5)));
        assert_eq!(triple_with_perimeter(1000), Some(Triple::new(375, 200, 425)));
        assert_eq!(triple_with_perimeter(0), None);
        assert_eq!(triple_with_perimeter(11), None);
        assert_eq!(triple_with_perimeter(1001), None);
    }

    #[test]
    fn test_triple_with_perimeter_returns_first_match() {
        // 120 has three solutions: [30, 40, 50], [20, 48, 52], [45, 24, 51]
        assert_eq!(triple_with_perimeter(120), Some(Triple::new(30, 40, 50)));
    }

    #[test]
    fn test_huge_bound_does_not_overflow() {
        let mut triples = PythagoreanTriples::new(u64::MAX);
        assert_eq!(triples.next(), Some(Triple::new(3, 4, 5)));
        assert_eq!(triples.max_perimeter(), u64::MAX);
    }
}
