//! Project Euler Problem 9: Special Pythagorean Triplet.
//!
//! There is exactly one Pythagorean triple with a + b + c = 1000.
//! Find the product abc.

pub mod error;

pub use error::{Error, Result};

use math::{Triple, pythagorean_triples};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::debug;

/// Perimeter of the triple the problem asks for.
pub const DEFAULT_PERIMETER: u64 = 1000;

/// The triple with the requested perimeter and the product of its sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    pub triple: Triple,
    pub product: u64,
}

/// A timed solution, rendered as the two report lines.
#[derive(Debug, Clone, Copy)]
pub struct Report {
    pub perimeter: u64,
    pub solution: Solution,
    pub elapsed: Duration,
}

impl Report {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "   a*b*c of Pythagorean Triple whose sum is {}:   {}",
            self.perimeter, self.solution.product
        )?;
        write!(
            f,
            "   Computation Time:                                {:.3}ms",
            self.elapsed_ms()
        )
    }
}

/// Generate every triple up to `perimeter` and take the first whose sides sum
/// to exactly `perimeter`.
///
/// Returns [`Error::NoSolution`] when no triple matches, e.g. for any odd
/// perimeter.
pub fn find_triplet(perimeter: u64) -> Result<Solution> {
    let triples = pythagorean_triples(perimeter);
    debug!(perimeter, candidates = triples.len(), "scanning generated triples");

    let triple = triples
        .into_iter()
        .find(|triple| triple.perimeter() == perimeter)
        .ok_or(Error::NoSolution { perimeter })?;
    let product = triple
        .checked_product()
        .ok_or(Error::ProductOverflow { triple })?;

    debug!(%triple, product, "found triplet");
    Ok(Solution { triple, product })
}

/// Run [`find_triplet`] and measure its wall-clock time.
pub fn solve(perimeter: u64) -> Result<Report> {
    let start = Instant::now();
    let solution = find_triplet(perimeter)?;
    let elapsed = start.elapsed();
    Ok(Report {
        perimeter,
        solution,
        elapsed,
    })
}
