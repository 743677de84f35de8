pub mod gcd;
pub mod pythagorean;

pub use gcd::gcd;
pub use pythagorean::{PythagoreanTriples, Triple, pythagorean_triples, triple_with_perimeter};
