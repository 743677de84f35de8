use math::Triple;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// No generated triple sums to the requested perimeter.
    #[error("no Pythagorean triple has perimeter {perimeter}")]
    NoSolution { perimeter: u64 },

    #[error("product of {triple} overflows u64")]
    ProductOverflow { triple: Triple },
}
