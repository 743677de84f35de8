/// Greatest common divisor of a and b (Euclid's algorithm).
///
/// `gcd(n, 0) = n` and `gcd(0, 0) = 0`.
///
/// # Example
///
/// ```
/// use math::gcd::gcd;
///
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(25, 4), 1);
/// ```
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
