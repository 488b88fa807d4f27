//! Primality testing trait

use num_bigint::BigUint;

/// A primality decision procedure.
///
/// Curve searches use this to validate candidate group orders, so a search
/// can be run with a cheaper or stricter tester than the default.
pub trait PrimalityTest {
    /// Name of the strategy, for reports
    fn name(&self) -> &'static str;

    /// Decide whether `n` is prime.
    ///
    /// Implementations must never report a prime as composite. Probabilistic
    /// implementations may, with negligible probability, report a composite
    /// as prime; they document the range where they are exact.
    fn is_prime(&self, n: &BigUint) -> bool;
}

impl<T: PrimalityTest + ?Sized> PrimalityTest for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn is_prime(&self, n: &BigUint) -> bool {
        (**self).is_prime(n)
    }
}
