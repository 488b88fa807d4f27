//! Word-sized modular arithmetic
//!
//! These helpers back the fast paths taken when an operand fits in a `u64`.
//! Products are widened to `u128` so no intermediate overflows, which keeps
//! them exact for every modulus below 2⁶⁴.

/// Perform modular multiplication: (a * b) mod m
#[inline]
pub fn mod_mul(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

/// Perform modular exponentiation (a^b mod m)
///
/// Implements the square-and-multiply algorithm.
pub fn mod_exp(a: u64, b: u64, m: u64) -> u64 {
    if m == 1 {
        return 0;
    }

    let mut result = 1;
    let mut base = a % m;
    let mut exp = b;

    while exp > 0 {
        if exp & 1 == 1 {
            result = mod_mul(result, base, m);
        }

        exp >>= 1;
        base = mod_mul(base, base, m);
    }

    result
}

/// Compute the greatest common divisor of two numbers
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Extended Euclidean algorithm to compute a^(-1) mod m
pub fn mod_inv(a: u64, m: u64) -> Option<u64> {
    if m == 0 || m == 1 {
        return None;
    }

    let a = a % m;
    if a == 0 {
        return None;
    }

    // Signed Bézout coefficients need one extra bit over the modulus.
    let (mut old_r, mut r) = (a as i128, m as i128);
    let (mut old_s, mut s) = (1i128, 0i128);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }

    if old_r != 1 {
        return None;
    }

    Some(old_s.rem_euclid(m as i128) as u64)
}

/// Integer square root: the largest `r` with `r² <= n`
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }

    // Newton iteration from ceil(n / 2), decreasing monotonically to the floor.
    let mut x = n;
    let mut y = n / 2 + (n & 1);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}
