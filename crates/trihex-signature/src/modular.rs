//! Linear congruences over a bounded residue range.
//!
//! `solve(a, r, n)` returns the smallest `x` in `[1, n]` with
//! `a·x ≡ r (mod n)`. The range always has exactly `n` candidates and `n`
//! stays small for real trihexes, so the reference path scans it.
//! `solve_by_gcd` gives the same answer in closed form for large moduli.

use crate::{Error, Result};

/// Smallest `x` in `[1, n]` with `a·x ≡ r (mod n)`, by exhaustive scan.
///
/// Fails with [`Error::NoSolution`] when the scan finds nothing, which
/// happens exactly when `gcd(a, n)` does not divide `r` (and always for
/// `n = 0`, whose range is empty).
///
/// # Examples
///
/// ```
/// use trihex_signature::solve;
///
/// assert_eq!(solve(3, 1, 5).unwrap(), 2); // 3·2 = 6 ≡ 1
/// assert!(solve(2, 1, 4).is_err());       // even·x is never odd mod 4
/// ```
pub fn solve(a: u64, r: u64, n: u64) -> Result<u64> {
    if n == 0 {
        return Err(Error::NoSolution { a, r, n });
    }
    let target = r % n;
    let coefficient = u128::from(a % n);
    let modulus = u128::from(n);

    (1..=n)
        .find(|&x| (coefficient * u128::from(x)) % modulus == u128::from(target))
        .ok_or(Error::NoSolution { a, r, n })
}

/// Additive order of `a` in `Z_n`: smallest positive `x` with `a·x ≡ 0`.
///
/// Equals `n / gcd(a, n)` but goes through the same scan as [`solve`].
#[inline]
pub fn order(a: u64, n: u64) -> Result<u64> {
    solve(a, 0, n)
}

/// Closed-form equivalent of [`solve`] via the extended Euclidean algorithm.
///
/// Same contract: the smallest solution in `[1, n]`, or
/// [`Error::NoSolution`] when `gcd(a, n) ∤ r`.
pub fn solve_by_gcd(a: u64, r: u64, n: u64) -> Result<u64> {
    if n == 0 {
        return Err(Error::NoSolution { a, r, n });
    }
    let a_mod = a % n;
    let r_mod = r % n;
    let (g, inverse, _) = extended_gcd(i128::from(a_mod), i128::from(n));
    let g_unsigned = g as u64;
    if r_mod % g_unsigned != 0 {
        return Err(Error::NoSolution { a, r, n });
    }

    // Solutions repeat with period n/g; the smallest non-negative one is x0.
    let period = i128::from(n / g_unsigned);
    let x0 = (i128::from(r_mod / g_unsigned) * inverse).rem_euclid(period);
    let x = if x0 == 0 { period } else { x0 };
    Ok(x as u64)
}

/// Returns `(g, s, t)` with `a·s + b·t = g = gcd(a, b)`.
fn extended_gcd(a: i128, b: i128) -> (i128, i128, i128) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_s, mut s) = (1i128, 0i128);
    let (mut old_t, mut t) = (0i128, 1i128);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
        (old_t, t) = (t, old_t - q * t);
    }
    (old_r, old_s, old_t)
}
