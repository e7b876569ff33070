//! Alternate signatures.
//!
//! Reading a trihex from each of its three spine directions gives three
//! signatures. Starting from `(n1, r1, k1)` with modulus `m = n1 + 1`:
//!
//! ```text
//! j2 = order(k1, m)              j3 = order(k1 + r1 + 1, m)
//! n2 = j2(r1 + 1) - 1            n3 = j3(r1 + 1) - 1
//! r2 = (h - 2n2) / (2n2 + 2)     r3 = (h - 2n3) / (2n3 + 2)
//! p2 = solve(k1, r2 + 1, m)      p3 = solve(k1 + r1 + 1, r3 + 1, m)
//! k2 = (n2 - p2(r1 + 1) - r2) mod (n2 + 1)
//! k3 = (n3 - p3·r1 - p3 + 1)  mod (n3 + 1)
//! ```
//!
//! The belt-count divisions must be exact. A remainder means the input was
//! not a trihex signature and is reported as
//! [`Error::NonIntegralTransform`] instead of being truncated away.

use crate::{mirror, order, solve, Error, Result, Signature};

/// The two alternates of a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alternates {
    /// Signature read along the direction of the offset (`sig2`)
    pub second: Signature,
    /// Signature read along the remaining direction (`sig3`)
    pub third: Signature,
}

impl Alternates {
    /// Both alternates as a pair.
    #[inline]
    pub const fn pair(&self) -> (Signature, Signature) {
        (self.second, self.third)
    }
}

impl From<Alternates> for (Signature, Signature) {
    fn from(value: Alternates) -> Self {
        value.pair()
    }
}

/// Compute the two alternate signatures of `sig`.
///
/// # Examples
///
/// ```
/// use trihex_signature::{alternates, Signature};
///
/// let sig = Signature::new(4, 0, 1).unwrap();
/// let alts = alternates(sig).unwrap();
/// assert_eq!(alts.second, Signature::new(4, 0, 3).unwrap());
/// assert_eq!(alts.third, Signature::new(4, 0, 2).unwrap());
/// ```
pub fn alternates(sig: Signature) -> Result<Alternates> {
    let (n1, r1, k1) = sig.as_tuple();
    let overflow = || Error::Overflow { signature: sig };

    let modulus = n1.checked_add(1).ok_or_else(overflow)?;
    let belts = r1.checked_add(1).ok_or_else(overflow)?;
    let across = k1.checked_add(belts).ok_or_else(overflow)?;
    let hexagons = i128::from(n1) * i128::from(r1) * 2 + 2 * i128::from(n1) + 2 * i128::from(r1);

    let j2 = order(k1, modulus)?;
    let j3 = order(across, modulus)?;

    let n2 = spine_length(sig, j2, belts)?;
    let n3 = spine_length(sig, j3, belts)?;

    let r2 = belt_count(sig, hexagons, n2)?;
    let r3 = belt_count(sig, hexagons, n3)?;

    let p2 = i128::from(solve(k1, r2 + 1, modulus)?);
    let p3 = i128::from(solve(across, r3 + 1, modulus)?);

    let (n2w, n3w) = (i128::from(n2), i128::from(n3));
    let k2 = (n2w - p2 * i128::from(belts) - i128::from(r2)).rem_euclid(n2w + 1);
    let k3 = (n3w - p3 * i128::from(r1) - p3 + 1).rem_euclid(n3w + 1);

    // rem_euclid keeps both offsets in [0, n']
    Ok(Alternates {
        second: Signature::new_unchecked(n2, r2, k2 as u64),
        third: Signature::new_unchecked(n3, r3, k3 as u64),
    })
}

/// The five companions of `sig` once mirror images are included:
/// both alternates, the mirror, and both alternates of the mirror.
pub fn alternates_with_mirror(sig: Signature) -> Result<[Signature; 5]> {
    let direct = alternates(sig)?;
    let reflected = mirror(sig);
    let reflected_alts = alternates(reflected)?;
    Ok([
        direct.second,
        direct.third,
        reflected,
        reflected_alts.second,
        reflected_alts.third,
    ])
}

/// `j(r1 + 1) - 1`; `j ≥ 1` so the result is never negative.
fn spine_length(sig: Signature, j: u64, belts: u64) -> Result<u64> {
    j.checked_mul(belts)
        .map(|spines| spines - 1)
        .ok_or(Error::Overflow { signature: sig })
}

/// `(h - 2n') / (2n' + 2)`, rejecting a remainder.
fn belt_count(sig: Signature, hexagons: i128, spine: u64) -> Result<u64> {
    let spine = i128::from(spine);
    let quotient = exact_div(sig, hexagons - 2 * spine, 2 * spine + 2)?;
    u64::try_from(quotient).map_err(|_| Error::NonIntegralTransform {
        signature: sig,
        numerator: hexagons - 2 * spine,
        denominator: 2 * spine + 2,
    })
}

/// Division that must leave no remainder.
pub(crate) fn exact_div(sig: Signature, numerator: i128, denominator: i128) -> Result<i128> {
    if denominator == 0 || numerator % denominator != 0 {
        return Err(Error::NonIntegralTransform {
            signature: sig,
            numerator,
            denominator,
        });
    }
    Ok(numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sig(n: u64, r: u64, k: u64) -> Signature {
        Signature::new(n, r, k).unwrap()
    }

    #[test]
    fn eight_hexagon_alternates() {
        assert_eq!(alternates(sig(0, 4, 0)).unwrap().pair(), (sig(4, 0, 4), sig(4, 0, 0)));
        assert_eq!(alternates(sig(4, 0, 0)).unwrap().pair(), (sig(0, 4, 0), sig(4, 0, 4)));
        assert_eq!(alternates(sig(4, 0, 1)).unwrap().pair(), (sig(4, 0, 3), sig(4, 0, 2)));
    }

    #[test]
    fn origin_alternates_are_itself() {
        let alts = alternates(Signature::ORIGIN).unwrap();
        assert_eq!(alts.pair(), (Signature::ORIGIN, Signature::ORIGIN));
    }

    #[test]
    fn mixed_spines_and_belts() {
        assert_eq!(alternates(sig(2, 1, 0)).unwrap().pair(), (sig(1, 2, 1), sig(5, 0, 2)));
        assert_eq!(alternates(sig(1, 2, 1)).unwrap().pair(), (sig(5, 0, 2), sig(2, 1, 0)));
        assert_eq!(alternates(sig(3, 1, 2)).unwrap().pair(), (sig(3, 1, 0), sig(1, 3, 0)));
    }

    #[test]
    fn companions_include_mirror() {
        let s = sig(2, 1, 1);
        let companions = alternates_with_mirror(s).unwrap();
        assert_eq!(companions[2], mirror(s));
        let direct = alternates(s).unwrap();
        assert_eq!(&companions[..2], &[direct.second, direct.third]);
    }

    #[test]
    fn exact_div_rejects_remainder() {
        let s = Signature::ORIGIN;
        assert_eq!(exact_div(s, 12, 4), Ok(3));
        assert_eq!(exact_div(s, 0, 7), Ok(0));
        assert_eq!(
            exact_div(s, 13, 4),
            Err(Error::NonIntegralTransform {
                signature: s,
                numerator: 13,
                denominator: 4
            })
        );
        assert!(exact_div(s, 1, 0).is_err());
    }

    #[test]
    fn hexagon_count_invariant_small_grid() {
        for n in 0..=12 {
            for r in 0..=12 {
                for k in 0..=n {
                    let s = sig(n, r, k);
                    let alts = alternates(s).unwrap();
                    assert_eq!(alts.second.hexagon_count(), s.hexagon_count(), "sig2 of {}", s);
                    assert_eq!(alts.third.hexagon_count(), s.hexagon_count(), "sig3 of {}", s);
                }
            }
        }
    }

    #[test]
    fn alternates_close_the_orbit() {
        // Each alternate's alternates are the other two members
        for n in 0..=8 {
            for r in 0..=8 {
                for k in 0..=n {
                    let s = sig(n, r, k);
                    let alts = alternates(s).unwrap();
                    let mut orbit = vec![s, alts.second, alts.third];
                    orbit.sort();
                    for member in [alts.second, alts.third] {
                        let back = alternates(member).unwrap();
                        let mut other = vec![member, back.second, back.third];
                        other.sort();
                        assert_eq!(orbit, other, "orbit of {} via {}", s, member);
                    }
                }
            }
        }
    }

    proptest! {
        #[test]
        fn alternates_preserve_hexagons(n in 0u64..40, r in 0u64..40, k_seed in 0u64..1000) {
            let s = sig(n, r, k_seed % (n + 1));
            let alts = alternates(s).unwrap();
            prop_assert_eq!(alts.second.hexagon_count(), s.hexagon_count());
            prop_assert_eq!(alts.third.hexagon_count(), s.hexagon_count());
        }
    }
}
