//! Trihex signatures.
//!
//! A signature `(n, r, k)` labels one reading of a trihex: `n` is the spine
//! length, `r` the number of belts and `k` the offset between spines, with
//! `0 ≤ k ≤ n`. Hexagon and vertex counts are pure functions of the triple.

use std::cmp::Ordering;

use crate::{Error, Result};

/// One labelling of a trihex.
///
/// Fields are private so every value upholds `k ≤ n`; build one with
/// [`Signature::new`] or `TryFrom<(u64, u64, u64)>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(u64, u64, u64)", into = "(u64, u64, u64)"))]
pub struct Signature {
    n: u64,
    r: u64,
    k: u64,
}

impl Signature {
    /// The degenerate trihex `(0, 0, 0)`, its own canonical form.
    pub const ORIGIN: Self = Self { n: 0, r: 0, k: 0 };

    /// Create a signature, rejecting offsets beyond the spine length and
    /// triples whose vertex count does not fit in a `u64`.
    pub const fn new(n: u64, r: u64, k: u64) -> Result<Self> {
        if k > n {
            return Err(Error::InvalidSignature { n, r, k });
        }
        let sig = Self { n, r, k };
        if checked_vertex_count(n, r).is_none() {
            return Err(Error::Overflow { signature: sig });
        }
        Ok(sig)
    }

    /// Caller guarantees `k ≤ n`; used where the bound holds by construction.
    #[inline]
    pub(crate) const fn new_unchecked(n: u64, r: u64, k: u64) -> Self {
        debug_assert!(k <= n);
        Self { n, r, k }
    }

    /// Spine length.
    #[inline]
    pub const fn n(&self) -> u64 {
        self.n
    }

    /// Belt count.
    #[inline]
    pub const fn r(&self) -> u64 {
        self.r
    }

    /// Offset.
    #[inline]
    pub const fn k(&self) -> u64 {
        self.k
    }

    /// The triple as a tuple.
    #[inline]
    pub const fn as_tuple(&self) -> (u64, u64, u64) {
        (self.n, self.r, self.k)
    }

    /// Number of hexagons: `2nr + 2n + 2r`.
    ///
    /// Shared by every signature of the same trihex. Cannot overflow, since
    /// construction bounds the vertex count.
    pub const fn hexagon_count(&self) -> u64 {
        2 * self.n * self.r + 2 * self.n + 2 * self.r
    }

    /// Number of vertices: `4nr + 4n + 4r + 4`, i.e. `2h + 4`.
    pub const fn vertex_count(&self) -> u64 {
        4 * self.n * self.r + 4 * self.n + 4 * self.r + 4
    }

    /// Key used to pick canonical representatives: fewer belts first, then
    /// smaller offset.
    #[inline]
    pub const fn canonical_key(&self) -> (u64, u64) {
        (self.r, self.k)
    }

    /// Compare by [`canonical_key`](Self::canonical_key).
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.canonical_key().cmp(&other.canonical_key())
    }
}

/// `4(nr + n + r + 1)`, or `None` past `u64::MAX`.
const fn checked_vertex_count(n: u64, r: u64) -> Option<u64> {
    let belts = match n.checked_mul(r) {
        Some(nr) => nr,
        None => return None,
    };
    let cells = match belts.checked_add(n) {
        Some(v) => v.checked_add(r),
        None => None,
    };
    match cells {
        Some(v) => match v.checked_add(1) {
            Some(v) => v.checked_mul(4),
            None => None,
        },
        None => None,
    }
}

impl TryFrom<(u64, u64, u64)> for Signature {
    type Error = Error;

    fn try_from((n, r, k): (u64, u64, u64)) -> Result<Self> {
        Self::new(n, r, k)
    }
}

impl From<Signature> for (u64, u64, u64) {
    fn from(value: Signature) -> Self {
        value.as_tuple()
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.n, self.r, self.k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_zero() {
        let origin = Signature::ORIGIN;
        assert_eq!(origin.as_tuple(), (0, 0, 0));
        assert_eq!(origin.hexagon_count(), 0);
        assert_eq!(origin.vertex_count(), 4);
    }

    #[test]
    fn offset_bounded_by_spine() {
        assert!(Signature::new(3, 7, 0).is_ok());
        assert!(Signature::new(3, 7, 3).is_ok());
        assert_eq!(
            Signature::new(3, 7, 4),
            Err(Error::InvalidSignature { n: 3, r: 7, k: 4 })
        );
        assert!(Signature::try_from((0, 5, 1)).is_err());
    }

    #[test]
    fn oversized_triples_rejected() {
        let n = 1 << 32;
        assert_eq!(
            Signature::new(n, n, 0),
            Err(Error::Overflow { signature: Signature::new_unchecked(n, n, 0) })
        );
        assert!(Signature::try_from((u64::MAX, 1, 0)).is_err());
        assert!(Signature::try_from((u64::MAX / 4, 0, 0)).is_err());

        // Largest spine with no belts: 4(n + 1) = u64::MAX - 3
        let largest = Signature::new(u64::MAX / 4 - 1, 0, 0).unwrap();
        assert_eq!(largest.vertex_count(), u64::MAX - 3);
        assert_eq!(largest.hexagon_count(), u64::MAX / 2 - 3);
    }

    #[test]
    fn hexagon_count_formula() {
        let cases = [
            ((0, 4, 0), 8),
            ((4, 0, 3), 8),
            ((1, 1, 0), 6),
            ((2, 3, 1), 22),
            ((12, 12, 5), 336),
        ];
        for ((n, r, k), expected) in cases {
            let sig = Signature::new(n, r, k).unwrap();
            assert_eq!(sig.hexagon_count(), expected, "hexagons of {}", sig);
        }
    }

    #[test]
    fn vertices_are_twice_hexagons_plus_four() {
        for n in 0..10 {
            for r in 0..10 {
                let sig = Signature::new(n, r, 0).unwrap();
                assert_eq!(sig.vertex_count(), 2 * sig.hexagon_count() + 4);
            }
        }
    }

    #[test]
    fn hexagon_count_factors() {
        // (n + 1)(r + 1) = h/2 + 1
        let sig = Signature::new(5, 2, 1).unwrap();
        assert_eq!((sig.n() + 1) * (sig.r() + 1), sig.hexagon_count() / 2 + 1);
    }

    #[test]
    fn canonical_order_prefers_fewer_belts() {
        let a = Signature::new(4, 0, 3).unwrap();
        let b = Signature::new(0, 4, 0).unwrap();
        let c = Signature::new(4, 0, 1).unwrap();

        assert_eq!(a.canonical_cmp(&b), Ordering::Less);
        assert_eq!(c.canonical_cmp(&a), Ordering::Less);
        assert_eq!(a.canonical_cmp(&a), Ordering::Equal);
    }

    #[test]
    fn display_as_triple() {
        let sig = Signature::new(4, 0, 1).unwrap();
        assert_eq!(sig.to_string(), "(4, 0, 1)");
    }
}
