//! Trihex Signature Arithmetic
//!
//! Enumeration and canonicalization of trihexes by their integer signatures.
//!
//! # Mathematical Foundation
//!
//! A trihex is labelled by a signature `(n, r, k)`: spine length, belt count
//! and offset, with `0 ≤ k ≤ n`. The same geometric trihex can be read off
//! in three ways, giving three algebraically related signatures:
//! - the signature itself
//! - two alternates derived by solving linear congruences mod `n + 1`
//!
//! Adding the mirror image doubles the class to at most six signatures.
//!
//! Every signature in a class shares the hexagon count
//! `h = 2nr + 2n + 2r`, which factors as `(n + 1)(r + 1) = h/2 + 1`.
//! Enumerating the divisors of `h/2 + 1` therefore yields every signature
//! with `h` hexagons.
//!
//! # Canonical Representatives
//!
//! Each class is identified by its member with the smallest `(r, k)` pair.
//! Counting the signatures that are their own representative counts the
//! distinct trihexes, with or without mirror images collapsed.

mod error;
mod modular;
mod signature;
mod transform;
mod mirror;
mod orbit;
mod cache;
mod enumerate;

pub use error::{Error, Result};
pub use modular::{solve, order, solve_by_gcd};
pub use signature::Signature;
pub use transform::{Alternates, alternates, alternates_with_mirror};
pub use mirror::{mirror, is_achiral};
pub use orbit::{MirrorPolicy, Orbit, orbit3, orbit6, canonical, canonical3, canonical6, sorted_orbit3, sorted_orbit6};
pub use cache::CanonicalCache;
pub use enumerate::{
    SignatureGrid, divisors, divisor_sum, signatures_for_hexagon_count,
    unique_signatures, unique_signatures_with, unique_signatures3, unique_signatures6, count_up_to,
};

/// Signatures in an orbit under the alternate-signature transform.
pub const ORBIT_SIZE: usize = 3;

/// Mirror images per trihex (the trihex and its reflection).
pub const MIRROR_IMAGES: usize = 2;

/// Signatures in an orbit once mirror images are collapsed.
pub const MIRROR_ORBIT_SIZE: usize = 6;

// Compile-time assertion that mirrors double the orbit
const _: () = assert!(ORBIT_SIZE * MIRROR_IMAGES == MIRROR_ORBIT_SIZE);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_size_invariant() {
        assert_eq!(ORBIT_SIZE * MIRROR_IMAGES, MIRROR_ORBIT_SIZE);
    }

    #[test]
    fn eight_hexagon_census() {
        let all = signatures_for_hexagon_count(8);
        assert_eq!(all.len(), 6);

        let unique3 = unique_signatures3(8).unwrap();
        let unique6 = unique_signatures6(8).unwrap();
        let expected = vec![Signature::new(4, 0, 0).unwrap(), Signature::new(4, 0, 1).unwrap()];
        assert_eq!(unique3, expected);
        assert_eq!(unique6, expected);
    }
}
