//! Mirror images.
//!
//! Reflecting a trihex keeps its spine length and belt count and sends the
//! offset `k` to `(n - r - k) mod (n + 1)`. The reflection is an involution.

use crate::{alternates, Result, Signature};

/// Signature of the mirror-image trihex.
///
/// # Examples
///
/// ```
/// use trihex_signature::{mirror, Signature};
///
/// let sig = Signature::new(5, 0, 2).unwrap();
/// assert_eq!(mirror(sig), Signature::new(5, 0, 3).unwrap());
/// assert_eq!(mirror(mirror(sig)), sig);
/// ```
pub fn mirror(sig: Signature) -> Signature {
    let (n, r, k) = sig.as_tuple();
    let modulus = i128::from(n) + 1;
    let offset = (i128::from(n) - i128::from(r) - i128::from(k)).rem_euclid(modulus);
    Signature::new_unchecked(n, r, offset as u64)
}

/// Whether the trihex coincides with its own mirror image, i.e. the
/// reflected signature is one of its three readings.
pub fn is_achiral(sig: Signature) -> Result<bool> {
    let reflected = mirror(sig);
    if reflected == sig {
        return Ok(true);
    }
    let alts = alternates(sig)?;
    Ok(reflected == alts.second || reflected == alts.third)
}
