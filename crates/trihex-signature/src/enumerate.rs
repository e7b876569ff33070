//! Enumeration of signatures by hexagon count.
//!
//! From `h = 2((n + 1)(r + 1) - 1)` every trihex with `h` hexagons has
//! `(n + 1)(r + 1) = h/2 + 1`. Each divisor `j` of `h/2 + 1` fixes
//! `n = j - 1` and `r = (h/2 + 1)/j - 1`, and every offset `0 ≤ k ≤ n` is a
//! signature. Odd hexagon counts have no trihexes.
//!
//! Unique trihexes are the signatures that are their own canonical
//! representative.

use crate::{CanonicalCache, MirrorPolicy, Result, Signature};

/// Positive divisors of `x` in ascending order. Empty for `x = 0`.
pub fn divisors(x: u64) -> Vec<u64> {
    let mut low = Vec::new();
    let mut high = Vec::new();
    let mut d = 1u64;
    while d <= x / d {
        if x % d == 0 {
            low.push(d);
            if d != x / d {
                high.push(x / d);
            }
        }
        d += 1;
    }
    low.extend(high.into_iter().rev());
    low
}

/// Sum of the positive divisors of `x` (σ(x)).
pub fn divisor_sum(x: u64) -> u64 {
    divisors(x).iter().sum()
}

/// Every signature with exactly `h` hexagons.
///
/// Ordered by spine length, then offset. Empty for odd `h`.
///
/// # Examples
///
/// ```
/// use trihex_signature::signatures_for_hexagon_count;
///
/// let sigs = signatures_for_hexagon_count(8);
/// assert_eq!(sigs.len(), 6);
/// assert_eq!(sigs[0].as_tuple(), (0, 4, 0));
/// assert!(signatures_for_hexagon_count(7).is_empty());
/// ```
pub fn signatures_for_hexagon_count(h: u64) -> Vec<Signature> {
    if h % 2 == 1 {
        return Vec::new();
    }
    let product = h / 2 + 1;
    divisors(product)
        .into_iter()
        .flat_map(|j| {
            let n = j - 1;
            let r = product / j - 1;
            (0..=n).map(move |k| Signature::new_unchecked(n, r, k))
        })
        .collect()
}

/// Signatures with `h` hexagons that are their own representative under
/// `policy`: one per trihex.
pub fn unique_signatures(h: u64, policy: MirrorPolicy) -> Result<Vec<Signature>> {
    let mut cache = CanonicalCache::new();
    unique_signatures_with(h, policy, &mut cache)
}

/// [`unique_signatures`] sharing a caller-owned cache.
///
/// Stops at the first signature whose transform fails.
pub fn unique_signatures_with(
    h: u64,
    policy: MirrorPolicy,
    cache: &mut CanonicalCache,
) -> Result<Vec<Signature>> {
    let mut unique = Vec::new();
    for sig in signatures_for_hexagon_count(h) {
        match cache.is_canonical(sig, policy) {
            Ok(true) => unique.push(sig),
            Ok(false) => {}
            Err(e) => {
                tracing::warn!(%sig, hexagons = h, error = %e, "canonicalization failed");
                return Err(e);
            }
        }
    }
    Ok(unique)
}

/// One signature per trihex with `h` hexagons, mirror images distinct.
#[inline]
pub fn unique_signatures3(h: u64) -> Result<Vec<Signature>> {
    unique_signatures(h, MirrorPolicy::Distinct)
}

/// One signature per trihex with `h` hexagons, mirror images collapsed.
#[inline]
pub fn unique_signatures6(h: u64) -> Result<Vec<Signature>> {
    unique_signatures(h, MirrorPolicy::Collapse)
}

/// Number of trihexes for every hexagon count `0..=max_hexagons`.
pub fn count_up_to(max_hexagons: u64, policy: MirrorPolicy) -> Result<Vec<usize>> {
    let mut cache = CanonicalCache::new();
    let mut counts = Vec::with_capacity(max_hexagons as usize + 1);
    for h in 0..=max_hexagons {
        let count = unique_signatures_with(h, policy, &mut cache)?.len();
        tracing::debug!(hexagons = h, count, ?policy, "counted trihexes");
        counts.push(count);
        // Orbits never span hexagon counts
        cache.clear();
    }
    Ok(counts)
}

/// Iterator over every signature with `n < max_spine` and `r < max_belts`,
/// in `(n, r, k)` order.
#[derive(Debug, Clone)]
pub struct SignatureGrid {
    max_spine: u64,
    max_belts: u64,
    n: u64,
    r: u64,
    k: u64,
}

impl SignatureGrid {
    /// Grid of spines `0..max_spine` and belts `0..max_belts`.
    pub fn new(max_spine: u64, max_belts: u64) -> Self {
        Self {
            max_spine,
            max_belts,
            n: 0,
            r: 0,
            k: 0,
        }
    }

    /// Total number of signatures in the grid: `max_belts · T(max_spine)`.
    pub fn total(&self) -> u64 {
        self.max_belts * self.max_spine * (self.max_spine + 1) / 2
    }

    fn remaining(&self) -> u64 {
        if self.n >= self.max_spine || self.max_belts == 0 {
            return 0;
        }
        // Rest of this (n, r) row, rest of the rows for this n, then the
        // full blocks for larger n.
        let row = self.n + 1 - self.k;
        let rows = (self.max_belts - self.r - 1) * (self.n + 1);
        let later = self.max_belts
            * ((self.max_spine * (self.max_spine + 1) - (self.n + 1) * (self.n + 2)) / 2);
        row + rows + later
    }
}

impl Iterator for SignatureGrid {
    type Item = Signature;

    fn next(&mut self) -> Option<Self::Item> {
        if self.n >= self.max_spine || self.max_belts == 0 {
            return None;
        }

        let sig = Signature::new_unchecked(self.n, self.r, self.k);

        self.k += 1;
        if self.k > self.n {
            self.k = 0;
            self.r += 1;
            if self.r >= self.max_belts {
                self.r = 0;
                self.n += 1;
            }
        }
        Some(sig)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SignatureGrid {}
