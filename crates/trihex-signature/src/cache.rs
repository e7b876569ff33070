//! Memoized canonicalization.
//!
//! Every member of an orbit has the same representative, so a miss fills in
//! the whole orbit at once. Results are identical to [`crate::canonical`].

use std::collections::HashMap;

use crate::{orbit3, orbit6, MirrorPolicy, Result, Signature};

/// Cache of canonical representatives keyed by signature and policy.
#[derive(Debug, Default)]
pub struct CanonicalCache {
    entries: HashMap<(Signature, MirrorPolicy), Signature>,
    hits: u64,
    misses: u64,
}

impl CanonicalCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical representative of `sig`, computing its orbit on a miss.
    pub fn canonical(&mut self, sig: Signature, policy: MirrorPolicy) -> Result<Signature> {
        if let Some(&representative) = self.entries.get(&(sig, policy)) {
            self.hits += 1;
            return Ok(representative);
        }
        self.misses += 1;

        let orbit = match policy {
            MirrorPolicy::Distinct => orbit3(sig)?,
            MirrorPolicy::Collapse => orbit6(sig)?,
        };
        let representative = orbit.representative();
        for member in orbit.iter() {
            self.entries.insert((*member, policy), representative);
        }
        Ok(representative)
    }

    /// Whether `sig` is its own representative.
    pub fn is_canonical(&mut self, sig: Signature, policy: MirrorPolicy) -> Result<bool> {
        Ok(self.canonical(sig, policy)? == sig)
    }

    /// Number of cached signatures.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that computed an orbit.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Drop all entries and counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
