//! Orbits and canonical representatives.
//!
//! The orbit of a signature is every signature naming the same trihex:
//! itself and its two alternates (at most 3), plus the mirror image and its
//! alternates when mirrors are collapsed (at most 6). The canonical
//! representative is the member with the smallest `(r, k)`.
//!
//! Within one orbit all members share the hexagon count, so equal `r`
//! forces equal `n` and the `(r, k)` order is total on the orbit.

use crate::{alternates, mirror, Result, Signature, MIRROR_ORBIT_SIZE, ORBIT_SIZE};

/// Whether a trihex and its mirror image count as one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MirrorPolicy {
    /// Chiral pairs are two trihexes (orbits of up to 3 signatures).
    #[default]
    Distinct,
    /// Chiral pairs are one trihex (orbits of up to 6 signatures).
    Collapse,
}

impl MirrorPolicy {
    /// Policy for a `collapse_mirrors` flag.
    pub const fn from_collapse(collapse_mirrors: bool) -> Self {
        if collapse_mirrors {
            Self::Collapse
        } else {
            Self::Distinct
        }
    }

    /// Largest possible orbit under this policy.
    pub const fn max_orbit_size(&self) -> usize {
        match self {
            Self::Distinct => ORBIT_SIZE,
            Self::Collapse => MIRROR_ORBIT_SIZE,
        }
    }
}

/// The distinct signatures of one trihex, in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Orbit {
    members: Vec<Signature>,
}

impl Orbit {
    fn from_members(mut members: Vec<Signature>) -> Self {
        members.sort_by(Signature::canonical_cmp);
        members.dedup();
        Self { members }
    }

    /// The canonical representative (smallest `(r, k)`).
    pub fn representative(&self) -> Signature {
        // An orbit always holds at least its seed signature.
        self.members[0]
    }

    /// Members in canonical order, without repeats.
    pub fn members(&self) -> &[Signature] {
        &self.members
    }

    /// Number of distinct members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Never true; every orbit contains its seed.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether `sig` names the same trihex.
    pub fn contains(&self, sig: &Signature) -> bool {
        self.members.contains(sig)
    }

    /// Iterate over the members in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Signature> {
        self.members.iter()
    }
}

/// The signature and its two alternates.
pub fn orbit3(sig: Signature) -> Result<Orbit> {
    Ok(Orbit::from_members(sorted_orbit3(sig)?.to_vec()))
}

/// [`orbit3`] of the signature united with [`orbit3`] of its mirror.
pub fn orbit6(sig: Signature) -> Result<Orbit> {
    Ok(Orbit::from_members(sorted_orbit6(sig)?.to_vec()))
}

/// The three readings of `sig` sorted by `(r, k)`, repeats kept.
///
/// Element 0 is the canonical representative.
pub fn sorted_orbit3(sig: Signature) -> Result<[Signature; ORBIT_SIZE]> {
    let alts = alternates(sig)?;
    let mut readings = [sig, alts.second, alts.third];
    readings.sort_by(Signature::canonical_cmp);
    Ok(readings)
}

/// The six readings of `sig` and its mirror sorted by `(r, k)`, repeats kept.
pub fn sorted_orbit6(sig: Signature) -> Result<[Signature; MIRROR_ORBIT_SIZE]> {
    let reflected = mirror(sig);
    let direct = alternates(sig)?;
    let mirrored = alternates(reflected)?;
    let mut readings = [
        sig,
        direct.second,
        direct.third,
        reflected,
        mirrored.second,
        mirrored.third,
    ];
    readings.sort_by(Signature::canonical_cmp);
    Ok(readings)
}

/// Canonical representative of `sig` under `policy`.
pub fn canonical(sig: Signature, policy: MirrorPolicy) -> Result<Signature> {
    let representative = match policy {
        MirrorPolicy::Distinct => sorted_orbit3(sig)?[0],
        MirrorPolicy::Collapse => sorted_orbit6(sig)?[0],
    };
    tracing::trace!(%sig, %representative, ?policy, "canonicalized");
    Ok(representative)
}

/// Canonical representative with mirror images kept distinct.
#[inline]
pub fn canonical3(sig: Signature) -> Result<Signature> {
    canonical(sig, MirrorPolicy::Distinct)
}

/// Canonical representative with mirror images collapsed.
#[inline]
pub fn canonical6(sig: Signature) -> Result<Signature> {
    canonical(sig, MirrorPolicy::Collapse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sig(n: u64, r: u64, k: u64) -> Signature {
        Signature::new(n, r, k).unwrap()
    }

    fn arb_signature() -> impl Strategy<Value = Signature> {
        (0u64..16, 0u64..16, any::<u64>()).prop_map(|(n, r, k)| sig(n, r, k % (n + 1)))
    }

    #[test]
    fn origin_is_fixed_point() {
        assert_eq!(canonical3(Signature::ORIGIN).unwrap(), Signature::ORIGIN);
        assert_eq!(canonical6(Signature::ORIGIN).unwrap(), Signature::ORIGIN);
        assert_eq!(orbit6(Signature::ORIGIN).unwrap().len(), 1);
    }

    #[test]
    fn eight_hexagon_representatives() {
        assert_eq!(canonical3(sig(4, 0, 0)).unwrap(), sig(4, 0, 0));
        assert_eq!(canonical3(sig(0, 4, 0)).unwrap(), sig(4, 0, 0));
        assert_eq!(canonical3(sig(4, 0, 4)).unwrap(), sig(4, 0, 0));
        assert_eq!(canonical3(sig(4, 0, 1)).unwrap(), sig(4, 0, 1));
        assert_eq!(canonical3(sig(4, 0, 3)).unwrap(), sig(4, 0, 1));
    }

    #[test]
    fn smallest_offset_breaks_ties() {
        // (4,0,1), (4,0,2), (4,0,3) all have r = 0
        let sorted = sorted_orbit3(sig(4, 0, 3)).unwrap();
        assert_eq!(sorted, [sig(4, 0, 1), sig(4, 0, 2), sig(4, 0, 3)]);
    }

    #[test]
    fn sorted_orbit_keeps_repeats() {
        let sorted = sorted_orbit3(Signature::ORIGIN).unwrap();
        assert_eq!(sorted, [Signature::ORIGIN; 3]);
        assert_eq!(orbit3(Signature::ORIGIN).unwrap().members(), &[Signature::ORIGIN]);
    }

    #[test]
    fn mirror_collapse_joins_chiral_pair() {
        // (5,0,2) and (5,0,3) are mirror images of one chiral trihex
        let left = sig(5, 0, 2);
        let right = sig(5, 0, 3);
        assert_ne!(canonical3(left).unwrap(), canonical3(right).unwrap());
        assert_eq!(canonical6(left).unwrap(), canonical6(right).unwrap());

        let orbit = orbit6(left).unwrap();
        assert_eq!(orbit.len(), 6);
        assert!(orbit.contains(&right));
        assert_eq!(orbit.representative(), sig(5, 0, 2));
    }

    #[test]
    fn achiral_orbit6_equals_orbit3() {
        let s = sig(4, 0, 1);
        assert_eq!(orbit6(s).unwrap(), orbit3(s).unwrap());
    }

    #[test]
    fn orbit_members_in_canonical_order() {
        let orbit = orbit3(sig(2, 1, 0)).unwrap();
        let members: Vec<_> = orbit.iter().copied().collect();
        assert_eq!(members, vec![sig(5, 0, 2), sig(2, 1, 0), sig(1, 2, 1)]);
        assert!(!orbit.is_empty());
    }

    #[test]
    fn policy_orbit_sizes() {
        assert_eq!(MirrorPolicy::Distinct.max_orbit_size(), 3);
        assert_eq!(MirrorPolicy::Collapse.max_orbit_size(), 6);
        assert_eq!(MirrorPolicy::from_collapse(true), MirrorPolicy::Collapse);
        assert_eq!(MirrorPolicy::from_collapse(false), MirrorPolicy::Distinct);
    }

    proptest! {
        #[test]
        fn canonical_is_idempotent(s in arb_signature()) {
            let c3 = canonical3(s).unwrap();
            prop_assert_eq!(canonical3(c3).unwrap(), c3);
            let c6 = canonical6(s).unwrap();
            prop_assert_eq!(canonical6(c6).unwrap(), c6);
        }

        #[test]
        fn canonical_is_orbit_invariant(s in arb_signature()) {
            let c3 = canonical3(s).unwrap();
            for member in orbit3(s).unwrap().iter() {
                prop_assert_eq!(canonical3(*member).unwrap(), c3);
            }
            let c6 = canonical6(s).unwrap();
            for member in orbit6(s).unwrap().iter() {
                prop_assert_eq!(canonical6(*member).unwrap(), c6);
            }
        }

        #[test]
        fn orbit_sizes_bounded(s in arb_signature()) {
            let o3 = orbit3(s).unwrap();
            let o6 = orbit6(s).unwrap();
            prop_assert!(o3.len() <= ORBIT_SIZE);
            prop_assert!(o6.len() <= MIRROR_ORBIT_SIZE);
            prop_assert!(o3.iter().all(|m| o6.contains(m)));
            prop_assert!(o6.iter().all(|m| m.hexagon_count() == s.hexagon_count()));
        }
    }
}
