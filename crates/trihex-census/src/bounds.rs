//! Trihex counts against divisor-sum bounds.
//!
//! With `h` hexagons, `(n + 1)(r + 1) = h/2 + 1` and each divisor pair
//! contributes `n + 1` offsets, so there are `σ(h/2 + 1)` signatures. Orbits
//! hold at most 3 (or 6) of them, which bounds the counts from below:
//! - `α(h) ≥ ceil(σ/3)`, mirror images distinct
//! - `β(h) ≥ ceil(σ/6)`, mirror images collapsed
//!
//! Vertex counts are `v = 2h + 4`.

use std::io::Write;

use serde::Serialize;
use trihex_signature::{count_up_to, divisor_sum, MirrorPolicy, MIRROR_ORBIT_SIZE, ORBIT_SIZE};

use crate::Result;

/// CSV header for the bound table.
pub const BOUND_TABLE_HEADER: &str = "h,v,alpha,omega/3,beta,omega/6";

/// `ceil(sigma / orbit_size)`, the fewest trihexes `sigma` signatures can form.
///
/// # Examples
///
/// ```
/// use trihex_census::orbit_bound;
///
/// assert_eq!(orbit_bound(12, 3), 4);
/// assert_eq!(orbit_bound(13, 3), 5);
/// assert_eq!(orbit_bound(0, 6), 0);
/// ```
pub const fn orbit_bound(sigma: u64, orbit_size: u64) -> u64 {
    (sigma + orbit_size - 1) / orbit_size
}

/// Vertices of a trihex with `h` hexagons.
#[inline]
pub const fn vertices_for_hexagons(h: u64) -> u64 {
    2 * h + 4
}

/// Counts for every hexagon count `0..=bound`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrihexCounts {
    /// Trihexes per hexagon count, mirror images distinct
    pub alpha: Vec<usize>,
    /// Trihexes per hexagon count, mirror images collapsed
    pub beta: Vec<usize>,
    /// `σ(h/2 + 1)` for even `h`, 0 for odd `h`
    pub sigma: Vec<u64>,
}

impl TrihexCounts {
    /// Count trihexes through `bound` hexagons under both policies.
    pub fn compute(bound: u64) -> Result<Self> {
        let alpha = count_up_to(bound, MirrorPolicy::Distinct)?;
        let beta = count_up_to(bound, MirrorPolicy::Collapse)?;
        let sigma = (0..=bound)
            .map(|h| if h % 2 == 0 { divisor_sum(h / 2 + 1) } else { 0 })
            .collect();
        tracing::info!(bound, "computed trihex counts");
        Ok(Self { alpha, beta, sigma })
    }

    /// Largest hexagon count covered.
    pub fn bound(&self) -> u64 {
        self.alpha.len().saturating_sub(1) as u64
    }

    /// Counts under `policy`.
    pub fn counts(&self, policy: MirrorPolicy) -> &[usize] {
        match policy {
            MirrorPolicy::Distinct => &self.alpha,
            MirrorPolicy::Collapse => &self.beta,
        }
    }

    /// One bound row per even hexagon count.
    pub fn bound_rows(&self) -> Vec<BoundRow> {
        (0..self.alpha.len())
            .step_by(2)
            .map(|h| BoundRow {
                h: h as u64,
                v: vertices_for_hexagons(h as u64),
                alpha: self.alpha[h],
                sigma_third: orbit_bound(self.sigma[h], ORBIT_SIZE as u64),
                beta: self.beta[h],
                sigma_sixth: orbit_bound(self.sigma[h], MIRROR_ORBIT_SIZE as u64),
            })
            .collect()
    }
}

/// Collapsed counts with the godseye removed: each even hexagon count has
/// exactly one, odd counts have none.
pub fn counts_without_godseyes(beta: &[usize]) -> Vec<usize> {
    beta.iter()
        .enumerate()
        .map(|(h, &count)| if h % 2 == 0 { count.saturating_sub(1) } else { 0 })
        .collect()
}

/// One line of the bound table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundRow {
    /// Hexagons
    pub h: u64,
    /// Vertices
    pub v: u64,
    /// Count with mirror images distinct
    pub alpha: usize,
    /// `ceil(σ/3)`
    pub sigma_third: u64,
    /// Count with mirror images collapsed
    pub beta: usize,
    /// `ceil(σ/6)`
    pub sigma_sixth: u64,
}

/// Write bound rows as CSV with the [`BOUND_TABLE_HEADER`] header.
pub fn write_bound_csv<W: Write>(rows: &[BoundRow], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(BOUND_TABLE_HEADER.split(','))?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
