//! How far the counts sit above their divisor-sum lower bounds.
//!
//! Over the even hexagon counts of a window, with `d = 3` (mirrors distinct)
//! or `d = 6` (mirrors collapsed):
//!
//! ```text
//! gap(h)         = count(h) - ceil(σ(h/2 + 1) / d)
//! percent_gap(h) = gap(h) / (σ(h/2 + 1) / d)
//! ```
//!
//! A hexagon count is deviant when `gap > 1` and percent-deviant when
//! `percent_gap > 0.1`.

use serde::Serialize;
use trihex_signature::MirrorPolicy;

use crate::{orbit_bound, vertices_for_hexagons, Error, Result, TrihexCounts};

/// Gap threshold above which a hexagon count is deviant.
pub const DEVIANT_GAP: i64 = 1;

/// Relative gap threshold above which a hexagon count is percent-deviant.
pub const DEVIANT_PERCENT_GAP: f64 = 0.1;

/// Summary of gaps over a hexagon window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DevianceStats {
    /// Whether mirror images were counted separately
    pub policy: MirrorPolicy,
    /// First hexagon count examined
    pub min_hexagons: u64,
    /// Last hexagon count examined
    pub max_hexagons: u64,
    /// Vertices at `min_hexagons`
    pub min_vertices: u64,
    /// Vertices at `max_hexagons`
    pub max_vertices: u64,
    /// Largest gap (0 if no gap is positive)
    pub max_gap: i64,
    /// Hexagon count of the largest gap
    pub max_gap_at: u64,
    /// Hexagon counts with `gap > 1`
    pub deviant: usize,
    /// `deviant` over the number of even counts in the window
    pub deviant_fraction: f64,
    /// Largest relative gap (0 if no gap is positive)
    pub max_percent_gap: f64,
    /// Hexagon count of the largest relative gap
    pub max_percent_gap_at: u64,
    /// Hexagon counts with `percent_gap > 0.1`
    pub percent_deviant: usize,
    /// `percent_deviant` over the number of even counts in the window
    pub percent_deviant_fraction: f64,
}

/// Gap statistics for the even hexagon counts in `min_hexagons..=max_hexagons`.
///
/// An odd `min_hexagons` starts at the next even count. Fractions are taken
/// over the number of even counts in the window.
pub fn deviance(
    counts: &TrihexCounts,
    policy: MirrorPolicy,
    min_hexagons: u64,
    max_hexagons: u64,
) -> Result<DevianceStats> {
    if max_hexagons > counts.bound() {
        return Err(Error::OutOfRange {
            requested: max_hexagons,
            bound: counts.bound(),
        });
    }
    let start = min_hexagons + min_hexagons % 2;
    if start > max_hexagons {
        return Err(Error::InvalidConfig(format!(
            "no even hexagon count in {}..={}",
            min_hexagons, max_hexagons
        )));
    }

    let divisor = policy.max_orbit_size() as u64;
    let observed = counts.counts(policy);

    let mut stats = DevianceStats {
        policy,
        min_hexagons,
        max_hexagons,
        min_vertices: vertices_for_hexagons(min_hexagons),
        max_vertices: vertices_for_hexagons(max_hexagons),
        max_gap: 0,
        max_gap_at: 0,
        deviant: 0,
        deviant_fraction: 0.0,
        max_percent_gap: 0.0,
        max_percent_gap_at: 0,
        percent_deviant: 0,
        percent_deviant_fraction: 0.0,
    };

    let mut window = 0usize;
    for h in (start..=max_hexagons).step_by(2) {
        let sigma = counts.sigma[h as usize];
        let gap = observed[h as usize] as i64 - orbit_bound(sigma, divisor) as i64;
        let percent_gap = gap as f64 / (sigma as f64 / divisor as f64);
        window += 1;

        if gap > DEVIANT_GAP {
            stats.deviant += 1;
        }
        if percent_gap > DEVIANT_PERCENT_GAP {
            stats.percent_deviant += 1;
        }
        // Strict comparisons keep the first occurrence of a maximum
        if gap > stats.max_gap {
            stats.max_gap = gap;
            stats.max_gap_at = h;
        }
        if percent_gap > stats.max_percent_gap {
            stats.max_percent_gap = percent_gap;
            stats.max_percent_gap_at = h;
        }
    }

    stats.deviant_fraction = stats.deviant as f64 / window as f64;
    stats.percent_deviant_fraction = stats.percent_deviant as f64 / window as f64;

    tracing::info!(
        ?policy,
        min_hexagons,
        max_hexagons,
        max_gap = stats.max_gap,
        deviant = stats.deviant,
        "computed deviance"
    );
    Ok(stats)
}
