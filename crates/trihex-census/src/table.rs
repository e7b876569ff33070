//! Signature tables.
//!
//! Each row lists a signature with its two alternates plus the shared
//! hexagon and vertex counts, in the column layout
//! `s1,b1,f1,s2,b2,f2,s3,b3,f3,hexagons,vertices`
//! (spine, belts, offset per reading).

use std::cmp::Reverse;
use std::io::Write;

use serde::Serialize;
use trihex_signature::{alternates, sorted_orbit3, Signature, SignatureGrid};

use crate::{CensusConfig, Result};

/// CSV header for signature tables.
pub const SIGNATURE_TABLE_HEADER: &str = "s1,b1,f1,s2,b2,f2,s3,b3,f3,hexagons,vertices";

/// Three readings of one trihex with its sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SignatureRow {
    /// Spine length, first reading
    pub s1: u64,
    /// Belts, first reading
    pub b1: u64,
    /// Offset, first reading
    pub f1: u64,
    /// Spine length, second reading
    pub s2: u64,
    /// Belts, second reading
    pub b2: u64,
    /// Offset, second reading
    pub f2: u64,
    /// Spine length, third reading
    pub s3: u64,
    /// Belts, third reading
    pub b3: u64,
    /// Offset, third reading
    pub f3: u64,
    /// Hexagons shared by all readings
    pub hexagons: u64,
    /// Vertices, `2 * hexagons + 4`
    pub vertices: u64,
}

impl SignatureRow {
    /// Row for three readings of the same trihex.
    pub fn new(first: Signature, second: Signature, third: Signature) -> Self {
        let (s1, b1, f1) = first.as_tuple();
        let (s2, b2, f2) = second.as_tuple();
        let (s3, b3, f3) = third.as_tuple();
        Self {
            s1,
            b1,
            f1,
            s2,
            b2,
            f2,
            s3,
            b3,
            f3,
            hexagons: first.hexagon_count(),
            vertices: first.vertex_count(),
        }
    }
}

/// One row per grid signature: the signature followed by its alternates.
pub fn alternate_signature_table(config: &CensusConfig) -> Result<Vec<SignatureRow>> {
    let grid = SignatureGrid::new(config.max_spine, config.max_belts);
    let mut rows = Vec::with_capacity(grid.len());
    for sig in grid {
        let alts = alternates(sig)?;
        rows.push(SignatureRow::new(sig, alts.second, alts.third));
    }
    tracing::info!(rows = rows.len(), "built alternate signature table");
    Ok(rows)
}

/// One row per trihex, readings sorted by `(r, k)`.
///
/// A trihex gets its row when the grid reaches the middle reading of its
/// sorted orbit. Rows are ordered by hexagon count, then longest spine
/// first, then belts and offset.
pub fn sorted_signature_table(config: &CensusConfig) -> Result<Vec<SignatureRow>> {
    let mut rows = Vec::new();
    for sig in SignatureGrid::new(config.max_spine, config.max_belts) {
        let [first, middle, last] = sorted_orbit3(sig)?;
        if sig == middle {
            rows.push(SignatureRow::new(first, middle, last));
        }
    }
    rows.sort_by_key(|row| (row.hexagons, Reverse(row.s1), row.b1, row.f1));
    tracing::info!(rows = rows.len(), "built sorted signature table");
    Ok(rows)
}

/// Write rows as CSV with the [`SIGNATURE_TABLE_HEADER`] header.
///
/// The header is written even when `rows` is empty.
pub fn write_signature_csv<W: Write>(rows: &[SignatureRow], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(SIGNATURE_TABLE_HEADER.split(','))?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
