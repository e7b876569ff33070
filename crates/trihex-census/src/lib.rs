//! Trihex Census
//!
//! Tables and statistics built on top of the signature arithmetic in
//! `trihex-signature`.
//!
//! # Tables
//!
//! - **Alternate signature table**: every signature of a spine × belt grid
//!   next to its two alternates.
//! - **Sorted signature table**: one row per trihex, readings in canonical
//!   order, rows ordered by hexagon count.
//! - **Bound table**: counts α (mirrors distinct) and β (mirrors collapsed)
//!   per even hexagon count against `ceil(σ/3)` and `ceil(σ/6)`.
//!
//! # Deviance
//!
//! How often, and by how much, the counts exceed their lower bounds over a
//! window of hexagon counts.
//!
//! All ranges come from a [`CensusConfig`].

mod error;
mod config;
mod table;
mod bounds;
mod deviance;

pub use error::{Error, Result};
pub use config::CensusConfig;
pub use table::{
    SignatureRow, SIGNATURE_TABLE_HEADER, alternate_signature_table, sorted_signature_table,
    write_signature_csv,
};
pub use bounds::{
    BoundRow, TrihexCounts, BOUND_TABLE_HEADER, counts_without_godseyes, orbit_bound,
    vertices_for_hexagons, write_bound_csv,
};
pub use deviance::{DevianceStats, DEVIANT_GAP, DEVIANT_PERCENT_GAP, deviance};
