use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "trihex")]
#[command(author, version, about = "Enumerate and canonicalize trihex signatures")]
#[command(propagate_version = true)]
pub struct Cli {
    /// JSON config file with census ranges (defaults come from TRIHEX_* env vars)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the two alternate signatures of (n, r, k)
    Alternates {
        /// Spine length
        n: u64,
        /// Belt count
        r: u64,
        /// Offset (0..=n)
        k: u64,
    },

    /// Show the orbit and canonical representative of (n, r, k)
    Canonical {
        /// Spine length
        n: u64,
        /// Belt count
        r: u64,
        /// Offset (0..=n)
        k: u64,

        /// Count mirror images as the same trihex
        #[arg(long)]
        collapse_mirrors: bool,
    },

    /// List signatures with a given number of hexagons
    Enumerate {
        /// Number of hexagons
        hexagons: u64,

        /// Only one signature per trihex
        #[arg(long)]
        unique: bool,

        /// Count mirror images as the same trihex (with --unique)
        #[arg(long, requires = "unique")]
        collapse_mirrors: bool,
    },

    /// Count trihexes for every hexagon count up to a bound
    Counts {
        /// Largest hexagon count
        #[arg(long)]
        bound: Option<u64>,
    },

    /// Write the signature table for the spine x belt grid
    Table {
        /// One row per trihex with readings sorted, rows ordered by hexagons
        #[arg(long)]
        sorted: bool,

        /// Spine lengths 0..max_spine
        #[arg(long)]
        max_spine: Option<u64>,

        /// Belt counts 0..max_belts
        #[arg(long)]
        max_belts: Option<u64>,

        /// CSV file to write (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write counts against divisor-sum lower bounds
    Bounds {
        /// Largest hexagon count
        #[arg(long)]
        bound: Option<u64>,

        /// CSV file to write (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Summarize how far counts exceed their lower bounds
    Deviance {
        /// First hexagon count of the window
        #[arg(long)]
        min: Option<u64>,

        /// Last hexagon count of the window
        #[arg(long)]
        bound: Option<u64>,

        /// Count mirror images as the same trihex
        #[arg(long)]
        collapse_mirrors: bool,
    },
}
