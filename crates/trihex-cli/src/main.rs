//! trihex binary
//!
//! Driver for the trihex census: takes ranges from a config file, the
//! environment or flags, and prints or exports the results.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trihex_census::{
    alternate_signature_table, counts_without_godseyes, deviance, sorted_signature_table,
    write_bound_csv, write_signature_csv, CensusConfig, TrihexCounts,
};
use trihex_signature::{
    alternates, canonical, is_achiral, orbit3, orbit6, signatures_for_hexagon_count,
    unique_signatures, MirrorPolicy, Signature,
};

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trihex=info,trihex_census=info,trihex_signature=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    run(Cli::parse())
}

/// Census ranges from `--config`, or from the environment without one.
/// Only the census subcommands call this.
fn load_config(path: Option<&Path>) -> Result<CensusConfig> {
    match path {
        Some(path) => CensusConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => CensusConfig::from_env().context("reading TRIHEX_* environment"),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Alternates { n, r, k } => {
            let sig = Signature::new(n, r, k)?;
            let alts = alternates(sig)?;
            emit(cli.json, &alts, || {
                println!("{} -> {}, {}", sig, alts.second, alts.third);
            })
        }
        Commands::Canonical { n, r, k, collapse_mirrors } => {
            let sig = Signature::new(n, r, k)?;
            let policy = MirrorPolicy::from_collapse(collapse_mirrors);
            let orbit = match policy {
                MirrorPolicy::Distinct => orbit3(sig)?,
                MirrorPolicy::Collapse => orbit6(sig)?,
            };
            let report = CanonicalReport {
                signature: sig,
                policy,
                canonical: canonical(sig, policy)?,
                orbit: orbit.members().to_vec(),
                achiral: is_achiral(sig)?,
                hexagons: sig.hexagon_count(),
                vertices: sig.vertex_count(),
            };
            emit(cli.json, &report, || {
                println!("signature: {}", report.signature);
                println!("canonical: {}", report.canonical);
                let members: Vec<String> = report.orbit.iter().map(Signature::to_string).collect();
                println!("orbit:     {}", members.join(" "));
                println!("achiral:   {}", report.achiral);
                println!("hexagons:  {}  vertices: {}", report.hexagons, report.vertices);
            })
        }
        Commands::Enumerate { hexagons, unique, collapse_mirrors } => {
            let sigs = if unique {
                unique_signatures(hexagons, MirrorPolicy::from_collapse(collapse_mirrors))?
            } else {
                signatures_for_hexagon_count(hexagons)
            };
            emit(cli.json, &sigs, || {
                for sig in &sigs {
                    println!("{}", sig);
                }
                println!("{} signature(s) with {} hexagons", sigs.len(), hexagons);
            })
        }
        Commands::Counts { bound } => {
            let config = load_config(config_path)?;
            let bound = bound.unwrap_or(config.hexagon_count_bound);
            let counts = TrihexCounts::compute(bound)?;
            let no_godseyes = counts_without_godseyes(&counts.beta);
            let report = CountsReport {
                alpha: &counts.alpha,
                beta: &counts.beta,
                beta_without_godseyes: &no_godseyes,
            };
            emit(cli.json, &report, || {
                println!("mirrors distinct:            {:?}", counts.alpha);
                println!("mirrors collapsed:           {:?}", counts.beta);
                println!("collapsed, godseyes omitted: {:?}", no_godseyes);
            })
        }
        Commands::Table { sorted, max_spine, max_belts, output } => {
            let mut config = load_config(config_path)?;
            config.max_spine = max_spine.unwrap_or(config.max_spine);
            config.max_belts = max_belts.unwrap_or(config.max_belts);
            config.validate()?;

            let rows = if sorted {
                sorted_signature_table(&config)?
            } else {
                alternate_signature_table(&config)?
            };
            if cli.json {
                return print_json(&rows);
            }
            match output {
                Some(path) => {
                    write_signature_csv(&rows, create(&path)?)?;
                    tracing::info!(path = %path.display(), rows = rows.len(), "wrote signature table");
                }
                None => write_signature_csv(&rows, io::stdout().lock())?,
            }
            Ok(())
        }
        Commands::Bounds { bound, output } => {
            let config = load_config(config_path)?;
            let bound = bound.unwrap_or(config.hexagon_count_bound);
            let rows = TrihexCounts::compute(bound)?.bound_rows();
            if cli.json {
                return print_json(&rows);
            }
            match output {
                Some(path) => {
                    write_bound_csv(&rows, create(&path)?)?;
                    tracing::info!(path = %path.display(), rows = rows.len(), "wrote bound table");
                }
                None => write_bound_csv(&rows, io::stdout().lock())?,
            }
            Ok(())
        }
        Commands::Deviance { min, bound, collapse_mirrors } => {
            let mut config = load_config(config_path)?;
            config.deviance_min = min.unwrap_or(config.deviance_min);
            config.hexagon_count_bound = bound.unwrap_or(config.hexagon_count_bound);
            config.validate()?;

            let counts = TrihexCounts::compute(config.hexagon_count_bound)?;
            let policy = MirrorPolicy::from_collapse(collapse_mirrors);
            let stats = deviance(&counts, policy, config.deviance_min, config.hexagon_count_bound)?;
            emit(cli.json, &stats, || {
                println!("max gap:                {} (at h = {})", stats.max_gap, stats.max_gap_at);
                println!("deviant counts:         {} ({:.3})", stats.deviant, stats.deviant_fraction);
                println!(
                    "max percent gap:        {:.4} (at h = {})",
                    stats.max_percent_gap, stats.max_percent_gap_at
                );
                println!(
                    "percent-deviant counts: {} ({:.3})",
                    stats.percent_deviant, stats.percent_deviant_fraction
                );
                println!("vertices:               {}..={}", stats.min_vertices, stats.max_vertices);
            })
        }
    }
}

#[derive(Serialize)]
struct CanonicalReport {
    signature: Signature,
    policy: MirrorPolicy,
    canonical: Signature,
    orbit: Vec<Signature>,
    achiral: bool,
    hexagons: u64,
    vertices: u64,
}

#[derive(Serialize)]
struct CountsReport<'a> {
    alpha: &'a [usize],
    beta: &'a [usize],
    beta_without_godseyes: &'a [usize],
}

/// Print `value` as JSON, or run the plain-text printer.
fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce()) -> Result<()> {
    if json {
        print_json(value)
    } else {
        text();
        Ok(())
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    Ok(BufWriter::new(file))
}
