//! Fleet Lead Scoring CLI
//!
//! Scores ZIP codes into maintenance severity leads for sales triage.

#![deny(warnings)]

// Global invariants enforced:
// - Deterministic output ordering
// - Identical input yields byte-for-byte identical output

use anyhow::Context;
use clap::{Parser, Subcommand};
use fleetlead_core::{
    geo, render_json, render_summary, render_text, score_many_with_options, ScoreOptions,
};
use std::path::PathBuf;

/// Demo roster covering every scoring heuristic
const DEMO_ZIPS: &[&str] = &[
    "60601", // Chicago (salt belt + urban)
    "10001", // New York (salt belt + dense urban)
    "80202", // Denver (high altitude)
    "98101", // Seattle (coastal + cold)
    "33101", // Miami (heat + coastal)
    "48201", // Detroit (salt belt + urban)
    "85001", // Phoenix (heat)
    "55401", // Minneapolis (cold + salt)
    "84101", // Salt Lake City (terrain)
    "59601", // Helena (rural + cold)
];

#[derive(Parser)]
#[command(name = "fleetlead")]
#[command(about = "Fleet lead scoring: maintenance severity scores by ZIP code")]
#[command(version = env!("FLEETLEAD_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a batch of ZIP codes and rank the leads
    Score {
        /// Comma-separated ZIP codes (e.g. 60601,10001,90210)
        #[arg(long)]
        zips: Option<String>,

        /// File with one ZIP code per line
        #[arg(long)]
        file: Option<PathBuf>,

        /// Score a built-in demo roster
        #[arg(long)]
        demo: bool,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Show only the top N leads
        #[arg(long)]
        top: Option<usize>,

        /// Drop leads below this total severity score
        #[arg(long)]
        min_score: Option<u32>,
    },
    /// Print the geographic reference record for one ZIP code
    Lookup {
        /// ZIP code to look up
        zip: String,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Summary,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            zips,
            file,
            demo,
            format,
            top,
            min_score,
        } => {
            let zip_codes = collect_zip_codes(zips, file, demo)?;

            let options = ScoreOptions { min_score, top };
            let records = score_many_with_options(&zip_codes, options);

            let dropped = zip_codes.len().saturating_sub(records.len());
            if dropped > 0 && min_score.is_none() && top.is_none() {
                eprintln!("note: {} zip(s) had no reference data", dropped);
            }

            match format {
                OutputFormat::Text => print!("{}", render_text(&records)),
                OutputFormat::Json => println!("{}", render_json(&records)),
                OutputFormat::Summary => print!("{}", render_summary(&records)),
            }
        }
        Commands::Lookup { zip } => match geo::lookup(zip.trim()) {
            Some(record) => {
                println!("{} - {}, {}", record.zip, record.city, record.state);
                println!("  coordinates: {:.4}, {:.4}", record.lat, record.lon);
                println!("  population density: {:.1}/sq mi", record.population_density);
            }
            None => {
                println!("{}: no reference data", zip.trim());
            }
        },
    }

    Ok(())
}

/// Resolve the ZIP list from exactly one of --zips, --file, --demo
fn collect_zip_codes(
    zips: Option<String>,
    file: Option<PathBuf>,
    demo: bool,
) -> anyhow::Result<Vec<String>> {
    match (zips, file, demo) {
        (Some(list), None, false) => Ok(list
            .split(',')
            .map(|z| z.trim().to_string())
            .filter(|z| !z.is_empty())
            .collect()),
        (None, Some(path), false) => {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read zip file: {}", path.display()))?;
            Ok(contents
                .lines()
                .map(|line| line.trim().to_string())
                .filter(|line| !line.is_empty())
                .collect())
        }
        (None, None, true) => Ok(DEMO_ZIPS.iter().map(|z| z.to_string()).collect()),
        _ => anyhow::bail!("specify exactly one of --zips, --file, or --demo"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_from_comma_list() {
        let zips = collect_zip_codes(Some("60601, 10001,,85001".to_string()), None, false).unwrap();
        assert_eq!(zips, vec!["60601", "10001", "85001"]);
    }

    #[test]
    fn test_collect_demo() {
        let zips = collect_zip_codes(None, None, true).unwrap();
        assert_eq!(zips.len(), DEMO_ZIPS.len());
    }

    #[test]
    fn test_requires_exactly_one_source() {
        assert!(collect_zip_codes(None, None, false).is_err());
        assert!(collect_zip_codes(Some("60601".to_string()), None, true).is_err());
    }
}
