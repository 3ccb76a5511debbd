//! housefinder — command-line front-end for housefinder-core
//!
//! Lets you browse the house catalog from a terminal: list atolls and
//! islands, search by atoll / island / name, rank results by distance from
//! where you are, and print the map view of a single house.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ housefinder stats
//!
//! - List atolls, then the islands of one atoll
//!   $ housefinder regions
//!   $ housefinder sub-regions Gnaviyani
//!
//! - Search by name, nearest first
//!   $ housefinder search --name fish --near=-0.3090,73.4400
//!
//! - Map view of a house as JSON
//!   $ housefinder map "Fish Market" --near=-0.3090,73.4400 --detail
//!
//! - Turn a JSON catalog into a binary snapshot
//!   $ housefinder build --source houses.json -o houses.bin.gz --gzip
//!
//! Data source
//! -----------
//!
//! Without `--input` (or `HOUSEFINDER_CATALOG`) the catalog bundled with
//! `housefinder-core` is used.
mod args;
mod output;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use housefinder_core::prelude::*;
use std::borrow::Cow;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);
    tracing::debug!(?args, "parsed arguments");

    let input = args.input.as_deref();

    match args.command {
        Commands::Stats => {
            let catalog = open_catalog(input)?;
            let stats = catalog.stats();
            println!("Catalog statistics:");
            println!("  Atolls: {}", stats.regions);
            println!("  Islands: {}", stats.sub_regions);
            println!("  Houses: {}", stats.locations);
        }

        Commands::Regions => {
            let catalog = open_catalog(input)?;
            for region in list_regions(&catalog) {
                println!("{region}");
            }
        }

        Commands::SubRegions { region } => {
            let catalog = open_catalog(input)?;
            let islands = list_sub_regions(&catalog, &region);
            if islands.is_empty() {
                eprintln!("No islands found for atoll: {region}");
            }
            for island in islands {
                println!("{island}");
            }
        }

        Commands::Search {
            region,
            sub_region,
            name,
            near,
            json,
        } => {
            let criteria = Criteria {
                region,
                sub_region,
                name,
            };
            let catalog = open_catalog(input)?;
            let mut finder = Finder::new(&catalog);
            if let Some(position) = near {
                finder.set_reference(position);
            }
            let results = finder.submit(&criteria).results();

            if json {
                println!("{}", serde_json::to_string_pretty(results)?);
            } else {
                print!("{}", output::render_results(results));
            }
        }

        Commands::Map { name, near, detail } => {
            let catalog = open_catalog(input)?;
            let mut finder = Finder::new(&catalog);
            if let Some(position) = near {
                finder.set_reference(position);
            }
            let mode = if detail {
                MapMode::Detail
            } else {
                MapMode::Preview
            };
            let view = finder.map_view(&name, mode)?;
            println!("{}", serde_json::to_string_pretty(&view)?);
        }

        Commands::Build {
            source,
            output,
            gzip,
        } => build(&source, &output, gzip)?,
    }

    Ok(())
}

/// The catalog at `input`, or the bundled one.
fn open_catalog(input: Option<&Path>) -> anyhow::Result<Cow<'static, Catalog>> {
    Ok(match input {
        Some(path) => Cow::Owned(Catalog::load_from_path(path)?),
        None => Cow::Borrowed(Catalog::load_embedded()?),
    })
}

/// Logs go to stderr so stdout stays clean for results.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}

#[cfg(feature = "builder")]
fn build(source: &Path, output: &Path, gzip: bool) -> anyhow::Result<()> {
    use housefinder_core::loader::builder::{build_catalog, Compression};

    let compression = if gzip {
        Compression::Gzip
    } else {
        Compression::None
    };
    let stats = build_catalog(source, output, compression)?;
    println!(
        "Wrote {} houses ({} atolls, {} islands) to {}",
        stats.locations,
        stats.regions,
        stats.sub_regions,
        output.display()
    );
    Ok(())
}

#[cfg(not(feature = "builder"))]
fn build(_source: &Path, _output: &Path, _gzip: bool) -> anyhow::Result<()> {
    anyhow::bail!("this binary was built without the 'builder' feature")
}
