use clap::{Parser, Subcommand};
use housefinder_core::Coordinates;
use std::path::PathBuf;

/// CLI arguments for housefinder
#[derive(Debug, Parser)]
#[command(
    name = "housefinder",
    version,
    about = "Look up houses by atoll, island and name, optionally nearest first"
)]
pub struct CliArgs {
    /// Catalog file (.json, .json.gz, .bin, .bin.gz); defaults to the bundled catalog
    #[arg(short = 'i', long = "input", env = "HOUSEFINDER_CATALOG", global = true)]
    pub input: Option<PathBuf>,

    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the catalog contents
    Stats,

    /// List all atolls
    Regions,

    /// List the islands of an atoll
    SubRegions {
        /// Atoll name (exact, case-sensitive)
        region: String,
    },

    /// Search the catalog (at most 10 results)
    Search {
        /// Atoll to restrict to (exact match)
        #[arg(short = 'r', long = "region", default_value = "")]
        region: String,

        /// Island to restrict to (exact match)
        #[arg(short = 's', long = "sub-region", default_value = "")]
        sub_region: String,

        /// Substring of the house name (case-insensitive)
        #[arg(short = 'n', long = "name", default_value = "")]
        name: String,

        /// Your position as "LAT,LON"; ranks results nearest first
        #[arg(long = "near", allow_hyphen_values = true)]
        near: Option<Coordinates>,

        /// Print results as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Print the map view (markers and route) for a house as JSON
    Map {
        /// House name (case-insensitive, exact)
        name: String,

        /// Your position as "LAT,LON"; adds a marker and a connecting line
        #[arg(long = "near", allow_hyphen_values = true)]
        near: Option<Coordinates>,

        /// Full-size map instead of the card preview
        #[arg(long = "detail")]
        detail: bool,
    },

    /// Validate a JSON catalog and write it as a binary snapshot
    Build {
        /// Source catalog (.json or .json.gz)
        #[arg(long = "source")]
        source: PathBuf,

        /// Output snapshot path (.bin or .bin.gz)
        #[arg(short = 'o', long = "output")]
        output: PathBuf,

        /// Gzip-compress the snapshot
        #[arg(long = "gzip")]
        gzip: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn parses_search_with_negative_latitude() {
        let args = CliArgs::try_parse_from([
            "housefinder",
            "search",
            "--region",
            "Gnaviyani",
            "--near",
            "-0.3090,73.4400",
        ])
        .unwrap();

        match args.command {
            Commands::Search { region, near, .. } => {
                assert_eq!(region, "Gnaviyani");
                assert_eq!(near, Some(Coordinates::new(-0.3090, 73.4400)));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_coordinates() {
        let res = CliArgs::try_parse_from(["housefinder", "search", "--near", "north"]);
        assert!(res.is_err());
    }

    #[test]
    fn global_input_after_subcommand() {
        let args = CliArgs::try_parse_from(["housefinder", "regions", "-i", "houses.bin"]).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("houses.bin")));
    }
}
