// crates/housefinder-core/src/loader/mod.rs

//! # Catalog Loader
//!
//! Handles the physical layer (files, decompression) and delegates to the
//! payload parsers (JSON vs binary snapshot). The default catalog is
//! compiled into the crate and parsed once per process.

use crate::error::{FinderError, Result};
use crate::model::{Catalog, Location};
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::Path;
use tracing::info;

mod binary;
#[cfg(feature = "builder")]
pub mod builder;
mod common_io;

pub use binary::SNAPSHOT_SIZE_LIMIT;

/// The catalog shipped with the crate (`data/houses.json`).
pub const EMBEDDED_CATALOG_JSON: &str = include_str!("../../data/houses.json");

// Single in-process cache so the embedded catalog is parsed only once.
static EMBEDDED: OnceCell<Catalog> = OnceCell::new();

/// On-disk catalog formats, picked from the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json { gzip: bool },
    Binary { gzip: bool },
}

impl CatalogFormat {
    /// `.json`, `.json.gz`, `.bin` or `.bin.gz`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        let format = if name.ends_with(".json.gz") {
            CatalogFormat::Json { gzip: true }
        } else if name.ends_with(".json") {
            CatalogFormat::Json { gzip: false }
        } else if name.ends_with(".bin.gz") {
            CatalogFormat::Binary { gzip: true }
        } else if name.ends_with(".bin") {
            CatalogFormat::Binary { gzip: false }
        } else {
            return Err(FinderError::UnsupportedFormat(format!(
                "{} (expected .json, .json.gz, .bin or .bin.gz)",
                path.display()
            )));
        };
        Ok(format)
    }

    fn is_gzip(self) -> bool {
        match self {
            CatalogFormat::Json { gzip } | CatalogFormat::Binary { gzip } => gzip,
        }
    }
}

impl Catalog {
    /// The catalog compiled into the crate.
    ///
    /// # Panics
    ///
    /// If the bundled `data/houses.json` is not a valid catalog. The file is
    /// fixed at build time and covered by the crate's tests; use
    /// [`Catalog::load_embedded`] to get the error instead.
    pub fn embedded() -> &'static Catalog {
        match Self::load_embedded() {
            Ok(catalog) => catalog,
            Err(e) => panic!("bundled catalog is invalid: {e}"),
        }
    }

    /// Fallible form of [`Catalog::embedded`].
    pub fn load_embedded() -> Result<&'static Catalog> {
        EMBEDDED.get_or_try_init(|| {
            let catalog = Catalog::from_json_str(EMBEDDED_CATALOG_JSON)?;
            info!(locations = catalog.len(), "loaded embedded catalog");
            Ok(catalog)
        })
    }

    /// Parses a JSON array of locations.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let locations: Vec<Location> = serde_json::from_str(json)?;
        Catalog::new(locations)
    }

    /// Parses a JSON array of locations from any reader.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let locations: Vec<Location> = serde_json::from_reader(reader)?;
        Catalog::new(locations)
    }

    /// Loads a catalog file, choosing the parser from its extension
    /// (see [`CatalogFormat::from_path`]).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = CatalogFormat::from_path(path)?;
        let mut reader = common_io::open_stream(path, format.is_gzip())?;

        let catalog = match format {
            CatalogFormat::Json { .. } => Catalog::from_json_reader(reader)?,
            CatalogFormat::Binary { .. } => {
                let mut data = Vec::new();
                reader.read_to_end(&mut data)?;
                Catalog::from_bytes(&data)?
            }
        };

        info!(
            path = %path.display(),
            ?format,
            locations = catalog.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }
}
