// crates/housefinder-core/src/loader/builder.rs
#![cfg(feature = "builder")]

//! Turns a JSON catalog into a validated binary snapshot.

use super::{common_io, CatalogFormat};
use crate::error::{FinderError, Result};
use crate::model::{Catalog, CatalogStats};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression as GzLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    #[default]
    None,
    Gzip,
}

/// Reads the JSON catalog at `source` (`.json` or `.json.gz`), validates it
/// and writes a binary snapshot to `out`.
///
/// Returns the statistics of the written catalog.
pub fn build_catalog(source: &Path, out: &Path, compression: Compression) -> Result<CatalogStats> {
    let gzip = match CatalogFormat::from_path(source)? {
        CatalogFormat::Json { gzip } => gzip,
        CatalogFormat::Binary { .. } => {
            return Err(FinderError::UnsupportedFormat(format!(
                "{} is already a binary snapshot",
                source.display()
            )))
        }
    };

    let reader = common_io::open_stream(source, gzip)?;
    let catalog = Catalog::from_json_reader(reader)?;
    catalog.save_as(out, compression)?;

    let stats = catalog.stats();
    info!(
        source = %source.display(),
        out = %out.display(),
        ?compression,
        locations = stats.locations,
        "built catalog snapshot"
    );
    Ok(stats)
}

impl Catalog {
    /// Writes the catalog as a binary snapshot, optionally gzip-compressed.
    pub fn save_as(&self, path: impl AsRef<Path>, compression: Compression) -> Result<()> {
        let bytes = self.to_bytes()?;
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);

        match compression {
            Compression::None => {
                writer.write_all(&bytes)?;
                writer.flush()?;
            }
            Compression::Gzip => {
                #[cfg(feature = "compact")]
                {
                    let mut encoder = GzEncoder::new(writer, GzLevel::default());
                    encoder.write_all(&bytes)?;
                    encoder.finish()?.flush()?;
                }
                #[cfg(not(feature = "compact"))]
                {
                    return Err(FinderError::UnsupportedFormat(
                        "gzip requested but the 'compact' feature is disabled".into(),
                    ));
                }
            }
        }
        Ok(())
    }
}
