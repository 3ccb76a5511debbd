// crates/housefinder-core/src/loader/common_io.rs
use crate::error::{FinderError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Opens `path` buffered, wrapped in a gzip decoder when `gzip` is set.
pub fn open_stream(path: &Path, gzip: bool) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        FinderError::NotFound(format!("Catalog not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if !gzip {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(FinderError::UnsupportedFormat(format!(
            "{} is gzip-compressed; enable the 'compact' feature",
            path.display()
        )))
    }
}
