// crates/housefinder-core/src/loader/binary.rs
use crate::error::Result;
use crate::model::{Catalog, Location};
use bincode::Options;

/// Upper bound on the size of a snapshot we are willing to decode.
pub const SNAPSHOT_SIZE_LIMIT: u64 = 64 * 1024 * 1024;

fn options() -> impl Options {
    bincode::DefaultOptions::new().with_limit(SNAPSHOT_SIZE_LIMIT)
}

impl Catalog {
    /// Rebuilds a catalog from a binary snapshot written by
    /// [`Catalog::to_bytes`]. Records are validated again.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let locations: Vec<Location> = options().deserialize(data)?;
        Catalog::new(locations)
    }

    /// Serializes the catalog into a compact binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(options().serialize(self.locations())?)
    }
}
