// crates/housefinder-core/src/lib.rs

//! # housefinder-core
//!
//! Filter-and-rank query engine over a small, read-only catalog of named
//! locations (houses) grouped by region (atoll) and sub-region (island).
//!
//! The query functions are pure and take the catalog explicitly:
//!
//! ```rust
//! use housefinder_core::prelude::*;
//!
//! let catalog = Catalog::embedded();
//! let criteria = Criteria::default().name("fish");
//! let hits = search(catalog, &criteria);
//! assert_eq!(hits.len(), 1);
//!
//! let here = Coordinates::new(-0.3090, 73.4400);
//! let ranked = rank(hits, Some(here));
//! assert!(ranked[0].distance_km.is_some());
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod finder;
pub mod geo;
pub mod index;
pub mod loader; // The public loader
pub mod map;
pub mod model;
pub mod prelude;
pub mod rank;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::error::{FinderError, Result};
pub use crate::finder::{Finder, SearchState};
pub use crate::geo::{distance_km, EARTH_RADIUS_KM};
pub use crate::index::{list_regions, list_sub_regions};
pub use crate::map::{MapMode, MapView, Marker};
pub use crate::model::{Catalog, CatalogStats, Coordinates, Criteria, Location, RankedLocation};
pub use crate::rank::rank;
pub use crate::search::{search, MAX_RESULTS};
pub use crate::traits::{NameMatch, Positioned};
