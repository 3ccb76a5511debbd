//! housefinder prelude: bring common types and functions into scope for
//! front-ends and demos.

#![allow(unused_imports)]

pub use crate::error::{FinderError, Result};
pub use crate::finder::{Finder, SearchState};
pub use crate::geo::distance_km;
pub use crate::index::{list_regions, list_sub_regions};
pub use crate::map::{MapMode, MapView, Marker};
pub use crate::model::{
    Catalog, CatalogStats, Coordinates, Criteria, Location, RankedLocation,
};
pub use crate::rank::rank;
pub use crate::search::{search, MAX_RESULTS};
pub use crate::traits::{NameMatch, Positioned};
