// crates/housefinder-core/src/finder.rs

//! Per-session state a front-end keeps around the pure query functions.

use crate::error::{FinderError, Result};
use crate::index::{list_regions, list_sub_regions};
use crate::map::{MapMode, MapView};
use crate::model::{Catalog, CatalogStats, Coordinates, Criteria, RankedLocation};
use crate::rank::rank;
use crate::search::search;
use tracing::{debug, warn};

/// Outcome of the most recent submission.
///
/// Keeps "nothing searched yet" apart from "searched, zero results".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState<'c> {
    #[default]
    Idle,
    Searched(Vec<RankedLocation<'c>>),
}

impl<'c> SearchState<'c> {
    /// Results of the last search; empty when idle.
    pub fn results(&self) -> &[RankedLocation<'c>] {
        match self {
            SearchState::Idle => &[],
            SearchState::Searched(results) => results,
        }
    }

    pub fn has_searched(&self) -> bool {
        matches!(self, SearchState::Searched(_))
    }
}

/// A user session over a borrowed catalog.
///
/// Holds the sticky reference position: once set it is used by every later
/// [`Finder::submit`] until overwritten. A failed geolocation attempt does not
/// clear it.
#[derive(Debug, Clone)]
pub struct Finder<'c> {
    catalog: &'c Catalog,
    reference: Option<Coordinates>,
    state: SearchState<'c>,
}

impl<'c> Finder<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            reference: None,
            state: SearchState::Idle,
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn stats(&self) -> CatalogStats {
        self.catalog.stats()
    }

    pub fn regions(&self) -> Vec<&'c str> {
        list_regions(self.catalog)
    }

    pub fn sub_regions(&self, region: &str) -> Vec<&'c str> {
        list_sub_regions(self.catalog, region)
    }

    pub fn reference(&self) -> Option<Coordinates> {
        self.reference
    }

    pub fn set_reference(&mut self, position: Coordinates) {
        debug!(%position, "reference position set");
        self.reference = Some(position);
    }

    /// Records a geolocation failure. Ranking keeps using whatever reference
    /// was set before, or stays off if there was none.
    pub fn reference_failed(&mut self, reason: &str) {
        warn!(reason, kept = self.reference.is_some(), "geolocation unavailable");
    }

    /// Runs a search with `criteria`, ranks it against the current reference
    /// and replaces the previous outcome.
    pub fn submit(&mut self, criteria: &Criteria) -> &SearchState<'c> {
        let hits = search(self.catalog, criteria);
        self.state = SearchState::Searched(rank(hits, self.reference));
        &self.state
    }

    pub fn state(&self) -> &SearchState<'c> {
        &self.state
    }

    /// Map view for the location called `name` (case-insensitive), with the
    /// current reference position if any.
    pub fn map_view(&self, name: &str, mode: MapMode) -> Result<MapView> {
        let location = self
            .catalog
            .find_by_name(name)
            .ok_or_else(|| FinderError::NotFound(format!("no location named '{name}'")))?;
        Ok(MapView::new(location, self.reference, mode))
    }
}
