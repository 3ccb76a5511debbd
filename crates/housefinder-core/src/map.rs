// crates/housefinder-core/src/map.rs

//! Renderer-agnostic description of a map view for one location.
//!
//! The renderer (Leaflet in the browser, a terminal, anything else) only
//! needs the points to draw: a marker for the location and, when the user's
//! position is known, a second marker and the line between the two.

use crate::geo::distance_km;
use crate::model::{Coordinates, Location};
use crate::traits::Positioned;
use serde::Serialize;

/// Label of the marker placed on the reference position.
pub const REFERENCE_LABEL: &str = "You are here";

/// Which surface the view is for. Only the zoom level differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MapMode {
    /// Small, static thumbnail on a result card.
    #[default]
    Preview,
    /// Full interactive map.
    Detail,
}

impl MapMode {
    pub fn zoom(self) -> u8 {
        match self {
            MapMode::Preview => 15,
            MapMode::Detail => 16,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub label: String,
    pub position: Coordinates,
}

/// Everything a renderer needs to draw a location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub mode: MapMode,
    pub center: Coordinates,
    pub zoom: u8,
    pub target: Marker,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Marker>,
    /// `[reference, target]` when a reference is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<[Coordinates; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl MapView {
    pub fn new(location: &Location, reference: Option<Coordinates>, mode: MapMode) -> Self {
        let position = location.coordinates();

        MapView {
            mode,
            center: position,
            zoom: mode.zoom(),
            target: Marker {
                label: location.name().to_string(),
                position,
            },
            reference: reference.map(|p| Marker {
                label: REFERENCE_LABEL.to_string(),
                position: p,
            }),
            route: reference.map(|p| [p, position]),
            distance_km: reference.map(|p| distance_km(p, position)),
        }
    }
}
