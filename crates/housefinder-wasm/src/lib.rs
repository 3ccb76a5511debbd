//! housefinder-wasm — WebAssembly bindings for housefinder-core
//!
//! Exposes the query core to a browser UI. The page owns the form, the
//! cards and the map widgets; this module owns the catalog, the sticky
//! reference position and the search itself.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - Selector data: `get_regions()`, `get_sub_regions(region)`
//! - Geolocation hand-off: `set_reference_position(lat, lon)` from the
//!   success callback, `reference_position_failed(message)` from the error
//!   callback
//! - `search(region, sub_region, name)` returning at most 10 results, nearest
//!   first once a position is known
//! - `map_view(name, detail)` with the marker / route coordinates to draw
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { get_regions, search, set_reference_position } from 'housefinder-wasm';
//!
//! async function main() {
//!   await init();
//!   console.log(get_regions());
//!
//!   navigator.geolocation.getCurrentPosition(
//!     (p) => set_reference_position(p.coords.latitude, p.coords.longitude),
//!     (e) => reference_position_failed(e.message),
//!   );
//!
//!   const results = search('Gnaviyani', '', 'fish');
//!   console.log(results);
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - The catalog is the one compiled into `housefinder-core`; rebuild to
//!   refresh it.
//! - Exported functions return plain types or `JsValue` holding
//!   JSON-serializable arrays/objects. Errors surface as thrown JS errors.

use std::result::Result;
use std::sync::{Mutex, PoisonError};
use wasm_bindgen::prelude::*;

use housefinder_core::prelude::*;
use serde_json::json;
use serde_wasm_bindgen::to_value;

// Sticky reference position shared by every call from the page.
static REFERENCE: Mutex<Option<Coordinates>> = Mutex::new(None);

fn log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

fn catalog() -> Result<&'static Catalog, JsError> {
    Catalog::load_embedded().map_err(|e| JsError::new(&e.to_string()))
}

// A poisoned lock still holds a valid position.
fn reference() -> Option<Coordinates> {
    *REFERENCE.lock().unwrap_or_else(PoisonError::into_inner)
}

fn store_reference(position: Coordinates) {
    *REFERENCE.lock().unwrap_or_else(PoisonError::into_inner) = Some(position);
}

fn to_js<T: serde::Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    log("Initializing housefinder WASM module...");

    match Catalog::load_embedded() {
        Ok(catalog) => log(&format!("✓ Loaded {} houses", catalog.len())),
        Err(e) => log(&format!("✗ Catalog failed to load: {e}")),
    }
}

/* --------------------------------------------------------------------------
   Basic Queries
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn location_count() -> usize {
    Catalog::load_embedded().map(Catalog::len).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_stats() -> Result<JsValue, JsError> {
    let stats = catalog()?.stats();
    to_js(&json!({
        "regions": stats.regions,
        "sub_regions": stats.sub_regions,
        "locations": stats.locations
    }))
}

/* --------------------------------------------------------------------------
   Selectors
-------------------------------------------------------------------------- */

/// Atolls for the first selector.
#[wasm_bindgen]
pub fn get_regions() -> Result<JsValue, JsError> {
    to_js(&list_regions(catalog()?))
}

/// Islands of `region` for the second selector; empty until an atoll is
/// chosen.
#[wasm_bindgen]
pub fn get_sub_regions(region: &str) -> Result<JsValue, JsError> {
    to_js(&list_sub_regions(catalog()?, region))
}

/* --------------------------------------------------------------------------
   Geolocation hand-off
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn set_reference_position(latitude: f64, longitude: f64) -> Result<(), JsError> {
    let position = Coordinates::new(latitude, longitude);
    if !position.is_valid() {
        return Err(JsError::new(&format!("invalid position {position}")));
    }
    store_reference(position);
    Ok(())
}

/// Called from the geolocation error callback. Whatever position was set
/// before stays in use; without one, results remain unranked.
#[wasm_bindgen]
pub fn reference_position_failed(message: &str) {
    log(&format!("Geolocation unavailable: {message}"));
}

#[wasm_bindgen]
pub fn has_reference_position() -> bool {
    reference().is_some()
}

/* --------------------------------------------------------------------------
   Search + Map
-------------------------------------------------------------------------- */

/// Runs a search; empty strings leave a field unconstrained.
#[wasm_bindgen]
pub fn search(region: &str, sub_region: &str, name: &str) -> Result<JsValue, JsError> {
    let mut finder = Finder::new(catalog()?);
    if let Some(position) = reference() {
        finder.set_reference(position);
    }
    let criteria = Criteria {
        region: region.to_string(),
        sub_region: sub_region.to_string(),
        name: name.to_string(),
    };

    let array = js_sys::Array::new();
    for hit in finder.submit(&criteria).results() {
        array.push(&to_js(hit)?);
    }
    Ok(array.into())
}

/// Map view for the house called `name`; `detail` selects the full-size map.
#[wasm_bindgen]
pub fn map_view(name: &str, detail: bool) -> Result<JsValue, JsError> {
    let mut finder = Finder::new(catalog()?);
    if let Some(position) = reference() {
        finder.set_reference(position);
    }
    let mode = if detail {
        MapMode::Detail
    } else {
        MapMode::Preview
    };
    let view = finder
        .map_view(name, mode)
        .map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn reference_survives_poisoned_lock() {
        let _ = thread::spawn(|| {
            let _guard = REFERENCE.lock();
            panic!("poison the reference lock");
        })
        .join();
        assert!(REFERENCE.is_poisoned());

        let here = Coordinates::new(-0.3090, 73.4400);
        store_reference(here);
        assert_eq!(reference(), Some(here));
        assert!(has_reference_position());
    }
}
