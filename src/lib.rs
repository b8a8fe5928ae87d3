//! Umweltzone Map Core.
//! Entscheidungslogik für den Startzustand der Kartenansicht als Library.

pub mod core;
pub mod map;
pub mod prefs;
pub mod text;

pub use crate::core::{
    AdministrativeZone, BoundingBox, CameraPosition, GeoPoint, RenderBounds, ZoneNumber,
};
pub use map::{CenterZoneRequest, MapReadyEvaluator, MapReadyListener, ZoneProvider};
pub use prefs::{MapPrefs, PreferencesHelper};
