//! Kartenansicht: Auswertung des Startzustands.

pub mod map_ready;

pub use map_ready::{CenterZoneRequest, MapReadyEvaluator, MapReadyListener, ZoneProvider};
