//! Core-Domänentypen: Koordinaten, Bounding-Boxen, Kamera, Zonen.

pub mod camera;
pub mod geo;
pub mod zone;

pub use camera::CameraPosition;
pub use geo::{BoundingBox, GeoPoint, RenderBounds};
pub use zone::{AdministrativeZone, ZoneNumber};
